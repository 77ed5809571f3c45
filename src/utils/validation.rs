use crate::utils::error::{BagError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_pair_syntax(raw: &str) -> Result<()> {
    match raw.split_once('=') {
        None => Err(BagError::ParseError {
            input: raw.to_string(),
            reason: "expected KEY=VALUE".to_string(),
        }),
        Some((key, _)) if key.trim().is_empty() => Err(BagError::ParseError {
            input: raw.to_string(),
            reason: "key cannot be empty".to_string(),
        }),
        Some(_) => Ok(()),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(BagError::ConfigError {
            message: format!("{} cannot be empty", field_name),
        });
    }

    if path.contains('\0') {
        return Err(BagError::ConfigError {
            message: format!("{} contains null bytes", field_name),
        });
    }

    Ok(())
}
