pub mod cli;

use crate::core::{ArgBag, Value};
use crate::utils::error::{BagError, Result};
use crate::utils::validation::{validate_pair_syntax, validate_path, Validate};
use clap::Parser;
use std::fs;

#[derive(Debug, Clone, Parser)]
#[command(name = "arg-bag")]
#[command(about = "Prints named arguments as type-tagged key/value lines")]
pub struct CliConfig {
    /// Named arguments as KEY=VALUE pairs, printed in the order given
    #[arg(value_name = "KEY=VALUE")]
    pub pairs: Vec<String>,

    /// Read the argument bag from a JSON object file instead
    #[arg(long, conflicts_with = "pairs")]
    pub json_file: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Builds the bag from the configured source. With no pairs and no
    /// file, falls back to the built-in demo arguments.
    pub fn build_bag(&self) -> Result<ArgBag> {
        if let Some(path) = &self.json_file {
            tracing::debug!("Loading argument bag from {}", path);
            let json = fs::read_to_string(path)?;
            return ArgBag::from_json_str(&json);
        }

        if !self.pairs.is_empty() {
            let mut bag = ArgBag::new();
            for raw in &self.pairs {
                let (key, value) = parse_pair(raw)?;
                bag.insert(key, value);
            }
            return Ok(bag);
        }

        tracing::debug!("No arguments given, using demo bag");
        Ok(crate::bag! { name = "Honeybeei", age = 29, city = "Hamburg" })
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        for raw in &self.pairs {
            validate_pair_syntax(raw)?;
        }

        if let Some(path) = &self.json_file {
            validate_path("json_file", path)?;
        }

        Ok(())
    }
}

/// Splits `KEY=VALUE` and infers the value's scalar type the way a
/// dynamic call site would: bool, then integer, then float, then
/// string.
pub fn parse_pair(raw: &str) -> Result<(String, Value)> {
    let (key, value) = raw.split_once('=').ok_or_else(|| BagError::ParseError {
        input: raw.to_string(),
        reason: "expected KEY=VALUE".to_string(),
    })?;

    if key.trim().is_empty() {
        return Err(BagError::ParseError {
            input: raw.to_string(),
            reason: "key cannot be empty".to_string(),
        });
    }

    let value = if let Ok(b) = value.parse::<bool>() {
        Value::Bool(b)
    } else if let Ok(i) = value.parse::<i64>() {
        Value::Int(i)
    } else if let Ok(x) = value.parse::<f64>() {
        Value::Float(x)
    } else {
        Value::Str(value.to_string())
    };

    Ok((key.to_string(), value))
}
