pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub mod config;

#[cfg(feature = "cli")]
pub use config::{cli::StdoutSink, CliConfig};

pub use crate::core::printer::{Printer, WriteSink};
pub use domain::model::{ArgBag, Value};
pub use utils::error::{BagError, Result};
