pub mod printer;

pub use crate::domain::model::{ArgBag, Value, TYPE_LABEL};
pub use crate::domain::ports::Sink;
pub use crate::utils::error::Result;
