use crate::utils::error::Result;

/// Line-oriented output target. The printer's only I/O seam.
pub trait Sink {
    fn write_line(&mut self, line: &str) -> Result<()>;
}
