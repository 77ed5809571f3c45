use crate::core::{ArgBag, Sink};
use crate::utils::error::Result;
use std::io::Write;

/// Emits a bag as text: one line naming the container type, then one
/// `"<name>: <value>"` line per entry in insertion order.
pub struct Printer<S: Sink> {
    sink: S,
}

impl<S: Sink> Printer<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Returns the number of pair-lines written. An empty bag yields
    /// the type line only.
    pub fn print_bag(&mut self, bag: &ArgBag) -> Result<usize> {
        tracing::debug!("Printing bag with {} entries", bag.len());

        self.sink.write_line(bag.type_label())?;

        let mut pair_lines = 0;
        for (key, value) in bag.iter() {
            self.sink.write_line(&format!("{}: {}", key, value))?;
            pair_lines += 1;
        }

        tracing::debug!("Wrote {} pair-lines", pair_lines);
        Ok(pair_lines)
    }

    pub fn into_inner(self) -> S {
        self.sink
    }
}

/// `Sink` over any writer. Tests run it against an in-memory buffer.
pub struct WriteSink<W: Write> {
    writer: W,
}

impl<W: Write> WriteSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Sink for WriteSink<W> {
    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{}", line)?;
        Ok(())
    }
}
