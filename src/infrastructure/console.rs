use crate::domain::ports::ConfirmationSink;
use crate::error::Result;
use std::io::Write;

/// Writes each confirmation as its own line to any `Write` target (e.g. Stdout).
pub struct ConsoleSink<W: Write> {
    writer: W,
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ConfirmationSink for ConsoleSink<W> {
    fn emit(&mut self, message: &str) -> Result<()> {
        writeln!(self.writer, "{message}")?;
        self.writer.flush()?;
        Ok(())
    }
}
