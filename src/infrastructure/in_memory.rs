use crate::domain::ports::ConfirmationSink;
use crate::error::Result;

/// A sink that keeps every emitted line in memory, in order.
///
/// Ideal for tests or for callers that want the confirmation transcript as
/// data instead of console output.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    messages: Vec<String>,
}

impl RecordingSink {
    /// Creates a new, empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }
}

impl ConfirmationSink for RecordingSink {
    fn emit(&mut self, message: &str) -> Result<()> {
        self.messages.push(message.to_string());
        Ok(())
    }
}
