//! Adapters for the domain's [`ConfirmationSink`](crate::domain::ports::ConfirmationSink) port.

pub mod console;
pub mod in_memory;
