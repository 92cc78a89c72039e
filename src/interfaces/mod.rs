//! User-facing surfaces that drive the application layer.

pub mod console;
