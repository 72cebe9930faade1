//! Structured logger implementations shipped with the crate

pub mod json;
pub mod memory;

#[cfg(feature = "console")]
pub mod console;

pub use json::{JsonFileLogger, JsonFileLoggerProvider};
pub use memory::{MemoryLogger, MemoryLoggerProvider};

#[cfg(feature = "console")]
pub use console::{ConsoleLogger, ConsoleLoggerProvider};
