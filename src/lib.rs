//! # Application Logging Adapter
//!
//! Bridges an application-level logging interface ([`ApplicationLogger`])
//! onto a structured logging sink ([`StructuredLogger`]).
//!
//! ## Features
//!
//! - **Fixed level mapping**: every [`LogLevel`] translates to exactly one [`Severity`]
//! - **One call per log**: no buffering, filtering or retry in the adapter
//! - **Per-caller binding**: [`AdapterFactory`] creates one adapter per category
//! - **Bundled sinks**: in-memory, console and JSON-lines file loggers

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    #[cfg(feature = "console")]
    pub use crate::sinks::{ConsoleLogger, ConsoleLoggerProvider};
    pub use crate::sinks::{
        JsonFileLogger, JsonFileLoggerProvider, MemoryLogger, MemoryLoggerProvider,
    };
    pub use crate::core::{
        AdapterFactory, ApplicationLogger, EventId, LogLevel, LogRecord, LoggerAdapter,
        LoggerAdapterBuilder, LoggerError, LoggerProvider, OutputFormat, Result, Severity,
        StructuredLogger, TimestampFormat,
    };
}

pub use crate::core::{
    AdapterFactory, ApplicationLogger, EventId, LogLevel, LogRecord, LoggerAdapter,
    LoggerAdapterBuilder, LoggerError, LoggerProvider, OutputFormat, Result, Severity,
    StructuredLogger, TimestampFormat,
};
pub use crate::sinks::{JsonFileLogger, JsonFileLoggerProvider, MemoryLogger, MemoryLoggerProvider};

#[cfg(feature = "console")]
pub use crate::sinks::{ConsoleLogger, ConsoleLoggerProvider};
