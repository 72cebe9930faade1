//! Core types and traits of the logging adapter

pub mod adapter;
pub mod application_logger;
pub mod error;
pub mod event_id;
pub mod log_level;
pub mod log_record;
pub mod output_format;
pub mod severity;
pub mod structured_logger;
pub mod timestamp;

pub use adapter::{AdapterFactory, LoggerAdapter, LoggerAdapterBuilder};
pub use application_logger::ApplicationLogger;
pub use error::{LoggerError, Result};
pub use event_id::EventId;
pub use log_level::LogLevel;
pub use log_record::LogRecord;
pub use output_format::OutputFormat;
pub use severity::Severity;
pub use structured_logger::{LoggerProvider, StructuredLogger};
pub use timestamp::TimestampFormat;
