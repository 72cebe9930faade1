//! Application-level logging interface

use super::{error::Result, log_level::LogLevel};
use std::any::Any;
use std::error::Error;

/// Logging surface used by application code.
///
/// The `*_from` variants take the object that is logging. Implementations
/// are free to ignore it.
pub trait ApplicationLogger: Send + Sync {
    fn log(&self, level: LogLevel, text: &str) -> Result<()>;

    fn log_from(&self, source: &dyn Any, level: LogLevel, text: &str) -> Result<()>;

    fn log_event(&self, event_id: i32, level: LogLevel, text: &str) -> Result<()>;

    fn log_event_from(
        &self,
        source: &dyn Any,
        event_id: i32,
        level: LogLevel,
        text: &str,
    ) -> Result<()>;

    fn log_error(&self, level: LogLevel, text: &str, error: &(dyn Error + 'static)) -> Result<()>;

    fn log_error_from(
        &self,
        source: &dyn Any,
        level: LogLevel,
        text: &str,
        error: &(dyn Error + 'static),
    ) -> Result<()>;

    fn log_event_error(
        &self,
        event_id: i32,
        level: LogLevel,
        text: &str,
        error: &(dyn Error + 'static),
    ) -> Result<()>;

    fn log_event_error_from(
        &self,
        source: &dyn Any,
        event_id: i32,
        level: LogLevel,
        text: &str,
        error: &(dyn Error + 'static),
    ) -> Result<()>;
}
