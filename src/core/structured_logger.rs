//! Structured logging interface consumed by the adapter

use super::{error::Result, event_id::EventId, severity::Severity};
use std::error::Error;
use std::sync::Arc;

/// A structured logging sink.
///
/// Implementations must be safe to call from several threads at once; the
/// adapter relies on that and adds no synchronisation of its own.
pub trait StructuredLogger: Send + Sync {
    /// Emit one record.
    fn log(
        &self,
        severity: Severity,
        event_id: Option<EventId>,
        error: Option<&(dyn Error + 'static)>,
        message: &str,
    ) -> Result<()>;

    /// Whether a record at `severity` would be written
    fn is_enabled(&self, severity: Severity) -> bool {
        severity != Severity::None
    }

    fn log_message(&self, severity: Severity, message: &str) -> Result<()> {
        self.log(severity, None, None, message)
    }

    fn log_with_event(&self, severity: Severity, event_id: EventId, message: &str) -> Result<()> {
        self.log(severity, Some(event_id), None, message)
    }

    fn log_with_error(
        &self,
        severity: Severity,
        error: &(dyn Error + 'static),
        message: &str,
    ) -> Result<()> {
        self.log(severity, None, Some(error), message)
    }

    fn log_with_event_and_error(
        &self,
        severity: Severity,
        event_id: EventId,
        error: &(dyn Error + 'static),
        message: &str,
    ) -> Result<()> {
        self.log(severity, Some(event_id), Some(error), message)
    }
}

/// Creates structured loggers bound to a category name.
///
/// A category identifies the component that owns the logger and is fixed
/// for the logger's lifetime.
pub trait LoggerProvider: Send + Sync {
    fn create_logger(&self, category: &str) -> Arc<dyn StructuredLogger>;
}
