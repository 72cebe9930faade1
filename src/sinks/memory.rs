//! In-memory sink

use crate::core::{
    EventId, LogRecord, LoggerProvider, Result, Severity, StructuredLogger,
};
use parking_lot::Mutex;
use std::error::Error;
use std::sync::Arc;

type SharedRecords = Arc<Mutex<Vec<LogRecord>>>;

/// Keeps every enabled record in memory.
///
/// Useful in tests and for inspecting what an adapter forwarded.
pub struct MemoryLogger {
    category: String,
    min_severity: Severity,
    records: SharedRecords,
}

impl MemoryLogger {
    /// Create a logger that records every severity
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            min_severity: Severity::Trace,
            records: Arc::new(Mutex::new(Vec::new())),
        }
    }

    #[must_use]
    pub fn with_min_severity(mut self, severity: Severity) -> Self {
        self.min_severity = severity;
        self
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Snapshot of the captured records, oldest first
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl StructuredLogger for MemoryLogger {
    fn log(
        &self,
        severity: Severity,
        event_id: Option<EventId>,
        error: Option<&(dyn Error + 'static)>,
        message: &str,
    ) -> Result<()> {
        if !self.is_enabled(severity) {
            return Ok(());
        }

        let record = LogRecord::new(self.category.as_str(), severity, message)
            .with_event_id(event_id)
            .with_error(error);
        self.records.lock().push(record);
        Ok(())
    }

    fn is_enabled(&self, severity: Severity) -> bool {
        severity != Severity::None && severity >= self.min_severity
    }
}

/// Hands out [`MemoryLogger`]s that share one record store
#[derive(Clone)]
pub struct MemoryLoggerProvider {
    min_severity: Severity,
    records: SharedRecords,
}

impl MemoryLoggerProvider {
    pub fn new() -> Self {
        Self {
            min_severity: Severity::Trace,
            records: Arc::new(Mutex::new(Vec::new())),
        }
    }

    #[must_use]
    pub fn with_min_severity(mut self, severity: Severity) -> Self {
        self.min_severity = severity;
        self
    }

    /// Records from every logger this provider created
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().clone()
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl Default for MemoryLoggerProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerProvider for MemoryLoggerProvider {
    fn create_logger(&self, category: &str) -> Arc<dyn StructuredLogger> {
        Arc::new(MemoryLogger {
            category: category.to_string(),
            min_severity: self.min_severity,
            records: Arc::clone(&self.records),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let logger = MemoryLogger::new("test");
        logger.log_message(Severity::Debug, "first").unwrap();
        logger
            .log_with_event(Severity::Error, EventId::new(3), "second")
            .unwrap();

        let records = logger.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].message, "first");
        assert_eq!(records[1].event_id, Some(EventId::new(3)));
        assert_eq!(records[1].category, "test");
    }

    #[test]
    fn test_min_severity_filter() {
        let logger = MemoryLogger::new("test").with_min_severity(Severity::Warning);
        logger.log_message(Severity::Information, "dropped").unwrap();
        logger.log_message(Severity::Warning, "kept").unwrap();
        logger.log_message(Severity::None, "never").unwrap();

        assert_eq!(logger.len(), 1);
        assert_eq!(logger.records()[0].message, "kept");
    }

    #[test]
    fn test_clear() {
        let logger = MemoryLogger::new("test");
        logger.log_message(Severity::Trace, "x").unwrap();
        logger.clear();
        assert!(logger.is_empty());
    }

    #[test]
    fn test_provider_shares_store() {
        let provider = MemoryLoggerProvider::new().with_min_severity(Severity::Information);
        let a = provider.create_logger("a");
        let b = provider.create_logger("b");

        a.log_message(Severity::Information, "from a").unwrap();
        b.log_message(Severity::Debug, "filtered").unwrap();
        b.log_message(Severity::Critical, "from b").unwrap();

        let records = provider.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].category, "a");
        assert_eq!(records[1].category, "b");
    }
}
