//! JSON-lines file sink

use crate::core::{
    EventId, LogRecord, LoggerError, LoggerProvider, OutputFormat, Result, Severity,
    StructuredLogger, TimestampFormat,
};
use parking_lot::Mutex;
use std::error::Error;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Buffered file handle shared by every logger writing the same file
struct JsonWriter {
    path: PathBuf,
    writer: Mutex<BufWriter<File>>,
}

impl JsonWriter {
    fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                LoggerError::io_operation(
                    "opening log file",
                    format!("cannot open '{}'", path.display()),
                    e,
                )
            })?;

        Ok(Self {
            path: path.to_path_buf(),
            writer: Mutex::new(BufWriter::new(file)),
        })
    }

    fn write_line(&self, line: &str) -> Result<()> {
        let mut writer = self.writer.lock();
        writeln!(writer, "{}", line)?;
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        self.writer.lock().flush()?;
        Ok(())
    }
}

/// Appends one JSON object per record to a file (JSONL)
///
/// Compatible with log aggregation tools like ELK, Loki, etc.
pub struct JsonFileLogger {
    category: String,
    min_severity: Severity,
    timestamp_format: TimestampFormat,
    writer: Arc<JsonWriter>,
}

impl JsonFileLogger {
    pub fn new(category: impl Into<String>, path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self {
            category: category.into(),
            min_severity: Severity::Trace,
            timestamp_format: TimestampFormat::default(),
            writer: Arc::new(JsonWriter::open(path.as_ref())?),
        })
    }

    #[must_use]
    pub fn with_min_severity(mut self, severity: Severity) -> Self {
        self.min_severity = severity;
        self
    }

    /// Set the timestamp format, rejecting invalid `Custom` format strings
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Result<Self> {
        format.validate()?;
        self.timestamp_format = format;
        Ok(self)
    }

    pub fn path(&self) -> &Path {
        &self.writer.path
    }

    pub fn flush(&self) -> Result<()> {
        self.writer.flush()
    }
}

impl StructuredLogger for JsonFileLogger {
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
        self.writer
            .write_line(&OutputFormat::Json.format(&record, &self.timestamp_format))
    }

    fn is_enabled(&self, severity: Severity) -> bool {
        severity != Severity::None && severity >= self.min_severity
    }
}

/// Creates [`JsonFileLogger`]s that write to one shared file
pub struct JsonFileLoggerProvider {
    min_severity: Severity,
    timestamp_format: TimestampFormat,
    writer: Arc<JsonWriter>,
}

impl JsonFileLoggerProvider {
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self {
            min_severity: Severity::Trace,
            timestamp_format: TimestampFormat::default(),
            writer: Arc::new(JsonWriter::open(path.as_ref())?),
        })
    }

    #[must_use]
    pub fn with_min_severity(mut self, severity: Severity) -> Self {
        self.min_severity = severity;
        self
    }

    /// Set the timestamp format, rejecting invalid `Custom` format strings
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Result<Self> {
        format.validate()?;
        self.timestamp_format = format;
        Ok(self)
    }

    pub fn flush(&self) -> Result<()> {
        self.writer.flush()
    }
}

impl LoggerProvider for JsonFileLoggerProvider {
    fn create_logger(&self, category: &str) -> Arc<dyn StructuredLogger> {
        Arc::new(JsonFileLogger {
            category: category.to_string(),
            min_severity: self.min_severity,
            timestamp_format: self.timestamp_format.clone(),
            writer: Arc::clone(&self.writer),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_json_file_logger() -> Result<()> {
        let dir = tempdir()?;
        let log_path = dir.path().join("test.jsonl");

        let logger = JsonFileLogger::new("orders", &log_path)?;
        logger.log_with_event(Severity::Information, EventId::new(42), "Order placed")?;
        logger.flush()?;

        let content = fs::read_to_string(&log_path)?;
        let parsed: serde_json::Value = serde_json::from_str(content.trim_end())?;
        assert_eq!(parsed["category"], "orders");
        assert_eq!(parsed["event_id"], 42);
        assert_eq!(parsed["message"], "Order placed");

        Ok(())
    }

    #[test]
    fn test_provider_shares_file() -> Result<()> {
        let dir = tempdir()?;
        let log_path = dir.path().join("shared.jsonl");

        let provider = JsonFileLoggerProvider::new(&log_path)?.with_min_severity(Severity::Debug);
        provider.create_logger("a").log_message(Severity::Debug, "one")?;
        provider.create_logger("b").log_message(Severity::Trace, "filtered")?;
        provider.create_logger("b").log_message(Severity::Error, "two")?;
        provider.flush()?;

        let content = fs::read_to_string(&log_path)?;
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        for line in lines {
            let parsed: serde_json::Value = serde_json::from_str(line)?;
            assert!(parsed["message"].is_string());
        }

        Ok(())
    }

    #[test]
    fn test_open_failure_has_context() {
        let dir = tempdir().unwrap();
        let err = JsonFileLogger::new("x", dir.path().join("missing").join("file.jsonl"))
            .err()
            .unwrap();
        assert!(matches!(err, LoggerError::IoOperation { .. }));
    }
}
