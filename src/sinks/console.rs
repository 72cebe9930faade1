//! Console sink

use crate::core::output_format::format_text;
use crate::core::{
    EventId, LogRecord, LoggerProvider, OutputFormat, Result, Severity, StructuredLogger,
    TimestampFormat,
};
use colored::Colorize;
use std::error::Error;
use std::io::Write;
use std::sync::Arc;

/// Writes records to stdout, or to stderr for `Error` and above.
#[derive(Debug, Clone)]
pub struct ConsoleLogger {
    category: String,
    min_severity: Severity,
    use_colors: bool,
    output_format: OutputFormat,
    timestamp_format: TimestampFormat,
}

impl ConsoleLogger {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            min_severity: Severity::Information,
            use_colors: true,
            output_format: OutputFormat::default(),
            timestamp_format: TimestampFormat::default(),
        }
    }

    #[must_use]
    pub fn with_min_severity(mut self, severity: Severity) -> Self {
        self.min_severity = severity;
        self
    }

    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Set the output format for this logger
    ///
    /// # Example
    ///
    /// ```
    /// use application_logging_adapter::sinks::ConsoleLogger;
    /// use application_logging_adapter::OutputFormat;
    ///
    /// let logger = ConsoleLogger::new("app").with_output_format(OutputFormat::Json);
    /// ```
    #[must_use]
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Set the timestamp format, rejecting invalid `Custom` format strings
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Result<Self> {
        format.validate()?;
        self.timestamp_format = format;
        Ok(self)
    }

    /// Render a record the way this logger prints it
    pub fn render(&self, record: &LogRecord) -> String {
        match self.output_format {
            OutputFormat::Text if self.use_colors => {
                let level = format!("{:5}", record.severity.to_str())
                    .color(record.severity.color_code())
                    .to_string();
                format_text(record, &self.timestamp_format, &level)
            }
            _ => self.output_format.format(record, &self.timestamp_format),
        }
    }

    fn with_category(&self, category: &str) -> Self {
        Self {
            category: category.to_string(),
            ..self.clone()
        }
    }
}

impl StructuredLogger for ConsoleLogger {
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
        let output = self.render(&record);

        match severity {
            Severity::Error | Severity::Critical => {
                writeln!(std::io::stderr().lock(), "{}", output)?
            }
            _ => writeln!(std::io::stdout().lock(), "{}", output)?,
        }
        Ok(())
    }

    fn is_enabled(&self, severity: Severity) -> bool {
        severity != Severity::None && severity >= self.min_severity
    }
}

/// Creates [`ConsoleLogger`]s that share one configuration
#[derive(Debug, Clone)]
pub struct ConsoleLoggerProvider {
    template: ConsoleLogger,
}

impl ConsoleLoggerProvider {
    /// Use `template`'s settings for every logger; its category is replaced
    pub fn new(template: ConsoleLogger) -> Self {
        Self { template }
    }
}

impl Default for ConsoleLoggerProvider {
    fn default() -> Self {
        Self::new(ConsoleLogger::new(""))
    }
}

impl LoggerProvider for ConsoleLoggerProvider {
    fn create_logger(&self, category: &str) -> Arc<dyn StructuredLogger> {
        Arc::new(self.template.with_category(category))
    }
}
