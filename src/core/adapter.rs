//! Adapter from the application logging interface to a structured logger

use super::{
    application_logger::ApplicationLogger,
    error::{LoggerError, Result},
    event_id::EventId,
    log_level::LogLevel,
    severity::Severity,
    structured_logger::{LoggerProvider, StructuredLogger},
};
use std::any::{type_name, Any};
use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Forwards [`ApplicationLogger`] calls to a [`StructuredLogger`].
///
/// Each call translates the [`LogLevel`] into a [`Severity`] and makes exactly
/// one call on the target. The `source` argument of the `*_from` methods is
/// accepted and discarded: structured loggers carry the caller's identity as
/// a category fixed when the logger is created, so bind one adapter per
/// calling component through [`AdapterFactory`] instead.
///
/// Errors from the target are returned unchanged. The adapter holds no
/// mutable state, so it is as thread safe as the target it wraps.
///
/// # Example
///
/// ```
/// use application_logging_adapter::prelude::*;
/// use std::sync::Arc;
///
/// let sink = Arc::new(MemoryLogger::new("billing"));
/// let adapter = LoggerAdapter::new(sink.clone());
///
/// adapter.log(LogLevel::Critical, "disk full").unwrap();
///
/// let records = sink.records();
/// assert_eq!(records[0].severity, Severity::Critical);
/// assert_eq!(records[0].message, "disk full");
/// ```
#[derive(Clone)]
pub struct LoggerAdapter {
    target: Arc<dyn StructuredLogger>,
}

impl LoggerAdapter {
    /// Wrap a shared structured logger
    #[must_use]
    pub fn new(target: Arc<dyn StructuredLogger>) -> Self {
        Self { target }
    }

    /// Create a builder for LoggerAdapter
    #[must_use]
    pub fn builder() -> LoggerAdapterBuilder {
        LoggerAdapterBuilder::new()
    }
}

impl fmt::Debug for LoggerAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerAdapter").finish_non_exhaustive()
    }
}

impl ApplicationLogger for LoggerAdapter {
    fn log(&self, level: LogLevel, text: &str) -> Result<()> {
        self.target.log_message(Severity::from(level), text)
    }

    fn log_from(&self, _source: &dyn Any, level: LogLevel, text: &str) -> Result<()> {
        self.target.log_message(Severity::from(level), text)
    }

    fn log_event(&self, event_id: i32, level: LogLevel, text: &str) -> Result<()> {
        self.target.log_with_event(Severity::from(level), EventId::from(event_id), text)
    }

    fn log_event_from(
        &self,
        _source: &dyn Any,
        event_id: i32,
        level: LogLevel,
        text: &str,
    ) -> Result<()> {
        self.target.log_with_event(Severity::from(level), EventId::from(event_id), text)
    }

    fn log_error(
        &self,
        level: LogLevel,
        text: &str,
        error: &(dyn Error + 'static),
    ) -> Result<()> {
        self.target.log_with_error(Severity::from(level), error, text)
    }

    fn log_error_from(
        &self,
        _source: &dyn Any,
        level: LogLevel,
        text: &str,
        error: &(dyn Error + 'static),
    ) -> Result<()> {
        self.target.log_with_error(Severity::from(level), error, text)
    }

    fn log_event_error(
        &self,
        event_id: i32,
        level: LogLevel,
        text: &str,
        error: &(dyn Error + 'static),
    ) -> Result<()> {
        self.target.log_with_event_and_error(
            Severity::from(level),
            EventId::from(event_id),
            error,
            text,
        )
    }

    fn log_event_error_from(
        &self,
        _source: &dyn Any,
        event_id: i32,
        level: LogLevel,
        text: &str,
        error: &(dyn Error + 'static),
    ) -> Result<()> {
        self.target.log_with_event_and_error(
            Severity::from(level),
            EventId::from(event_id),
            error,
            text,
        )
    }
}

/// Builder for constructing a LoggerAdapter
///
/// # Example
/// ```
/// use application_logging_adapter::prelude::*;
/// use std::sync::Arc;
///
/// let adapter = LoggerAdapter::builder()
///     .target(Arc::new(MemoryLogger::new("app")))
///     .build()
///     .unwrap();
///
/// assert!(LoggerAdapter::builder().build().is_err());
/// ```
#[derive(Default)]
pub struct LoggerAdapterBuilder {
    target: Option<Arc<dyn StructuredLogger>>,
}

impl LoggerAdapterBuilder {
    pub fn new() -> Self {
        Self { target: None }
    }

    /// Set the structured logger to forward to
    #[must_use = "builder methods return a new value"]
    pub fn target(mut self, target: Arc<dyn StructuredLogger>) -> Self {
        self.target = Some(target);
        self
    }

    /// Build the adapter, failing if no target was set
    pub fn build(self) -> Result<LoggerAdapter> {
        let target = self
            .target
            .ok_or_else(|| LoggerError::config("LoggerAdapter", "no target logger configured"))?;
        Ok(LoggerAdapter::new(target))
    }
}

/// Produces one [`LoggerAdapter`] per named caller.
///
/// # Example
/// ```
/// use application_logging_adapter::prelude::*;
/// use std::sync::Arc;
///
/// struct OrderService;
///
/// let provider = Arc::new(MemoryLoggerProvider::new());
/// let factory = AdapterFactory::new(provider.clone());
///
/// let adapter = factory.create_for::<OrderService>();
/// adapter.log(LogLevel::Information, "order placed").unwrap();
///
/// assert!(provider.records()[0].category.ends_with("OrderService"));
/// ```
#[derive(Clone)]
pub struct AdapterFactory {
    provider: Arc<dyn LoggerProvider>,
}

impl AdapterFactory {
    pub fn new(provider: Arc<dyn LoggerProvider>) -> Self {
        Self { provider }
    }

    /// Create an adapter whose records carry `category`
    pub fn create(&self, category: &str) -> LoggerAdapter {
        LoggerAdapter::new(self.provider.create_logger(category))
    }

    /// Create an adapter categorised by the type name of `T`
    pub fn create_for<T: ?Sized>(&self) -> LoggerAdapter {
        self.create(type_name::<T>())
    }
}

impl fmt::Debug for AdapterFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdapterFactory").finish_non_exhaustive()
    }
}
