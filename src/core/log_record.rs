//! Log record captured by the bundled sinks

use super::event_id::EventId;
use super::severity::Severity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::error::Error;

// Thread-local caches for thread information to avoid repeated allocations
thread_local! {
    static THREAD_ID_CACHE: RefCell<Option<String>> = const { RefCell::new(None) };
    static THREAD_NAME_CACHE: RefCell<Option<Option<String>>> = const { RefCell::new(None) };
}

/// Get cached thread ID, computing and caching it on first access
fn get_thread_id() -> String {
    THREAD_ID_CACHE.with(|cache| {
        cache
            .borrow_mut()
            .get_or_insert_with(|| format!("{:?}", std::thread::current().id()))
            .clone()
    })
}

/// Get cached thread name, computing and caching it on first access
fn get_thread_name() -> Option<String> {
    THREAD_NAME_CACHE.with(|cache| {
        cache
            .borrow_mut()
            .get_or_insert_with(|| std::thread::current().name().map(String::from))
            .clone()
    })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    pub timestamp: DateTime<Utc>,
    pub category: String,
    pub severity: Severity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<EventId>,
    pub message: String,
    /// Display text of the error, if one was logged
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Display text of each `source()` below the logged error
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub causes: Vec<String>,
    pub thread_id: String,
    pub thread_name: Option<String>,
}

impl LogRecord {
    pub fn new(category: impl Into<String>, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            category: category.into(),
            severity,
            event_id: None,
            message: message.into(),
            error: None,
            causes: Vec::new(),
            thread_id: get_thread_id(),
            thread_name: get_thread_name(),
        }
    }

    pub fn with_event_id(mut self, event_id: Option<EventId>) -> Self {
        self.event_id = event_id;
        self
    }

    /// Capture the error and its chain of sources as text
    pub fn with_error(mut self, error: Option<&(dyn Error + 'static)>) -> Self {
        if let Some(error) = error {
            self.error = Some(error.to_string());
            let mut cause = error.source();
            while let Some(inner) = cause {
                self.causes.push(inner.to_string());
                cause = inner.source();
            }
        }
        self
    }

    /// Thread name if set, otherwise the thread id
    pub fn thread_label(&self) -> &str {
        self.thread_name.as_deref().unwrap_or(&self.thread_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct Outer(Inner);

    #[derive(Debug)]
    struct Inner;

    impl fmt::Display for Outer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "request failed")
        }
    }

    impl fmt::Display for Inner {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "connection reset")
        }
    }

    impl Error for Outer {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            Some(&self.0)
        }
    }

    impl Error for Inner {}

    #[test]
    fn test_message_kept_verbatim() {
        let record = LogRecord::new("app", Severity::Information, "line one\nline two");
        assert_eq!(record.message, "line one\nline two");
    }

    #[test]
    fn test_error_chain_captured() {
        let error = Outer(Inner);
        let record = LogRecord::new("app", Severity::Error, "call failed").with_error(Some(&error));

        assert_eq!(record.error.as_deref(), Some("request failed"));
        assert_eq!(record.causes, vec!["connection reset".to_string()]);
    }

    #[test]
    fn test_thread_label_falls_back_to_id() {
        let handle = std::thread::spawn(|| LogRecord::new("app", Severity::Debug, "x"));
        let record = handle.join().unwrap();
        assert!(record.thread_name.is_none());
        assert_eq!(record.thread_label(), record.thread_id);
    }
}
