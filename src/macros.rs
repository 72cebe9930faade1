//! Logging macros for ergonomic message formatting.
//!
//! Each macro formats its arguments like `format!` and calls
//! [`ApplicationLogger::log`](crate::core::ApplicationLogger::log) on the
//! given logger, returning its `Result`.
//!
//! # Examples
//!
//! ```
//! use application_logging_adapter::prelude::*;
//! use application_logging_adapter::information;
//! use std::sync::Arc;
//!
//! let adapter = LoggerAdapter::new(Arc::new(MemoryLogger::new("server")));
//!
//! let port = 8080;
//! information!(adapter, "Server listening on port {}", port).unwrap();
//! ```

/// Log a formatted message at an explicit level.
///
/// # Examples
///
/// ```
/// # use application_logging_adapter::prelude::*;
/// # let adapter = LoggerAdapter::new(std::sync::Arc::new(MemoryLogger::new("app")));
/// use application_logging_adapter::log;
/// log!(adapter, LogLevel::Information, "Simple message").unwrap();
/// log!(adapter, LogLevel::Error, "Error code: {}", 500).unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        #[allow(unused_imports)]
        use $crate::core::ApplicationLogger as _;
        $logger.log($level, &format!($($arg)+))
    }};
}

#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

#[macro_export]
macro_rules! information {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Information, $($arg)+)
    };
}

#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warning, $($arg)+)
    };
}

#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a critical-level message.
///
/// # Examples
///
/// ```
/// # use application_logging_adapter::prelude::*;
/// # let adapter = LoggerAdapter::new(std::sync::Arc::new(MemoryLogger::new("app")));
/// use application_logging_adapter::critical;
/// critical!(adapter, "Unable to recover: {}", "disk full").unwrap();
/// ```
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Critical, $($arg)+)
    };
}
