//! Application log level definitions

use super::error::LoggerError;
use super::severity::Severity;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity vocabulary used by application code.
///
/// Every variant maps onto exactly one [`Severity`]; see the `From` impl in
/// the severity module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[derive(Default)]
pub enum LogLevel {
    Debug = 0,
    #[default]
    Information = 1,
    Warning = 2,
    Error = 3,
    Critical = 4,
}

impl LogLevel {
    /// All levels in ascending order
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Debug,
        LogLevel::Information,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::Critical,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Information => "INFORMATION",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Critical => "CRITICAL",
        }
    }

    /// Translate into the structured logging vocabulary
    #[must_use]
    pub fn to_severity(self) -> Severity {
        self.into()
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::Debug),
            "INFORMATION" | "INFO" => Ok(LogLevel::Information),
            "WARNING" | "WARN" => Ok(LogLevel::Warning),
            "ERROR" => Ok(LogLevel::Error),
            "CRITICAL" | "FATAL" => Ok(LogLevel::Critical),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}

impl TryFrom<Severity> for LogLevel {
    type Error = LoggerError;

    fn try_from(severity: Severity) -> Result<Self, LoggerError> {
        match severity {
            Severity::Debug => Ok(LogLevel::Debug),
            Severity::Information => Ok(LogLevel::Information),
            Severity::Warning => Ok(LogLevel::Warning),
            Severity::Error => Ok(LogLevel::Error),
            Severity::Critical => Ok(LogLevel::Critical),
            Severity::Trace | Severity::None => Err(LoggerError::unmapped(severity)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(LogLevel::Debug < LogLevel::Information);
        assert!(LogLevel::Information < LogLevel::Warning);
        assert!(LogLevel::Warning < LogLevel::Error);
        assert!(LogLevel::Error < LogLevel::Critical);
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("info".parse::<LogLevel>(), Ok(LogLevel::Information));
        assert_eq!("Warn".parse::<LogLevel>(), Ok(LogLevel::Warning));
        assert_eq!("fatal".parse::<LogLevel>(), Ok(LogLevel::Critical));
        assert!("trace".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_try_from_severity() {
        for level in LogLevel::ALL {
            let back = LogLevel::try_from(level.to_severity()).unwrap();
            assert_eq!(back, level);
        }

        assert!(matches!(
            LogLevel::try_from(Severity::Trace),
            Err(LoggerError::UnmappedSeverity { .. })
        ));
        assert!(matches!(
            LogLevel::try_from(Severity::None),
            Err(LoggerError::UnmappedSeverity { .. })
        ));
    }

    #[test]
    fn test_default_is_information() {
        assert_eq!(LogLevel::default(), LogLevel::Information);
    }
}
