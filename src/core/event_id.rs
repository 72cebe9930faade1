//! Event identifiers attached to structured log records

use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric tag used to correlate or filter records.
///
/// No validation or uniqueness is enforced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventId {
    pub id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl EventId {
    pub fn new(id: i32) -> Self {
        Self { id, name: None }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl From<i32> for EventId {
    fn from(id: i32) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{}:{}", self.id, name),
            None => write!(f, "{}", self.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_i32() {
        let event = EventId::from(-7);
        assert_eq!(event.id, -7);
        assert!(event.name.is_none());
        assert_eq!(event.to_string(), "-7");
    }

    #[test]
    fn test_named_display() {
        let event = EventId::new(42).with_name("disk_full");
        assert_eq!(event.to_string(), "42:disk_full");
    }
}
