//! Output format configuration for log records
//!
//! - Text: Human-readable format (default)
//! - Json: Machine-readable JSON format
//! - Logfmt: Key-value format compatible with log aggregation tools

use super::log_record::LogRecord;
use super::timestamp::TimestampFormat;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `[2025-01-08T10:30:45.123Z] [INFO ] orders[42] main - Order placed`
    #[default]
    Text,

    /// `{"timestamp":"...","severity":"INFO","category":"orders","message":"Order placed"}`
    Json,

    /// `timestamp=... severity=INFO category=orders message="Order placed"`
    Logfmt,
}

impl OutputFormat {
    pub fn format(&self, record: &LogRecord, timestamp_format: &TimestampFormat) -> String {
        match self {
            OutputFormat::Text => format_text(record, timestamp_format, record.severity.to_str()),
            OutputFormat::Json => format_json(record, timestamp_format),
            OutputFormat::Logfmt => format_logfmt(record, timestamp_format),
        }
    }
}

/// Replace line breaks and tabs so one record stays on one line
pub(crate) fn sanitize(text: &str) -> String {
    text.replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

/// Render as text, with `level` already styled by the caller
pub(crate) fn format_text(
    record: &LogRecord,
    timestamp_format: &TimestampFormat,
    level: &str,
) -> String {
    let mut output = format!(
        "[{}] [{:5}] {}",
        timestamp_format.format(&record.timestamp),
        level,
        record.category
    );

    if let Some(ref event_id) = record.event_id {
        output.push_str(&format!("[{}]", event_id));
    }

    output.push_str(&format!(
        " {} - {}",
        record.thread_label(),
        sanitize(&record.message)
    ));

    if let Some(ref error) = record.error {
        output.push_str(&format!(" | error: {}", sanitize(error)));
        for cause in &record.causes {
            output.push_str(&format!(" <- {}", sanitize(cause)));
        }
    }

    output
}

fn format_json(record: &LogRecord, timestamp_format: &TimestampFormat) -> String {
    use serde_json::Value;

    let mut json_obj = serde_json::Map::new();
    json_obj.insert(
        "timestamp".to_string(),
        timestamp_format.to_json_value(&record.timestamp),
    );
    json_obj.insert(
        "severity".to_string(),
        Value::String(record.severity.to_str().to_string()),
    );
    json_obj.insert("category".to_string(), Value::String(record.category.clone()));
    if let Some(ref event_id) = record.event_id {
        json_obj.insert("event_id".to_string(), Value::Number(event_id.id.into()));
        if let Some(ref name) = event_id.name {
            json_obj.insert("event_name".to_string(), Value::String(name.clone()));
        }
    }
    json_obj.insert("message".to_string(), Value::String(record.message.clone()));
    if let Some(ref error) = record.error {
        json_obj.insert("error".to_string(), Value::String(error.clone()));
        if !record.causes.is_empty() {
            json_obj.insert(
                "causes".to_string(),
                Value::Array(record.causes.iter().cloned().map(Value::String).collect()),
            );
        }
    }
    json_obj.insert("thread_id".to_string(), Value::String(record.thread_id.clone()));
    if let Some(ref name) = record.thread_name {
        json_obj.insert("thread_name".to_string(), Value::String(name.clone()));
    }

    Value::Object(json_obj).to_string()
}

fn format_logfmt(record: &LogRecord, timestamp_format: &TimestampFormat) -> String {
    let mut parts = vec![
        format!(
            "timestamp={}",
            escape_logfmt_value(&timestamp_format.format(&record.timestamp))
        ),
        format!("severity={}", record.severity.to_str()),
        format!("category={}", escape_logfmt_value(&record.category)),
    ];

    if let Some(ref event_id) = record.event_id {
        parts.push(format!("event_id={}", event_id.id));
    }

    // Message is always quoted
    parts.push(format!("message={}", quote_logfmt_value(&record.message)));

    if let Some(ref error) = record.error {
        parts.push(format!("error={}", quote_logfmt_value(error)));
    }
    parts.push(format!("thread={}", escape_logfmt_value(record.thread_label())));

    parts.join(" ")
}

fn escape_logfmt_value(value: &str) -> String {
    if value.contains(' ') || value.contains('"') || value.contains('=') {
        quote_logfmt_value(value)
    } else {
        sanitize(value)
    }
}

fn quote_logfmt_value(value: &str) -> String {
    format!(
        "\"{}\"",
        sanitize(&value.replace('\\', "\\\\").replace('"', "\\\""))
    )
}
