//! Output formatting: human (redis-cli style), JSON, raw.

use chronokv::{Error, TtlPolicy, VersionedEntry, WriteOrdering};
use serde_json::{json, Value as JsonValue};

use crate::state::{Output, StoreInfo};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
    Raw,
}

pub fn format_output(output: &Output, mode: OutputMode) -> String {
    match mode {
        OutputMode::Human => format_human(output),
        OutputMode::Json => format_json(output).to_string(),
        OutputMode::Raw => format_raw(output),
    }
}

pub fn format_error(err: &Error, mode: OutputMode) -> String {
    match mode {
        OutputMode::Human => format!("(error) {}", err),
        OutputMode::Json => json!({ "error": err.to_string() }).to_string(),
        OutputMode::Raw => err.to_string(),
    }
}

// =========================================================================
// Human
// =========================================================================

fn format_human(output: &Output) -> String {
    match output {
        Output::Ok => "OK".to_string(),
        Output::Value(Some(value)) => format!("{:?}", value),
        Output::Value(None) => "(nil)".to_string(),
        Output::Deleted(flag) | Output::Applied(flag) => {
            format!("(integer) {}", u8::from(*flag))
        }
        Output::Pairs(pairs) if pairs.is_empty() => "(empty list)".to_string(),
        Output::Pairs(pairs) => numbered(
            pairs
                .iter()
                .map(|(field, value)| format!("{:?}", format!("{}={}", field, value))),
        ),
        Output::History(entries) if entries.is_empty() => "(empty list)".to_string(),
        Output::History(entries) => numbered(entries.iter().map(describe_entry)),
        Output::Info(info) => format_info(info),
    }
}

fn numbered(lines: impl Iterator<Item = String>) -> String {
    lines
        .enumerate()
        .map(|(i, line)| format!("{}) {}", i + 1, line))
        .collect::<Vec<_>>()
        .join("\n")
}

fn describe_entry(entry: &VersionedEntry) -> String {
    let body = match entry.value() {
        Some(value) => format!("{:?}", value),
        None => "(deleted)".to_string(),
    };
    match entry.expiry {
        Some(expiry) => format!("@{} {} (expires {})", entry.write_ts, body, expiry),
        None => format!("@{} {}", entry.write_ts, body),
    }
}

fn format_info(info: &StoreInfo) -> String {
    let ordering = match info.config.ordering {
        WriteOrdering::Strict => "strict",
        WriteOrdering::Trusting => "trusting",
    };
    let ttl_policy = match info.config.ttl_policy {
        TtlPolicy::AllowNonPositive => "allow_non_positive",
        TtlPolicy::RequirePositive => "require_positive",
    };
    format!(
        "keys:{}\nversions:{}\nordering:{}\nttl_policy:{}",
        info.keys, info.versions, ordering, ttl_policy
    )
}

// =========================================================================
// JSON
// =========================================================================

fn format_json(output: &Output) -> JsonValue {
    match output {
        Output::Ok => json!("OK"),
        Output::Value(value) => json!(value),
        Output::Deleted(flag) | Output::Applied(flag) => json!(flag),
        Output::Pairs(pairs) => JsonValue::Array(
            pairs
                .iter()
                .map(|(field, value)| json!({ "field": field, "value": value }))
                .collect(),
        ),
        Output::History(entries) => json!(entries),
        Output::Info(info) => json!(info),
    }
}

// =========================================================================
// Raw
// =========================================================================

fn format_raw(output: &Output) -> String {
    match output {
        Output::Ok => String::new(),
        Output::Value(value) => value.clone().unwrap_or_default(),
        Output::Deleted(flag) | Output::Applied(flag) => u8::from(*flag).to_string(),
        Output::Pairs(pairs) => pairs
            .iter()
            .map(|(field, value)| format!("{}={}", field, value))
            .collect::<Vec<_>>()
            .join("\n"),
        Output::History(entries) => entries
            .iter()
            .map(|entry| {
                format!(
                    "{}\t{}\t{}",
                    entry.write_ts,
                    entry.value().unwrap_or(""),
                    entry.expiry.map(|e| e.to_string()).unwrap_or_default()
                )
            })
            .collect::<Vec<_>>()
            .join("\n"),
        Output::Info(info) => format!("{}\n{}", info.keys, info.versions),
    }
}
