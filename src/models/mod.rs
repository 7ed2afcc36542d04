// src/models/mod.rs

//! Domain models for the collector application.

mod config;
mod site;
mod topic;

// Re-export all public types
pub use config::{ClientConfig, CollectConfig, Config, OutputConfig};
pub use site::SiteSummary;
pub use topic::{TopicSummary, project_topics};

use serde_json::Value;

/// Read a string field from a raw JSON mapping.
///
/// Absent or mistyped fields project to `None` rather than erroring.
pub(crate) fn str_field(raw: &Value, key: &str) -> Option<String> {
    raw.get(key).and_then(Value::as_str).map(str::to_owned)
}

/// Read an integer field from a raw JSON mapping.
pub(crate) fn int_field(raw: &Value, key: &str) -> Option<i64> {
    raw.get(key).and_then(Value::as_i64)
}

/// Read an unsigned integer field from a raw JSON mapping.
pub(crate) fn uint_field(raw: &Value, key: &str) -> Option<u64> {
    raw.get(key).and_then(Value::as_u64)
}

/// Read a boolean field from a raw JSON mapping.
pub(crate) fn bool_field(raw: &Value, key: &str) -> Option<bool> {
    raw.get(key).and_then(Value::as_bool)
}
