//! Usage event model for the append-only event log.

use serde::{Deserialize, Serialize};

/// A tracked usage event.
///
/// Events are append-only: once recorded they are never mutated, only pruned
/// by age. The optional metadata bag is free-form JSON supplied by the
/// caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Event {
    /// Free-form event tag, e.g. `registration` or `plan_generated`
    #[serde(rename = "type")]
    pub kind: String,

    /// Optional metadata bag
    #[serde(default)]
    pub meta: Option<serde_json::Value>,

    /// Timestamp in epoch milliseconds
    pub ts: i64,
}
