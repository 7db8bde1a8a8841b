use serde::{Deserialize, Serialize};

/// A single order record read from one line of a JSONL feed.
///
/// Absent fields are substituted with documented defaults rather than
/// rejected, so a minimal `{}` line still deserializes. Unrecognized
/// fields are ignored. Records are never mutated after loading; the
/// pipeline only derives aggregates from them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Opaque order identifier. Defaults to `"unknown"` when absent.
    #[serde(default = "default_order_id")]
    pub id: String,
    /// Monetary amount in minor currency units (cents). Defaults to `0`.
    /// May be negative, which signals a data-quality problem rather than
    /// a parse error.
    #[serde(default)]
    pub amount_cents: i64,
    /// Sales channel name. May be absent, empty, or whitespace-only.
    #[serde(default)]
    pub marketplace: String,
    /// ISO-8601 creation timestamp, optionally `Z`-suffixed. Consumed
    /// only by the date filter; an absent value means the record is never
    /// excluded by it.
    #[serde(default)]
    pub created_at: Option<String>,
}

fn default_order_id() -> String {
    "unknown".to_string()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
