//! JSONL order loading for the orders analyzer.
//!
//! Reads one JSON object per non-blank line, converts each into an
//! [`Order`], and optionally drops records created before a cutoff date.

use std::io::BufRead;
use std::path::Path;

use chrono::{DateTime, Utc};
use orders_core::error::{AnalyzerError, Result};
use orders_core::models::Order;
use orders_core::time_utils::{parse_cutoff_date, parse_timestamp};
use tracing::{debug, warn};

// ── Public API ────────────────────────────────────────────────────────────────

/// Load and parse a JSONL order file, preserving file order.
///
/// * `path` – the input file, UTF-8 text, one JSON object per non-blank
///   line.
/// * `from_date` – optional cutoff in the exact `YYYY-MM-DD` pattern;
///   records created strictly before midnight UTC of that day are dropped.
///   Records without a `created_at` field always pass the filter.
///
/// Line numbers reported in [`AnalyzerError::MalformedRecord`] are 1-based
/// and count every physical line, blank ones included. A single malformed
/// line aborts the whole load; there is no skip-and-continue mode.
pub fn load_orders(path: &Path, from_date: Option<&str>) -> Result<Vec<Order>> {
    let cutoff: Option<DateTime<Utc>> = from_date.map(parse_cutoff_date).transpose()?;

    let file = std::fs::File::open(path).map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound => AnalyzerError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => AnalyzerError::FileRead {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let reader = std::io::BufReader::new(file);
    let mut orders: Vec<Order> = Vec::new();
    let mut records_read = 0usize;
    let mut records_dropped = 0usize;

    for (index, line_result) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line_result.map_err(|source| AnalyzerError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let order: Order =
            serde_json::from_str(trimmed).map_err(|source| AnalyzerError::MalformedRecord {
                line: line_number,
                source,
            })?;
        records_read += 1;

        if is_filtered_out(&order, cutoff) {
            records_dropped += 1;
            continue;
        }

        orders.push(order);
    }

    debug!(
        "File {}: {} records read, {} dropped by date filter",
        path.display(),
        records_read,
        records_dropped
    );

    Ok(orders)
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Returns `true` when the cutoff filter drops this order.
///
/// An unreadable `created_at` is tolerated: the record is kept as if it
/// carried no date, and a warning names the offending value.
fn is_filtered_out(order: &Order, cutoff: Option<DateTime<Utc>>) -> bool {
    let (Some(cutoff), Some(created_at)) = (cutoff, order.created_at.as_deref()) else {
        return false;
    };

    match parse_timestamp(created_at) {
        Some(created) => created < cutoff,
        None => {
            warn!(
                "Order {}: unreadable created_at \"{}\"; keeping record",
                order.id, created_at
            );
            false
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
