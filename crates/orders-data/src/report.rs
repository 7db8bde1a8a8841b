//! Plain-text rendering of a [`RevenueSummary`].

use std::cmp::Ordering;

use orders_core::formatting::format_eur;

use crate::aggregator::RevenueSummary;

/// Render the human-readable revenue report.
///
/// Marketplaces sort by revenue descending; the sort is stable, so equal
/// revenues keep their first-seen order. The suspicious section appears
/// only when there is something to show. No trailing newline is added:
/// the caller terminates the output.
pub fn render(summary: &RevenueSummary) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!(
        "Total revenue: {}",
        format_eur(summary.total_revenue)
    ));
    lines.push(String::new());

    lines.push("Revenue by marketplace:".to_string());
    let mut ranked: Vec<(&str, f64)> = summary
        .marketplace_revenue
        .iter()
        .map(|(name, revenue)| (name.as_str(), *revenue))
        .collect();
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    for (marketplace, revenue) in ranked {
        lines.push(format!("- {}: {}", marketplace, format_eur(revenue)));
    }

    if !summary.suspicious_orders.is_empty() {
        lines.push(String::new());
        lines.push("Suspicious orders:".to_string());
        for order in &summary.suspicious_orders {
            lines.push(format!("- {}: {}", order.id, order.reason));
        }
    }

    lines.join("\n")
}

// ── Tests ─────────────────────────────────────────────────────────────────────
