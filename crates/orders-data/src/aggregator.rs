//! Revenue aggregation over loaded order records.
//!
//! A single in-order pass folds the record sequence into the overall
//! revenue total, per-marketplace totals, and the suspicious-order list.

use std::collections::HashMap;

use orders_core::classifier::classify;
use orders_core::models::Order;

// ── Result types ──────────────────────────────────────────────────────────────

/// An order flagged by the classifier, with its single reported reason.
#[derive(Debug, Clone, PartialEq)]
pub struct SuspiciousOrder {
    /// The order's identifier (`"unknown"` when the feed omitted it).
    pub id: String,
    /// Fixed-format reason text, e.g. `negative amount (-1000)`.
    pub reason: String,
}

/// The complete result of one aggregation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RevenueSummary {
    /// Total revenue in major units over all non-negative amounts.
    pub total_revenue: f64,
    /// Per-marketplace revenue in major units. Key-unique, in first-seen
    /// order; restricted to non-negative amounts with a non-empty trimmed
    /// marketplace.
    pub marketplace_revenue: Vec<(String, f64)>,
    /// Flagged orders in encounter order.
    pub suspicious_orders: Vec<SuspiciousOrder>,
}

// ── RevenueAggregator ─────────────────────────────────────────────────────────

/// Stateless single-pass revenue fold.
pub struct RevenueAggregator;

impl RevenueAggregator {
    /// Fold `orders` into revenue totals and the suspicious-order list.
    ///
    /// Accumulation stays in integer cents throughout the pass; the
    /// cents-to-EUR division happens once per accumulator at the end, so
    /// repeated runs over the same input yield bit-identical results.
    /// Suspicious records with a non-negative amount still contribute to
    /// the totals; negative amounts are excluded from every sum.
    pub fn aggregate(orders: &[Order]) -> RevenueSummary {
        let mut total_cents: i64 = 0;
        let mut marketplace_cents: Vec<(String, i64)> = Vec::new();
        let mut slot_by_name: HashMap<String, usize> = HashMap::new();
        let mut suspicious_orders: Vec<SuspiciousOrder> = Vec::new();

        for order in orders {
            if let Some(reason) = classify(order) {
                suspicious_orders.push(SuspiciousOrder {
                    id: order.id.clone(),
                    reason: reason.to_string(),
                });
            }

            if order.amount_cents < 0 {
                continue;
            }

            total_cents += order.amount_cents;

            let marketplace = order.marketplace.trim();
            if marketplace.is_empty() {
                continue;
            }

            let slot = *slot_by_name
                .entry(marketplace.to_string())
                .or_insert_with(|| {
                    marketplace_cents.push((marketplace.to_string(), 0));
                    marketplace_cents.len() - 1
                });
            marketplace_cents[slot].1 += order.amount_cents;
        }

        RevenueSummary {
            total_revenue: total_cents as f64 / 100.0,
            marketplace_revenue: marketplace_cents
                .into_iter()
                .map(|(name, cents)| (name, cents as f64 / 100.0))
                .collect(),
            suspicious_orders,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
