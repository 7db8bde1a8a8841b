/// Format a major-unit amount as a fixed two-decimal value followed by the
/// `EUR` currency code.
///
/// # Examples
///
/// ```
/// use orders_core::formatting::format_eur;
///
/// assert_eq!(format_eur(50.0), "50.00 EUR");
/// assert_eq!(format_eur(0.5), "0.50 EUR");
/// assert_eq!(format_eur(-10.0), "-10.00 EUR");
/// ```
pub fn format_eur(amount: f64) -> String {
    format!("{:.2} EUR", amount)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_eur_zero() {
        assert_eq!(format_eur(0.0), "0.00 EUR");
    }

    #[test]
    fn test_format_eur_whole_amount() {
        assert_eq!(format_eur(65.0), "65.00 EUR");
    }

    #[test]
    fn test_format_eur_cents_fraction() {
        assert_eq!(format_eur(12.5), "12.50 EUR");
        assert_eq!(format_eur(0.01), "0.01 EUR");
    }

    #[test]
    fn test_format_eur_large_amount_no_grouping() {
        assert_eq!(format_eur(1234567.89), "1234567.89 EUR");
    }
}
