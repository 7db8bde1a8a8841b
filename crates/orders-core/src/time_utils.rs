use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

use crate::error::{AnalyzerError, Result};

// ── Cutoff date parsing ───────────────────────────────────────────────────────

/// Parse a cutoff value in the exact `YYYY-MM-DD` pattern into the start of
/// that day in UTC.
///
/// Anything else, including out-of-range components or trailing garbage,
/// yields [`AnalyzerError::InvalidDate`] naming the offending value.
pub fn parse_cutoff_date(value: &str) -> Result<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| AnalyzerError::InvalidDate(value.to_string()))?;
    Ok(Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)))
}

// ── Timestamp parsing ─────────────────────────────────────────────────────────

/// Parse an ISO-8601 / RFC 3339 timestamp string into a UTC instant.
///
/// A trailing `Z` is treated as UTC offset `+00:00`. Timestamps carrying
/// another fixed offset are converted to UTC; naive timestamps without an
/// offset are interpreted as UTC. Returns `None` for empty strings or
/// unrecognised formats.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if s.is_empty() {
        return None;
    }

    // Replace trailing 'Z' with '+00:00'.
    let normalised = if let Some(stripped) = s.strip_suffix('Z') {
        format!("{}+00:00", stripped)
    } else {
        s.to_string()
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(&normalised) {
        return Some(dt.with_timezone(&Utc));
    }

    const FMTS: &[&str] = &[
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S",
    ];
    for fmt in FMTS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }

    None
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── parse_cutoff_date ─────────────────────────────────────────────────────

    #[test]
    fn test_parse_cutoff_date_valid() {
        let cutoff = parse_cutoff_date("2024-11-01").unwrap();
        assert_eq!(cutoff.to_rfc3339(), "2024-11-01T00:00:00+00:00");
    }

    #[test]
    fn test_parse_cutoff_date_out_of_range() {
        let err = parse_cutoff_date("2024-13-45").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid date format '2024-13-45'. Use YYYY-MM-DD"
        );
    }

    #[test]
    fn test_parse_cutoff_date_wrong_separator() {
        assert!(parse_cutoff_date("2024/11/01").is_err());
    }

    #[test]
    fn test_parse_cutoff_date_trailing_garbage() {
        assert!(parse_cutoff_date("2024-11-01T10:00:00").is_err());
    }

    #[test]
    fn test_parse_cutoff_date_empty() {
        assert!(parse_cutoff_date("").is_err());
    }

    // ── parse_timestamp ───────────────────────────────────────────────────────

    #[test]
    fn test_parse_timestamp_z_suffix() {
        let ts = parse_timestamp("2024-11-01T10:00:00Z").unwrap();
        assert_eq!(ts.to_rfc3339(), "2024-11-01T10:00:00+00:00");
    }

    #[test]
    fn test_parse_timestamp_explicit_offset_converts_to_utc() {
        let ts = parse_timestamp("2024-11-01T12:00:00+02:00").unwrap();
        assert_eq!(ts.to_rfc3339(), "2024-11-01T10:00:00+00:00");
    }

    #[test]
    fn test_parse_timestamp_naive_interpreted_as_utc() {
        let ts = parse_timestamp("2024-11-01T10:00:00").unwrap();
        assert_eq!(ts.to_rfc3339(), "2024-11-01T10:00:00+00:00");
    }

    #[test]
    fn test_parse_timestamp_fractional_seconds() {
        let ts = parse_timestamp("2024-11-01T10:00:00.500Z").unwrap();
        assert_eq!(ts.timestamp_subsec_millis(), 500);
    }

    #[test]
    fn test_parse_timestamp_garbage_returns_none() {
        assert!(parse_timestamp("yesterday").is_none());
    }

    #[test]
    fn test_parse_timestamp_empty_returns_none() {
        assert!(parse_timestamp("").is_none());
    }
}
