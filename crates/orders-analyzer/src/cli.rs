use std::path::PathBuf;

/// Usage line printed when no input file is given.
pub const USAGE: &str = "Usage: orders-analyzer <orders.jsonl> [-from=YYYY-MM-DD]";

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliOptions {
    /// Path to the JSONL input file.
    pub filepath: PathBuf,
    /// Raw `-from=` value; the loader validates the pattern.
    pub from_date: Option<String>,
}

/// Scan the argument list (program name excluded).
///
/// The first argument is the input path. Every remaining argument is
/// checked for the `-from=` prefix; the last match wins and anything else
/// is ignored. An empty `-from=` value disables the filter. Returns
/// `None` when the input path is missing.
pub fn parse_args(args: Vec<String>) -> Option<CliOptions> {
    let mut iter = args.into_iter();
    let filepath = PathBuf::from(iter.next()?);

    let mut from_date: Option<String> = None;
    for arg in iter {
        if let Some(value) = arg.strip_prefix("-from=") {
            from_date = Some(value.to_string());
        }
    }

    Some(CliOptions {
        filepath,
        from_date: from_date.filter(|value| !value.is_empty()),
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
