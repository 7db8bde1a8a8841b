mod bootstrap;
mod cli;

use orders_data::aggregator::RevenueAggregator;
use orders_data::reader::load_orders;
use orders_data::report;

fn main() {
    std::process::exit(run(std::env::args().skip(1).collect()));
}

/// Run the whole pipeline and return the process exit status.
///
/// All user-facing output, error diagnostics included, goes to stdout;
/// logs go to stderr.
fn run(args: Vec<String>) -> i32 {
    let Some(options) = cli::parse_args(args) else {
        println!("{}", cli::USAGE);
        return 1;
    };

    if let Err(err) = bootstrap::setup_logging() {
        eprintln!("Failed to initialise logging: {:#}", err);
    }

    tracing::debug!(
        "Analyzing {} (from: {})",
        options.filepath.display(),
        options.from_date.as_deref().unwrap_or("-")
    );

    let orders = match load_orders(&options.filepath, options.from_date.as_deref()) {
        Ok(orders) => orders,
        Err(err) => {
            println!("Error: {}", err);
            return 1;
        }
    };

    if orders.is_empty() {
        match options.from_date.as_deref() {
            Some(from) => println!("No orders found from {}", from),
            None => println!("No orders found"),
        }
        return 0;
    }

    let summary = RevenueAggregator::aggregate(&orders);
    println!("{}", report::render(&summary));
    0
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn write_orders(dir: &TempDir, content: &str) -> String {
        let path = dir.path().join("orders.jsonl");
        std::fs::write(&path, content).unwrap();
        path.to_string_lossy().to_string()
    }

    #[test]
    fn test_run_without_arguments_fails() {
        assert_eq!(run(vec![]), 1);
    }

    #[test]
    fn test_run_missing_file_fails() {
        assert_eq!(run(args(&["/tmp/does-not-exist-orders-run.jsonl"])), 1);
    }

    #[test]
    fn test_run_reports_orders() {
        let dir = TempDir::new().unwrap();
        let path = write_orders(
            &dir,
            "{\"id\":\"o1\",\"marketplace\":\"amazon\",\"amount_cents\":1000}\n",
        );

        assert_eq!(run(args(&[&path])), 0);
    }

    #[test]
    fn test_run_empty_file_succeeds() {
        let dir = TempDir::new().unwrap();
        let path = write_orders(&dir, "");

        assert_eq!(run(args(&[&path])), 0);
    }

    #[test]
    fn test_run_filtered_to_nothing_succeeds() {
        let dir = TempDir::new().unwrap();
        let path = write_orders(
            &dir,
            "{\"id\":\"o1\",\"amount_cents\":1000,\"created_at\":\"2020-01-01T00:00:00Z\"}\n",
        );

        assert_eq!(run(args(&[&path, "-from=2024-11-01"])), 0);
    }

    #[test]
    fn test_run_malformed_file_fails() {
        let dir = TempDir::new().unwrap();
        let path = write_orders(&dir, "{broken\n");

        assert_eq!(run(args(&[&path])), 1);
    }

    #[test]
    fn test_run_invalid_from_date_fails() {
        let dir = TempDir::new().unwrap();
        let path = write_orders(&dir, "{}\n");

        assert_eq!(run(args(&[&path, "-from=01-11-2024"])), 1);
    }
}
