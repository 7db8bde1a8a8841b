use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialise the global `tracing` subscriber.
///
/// The filter comes from the standard `RUST_LOG` environment variable and
/// defaults to `warn`. Log output goes to stderr so the stdout report
/// stream stays clean. Calling this more than once keeps the first
/// subscriber.
pub fn setup_logging() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let _ = tracing_subscriber::registry().with(filter).with(layer).try_init();

    Ok(())
}
