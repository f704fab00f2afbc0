use tracing_subscriber::EnvFilter;

/// Log to stderr so stdout stays clean for layouts. `RUST_LOG` wins over both
/// `verbose` and the configured level.
pub fn setup_logging(verbose: bool, default_level: &str) {
    let level = if verbose { "debug" } else { default_level };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
