use tracing_subscriber::EnvFilter;

/// Print the synthesizer's logs when `RUST_LOG` is set, e.g. `RUST_LOG=stubgen=trace`.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
