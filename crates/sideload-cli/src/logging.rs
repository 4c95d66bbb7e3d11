use crate::args::LogLevel;
use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber for this invocation
///
/// `RUST_LOG` wins over `--log-level` when set. Output goes to stderr so
/// stdout stays machine-readable. Calling this twice is a no-op.
pub fn init(level: LogLevel) {
    let filter = build_env_filter(level);
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

fn build_env_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()))
}
