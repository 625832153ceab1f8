use tracing_appender::rolling;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global subscriber: JSON lines rotated daily in
/// `log_dir/file_name`, plus readable output on stderr. `RUST_LOG`
/// overrides the default `info` filter.
///
/// Stdout is left to the page dump of the binaries.
pub fn init_logging(log_dir: &str, file_name: &str) {
    let file_appender = rolling::daily(log_dir, file_name);
    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .json();

    let stderr_layer = fmt::layer().with_writer(std::io::stderr);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,reqwest=warn,hyper_util=warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .init();
}
