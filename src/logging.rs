use std::fs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initializes the logging system with console output and, optionally, a
/// daily-rotated JSON log file under `logs/`.
///
/// Console output goes to stderr because stdout may carry the rendered SVG.
/// The returned guard must be held until exit so buffered file logs are flushed.
pub fn init_logging(file_log: bool) -> Option<WorkerGuard> {
    // Respect RUST_LOG if set; otherwise default to info for our crate
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("metacritic_charts=info,warn"));

    let (file_layer, guard) = if file_log {
        let _ = fs::create_dir_all("logs");
        let file_appender = tracing_appender::rolling::daily("logs", "charts.log");
        let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender);
        let layer = fmt::layer().json().with_writer(non_blocking_writer);
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    let console_layer = fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);

    // An absent file layer is a no-op layer
    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    guard
}
