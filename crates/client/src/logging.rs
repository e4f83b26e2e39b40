use std::path::Path;

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Logs to stderr, and to `zombie-quest.log` under `log_dir` when given.
///
/// The returned guard flushes the file writer on drop and must outlive the
/// run.
pub fn setup_logging(log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());
    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let Some(log_dir) = log_dir else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(stderr_layer)
            .init();
        return Ok(None);
    };

    std::fs::create_dir_all(log_dir)?;
    let file_appender = tracing_appender::rolling::never(log_dir, "zombie-quest.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    tracing::info!("Log file: {}/zombie-quest.log", log_dir.display());
    Ok(Some(guard))
}
