use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

use crate::core::config::{LogConfig, LogRotation};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Pick the filter directive: RUST_LOG wins, then LOG_LEVEL, then "info"
fn filter_directive(config: &LogConfig, rust_log: Option<String>) -> String {
    rust_log
        .filter(|s| !s.trim().is_empty())
        .or_else(|| Some(config.level.trim().to_lowercase()).filter(|s| !s.is_empty()))
        .unwrap_or_else(|| "info".to_string())
}

fn rotation(rotation: LogRotation) -> Rotation {
    match rotation {
        LogRotation::Minutely => Rotation::MINUTELY,
        LogRotation::Hourly => Rotation::HOURLY,
        LogRotation::Daily => Rotation::DAILY,
        LogRotation::Never => Rotation::NEVER,
    }
}

/// Rolling file appender under `LOG_DIRECTORY`, pruned to the retained file count
fn file_appender(config: &LogConfig) -> anyhow::Result<RollingFileAppender> {
    let mut builder = RollingFileAppender::builder()
        .rotation(rotation(config.rotation))
        .filename_prefix(config.filename.clone());

    if let Some(max_files) = config.retained_files() {
        builder = builder.max_log_files(max_files);
    }

    builder
        .build(&config.directory)
        .map_err(|e| anyhow::anyhow!("Failed to open log directory {}: {}", config.directory, e))
}

/// Console and file layers enabled by the config
fn build_layers(config: &LogConfig) -> anyhow::Result<(Vec<BoxedLayer>, Option<WorkerGuard>)> {
    let mut layers: Vec<BoxedLayer> = Vec::new();

    if config.console_enabled {
        let console = fmt::layer();
        layers.push(if config.console_json {
            console.json().boxed()
        } else {
            console.boxed()
        });
    }

    let mut guard = None;
    if config.file_enabled {
        let (writer, worker_guard) = tracing_appender::non_blocking(file_appender(config)?);
        let file = fmt::layer().with_ansi(false).with_writer(writer);
        layers.push(if config.file_json {
            file.json().boxed()
        } else {
            file.boxed()
        });
        guard = Some(worker_guard);
    }

    Ok((layers, guard))
}

/// Install the global tracing subscriber.
///
/// The returned guard flushes the file writer on drop; keep it alive for the
/// lifetime of the process.
pub fn init_tracing(config: &LogConfig) -> anyhow::Result<Option<WorkerGuard>> {
    let directive = filter_directive(config, std::env::var("RUST_LOG").ok());
    let (layers, guard) = build_layers(config)?;

    tracing_subscriber::registry()
        .with(layers)
        .with(EnvFilter::new(directive))
        .init();

    Ok(guard)
}
