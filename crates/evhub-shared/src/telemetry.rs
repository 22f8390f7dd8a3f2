//! Telemetry setup

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, LogSettings};
use crate::error::AppError;

/// Install the global subscriber.
///
/// The returned guard flushes buffered lines on drop and must be held for the
/// lifetime of the process.
pub fn init_telemetry(settings: &LogSettings) -> Result<WorkerGuard, AppError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,evhub=debug,tower_http=info"));

    let (writer, guard) = match &settings.directory {
        Some(dir) => tracing_appender::non_blocking(tracing_appender::rolling::daily(
            dir,
            &settings.file_prefix,
        )),
        None => tracing_appender::non_blocking(std::io::stdout()),
    };

    let registry = tracing_subscriber::registry().with(env_filter);
    let result = match settings.format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_target(true).with_writer(writer))
            .try_init(),
        LogFormat::Pretty => registry
            .with(fmt::layer().pretty().with_writer(writer))
            .try_init(),
    };
    result.map_err(|e| AppError::TelemetryError(e.to_string()))?;

    Ok(guard)
}
