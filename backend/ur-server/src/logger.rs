use crate::error::{Result as ServerErrorResult, ServerError};

use std::path::PathBuf;
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::{LevelFilter, info};

/// Initialize logger with fern
///
/// # Arguments
/// * `log_level` - Log level filter
/// * `log_file` - Optional path to log file. None = stdout, Some = file output
/// * `colored` - Enable colored output (ignored when logging to file)
pub fn initialize(
    log_level: ur_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ServerErrorResult<()> {
    let level_filter = log_level.0;

    let (output, colors): (fern::Output, Option<ColoredLevelConfig>) = match log_file {
        Some(ref log_path) => {
            let file = fern::log_file(log_path).map_err(|e| ServerError::Logger {
                message: format!("Failed to open log file {}: {}", log_path.display(), e),
            })?;
            (file.into(), None)
        }
        None if colored => {
            let colors = ColoredLevelConfig::new()
                .trace(Color::Magenta)
                .debug(Color::Blue)
                .info(Color::Green)
                .warn(Color::Yellow)
                .error(Color::Red);
            (std::io::stdout().into(), Some(colors))
        }
        // Plain output for non-TTY (systemd, docker logs)
        None => (std::io::stdout().into(), None),
    };

    Dispatch::new()
        .level(level_filter)
        // sqlx logs every statement at info
        .level_for("sqlx", level_filter.min(LevelFilter::Warn))
        .format(move |out, message, record| {
            let level = match &colors {
                Some(colors) => colors.color(record.level()).to_string(),
                None => record.level().to_string(),
            };
            out.finish(format_args!(
                "[{date} - {level}] {message} [{file}:{line}]",
                date = humantime::format_rfc3339(SystemTime::now()),
                level = level,
                message = message,
                file = record.file().unwrap_or("unknown"),
                line = record.line().unwrap_or(0),
            ))
        })
        .chain(output)
        .apply()
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    match log_file {
        Some(ref path) => info!(
            "Logger initialized: level={:?}, file={}",
            level_filter,
            path.display()
        ),
        None => info!("Logger initialized: level={:?}, stdout", level_filter),
    }

    Ok(())
}
