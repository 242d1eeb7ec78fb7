//! Diagnostics on stderr via `env_logger`.

use std::io::Write;

use env_logger::{Builder, Target, WriteStyle};
use log::Level;

use crate::CliError;
use crate::options::LogLevel;

/// Install the process-wide logger.
pub(crate) fn init_logging(level: LogLevel) -> Result<(), CliError> {
    let mut builder = Builder::new();
    builder
        .filter_level(level.to_filter())
        .write_style(WriteStyle::Never)
        .target(Target::Stderr)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}",
                level_tag(record.level()),
                record.target(),
                record.args()
            )
        });
    builder.try_init().map_err(CliError::InitLogging)
}

const fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}
