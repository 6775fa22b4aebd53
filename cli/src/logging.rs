//! Log output for the shell.
//!
//! Logs go to a size-rolled file under the user config dir so they never interleave
//! with the prompt. Set `POKEDEX_LOG_STDERR` to log to stderr instead; `RUST_LOG`
//! overrides the default `info` filter.

use std::path::PathBuf;

use rolling_file::{BasicRollingFileAppender, RollingConditionBasic};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::EnvFilter;

const LOG_FILE_NAME: &str = "pokedex.log";
const LOG_FILE_MAX_BYTES: u64 = 5 * 1024 * 1024;
const LOG_FILE_COUNT: usize = 3;

/// Directory holding the rolled log files.
pub fn log_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("pokedex").join("logs"))
}

/// Install the global subscriber. Keep the returned guard alive until exit so
/// buffered lines are flushed.
pub fn init_logging() -> Option<WorkerGuard> {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    if std::env::var_os("POKEDEX_LOG_STDERR").is_none() {
        if let Some(dir) = log_dir() {
            if std::fs::create_dir_all(&dir).is_ok() {
                let condition = RollingConditionBasic::new().max_size(LOG_FILE_MAX_BYTES);
                if let Ok(appender) =
                    BasicRollingFileAppender::new(dir.join(LOG_FILE_NAME), condition, LOG_FILE_COUNT)
                {
                    let (writer, guard) = tracing_appender::non_blocking(appender);
                    tracing_subscriber::fmt()
                        .with_env_filter(filter)
                        .with_target(true)
                        .with_ansi(false)
                        .with_writer(writer)
                        .init();
                    return Some(guard);
                }
            }
        }
    }

    // Fallback to stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
    None
}
