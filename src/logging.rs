//! File logging. Stdout belongs to the game screen, so log lines go to
//! `<cache dir>/logs/word-warrior.log`.

use directories::ProjectDirs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE_NAME: &str = "word-warrior.log";

pub fn log_directory() -> Option<PathBuf> {
    ProjectDirs::from("", "", "word-warrior").map(|dirs| dirs.cache_dir().join("logs"))
}

/// Install the global subscriber. Returns the writer guard, which must stay
/// alive until exit, or `None` if logging could not be set up. The game runs
/// the same either way.
pub fn init_logging() -> Option<WorkerGuard> {
    let dir = log_directory()?;
    std::fs::create_dir_all(&dir).ok()?;

    let appender = tracing_appender::rolling::never(&dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .ok()?;

    Some(guard)
}
