//! Log output setup.
//!
//! The terminal is owned by the game UI, so logs can only go to a file.

use std::{env, fs, path::Path};

use color_eyre::eyre::{OptionExt as _, Result};
use tracing::{info, level_filters::LevelFilter};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _, EnvFilter};

/// Installs a file logger writing to `log_file`.
///
/// The filter defaults to `info` and honours `RUST_LOG`. Without a path nothing is installed and
/// every log statement is a no-op. The returned guard flushes pending records when dropped, so
/// the caller keeps it alive for the whole run.
///
/// # Errors
///
/// This function may return errors if:
/// - The path has no file name component
/// - The log directory cannot be created
/// - A global subscriber has already been installed
pub fn init(log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let Some(path) = log_file else {
        return Ok(None);
    };

    let file_name = path
        .file_name()
        .ok_or_eyre("log file path has no file name")?;
    let directory = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(directory)?;

    let file_appender = tracing_appender::rolling::never(directory, file_name);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let filter = env_filter(&env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default());
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()?;

    info!(path = %path.display(), "logging initialized");

    Ok(Some(guard))
}

/// Builds the event filter from `RUST_LOG`-style directives, falling back to `info` when there
/// are none. Invalid directives are skipped.
fn env_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_defaults_to_info() {
        assert_eq!(env_filter("").max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn test_filter_directives_override_default() {
        assert_eq!(
            env_filter("debug").max_level_hint(),
            Some(LevelFilter::DEBUG),
            "a global level raises the default"
        );
        assert_eq!(env_filter("warn").max_level_hint(), Some(LevelFilter::WARN));
        assert_eq!(
            env_filter("tilecrawl=trace").max_level_hint(),
            Some(LevelFilter::TRACE)
        );
    }

    #[test]
    fn test_no_path_installs_nothing() {
        let guard = init(None).expect("skipping logging cannot fail");

        assert!(guard.is_none());
    }

    #[test]
    fn test_path_without_file_name_is_rejected() {
        assert!(init(Some(Path::new("/"))).is_err());
    }

    #[test]
    fn test_file_logger_creates_directory() {
        let directory = env::temp_dir().join(format!("tilecrawl-log-{}", std::process::id()));
        let path = directory.join("session.log");

        let guard = init(Some(&path)).expect("file logger should install");

        assert!(guard.is_some());
        assert!(directory.is_dir());
        drop(guard);
        let _ = fs::remove_dir_all(&directory);
    }
}
