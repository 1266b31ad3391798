//! Logging setup.
//!
//! Human-readable logs go to stderr. When a log file or directory is
//! configured, a JSON-lines copy is written there through a non-blocking
//! appender; the returned guard must live until exit so buffered lines are
//! flushed.

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

const ENV_LOG_PATH: &str = "DALE_CHALL_LOG_PATH";
const ENV_LOG_DIR: &str = "DALE_CHALL_LOG_DIR";
const LOG_FILE_NAME: &str = "dale-chall.jsonl";

/// Where file logs go, if anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Directory holding the log file.
    pub log_dir: Option<PathBuf>,
    /// Log file name inside `log_dir`.
    pub log_file: Option<String>,
}

impl ObservabilityConfig {
    /// Resolve file logging from the environment, then the config file.
    ///
    /// `DALE_CHALL_LOG_PATH` wins over `DALE_CHALL_LOG_DIR`, which wins over
    /// the configured `log_dir`.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self::resolve(
            std::env::var_os(ENV_LOG_PATH).map(PathBuf::from),
            std::env::var_os(ENV_LOG_DIR).map(PathBuf::from),
            config_log_dir,
        )
    }

    fn resolve(
        log_path: Option<PathBuf>,
        env_dir: Option<PathBuf>,
        config_dir: Option<PathBuf>,
    ) -> Self {
        if let Some(path) = log_path
            && let Some(name) = path.file_name().and_then(|n| n.to_str())
        {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
            return Self {
                log_dir: Some(dir),
                log_file: Some(name.to_string()),
            };
        }

        match env_dir.or(config_dir) {
            Some(dir) => Self {
                log_dir: Some(dir),
                log_file: Some(LOG_FILE_NAME.to_string()),
            },
            None => Self::default(),
        }
    }
}

/// Build the log filter.
///
/// `RUST_LOG` wins when set. Otherwise `-q` means errors only, each `-v`
/// raises the level by one step, and the configured level is the baseline.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    EnvFilter::new(level_directive(quiet, verbose, config_level))
}

fn level_directive(quiet: bool, verbose: u8, config_level: &str) -> &str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => config_level,
        1 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    let (file_layer, guard) = match (&config.log_dir, &config.log_file) {
        (Some(dir), Some(file)) => {
            std::fs::create_dir_all(dir)?;
            let appender = tracing_appender::rolling::never(dir, file);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().json().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        _ => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()?;

    Ok(guard)
}
