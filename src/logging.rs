//! Logging setup for editors embedding ex-command.
//!
//! The parser reports its decisions (range peeled off, shell escape taken,
//! command resolved or rejected) as `tracing` events under the `ex_command`
//! target and never installs a subscriber itself. An editor that has no
//! subscriber of its own can call [`init_logging`] once at startup to see them.
//!
//! Filtering comes from `EX_COMMAND_LOG`, then `RUST_LOG`, and otherwise
//! defaults to [`DEFAULT_FILTER`]: parser events at `info`, everything else at
//! `warn`, so the host editor's dependencies stay quiet.

use crate::error::{ExError, Result};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Environment variable checked before `RUST_LOG`.
pub const LOG_ENV: &str = "EX_COMMAND_LOG";

/// Filter used when neither environment variable is set.
pub const DEFAULT_FILTER: &str = "warn,ex_command=info";

/// Where parser events are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error; fine for line-mode editors and tests.
    Stderr,
    /// The given file, appended to across editor sessions.
    File(PathBuf),
    /// The file at [`get_log_path`]. Full-screen editors want this, since
    /// writing to the terminal would corrupt the display.
    DefaultFile,
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs a global subscriber writing parser events to `target`.
///
/// Fails if the log file cannot be opened or the host already installed a
/// global subscriber; in the latter case parser events go to the host's.
pub fn init_logging(target: LogTarget) -> Result<()> {
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter());

    let installed = match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(path) => {
            let file = open_log_file(&path)?;
            builder.with_writer(file).with_ansi(false).try_init()
        }
        LogTarget::DefaultFile => {
            let file = open_log_file(&get_log_path())?;
            builder.with_writer(file).with_ansi(false).try_init()
        }
    };

    installed.map_err(|e| ExError::logging(format!("Could not install subscriber: {e}")))
}

fn open_log_file(path: &Path) -> Result<fs::File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            ExError::logging(format!(
                "Could not create log directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| ExError::logging(format!("Could not open {}: {e}", path.display())))
}

/// Returns the default log file path.
///
/// Uses the XDG state directory on Linux, falling back to the config directory
/// and finally the temp directory.
pub fn get_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        return state_dir.join("ex-command").join("ex-command.log");
    }

    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join("ex-command").join("ex-command.log");
    }

    std::env::temp_dir().join("ex-command.log")
}
