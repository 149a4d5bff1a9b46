//! XDG-compliant log directory management
//!
//! Logs are stored in `$XDG_STATE_HOME/folio/logs/` (typically
//! `~/.local/state/folio/logs/`). Each run writes its own PID-named file, and
//! files older than a day left behind by earlier runs are removed at start-up.

use crate::config_io::DirectoryContext;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::{Duration, SystemTime};

/// Minimum age for log files to be cleaned up (24 hours)
const CLEANUP_AGE: Duration = Duration::from_secs(24 * 60 * 60);

/// Cached log directory path
static LOG_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Get the base log directory, creating it if necessary.
///
/// Falls back to `~/.local/state/folio/logs/` if XDG_STATE_HOME is not set,
/// and to the system temp directory as a last resort.
pub fn log_dir() -> &'static PathBuf {
    LOG_DIR.get_or_init(|| {
        let dir = get_xdg_log_dir().unwrap_or_else(|| std::env::temp_dir().join("folio-logs"));

        if let Err(e) = fs::create_dir_all(&dir) {
            tracing::warn!("Failed to create log directory {:?}: {}", dir, e);
            return std::env::temp_dir().join("folio-logs");
        }

        dir
    })
}

fn get_xdg_log_dir() -> Option<PathBuf> {
    if let Ok(state_home) = std::env::var("XDG_STATE_HOME") {
        let path = PathBuf::from(state_home);
        if path.is_absolute() {
            return Some(path.join("folio").join("logs"));
        }
    }

    dirs::home_dir().map(|home| home.join(".local").join("state").join("folio").join("logs"))
}

/// Get the path for this process's log file.
///
/// Returns `{log_dir}/folio-{PID}.log`
pub fn main_log_path() -> PathBuf {
    log_dir().join(format!("folio-{}.log", std::process::id()))
}

/// Remove log files from earlier runs that are older than a day.
pub fn cleanup_stale_logs() {
    cleanup_stale_logs_in_dir(log_dir(), std::process::id(), CLEANUP_AGE);
}

/// Remove `*-{PID}.log` files in `dir` older than `age`, never touching
/// `current_pid`'s own files. Returns how many were removed.
fn cleanup_stale_logs_in_dir(dir: &Path, current_pid: u32, age: Duration) -> usize {
    let Ok(entries) = fs::read_dir(dir) else {
        return 0;
    };

    let mut removed = 0;
    for entry in entries.flatten() {
        let file_name = entry.file_name();
        let name = file_name.to_string_lossy();

        let Some(pid) = extract_pid_from_filename(&name) else {
            continue;
        };
        if pid == current_pid {
            continue;
        }

        if entry.file_type().map(|t| t.is_file()).unwrap_or(false)
            && is_file_older_than(&entry.path(), age)
        {
            if let Err(e) = fs::remove_file(entry.path()) {
                tracing::debug!("Failed to clean up stale log {:?}: {}", entry.path(), e);
            } else {
                tracing::debug!("Cleaned up stale log file: {:?}", entry.path());
                removed += 1;
            }
        }
    }
    removed
}

/// Check if a file is older than the specified duration
fn is_file_older_than(path: &Path, age: Duration) -> bool {
    let Ok(metadata) = fs::metadata(path) else {
        return false;
    };

    let Ok(modified) = metadata.modified() else {
        return false;
    };

    SystemTime::now()
        .duration_since(modified)
        .map(|elapsed| elapsed > age)
        .unwrap_or(false)
}

/// Extract PID from a filename like "folio-12345.log"
fn extract_pid_from_filename(name: &str) -> Option<u32> {
    let without_ext = name.strip_suffix(".log")?;
    let last_hyphen = without_ext.rfind('-')?;
    without_ext[last_hyphen + 1..].parse().ok()
}

/// Print every path the application reads or writes to stdout.
pub fn print_all_paths(dirs: &DirectoryContext) {
    use std::io::Write;

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    writeln!(handle, "Folio directories:").ok();
    writeln!(handle).ok();
    writeln!(handle, "Config:     {}", dirs.config_dir.display()).ok();
    writeln!(handle, "  config.json:  {}", dirs.config_path().display()).ok();
    writeln!(handle).ok();
    writeln!(handle, "Data:       {}", dirs.data_dir.display()).ok();
    writeln!(
        handle,
        "  theme.json:   {}",
        dirs.theme_preference_path().display()
    )
    .ok();
    writeln!(handle).ok();
    writeln!(handle, "Logs:       {}", log_dir().display()).ok();
}
