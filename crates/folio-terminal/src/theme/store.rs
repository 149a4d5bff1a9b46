//! Persistence for the active theme preference.

use folio_core::ThemeId;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Storage for a single theme preference.
///
/// This abstraction allows:
/// - Testing without touching the filesystem
/// - Running with persistence switched off
pub trait ThemeStore: Send + Sync {
    /// The stored theme id as written, or `None` if nothing is stored.
    /// The caller validates the value.
    fn load(&self) -> io::Result<Option<String>>;

    fn save(&self, id: ThemeId) -> io::Result<()>;
}

/// On-disk form of the preference.
#[derive(Debug, Serialize, Deserialize)]
struct ThemePreference {
    theme: String,
}

/// Stores the preference as a small JSON file.
#[derive(Debug, Clone)]
pub struct FileThemeStore {
    path: PathBuf,
}

impl FileThemeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ThemeStore for FileThemeStore {
    fn load(&self) -> io::Result<Option<String>> {
        let json = match std::fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e),
        };
        let preference: ThemePreference = serde_json::from_str(&json)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(Some(preference.theme))
    }

    fn save(&self, id: ThemeId) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let preference = ThemePreference {
            theme: id.as_str().to_string(),
        };
        let json = serde_json::to_string_pretty(&preference)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        std::fs::write(&self.path, json)
    }
}

/// Keeps the preference in memory only.
#[derive(Debug, Default)]
pub struct MemoryThemeStore {
    value: Mutex<Option<String>>,
}

impl MemoryThemeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `raw`, valid or not.
    pub fn with_value(raw: &str) -> Self {
        Self {
            value: Mutex::new(Some(raw.to_string())),
        }
    }

    pub fn value(&self) -> Option<String> {
        self.value.lock().ok().and_then(|v| v.clone())
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> io::Result<Option<String>> {
        Ok(self.value())
    }

    fn save(&self, id: ThemeId) -> io::Result<()> {
        let mut value = self
            .value
            .lock()
            .map_err(|_| io::Error::other("theme store lock poisoned"))?;
        *value = Some(id.as_str().to_string());
        Ok(())
    }
}
