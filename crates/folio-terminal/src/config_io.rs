//! Locating and reading the config file and content file.

use crate::config::{Config, ConfigError};
use folio_core::SiteContent;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Directories the application reads from and writes to.
///
/// Built once in `main()`; tests use [`DirectoryContext::for_testing`] so
/// nothing touches the real home directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryContext {
    /// Data directory for persistent state (the theme preference)
    /// e.g., ~/.local/share/folio on Linux
    pub data_dir: PathBuf,

    /// Config directory for user configuration
    /// e.g., ~/.config/folio on Linux
    pub config_dir: PathBuf,
}

impl DirectoryContext {
    /// Create a DirectoryContext from the system directories
    /// This should ONLY be called from main()
    pub fn from_system() -> std::io::Result<Self> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| {
                std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "Could not determine data directory",
                )
            })?
            .join("folio");

        let config_dir = dirs::config_dir()
            .ok_or_else(|| {
                std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "Could not determine config directory",
                )
            })?
            .join("folio");

        Ok(Self {
            data_dir,
            config_dir,
        })
    }

    /// Create a DirectoryContext for testing with a temp directory
    pub fn for_testing(temp_dir: &Path) -> Self {
        Self {
            data_dir: temp_dir.join("data"),
            config_dir: temp_dir.join("config"),
        }
    }

    /// Get the config file path
    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join(Config::FILENAME)
    }

    /// Get the persisted theme preference path
    pub fn theme_preference_path(&self) -> PathBuf {
        self.data_dir.join("theme.json")
    }
}

/// Read a config file. A missing file is `Ok(None)`.
fn load_layer_from_path(path: &Path) -> Result<Option<Config>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::IoError(format!("{}: {}", path.display(), e)))?;

    let config: Config = serde_json::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;

    Ok(Some(config))
}

/// Load the effective config.
///
/// An explicit path must exist. Without one, the default location is tried
/// and defaults are used when it is absent.
pub fn load_config(explicit: Option<&Path>, dirs: &DirectoryContext) -> Result<Config, ConfigError> {
    let config = match explicit {
        Some(path) => load_layer_from_path(path)?.ok_or_else(|| {
            ConfigError::IoError(format!("{}: config file not found", path.display()))
        })?,
        None => {
            let path = dirs.config_path();
            match load_layer_from_path(&path)? {
                Some(config) => {
                    tracing::debug!("Loaded config from {}", path.display());
                    config
                }
                None => Config::default(),
            }
        }
    };
    config.validate()?;
    Ok(config)
}

/// Load the content store.
///
/// A user file is always validated. The built-in content is validated in
/// debug builds only.
pub fn load_content(path: Option<&Path>) -> Result<Arc<SiteContent>, ConfigError> {
    let Some(path) = path else {
        let builtin = folio_core::builtin::site();
        if cfg!(debug_assertions) {
            builtin
                .validate()
                .map_err(|e| ConfigError::ContentError(format!("built-in content: {e}")))?;
        }
        return Ok(Arc::new(builtin.clone()));
    };

    let json = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::IoError(format!("{}: {}", path.display(), e)))?;
    let content = SiteContent::from_json(&json)
        .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;
    content
        .validate()
        .map_err(|e| ConfigError::ContentError(format!("{}: {}", path.display(), e)))?;
    tracing::info!("Loaded content for {} from {}", content.name, path.display());
    Ok(Arc::new(content))
}
