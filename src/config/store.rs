//! Live configuration handle.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::config::loader::{load_config, ConfigError};
use crate::config::schema::AppConfig;

/// Shared, atomically swappable configuration.
///
/// Cloning is cheap; every clone sees the same current config.
#[derive(Clone)]
pub struct ConfigStore {
    path: Arc<PathBuf>,
    current: Arc<ArcSwap<AppConfig>>,
}

impl ConfigStore {
    /// Load the initial configuration. Fails if the file is unreadable or invalid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config = load_config(path)?;
        Ok(Self::with_config(path, config))
    }

    /// Create a store around an already validated config.
    pub fn with_config(path: &Path, config: AppConfig) -> Self {
        Self {
            path: Arc::new(path.to_path_buf()),
            current: Arc::new(ArcSwap::from_pointee(config)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Snapshot of the current configuration.
    pub fn current(&self) -> Arc<AppConfig> {
        self.current.load_full()
    }

    /// Re-read the file and swap the result in.
    ///
    /// On failure the previous configuration stays active.
    pub fn reload(&self) -> Result<Arc<AppConfig>, ConfigError> {
        match load_config(&self.path) {
            Ok(config) => {
                let config = Arc::new(config);
                self.current.store(Arc::clone(&config));
                tracing::info!(
                    path = %self.path.display(),
                    archive_type = %config.archive_type,
                    compress_level = config.compress_level,
                    "Configuration reloaded"
                );
                Ok(config)
            }
            Err(e) => {
                tracing::error!(
                    path = %self.path.display(),
                    error = %e,
                    "Failed to reload config. Keeping current configuration."
                );
                Err(e)
            }
        }
    }
}
