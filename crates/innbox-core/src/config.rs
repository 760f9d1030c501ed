//! Configuration and data directory management.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Paths to Innbox data directories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataPaths {
    /// Root data directory (e.g., `data/`).
    pub root: PathBuf,
    /// Uploaded archives directory (`data/uploads/`).
    pub uploads: PathBuf,
}

impl DataPaths {
    /// Create data paths from a root directory. Creates directories if needed.
    pub fn new(root: impl AsRef<Path>) -> std::io::Result<Self> {
        let root = root.as_ref().to_path_buf();
        let paths = Self {
            uploads: root.join("uploads"),
            root,
        };
        paths.ensure_dirs()?;
        Ok(paths)
    }

    fn ensure_dirs(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.uploads)?;
        Ok(())
    }
}

/// Top-level Innbox configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InnboxConfig {
    /// HTTP server port.
    pub port: u16,
    /// Data directory paths.
    pub data_paths: DataPaths,
}

impl InnboxConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env(data_dir: impl AsRef<Path>) -> std::io::Result<Self> {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(5000);

        let data_paths = DataPaths::new(data_dir)?;

        Ok(Self { port, data_paths })
    }
}
