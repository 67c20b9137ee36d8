//! Error types for texture set resolution

use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;

/// Texture set resolution errors
#[derive(Error, Debug)]
pub enum TextureSetError {
    /// The directory to scan could not be listed
    #[error("Cannot access directory {path:?}: {source}")]
    DirectoryAccess {
        /// Directory that was being listed
        path: PathBuf,
        /// Underlying IO failure
        #[source]
        source: std::io::Error,
    },

    /// Resolver configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl TextureSetError {
    /// Wrap an IO failure raised while listing `path`
    pub fn directory_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::DirectoryAccess {
            path: path.into(),
            source,
        }
    }
}
