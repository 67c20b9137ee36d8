//! Configuration system
//!
//! Resolver settings load from TOML or RON, chosen by file extension.

pub use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::role::Role;
use crate::suffix::{SuffixTable, BASE_COLOR_SUFFIXES, IMAGE_EXTENSIONS, ROLE_SUFFIXES};

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        match ConfigFormat::from_path(path)? {
            ConfigFormat::Toml => toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
            ConfigFormat::Ron => ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = match ConfigFormat::from_path(path)? {
            ConfigFormat::Toml => {
                toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
            }
            ConfigFormat::Ron => ron::ser::to_string_pretty(self, Default::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.toml`
    Toml,
    /// `.ron`
    Ron,
}

impl ConfigFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("toml") => Ok(Self::Toml),
            Some("ron") => Ok(Self::Ron),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Values that parse but cannot be used
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// One role-bearing suffix entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuffixEntry {
    /// Filename ending, including its separator (`_normal`)
    pub suffix: String,
    /// Role the suffix marks
    pub role: Role,
}

impl SuffixEntry {
    /// Create an entry
    pub fn new(suffix: impl Into<String>, role: Role) -> Self {
        Self {
            suffix: suffix.into(),
            role,
        }
    }
}

/// Settings for texture set resolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Material name used when the base name is empty
    pub default_material_label: String,
    /// Extensions treated as images, with leading dot
    pub image_extensions: Vec<String>,
    /// Suffixes that explicitly mark a base color map
    pub base_color_suffixes: Vec<String>,
    /// Suffixes that mark a non-color role
    pub role_suffixes: Vec<SuffixEntry>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            default_material_label: "Material".to_string(),
            image_extensions: IMAGE_EXTENSIONS.iter().map(|ext| (*ext).to_string()).collect(),
            base_color_suffixes: BASE_COLOR_SUFFIXES.iter().map(|s| (*s).to_string()).collect(),
            role_suffixes: ROLE_SUFFIXES
                .iter()
                .map(|(suffix, role)| SuffixEntry::new(*suffix, *role))
                .collect(),
        }
    }
}

impl Config for ResolverConfig {}

impl ResolverConfig {
    /// Load, validate and normalize a configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config = Self::load_from_file(path)?.normalized()?;
        log::info!(
            "Loaded resolver config from {:?}: {} role suffixes, {} base color suffixes, {} extensions",
            path,
            config.role_suffixes.len(),
            config.base_color_suffixes.len(),
            config.image_extensions.len()
        );
        Ok(config)
    }

    /// Lowercase every entry and give extensions a leading dot
    ///
    /// Fails on empty suffixes or extensions, which would match everything.
    pub fn normalized(mut self) -> Result<Self, ConfigError> {
        for ext in &mut self.image_extensions {
            let trimmed = ext.trim().to_lowercase();
            if trimmed.is_empty() || trimmed == "." {
                return Err(ConfigError::Invalid("empty image extension".to_string()));
            }
            *ext = if trimmed.starts_with('.') {
                trimmed
            } else {
                format!(".{}", trimmed)
            };
        }

        for suffix in &mut self.base_color_suffixes {
            *suffix = suffix.trim().to_lowercase();
            if suffix.is_empty() {
                return Err(ConfigError::Invalid("empty base color suffix".to_string()));
            }
        }

        for entry in &mut self.role_suffixes {
            entry.suffix = entry.suffix.trim().to_lowercase();
            if entry.suffix.is_empty() {
                return Err(ConfigError::Invalid(format!("empty suffix for role {}", entry.role)));
            }
        }

        Ok(self)
    }

    /// Build the suffix table described by this configuration
    pub fn suffix_table(&self) -> SuffixTable {
        SuffixTable::new(
            self.role_suffixes.iter().map(|entry| (entry.suffix.as_str(), entry.role)),
            &self.base_color_suffixes,
        )
    }
}
