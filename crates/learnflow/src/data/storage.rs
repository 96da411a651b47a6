//! Data directory storage
//!
//! Directory structure:
//! ~/.learnflow/
//!   config.yaml          # Preferences (minimum domains)
//!   catalog.yaml         # Optional catalog replacing the built-in seed
//!   profile.yaml         # Domains picked when sign-up was finished
//!   learnflow.log

use std::fs;
use std::path::{Path, PathBuf};

use learnflow_core::Catalog;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::profile::{DataConfig, SelectionProfile};

/// Error types for storage operations
#[derive(Debug)]
pub enum StorageError {
    Io(String),
    Parse(String),
    Serialize(String),
    /// File parsed but its contents are unusable
    Invalid(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(msg) => write!(f, "IO error: {}", msg),
            StorageError::Parse(msg) => write!(f, "Parse error: {}", msg),
            StorageError::Serialize(msg) => write!(f, "Serialization error: {}", msg),
            StorageError::Invalid(msg) => write!(f, "Invalid data: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

/// Manages the learnflow data directory
pub struct DataDirectory {
    root: PathBuf,
}

impl DataDirectory {
    /// Create a new DataDirectory instance
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Get the default data directory path (~/.learnflow/)
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".learnflow")
    }

    fn config_path(&self) -> PathBuf {
        self.root.join("config.yaml")
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.root.join("catalog.yaml")
    }

    fn profile_path(&self) -> PathBuf {
        self.root.join("profile.yaml")
    }

    /// Check if the data directory exists
    pub fn exists(&self) -> bool {
        self.root.exists()
    }

    /// Create the data directory
    pub fn init(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root)
            .map_err(|e| StorageError::Io(format!("Failed to create data directory: {}", e)))
    }

    /// Load config.yaml, or defaults if it is missing
    pub fn load_config(&self) -> Result<DataConfig, StorageError> {
        Ok(read_yaml(&self.config_path(), "config")?.unwrap_or_default())
    }

    pub fn save_config(&self, config: &DataConfig) -> Result<(), StorageError> {
        self.write_yaml(&self.config_path(), config, "config")
    }

    /// Load catalog.yaml if present
    pub fn load_catalog(&self) -> Result<Option<Catalog>, StorageError> {
        let path = self.catalog_path();
        if !path.exists() {
            return Ok(None);
        }
        load_catalog_file(&path).map(Some)
    }

    /// Load the saved selection, if sign-up was finished before
    pub fn load_profile(&self) -> Result<Option<SelectionProfile>, StorageError> {
        read_yaml(&self.profile_path(), "profile")
    }

    pub fn save_profile(&self, profile: &SelectionProfile) -> Result<(), StorageError> {
        self.write_yaml(&self.profile_path(), profile, "profile")
    }

    fn write_yaml<T: Serialize>(&self, path: &Path, value: &T, what: &str) -> Result<(), StorageError> {
        if !self.exists() {
            self.init()?;
        }

        let yaml = serde_saphyr::to_string(value)
            .map_err(|e| StorageError::Serialize(format!("Failed to serialize {}: {}", what, e)))?;

        fs::write(path, yaml).map_err(|e| StorageError::Io(format!("Failed to write {}: {}", what, e)))
    }
}

/// Load and validate a catalog from any YAML file
pub fn load_catalog_file(path: &Path) -> Result<Catalog, StorageError> {
    let content = fs::read_to_string(path)
        .map_err(|e| StorageError::Io(format!("Failed to read {}: {}", path.display(), e)))?;

    let catalog: Catalog = serde_saphyr::from_str(&content)
        .map_err(|e| StorageError::Parse(format!("Failed to parse catalog: {}", e)))?;

    catalog
        .validate()
        .map_err(|e| StorageError::Invalid(e.to_string()))?;

    Ok(catalog)
}

fn read_yaml<T: DeserializeOwned>(path: &Path, what: &str) -> Result<Option<T>, StorageError> {
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)
        .map_err(|e| StorageError::Io(format!("Failed to read {}: {}", what, e)))?;

    serde_saphyr::from_str(&content)
        .map(Some)
        .map_err(|e| StorageError::Parse(format!("Failed to parse {}: {}", what, e)))
}
