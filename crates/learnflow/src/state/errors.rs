//! Error types for loading and saving the picker state.

use crate::data::storage::StorageError;

#[derive(Debug)]
pub enum LoadError {
    Storage(StorageError),
    /// The catalog has no categories to pick from
    EmptyCatalog,
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Storage(e) => write!(f, "{}", e),
            LoadError::EmptyCatalog => write!(f, "Catalog has no categories"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Storage(e) => Some(e),
            LoadError::EmptyCatalog => None,
        }
    }
}

impl From<StorageError> for LoadError {
    fn from(e: StorageError) -> Self {
        LoadError::Storage(e)
    }
}

#[derive(Debug)]
pub enum SaveError {
    Storage(StorageError),
    NoPath,
}

impl std::fmt::Display for SaveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SaveError::Storage(e) => write!(f, "{}", e),
            SaveError::NoPath => write!(f, "No data directory configured"),
        }
    }
}

impl std::error::Error for SaveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SaveError::Storage(e) => Some(e),
            SaveError::NoPath => None,
        }
    }
}

impl From<StorageError> for SaveError {
    fn from(e: StorageError) -> Self {
        SaveError::Storage(e)
    }
}
