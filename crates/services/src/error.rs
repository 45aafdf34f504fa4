//! Shared error types for the services crate.

use thiserror::Error;

use flash_core::model::{CollectionError, FoodError};
use storage::{RemoteInitError, StorageError};

/// Errors emitted by `CollectionService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CollectionServiceError {
    #[error(transparent)]
    Collection(#[from] CollectionError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `FoodService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FoodServiceError {
    #[error(transparent)]
    Food(#[from] FoodError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while parsing a delimited-text import.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ImportError {
    #[error("could not read import file: {0}")]
    Malformed(String),
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        Self::Malformed(err.to_string())
    }
}

/// Errors emitted by `StudyService` when loading material for a game.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StudyError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Remote(#[from] RemoteInitError),
}

impl CollectionServiceError {
    /// True when the failure is a validation problem that never reached the network.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Collection(_))
    }
}

impl FoodServiceError {
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Food(_))
    }
}
