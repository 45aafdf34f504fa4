use std::sync::Arc;

use tracing::{info, warn};

use flash_core::model::{Collection, CollectionId, NewCollection};
use storage::repository::{CollectionRepository, StorageError};

use crate::error::{CollectionServiceError, ImportError};
use crate::import::{ImportReport, parse_cards};

/// Orchestrates collection browsing, creation and whole-document saves.
#[derive(Clone)]
pub struct CollectionService {
    collections: Arc<dyn CollectionRepository>,
}

impl CollectionService {
    #[must_use]
    pub fn new(collections: Arc<dyn CollectionRepository>) -> Self {
        Self { collections }
    }

    /// List every collection in service order.
    ///
    /// # Errors
    ///
    /// Returns `CollectionServiceError::Storage` if the service cannot be reached.
    pub async fn list(&self) -> Result<Vec<Collection>, CollectionServiceError> {
        let collections = self.collections.list_collections().await?;
        info!(count = collections.len(), "loaded collections");
        Ok(collections)
    }

    /// Fetch a collection by ID.
    ///
    /// Returns `Ok(None)` when the collection does not exist.
    ///
    /// # Errors
    ///
    /// Returns `CollectionServiceError::Storage` for any other storage failure.
    pub async fn get(
        &self,
        id: &CollectionId,
    ) -> Result<Option<Collection>, CollectionServiceError> {
        match self.collections.get_collection(id).await {
            Ok(collection) => Ok(Some(collection)),
            Err(StorageError::NotFound) => {
                warn!(%id, "collection not found");
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Create an empty collection with the given name.
    ///
    /// # Errors
    ///
    /// Returns `CollectionServiceError::Collection` when the name is blank; no
    /// request is made in that case.
    /// Returns `CollectionServiceError::Storage` if the service rejects it.
    pub async fn create(&self, name: &str) -> Result<Collection, CollectionServiceError> {
        let new = NewCollection::new(name)?;
        let created = self.collections.create_collection(&new).await?;
        info!(id = %created.id(), name = created.name(), "created collection");
        Ok(created)
    }

    /// Overwrite the stored collection with `collection`.
    ///
    /// # Errors
    ///
    /// Returns `CollectionServiceError::Storage` if the save fails.
    pub async fn save(&self, collection: &Collection) -> Result<(), CollectionServiceError> {
        self.collections.save_collection(collection).await?;
        info!(
            id = %collection.id(),
            cards = collection.card_count(),
            "saved collection"
        );
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `CollectionServiceError::Storage` if the delete fails.
    pub async fn delete(&self, id: &CollectionId) -> Result<(), CollectionServiceError> {
        self.collections.delete_collection(id).await?;
        info!(%id, "deleted collection");
        Ok(())
    }

    /// Append the cards parsed from `text` to an in-progress edit.
    ///
    /// Nothing is persisted; the caller saves when the user confirms.
    ///
    /// # Errors
    ///
    /// Returns `ImportError` when the text cannot be parsed; `collection` is
    /// left untouched in that case.
    pub fn import_into(
        &self,
        collection: &mut Collection,
        text: &str,
    ) -> Result<ImportReport, ImportError> {
        let report = parse_cards(text)?;
        collection.append_cards(report.cards.iter().cloned());
        if report.skipped > 0 {
            warn!(skipped = report.skipped, "import dropped incomplete rows");
        }
        Ok(report)
    }
}
