use std::sync::Arc;

use storage::{RemoteConfig, Storage};

use crate::collection_service::CollectionService;
use crate::error::AppServicesError;
use crate::food_service::FoodService;
use crate::games::StudyService;

/// Assembles the app-facing services over one storage backend.
#[derive(Clone)]
pub struct AppServices {
    collections: Arc<CollectionService>,
    foods: Arc<FoodService>,
    study: Arc<StudyService>,
}

impl AppServices {
    /// Build services backed by the remote REST service.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Remote` if the base URL or HTTP client is invalid.
    pub fn new_remote(config: &RemoteConfig, seed: Option<u64>) -> Result<Self, AppServicesError> {
        let storage = Storage::remote(config)?;
        Ok(Self::from_storage(&storage, seed))
    }

    /// Build services over an already-assembled storage backend.
    #[must_use]
    pub fn from_storage(storage: &Storage, seed: Option<u64>) -> Self {
        Self {
            collections: Arc::new(CollectionService::new(Arc::clone(&storage.collections))),
            foods: Arc::new(FoodService::new(Arc::clone(&storage.foods))),
            study: Arc::new(StudyService::new(
                Arc::clone(&storage.collections),
                Arc::clone(&storage.foods),
                seed,
            )),
        }
    }

    /// Services over a fresh in-memory store.
    #[must_use]
    pub fn in_memory(seed: Option<u64>) -> Self {
        Self::from_storage(&Storage::in_memory(), seed)
    }

    #[must_use]
    pub fn collections(&self) -> Arc<CollectionService> {
        Arc::clone(&self.collections)
    }

    #[must_use]
    pub fn foods(&self) -> Arc<FoodService> {
        Arc::clone(&self.foods)
    }

    #[must_use]
    pub fn study(&self) -> Arc<StudyService> {
        Arc::clone(&self.study)
    }
}
