use async_trait::async_trait;
use flash_core::model::{Collection, CollectionId, Food, NewCollection, NewFood};
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("remote service responded with status {0}")]
    HttpStatus(u16),

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Repository contract for flashcard collections.
///
/// Writes are whole-document: `save_collection` overwrites the stored
/// collection with exactly what is passed in.
#[async_trait]
pub trait CollectionRepository: Send + Sync {
    /// List every collection.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the collections cannot be fetched.
    async fn list_collections(&self) -> Result<Vec<Collection>, StorageError>;

    /// Fetch a collection by ID.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if missing, or other storage errors.
    async fn get_collection(&self, id: &CollectionId) -> Result<Collection, StorageError>;

    /// Create a collection and return it with its assigned ID.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the collection cannot be stored.
    async fn create_collection(&self, new: &NewCollection) -> Result<Collection, StorageError>;

    /// Overwrite an existing collection.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if missing, or other storage errors.
    async fn save_collection(&self, collection: &Collection) -> Result<(), StorageError>;

    /// Delete a collection.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if missing, or other storage errors.
    async fn delete_collection(&self, id: &CollectionId) -> Result<(), StorageError>;
}

/// Repository contract for the picture-card ("foods") variant.
#[async_trait]
pub trait FoodRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns `StorageError` if the foods cannot be fetched.
    async fn list_foods(&self) -> Result<Vec<Food>, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` if the food cannot be stored.
    async fn create_food(&self, new: &NewFood) -> Result<Food, StorageError>;
}

#[derive(Default)]
struct InMemoryState {
    next_id: u64,
    collections: Vec<Collection>,
    foods: Vec<Food>,
}

/// Simple in-memory repository implementation for testing and prototyping.
///
/// Collections keep insertion order, matching what the remote service returns.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    state: Arc<Mutex<InMemoryState>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a repository with existing collections (ids are kept as given).
    #[must_use]
    pub fn with_collections(collections: Vec<Collection>) -> Self {
        let repo = Self::new();
        if let Ok(mut guard) = repo.state.lock() {
            guard.next_id = collections.len() as u64;
            guard.collections = collections;
        }
        repo
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, InMemoryState>, StorageError> {
        self.state
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))
    }
}

#[async_trait]
impl CollectionRepository for InMemoryRepository {
    async fn list_collections(&self) -> Result<Vec<Collection>, StorageError> {
        Ok(self.lock()?.collections.clone())
    }

    async fn get_collection(&self, id: &CollectionId) -> Result<Collection, StorageError> {
        let guard = self.lock()?;
        guard
            .collections
            .iter()
            .find(|c| c.id() == id)
            .cloned()
            .ok_or(StorageError::NotFound)
    }

    async fn create_collection(&self, new: &NewCollection) -> Result<Collection, StorageError> {
        let mut guard = self.lock()?;
        guard.next_id += 1;
        let id = CollectionId::new(format!("mem-{}", guard.next_id));
        let created = new.clone().assign_id(id);
        guard.collections.push(created.clone());
        Ok(created)
    }

    async fn save_collection(&self, collection: &Collection) -> Result<(), StorageError> {
        let mut guard = self.lock()?;
        let slot = guard
            .collections
            .iter_mut()
            .find(|c| c.id() == collection.id())
            .ok_or(StorageError::NotFound)?;
        *slot = collection.clone();
        Ok(())
    }

    async fn delete_collection(&self, id: &CollectionId) -> Result<(), StorageError> {
        let mut guard = self.lock()?;
        let before = guard.collections.len();
        guard.collections.retain(|c| c.id() != id);
        if guard.collections.len() == before {
            return Err(StorageError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl FoodRepository for InMemoryRepository {
    async fn list_foods(&self) -> Result<Vec<Food>, StorageError> {
        Ok(self.lock()?.foods.clone())
    }

    async fn create_food(&self, new: &NewFood) -> Result<Food, StorageError> {
        let food = new.clone().into_food();
        self.lock()?.foods.push(food.clone());
        Ok(food)
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub collections: Arc<dyn CollectionRepository>,
    pub foods: Arc<dyn FoodRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self::from_in_memory(InMemoryRepository::new())
    }

    #[must_use]
    pub fn from_in_memory(repo: InMemoryRepository) -> Self {
        let collections: Arc<dyn CollectionRepository> = Arc::new(repo.clone());
        let foods: Arc<dyn FoodRepository> = Arc::new(repo);
        Self { collections, foods }
    }
}
