#![forbid(unsafe_code)]

pub mod remote;
pub mod repository;

pub use remote::{RemoteConfig, RemoteInitError, RemoteRepository};
pub use repository::{CollectionRepository, FoodRepository, InMemoryRepository, Storage, StorageError};
