use flash_core::model::{Collection, CollectionId, NewCollection};
use tracing::debug;

use super::{RemoteRepository, check_status, read_json, transport_error};
use crate::repository::{CollectionRepository, StorageError};

const RESOURCE: &str = "flashcards";

#[async_trait::async_trait]
impl CollectionRepository for RemoteRepository {
    async fn list_collections(&self) -> Result<Vec<Collection>, StorageError> {
        let url = self.endpoint(&[RESOURCE])?;
        debug!(%url, "GET collections");
        let response = self
            .client()
            .get(url)
            .send()
            .await
            .map_err(transport_error)?;
        read_json(check_status(response)?).await
    }

    async fn get_collection(&self, id: &CollectionId) -> Result<Collection, StorageError> {
        let url = self.endpoint(&[RESOURCE, id.as_str()])?;
        debug!(%url, "GET collection");
        let response = self
            .client()
            .get(url)
            .send()
            .await
            .map_err(transport_error)?;
        read_json(check_status(response)?).await
    }

    async fn create_collection(&self, new: &NewCollection) -> Result<Collection, StorageError> {
        let url = self.endpoint(&[RESOURCE])?;
        debug!(%url, name = new.name(), "POST collection");
        let response = self
            .client()
            .post(url)
            .json(new)
            .send()
            .await
            .map_err(transport_error)?;
        read_json(check_status(response)?).await
    }

    async fn save_collection(&self, collection: &Collection) -> Result<(), StorageError> {
        let url = self.endpoint(&[RESOURCE, collection.id().as_str()])?;
        debug!(%url, cards = collection.card_count(), "PUT collection");
        let response = self
            .client()
            .put(url)
            .json(collection)
            .send()
            .await
            .map_err(transport_error)?;
        check_status(response)?;
        Ok(())
    }

    async fn delete_collection(&self, id: &CollectionId) -> Result<(), StorageError> {
        let url = self.endpoint(&[RESOURCE, id.as_str()])?;
        debug!(%url, "DELETE collection");
        let response = self
            .client()
            .delete(url)
            .send()
            .await
            .map_err(transport_error)?;
        check_status(response)?;
        Ok(())
    }
}
