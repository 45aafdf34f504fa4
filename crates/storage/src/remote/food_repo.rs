use flash_core::model::{Food, NewFood};
use tracing::debug;

use super::{RemoteRepository, check_status, read_json, transport_error};
use crate::repository::{FoodRepository, StorageError};

const RESOURCE: &str = "foods";

#[async_trait::async_trait]
impl FoodRepository for RemoteRepository {
    async fn list_foods(&self) -> Result<Vec<Food>, StorageError> {
        let url = self.endpoint(&[RESOURCE])?;
        debug!(%url, "GET foods");
        let response = self
            .client()
            .get(url)
            .send()
            .await
            .map_err(transport_error)?;
        read_json(check_status(response)?).await
    }

    async fn create_food(&self, new: &NewFood) -> Result<Food, StorageError> {
        let url = self.endpoint(&[RESOURCE])?;
        debug!(%url, "POST food");
        let response = self
            .client()
            .post(url)
            .json(new)
            .send()
            .await
            .map_err(transport_error)?;
        let response = check_status(response)?;
        // The service may answer with an empty body; fall back to what was sent.
        let body = response.bytes().await.map_err(transport_error)?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(new.clone().into_food());
        }
        serde_json::from_slice(&body).map_err(|e| StorageError::Serialization(e.to_string()))
    }
}
