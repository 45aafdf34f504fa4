use std::sync::Arc;

use tracing::info;

use flash_core::model::{Food, NewFood};
use storage::repository::FoodRepository;

use crate::error::FoodServiceError;

/// Lists and adds picture cards.
#[derive(Clone)]
pub struct FoodService {
    foods: Arc<dyn FoodRepository>,
}

impl FoodService {
    #[must_use]
    pub fn new(foods: Arc<dyn FoodRepository>) -> Self {
        Self { foods }
    }

    /// # Errors
    ///
    /// Returns `FoodServiceError::Storage` if the service cannot be reached.
    pub async fn list(&self) -> Result<Vec<Food>, FoodServiceError> {
        Ok(self.foods.list_foods().await?)
    }

    /// Validate and store a new food.
    ///
    /// # Errors
    ///
    /// Returns `FoodServiceError::Food` when both fields are blank or the image
    /// URL does not parse; no request is made in that case.
    /// Returns `FoodServiceError::Storage` if the service rejects it.
    pub async fn add(&self, name: &str, image_url: &str) -> Result<Food, FoodServiceError> {
        let new = NewFood::new(name, image_url)?;
        let food = self.foods.create_food(&new).await?;
        info!(name = %food.name, "added food");
        Ok(food)
    }
}
