use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::model::card::Card;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FoodError {
    #[error("a food needs a name or an image")]
    Empty,

    #[error("invalid image url: {0}")]
    InvalidImageUrl(String),
}

/// A picture card: the image is the prompt, the dish name is the answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Food {
    pub name: String,
    #[serde(rename = "imageUrl", default)]
    pub image_url: String,
}

impl Food {
    /// Practice view of this food, image url on the front and name on the back.
    #[must_use]
    pub fn to_card(&self) -> Card {
        Card::new(self.image_url.clone(), self.name.clone())
    }
}

/// Validated body for `POST /foods`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewFood {
    name: String,
    #[serde(rename = "imageUrl")]
    image_url: String,
}

impl NewFood {
    /// # Errors
    ///
    /// Returns `FoodError::Empty` when both fields are blank, and
    /// `FoodError::InvalidImageUrl` when a non-blank image url does not parse.
    pub fn new(name: impl Into<String>, image_url: impl Into<String>) -> Result<Self, FoodError> {
        let name = name.into().trim().to_string();
        let image_url = image_url.into().trim().to_string();
        if name.is_empty() && image_url.is_empty() {
            return Err(FoodError::Empty);
        }
        if !image_url.is_empty() {
            Url::parse(&image_url).map_err(|_| FoodError::InvalidImageUrl(image_url.clone()))?;
        }
        Ok(Self { name, image_url })
    }

    #[must_use]
    pub fn into_food(self) -> Food {
        Food {
            name: self.name,
            image_url: self.image_url,
        }
    }
}
