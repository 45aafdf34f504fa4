mod card;
mod collection;
mod food;
mod ids;

pub use ids::{CollectionId, PairId, ParseIdError};

pub use card::{Card, CardSide};
pub use collection::{Collection, CollectionError, NewCollection, card_pool};
pub use food::{Food, FoodError, NewFood};
