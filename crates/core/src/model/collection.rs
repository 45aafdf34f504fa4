use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::card::Card;
use crate::model::ids::CollectionId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CollectionError {
    #[error("collection name cannot be empty")]
    EmptyName,

    #[error("card index {index} is out of range for {len} cards")]
    CardOutOfRange { index: usize, len: usize },
}

//
// ─── COLLECTION ────────────────────────────────────────────────────────────────
//

/// A named, ordered deck of cards as stored by the remote service.
///
/// Card order is insertion order and is what index-based navigation walks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    #[serde(rename = "_id")]
    id: CollectionId,
    name: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    cards: Vec<Card>,
}

impl Collection {
    #[must_use]
    pub fn new(
        id: CollectionId,
        name: impl Into<String>,
        tags: Vec<String>,
        cards: Vec<Card>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            tags,
            cards,
        }
    }

    #[must_use]
    pub fn id(&self) -> &CollectionId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    #[must_use]
    pub fn first_tag(&self) -> Option<&str> {
        self.tags.first().map(String::as_str)
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }

    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Case-insensitive substring match on the name. An empty query matches everything.
    #[must_use]
    pub fn name_matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&query.to_lowercase())
    }

    // ─── Editing ───────────────────────────────────────────────────────────────

    pub fn push_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn append_cards(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// Replace one side of the card at `index`.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::CardOutOfRange` when `index` is past the end.
    pub fn edit_card(
        &mut self,
        index: usize,
        side: crate::model::CardSide,
        value: impl Into<String>,
    ) -> Result<(), CollectionError> {
        let len = self.cards.len();
        let card = self
            .cards
            .get_mut(index)
            .ok_or(CollectionError::CardOutOfRange { index, len })?;
        card.set_side(side, value);
        Ok(())
    }

    /// Remove the card at `index`, returning it.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::CardOutOfRange` when `index` is past the end.
    pub fn remove_card(&mut self, index: usize) -> Result<Card, CollectionError> {
        if index >= self.cards.len() {
            return Err(CollectionError::CardOutOfRange {
                index,
                len: self.cards.len(),
            });
        }
        Ok(self.cards.remove(index))
    }
}

/// Body of a create request: a validated name with empty cards and tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewCollection {
    name: String,
    cards: Vec<Card>,
    tags: Vec<String>,
}

impl NewCollection {
    /// Validate a collection name; it is sent exactly as typed.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::EmptyName` when the name is blank after trimming.
    pub fn new(name: impl Into<String>) -> Result<Self, CollectionError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CollectionError::EmptyName);
        }
        Ok(Self {
            name,
            cards: Vec::new(),
            tags: Vec::new(),
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attach the id the server assigned.
    #[must_use]
    pub fn assign_id(self, id: CollectionId) -> Collection {
        Collection::new(id, self.name, self.tags, self.cards)
    }
}

/// Flatten every collection's cards into one pool, preserving order.
#[must_use]
pub fn card_pool(collections: &[Collection]) -> Vec<Card> {
    collections
        .iter()
        .flat_map(|c| c.cards().iter().cloned())
        .collect()
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
