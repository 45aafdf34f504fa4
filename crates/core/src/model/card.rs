use serde::{Deserialize, Serialize};

//
// ─── CARD ──────────────────────────────────────────────────────────────────────
//

/// A front/back text pair.
///
/// Cards carry no identity of their own; they are addressed by their position
/// inside the owning collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub front: String,
    pub back: String,
}

impl Card {
    #[must_use]
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
        }
    }

    /// An empty row, as added by the editor before the user types into it.
    #[must_use]
    pub fn blank() -> Self {
        Self::default()
    }

    /// Build a card from raw imported fields.
    ///
    /// Both sides are trimmed; returns `None` when either side ends up empty.
    #[must_use]
    pub fn from_fields(front: &str, back: &str) -> Option<Self> {
        let front = front.trim();
        let back = back.trim();
        if front.is_empty() || back.is_empty() {
            return None;
        }
        Some(Self::new(front, back))
    }

    /// Overwrite one side, leaving the other as is.
    pub fn set_side(&mut self, side: CardSide, value: impl Into<String>) {
        match side {
            CardSide::Front => self.front = value.into(),
            CardSide::Back => self.back = value.into(),
        }
    }
}

/// Which side of the card an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardSide {
    Front,
    Back,
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
