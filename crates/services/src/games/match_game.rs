//! Drag-and-drop pairing of fronts with backs.

use std::collections::HashSet;
use std::time::Duration;

use flash_core::model::{Card, PairId};

use crate::shuffle::Shuffler;

pub const MATCH_PAIRS: usize = 5;

/// How long a mismatched slot stays flagged.
pub const WRONG_FLASH: Duration = Duration::from_millis(400);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchPair {
    pub id: PairId,
    pub front: String,
    pub back: String,
}

/// A draggable back text; `pair_id` names the slot it belongs to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchChip {
    pub pair_id: PairId,
    pub text: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropOutcome {
    Matched,
    /// The slot is flagged until `clear_wrong` is called with this token.
    Mismatched { token: u64 },
    Ignored,
}

#[derive(Clone, Debug)]
pub struct MatchGame {
    pool: Vec<Card>,
    shuffler: Shuffler,
    pairs: Vec<MatchPair>,
    chips: Vec<MatchChip>,
    resolved: HashSet<PairId>,
    wrong: Option<(PairId, u64)>,
    next_token: u64,
}

impl MatchGame {
    #[must_use]
    pub fn new(pool: Vec<Card>, shuffler: Shuffler) -> Self {
        let mut game = Self {
            pool,
            shuffler,
            pairs: Vec::new(),
            chips: Vec::new(),
            resolved: HashSet::new(),
            wrong: None,
            next_token: 0,
        };
        game.deal();
        game
    }

    fn deal(&mut self) {
        let picked = self.shuffler.sample(self.pool.clone(), MATCH_PAIRS);
        self.pairs = picked
            .into_iter()
            .zip(0u32..)
            .map(|(card, i)| MatchPair {
                id: PairId::new(i),
                front: card.front,
                back: card.back,
            })
            .collect();
        let chips = self
            .pairs
            .iter()
            .map(|pair| MatchChip {
                pair_id: pair.id,
                text: pair.back.clone(),
            })
            .collect();
        self.chips = self.shuffler.shuffled(chips);
        self.resolved.clear();
        self.wrong = None;
    }

    #[must_use]
    pub fn pairs(&self) -> &[MatchPair] {
        &self.pairs
    }

    /// Chips still waiting to be placed, in tray order.
    pub fn open_chips(&self) -> impl Iterator<Item = &MatchChip> {
        self.chips
            .iter()
            .filter(|chip| !self.resolved.contains(&chip.pair_id))
    }

    #[must_use]
    pub fn is_resolved(&self, pair: PairId) -> bool {
        self.resolved.contains(&pair)
    }

    #[must_use]
    pub fn is_wrong(&self, slot: PairId) -> bool {
        matches!(self.wrong, Some((flagged, _)) if flagged == slot)
    }

    #[must_use]
    pub fn resolved_count(&self) -> usize {
        self.resolved.len()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.pairs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        !self.pairs.is_empty() && self.resolved.len() == self.pairs.len()
    }

    /// Drop the chip belonging to `chip` onto the slot of `slot`.
    pub fn drop_chip(&mut self, chip: PairId, slot: PairId) -> DropOutcome {
        let known = |id: PairId| self.pairs.iter().any(|pair| pair.id == id);
        if !known(chip) || !known(slot) || self.is_resolved(chip) || self.is_resolved(slot) {
            return DropOutcome::Ignored;
        }
        if chip == slot {
            self.resolved.insert(slot);
            if self.is_wrong(slot) {
                self.wrong = None;
            }
            return DropOutcome::Matched;
        }
        self.next_token += 1;
        self.wrong = Some((slot, self.next_token));
        DropOutcome::Mismatched {
            token: self.next_token,
        }
    }

    /// Clear the mismatch flag if it is still the one `token` raised.
    pub fn clear_wrong(&mut self, token: u64) {
        if matches!(self.wrong, Some((_, current)) if current == token) {
            self.wrong = None;
        }
    }

    /// Deal a new set of pairs from the same pool.
    pub fn restart(&mut self) {
        self.deal();
    }
}
