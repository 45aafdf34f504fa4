use std::sync::{Arc, Mutex};

use tracing::info;

use flash_core::model::{Card, Food, card_pool};
use storage::repository::{CollectionRepository, FoodRepository};

use super::{MatchGame, QuickQuiz};
use crate::error::StudyError;
use crate::practice::{PracticeSession, TypingPolicy};
use crate::shuffle::Shuffler;

/// Builds practice sessions and games, each with its own shuffler.
///
/// All shufflers fork from one root, so a configured seed makes every game in
/// a run reproducible.
#[derive(Clone)]
pub struct StudyService {
    collections: Arc<dyn CollectionRepository>,
    foods: Arc<dyn FoodRepository>,
    root: Arc<Mutex<Shuffler>>,
}

impl StudyService {
    #[must_use]
    pub fn new(
        collections: Arc<dyn CollectionRepository>,
        foods: Arc<dyn FoodRepository>,
        seed: Option<u64>,
    ) -> Self {
        Self {
            collections,
            foods,
            root: Arc::new(Mutex::new(Shuffler::new(seed))),
        }
    }

    fn shuffler(&self) -> Shuffler {
        match self.root.lock() {
            Ok(mut root) => root.fork(),
            Err(poisoned) => poisoned.into_inner().fork(),
        }
    }

    /// Flip/typing/quiz practice over a collection's cards.
    #[must_use]
    pub fn practice(&self, cards: Vec<Card>) -> PracticeSession {
        PracticeSession::new(cards, self.shuffler())
    }

    /// Picture practice: the image is the prompt and typed names must match exactly.
    #[must_use]
    pub fn food_practice(&self, foods: &[Food]) -> PracticeSession {
        let cards = foods.iter().map(Food::to_card).collect();
        PracticeSession::new(cards, self.shuffler()).with_typing_policy(TypingPolicy::Exact)
    }

    /// Ten timed questions drawn from every collection.
    ///
    /// # Errors
    ///
    /// Returns `StudyError::Storage` if the collections cannot be loaded.
    pub async fn start_quick_quiz(&self) -> Result<QuickQuiz, StudyError> {
        let pool = self.pool().await?;
        let quiz = QuickQuiz::new(&pool, self.shuffler());
        info!(questions = quiz.total(), "started quick quiz");
        Ok(quiz)
    }

    /// Five pairs drawn from every collection.
    ///
    /// # Errors
    ///
    /// Returns `StudyError::Storage` if the collections cannot be loaded.
    pub async fn start_match_game(&self) -> Result<MatchGame, StudyError> {
        let pool = self.pool().await?;
        let game = MatchGame::new(pool, self.shuffler());
        info!(pairs = game.total(), "started match game");
        Ok(game)
    }

    /// Picture practice over every stored food.
    ///
    /// # Errors
    ///
    /// Returns `StudyError::Storage` if the foods cannot be loaded.
    pub async fn start_food_practice(&self) -> Result<PracticeSession, StudyError> {
        let foods = self.foods.list_foods().await?;
        Ok(self.food_practice(&foods))
    }

    async fn pool(&self) -> Result<Vec<Card>, StudyError> {
        let collections = self.collections.list_collections().await?;
        Ok(card_pool(&collections))
    }
}
