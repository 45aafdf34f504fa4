mod match_game;
mod quick_quiz;
mod service;

pub use match_game::{DropOutcome, MATCH_PAIRS, MatchChip, MatchGame, MatchPair, WRONG_FLASH};
pub use quick_quiz::{
    QUESTION_SECONDS, QUICK_QUIZ_QUESTIONS, QuickQuiz, QuizQuestion, SelectOutcome, TickOutcome,
};
pub use service::StudyService;
