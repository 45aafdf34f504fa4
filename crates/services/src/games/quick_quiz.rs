//! Timed multiple-choice round drawn from every collection.

use flash_core::model::Card;

use crate::practice::{OptionTone, build_options};
use crate::shuffle::Shuffler;

pub const QUICK_QUIZ_QUESTIONS: usize = 10;
pub const QUESTION_SECONDS: u32 = 10;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizQuestion {
    pub prompt: String,
    pub correct_answer: String,
    pub options: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing is counting: the question is answered or the round is over.
    Idle,
    Counting(u32),
    /// Time ran out; the question is now locked as wrong.
    Expired { correct_answer: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    Correct,
    Wrong { correct_answer: String },
}

#[derive(Clone, Debug)]
pub struct QuickQuiz {
    questions: Vec<QuizQuestion>,
    index: usize,
    score: usize,
    selected: Option<String>,
    answered: bool,
    timed_out: bool,
    time_left: u32,
    finished: bool,
}

impl QuickQuiz {
    /// Sample up to ten cards from `pool` and build one question per card.
    ///
    /// Distractors come from the whole pool, not just the sampled cards.
    #[must_use]
    pub fn new(pool: &[Card], mut shuffler: Shuffler) -> Self {
        let picked = shuffler.sample(pool.to_vec(), QUICK_QUIZ_QUESTIONS);
        let questions = picked
            .into_iter()
            .map(|card| {
                let options = build_options(pool, &card.back, &mut shuffler);
                QuizQuestion {
                    prompt: card.front,
                    correct_answer: card.back,
                    options,
                }
            })
            .collect();
        Self {
            questions,
            index: 0,
            score: 0,
            selected: None,
            answered: false,
            timed_out: false,
            time_left: QUESTION_SECONDS,
            finished: false,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    /// Zero-based position of the current question.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn current(&self) -> Option<&QuizQuestion> {
        if self.finished {
            return None;
        }
        self.questions.get(self.index)
    }

    #[must_use]
    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    #[must_use]
    pub fn is_answered(&self) -> bool {
        self.answered
    }

    #[must_use]
    pub fn is_timed_out(&self) -> bool {
        self.timed_out
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// True while the countdown should keep running.
    #[must_use]
    pub fn is_counting(&self) -> bool {
        !self.finished && !self.answered && self.current().is_some()
    }

    #[must_use]
    pub fn option_tone(&self, option: &str) -> OptionTone {
        let correct = self.current().map_or("", |q| q.correct_answer.as_str());
        OptionTone::for_option(option, correct, self.selected(), self.answered)
    }

    /// One second elapsed.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.is_counting() {
            return TickOutcome::Idle;
        }
        self.time_left = self.time_left.saturating_sub(1);
        if self.time_left > 0 {
            return TickOutcome::Counting(self.time_left);
        }
        self.answered = true;
        self.timed_out = true;
        TickOutcome::Expired {
            correct_answer: self.questions[self.index].correct_answer.clone(),
        }
    }

    /// Lock in an answer. Returns `None` when the question is already locked.
    pub fn select(&mut self, option: &str) -> Option<SelectOutcome> {
        if !self.is_counting() {
            return None;
        }
        let correct = self.questions[self.index].correct_answer.clone();
        self.answered = true;
        self.selected = Some(option.to_string());
        if option == correct {
            self.score += 1;
            Some(SelectOutcome::Correct)
        } else {
            Some(SelectOutcome::Wrong {
                correct_answer: correct,
            })
        }
    }

    /// Move on once the current question is answered or expired.
    pub fn next(&mut self) {
        if self.finished || !self.answered {
            return;
        }
        if self.index + 1 < self.questions.len() {
            self.index += 1;
            self.selected = None;
            self.answered = false;
            self.timed_out = false;
            self.time_left = QUESTION_SECONDS;
        } else {
            self.finished = true;
        }
    }

    /// Replay the same questions from the start with a zero score.
    pub fn restart(&mut self) {
        self.index = 0;
        self.score = 0;
        self.selected = None;
        self.answered = false;
        self.timed_out = false;
        self.time_left = QUESTION_SECONDS;
        self.finished = false;
    }
}
