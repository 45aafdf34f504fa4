//! Flip / typing / quiz practice over one card list.
//!
//! A `PracticeSession` holds the shared card cursor plus one `PracticeMode`
//! payload. Every transition goes through [`PracticeSession::apply`], so the
//! three modes stay mutually exclusive and an empty card list never reaches
//! index arithmetic.

mod options;

pub use options::{DISTRACTORS, OptionTone, build_options};

use flash_core::answer::{choice_matches, typed_answer_contained, typed_answer_exact};
use flash_core::model::Card;

use crate::shuffle::Shuffler;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeKind {
    Flip,
    Typing,
    Quiz,
}

/// How a typed answer is compared with the back of the card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TypingPolicy {
    /// The expected answer only has to contain the typed text.
    #[default]
    Contains,
    /// Typed text must equal the expected answer.
    Exact,
}

impl TypingPolicy {
    #[must_use]
    pub fn check(self, typed: &str, expected: &str) -> bool {
        match self {
            Self::Contains => typed_answer_contained(typed, expected),
            Self::Exact => typed_answer_exact(typed, expected),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizState {
    order: Vec<usize>,
    cursor: usize,
    options: Vec<String>,
    selected: Option<String>,
    result: Option<bool>,
}

impl QuizState {
    #[must_use]
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    #[must_use]
    pub fn result(&self) -> Option<bool> {
        self.result
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PracticeMode {
    Flip { flipped: bool },
    Typing { answer: String, result: Option<bool> },
    Quiz(QuizState),
}

impl PracticeMode {
    #[must_use]
    pub fn kind(&self) -> ModeKind {
        match self {
            Self::Flip { .. } => ModeKind::Flip,
            Self::Typing { .. } => ModeKind::Typing,
            Self::Quiz(_) => ModeKind::Quiz,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PracticeIntent {
    SwitchMode(ModeKind),
    Flip,
    Next,
    /// Jump to a 1-based card number; out-of-range values are ignored.
    JumpTo(usize),
    TypeAnswer(String),
    Check,
    Random,
    Select(String),
}

pub struct PracticeSession {
    cards: Vec<Card>,
    current: usize,
    mode: PracticeMode,
    typing_policy: TypingPolicy,
    shuffler: Shuffler,
}

impl PracticeSession {
    /// Start in flip mode on the first card.
    #[must_use]
    pub fn new(cards: Vec<Card>, shuffler: Shuffler) -> Self {
        Self {
            cards,
            current: 0,
            mode: PracticeMode::Flip { flipped: false },
            typing_policy: TypingPolicy::default(),
            shuffler,
        }
    }

    #[must_use]
    pub fn with_typing_policy(mut self, policy: TypingPolicy) -> Self {
        self.typing_policy = policy;
        self
    }

    // ─── Queries ───────────────────────────────────────────────────────────────

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_card(&self) -> Option<&Card> {
        self.cards.get(self.current)
    }

    #[must_use]
    pub fn mode(&self) -> &PracticeMode {
        &self.mode
    }

    #[must_use]
    pub fn mode_kind(&self) -> ModeKind {
        self.mode.kind()
    }

    #[must_use]
    pub fn typing_policy(&self) -> TypingPolicy {
        self.typing_policy
    }

    /// `"3 / 10"` style position label; `None` for an empty list.
    #[must_use]
    pub fn progress_label(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        Some(format!("{} / {}", self.current + 1, self.cards.len()))
    }

    #[must_use]
    pub fn is_flipped(&self) -> bool {
        matches!(self.mode, PracticeMode::Flip { flipped: true })
    }

    #[must_use]
    pub fn quiz(&self) -> Option<&QuizState> {
        match &self.mode {
            PracticeMode::Quiz(state) => Some(state),
            _ => None,
        }
    }

    /// Tone for a quiz option; `None` outside quiz mode.
    #[must_use]
    pub fn option_tone(&self, option: &str) -> Option<OptionTone> {
        let quiz = self.quiz()?;
        let correct = self.current_card()?.back.as_str();
        Some(OptionTone::for_option(
            option,
            correct,
            quiz.selected(),
            quiz.result.is_some(),
        ))
    }

    // ─── Transitions ───────────────────────────────────────────────────────────

    /// Apply one user intent. Intents that do not belong to the active mode,
    /// and every intent on an empty card list, leave the session untouched.
    pub fn apply(&mut self, intent: PracticeIntent) {
        let len = self.cards.len();
        if len == 0 {
            return;
        }

        match intent {
            PracticeIntent::SwitchMode(kind) => self.switch_mode(kind),
            PracticeIntent::Flip => {
                if let PracticeMode::Flip { flipped } = &mut self.mode {
                    *flipped = !*flipped;
                }
            }
            PracticeIntent::Next => self.advance(),
            PracticeIntent::JumpTo(number) => {
                if !(1..=len).contains(&number) {
                    return;
                }
                match &mut self.mode {
                    PracticeMode::Flip { flipped } => *flipped = false,
                    PracticeMode::Typing { answer, result } => {
                        answer.clear();
                        *result = None;
                    }
                    // Quiz walks its own order.
                    PracticeMode::Quiz(_) => return,
                }
                self.current = number - 1;
            }
            PracticeIntent::TypeAnswer(text) => {
                if let PracticeMode::Typing { answer, .. } = &mut self.mode {
                    *answer = text;
                }
            }
            PracticeIntent::Check => {
                let expected = &self.cards[self.current].back;
                let policy = self.typing_policy;
                if let PracticeMode::Typing { answer, result } = &mut self.mode {
                    *result = Some(policy.check(answer, expected));
                }
            }
            PracticeIntent::Random => {
                if self.mode_kind() != ModeKind::Typing {
                    return;
                }
                if let Some(index) = self.shuffler.index(len) {
                    self.current = index;
                }
                self.mode = PracticeMode::Typing {
                    answer: String::new(),
                    result: None,
                };
            }
            PracticeIntent::Select(option) => {
                let correct = &self.cards[self.current].back;
                if let PracticeMode::Quiz(quiz) = &mut self.mode {
                    if quiz.result.is_some() || !quiz.options.contains(&option) {
                        return;
                    }
                    quiz.result = Some(choice_matches(&option, correct));
                    quiz.selected = Some(option);
                }
            }
        }
    }

    fn switch_mode(&mut self, kind: ModeKind) {
        if kind == self.mode_kind() {
            return;
        }
        self.mode = match kind {
            ModeKind::Flip => PracticeMode::Flip { flipped: false },
            ModeKind::Typing => PracticeMode::Typing {
                answer: String::new(),
                result: None,
            },
            ModeKind::Quiz => {
                let order = self.shuffler.permutation(self.cards.len());
                self.current = order[0];
                let options = self.options_for(self.current);
                PracticeMode::Quiz(QuizState {
                    order,
                    cursor: 0,
                    options,
                    selected: None,
                    result: None,
                })
            }
        };
    }

    fn advance(&mut self) {
        let len = self.cards.len();
        match &mut self.mode {
            PracticeMode::Flip { flipped } => {
                *flipped = false;
                self.current = (self.current + 1) % len;
            }
            PracticeMode::Typing { answer, result } => {
                answer.clear();
                *result = None;
                self.current = (self.current + 1) % len;
            }
            PracticeMode::Quiz(quiz) => {
                quiz.cursor = (quiz.cursor + 1) % quiz.order.len();
                quiz.selected = None;
                quiz.result = None;
                self.current = quiz.order[quiz.cursor];
                quiz.options = build_options(
                    &self.cards,
                    &self.cards[self.current].back,
                    &mut self.shuffler,
                );
            }
        }
    }

    fn options_for(&mut self, index: usize) -> Vec<String> {
        build_options(&self.cards, &self.cards[index].back, &mut self.shuffler)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck(n: usize) -> Vec<Card> {
        (0..n)
            .map(|i| Card::new(format!("front {i}"), format!("back {i}")))
            .collect()
    }

    fn session(n: usize) -> PracticeSession {
        PracticeSession::new(deck(n), Shuffler::seeded(42))
    }

    #[test]
    fn next_wraps_after_len_steps() {
        for n in 1..=6 {
            let mut s = session(n);
            for step in 1..=n {
                s.apply(PracticeIntent::Next);
                assert!(s.current_index() < n);
                if step < n {
                    assert_eq!(s.current_index(), step);
                }
            }
            assert_eq!(s.current_index(), 0);
        }
    }

    #[test]
    fn flip_toggles_and_next_resets() {
        let mut s = session(3);
        s.apply(PracticeIntent::Flip);
        assert!(s.is_flipped());
        s.apply(PracticeIntent::Next);
        assert!(!s.is_flipped());
        assert_eq!(s.progress_label().as_deref(), Some("2 / 3"));
    }

    #[test]
    fn jump_ignores_out_of_range() {
        let mut s = session(4);
        s.apply(PracticeIntent::JumpTo(3));
        assert_eq!(s.current_index(), 2);
        s.apply(PracticeIntent::JumpTo(0));
        s.apply(PracticeIntent::JumpTo(5));
        assert_eq!(s.current_index(), 2);
    }

    #[test]
    fn empty_session_ignores_everything() {
        let mut s = session(0);
        for intent in [
            PracticeIntent::Next,
            PracticeIntent::Flip,
            PracticeIntent::JumpTo(1),
            PracticeIntent::SwitchMode(ModeKind::Quiz),
            PracticeIntent::SwitchMode(ModeKind::Typing),
            PracticeIntent::Random,
            PracticeIntent::Check,
        ] {
            s.apply(intent);
        }
        assert!(s.current_card().is_none());
        assert!(s.progress_label().is_none());
        assert_eq!(s.mode_kind(), ModeKind::Flip);
    }

    #[test]
    fn typing_check_uses_contains_rule() {
        let cards = vec![Card::new("犬", "con chó"), Card::new("猫", "con mèo")];
        let mut s = PracticeSession::new(cards, Shuffler::seeded(1));
        s.apply(PracticeIntent::SwitchMode(ModeKind::Typing));
        s.apply(PracticeIntent::TypeAnswer("Chó".into()));
        s.apply(PracticeIntent::Check);
        assert_eq!(
            s.mode(),
            &PracticeMode::Typing {
                answer: "Chó".into(),
                result: Some(true)
            }
        );

        s.apply(PracticeIntent::TypeAnswer("mèo".into()));
        s.apply(PracticeIntent::Check);
        assert!(matches!(
            s.mode(),
            PracticeMode::Typing {
                result: Some(false),
                ..
            }
        ));
    }

    #[test]
    fn exact_policy_rejects_partial_answer() {
        let cards = vec![Card::new("https://img/pho.jpg", "Phở bò")];
        let mut s = PracticeSession::new(cards, Shuffler::seeded(1))
            .with_typing_policy(TypingPolicy::Exact);
        s.apply(PracticeIntent::SwitchMode(ModeKind::Typing));
        s.apply(PracticeIntent::TypeAnswer("phở".into()));
        s.apply(PracticeIntent::Check);
        assert!(matches!(
            s.mode(),
            PracticeMode::Typing {
                result: Some(false),
                ..
            }
        ));
    }

    #[test]
    fn switching_away_from_typing_clears_answer() {
        let mut s = session(2);
        s.apply(PracticeIntent::SwitchMode(ModeKind::Typing));
        s.apply(PracticeIntent::TypeAnswer("back 0".into()));
        s.apply(PracticeIntent::Check);
        s.apply(PracticeIntent::SwitchMode(ModeKind::Flip));
        s.apply(PracticeIntent::SwitchMode(ModeKind::Typing));
        assert_eq!(
            s.mode(),
            &PracticeMode::Typing {
                answer: String::new(),
                result: None
            }
        );
    }

    #[test]
    fn random_stays_in_bounds_and_resets_answer() {
        let mut s = session(5);
        s.apply(PracticeIntent::SwitchMode(ModeKind::Typing));
        for _ in 0..20 {
            s.apply(PracticeIntent::TypeAnswer("x".into()));
            s.apply(PracticeIntent::Random);
            assert!(s.current_index() < 5);
            assert!(matches!(s.mode(), PracticeMode::Typing { answer, result: None } if answer.is_empty()));
        }
    }

    #[test]
    fn random_is_ignored_outside_typing() {
        let mut s = session(5);
        s.apply(PracticeIntent::Random);
        assert_eq!(s.current_index(), 0);
    }

    #[test]
    fn quiz_walks_its_shuffled_order() {
        let mut s = session(5);
        s.apply(PracticeIntent::SwitchMode(ModeKind::Quiz));
        let order = s.quiz().unwrap().order().to_vec();
        let mut sorted = order.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![0, 1, 2, 3, 4]);
        assert_eq!(s.current_index(), order[0]);

        for expected in order.iter().skip(1).chain(order.first()) {
            s.apply(PracticeIntent::Next);
            assert_eq!(s.current_index(), *expected);
        }
    }

    #[test]
    fn quiz_options_hold_one_correct_answer() {
        let mut s = session(6);
        s.apply(PracticeIntent::SwitchMode(ModeKind::Quiz));
        for _ in 0..6 {
            let correct = s.current_card().unwrap().back.clone();
            let options = s.quiz().unwrap().options().to_vec();
            assert_eq!(options.len(), 4);
            assert_eq!(options.iter().filter(|o| **o == correct).count(), 1);
            s.apply(PracticeIntent::Next);
        }
    }

    #[test]
    fn quiz_selection_locks_and_colours_options() {
        let mut s = session(4);
        s.apply(PracticeIntent::SwitchMode(ModeKind::Quiz));
        let correct = s.current_card().unwrap().back.clone();
        let wrong = s
            .quiz()
            .unwrap()
            .options()
            .iter()
            .find(|o| **o != correct)
            .cloned()
            .unwrap();

        s.apply(PracticeIntent::Select(wrong.clone()));
        s.apply(PracticeIntent::Select(correct.clone()));
        let quiz = s.quiz().unwrap();
        assert_eq!(quiz.result(), Some(false));
        assert_eq!(quiz.selected(), Some(wrong.as_str()));
        assert_eq!(s.option_tone(&wrong), Some(OptionTone::Wrong));
        assert_eq!(s.option_tone(&correct), Some(OptionTone::Correct));

        s.apply(PracticeIntent::Next);
        let quiz = s.quiz().unwrap();
        assert_eq!(quiz.result(), None);
        assert_eq!(quiz.selected(), None);
    }

    #[test]
    fn quiz_ignores_unknown_option() {
        let mut s = session(3);
        s.apply(PracticeIntent::SwitchMode(ModeKind::Quiz));
        s.apply(PracticeIntent::Select("not an option".into()));
        assert_eq!(s.quiz().unwrap().result(), None);
    }

    #[test]
    fn single_card_quiz_has_only_the_answer() {
        let mut s = session(1);
        s.apply(PracticeIntent::SwitchMode(ModeKind::Quiz));
        assert_eq!(s.quiz().unwrap().options(), &["back 0".to_string()]);
        s.apply(PracticeIntent::Select("back 0".into()));
        assert_eq!(s.quiz().unwrap().result(), Some(true));
        s.apply(PracticeIntent::Next);
        assert_eq!(s.current_index(), 0);
    }
}
