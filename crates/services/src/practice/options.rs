use std::collections::HashSet;

use flash_core::answer::normalize;
use flash_core::model::Card;

use crate::shuffle::Shuffler;

/// How many wrong answers sit next to the correct one.
pub const DISTRACTORS: usize = 3;

/// How an answer option should be presented.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionTone {
    /// Nothing chosen yet; the option is clickable.
    Open,
    /// The correct answer, revealed once the question is locked.
    Correct,
    /// The option the user picked, and it was wrong.
    Wrong,
    /// Any other option after the question is locked.
    Neutral,
}

impl OptionTone {
    /// Tone of `option` given the correct answer and the lock state.
    #[must_use]
    pub fn for_option(option: &str, correct: &str, selected: Option<&str>, locked: bool) -> Self {
        if !locked {
            return Self::Open;
        }
        if option == correct {
            Self::Correct
        } else if selected == Some(option) {
            Self::Wrong
        } else {
            Self::Neutral
        }
    }
}

/// Build a shuffled multiple-choice set for `correct`.
///
/// Distractors are drawn without replacement from the distinct back texts of
/// `pool`, excluding anything that normalizes to the correct answer. The
/// result holds `min(DISTRACTORS + 1, distinct backs)` options with exactly one
/// equal to `correct`.
#[must_use]
pub fn build_options(pool: &[Card], correct: &str, shuffler: &mut Shuffler) -> Vec<String> {
    let correct_key = normalize(correct);
    let mut seen = HashSet::from([correct_key]);
    let candidates: Vec<String> = pool
        .iter()
        .filter(|card| seen.insert(normalize(&card.back)))
        .map(|card| card.back.clone())
        .collect();

    let mut options = shuffler.sample(candidates, DISTRACTORS);
    options.push(correct.to_string());
    shuffler.shuffled(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(backs: &[&str]) -> Vec<Card> {
        backs
            .iter()
            .enumerate()
            .map(|(i, back)| Card::new(format!("f{i}"), *back))
            .collect()
    }

    #[test]
    fn four_options_with_one_correct() {
        let pool = cards(&["chó", "mèo", "gà", "vịt", "bò", "lợn"]);
        for seed in 0..20 {
            let options = build_options(&pool, "chó", &mut Shuffler::seeded(seed));
            assert_eq!(options.len(), 4);
            assert_eq!(options.iter().filter(|o| o.as_str() == "chó").count(), 1);
        }
    }

    #[test]
    fn small_pool_uses_what_is_available() {
        let pool = cards(&["chó", "mèo"]);
        let options = build_options(&pool, "chó", &mut Shuffler::seeded(1));
        let mut sorted = options.clone();
        sorted.sort();
        assert_eq!(sorted, vec!["chó".to_string(), "mèo".to_string()]);
    }

    #[test]
    fn duplicates_and_case_variants_are_dropped() {
        let pool = cards(&["chó", "Chó ", "mèo", "mèo", "gà"]);
        let options = build_options(&pool, "chó", &mut Shuffler::seeded(4));
        assert_eq!(options.len(), 3);
        assert_eq!(
            options
                .iter()
                .filter(|o| normalize(o) == "chó")
                .count(),
            1
        );
    }

    #[test]
    fn single_card_pool_yields_only_the_answer() {
        let pool = cards(&["chó"]);
        assert_eq!(
            build_options(&pool, "chó", &mut Shuffler::seeded(2)),
            vec!["chó".to_string()]
        );
    }

    #[test]
    fn tone_reflects_lock_state() {
        assert_eq!(OptionTone::for_option("a", "a", None, false), OptionTone::Open);
        assert_eq!(OptionTone::for_option("a", "a", Some("b"), true), OptionTone::Correct);
        assert_eq!(OptionTone::for_option("b", "a", Some("b"), true), OptionTone::Wrong);
        assert_eq!(OptionTone::for_option("c", "a", Some("b"), true), OptionTone::Neutral);
        assert_eq!(OptionTone::for_option("c", "a", None, true), OptionTone::Neutral);
    }
}
