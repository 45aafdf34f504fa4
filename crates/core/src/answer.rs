//! Answer comparison rules shared by the practice modes and the quizzes.

/// Trim and lower-case a user-visible answer for comparison.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Lenient typing check: the expected answer only has to *contain* what was typed.
///
/// Both sides are normalized first. A blank typed answer never counts.
#[must_use]
pub fn typed_answer_contained(typed: &str, expected: &str) -> bool {
    let typed = normalize(typed);
    if typed.is_empty() {
        return false;
    }
    normalize(expected).contains(&typed)
}

/// Strict typing check used by picture cards: normalized equality.
#[must_use]
pub fn typed_answer_exact(typed: &str, expected: &str) -> bool {
    let typed = normalize(typed);
    !typed.is_empty() && typed == normalize(expected)
}

/// Multiple-choice check: normalized equality against the correct option.
#[must_use]
pub fn choice_matches(selected: &str, correct: &str) -> bool {
    normalize(selected) == normalize(correct)
}
