use services::practice::{ModeKind, OptionTone, PracticeMode, PracticeSession};

/// Mode tabs in display order.
pub const MODE_TABS: [(ModeKind, &str); 3] = [
    (ModeKind::Flip, "Lật thẻ"),
    (ModeKind::Typing, "Gõ đáp án"),
    (ModeKind::Quiz, "Trắc nghiệm"),
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub text: String,
    pub class: &'static str,
    pub locked: bool,
}

#[must_use]
pub fn option_class(tone: OptionTone) -> &'static str {
    match tone {
        OptionTone::Open => "quiz-option",
        OptionTone::Correct => "quiz-option quiz-option--correct",
        OptionTone::Wrong => "quiz-option quiz-option--wrong",
        OptionTone::Neutral => "quiz-option quiz-option--neutral",
    }
}

/// Feedback line for a locked answer.
#[must_use]
pub fn verdict_label(correct: bool, answer: &str) -> String {
    if correct {
        "Chính xác! 🎉".to_string()
    } else {
        format!("Sai rồi. Đáp án đúng: {answer}")
    }
}

/// Render snapshot of a practice session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PracticeVm {
    pub mode: ModeKind,
    pub progress: String,
    pub position: usize,
    pub len: usize,
    pub front: String,
    pub back: String,
    pub flipped: bool,
    pub typed: String,
    pub feedback: Option<(bool, String)>,
    pub options: Vec<OptionVm>,
}

/// `None` for an empty session; the view shows its empty state instead.
#[must_use]
pub fn map_practice(session: &PracticeSession) -> Option<PracticeVm> {
    let card = session.current_card()?;
    let (typed, verdict) = match session.mode() {
        PracticeMode::Flip { .. } => (String::new(), None),
        PracticeMode::Typing { answer, result } => (answer.clone(), *result),
        PracticeMode::Quiz(quiz) => (String::new(), quiz.result()),
    };
    let options = session
        .quiz()
        .map(|quiz| {
            quiz.options()
                .iter()
                .map(|text| OptionVm {
                    text: text.clone(),
                    class: option_class(session.option_tone(text).unwrap_or(OptionTone::Open)),
                    locked: quiz.result().is_some(),
                })
                .collect()
        })
        .unwrap_or_default();

    Some(PracticeVm {
        mode: session.mode_kind(),
        progress: session.progress_label().unwrap_or_default(),
        position: session.current_index() + 1,
        len: session.len(),
        front: card.front.clone(),
        back: card.back.clone(),
        flipped: session.is_flipped(),
        typed,
        feedback: verdict.map(|ok| (ok, verdict_label(ok, &card.back))),
        options,
    })
}
