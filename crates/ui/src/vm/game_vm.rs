use services::games::{MatchGame, QUESTION_SECONDS, QuickQuiz};

use super::practice_vm::{OptionVm, option_class};

/// Countdown below this many seconds is drawn as urgent.
const URGENT_SECONDS: u32 = 3;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuickQuizVm {
    pub title: String,
    pub prompt: String,
    pub timer_label: String,
    pub timer_percent: u32,
    pub timer_urgent: bool,
    pub options: Vec<OptionVm>,
    pub answered: bool,
    pub next_label: &'static str,
    pub timeout_message: Option<String>,
}

#[must_use]
pub fn map_quick_quiz(quiz: &QuickQuiz) -> Option<QuickQuizVm> {
    let question = quiz.current()?;
    let time_left = quiz.time_left();
    let options = question
        .options
        .iter()
        .map(|text| OptionVm {
            text: text.clone(),
            class: option_class(quiz.option_tone(text)),
            locked: quiz.is_answered(),
        })
        .collect();
    let is_last = quiz.index() + 1 >= quiz.total();

    Some(QuickQuizVm {
        title: format!("Câu {} / {}", quiz.index() + 1, quiz.total()),
        prompt: question.prompt.clone(),
        timer_label: format!("⏱ {time_left}s"),
        timer_percent: time_left * 100 / QUESTION_SECONDS,
        timer_urgent: time_left <= URGENT_SECONDS,
        options,
        answered: quiz.is_answered(),
        next_label: if is_last { "Hoàn thành" } else { "Câu tiếp theo" },
        timeout_message: quiz
            .is_timed_out()
            .then(|| timeout_label(&question.correct_answer)),
    })
}

/// What the countdown waits on: the open question and its remaining seconds.
///
/// `None` while nothing should count. Any change re-arms the one-second timer,
/// so a new question always gets a full second before its first tick.
#[must_use]
pub fn countdown_key(quiz: &QuickQuiz) -> Option<(usize, u32)> {
    quiz.is_counting().then(|| (quiz.index(), quiz.time_left()))
}

#[must_use]
pub fn timeout_label(answer: &str) -> String {
    format!("Hết giờ! Đáp án đúng: {answer}")
}

#[must_use]
pub fn quiz_summary(quiz: &QuickQuiz) -> String {
    format!("Bạn trả lời đúng {}/{} câu 🎉", quiz.score(), quiz.total())
}

#[must_use]
pub fn match_summary(game: &MatchGame) -> String {
    format!(
        "Bạn ghép đúng {}/{} cặp",
        game.resolved_count(),
        game.total()
    )
}

#[must_use]
pub fn slot_class(resolved: bool, wrong: bool) -> &'static str {
    match (resolved, wrong) {
        (true, _) => "match-slot match-slot--resolved",
        (false, true) => "match-slot match-slot--wrong",
        (false, false) => "match-slot",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flash_core::model::{Card, PairId};
    use services::Shuffler;

    fn pool() -> Vec<Card> {
        (0..4)
            .map(|i| Card::new(format!("q{i}"), format!("a{i}")))
            .collect()
    }

    #[test]
    fn quiz_snapshot_tracks_timer() {
        let mut quiz = QuickQuiz::new(&pool(), Shuffler::seeded(2));
        let vm = map_quick_quiz(&quiz).unwrap();
        assert_eq!(vm.title, "Câu 1 / 4");
        assert_eq!(vm.timer_percent, 100);
        assert!(!vm.timer_urgent);

        for _ in 0..7 {
            quiz.tick();
        }
        let vm = map_quick_quiz(&quiz).unwrap();
        assert_eq!(vm.timer_label, "⏱ 3s");
        assert_eq!(vm.timer_percent, 30);
        assert!(vm.timer_urgent);
    }

    #[test]
    fn timeout_reveals_answer() {
        let mut quiz = QuickQuiz::new(&pool(), Shuffler::seeded(2));
        for _ in 0..QUESTION_SECONDS {
            quiz.tick();
        }
        let vm = map_quick_quiz(&quiz).unwrap();
        let answer = quiz.current().unwrap().correct_answer.clone();
        assert_eq!(vm.timeout_message, Some(timeout_label(&answer)));
        assert!(vm.answered);
        assert_eq!(vm.next_label, "Câu tiếp theo");
    }

    #[test]
    fn countdown_key_rearms_per_question_and_stops_on_answer() {
        let mut quiz = QuickQuiz::new(&pool(), Shuffler::seeded(2));
        assert_eq!(countdown_key(&quiz), Some((0, QUESTION_SECONDS)));

        quiz.tick();
        assert_eq!(countdown_key(&quiz), Some((0, QUESTION_SECONDS - 1)));

        let answer = quiz.current().unwrap().correct_answer.clone();
        quiz.select(&answer);
        assert_eq!(countdown_key(&quiz), None);

        quiz.next();
        assert_eq!(countdown_key(&quiz), Some((1, QUESTION_SECONDS)));

        for _ in 0..QUESTION_SECONDS {
            quiz.tick();
        }
        assert_eq!(countdown_key(&quiz), None);
    }

    #[test]
    fn summaries_report_scores() {
        let mut game = MatchGame::new(pool(), Shuffler::seeded(2));
        game.drop_chip(PairId::new(0), PairId::new(0));
        assert_eq!(match_summary(&game), "Bạn ghép đúng 1/4 cặp");

        let quiz = QuickQuiz::new(&pool(), Shuffler::seeded(2));
        assert_eq!(quiz_summary(&quiz), "Bạn trả lời đúng 0/4 câu 🎉");
    }

    #[test]
    fn resolved_slot_wins_over_wrong_flag() {
        assert_eq!(slot_class(true, true), "match-slot match-slot--resolved");
        assert_eq!(slot_class(false, true), "match-slot match-slot--wrong");
    }
}
