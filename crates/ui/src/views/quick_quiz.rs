use std::time::Duration;

use dioxus::prelude::*;
use dioxus_router::use_navigator;
use tracing::error;

use services::games::{QuickQuiz, SelectOutcome, TickOutcome};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{Toaster, ViewError, ViewState, use_loader, with_ready};
use crate::vm::{countdown_key, map_quick_quiz, quiz_summary, timeout_label};

#[component]
pub fn QuickQuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let toaster = use_context::<Toaster>();
    let study = ctx.study();

    let (state, mut loader) = use_loader(move || {
        let study = study.clone();
        async move {
            study.start_quick_quiz().await.map_err(|err| {
                error!(%err, "failed to start quick quiz");
                ViewError::Unavailable
            })
        }
    });

    let countdown = use_memo(move || match &*state.read() {
        ViewState::Ready(quiz) => countdown_key(quiz),
        _ => None,
    });

    // One-shot tick. Answering, moving on or ticking changes the key, which
    // cancels the pending sleep and arms a fresh one.
    use_resource(move || async move {
        let Some((index, _)) = countdown() else {
            return;
        };
        tokio::time::sleep(Duration::from_secs(1)).await;
        let outcome =
            with_ready(state, |quiz| (quiz.index() == index).then(|| quiz.tick())).flatten();
        if let Some(TickOutcome::Expired { correct_answer }) = outcome {
            toaster.warning(timeout_label(&correct_answer));
        }
    });

    let select = move |option: String| match with_ready(state, |quiz| quiz.select(&option)) {
        Some(Some(SelectOutcome::Correct)) => toaster.success("Đúng rồi 🎉"),
        Some(Some(SelectOutcome::Wrong { correct_answer })) => {
            toaster.error(format!("Sai rồi 😢. Đáp án đúng: {correct_answer}"));
        }
        _ => {}
    };

    rsx! {
        div { class: "page quick-quiz",
            match &*state.read() {
                ViewState::Loading => rsx! {
                    p { class: "loading", "Đang tải..." }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| loader.restart(),
                        "Thử lại"
                    }
                },
                ViewState::Ready(quiz) if quiz.is_empty() => rsx! {
                    p { class: "empty", "Không có flashcard nào để chơi Quiz" }
                    BackToHub {}
                },
                ViewState::Ready(quiz) if quiz.is_finished() => rsx! {
                    div { class: "quiz-finished",
                        h2 { "Hoàn thành Quiz!" }
                        p { id: "quiz-summary", "{quiz_summary(quiz)}" }
                        div { class: "view-actions",
                            button {
                                id: "quiz-restart",
                                class: "btn btn-primary",
                                r#type: "button",
                                onclick: move |_| {
                                    with_ready(state, QuickQuiz::restart);
                                },
                                "Chơi lại"
                            }
                            BackToHub {}
                        }
                    }
                },
                ViewState::Ready(quiz) => match map_quick_quiz(quiz) {
                    Some(vm) => {
                        let timer_class = if vm.timer_urgent {
                            "timer timer--urgent"
                        } else {
                            "timer"
                        };
                        rsx! {
                            header { class: "quiz-header",
                                h2 { class: "quiz-title", "{vm.title}" }
                                span { class: timer_class, "{vm.timer_label}" }
                            }
                            div { class: "timer-bar",
                                div {
                                    class: "timer-bar__fill",
                                    style: "width: {vm.timer_percent}%",
                                }
                            }
                            p { class: "quiz-prompt", "{vm.prompt}" }
                            div { class: "quiz-options",
                                for option in vm.options.iter().cloned() {
                                    {
                                        let text = option.text.clone();
                                        rsx! {
                                            button {
                                                key: "{option.text}",
                                                class: option.class,
                                                r#type: "button",
                                                disabled: option.locked,
                                                onclick: move |_| select(text.clone()),
                                                "{option.text}"
                                            }
                                        }
                                    }
                                }
                            }
                            if let Some(message) = vm.timeout_message.clone() {
                                p { class: "feedback feedback--bad", "{message}" }
                            }
                            if vm.answered {
                                button {
                                    id: "quiz-next",
                                    class: "btn btn-primary",
                                    r#type: "button",
                                    onclick: move |_| {
                                        with_ready(state, QuickQuiz::next);
                                    },
                                    "{vm.next_label}"
                                }
                            }
                            BackToHub {}
                        }
                    }
                    None => rsx! {},
                },
            }
        }
    }
}

#[component]
pub(super) fn BackToHub() -> Element {
    let navigator = use_navigator();
    rsx! {
        button {
            class: "btn btn-secondary",
            r#type: "button",
            onclick: move |_| {
                let _ = navigator.push(Route::QuizHub {});
            },
            "Quay lại"
        }
    }
}
