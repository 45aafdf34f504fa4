use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::routes::Route;

#[component]
pub fn QuizHubView() -> Element {
    let navigator = use_navigator();

    rsx! {
        div { class: "page quiz-hub",
            h2 { class: "view-title", "Crazy Mode" }
            div { class: "hub-grid",
                button {
                    id: "open-quick-quiz",
                    class: "hub-card",
                    r#type: "button",
                    onclick: move |_| {
                        let _ = navigator.push(Route::QuickQuiz {});
                    },
                    h3 { "Quick Quiz" }
                    p { "Trả lời nhanh trong 10 giây" }
                }
                button {
                    id: "open-match-game",
                    class: "hub-card",
                    r#type: "button",
                    onclick: move |_| {
                        let _ = navigator.push(Route::MatchGame {});
                    },
                    h3 { "Match Game" }
                    p { "Kéo thả để ghép cặp" }
                }
            }
            button {
                class: "btn btn-secondary",
                r#type: "button",
                onclick: move |_| {
                    let _ = navigator.push(Route::Home {});
                },
                "← Quay về Home"
            }
        }
    }
}
