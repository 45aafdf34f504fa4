use dioxus::prelude::*;
use dioxus_router::use_navigator;
use tracing::error;

use services::PracticeIntent;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{PracticeBoard, PromptKind, ViewError, ViewState, use_loader, with_ready};
use crate::vm::map_practice;

/// Picture practice: the image is the prompt and the dish name the answer.
#[component]
pub fn FoodsView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let study = ctx.study();

    let (state, mut loader) = use_loader(move || {
        let study = study.clone();
        async move {
            study.start_food_practice().await.map_err(|err| {
                error!(%err, "failed to load foods");
                ViewError::Unavailable
            })
        }
    });

    let on_intent = move |intent: PracticeIntent| {
        with_ready(state, |session| session.apply(intent));
    };

    rsx! {
        div { class: "page foods-page",
            header { class: "view-header",
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| {
                        let _ = navigator.push(Route::Home {});
                    },
                    "← Quay về Home"
                }
                h2 { class: "view-title", "Foods" }
                button {
                    id: "open-food-add",
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| {
                        let _ = navigator.push(Route::FoodAdd {});
                    },
                    "Thêm món"
                }
            }
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
                ViewState::Ready(session) => match map_practice(session) {
                    Some(vm) => rsx! {
                        PracticeBoard {
                            vm,
                            prompt: PromptKind::Image,
                            speech: false,
                            on_intent,
                        }
                    },
                    None => rsx! {
                        p { class: "empty", "Không có dữ liệu" }
                    },
                },
            }
        }
    }
}
