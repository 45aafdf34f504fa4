use dioxus::prelude::*;
use dioxus_router::use_navigator;
use tracing::error;

use flash_core::model::CollectionId;
use services::{PracticeIntent, PracticeSession};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{PracticeBoard, PromptKind, ViewError, ViewState, use_loader, with_ready};
use crate::vm::map_practice;

struct PracticeData {
    name: String,
    session: PracticeSession,
}

#[component]
pub fn PracticeView(id: String) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let collections = ctx.collections();
    let study = ctx.study();

    let collection_id = CollectionId::new(id);
    let (state, mut loader) = use_loader(move || {
        let collections = collections.clone();
        let study = study.clone();
        let id = collection_id.clone();
        async move {
            match collections.get(&id).await {
                Ok(Some(collection)) => Ok(PracticeData {
                    name: collection.name().to_string(),
                    session: study.practice(collection.into_cards()),
                }),
                Ok(None) => Err(ViewError::NotFound),
                Err(err) => {
                    error!(%err, %id, "failed to load collection");
                    Err(ViewError::Unavailable)
                }
            }
        }
    });

    let on_intent = move |intent: PracticeIntent| {
        with_ready(state, |data| data.session.apply(intent));
    };

    rsx! {
        div { class: "page practice-page",
            header { class: "view-header",
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| {
                        let _ = navigator.push(Route::Home {});
                    },
                    "← Quay về Home"
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
                ViewState::Ready(data) => rsx! {
                    h2 { class: "view-title", "{data.name}" }
                    match map_practice(&data.session) {
                        Some(vm) => rsx! {
                            PracticeBoard {
                                vm,
                                prompt: PromptKind::Text,
                                speech: true,
                                on_intent,
                            }
                        },
                        None => rsx! {
                            p { class: "empty", "Không có dữ liệu" }
                        },
                    }
                },
            }
        }
    }
}
