use dioxus::prelude::*;
use dioxus_router::use_navigator;
use tracing::error;

use flash_core::model::PairId;
use services::games::{DropOutcome, MatchGame, WRONG_FLASH};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::quick_quiz::BackToHub;
use crate::views::{Toaster, ViewError, ViewState, use_loader, with_ready};
use crate::vm::{match_summary, slot_class};

#[component]
pub fn MatchGameView() -> Element {
    let ctx = use_context::<AppContext>();
    let toaster = use_context::<Toaster>();
    let navigator = use_navigator();
    let study = ctx.study();

    let mut dragging = use_signal(|| None::<PairId>);

    let (state, mut loader) = use_loader(move || {
        let study = study.clone();
        async move {
            study.start_match_game().await.map_err(|err| {
                error!(%err, "failed to start match game");
                ViewError::Unavailable
            })
        }
    });

    let mut drop_on = move |slot: PairId| {
        let Some(chip) = dragging.take() else {
            return;
        };
        match with_ready(state, |game| game.drop_chip(chip, slot)) {
            Some(DropOutcome::Matched) => toaster.success("Ghép đúng! 🎉"),
            Some(DropOutcome::Mismatched { token }) => {
                toaster.error("Sai rồi 😢");
                spawn(async move {
                    tokio::time::sleep(WRONG_FLASH).await;
                    with_ready(state, |game| game.clear_wrong(token));
                });
            }
            _ => {}
        }
    };

    rsx! {
        div { class: "page match-game",
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
                ViewState::Ready(game) if game.is_empty() => rsx! {
                    p { class: "empty", "Không có dữ liệu để chơi Match Game" }
                    BackToHub {}
                },
                ViewState::Ready(game) if game.is_finished() => rsx! {
                    div { class: "match-finished",
                        h2 { "🎉 Hoàn thành Match Game!" }
                        p { id: "match-summary", "{match_summary(game)}" }
                        div { class: "view-actions",
                            button {
                                id: "match-restart",
                                class: "btn btn-primary",
                                r#type: "button",
                                onclick: move |_| {
                                    with_ready(state, MatchGame::restart);
                                },
                                "Chơi lại"
                            }
                            BackToHub {}
                        }
                    }
                },
                ViewState::Ready(game) => {
                    let chips: Vec<_> = game.open_chips().cloned().collect();
                    rsx! {
                        header { class: "view-header",
                            h2 { class: "view-title", "Match Game" }
                            span { class: "pill", "{game.resolved_count()} / {game.total()}" }
                        }
                        div { class: "match-board",
                            div { class: "match-slots",
                                for pair in game.pairs().iter().cloned() {
                                    {
                                        let slot = pair.id;
                                        let resolved = game.is_resolved(slot);
                                        let class = slot_class(resolved, game.is_wrong(slot));
                                        rsx! {
                                            div {
                                                key: "{slot.value()}",
                                                class,
                                                ondragover: move |evt: DragEvent| evt.prevent_default(),
                                                ondrop: move |evt: DragEvent| {
                                                    evt.prevent_default();
                                                    drop_on(slot);
                                                },
                                                span { class: "match-front", "{pair.front}" }
                                                if resolved {
                                                    span { class: "match-back", "{pair.back}" }
                                                } else {
                                                    span { class: "match-placeholder", "Thả vào đây" }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                            div { class: "match-tray",
                                if chips.is_empty() {
                                    p { class: "empty", "Bạn đã kéo hết các thẻ rồi!" }
                                }
                                for chip in chips {
                                    {
                                        let id = chip.pair_id;
                                        rsx! {
                                            div {
                                                key: "{id.value()}",
                                                class: "match-chip",
                                                draggable: "true",
                                                ondragstart: move |_| dragging.set(Some(id)),
                                                ondragend: move |_| dragging.set(None),
                                                "{chip.text}"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            onclick: move |_| {
                                let _ = navigator.push(Route::QuizHub {});
                            },
                            "Thoát"
                        }
                    }
                }
            }
        }
    }
}
