use dioxus::prelude::*;
use dioxus_router::use_navigator;
use tracing::{error, warn};

use flash_core::model::{Card, CardSide, Collection, CollectionId};

use crate::context::AppContext;
use crate::routes::Route;
use crate::scripts::read_picked_file;
use crate::views::{Toaster, ViewError, ViewState, use_loader, with_ready};

const IMPORT_INPUT_ID: &str = "import-file";

#[component]
pub fn EditorView(id: String) -> Element {
    let ctx = use_context::<AppContext>();
    let toaster = use_context::<Toaster>();
    let navigator = use_navigator();
    let collections = ctx.collections();

    let mut saving = use_signal(|| false);

    let collection_id = CollectionId::new(id);
    let collections_for_load = collections.clone();
    let (draft, mut loader) = use_loader(move || {
        let service = collections_for_load.clone();
        let id = collection_id.clone();
        async move {
            match service.get(&id).await {
                Ok(Some(collection)) => Ok(collection),
                Ok(None) => Err(ViewError::NotFound),
                Err(err) => {
                    error!(%err, %id, "failed to load collection for editing");
                    Err(ViewError::Unavailable)
                }
            }
        }
    });

    let edit = move |index: usize, side: CardSide, value: String| {
        let result = with_ready(draft, |collection| collection.edit_card(index, side, value));
        if let Some(Err(err)) = result {
            warn!(%err, "edit ignored");
        }
    };

    let remove = move |index: usize| {
        if let Some(Err(err)) = with_ready(draft, |collection| collection.remove_card(index)) {
            warn!(%err, "remove ignored");
        }
    };

    let collections_for_import = collections.clone();
    let import = use_callback(move |()| {
        let service = collections_for_import.clone();
        spawn(async move {
            let Some(text) = read_picked_file(IMPORT_INPUT_ID).await else {
                return;
            };
            match with_ready(draft, |collection| service.import_into(collection, &text)) {
                Some(Ok(report)) => {
                    toaster.success(format!("Đã nhập {} thẻ", report.cards.len()));
                }
                Some(Err(err)) => {
                    warn!(%err, "import failed");
                    toaster.error("Không đọc được file");
                }
                None => {}
            }
        });
    });

    let collections_for_save = collections.clone();
    let save = use_callback(move |()| {
        if saving() {
            return;
        }
        let Some(snapshot) = with_ready(draft, |collection: &mut Collection| collection.clone())
        else {
            return;
        };
        let service = collections_for_save.clone();
        let mut saving = saving;
        spawn(async move {
            saving.set(true);
            match service.save(&snapshot).await {
                Ok(()) => {
                    toaster.success("Lưu thành công");
                    let _ = navigator.push(Route::Home {});
                }
                Err(err) => {
                    error!(%err, id = %snapshot.id(), "save failed");
                    toaster.error("Lưu thất bại");
                }
            }
            saving.set(false);
        });
    });

    rsx! {
        div { class: "page editor-page",
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
            match &*draft.read() {
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
                ViewState::Ready(collection) => rsx! {
                    h2 { class: "view-title", "Sửa: {collection.name()}" }
                    div { class: "editor-import",
                        label { r#for: IMPORT_INPUT_ID, "Nhập từ file CSV: " }
                        input {
                            id: IMPORT_INPUT_ID,
                            r#type: "file",
                            accept: ".csv,.txt,text/csv,text/plain",
                            onchange: move |_| import.call(()),
                        }
                    }
                    table { class: "editor-table",
                        thead {
                            tr {
                                th { "#" }
                                th { "Mặt trước" }
                                th { "Mặt sau" }
                                th {}
                            }
                        }
                        tbody {
                            for (index, card) in collection.cards().iter().enumerate() {
                                EditorRow {
                                    key: "{index}",
                                    index,
                                    card: card.clone(),
                                    on_edit: move |(side, value): (CardSide, String)| edit(index, side, value),
                                    on_remove: move |()| remove(index),
                                }
                            }
                        }
                    }
                    if collection.is_empty() {
                        p { class: "empty", "Chưa có thẻ nào" }
                    }
                    div { class: "editor-actions",
                        button {
                            id: "add-row",
                            class: "btn btn-secondary",
                            r#type: "button",
                            onclick: move |_| {
                                with_ready(draft, |collection| collection.push_card(Card::blank()));
                            },
                            "Thêm dòng"
                        }
                        button {
                            id: "save-collection",
                            class: "btn btn-primary",
                            r#type: "button",
                            disabled: saving(),
                            onclick: move |_| save.call(()),
                            if saving() { "Đang lưu..." } else { "Lưu" }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn EditorRow(
    index: usize,
    card: Card,
    on_edit: EventHandler<(CardSide, String)>,
    on_remove: EventHandler<()>,
) -> Element {
    let position = index + 1;
    rsx! {
        tr { class: "editor-row",
            td { class: "editor-index", "{position}" }
            td {
                input {
                    class: "input",
                    value: "{card.front}",
                    oninput: move |evt| on_edit.call((CardSide::Front, evt.value())),
                }
            }
            td {
                input {
                    class: "input",
                    value: "{card.back}",
                    oninput: move |evt| on_edit.call((CardSide::Back, evt.value())),
                }
            }
            td {
                button {
                    class: "btn btn-icon btn-danger",
                    r#type: "button",
                    title: "Xoá dòng",
                    onclick: move |_| on_remove.call(()),
                    "🗑"
                }
            }
        }
    }
}
