use dioxus::prelude::*;
use dioxus_router::use_navigator;
use tracing::{error, warn};

use flash_core::model::CollectionId;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{Toaster, ViewError, ViewState, use_loader, with_ready};
use crate::vm::{BrowserFilter, TAG_OPTIONS, remove_local, restore_local, visible_collections};

#[derive(Clone, Debug, PartialEq, Eq)]
struct DeleteTarget {
    id: CollectionId,
    name: String,
}

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let toaster = use_context::<Toaster>();
    let navigator = use_navigator();
    let collections = ctx.collections();

    let mut search = use_signal(String::new);
    let mut tag_filter = use_signal(|| None::<String>);
    let mut delete_target = use_signal(|| None::<DeleteTarget>);
    let mut show_create = use_signal(|| false);
    let mut new_name = use_signal(String::new);
    let mut adding = use_signal(|| false);

    let collections_for_load = collections.clone();
    let (state, mut loader) = use_loader(move || {
        let service = collections_for_load.clone();
        async move {
            service.list().await.map_err(|err| {
                error!(%err, "failed to load collections");
                ViewError::Unavailable
            })
        }
    });

    let collections_for_delete = collections.clone();
    let confirm_delete = use_callback(move |()| {
        let Some(target) = delete_target.take() else {
            return;
        };
        let service = collections_for_delete.clone();
        let removed = with_ready(state, |list| remove_local(list, &target.id)).flatten();
        spawn(async move {
            match service.delete(&target.id).await {
                Ok(()) => toaster.success("Đã xoá"),
                Err(err) => {
                    warn!(%err, id = %target.id, "delete failed; restoring");
                    if let Some(removed) = removed {
                        with_ready(state, |list| restore_local(list, removed));
                    }
                    toaster.error("Xoá thất bại");
                }
            }
        });
    });

    let collections_for_create = collections.clone();
    let submit_create = use_callback(move |()| {
        if adding() {
            return;
        }
        let name = new_name();
        if name.trim().is_empty() {
            toaster.warning("Tên bộ sưu tập không được để trống");
            return;
        }
        let service = collections_for_create.clone();
        let mut adding = adding;
        let mut new_name = new_name;
        let mut show_create = show_create;
        spawn(async move {
            adding.set(true);
            match service.create(&name).await {
                Ok(created) => {
                    with_ready(state, |list| list.push(created));
                    new_name.set(String::new());
                    show_create.set(false);
                    toaster.success("Thêm thành công");
                }
                Err(err) => {
                    warn!(%err, "create failed");
                    toaster.error("Thêm thất bại");
                }
            }
            adding.set(false);
        });
    });

    let filter = BrowserFilter {
        query: search(),
        tag: tag_filter(),
    };
    let tag_value = tag_filter().unwrap_or_default();

    rsx! {
        div { class: "page home-page",
            header { class: "view-header",
                h2 { class: "view-title", "Bộ sưu tập" }
                div { class: "view-actions",
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| {
                            let _ = navigator.push(Route::Foods {});
                        },
                        "Foods"
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| {
                            let _ = navigator.push(Route::QuizHub {});
                        },
                        "Crazy Mode"
                    }
                    button {
                        id: "open-create",
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| show_create.set(true),
                        "Thêm mới"
                    }
                }
            }
            div { class: "browser-filters",
                input {
                    id: "collection-search",
                    class: "input",
                    placeholder: "Tìm kiếm bộ sưu tập...",
                    value: "{search}",
                    oninput: move |evt| search.set(evt.value()),
                }
                select {
                    id: "collection-tag",
                    class: "input",
                    value: "{tag_value}",
                    onchange: move |evt| tag_filter.set(BrowserFilter::tag_from_select(&evt.value())),
                    option { value: "", "Lọc theo tag" }
                    for tag in TAG_OPTIONS {
                        option { key: "{tag}", value: tag, "{tag}" }
                    }
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
                ViewState::Ready(list) => {
                    let cards = visible_collections(list, &filter);
                    if cards.is_empty() {
                        rsx! {
                            p { class: "empty", "Không có kết quả phù hợp" }
                        }
                    } else {
                        rsx! {
                            div { class: "collection-grid",
                                for card in cards {
                                    {
                                        let id = card.id.clone();
                                        let edit_id = card.id.clone();
                                        let delete_id = card.id.clone();
                                        let delete_name = card.name.clone();
                                        rsx! {
                                            div {
                                                key: "{card.id}",
                                                class: "collection-card",
                                                onclick: move |_| {
                                                    let _ = navigator.push(Route::Practice {
                                                        id: id.as_str().to_string(),
                                                    });
                                                },
                                                h3 { class: "collection-name", "{card.name}" }
                                                div { class: "collection-meta",
                                                    if let Some(tag) = card.tag_label.as_ref() {
                                                        span { class: "pill pill--tag", "{tag}" }
                                                    }
                                                    span { class: "pill pill--count", "{card.count_label}" }
                                                }
                                                div { class: "collection-actions",
                                                    button {
                                                        class: "btn btn-icon",
                                                        r#type: "button",
                                                        title: "Sửa",
                                                        onclick: move |evt: MouseEvent| {
                                                            evt.stop_propagation();
                                                            let _ = navigator.push(Route::Editor {
                                                                id: edit_id.as_str().to_string(),
                                                            });
                                                        },
                                                        "✎"
                                                    }
                                                    button {
                                                        class: "btn btn-icon btn-danger",
                                                        r#type: "button",
                                                        title: "Xoá",
                                                        onclick: move |evt: MouseEvent| {
                                                            evt.stop_propagation();
                                                            delete_target.set(Some(DeleteTarget {
                                                                id: delete_id.clone(),
                                                                name: delete_name.clone(),
                                                            }));
                                                        },
                                                        "🗑"
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            if let Some(target) = delete_target() {
                div { class: "modal-backdrop",
                    div { class: "modal", role: "dialog",
                        h3 { "Xác nhận xoá" }
                        p { "Bạn có chắc chắn muốn xoá bộ sưu tập \"{target.name}\"?" }
                        div { class: "modal-actions",
                            button {
                                class: "btn btn-secondary",
                                r#type: "button",
                                onclick: move |_| delete_target.set(None),
                                "Hủy"
                            }
                            button {
                                id: "confirm-delete",
                                class: "btn btn-danger",
                                r#type: "button",
                                onclick: move |_| confirm_delete.call(()),
                                "Xoá"
                            }
                        }
                    }
                }
            }
            if show_create() {
                div { class: "modal-backdrop",
                    div { class: "modal", role: "dialog",
                        h3 { "Thêm bộ sưu tập mới" }
                        input {
                            id: "new-collection-name",
                            class: "input",
                            placeholder: "Tên bộ sưu tập...",
                            value: "{new_name}",
                            oninput: move |evt| new_name.set(evt.value()),
                        }
                        div { class: "modal-actions",
                            button {
                                class: "btn btn-secondary",
                                r#type: "button",
                                onclick: move |_| show_create.set(false),
                                "Hủy"
                            }
                            button {
                                id: "submit-create",
                                class: "btn btn-primary",
                                r#type: "button",
                                disabled: adding(),
                                onclick: move |_| submit_create.call(()),
                                if adding() { "Đang lưu..." } else { "Lưu" }
                            }
                        }
                    }
                }
            }
        }
    }
}
