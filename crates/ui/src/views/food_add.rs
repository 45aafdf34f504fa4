use dioxus::prelude::*;
use dioxus_router::use_navigator;
use tracing::warn;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::Toaster;

#[component]
pub fn FoodAddView() -> Element {
    let ctx = use_context::<AppContext>();
    let toaster = use_context::<Toaster>();
    let navigator = use_navigator();
    let foods = ctx.foods();

    let mut name = use_signal(String::new);
    let mut image_url = use_signal(String::new);
    let mut saving = use_signal(|| false);

    let submit = use_callback(move |()| {
        if saving() {
            return;
        }
        let (name_value, url_value) = (name(), image_url());
        if name_value.trim().is_empty() && url_value.trim().is_empty() {
            toaster.warning("Cần nhập tên món hoặc link ảnh!");
            return;
        }
        let service = foods.clone();
        let mut saving = saving;
        let mut name = name;
        let mut image_url = image_url;
        spawn(async move {
            saving.set(true);
            match service.add(&name_value, &url_value).await {
                Ok(_) => {
                    name.set(String::new());
                    image_url.set(String::new());
                    toaster.success("Thêm card thành công!");
                }
                Err(err) if err.is_validation() => {
                    warn!(%err, "food rejected before sending");
                    toaster.warning("Link ảnh không hợp lệ");
                }
                Err(err) => {
                    warn!(%err, "add food failed");
                    toaster.error("Thêm card thất bại");
                }
            }
            saving.set(false);
        });
    });

    let preview = image_url();

    rsx! {
        div { class: "page food-add-page",
            header { class: "view-header",
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| {
                        let _ = navigator.push(Route::Foods {});
                    },
                    "← Quay lại"
                }
                h2 { class: "view-title", "Thêm món ăn" }
            }
            div { class: "form",
                label { class: "field",
                    span { "Tên món" }
                    input {
                        id: "food-name",
                        class: "input",
                        placeholder: "Tên món",
                        value: "{name}",
                        oninput: move |evt| name.set(evt.value()),
                    }
                }
                label { class: "field",
                    span { "Link ảnh" }
                    input {
                        id: "food-image-url",
                        class: "input",
                        placeholder: "https://...",
                        value: "{image_url}",
                        oninput: move |evt| image_url.set(evt.value()),
                    }
                }
                if !preview.trim().is_empty() {
                    img { class: "food-preview", src: "{preview}", alt: "" }
                }
                button {
                    id: "save-food",
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: saving(),
                    onclick: move |_| submit.call(()),
                    if saving() { "Đang lưu..." } else { "Lưu" }
                }
            }
        }
    }
}
