use dioxus::prelude::*;
use dioxus_router::Router;

use crate::routes::Route;
use crate::views::Toaster;

#[component]
pub fn App() -> Element {
    use_context_provider(Toaster::new);

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        // Stable OS/window title. Per-route titles are rendered inside the page.
        document::Title { "Flashcards" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
