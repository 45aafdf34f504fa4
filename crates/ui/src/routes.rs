use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{
    EditorView, FoodAddView, FoodsView, HomeView, MatchGameView, PracticeView, QuickQuizView,
    QuizHubView, ToastHost,
};

#[derive(Clone, Debug, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/collections/:id", PracticeView)] Practice { id: String },
        #[route("/collections/:id/edit", EditorView)] Editor { id: String },
        #[route("/quiz", QuizHubView)] QuizHub {},
        #[route("/quiz/quick", QuickQuizView)] QuickQuiz {},
        #[route("/quiz/match", MatchGameView)] MatchGame {},
        #[route("/foods", FoodsView)] Foods {},
        #[route("/foods/add", FoodAddView)] FoodAdd {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            TopBar {}
            main { class: "content",
                Outlet::<Route> {}
            }
            ToastHost {}
        }
    }
}

#[component]
fn TopBar() -> Element {
    rsx! {
        nav { class: "topbar",
            h1 { "Flashcards" }
            ul {
                li { Link { to: Route::Home {}, "Bộ sưu tập" } }
                li { Link { to: Route::QuizHub {}, "Crazy Mode" } }
                li { Link { to: Route::Foods {}, "Foods" } }
            }
        }
    }
}
