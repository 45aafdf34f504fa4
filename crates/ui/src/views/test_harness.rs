use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{AppServices, CollectionService, FoodService, StudyService};
use storage::repository::{InMemoryRepository, Storage};

use crate::context::{UiApp, build_app_context};
use crate::views::{
    EditorView, FoodAddView, FoodsView, HomeView, MatchGameView, PracticeView, QuickQuizView,
    QuizHubView, Toaster,
};

const SEED: u64 = 7;

struct TestApp {
    services: AppServices,
}

impl UiApp for TestApp {
    fn collections(&self) -> Arc<CollectionService> {
        self.services.collections()
    }

    fn foods(&self) -> Arc<FoodService> {
        self.services.foods()
    }

    fn study(&self) -> Arc<StudyService> {
        self.services.study()
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Practice(String),
    Editor(String),
    QuizHub,
    QuickQuiz,
    MatchGame,
    Foods,
    FoodAdd,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(Toaster::new);
    use_context_provider(|| props.view.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    match use_context::<ViewKind>() {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Practice(id) => rsx! { PracticeView { id } },
        ViewKind::Editor(id) => rsx! { EditorView { id } },
        ViewKind::QuizHub => rsx! { QuizHubView {} },
        ViewKind::QuickQuiz => rsx! { QuickQuizView {} },
        ViewKind::MatchGame => rsx! { MatchGameView {} },
        ViewKind::Foods => rsx! { FoodsView {} },
        ViewKind::FoodAdd => rsx! { FoodAddView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    /// Let spawned loaders finish and re-render.
    pub async fn drive_async(&mut self) {
        for _ in 0..3 {
            let _ = tokio::time::timeout(
                std::time::Duration::from_millis(50),
                self.dom.wait_for_work(),
            )
            .await;
            self.dom.render_immediate(&mut NoOpMutations);
            self.dom.process_events();
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, repo: InMemoryRepository) -> ViewHarness {
    setup_view_harness_with_storage(view, Storage::from_in_memory(repo))
}

pub fn setup_view_harness_with_storage(view: ViewKind, storage: Storage) -> ViewHarness {
    let app = Arc::new(TestApp {
        services: AppServices::from_storage(&storage, Some(SEED)),
    });
    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });
    ViewHarness { dom }
}

/// Render `view` over `repo` once its loaders have settled.
pub async fn render_view(view: ViewKind, repo: InMemoryRepository) -> String {
    let mut harness = setup_view_harness(view, repo);
    harness.rebuild();
    harness.drive_async().await;
    harness.render()
}
