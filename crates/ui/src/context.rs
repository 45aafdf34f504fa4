use std::sync::Arc;

use services::{CollectionService, FoodService, StudyService};

pub trait UiApp: Send + Sync {
    fn collections(&self) -> Arc<CollectionService>;
    fn foods(&self) -> Arc<FoodService>;
    fn study(&self) -> Arc<StudyService>;
}

#[derive(Clone)]
pub struct AppContext {
    collections: Arc<CollectionService>,
    foods: Arc<FoodService>,
    study: Arc<StudyService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            collections: app.collections(),
            foods: app.foods(),
            study: app.study(),
        }
    }

    #[must_use]
    pub fn collections(&self) -> Arc<CollectionService> {
        Arc::clone(&self.collections)
    }

    #[must_use]
    pub fn foods(&self) -> Arc<FoodService> {
        Arc::clone(&self.foods)
    }

    #[must_use]
    pub fn study(&self) -> Arc<StudyService> {
        Arc::clone(&self.study)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
