#![forbid(unsafe_code)]

pub mod app_services;
pub mod collection_service;
pub mod error;
pub mod food_service;
pub mod games;
pub mod import;
pub mod practice;
pub mod shuffle;

pub use app_services::AppServices;
pub use collection_service::CollectionService;
pub use error::{
    AppServicesError, CollectionServiceError, FoodServiceError, ImportError, StudyError,
};
pub use food_service::FoodService;
pub use games::StudyService;
pub use import::{ImportReport, parse_cards};
pub use practice::{ModeKind, OptionTone, PracticeIntent, PracticeMode, PracticeSession};
pub use shuffle::Shuffler;
