mod editor;
mod food_add;
mod foods;
mod home;
mod match_game;
mod practice;
mod practice_board;
mod quick_quiz;
mod quiz_hub;
mod state;
mod toast;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use editor::EditorView;
pub use food_add::FoodAddView;
pub use foods::FoodsView;
pub use home::HomeView;
pub use match_game::MatchGameView;
pub use practice::PracticeView;
pub use practice_board::{PracticeBoard, PromptKind};
pub use quick_quiz::QuickQuizView;
pub use quiz_hub::QuizHubView;
pub use state::{ViewError, ViewState, use_loader, with_ready};
pub use toast::{Toast, ToastHost, ToastKind, Toaster};
