use std::sync::Arc;

use flash_core::model::{Card, Collection, CollectionId, Food, NewCollection, NewFood};
use storage::repository::{
    CollectionRepository, FoodRepository, InMemoryRepository, Storage, StorageError,
};

use super::test_harness::{ViewKind, render_view, setup_view_harness_with_storage};

fn kana() -> Collection {
    Collection::new(
        CollectionId::new("c1"),
        "Hiragana cơ bản",
        vec!["Hiragana".to_string()],
        vec![
            Card::new("あ", "a"),
            Card::new("い", "i"),
            Card::new("う", "u"),
        ],
    )
}

fn empty_collection() -> Collection {
    Collection::new(CollectionId::new("c2"), "Trống", Vec::new(), Vec::new())
}

fn repo() -> InMemoryRepository {
    InMemoryRepository::with_collections(vec![kana(), empty_collection()])
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_lists_collections_with_tag_and_count() {
    let html = render_view(ViewKind::Home, repo()).await;
    assert!(html.contains("Hiragana cơ bản"), "missing name in {html}");
    assert!(html.contains("3 thẻ"), "missing count in {html}");
    assert!(html.contains("0 thẻ"), "missing empty count in {html}");
    assert!(html.contains("Crazy Mode"), "missing quiz link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_without_collections_shows_empty_result() {
    let html = render_view(ViewKind::Home, InMemoryRepository::new()).await;
    assert!(html.contains("Không có kết quả phù hợp"), "missing empty text in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn practice_view_starts_on_first_card_in_flip_mode() {
    let html = render_view(ViewKind::Practice("c1".to_string()), repo()).await;
    assert!(html.contains("Hiragana cơ bản"), "missing title in {html}");
    assert!(html.contains("1 / 3"), "missing progress in {html}");
    assert!(html.contains("flip-card"), "missing flip card in {html}");
    assert!(html.contains("Lật thẻ"), "missing mode tabs in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn practice_view_with_no_cards_shows_empty_state() {
    let html = render_view(ViewKind::Practice("c2".to_string()), repo()).await;
    assert!(html.contains("Không có dữ liệu"), "missing empty state in {html}");
    assert!(!html.contains("practice-next"), "unexpected controls in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn practice_view_for_unknown_id_reports_not_found() {
    let html = render_view(ViewKind::Practice("missing".to_string()), repo()).await;
    assert!(html.contains("Không tìm thấy dữ liệu"), "missing error in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn editor_view_renders_one_row_per_card() {
    let html = render_view(ViewKind::Editor("c1".to_string()), repo()).await;
    assert_eq!(html.matches("editor-row").count(), 3, "rows in {html}");
    assert!(html.contains("import-file"), "missing import input in {html}");
    assert!(html.contains("Thêm dòng"), "missing add row in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_hub_links_both_games() {
    let html = render_view(ViewKind::QuizHub, InMemoryRepository::new()).await;
    assert!(html.contains("Quick Quiz"), "missing quick quiz in {html}");
    assert!(html.contains("Match Game"), "missing match game in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quick_quiz_view_shows_first_question_with_full_timer() {
    let html = render_view(ViewKind::QuickQuiz, repo()).await;
    assert!(html.contains("Câu 1 / 3"), "missing title in {html}");
    assert!(html.contains("⏱ 10s"), "missing timer in {html}");
    assert!(!html.contains("quiz-next"), "next shown before answering in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quick_quiz_view_without_cards_shows_empty_state() {
    let html = render_view(ViewKind::QuickQuiz, InMemoryRepository::new()).await;
    assert!(
        html.contains("Không có flashcard nào để chơi Quiz"),
        "missing empty state in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn match_game_view_deals_slots_and_chips() {
    let html = render_view(ViewKind::MatchGame, repo()).await;
    assert_eq!(html.matches("match-placeholder").count(), 3, "slots in {html}");
    assert_eq!(html.matches("match-chip").count(), 3, "chips in {html}");
    assert!(html.contains("0 / 3"), "missing score in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn match_game_view_without_cards_shows_empty_state() {
    let html = render_view(ViewKind::MatchGame, InMemoryRepository::new()).await;
    assert!(
        html.contains("Không có dữ liệu để chơi Match Game"),
        "missing empty state in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn foods_view_uses_image_prompt() {
    let repo = InMemoryRepository::new();
    let food = NewFood::new("Phở", "https://example.com/pho.png").unwrap();
    repo.create_food(&food).await.unwrap();

    let html = render_view(ViewKind::Foods, repo).await;
    assert!(html.contains("https://example.com/pho.png"), "missing image in {html}");
    assert!(html.contains("1 / 1"), "missing progress in {html}");
    assert!(!html.contains("🔊"), "speech buttons shown for foods in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn food_add_view_renders_form() {
    let html = render_view(ViewKind::FoodAdd, InMemoryRepository::new()).await;
    assert!(html.contains("food-name"), "missing name input in {html}");
    assert!(html.contains("food-image-url"), "missing url input in {html}");
}

struct Offline;

#[async_trait::async_trait]
impl CollectionRepository for Offline {
    async fn list_collections(&self) -> Result<Vec<Collection>, StorageError> {
        Err(StorageError::Connection("offline".to_string()))
    }

    async fn get_collection(&self, _id: &CollectionId) -> Result<Collection, StorageError> {
        Err(StorageError::Connection("offline".to_string()))
    }

    async fn create_collection(&self, _new: &NewCollection) -> Result<Collection, StorageError> {
        Err(StorageError::Connection("offline".to_string()))
    }

    async fn save_collection(&self, _collection: &Collection) -> Result<(), StorageError> {
        Err(StorageError::Connection("offline".to_string()))
    }

    async fn delete_collection(&self, _id: &CollectionId) -> Result<(), StorageError> {
        Err(StorageError::Connection("offline".to_string()))
    }
}

#[async_trait::async_trait]
impl FoodRepository for Offline {
    async fn list_foods(&self) -> Result<Vec<Food>, StorageError> {
        Err(StorageError::Connection("offline".to_string()))
    }

    async fn create_food(&self, _new: &NewFood) -> Result<Food, StorageError> {
        Err(StorageError::Connection("offline".to_string()))
    }
}

fn offline_storage() -> Storage {
    Storage {
        collections: Arc::new(Offline),
        foods: Arc::new(Offline),
    }
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_renders_error_state_when_offline() {
    let mut harness = setup_view_harness_with_storage(ViewKind::Home, offline_storage());
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Không thể tải dữ liệu"), "missing error in {html}");
    assert!(html.contains("Thử lại"), "missing retry in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn foods_view_renders_error_state_when_offline() {
    let mut harness = setup_view_harness_with_storage(ViewKind::Foods, offline_storage());
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Không thể tải dữ liệu"), "missing error in {html}");
}
