use std::sync::Arc;

use async_trait::async_trait;
use flash_core::model::{Card, CardSide, Collection, CollectionId, NewCollection};
use services::{CollectionService, CollectionServiceError};
use storage::repository::{CollectionRepository, InMemoryRepository, StorageError};

fn seeded() -> (InMemoryRepository, CollectionService) {
    let repo = InMemoryRepository::with_collections(vec![Collection::new(
        CollectionId::new("animals"),
        "Animals",
        vec!["Khác".into()],
        vec![Card::new("犬", "Con chó")],
    )]);
    let service = CollectionService::new(Arc::new(repo.clone()));
    (repo, service)
}

#[tokio::test]
async fn editor_flow_import_edit_save() {
    let (_repo, service) = seeded();
    let mut draft = service
        .get(&CollectionId::new("animals"))
        .await
        .expect("get")
        .expect("exists");

    let report = service
        .import_into(&mut draft, "front,back\n猫,Con mèo\n,missing\n")
        .expect("import");
    assert_eq!(report.cards.len(), 1);
    assert_eq!(report.skipped, 1);

    draft.push_card(Card::blank());
    draft
        .edit_card(2, CardSide::Front, "鳥")
        .expect("edit front");
    draft
        .edit_card(2, CardSide::Back, "Con chim")
        .expect("edit back");
    draft.remove_card(0).expect("remove");
    service.save(&draft).await.expect("save");

    let stored = service
        .get(&CollectionId::new("animals"))
        .await
        .expect("reload")
        .expect("still exists");
    assert_eq!(
        stored.cards(),
        &[Card::new("猫", "Con mèo"), Card::new("鳥", "Con chim")]
    );
    assert_eq!(stored.tags(), &["Khác".to_string()]);
}

#[tokio::test]
async fn create_then_delete_round_trip() {
    let (_repo, service) = seeded();
    let created = service.create("Kanji N5").await.expect("create");
    assert_eq!(created.name(), "Kanji N5");
    assert!(created.is_empty());
    assert_eq!(service.list().await.expect("list").len(), 2);

    service.delete(created.id()).await.expect("delete");
    assert!(service.get(created.id()).await.expect("get").is_none());
    assert_eq!(service.list().await.expect("list").len(), 1);
}

#[tokio::test]
async fn deleting_missing_collection_is_storage_error() {
    let (_repo, service) = seeded();
    let err = service
        .delete(&CollectionId::new("nope"))
        .await
        .expect_err("missing");
    assert!(matches!(
        err,
        CollectionServiceError::Storage(StorageError::NotFound)
    ));
}

/// Repository that fails every call; creating through it proves whether a
/// request was attempted.
struct Offline;

#[async_trait]
impl CollectionRepository for Offline {
    async fn list_collections(&self) -> Result<Vec<Collection>, StorageError> {
        Err(StorageError::Connection("offline".into()))
    }

    async fn get_collection(&self, _id: &CollectionId) -> Result<Collection, StorageError> {
        Err(StorageError::Connection("offline".into()))
    }

    async fn create_collection(&self, _new: &NewCollection) -> Result<Collection, StorageError> {
        Err(StorageError::Connection("offline".into()))
    }

    async fn save_collection(&self, _collection: &Collection) -> Result<(), StorageError> {
        Err(StorageError::Connection("offline".into()))
    }

    async fn delete_collection(&self, _id: &CollectionId) -> Result<(), StorageError> {
        Err(StorageError::Connection("offline".into()))
    }
}

#[tokio::test]
async fn blank_name_is_rejected_before_any_request() {
    let service = CollectionService::new(Arc::new(Offline));
    let err = service.create("   ").await.expect_err("blank");
    assert!(err.is_validation());

    let err = service.create("Real name").await.expect_err("offline");
    assert!(!err.is_validation());
}

#[tokio::test]
async fn unreachable_service_surfaces_on_list_and_get() {
    let service = CollectionService::new(Arc::new(Offline));
    assert!(matches!(
        service.list().await,
        Err(CollectionServiceError::Storage(StorageError::Connection(_)))
    ));
    assert!(service.get(&CollectionId::new("x")).await.is_err());
}
