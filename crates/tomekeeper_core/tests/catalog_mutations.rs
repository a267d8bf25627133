use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::Notify;
use tomekeeper_core::repo::catalog_store::StoreOperation;
use tomekeeper_core::repo::sample_data::sample_catalog;
use tomekeeper_core::{
    CatalogItem, CatalogItemDraft, CatalogItemFields, CatalogItemId, CatalogService, CatalogStore,
    DataSource, DeleteConfirmation, InMemoryCatalogStore, Mutation, MutationError, MutationKey,
    StoreError, StoreMode, StoreResult, SubmitState,
};

fn draft(title: &str) -> CatalogItemDraft {
    CatalogItemDraft {
        code: "978-0-00-000000-0".to_string(),
        title: title.to_string(),
        creator: "Test Author".to_string(),
        unit_price: "9.50".to_string(),
        quantity_on_hand: "4".to_string(),
        image_ref: String::new(),
    }
}

async fn loaded_sample_service() -> CatalogService<InMemoryCatalogStore> {
    let service = CatalogService::new(InMemoryCatalogStore::with_sample_data());
    service.load().await;
    service
}

/// Local store whose `create` waits until the test releases it.
struct GatedStore {
    inner: InMemoryCatalogStore,
    gate: Arc<Notify>,
}

#[async_trait]
impl CatalogStore for GatedStore {
    fn mode(&self) -> StoreMode {
        StoreMode::Local
    }

    async fn list(&self) -> StoreResult<Vec<CatalogItem>> {
        self.inner.list().await
    }

    async fn create(&self, fields: &CatalogItemFields) -> StoreResult<CatalogItem> {
        self.gate.notified().await;
        self.inner.create(fields).await
    }

    async fn update(
        &self,
        id: CatalogItemId,
        fields: &CatalogItemFields,
    ) -> StoreResult<CatalogItem> {
        self.inner.update(id, fields).await
    }

    async fn delete(&self, id: CatalogItemId) -> StoreResult<()> {
        self.inner.delete(id).await
    }
}

/// Remote-like store that is never reachable.
struct UnreachableStore;

fn unreachable(operation: StoreOperation) -> StoreError {
    StoreError::Unavailable {
        operation,
        reason: "connection refused".to_string(),
    }
}

#[async_trait]
impl CatalogStore for UnreachableStore {
    fn mode(&self) -> StoreMode {
        StoreMode::Remote
    }

    async fn list(&self) -> StoreResult<Vec<CatalogItem>> {
        Err(unreachable(StoreOperation::List))
    }

    async fn create(&self, _fields: &CatalogItemFields) -> StoreResult<CatalogItem> {
        Err(unreachable(StoreOperation::Create))
    }

    async fn update(
        &self,
        _id: CatalogItemId,
        _fields: &CatalogItemFields,
    ) -> StoreResult<CatalogItem> {
        Err(unreachable(StoreOperation::Update))
    }

    async fn delete(&self, _id: CatalogItemId) -> StoreResult<()> {
        Err(unreachable(StoreOperation::Delete))
    }
}

/// Store that saves every create under an id the catalog already holds.
struct DuplicateIdStore {
    inner: InMemoryCatalogStore,
}

#[async_trait]
impl CatalogStore for DuplicateIdStore {
    fn mode(&self) -> StoreMode {
        StoreMode::Remote
    }

    async fn list(&self) -> StoreResult<Vec<CatalogItem>> {
        self.inner.list().await
    }

    async fn create(&self, fields: &CatalogItemFields) -> StoreResult<CatalogItem> {
        Ok(CatalogItem::from_fields(1, fields.clone()))
    }

    async fn update(
        &self,
        id: CatalogItemId,
        fields: &CatalogItemFields,
    ) -> StoreResult<CatalogItem> {
        self.inner.update(id, fields).await
    }

    async fn delete(&self, id: CatalogItemId) -> StoreResult<()> {
        self.inner.delete(id).await
    }
}

#[tokio::test]
async fn load_uses_store_contents() {
    let service = loaded_sample_service().await;
    assert_eq!(service.source(), DataSource::Store);
    assert_eq!(service.items().len(), 31);
    assert_eq!(service.view(), service.items());
    assert_eq!(service.store_mode(), StoreMode::Local);
}

#[tokio::test]
async fn thousand_creates_get_distinct_ids() {
    let service = CatalogService::new(InMemoryCatalogStore::default());
    service.load().await;

    let mut ids = HashSet::new();
    for index in 0..1_000 {
        let created = service
            .add(&draft(&format!("Volume {index}")))
            .await
            .unwrap()
            .applied()
            .expect("create should apply");
        ids.insert(created.id);
    }

    assert_eq!(ids.len(), 1_000);
    assert_eq!(service.items().len(), 1_000);
}

#[tokio::test]
async fn created_item_is_visible_despite_active_query() {
    let service = loaded_sample_service().await;
    assert_eq!(service.set_query("tolkien").len(), 1);

    let created = service
        .add(&draft("A Brand New Title"))
        .await
        .unwrap()
        .applied()
        .unwrap();

    assert_eq!(created.id, 32);
    assert_eq!(service.view().len(), 32);
    assert_eq!(service.query(), "tolkien");
    assert_eq!(service.submit_state(MutationKey::Create), SubmitState::Succeeded);
}

#[tokio::test]
async fn invalid_draft_never_reaches_the_store() {
    let service = loaded_sample_service().await;
    let mut bad = draft("");
    bad.unit_price = "0".to_string();

    let err = service.add(&bad).await.unwrap_err();
    match err {
        MutationError::Validation(errors) => assert_eq!(errors.len(), 2),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(service.items().len(), 31);
    assert_eq!(service.submit_state(MutationKey::Create), SubmitState::Failed);
}

#[tokio::test]
async fn update_replaces_in_place_and_refilters() {
    let service = loaded_sample_service().await;
    service.set_query("hobbit");
    let original = service.get(2).unwrap();

    let mut edit = CatalogItemDraft::from_item(&original);
    edit.title = "The Hobbit, Annotated".to_string();
    let updated = service.update(2, &edit).await.unwrap().applied().unwrap();
    assert_eq!(updated.id, 2);
    assert_eq!(service.view(), vec![updated.clone()]);
    assert_eq!(service.items()[1], updated);

    edit.title = "There and Back Again".to_string();
    service.update(2, &edit).await.unwrap();
    assert!(service.view().is_empty());
    assert_eq!(service.items().len(), 31);
}

#[tokio::test]
async fn update_of_missing_id_is_not_found() {
    let service = loaded_sample_service().await;
    let before = service.items();

    let err = service.update(404, &draft("Ghost")).await.unwrap_err();
    assert!(matches!(err, MutationError::NotFound(404)));
    assert_eq!(service.items(), before);
    assert_eq!(
        service.submit_state(MutationKey::Update(404)),
        SubmitState::Failed
    );
}

#[tokio::test]
async fn delete_requires_confirmation_and_is_idempotent() {
    let service = loaded_sample_service().await;
    service.set_query("harry potter");
    assert_eq!(service.view().len(), 7);

    let declined = service.delete(1, DeleteConfirmation::Declined).await.unwrap();
    assert_eq!(declined, Mutation::Cancelled);
    assert_eq!(service.items().len(), 31);

    let deleted = service.delete(1, DeleteConfirmation::Confirmed).await.unwrap();
    assert!(deleted.is_applied());
    assert_eq!(service.items().len(), 30);
    assert_eq!(service.view().len(), 6);

    let before = service.items();
    let missing = service
        .delete(9_999, DeleteConfirmation::Confirmed)
        .await
        .unwrap();
    assert!(missing.is_applied());
    assert_eq!(service.items(), before);
}

#[tokio::test]
async fn double_submission_is_rejected_while_pending() {
    let gate = Arc::new(Notify::new());
    let service = CatalogService::new(GatedStore {
        inner: InMemoryCatalogStore::default(),
        gate: Arc::clone(&gate),
    });
    service.load().await;
    let form = draft("Only Once");

    let second = async {
        tokio::task::yield_now().await;
        let result = service.add(&form).await;
        gate.notify_one();
        result
    };
    let (first, second) = tokio::join!(service.add(&form), second);

    assert!(first.unwrap().is_applied());
    assert!(matches!(
        second,
        Err(MutationError::AlreadyInFlight(MutationKey::Create))
    ));
    assert_eq!(service.items().len(), 1);
    assert_eq!(service.submit_state(MutationKey::Create), SubmitState::Succeeded);
}

#[tokio::test]
async fn result_after_close_view_is_discarded() {
    let gate = Arc::new(Notify::new());
    let service = CatalogService::new(GatedStore {
        inner: InMemoryCatalogStore::default(),
        gate: Arc::clone(&gate),
    });
    service.load().await;
    let form = draft("Late Arrival");

    let close = async {
        tokio::task::yield_now().await;
        service.close_view();
        gate.notify_one();
    };
    let (outcome, ()) = tokio::join!(service.add(&form), close);

    assert_eq!(outcome.unwrap(), Mutation::Discarded);
    assert!(service.items().is_empty());
    assert_eq!(service.submit_state(MutationKey::Create), SubmitState::Idle);
}

#[tokio::test]
async fn unreachable_store_falls_back_on_list_and_surfaces_mutation_errors() {
    let service = CatalogService::new(UnreachableStore);
    let view = service.load().await;

    assert_eq!(service.source(), DataSource::Fallback);
    assert_eq!(view, sample_catalog());

    let err = service.add(&draft("Offline")).await.unwrap_err();
    assert!(matches!(
        err,
        MutationError::BackingStoreUnavailable(StoreError::Unavailable { .. })
    ));
    let err = service
        .delete(1, DeleteConfirmation::Confirmed)
        .await
        .unwrap_err();
    assert!(matches!(err, MutationError::BackingStoreUnavailable(_)));

    assert_eq!(service.items(), sample_catalog());
    assert_eq!(service.submit_state(MutationKey::Create), SubmitState::Failed);
    assert_eq!(
        service.submit_state(MutationKey::Delete(1)),
        SubmitState::Failed
    );
}

#[tokio::test]
async fn stats_ignore_the_active_query() {
    let service = loaded_sample_service().await;
    let all = service.stats();
    service.set_query("meyer");
    assert_eq!(service.view().len(), 4);
    assert_eq!(service.stats(), all);
    assert_eq!(all.title_count, 31);
}

#[tokio::test]
async fn duplicate_store_id_fails_create_and_keeps_collection() {
    let service = CatalogService::new(DuplicateIdStore {
        inner: InMemoryCatalogStore::with_sample_data(),
    });
    service.load().await;
    let before = service.items();

    let err = service.add(&draft("Shadow Copy")).await.unwrap_err();
    assert!(matches!(
        err,
        MutationError::BackingStoreUnavailable(StoreError::InvalidData(_))
    ));
    assert_eq!(service.items(), before);
    assert_eq!(service.get(1).unwrap().title, before[0].title);
    assert_eq!(service.submit_state(MutationKey::Create), SubmitState::Failed);
}
