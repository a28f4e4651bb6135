//! Catalog lifecycle integration tests.
//!
//! These tests drive both front-ends against one shared store:
//! seed -> admin edits -> persisted slot -> browse sees the edits

use std::sync::Arc;

use tempfile::TempDir;

use storefront_core::{
    browse::CategoryToken,
    store::{sample_catalog, DEFAULT_STORAGE_KEY},
    testing::{fixtures, MockKeyValueStore, MockSeedSource},
    AdminEditor, BrowseSession, BrowseView, CatalogSource, CatalogStore, Category,
    ContactSettings, DeleteOutcome, EditorMode, FileSeedSource, Frontend, KeyValueStore,
    SqliteKeyValueStore, SubmitAction,
};

/// Test helper wiring a store over mock storage and a mock seed.
struct TestHarness {
    storage: Arc<MockKeyValueStore>,
    seed: Arc<MockSeedSource>,
    store: Arc<CatalogStore>,
}

impl TestHarness {
    fn new(seed: MockSeedSource) -> Self {
        let storage = Arc::new(MockKeyValueStore::new());
        let seed = Arc::new(seed);
        let store = Arc::new(CatalogStore::new(
            storage.clone(),
            seed.clone(),
            DEFAULT_STORAGE_KEY,
        ));
        Self {
            storage,
            seed,
            store,
        }
    }

    fn with_seed(ids: &[u64]) -> Self {
        Self::new(MockSeedSource::with_catalog(fixtures::catalog(ids)))
    }

    async fn admin(&self) -> AdminEditor {
        let (editor, notices) = AdminEditor::open(self.store.clone()).await;
        assert!(notices.is_empty(), "unexpected notices: {:?}", notices);
        editor
    }

    async fn browse(&self) -> BrowseSession {
        BrowseSession::open(&self.store).await
    }
}

#[tokio::test]
async fn test_admin_edits_reach_browse() {
    let harness = TestHarness::with_seed(&[1, 2, 3]);
    let mut admin = harness.admin().await;

    let created = admin
        .submit(fixtures::form("Linen Shirt", "categoria1"))
        .unwrap();
    assert_eq!(created.action, SubmitAction::Created);
    assert_eq!(created.product.id, 4);

    admin.begin_edit(2).unwrap();
    let mut form = admin.form().clone();
    form.title = "Renamed".to_string();
    admin.submit(form).unwrap();

    let outcome = admin.delete(1, &true).unwrap();
    assert!(matches!(outcome, DeleteOutcome::Deleted { .. }));

    let browse = harness.browse().await;
    assert_eq!(browse.source(), CatalogSource::Persisted);
    assert_eq!(browse.view().ids(), vec![2, 3, 4]);
    assert_eq!(browse.catalog().get(2).unwrap().title, "Renamed");

    // Seed was only read on the first load
    assert_eq!(harness.seed.fetch_count(), 1);
}

#[tokio::test]
async fn test_ids_are_never_reused_while_max_exists() {
    let harness = TestHarness::with_seed(&[1, 2, 3]);
    let mut admin = harness.admin().await;

    admin.delete(2, &true).unwrap();
    let created = admin.submit(fixtures::form("New", "categoria2")).unwrap();
    assert_eq!(created.product.id, 4);

    // Removing the max frees its id for the next create
    admin.delete(4, &true).unwrap();
    let created = admin.submit(fixtures::form("Again", "categoria2")).unwrap();
    assert_eq!(created.product.id, 4);
}

#[tokio::test]
async fn test_browse_on_empty_everything_shows_sample() {
    let harness = TestHarness::new(MockSeedSource::failing());

    let browse = harness.browse().await;
    assert_eq!(browse.source(), CatalogSource::Sample);
    assert_eq!(browse.catalog(), &sample_catalog());

    // Browse never writes
    assert_eq!(harness.storage.write_count(), 0);
    assert!(harness.storage.get(DEFAULT_STORAGE_KEY).unwrap().is_none());
}

#[tokio::test]
async fn test_admin_on_empty_everything_starts_empty() {
    let harness = TestHarness::new(MockSeedSource::failing());

    let (mut admin, notices) = AdminEditor::open(harness.store.clone()).await;
    assert!(admin.products().is_empty());
    assert_eq!(notices.len(), 1);
    assert!(notices[0].is_error());

    let created = admin.submit(fixtures::form("First", "categoria3")).unwrap();
    assert_eq!(created.product.id, 1);

    let browse = harness.browse().await;
    assert_eq!(browse.view().ids(), vec![1]);
}

#[tokio::test]
async fn test_admin_keeps_empty_list_but_browse_falls_through() {
    let harness = TestHarness::with_seed(&[1, 2]);
    let mut admin = harness.admin().await;
    admin.delete(1, &true).unwrap();
    admin.delete(2, &true).unwrap();

    assert_eq!(
        harness.storage.get(DEFAULT_STORAGE_KEY).unwrap().as_deref(),
        Some("[]")
    );

    let admin = harness.admin().await;
    assert!(admin.products().is_empty());

    let browse = harness.browse().await;
    assert_eq!(browse.source(), CatalogSource::Seed);
    assert_eq!(browse.view().ids(), vec![1, 2]);
}

#[tokio::test]
async fn test_corrupt_slot_falls_back_to_seed() {
    let harness = TestHarness::with_seed(&[7]);
    harness
        .storage
        .set(DEFAULT_STORAGE_KEY, "{not json")
        .unwrap();

    let loaded = harness.store.load(Frontend::Browse).await;
    assert_eq!(loaded.source, CatalogSource::Seed);
    assert_eq!(loaded.catalog.len(), 1);

    let admin = harness.admin().await;
    assert_eq!(admin.products().len(), 1);
}

#[tokio::test]
async fn test_full_storage_keeps_in_memory_changes() {
    let harness = TestHarness::with_seed(&[1, 2]);
    let mut admin = harness.admin().await;
    harness.storage.fail_writes(true);

    let created = admin.submit(fixtures::form("Unsaved", "categoria1")).unwrap();
    assert_eq!(created.notices.len(), 2);
    assert!(created.notices[1].is_error());
    assert_eq!(admin.products().len(), 3);
    assert_eq!(admin.mode(), EditorMode::Add);

    // Browse still sees the last successful write
    let browse = harness.browse().await;
    assert_eq!(browse.view().ids(), vec![1, 2]);
}

#[tokio::test]
async fn test_browse_filters_over_admin_created_products() {
    let harness = TestHarness::new(MockSeedSource::with_catalog(sample_catalog()));
    let mut admin = harness.admin().await;
    admin
        .submit(fixtures::form("Lámpara de mesa", "categoria3"))
        .unwrap();

    let mut browse = harness.browse().await;
    browse.on_category_toggle(CategoryToken::Category(Category::Categoria3), true);
    assert_eq!(browse.view().ids(), vec![5, 6, 7]);

    assert_eq!(browse.on_search("LÁMPARA").ids(), vec![7]);
    assert_eq!(browse.on_search("nothing like this"), BrowseView::NoResults);

    let detail = browse
        .detail(7, &ContactSettings::new("5551234"))
        .unwrap();
    assert_eq!(detail.category_label, "Categoría 3");
    assert!(detail.contact.is_some());
}

#[tokio::test]
async fn test_sqlite_slot_survives_reopen() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("storefront.db");
    let seed_path = temp_dir.path().join("products.json");
    std::fs::write(
        &seed_path,
        serde_json::to_string(&fixtures::catalog(&[1, 2])).unwrap(),
    )
    .unwrap();

    {
        let storage = Arc::new(SqliteKeyValueStore::new(&db_path).unwrap());
        let seed = Arc::new(FileSeedSource::new(&seed_path));
        let store = Arc::new(CatalogStore::new(storage, seed, DEFAULT_STORAGE_KEY));

        let (mut admin, notices) = AdminEditor::open(store).await;
        assert!(notices.is_empty());
        admin.submit(fixtures::form("Kept", "categoria2")).unwrap();
    }

    // The seed is gone; only the database remains
    std::fs::remove_file(&seed_path).unwrap();

    let storage = Arc::new(SqliteKeyValueStore::new(&db_path).unwrap());
    let seed = Arc::new(FileSeedSource::new(&seed_path));
    let store = CatalogStore::new(storage, seed, DEFAULT_STORAGE_KEY);

    let browse = BrowseSession::open(&store).await;
    assert_eq!(browse.source(), CatalogSource::Persisted);
    assert_eq!(browse.view().ids(), vec![1, 2, 3]);
    assert_eq!(browse.catalog().get(3).unwrap().title, "Kept");
}
