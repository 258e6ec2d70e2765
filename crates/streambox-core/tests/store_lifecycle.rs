use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use streambox_core::{AppStore, CollectionKind, Membership, Storage, FAVOURITES_KEY};
use streambox_models::{Movie, MovieId, ThemeMode};
use streambox_sources::{parse_catalog, CatalogSource, SourceError};

const CATALOG: &str = r#"[
    {"id": "1", "title": "Parasite", "language": "Korean", "genres": ["Thriller"]},
    {"id": "2", "title": "Inception", "language": "English", "genres": ["Sci-Fi"], "status": "trending"},
    {"id": 3, "title": "Oldboy", "language": "Korean", "genres": ["Action", "Thriller"], "poster": "oldboy.jpg"},
    {"id": "4", "title": "Amelie", "language": "French"}
]"#;

struct FakeCatalog {
    offline: AtomicBool,
}

impl FakeCatalog {
    fn new() -> Self {
        Self {
            offline: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl CatalogSource for FakeCatalog {
    fn source_name(&self) -> &str {
        "fake"
    }

    async fn fetch_movies(&self) -> Result<Vec<Movie>, SourceError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(SourceError::Unavailable("network down".to_string()));
        }
        parse_catalog(CATALOG)
    }
}

#[tokio::test]
async fn browse_filter_and_collect() {
    let dir = tempfile::tempdir().unwrap();
    let storage = Storage::file(dir.path());
    let catalog = FakeCatalog::new();

    let mut store = AppStore::open(storage.clone());
    assert_eq!(store.refresh_catalog(&catalog).await.unwrap(), 4);
    assert_eq!(store.catalog().languages(), vec!["English", "French", "Korean"]);
    assert_eq!(store.catalog().genres(), vec!["Action", "Sci-Fi", "Thriller"]);

    store.catalog_mut().criteria_mut().toggle_language("Korean");
    let korean: Vec<String> = store.catalog().visible().into_iter().map(|m| m.title).collect();
    assert_eq!(korean, vec!["Parasite", "Oldboy"]);

    store.catalog_mut().criteria_mut().set_search("OLD");
    let oldboy = store.catalog().visible().remove(0);
    assert_eq!(oldboy.poster_url.as_deref(), Some("oldboy.jpg"));

    assert_eq!(store.favourites_mut().toggle(oldboy.clone()), Membership::Added);
    assert!(store.watch_later_mut().add(oldboy));
    store.set_theme(ThemeMode::Light).unwrap();

    let reopened = AppStore::open(Storage::file(dir.path()));
    assert!(reopened.favourites().contains(&MovieId::from("3")));
    assert_eq!(reopened.collection(CollectionKind::WatchLater).len(), 1);
    assert_eq!(reopened.theme(), ThemeMode::Light);
    assert!(!reopened.catalog().is_loaded());
}

#[tokio::test]
async fn failed_refresh_keeps_previous_catalog() {
    let catalog = FakeCatalog::new();
    let mut store = AppStore::open(Storage::memory());

    store.refresh_catalog(&catalog).await.unwrap();
    catalog.offline.store(true, Ordering::SeqCst);

    let err = store.refresh_catalog(&catalog).await.unwrap_err();
    assert!(matches!(err, SourceError::Unavailable(_)));
    assert_eq!(store.catalog().movies().len(), 4);
    assert_eq!(store.catalog().source(), Some("fake"));
}

#[tokio::test]
async fn corrupt_favourites_file_is_healed_on_startup() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(format!("{}.json", FAVOURITES_KEY)), "[{\"id\":").unwrap();

    let mut store = AppStore::open(Storage::file(dir.path()));
    assert!(store.favourites().is_empty());
    assert!(!dir.path().join(format!("{}.json", FAVOURITES_KEY)).exists());

    store.favourites_mut().add(Movie::new("5", "Heat", "English"));
    store.favourites_mut().remove(&MovieId::from("5"));
    let raw = std::fs::read_to_string(dir.path().join(format!("{}.json", FAVOURITES_KEY))).unwrap();
    assert_eq!(raw, "[]");
}
