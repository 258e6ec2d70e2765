use streambox_models::{ThemeMode, UserSession};
use streambox_sources::{CatalogSource, SourceError};
use tracing::{info, instrument, warn};
use crate::catalog::CatalogView;
use crate::collection::{CollectionKind, CollectionStore};
use crate::session::{clear_session, load_session, save_session};
use crate::storage::{Storage, StorageError};
use crate::theme::{get_theme, set_theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreState {
    /// Constructed, nothing read from storage yet
    Empty,
    /// Hydrated from storage
    Ready,
}

/// Application state handed to every consumer
///
/// Lifecycle is `AppStore::new` (empty) followed by [`AppStore::hydrate`]
/// (ready); [`AppStore::open`] does both.
pub struct AppStore {
    storage: Storage,
    state: StoreState,
    favourites: CollectionStore,
    watch_later: CollectionStore,
    theme: ThemeMode,
    session: Option<UserSession>,
    catalog: CatalogView,
}

impl AppStore {
    pub fn new(storage: Storage) -> Self {
        Self {
            favourites: CollectionStore::new(CollectionKind::Favourites, storage.clone()),
            watch_later: CollectionStore::new(CollectionKind::WatchLater, storage.clone()),
            storage,
            state: StoreState::Empty,
            theme: ThemeMode::default(),
            session: None,
            catalog: CatalogView::new(),
        }
    }

    pub fn open(storage: Storage) -> Self {
        let mut store = Self::new(storage);
        store.hydrate();
        store
    }

    /// Read collections, theme and session from storage
    pub fn hydrate(&mut self) {
        self.favourites.reload();
        self.watch_later.reload();
        self.theme = get_theme(&self.storage).unwrap_or_default();
        self.session = load_session(&self.storage);
        self.state = StoreState::Ready;
        info!(
            "Store ready: {} favourites, {} watch later, theme {}",
            self.favourites.len(),
            self.watch_later.len(),
            self.theme
        );
    }

    pub fn state(&self) -> StoreState {
        self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == StoreState::Ready
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    pub fn favourites(&self) -> &CollectionStore {
        &self.favourites
    }

    pub fn favourites_mut(&mut self) -> &mut CollectionStore {
        &mut self.favourites
    }

    pub fn watch_later(&self) -> &CollectionStore {
        &self.watch_later
    }

    pub fn watch_later_mut(&mut self) -> &mut CollectionStore {
        &mut self.watch_later
    }

    pub fn collection(&self, kind: CollectionKind) -> &CollectionStore {
        match kind {
            CollectionKind::Favourites => &self.favourites,
            CollectionKind::WatchLater => &self.watch_later,
        }
    }

    pub fn collection_mut(&mut self, kind: CollectionKind) -> &mut CollectionStore {
        match kind {
            CollectionKind::Favourites => &mut self.favourites,
            CollectionKind::WatchLater => &mut self.watch_later,
        }
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    /// Switch theme; memory changes even if the write fails
    pub fn set_theme(&mut self, mode: ThemeMode) -> Result<(), StorageError> {
        self.theme = mode;
        set_theme(&self.storage, mode)
    }

    pub fn toggle_theme(&mut self) -> Result<ThemeMode, StorageError> {
        let next = self.theme.toggled();
        self.set_theme(next)?;
        Ok(next)
    }

    pub fn session(&self) -> Option<&UserSession> {
        self.session.as_ref()
    }

    pub fn sign_in(&mut self, session: UserSession) -> Result<(), StorageError> {
        let result = save_session(&self.storage, &session);
        self.session = Some(session);
        result
    }

    pub fn sign_out(&mut self) -> Result<(), StorageError> {
        self.session = None;
        clear_session(&self.storage)
    }

    pub fn catalog(&self) -> &CatalogView {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut CatalogView {
        &mut self.catalog
    }

    /// Fetch the catalog from `source`
    ///
    /// On failure the previous catalog stays in place and the error is
    /// returned for the caller to present.
    #[instrument(skip(self, source), fields(source = source.source_name()))]
    pub async fn refresh_catalog(&mut self, source: &dyn CatalogSource) -> Result<usize, SourceError> {
        match source.fetch_movies().await {
            Ok(movies) => {
                let count = movies.len();
                self.catalog.replace(movies, source.source_name());
                info!("Catalog loaded: {} movies", count);
                Ok(count)
            }
            Err(e) => {
                warn!("Catalog fetch failed: {}", e);
                Err(e)
            }
        }
    }

    /// Remove every persisted key and reset in-memory state to defaults
    pub fn clear_all(&mut self) -> Result<usize, StorageError> {
        let removed = self.storage.clear()?;
        self.favourites.reload();
        self.watch_later.reload();
        self.theme = ThemeMode::default();
        self.session = None;
        Ok(removed)
    }
}
