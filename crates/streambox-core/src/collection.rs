use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use streambox_models::{Movie, MovieId};
use tracing::{debug, info, warn};
use crate::storage::{Storage, StorageError, FAVOURITES_KEY, WATCH_LATER_KEY};

/// The two user collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKind {
    Favourites,
    WatchLater,
}

impl CollectionKind {
    pub fn storage_key(&self) -> &'static str {
        match self {
            CollectionKind::Favourites => FAVOURITES_KEY,
            CollectionKind::WatchLater => WATCH_LATER_KEY,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CollectionKind::Favourites => "favourites",
            CollectionKind::WatchLater => "watch later",
        }
    }
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CollectionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "favourites" | "favorites" => Ok(CollectionKind::Favourites),
            "watch_later" | "watchlater" => Ok(CollectionKind::WatchLater),
            other => Err(format!("Unknown collection: {}", other)),
        }
    }
}

/// Outcome of [`CollectionStore::toggle`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Membership {
    Added,
    Removed,
}

/// A persisted, id-unique list of movies
///
/// Mutations update memory first and then write the full snapshot through
/// to storage. A failed write is logged and leaves the in-memory list
/// authoritative; [`CollectionStore::has_unsaved_changes`] reports it until
/// the next successful write.
pub struct CollectionStore {
    kind: CollectionKind,
    items: Vec<Movie>,
    storage: Storage,
    dirty: bool,
}

impl CollectionStore {
    /// An empty collection that has not read storage yet
    pub fn new(kind: CollectionKind, storage: Storage) -> Self {
        Self {
            kind,
            items: Vec::new(),
            storage,
            dirty: false,
        }
    }

    /// Hydrate from the persisted snapshot; absent or corrupt data yields an empty collection
    pub fn load(kind: CollectionKind, storage: Storage) -> Self {
        let mut store = Self::new(kind, storage);
        store.reload();
        store
    }

    /// Replace the in-memory list with the persisted snapshot
    pub fn reload(&mut self) {
        let snapshot: Vec<Movie> = self.storage.get(self.kind.storage_key()).unwrap_or_default();
        let total = snapshot.len();

        let mut seen = HashSet::new();
        self.items = snapshot
            .into_iter()
            .filter(|movie| seen.insert(movie.id.clone()))
            .collect();
        self.dirty = false;

        if self.items.len() < total {
            warn!(
                "Dropped {} duplicate entr{} while loading {}",
                total - self.items.len(),
                if total - self.items.len() == 1 { "y" } else { "ies" },
                self.kind
            );
        }
        info!("Loaded {} ({} items)", self.kind, self.items.len());
    }

    pub fn kind(&self) -> CollectionKind {
        self.kind
    }

    pub fn items(&self) -> &[Movie] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: &MovieId) -> bool {
        self.items.iter().any(|movie| &movie.id == id)
    }

    pub fn get(&self, id: &MovieId) -> Option<&Movie> {
        self.items.iter().find(|movie| &movie.id == id)
    }

    /// Insert unless an entry with the same id exists; returns whether anything changed
    pub fn add(&mut self, movie: Movie) -> bool {
        if self.contains(&movie.id) {
            debug!("{} already contains {}", self.kind, movie.id);
            return false;
        }
        debug!("Adding {} to {}", movie.id, self.kind);
        self.items.push(movie);
        self.persist();
        true
    }

    /// Remove the entry with this id; returns whether anything changed
    pub fn remove(&mut self, id: &MovieId) -> bool {
        let before = self.items.len();
        self.items.retain(|movie| &movie.id != id);
        if self.items.len() == before {
            debug!("{} does not contain {}", self.kind, id);
            return false;
        }
        debug!("Removed {} from {}", id, self.kind);
        self.persist();
        true
    }

    /// Add when absent, remove when present
    pub fn toggle(&mut self, movie: Movie) -> Membership {
        if self.contains(&movie.id) {
            self.remove(&movie.id);
            Membership::Removed
        } else {
            self.add(movie);
            Membership::Added
        }
    }

    /// Empty the collection and persist the empty snapshot
    pub fn clear(&mut self) -> usize {
        let removed = self.items.len();
        self.items.clear();
        self.persist();
        removed
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    /// Write the current snapshot, surfacing any storage error to the caller
    pub fn flush(&mut self) -> Result<(), StorageError> {
        self.storage.save(self.kind.storage_key(), &self.items)?;
        self.dirty = false;
        Ok(())
    }

    fn persist(&mut self) {
        if let Err(e) = self.flush() {
            self.dirty = true;
            warn!(
                "Failed to persist {} ({} items): {}. Keeping in-memory state.",
                self.kind,
                self.items.len(),
                e
            );
        }
    }
}
