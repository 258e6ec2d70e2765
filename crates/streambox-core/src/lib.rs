pub mod storage;
pub mod filter;
pub mod options;
pub mod collection;
pub mod theme;
pub mod session;
pub mod catalog;
pub mod store;

pub use storage::{FileBackend, MemoryBackend, Storage, StorageBackend, StorageError, FAVOURITES_KEY, THEME_KEY, USER_KEY, WATCH_LATER_KEY};
pub use filter::{filter_movies, search_movies, trending_movies, FilterCriteria};
pub use options::{unique_genres, unique_languages};
pub use collection::{CollectionKind, CollectionStore, Membership};
pub use theme::{get_theme, set_theme};
pub use session::{clear_session, load_session, save_session};
pub use catalog::CatalogView;
pub use store::{AppStore, StoreState};
