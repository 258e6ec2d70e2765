pub mod config;
pub mod paths;

pub use config::{CatalogConfig, CatalogSourceKind, Config, LoggingConfig, StorageConfig};
pub use paths::{PathManager, container_base_path};
