pub mod clear;
pub mod collections;
pub mod config;
pub mod movies;
pub mod session;
pub mod theme;

use color_eyre::eyre::{eyre, Context};
use color_eyre::Result;
use streambox_config::{Config, PathManager};
use streambox_core::{AppStore, Storage};
use streambox_sources::catalog_from_config;

/// Paths, config and storage mode shared by every command
pub struct AppContext {
    pub paths: PathManager,
    pub config: Config,
    pub ephemeral: bool,
}

impl AppContext {
    pub fn load(ephemeral: bool) -> Result<Self> {
        let paths = PathManager::default();
        let config_file = paths.config_file();
        let config = Config::load_or_default(&config_file)
            .map_err(|e| eyre!("Failed to load config from {}: {}", config_file.display(), e))?;
        config.validate()
            .map_err(|e| eyre!("Invalid configuration in {}: {}", config_file.display(), e))?;

        Ok(Self { paths, config, ephemeral })
    }

    /// Open the store and hydrate it from storage
    pub fn open_store(&self) -> Result<AppStore> {
        let storage = if self.ephemeral {
            tracing::debug!("Using in-memory storage");
            Storage::memory()
        } else {
            let dir = self.config.storage_dir(&self.paths);
            std::fs::create_dir_all(&dir)
                .wrap_err_with(|| format!("Failed to create storage directory {}", dir.display()))?;
            tracing::debug!("Using storage directory {}", dir.display());
            Storage::file(dir)
        };
        Ok(AppStore::open(storage))
    }

    /// Fetch the configured catalog into the store
    pub async fn load_catalog(&self, store: &mut AppStore) -> Result<()> {
        let source = catalog_from_config(&self.config.catalog)
            .map_err(|e| eyre!("Failed to set up catalog source: {}", e))?;
        store.refresh_catalog(source.as_ref()).await
            .map_err(|e| eyre!("Failed to load catalog from {}: {}", source.source_name(), e))?;
        Ok(())
    }
}
