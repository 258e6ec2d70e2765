//! Build the configured catalog source
//!
//! Centralizes source selection so callers only ever see `dyn CatalogSource`.

use anyhow::Result;
use std::time::Duration;
use streambox_config::{CatalogConfig, CatalogSourceKind};
use crate::{BuiltinCatalog, CatalogSource, FileCatalog, HttpCatalog};

pub fn catalog_from_config(config: &CatalogConfig) -> Result<Box<dyn CatalogSource>> {
    let source: Box<dyn CatalogSource> = match config.source {
        CatalogSourceKind::Builtin => {
            Box::new(BuiltinCatalog::new(Duration::from_millis(config.simulated_delay_ms)))
        }
        CatalogSourceKind::File => {
            let path = config.path.clone()
                .ok_or_else(|| anyhow::anyhow!("catalog.path is required for the file source"))?;
            Box::new(FileCatalog::new(path))
        }
        CatalogSourceKind::Http => {
            let url = config.url.clone()
                .ok_or_else(|| anyhow::anyhow!("catalog.url is required for the http source"))?;
            Box::new(HttpCatalog::new(url, Duration::from_secs(config.timeout_secs))?)
        }
    };
    Ok(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_factory_selects_source() {
        let builtin = catalog_from_config(&CatalogConfig::default()).unwrap();
        assert_eq!(builtin.source_name(), "builtin");

        let file = catalog_from_config(&CatalogConfig {
            source: CatalogSourceKind::File,
            path: Some(PathBuf::from("movies.json")),
            ..CatalogConfig::default()
        })
        .unwrap();
        assert_eq!(file.source_name(), "file");

        let http = catalog_from_config(&CatalogConfig {
            source: CatalogSourceKind::Http,
            url: Some("https://example.com/movies.json".to_string()),
            ..CatalogConfig::default()
        })
        .unwrap();
        assert_eq!(http.source_name(), "http");
    }

    #[test]
    fn test_factory_requires_location() {
        let missing = CatalogConfig {
            source: CatalogSourceKind::File,
            ..CatalogConfig::default()
        };
        assert!(catalog_from_config(&missing).is_err());
    }
}
