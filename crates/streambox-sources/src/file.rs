use async_trait::async_trait;
use std::path::PathBuf;
use streambox_models::Movie;
use tracing::debug;
use crate::{parse_catalog, CatalogSource, SourceError};

/// Catalog stored as a JSON array on disk
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl CatalogSource for FileCatalog {
    fn source_name(&self) -> &str {
        "file"
    }

    async fn fetch_movies(&self) -> Result<Vec<Movie>, SourceError> {
        debug!("Reading catalog from {:?}", self.path);
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| SourceError::Io {
                path: self.path.clone(),
                source,
            })?;
        parse_catalog(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_file_catalog_reads_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("movies.json");
        std::fs::write(&path, r#"[{"id": 1, "title": "Heat", "language": "English", "genres": ["Crime"]}]"#).unwrap();

        let movies = FileCatalog::new(path).fetch_movies().await.unwrap();
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].id.as_str(), "1");
    }

    #[tokio::test]
    async fn test_file_catalog_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = FileCatalog::new(dir.path().join("absent.json"))
            .fetch_movies()
            .await
            .unwrap_err();
        assert!(matches!(err, SourceError::Io { .. }));
    }
}
