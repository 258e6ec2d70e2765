use async_trait::async_trait;
use std::time::Duration;
use streambox_models::Movie;
use tracing::debug;
use crate::{parse_catalog, CatalogSource, SourceError};

const BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");

/// Bundled catalog served after a simulated network delay
pub struct BuiltinCatalog {
    delay: Duration,
}

impl BuiltinCatalog {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for BuiltinCatalog {
    fn default() -> Self {
        Self::new(Duration::ZERO)
    }
}

#[async_trait]
impl CatalogSource for BuiltinCatalog {
    fn source_name(&self) -> &str {
        "builtin"
    }

    async fn fetch_movies(&self) -> Result<Vec<Movie>, SourceError> {
        if !self.delay.is_zero() {
            debug!("Simulating catalog latency of {:?}", self.delay);
            tokio::time::sleep(self.delay).await;
        }
        parse_catalog(BUILTIN_CATALOG)
    }
}
