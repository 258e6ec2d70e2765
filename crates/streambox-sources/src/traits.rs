use async_trait::async_trait;
use streambox_models::{Movie, RawMovie};
use std::collections::HashSet;
use tracing::{debug, warn};
use crate::SourceError;

/// Asynchronous provider of the full movie catalog
///
/// Implementations return already-normalized [`Movie`] records. There is
/// no pagination: a successful fetch is the whole catalog.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    fn source_name(&self) -> &str;

    async fn fetch_movies(&self) -> Result<Vec<Movie>, SourceError>;
}

/// Parse a JSON array of catalog records into canonical movies
///
/// Records without an id are dropped. When two records share an id the
/// first one wins, keeping ids unique within the snapshot.
pub fn parse_catalog(json: &str) -> Result<Vec<Movie>, SourceError> {
    let raw: Vec<RawMovie> = serde_json::from_str(json)?;
    let total = raw.len();

    let mut seen = HashSet::new();
    let mut movies = Vec::with_capacity(total);
    let mut missing_id = 0;
    let mut duplicates = 0;

    for record in raw {
        let Some(movie) = record.normalize() else {
            missing_id += 1;
            continue;
        };
        if !seen.insert(movie.id.clone()) {
            duplicates += 1;
            continue;
        }
        movies.push(movie);
    }

    if missing_id > 0 || duplicates > 0 {
        warn!(
            "Catalog normalization dropped {} record(s) without id and {} duplicate id(s)",
            missing_id, duplicates
        );
    }
    debug!("parse_catalog: total={}, kept={}", total, movies.len());

    Ok(movies)
}
