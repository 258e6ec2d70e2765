use std::path::PathBuf;
use thiserror::Error;

/// Failure to produce a catalog
///
/// Callers decide the fallback; sources never retry on their own.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("catalog unavailable: {0}")]
    Unavailable(String),

    #[error("failed to read catalog file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),
}
