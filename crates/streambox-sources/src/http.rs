use async_trait::async_trait;
use std::time::Duration;
use streambox_models::Movie;
use tracing::{debug, warn};
use crate::{parse_catalog, CatalogSource, SourceError};

/// Catalog fetched as a JSON array from an HTTP endpoint
pub struct HttpCatalog {
    url: String,
    client: reqwest::Client,
}

impl HttpCatalog {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("streambox/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(url, client))
    }

    pub(crate) fn with_client(url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            url: url.into(),
            client,
        }
    }
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    fn source_name(&self) -> &str {
        "http"
    }

    async fn fetch_movies(&self) -> Result<Vec<Movie>, SourceError> {
        debug!("GET {}", self.url);
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Catalog endpoint {} returned {}", self.url, status);
            return Err(SourceError::Unavailable(format!("{} returned {}", self.url, status)));
        }

        let body = response.text().await?;
        parse_catalog(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Answer a single request with `status` and `body`, returning the URL to hit
    async fn serve_once(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 4096];
            let _ = socket.read(&mut request).await;
            let response = format!(
                "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });

        format!("http://{}/movies.json", addr)
    }

    fn local_catalog(url: String) -> HttpCatalog {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(5))
            .no_proxy()
            .build()
            .unwrap();
        HttpCatalog::with_client(url, client)
    }

    #[tokio::test]
    async fn test_server_error_is_unavailable() {
        let url = serve_once("500 Internal Server Error", "{}").await;
        let catalog = local_catalog(url);

        let err = catalog.fetch_movies().await.unwrap_err();
        match err {
            SourceError::Unavailable(msg) => assert!(msg.contains("500")),
            other => panic!("expected Unavailable, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetches_catalog_body() {
        let url = serve_once(
            "200 OK",
            r#"[{"id": 1, "title": "Parasite", "language": "Korean", "genres": ["Thriller"]}]"#,
        )
        .await;
        let catalog = local_catalog(url);

        let movies = catalog.fetch_movies().await.unwrap();
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].title, "Parasite");
    }
}
