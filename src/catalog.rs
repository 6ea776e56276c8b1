use std::collections::HashSet;

use tracing::{debug, error, info, warn};

use crate::{error::LoadError, models::Movie, store::RecordStore};

pub struct CatalogClient {
    client: reqwest::Client,
    url: String,
}

impl CatalogClient {
    pub fn new(client: reqwest::Client, url: String) -> Self {
        Self { client, url }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetches the whole catalog once. Records come back in the order the
    /// endpoint sent them.
    pub async fn load(&self) -> Result<Vec<Movie>, LoadError> {
        debug!(url = %self.url, "fetching catalog");

        let resp = self.client.get(&self.url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(LoadError::Transport(status.to_string()));
        }

        let body = resp.bytes().await?;
        let movies: Vec<Movie> = serde_json::from_slice(&body)?;

        let mut seen = HashSet::with_capacity(movies.len());
        for movie in &movies {
            if !seen.insert(movie.id) {
                warn!(id = movie.id, title = %movie.title, "duplicate movie id in catalog");
            }
        }

        Ok(movies)
    }
}

/// Runs the one-time load and publishes the outcome to `store`.
///
/// Failures are only logged; the store stays empty and is marked failed.
pub async fn load_into(client: &CatalogClient, store: &RecordStore) {
    store.mark_loading().await;

    match client.load().await {
        Ok(movies) => {
            info!(records = movies.len(), url = %client.url(), "catalog loaded");
            store.replace(movies).await;
        },
        Err(err) => {
            error!(error = %err, url = %client.url(), "failed to load catalog");
            store.mark_failed().await;
        },
    }
}

#[cfg(test)]
mod tests {
    use std::net::SocketAddr;

    use axum::{Router, http::StatusCode, routing::get};
    use tracing_test::traced_test;

    use super::*;
    use crate::store::LoadState;

    const ALPHA: &str = r#"[{
        "id": 1, "title": "Alpha", "tagline": "tag", "overview": "ov",
        "genres": [{"id": 18, "name": "Drama"}], "vote_average": 8,
        "release_date": "2020-01-01", "runtime": 90, "budget": 1000, "revenue": 2000
    }]"#;

    const TWO: &str = r#"[
        {"id": 20, "title": "Zulu"},
        {"id": 3, "title": "Bravo", "extra": "ignored"}
    ]"#;

    async fn serve_fixtures() -> SocketAddr {
        let app = Router::new()
            .route("/alpha.json", get(|| async { ALPHA }))
            .route("/two.json", get(|| async { TWO }))
            .route("/object.json", get(|| async { r#"{"id": 1, "title": "Alpha"}"# }))
            .route("/garbage.json", get(|| async { "<html>oops</html>" }))
            .route(
                "/down.json",
                get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "maintenance") }),
            );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        addr
    }

    fn client(addr: SocketAddr, path: &str) -> CatalogClient {
        CatalogClient::new(reqwest::Client::new(), format!("http://{addr}{path}"))
    }

    #[tokio::test]
    async fn test_load_returns_records() {
        let addr = serve_fixtures().await;
        let movies = client(addr, "/alpha.json").load().await.unwrap();
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].title, "Alpha");
        assert_eq!(movies[0].genres[0].name, "Drama");
    }

    #[tokio::test]
    async fn test_load_preserves_order() {
        let addr = serve_fixtures().await;
        let movies = client(addr, "/two.json").load().await.unwrap();
        let ids: Vec<u64> = movies.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![20, 3]);
    }

    #[tokio::test]
    async fn test_non_success_status_is_transport_error() {
        let addr = serve_fixtures().await;
        let err = client(addr, "/down.json").load().await.unwrap_err();
        match err {
            LoadError::Transport(msg) => assert_eq!(msg, "503 Service Unavailable"),
            other => panic!("expected transport error, got {other:?}"),
        }

        let err = client(addr, "/missing.json").load().await.unwrap_err();
        assert!(matches!(err, LoadError::Transport(msg) if msg == "404 Not Found"));
    }

    #[tokio::test]
    async fn test_malformed_payload_is_parse_error() {
        let addr = serve_fixtures().await;
        let err = client(addr, "/garbage.json").load().await.unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));

        let err = client(addr, "/object.json").load().await.unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[tokio::test]
    #[traced_test]
    async fn test_load_into_fills_store() {
        let addr = serve_fixtures().await;
        let store = RecordStore::new();
        load_into(&client(addr, "/alpha.json"), &store).await;

        let status = store.status().await;
        assert_eq!(status.state, LoadState::Loaded);
        assert_eq!(status.records, 1);
        assert!(logs_contain("catalog loaded"));
        assert!(!logs_contain("failed to load catalog"));
    }

    #[tokio::test]
    #[traced_test]
    async fn test_load_into_failure_leaves_store_empty() {
        let addr = serve_fixtures().await;
        let store = RecordStore::new();
        load_into(&client(addr, "/down.json"), &store).await;

        let status = store.status().await;
        assert_eq!(status.state, LoadState::Failed);
        assert_eq!(status.records, 0);
        assert!(store.snapshot().await.is_empty());
        assert!(logs_contain("failed to load catalog"));
        assert!(logs_contain("503 Service Unavailable"));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client(addr, "/alpha.json").load().await.unwrap_err();
        assert!(matches!(err, LoadError::Transport(_)));
    }
}
