use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    http::HeaderValue,
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use tracing::debug;

use crate::{
    AppState,
    error::AppResult,
    filter::filter,
    store::StoreStatus,
    templates,
};

pub async fn index() -> Html<String> {
    Html(templates::index_page())
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    q: Option<String>,
    datastar: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Signals {
    #[serde(default)]
    query: String,
}

impl SearchQuery {
    /// The text the user typed. Datastar sends its signals as a JSON
    /// document in the `datastar` parameter; plain form posts use `q`.
    fn text(self) -> AppResult<String> {
        if let Some(raw) = self.datastar {
            let signals: Signals = serde_json::from_str(&raw)?;
            return Ok(signals.query);
        }
        Ok(self.q.unwrap_or_default())
    }
}

pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchQuery>,
) -> AppResult<Response> {
    let query = params.text()?;

    let body = if query.trim().is_empty() {
        debug!("empty query, clearing list");
        templates::list_fragment(&[])
    } else {
        let records = state.store.snapshot().await;
        let found = filter(&query, &records);
        debug!(query = %query, matches = found.len(), total = records.len(), "search");
        templates::list_fragment(&found)
    };

    let mut resp = Html(body).into_response();
    resp.headers_mut().insert("datastar-selector", HeaderValue::from_static("#movie-list"));
    resp.headers_mut().insert("datastar-mode", HeaderValue::from_static("outer"));
    Ok(resp)
}

pub async fn status(State(state): State<Arc<AppState>>) -> Json<StoreStatus> {
    Json(state.store.status().await)
}
