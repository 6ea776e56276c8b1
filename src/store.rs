use std::sync::Arc;

use serde::Serialize;
use tokio::sync::RwLock;

use crate::models::Movie;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadState {
    Idle,
    Loading,
    Loaded,
    Failed,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct StoreStatus {
    pub state: LoadState,
    pub records: usize,
}

/// In-memory catalog shared by the loader task and the request handlers.
///
/// The loader is the only writer. Readers take an `Arc` snapshot of the
/// records and release the lock before filtering.
#[derive(Clone)]
pub struct RecordStore {
    inner: Arc<RwLock<Inner>>,
}

struct Inner {
    state: LoadState,
    records: Arc<Vec<Movie>>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                state: LoadState::Idle,
                records: Arc::new(Vec::new()),
            })),
        }
    }

    pub fn with_records(records: Vec<Movie>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                state: LoadState::Loaded,
                records: Arc::new(records),
            })),
        }
    }

    pub async fn mark_loading(&self) {
        self.inner.write().await.state = LoadState::Loading;
    }

    pub async fn replace(&self, records: Vec<Movie>) {
        let mut inner = self.inner.write().await;
        inner.records = Arc::new(records);
        inner.state = LoadState::Loaded;
    }

    /// Records the failure. Whatever was stored before stays in place.
    pub async fn mark_failed(&self) {
        self.inner.write().await.state = LoadState::Failed;
    }

    pub async fn snapshot(&self) -> Arc<Vec<Movie>> {
        self.inner.read().await.records.clone()
    }

    pub async fn status(&self) -> StoreStatus {
        let inner = self.inner.read().await;
        StoreStatus { state: inner.state, records: inner.records.len() }
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}
