use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

/// Why the one-time catalog load produced no records.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The endpoint answered with a non-success status or could not be reached.
    #[error("catalog request failed: {0}")]
    Transport(String),

    /// The body was not a JSON array of movies.
    #[error("catalog payload is malformed: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for LoadError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            LoadError::Parse(err.to_string())
        } else {
            LoadError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Parse(err.to_string())
    }
}

#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for AppError {}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self(anyhow::Error::new(err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "request failed");
        let body = crate::templates::error_page(self.to_string());
        (StatusCode::BAD_REQUEST, Html(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_messages() {
        let transport = LoadError::Transport("404 Not Found".to_string());
        assert_eq!(transport.to_string(), "catalog request failed: 404 Not Found");

        let parse: LoadError = serde_json::from_str::<Vec<u8>>("{").unwrap_err().into();
        assert!(matches!(parse, LoadError::Parse(_)));
        assert!(parse.to_string().starts_with("catalog payload is malformed"));
    }
}
