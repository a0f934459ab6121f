use thiserror::Error;

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Failures talking to the remote role service.
///
/// The UI treats every variant the same way; the split only makes logs useful.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// 400/422 from the server, e.g. a duplicate role name.
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl ApiError {
    pub fn from_status(status: reqwest::StatusCode, message: String) -> Self {
        match status.as_u16() {
            400 | 422 => ApiError::Validation(message),
            401 => ApiError::Authentication(message),
            403 => ApiError::Forbidden(message),
            404 => ApiError::NotFound(message),
            500..=599 => ApiError::Server(message),
            _ => ApiError::Other(format!("HTTP {status}: {message}")),
        }
    }
}
