use thiserror::Error;

/// Failures at the fetch boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("{url} returned status {status}")]
    Status { status: u16, url: String },

    /// The envelope came back with `success: false`.
    #[error("{0}")]
    Application(String),

    #[error("could not decode response: {0}")]
    Decode(String),

    #[error("{0} reported success without data")]
    MissingData(String),
}

impl ApiError {
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Status { .. })
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return Self::Status {
                status: status.as_u16(),
                url: err.url().map_or_else(String::new, ToString::to_string),
            };
        }
        if err.is_decode() {
            return Self::Decode(err.to_string());
        }
        Self::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
