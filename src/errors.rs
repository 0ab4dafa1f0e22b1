use axum::http::StatusCode;
use thiserror::Error;

/// Failure to write the session file.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session file I/O: {0}")]
    Io(#[from] std::io::Error),
    #[error("session encoding: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Failure of a single outbound call to the wallet backend or the market-data API.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("{status}: {reason}")]
    Status { status: StatusCode, reason: String },
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn from_status(status: StatusCode) -> Self {
        let reason = status
            .canonical_reason()
            .map(str::to_owned)
            .unwrap_or_else(|| status.as_u16().to_string());
        Self::Status { status, reason }
    }

    /// Reason phrase shown to the user.
    pub fn reason(&self) -> String {
        match self {
            Self::Transport(err) if err.is_connect() => "connection refused".to_string(),
            Self::Transport(err) if err.is_decode() => format!("invalid response body: {err}"),
            Self::Transport(err) => err.to_string(),
            Self::Status { reason, .. } => reason.clone(),
            Self::Decode(message) => message.clone(),
        }
    }

    /// Text written into the dashboard message area.
    pub fn display_message(&self) -> String {
        format!("Request failed: {}", self.reason())
    }
}
