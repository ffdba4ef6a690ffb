//! Error types for the notes API client.

use thiserror::Error;

/// Every way a client call can fail. Non-2xx statuses are sorted by class so
/// callers can branch on the kind of failure instead of parsing text.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered 404.
    #[error("Failed to {operation}: 404{}", reason(.status_text))]
    NotFound {
        operation: String,
        status_text: String,
    },

    /// The backend rejected the request payload (400 or 422).
    #[error("Failed to {operation}: {status}{}{}", reason(.status_text), detail_suffix(.detail))]
    ValidationFailed {
        operation: String,
        status: u16,
        status_text: String,
        /// Backend's explanation, when the body carried one
        detail: Option<String>,
    },

    /// The backend failed while handling the request (5xx).
    #[error("Failed to {operation}: {status}{}", reason(.status_text))]
    ServerError {
        operation: String,
        status: u16,
        status_text: String,
    },

    /// Any other non-success status.
    #[error("Failed to {operation}: {status}{}", reason(.status_text))]
    RequestFailed {
        operation: String,
        status: u16,
        status_text: String,
    },

    /// No usable response: connection refused, DNS, timeout.
    #[error("Failed to {operation}: {source}")]
    Transport {
        operation: String,
        #[source]
        source: reqwest::Error,
    },

    /// A success response whose body did not match the expected shape.
    #[error("Failed to {operation}: unexpected response body: {source}")]
    Decode {
        operation: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Status text with its leading space; empty for codes without a reason phrase
fn reason(status_text: &str) -> String {
    if status_text.is_empty() {
        String::new()
    } else {
        format!(" {}", status_text)
    }
}

fn detail_suffix(detail: &Option<String>) -> String {
    match detail {
        Some(d) if !d.is_empty() => format!(": {}", d),
        _ => String::new(),
    }
}

/// Convenience alias that pins the error type to [`ApiError`].
pub type Result<T> = std::result::Result<T, ApiError>;

impl ApiError {
    /// Classify a non-success response. `detail` is the backend's error
    /// message when the body carried one.
    pub(crate) fn from_status(
        operation: String,
        status: u16,
        status_text: String,
        detail: Option<String>,
    ) -> Self {
        match status {
            404 => ApiError::NotFound {
                operation,
                status_text,
            },
            400 | 422 => ApiError::ValidationFailed {
                operation,
                status,
                status_text,
                detail,
            },
            500..=599 => ApiError::ServerError {
                operation,
                status,
                status_text,
            },
            _ => ApiError::RequestFailed {
                operation,
                status,
                status_text,
            },
        }
    }

    /// HTTP status, when the backend answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::NotFound { .. } => Some(404),
            ApiError::ValidationFailed { status, .. }
            | ApiError::ServerError { status, .. }
            | ApiError::RequestFailed { status, .. } => Some(*status),
            ApiError::Transport { source, .. } => source.status().map(|s| s.as_u16()),
            ApiError::Decode { .. } => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. })
    }

    /// The attempted operation, e.g. "fetch note 5"
    pub fn operation(&self) -> &str {
        match self {
            ApiError::NotFound { operation, .. }
            | ApiError::ValidationFailed { operation, .. }
            | ApiError::ServerError { operation, .. }
            | ApiError::RequestFailed { operation, .. }
            | ApiError::Transport { operation, .. }
            | ApiError::Decode { operation, .. } => operation,
        }
    }
}
