// ── Core error types ──
//
// User-facing errors from scoutly-core. Consumers never see reqwest or
// serde errors directly: the `From<scoutly_api::Error>` impl folds the
// transport taxonomy into a small set of recoverable outcomes.
//
// `CoreError` is `Clone` so it can live inside `FetchState` and be handed
// to every subscriber of a list view.

use scoutly_api::FieldError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    // ── Connectivity ─────────────────────────────────────────────────
    #[error("Cannot reach the Scoutly API: {reason}")]
    Network { reason: String },

    #[error("Request timed out")]
    Timeout,

    #[error("Unauthorized -- sign in again")]
    Unauthorized,

    // ── Backend outcomes ─────────────────────────────────────────────
    #[error("Validation failed: {message}")]
    Validation {
        message: String,
        fields: Vec<FieldError>,
    },

    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("API error (HTTP {status}): {message}")]
    Api {
        status: u16,
        code: Option<String>,
        message: String,
    },

    /// The response arrived but did not have the expected shape.
    #[error("Malformed response: {message}")]
    MalformedResponse { message: String },

    // ── Local ────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<scoutly_api::Error> for CoreError {
    fn from(err: scoutly_api::Error) -> Self {
        use scoutly_api::Error as Api;

        match err {
            Api::Unauthorized => Self::Unauthorized,
            Api::Forbidden { message } => Self::Api {
                status: 403,
                code: None,
                message,
            },
            Api::InvalidCredential { message } => Self::Config { message },
            Api::Transport(e) => {
                if e.is_timeout() {
                    Self::Timeout
                } else {
                    Self::Network {
                        reason: e.to_string(),
                    }
                }
            }
            Api::InvalidUrl(e) => Self::Config {
                message: format!("Invalid URL: {e}"),
            },
            Api::InvalidPathSegment { segment } => Self::Validation {
                message: format!("{segment:?} is not a usable id"),
                fields: Vec::new(),
            },
            Api::Tls(reason) => Self::Network { reason },
            Api::NotFound { message } | Api::Gone { message } => Self::NotFound { message },
            Api::Validation { message, fields } => Self::Validation { message, fields },
            Api::Conflict { message } => Self::Conflict { message },
            Api::Api {
                status,
                message,
                code,
            } => Self::Api {
                status,
                code,
                message,
            },
            Api::Deserialization { message, .. } => Self::MalformedResponse { message },
        }
    }
}
