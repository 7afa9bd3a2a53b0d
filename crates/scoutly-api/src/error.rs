use thiserror::Error;

use crate::types::FieldError;

/// Top-level error type for the `scoutly-api` crate.
///
/// Covers every failure mode at the HTTP boundary: transport, credential
/// rejection, backend error envelopes, and response decoding.
/// `scoutly-core` maps these into user-facing diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// The backend rejected the bearer credential (HTTP 401).
    #[error("Unauthorized -- sign in again")]
    Unauthorized,

    /// The credential is valid but lacks permission (HTTP 403).
    #[error("Forbidden: {message}")]
    Forbidden { message: String },

    /// The bearer token could not be turned into a header value.
    #[error("Invalid credential: {message}")]
    InvalidCredential { message: String },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// An id or path segment that cannot address a single resource
    /// (empty, `.` or `..`).
    #[error("Invalid path segment: {segment:?}")]
    InvalidPathSegment { segment: String },

    /// TLS or HTTP client construction error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── Backend error envelopes ─────────────────────────────────────
    /// Entity missing (HTTP 404).
    #[error("Not found: {message}")]
    NotFound { message: String },

    /// Entity existed but has expired (HTTP 410).
    #[error("Gone: {message}")]
    Gone { message: String },

    /// Request rejected with field-level detail (HTTP 400 / 422).
    #[error("Validation failed: {message}")]
    Validation {
        message: String,
        fields: Vec<FieldError>,
    },

    /// Duplicate entity or state conflict (HTTP 409).
    #[error("Conflict: {message}")]
    Conflict { message: String },

    /// Any other non-success status.
    #[error("API error (HTTP {status}): {message}")]
    Api {
        status: u16,
        message: String,
        code: Option<String>,
    },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if the credential was rejected and the caller
    /// should send the user back through sign-in.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// Returns `true` if this is a transient error worth retrying by hand.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            Self::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Transport(e) => e.status() == Some(reqwest::StatusCode::NOT_FOUND),
            Self::NotFound { .. } | Self::Gone { .. } => true,
            _ => false,
        }
    }

    /// Extract the backend error code, if available.
    pub fn api_error_code(&self) -> Option<&str> {
        match self {
            Self::Api { code, .. } => code.as_deref(),
            _ => None,
        }
    }
}
