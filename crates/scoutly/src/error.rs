//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` into user-facing errors with
//! actionable help text and stable exit codes.

use miette::Diagnostic;
use thiserror::Error;

use scoutly_config::ConfigError;
use scoutly_core::{CoreError, FieldError, Resource};

pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const PERMISSION: i32 = 5;
    pub const CONFLICT: i32 = 6;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not reach the Scoutly API")]
    #[diagnostic(
        code(scoutly::connection_failed),
        help(
            "{reason}\n\
             Check the API URL in your profile or pass --api-url."
        )
    )]
    ConnectionFailed { reason: String },

    #[error("Request timed out")]
    #[diagnostic(
        code(scoutly::timeout),
        help("Increase the timeout with --timeout or check the deployment's health.")
    )]
    Timeout,

    // ── Authentication ───────────────────────────────────────────────
    #[error("The API rejected the bearer token")]
    #[diagnostic(
        code(scoutly::auth_failed),
        help(
            "Sign in again and store the fresh token.\n\
             Run: scoutly config set-token --profile {profile}"
        )
    )]
    AuthFailed { profile: String },

    #[error("No token configured for profile '{profile}'")]
    #[diagnostic(
        code(scoutly::no_credentials),
        help(
            "Store one with: scoutly config set-token --profile {profile}\n\
             Or set the SCOUTLY_TOKEN environment variable."
        )
    )]
    NoCredentials { profile: String },

    #[error("Permission denied: {message}")]
    #[diagnostic(
        code(scoutly::forbidden),
        help("Your account's role does not allow this operation.")
    )]
    Forbidden { message: String },

    // ── Resources ────────────────────────────────────────────────────
    #[error("{message}")]
    #[diagnostic(code(scoutly::not_found), help("{hint}"))]
    NotFound { message: String, hint: String },

    #[error("Conflict: {message}")]
    #[diagnostic(code(scoutly::conflict))]
    Conflict { message: String },

    #[error("The API rejected the request: {message}")]
    #[diagnostic(code(scoutly::rejected), help("{details}"))]
    Rejected { message: String, details: String },

    // ── API ──────────────────────────────────────────────────────────
    #[error("API error (HTTP {status}): {message}")]
    #[diagnostic(code(scoutly::api_error))]
    ApiError {
        status: u16,
        code: Option<String>,
        message: String,
    },

    #[error("Unexpected response from the API: {message}")]
    #[diagnostic(
        code(scoutly::malformed_response),
        help("The deployment may be running an incompatible version. Retry or check --api-url.")
    )]
    MalformedResponse { message: String },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(scoutly::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(scoutly::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: scoutly config init"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error("Configuration file not found")]
    #[diagnostic(
        code(scoutly::no_config),
        help(
            "Create one with: scoutly config init\n\
             Expected at: {path}\n\
             Or pass --api-url and --token directly."
        )
    )]
    NoConfig { path: String },

    #[error(transparent)]
    #[diagnostic(code(scoutly::config))]
    Config(Box<figment::Error>),

    #[error("Could not write configuration: {reason}")]
    #[diagnostic(code(scoutly::config_write))]
    ConfigWrite { reason: String },

    #[error("System keyring unavailable: {reason}")]
    #[diagnostic(
        code(scoutly::keyring),
        help("Store the token in the profile instead, or set SCOUTLY_TOKEN.")
    )]
    Keyring { reason: String },

    // ── Interactive ──────────────────────────────────────────────────
    #[error("Destructive operation '{action}' requires confirmation")]
    #[diagnostic(
        code(scoutly::confirmation_required),
        help("Use --yes (-y) to skip confirmation in non-interactive contexts.")
    )]
    NonInteractiveRequiresYes { action: String },

    #[error("Prompt failed: {0}")]
    #[diagnostic(code(scoutly::prompt))]
    Prompt(#[from] dialoguer::Error),

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON payload: {0}")]
    #[diagnostic(code(scoutly::json), help("Check the JSON file contents and try again."))]
    Json(#[from] serde_json::Error),

    #[error("Could not render YAML: {0}")]
    #[diagnostic(code(scoutly::yaml))]
    Yaml(#[from] serde_yaml::Error),

    #[error("Internal error: {0}")]
    #[diagnostic(code(scoutly::internal))]
    Internal(String),
}

impl From<figment::Error> for CliError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Timeout => exit_code::TIMEOUT,
            Self::AuthFailed { .. } | Self::NoCredentials { .. } => exit_code::AUTH,
            Self::Forbidden { .. } => exit_code::PERMISSION,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Conflict { .. } => exit_code::CONFLICT,
            Self::Validation { .. }
            | Self::Rejected { .. }
            | Self::NonInteractiveRequiresYes { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }

    /// Attach the failing command's profile to an auth error.
    pub fn with_profile(self, profile: &str) -> Self {
        match self {
            Self::AuthFailed { .. } => Self::AuthFailed {
                profile: profile.to_owned(),
            },
            other => other,
        }
    }

    /// Convert a core error raised while working on one `R`, pointing a
    /// not-found error at the matching list command.
    pub fn for_resource<R: Resource>(err: CoreError) -> Self {
        match err {
            CoreError::NotFound { message } => Self::NotFound {
                message,
                hint: format!("Run: scoutly {} list to see available {}s", R::PATH, R::NAME),
            },
            other => other.into(),
        }
    }
}

fn describe_fields(fields: &[FieldError]) -> String {
    if fields.is_empty() {
        return "Fix the input and try again.".into();
    }
    fields
        .iter()
        .map(|f| format!("{}: {}", f.field, f.message))
        .collect::<Vec<_>>()
        .join("\n")
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Network { reason } => Self::ConnectionFailed { reason },
            CoreError::Timeout => Self::Timeout,
            CoreError::Unauthorized => Self::AuthFailed {
                profile: "default".into(),
            },
            CoreError::Validation { message, fields } => Self::Rejected {
                details: describe_fields(&fields),
                message,
            },
            CoreError::NotFound { message } => Self::NotFound {
                message,
                hint: "Check the ID and try again.".into(),
            },
            CoreError::Conflict { message } => Self::Conflict { message },
            CoreError::Api {
                status: 403,
                message,
                ..
            } => Self::Forbidden { message },
            CoreError::Api {
                status,
                code,
                message,
            } => Self::ApiError {
                status,
                code,
                message,
            },
            CoreError::MalformedResponse { message } => Self::MalformedResponse { message },
            CoreError::Config { message } => Self::Validation {
                field: "configuration".into(),
                reason: message,
            },
            CoreError::Internal(message) => Self::Internal(message),
        }
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => Self::Validation { field, reason },
            ConfigError::NoCredentials { profile } => Self::NoCredentials { profile },
            ConfigError::ProfileNotFound { name } => Self::ProfileNotFound {
                name,
                available: "(none)".into(),
            },
            ConfigError::Figment(err) => Self::Config(err),
            ConfigError::Keyring(err) => Self::Keyring {
                reason: err.to_string(),
            },
            ConfigError::Serialization(err) => Self::ConfigWrite {
                reason: err.to_string(),
            },
            ConfigError::Io(err) => Self::Io(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scoutly_core::Players;

    #[test]
    fn forbidden_maps_to_permission_exit_code() {
        let err: CliError = CoreError::Api {
            status: 403,
            code: None,
            message: "Scouts cannot delete players".into(),
        }
        .into();
        assert!(matches!(err, CliError::Forbidden { .. }));
        assert_eq!(err.exit_code(), exit_code::PERMISSION);
    }

    #[test]
    fn validation_lists_field_errors_in_help() {
        let err: CliError = CoreError::Validation {
            message: "Validation failed".into(),
            fields: vec![FieldError {
                field: "position".into(),
                message: "field required".into(),
            }],
        }
        .into();
        let CliError::Rejected { details, .. } = &err else {
            panic!("expected Rejected, got {err:?}");
        };
        assert_eq!(details, "position: field required");
        assert_eq!(err.exit_code(), exit_code::USAGE);
    }

    #[test]
    fn not_found_points_at_resource_list_command() {
        let err = CliError::for_resource::<Players>(CoreError::NotFound {
            message: "Player not found".into(),
        });
        let CliError::NotFound { hint, .. } = &err else {
            panic!("expected NotFound, got {err:?}");
        };
        assert!(hint.contains("scoutly players list"));
        assert_eq!(err.exit_code(), exit_code::NOT_FOUND);
    }

    #[test]
    fn unauthorized_carries_profile_after_context() {
        let err = CliError::from(CoreError::Unauthorized).with_profile("club");
        assert!(matches!(&err, CliError::AuthFailed { profile } if profile == "club"));
        assert_eq!(err.exit_code(), exit_code::AUTH);
    }
}
