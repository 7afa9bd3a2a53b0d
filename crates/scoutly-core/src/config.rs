// ── Runtime session configuration ──
//
// Describes *how* to reach the Scoutly API for one session. Carries the
// bearer credential and transport tuning but never touches disk: the CLI
// resolves profiles and hands a `ScoutConfig` in.

use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;
use url::Url;

use crate::query::DEFAULT_PAGE_SIZE;

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store.
    #[default]
    SystemDefaults,
    /// Additional CA certificate (PEM) for self-hosted deployments.
    CustomCa(PathBuf),
}

/// Everything needed to open a session against one deployment.
#[derive(Debug, Clone)]
pub struct ScoutConfig {
    /// Deployment root, e.g. `https://scout.example.com`. `/api/{version}`
    /// is appended unless already present.
    pub api_url: Url,
    pub api_version: String,
    /// Opaque bearer credential issued by the identity provider.
    pub token: SecretString,
    pub tls: TlsVerification,
    pub timeout: Duration,
    /// Rows per page for every list view in the session.
    pub page_size: u32,
}

impl ScoutConfig {
    pub fn new(api_url: Url, token: SecretString) -> Self {
        Self {
            api_url,
            api_version: "v1".into(),
            token,
            tls: TlsVerification::default(),
            timeout: Duration::from_secs(30),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}
