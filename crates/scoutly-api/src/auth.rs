use std::fmt;
use std::sync::Arc;

/// Session-wide reaction to a rejected credential.
///
/// Installed once on the [`ApiClient`](crate::ApiClient) and invoked for
/// every HTTP 401 response, before the call returns
/// [`Error::Unauthorized`](crate::Error::Unauthorized). Front ends use it to
/// send the user back through sign-in; individual calls never handle 401
/// themselves.
pub trait UnauthorizedHandler: Send + Sync {
    fn on_unauthorized(&self);
}

impl<F> UnauthorizedHandler for F
where
    F: Fn() + Send + Sync,
{
    fn on_unauthorized(&self) {
        self();
    }
}

/// Shared handle to an installed handler.
#[derive(Clone)]
pub(crate) struct HandlerSlot(pub(crate) Arc<dyn UnauthorizedHandler>);

impl fmt::Debug for HandlerSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("UnauthorizedHandler")
    }
}

/// API version segment in `/api/{version}/...`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiVersion(String);

impl ApiVersion {
    pub fn new(version: impl Into<String>) -> Self {
        Self(version.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self("v1".into())
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
