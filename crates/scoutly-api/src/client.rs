// Hand-crafted async HTTP client for the Scoutly REST API.
//
// Base path: /api/{version}/
// Auth: Authorization: Bearer <token>

use std::sync::Arc;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::Error;
use crate::auth::{ApiVersion, HandlerSlot, UnauthorizedHandler};
use crate::models::CurrentUser;
use crate::resources::{Coaches, Players, ResourceClient, Reports, Shortlists};
use crate::transport::TransportConfig;
use crate::types::{Envelope, ErrorBody, strip_blank_fields};

// ── Client ───────────────────────────────────────────────────────────

/// Async client for the Scoutly API.
///
/// Built once per session from a bearer credential and cheap to clone:
/// the underlying `reqwest::Client` is reference-counted. Resource-scoped
/// accessors ([`players()`](Self::players), [`coaches()`](Self::coaches), ...)
/// share the same connection pool.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    on_unauthorized: Option<HandlerSlot>,
}

impl ApiClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build from a bearer token and transport config.
    ///
    /// Injects `Authorization: Bearer <token>` as a sensitive default header.
    pub fn from_token(
        base_url: &str,
        version: &ApiVersion,
        token: &SecretString,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
            .map_err(|e| Error::InvalidCredential {
                message: format!("invalid bearer header value: {e}"),
            })?;
        bearer.set_sensitive(true);
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = transport.build_client_with_headers(headers)?;
        let base_url = Self::normalize_base_url(base_url, version)?;

        Ok(Self {
            http,
            base_url,
            on_unauthorized: None,
        })
    }

    /// Wrap an existing `reqwest::Client` (caller manages auth headers).
    pub fn from_reqwest(
        base_url: &str,
        version: &ApiVersion,
        http: reqwest::Client,
    ) -> Result<Self, Error> {
        let base_url = Self::normalize_base_url(base_url, version)?;
        Ok(Self {
            http,
            base_url,
            on_unauthorized: None,
        })
    }

    /// Install the session-wide 401 handler.
    pub fn with_unauthorized_handler(mut self, handler: Arc<dyn UnauthorizedHandler>) -> Self {
        self.on_unauthorized = Some(HandlerSlot(handler));
        self
    }

    /// Build the base URL: `{raw}/api/{version}/`.
    ///
    /// A URL that already ends in `/api/{version}` is used as-is.
    fn normalize_base_url(raw: &str, version: &ApiVersion) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;

        // Strip trailing slash for uniform handling
        let path = url.path().trim_end_matches('/').to_owned();
        let suffix = format!("/api/{version}");

        if path.ends_with(&suffix) {
            url.set_path(&format!("{path}/"));
        } else {
            url.set_path(&format!("{path}{suffix}/"));
        }

        Ok(url)
    }

    /// The resolved `/api/{version}/` base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── Resource accessors ───────────────────────────────────────────

    pub fn players(&self) -> ResourceClient<Players> {
        ResourceClient::new(self.clone())
    }

    pub fn coaches(&self) -> ResourceClient<Coaches> {
        ResourceClient::new(self.clone())
    }

    pub fn shortlists(&self) -> ResourceClient<Shortlists> {
        ResourceClient::new(self.clone())
    }

    pub fn reports(&self) -> ResourceClient<Reports> {
        ResourceClient::new(self.clone())
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Append path segments (e.g. `["players", "p1"]`) to the base URL.
    ///
    /// Each segment is percent-encoded on its own, so an id carrying `/`,
    /// `?` or `#` stays inside its segment. Empty and dot segments are
    /// rejected outright.
    fn url(&self, segments: &[&str]) -> Result<Url, Error> {
        if let Some(bad) = segments.iter().find(|s| matches!(**s, "" | "." | "..")) {
            return Err(Error::InvalidPathSegment {
                segment: (*bad).to_owned(),
            });
        }

        let mut url = self.base_url.clone();
        // base_url always ends with `/api/{version}/`, so it can be a base.
        url.path_segments_mut()
            .map_err(|()| Error::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    /// GET returning the `data` field of the success envelope.
    pub(crate) async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, Error> {
        let url = self.url(segments)?;
        debug!("GET {url}");

        let resp = self.http.get(url).send().await?;
        self.handle_envelope(resp).await
    }

    /// GET returning the envelope's `data` with extra query parameters.
    pub(crate) async fn get_with_params<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        params: &[(&str, String)],
    ) -> Result<T, Error> {
        let url = self.url(segments)?;
        debug!("GET {url} params={params:?}");

        let resp = self.http.get(url).query(params).send().await?;
        self.handle_envelope(resp).await
    }

    /// GET returning the whole body untouched. List responses go through
    /// here so the caller's normalizer sees exactly what the server sent.
    pub(crate) async fn get_raw(
        &self,
        segments: &[&str],
        params: &[(&str, String)],
    ) -> Result<Value, Error> {
        let url = self.url(segments)?;
        debug!("GET {url} params={params:?}");

        let resp = self.http.get(url).query(params).send().await?;
        self.handle_response(resp).await
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + Sync + ?Sized>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> Result<T, Error> {
        let url = self.url(segments)?;
        let body = encode_body(body)?;
        debug!("POST {url}");

        let resp = self.http.post(url).json(&body).send().await?;
        self.handle_envelope(resp).await
    }

    pub(crate) async fn post_empty<T: DeserializeOwned>(
        &self,
        segments: &[&str],
    ) -> Result<T, Error> {
        let url = self.url(segments)?;
        debug!("POST {url}");

        let resp = self.http.post(url).send().await?;
        self.handle_envelope(resp).await
    }

    pub(crate) async fn put<T: DeserializeOwned, B: Serialize + Sync + ?Sized>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> Result<T, Error> {
        let url = self.url(segments)?;
        let body = encode_body(body)?;
        debug!("PUT {url}");

        let resp = self.http.put(url).json(&body).send().await?;
        self.handle_envelope(resp).await
    }

    pub(crate) async fn delete(&self, segments: &[&str]) -> Result<(), Error> {
        let url = self.url(segments)?;
        debug!("DELETE {url}");

        let resp = self.http.delete(url).send().await?;
        self.handle_empty(resp).await
    }

    // ── Response handling ────────────────────────────────────────────

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            serde_json::from_str(&body).map_err(|e| {
                let preview: String = body.chars().take(200).collect();
                Error::Deserialization {
                    message: format!("{e} (body preview: {preview:?})"),
                    body,
                }
            })
        } else {
            Err(self.parse_error(status, resp).await)
        }
    }

    async fn handle_envelope<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let envelope: Envelope<T> = self.handle_response(resp).await?;
        Ok(envelope.data)
    }

    async fn handle_empty(&self, resp: reqwest::Response) -> Result<(), Error> {
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(self.parse_error(status, resp).await)
        }
    }

    async fn parse_error(&self, status: reqwest::StatusCode, resp: reqwest::Response) -> Error {
        if status == reqwest::StatusCode::UNAUTHORIZED {
            if let Some(HandlerSlot(handler)) = &self.on_unauthorized {
                handler.on_unauthorized();
            }
            return Error::Unauthorized;
        }

        let raw = resp.text().await.unwrap_or_default();
        let body: ErrorBody = serde_json::from_str(&raw).unwrap_or_default();
        let message = body.message().unwrap_or_else(|| {
            if raw.is_empty() {
                status.to_string()
            } else {
                raw.clone()
            }
        });

        match status.as_u16() {
            403 => Error::Forbidden { message },
            404 => Error::NotFound { message },
            409 => Error::Conflict { message },
            410 => Error::Gone { message },
            400 | 422 => Error::Validation {
                fields: body.field_errors(),
                message,
            },
            code => Error::Api {
                status: code,
                message,
                code: body.code(),
            },
        }
    }

    // ━━ Public API ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    // ── Auth ─────────────────────────────────────────────────────────

    /// The user the bearer credential belongs to.
    pub async fn current_user(&self) -> Result<CurrentUser, Error> {
        self.get(&["auth", "me"]).await
    }

    /// Ask the backend to refresh its copy of the user from the identity provider.
    pub async fn sync_user(&self) -> Result<Value, Error> {
        self.post_empty(&["auth", "sync"]).await
    }
}

fn encode_body<B: Serialize + ?Sized>(body: &B) -> Result<Value, Error> {
    strip_blank_fields(body).map_err(|e| Error::Deserialization {
        message: format!("failed to encode request body: {e}"),
        body: String::new(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn client(raw: &str) -> ApiClient {
        ApiClient::from_reqwest(raw, &ApiVersion::default(), reqwest::Client::new()).unwrap()
    }

    #[test]
    fn base_url_appends_api_version() {
        let c = client("http://localhost:8000");
        assert_eq!(c.base_url().as_str(), "http://localhost:8000/api/v1/");
    }

    #[test]
    fn base_url_keeps_existing_api_suffix() {
        let c = client("https://scout.example.com/api/v1/");
        assert_eq!(c.base_url().as_str(), "https://scout.example.com/api/v1/");
    }

    #[test]
    fn base_url_respects_custom_version_and_prefix() {
        let c = ApiClient::from_reqwest(
            "https://example.com/scouting",
            &ApiVersion::new("v2"),
            reqwest::Client::new(),
        )
        .unwrap();
        assert_eq!(c.base_url().as_str(), "https://example.com/scouting/api/v2/");
    }

    #[test]
    fn url_escapes_each_segment() {
        let c = client("http://localhost:8000");
        let url = c.url(&["players", "../shortlists/s9?x#y"]).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8000/api/v1/players/..%2Fshortlists%2Fs9%3Fx%23y"
        );
    }

    #[test]
    fn url_rejects_dot_and_empty_segments() {
        let c = client("http://localhost:8000");
        for bad in ["", ".", ".."] {
            let err = c.url(&["players", bad]).unwrap_err();
            assert!(
                matches!(err, Error::InvalidPathSegment { ref segment } if segment == bad),
                "{bad:?} -> {err:?}"
            );
        }
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let result =
            ApiClient::from_reqwest("not a url", &ApiVersion::default(), reqwest::Client::new());
        assert!(matches!(result, Err(Error::InvalidUrl(_))));
    }
}
