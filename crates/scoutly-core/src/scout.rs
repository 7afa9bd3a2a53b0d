// ── Session facade ──
//
// `Scout` is built once per session from a `ScoutConfig` and hands out
// list controllers and one-shot entity operations that all share a single
// `ApiClient` (and so a single connection pool and 401 handler).

use std::sync::Arc;

use scoutly_api::models::{CurrentUser, PlayerStatsSummary};
use scoutly_api::{
    ApiClient, ApiVersion, Coaches, EntityId, Players, Reports, Resource, ResourceClient,
    Shortlists, SupportsSimilar, TlsMode, TransportConfig, UnauthorizedHandler, Updatable,
};
use serde::Serialize;
use tracing::warn;

use crate::config::{ScoutConfig, TlsVerification};
use crate::controller::ListController;
use crate::error::CoreError;
use crate::filters::ListResource;
use crate::query::DEFAULT_PAGE_SIZE;

/// Number of similar entities requested alongside a detail view.
pub const SIMILAR_LIMIT: u32 = 5;

/// An entity together with its best-effort "similar" list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityDetail<T> {
    pub entity: T,
    /// Empty when the similar lookup failed.
    pub similar: Vec<T>,
}

/// The main entry point for consumers.
#[derive(Debug, Clone)]
pub struct Scout {
    api: ApiClient,
    page_size: u32,
}

impl Scout {
    /// Build the session client. Does not touch the network.
    pub fn new(config: &ScoutConfig) -> Result<Self, CoreError> {
        let transport = TransportConfig {
            tls: match &config.tls {
                TlsVerification::SystemDefaults => TlsMode::System,
                TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
            },
            timeout: config.timeout,
        };
        let api = ApiClient::from_token(
            config.api_url.as_str(),
            &ApiVersion::new(config.api_version.clone()),
            &config.token,
            &transport,
        )?;

        Ok(Self {
            api,
            page_size: config.page_size,
        })
    }

    /// Wrap an already-configured client.
    pub fn from_client(api: ApiClient) -> Self {
        Self {
            api,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Install the session-wide reaction to a rejected credential.
    pub fn with_unauthorized_handler(mut self, handler: Arc<dyn UnauthorizedHandler>) -> Self {
        self.api = self.api.with_unauthorized_handler(handler);
        self
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    fn resource<R: Resource>(&self) -> ResourceClient<R> {
        ResourceClient::new(self.api.clone())
    }

    // ── List views ───────────────────────────────────────────────────

    /// A fresh controller for one list view over `R`.
    pub fn list<R: ListResource>(&self) -> ListController<R> {
        ListController::new(self.resource(), self.page_size)
    }

    pub fn players(&self) -> ListController<Players> {
        self.list()
    }

    pub fn coaches(&self) -> ListController<Coaches> {
        self.list()
    }

    pub fn shortlists(&self) -> ListController<Shortlists> {
        self.list()
    }

    pub fn reports(&self) -> ListController<Reports> {
        self.list()
    }

    // ── Entities ─────────────────────────────────────────────────────

    pub async fn get<R: Resource>(&self, id: &EntityId) -> Result<R::Item, CoreError> {
        Ok(self.resource::<R>().get(id).await?)
    }

    /// Load an entity, then its similar entities.
    ///
    /// Only the entity fetch can fail the call; a failed similar lookup is
    /// logged and yields an empty list. The similar lookup is only issued
    /// once the entity has loaded, so a rejected credential surfaces (and
    /// reaches the unauthorized handler) once per detail load.
    pub async fn detail<R: SupportsSimilar>(
        &self,
        id: &EntityId,
    ) -> Result<EntityDetail<R::Item>, CoreError> {
        let client = self.resource::<R>();
        let entity = client.get(id).await?;

        let similar = client
            .similar(id, Some(SIMILAR_LIMIT))
            .await
            .unwrap_or_else(|e| {
                warn!(resource = R::PATH, %id, error = %e, "similar lookup failed");
                Vec::new()
            });

        Ok(EntityDetail { entity, similar })
    }

    /// Create from a draft. The server's copy is returned as-is.
    pub async fn create<R: Resource>(&self, draft: &R::Create) -> Result<R::Item, CoreError> {
        Ok(self.resource::<R>().create(draft).await?)
    }

    /// Replace-on-success update: the returned entity supersedes any local copy.
    pub async fn update<R: Updatable>(
        &self,
        id: &EntityId,
        changes: &R::Update,
    ) -> Result<R::Item, CoreError> {
        Ok(self.resource::<R>().update(id, changes).await?)
    }

    pub async fn delete<R: Resource>(&self, id: &EntityId) -> Result<(), CoreError> {
        Ok(self.resource::<R>().delete(id).await?)
    }

    // ── Extras ───────────────────────────────────────────────────────

    pub async fn player_stats(&self) -> Result<PlayerStatsSummary, CoreError> {
        Ok(self.api.players().stats_summary().await?)
    }

    pub async fn current_user(&self) -> Result<CurrentUser, CoreError> {
        Ok(self.api.current_user().await?)
    }
}
