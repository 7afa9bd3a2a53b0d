// ── Fetch coordinator ──
//
// One `ListController` per list view. It owns the view's current query and
// its `FetchState`, and makes sure only the most recently issued query can
// ever write a result: every request gets a sequence number, and a
// completion is applied only if its number is still the current one.
//
// The sequence check and the state write both happen inside the `watch`
// sender's modify closures, i.e. under the channel's write lock, so a
// submit can never slip in between them. Cancelling the superseded
// request's future through a `CancellationToken` just saves the network
// round trip; the sequence gate is what keeps state correct.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use scoutly_api::ResourceClient;
use tokio::sync::{Mutex, watch};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::error::CoreError;
use crate::filters::ListResource;
use crate::page::{PageResult, normalize};
use crate::query::{Query, SortDirection, SortField};
use crate::state::FetchState;

/// What happened to a submitted query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The response (success or failure) was written to state.
    Applied,
    /// A newer query was issued first; this one's result was discarded.
    Superseded,
}

/// Paginated, filtered view over one resource collection.
///
/// Cheaply cloneable; clones drive the same view. Observe it through
/// [`subscribe()`](Self::subscribe) or take snapshots with
/// [`state()`](Self::state).
pub struct ListController<R: ListResource> {
    inner: Arc<ControllerInner<R>>,
}

impl<R: ListResource> Clone for ListController<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

struct ControllerInner<R: ListResource> {
    client: ResourceClient<R>,
    state: watch::Sender<FetchState<R::Item>>,
    /// Sequence number of the newest issued request. Only read or written
    /// inside `state`'s modify closures.
    current: AtomicU64,
    inflight: Mutex<Inflight<R::Filters>>,
}

/// Bookkeeping for the newest issued request.
struct Inflight<F> {
    seq: u64,
    query: Query<F>,
    cancel: CancellationToken,
}

impl<R: ListResource> ListController<R> {
    /// A controller in `Idle` with a fresh query of `page_size` rows.
    pub fn new(client: ResourceClient<R>, page_size: u32) -> Self {
        let (state, _) = watch::channel(FetchState::Idle);
        Self {
            inner: Arc::new(ControllerInner {
                client,
                state,
                current: AtomicU64::new(0),
                inflight: Mutex::new(Inflight {
                    seq: 0,
                    query: Query::new(page_size),
                    cancel: CancellationToken::new(),
                }),
            }),
        }
    }

    // ── Observation ──────────────────────────────────────────────────

    /// Snapshot of the current fetch state.
    pub fn state(&self) -> FetchState<R::Item> {
        self.inner.state.borrow().clone()
    }

    /// Receiver that wakes on every state transition.
    pub fn subscribe(&self) -> watch::Receiver<FetchState<R::Item>> {
        self.inner.state.subscribe()
    }

    /// The most recently submitted query.
    pub async fn query(&self) -> Query<R::Filters> {
        self.inner.inflight.lock().await.query.clone()
    }

    // ── Submission ───────────────────────────────────────────────────

    /// Fetch the page described by `query` and apply the outcome if no
    /// newer query was submitted in the meantime.
    ///
    /// State moves to `Loading` (keeping the last good page) before the
    /// request goes out. Failures land in `FetchState::Error`; nothing is
    /// retried automatically.
    pub async fn submit_query(&self, query: Query<R::Filters>) -> SubmitOutcome {
        let params = query.to_list_params();
        let (seq, cancel) = self.begin(query).await;
        debug!(resource = R::PATH, seq, ?params, "list request issued");

        let response = tokio::select! {
            biased;
            () = cancel.cancelled() => None,
            response = self.inner.client.list(&params) => Some(response),
        };
        let Some(response) = response else {
            debug!(resource = R::PATH, seq, "list request cancelled by a newer query");
            return SubmitOutcome::Superseded;
        };

        let outcome = response
            .map_err(Into::into)
            .and_then(normalize::<R::Item>);

        if self.apply(seq, outcome) {
            SubmitOutcome::Applied
        } else {
            debug!(resource = R::PATH, seq, "discarding stale list response");
            SubmitOutcome::Superseded
        }
    }

    /// Record `query` as the newest, cancel the previous request and move
    /// to `Loading`. Returns the new sequence number and its cancel token.
    async fn begin(&self, query: Query<R::Filters>) -> (u64, CancellationToken) {
        let cancel = CancellationToken::new();
        let mut inflight = self.inner.inflight.lock().await;
        let seq = inflight.seq + 1;

        inflight.cancel.cancel();
        inflight.seq = seq;
        inflight.query = query;
        inflight.cancel = cancel.clone();

        self.inner.state.send_modify(|state| {
            self.inner.current.store(seq, Ordering::Release);
            state.begin_loading();
        });
        (seq, cancel)
    }

    /// Write `outcome` if `seq` is still the newest request.
    fn apply(&self, seq: u64, outcome: Result<PageResult<R::Item>, CoreError>) -> bool {
        self.inner.state.send_if_modified(|state| {
            if self.inner.current.load(Ordering::Acquire) == seq {
                state.settle(outcome);
                true
            } else {
                false
            }
        })
    }

    /// Re-submit the current query. Only ever called on explicit request.
    pub async fn retry(&self) -> SubmitOutcome {
        let query = self.query().await;
        self.submit_query(query).await
    }

    // ── Convenience transitions ──────────────────────────────────────

    pub async fn set_page(&self, page: u32) -> SubmitOutcome {
        let query = self.query().await.with_page(page);
        self.submit_query(query).await
    }

    pub async fn set_filters(&self, filters: R::Filters) -> SubmitOutcome {
        let query = self.query().await.with_filters(filters);
        self.submit_query(query).await
    }

    pub async fn set_search(&self, search: impl Into<String>) -> SubmitOutcome {
        let search = search.into();
        let query = self.query().await.with_search(search);
        self.submit_query(query).await
    }

    pub async fn set_sort_field(&self, field: SortField) -> SubmitOutcome {
        let query = self.query().await.with_sort_field(field);
        self.submit_query(query).await
    }

    pub async fn set_sort_direction(&self, direction: SortDirection) -> SubmitOutcome {
        let query = self.query().await.with_sort_direction(direction);
        self.submit_query(query).await
    }
}

impl<R: ListResource> std::fmt::Debug for ListController<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListController")
            .field("resource", &R::PATH)
            .field("current", &self.inner.current.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use scoutly_api::models::Player;
    use scoutly_api::{ApiClient, ApiVersion, PaginationMeta, Players, TransportConfig};
    use secrecy::SecretString;
    use serde_json::json;

    use super::*;

    fn controller() -> ListController<Players> {
        let token: SecretString = "t0k3n".to_string().into();
        let api = ApiClient::from_token(
            "http://127.0.0.1:9",
            &ApiVersion::default(),
            &token,
            &TransportConfig::default(),
        )
        .unwrap();
        ListController::new(ResourceClient::new(api), 20)
    }

    fn page_of(id: &str) -> PageResult<Player> {
        let player: Player =
            serde_json::from_value(json!({ "id": id, "name": id, "position": "ST" })).unwrap();
        PageResult {
            items: vec![player],
            pagination: PaginationMeta {
                page: 1,
                per_page: 20,
                total: 1,
                total_pages: 1,
            },
        }
    }

    fn first_id(state: &FetchState<Player>) -> Option<String> {
        state.data().and_then(|p| p.items.first()).map(|p| p.id.to_string())
    }

    #[tokio::test]
    async fn late_completion_of_older_request_is_discarded() {
        let ctl = controller();
        let (older, _) = ctl.begin(Query::new(20).with_search("a")).await;
        let (newer, _) = ctl.begin(Query::new(20).with_search("b")).await;

        // The older response arrives after the newer query went out.
        assert!(!ctl.apply(older, Ok(page_of("stale"))));
        assert!(ctl.state().is_loading());

        assert!(ctl.apply(newer, Ok(page_of("fresh"))));
        assert_eq!(first_id(&ctl.state()).as_deref(), Some("fresh"));

        // And once settled, the older one still cannot overwrite.
        assert!(!ctl.apply(older, Ok(page_of("stale"))));
        assert_eq!(first_id(&ctl.state()).as_deref(), Some("fresh"));
    }

    #[tokio::test]
    async fn stale_failure_does_not_replace_current_page() {
        let ctl = controller();
        let (older, _) = ctl.begin(Query::new(20)).await;
        let (newer, _) = ctl.begin(Query::new(20).with_page(2)).await;

        assert!(ctl.apply(newer, Ok(page_of("p2"))));
        assert!(!ctl.apply(older, Err(CoreError::Timeout)));
        assert!(ctl.state().error().is_none());
        assert_eq!(first_id(&ctl.state()).as_deref(), Some("p2"));
    }

    #[tokio::test]
    async fn begin_cancels_the_previous_request() {
        let ctl = controller();
        let (_, first) = ctl.begin(Query::new(20)).await;
        let (_, second) = ctl.begin(Query::new(20).with_page(3)).await;

        assert!(first.is_cancelled());
        assert!(!second.is_cancelled());
        assert_eq!(ctl.query().await.page(), 3);
    }
}
