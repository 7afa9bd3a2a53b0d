#![allow(clippy::unwrap_used)]
// Integration tests for `ListController` and `Scout` against a wiremock API.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use pretty_assertions::assert_eq;
use secrecy::SecretString;
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use scoutly_api::{ApiClient, ApiVersion, TransportConfig};
use scoutly_core::{
    CoreError, EntityId, FetchState, PlayerFilters, Players, Query, Scout, SubmitOutcome,
    UnauthorizedHandler,
};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, Scout) {
    let server = MockServer::start().await;
    let token: SecretString = "t0k3n".to_string().into();
    let api = ApiClient::from_token(
        &server.uri(),
        &ApiVersion::default(),
        &token,
        &TransportConfig::default(),
    )
    .unwrap();
    (server, Scout::from_client(api))
}

fn player(id: &str, name: &str) -> Value {
    json!({ "id": id, "name": name, "position": "ST" })
}

fn page_body(items: &[Value], page: u32, total: u64) -> Value {
    json!({
        "success": true,
        "data": items,
        "meta": { "pagination": {
            "page": page,
            "per_page": 20,
            "total": total,
            "total_pages": total.div_ceil(20)
        }}
    })
}

fn names(state: &FetchState<scoutly_core::models::Player>) -> Vec<String> {
    state
        .data()
        .map(|p| p.items.iter().map(|i| i.name.clone()).collect())
        .unwrap_or_default()
}

// ── Listing ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_search_returns_single_page() {
    let (server, scout) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/players"))
        .and(query_param("search", "Haaland"))
        .and(query_param("skip", "0"))
        .and(query_param("limit", "20"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page_body(&[player("p1", "Erling Haaland")], 1, 1)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let players = scout.players();
    assert!(players.state().is_idle());

    let outcome = players
        .submit_query(Query::default().with_search("Haaland"))
        .await;
    assert_eq!(outcome, SubmitOutcome::Applied);

    let FetchState::Success(page) = players.state() else {
        panic!("expected Success, got: {:?}", players.state());
    };
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].name, "Erling Haaland");
    assert_eq!(page.items[0].id, EntityId::from("p1"));
    assert_eq!(page.pagination.total_pages, 1);
}

#[tokio::test]
async fn test_later_query_wins_over_slower_earlier_one() {
    let (server, scout) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/players"))
        .and(query_param("search", "Alpha"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page_body(&[player("a", "Alpha")], 1, 1))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/players"))
        .and(query_param("search", "Bravo"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page_body(&[player("b", "Bravo")], 1, 1))
                .set_delay(Duration::from_millis(50)),
        )
        .mount(&server)
        .await;

    let players = scout.players();
    let (first, second) = tokio::join!(
        players.submit_query(Query::default().with_search("Alpha")),
        players.submit_query(Query::default().with_search("Bravo")),
    );

    assert_eq!(first, SubmitOutcome::Superseded);
    assert_eq!(second, SubmitOutcome::Applied);
    assert_eq!(names(&players.state()), vec!["Bravo"]);
    assert_eq!(players.query().await.search, "Bravo");
}

#[tokio::test]
async fn test_subscribers_see_loading_then_success() {
    let (server, scout) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/players"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page_body(&[player("p1", "Erling Haaland")], 1, 1))
                .set_delay(Duration::from_millis(100)),
        )
        .mount(&server)
        .await;

    let players = scout.players();
    let mut rx = players.subscribe();

    let driver = players.clone();
    let handle = tokio::spawn(async move { driver.submit_query(Query::default()).await });

    rx.changed().await.unwrap();
    assert!(rx.borrow_and_update().is_loading());

    rx.changed().await.unwrap();
    assert!(matches!(*rx.borrow(), FetchState::Success(_)));

    assert_eq!(handle.await.unwrap(), SubmitOutcome::Applied);
}

#[tokio::test]
async fn test_failure_keeps_last_good_page() {
    let (server, scout) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/players"))
        .and(query_param("skip", "0"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page_body(&[player("p1", "Erling Haaland")], 1, 40)),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/players"))
        .and(query_param("skip", "20"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "success": false,
            "error": { "code": "INTERNAL_ERROR", "message": "database unavailable" }
        })))
        .mount(&server)
        .await;

    let players = scout.players();
    players.submit_query(Query::default()).await;
    players.set_page(2).await;

    let state = players.state();
    assert!(
        matches!(state.error(), Some(CoreError::Api { status: 500, .. })),
        "expected Api 500, got: {state:?}"
    );
    assert_eq!(names(&state), vec!["Erling Haaland"]);
    assert_eq!(players.query().await.page(), 2);
}

#[tokio::test]
async fn test_retry_resubmits_current_query() {
    let (server, scout) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/players"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/players"))
        .and(query_param("search", "Salah"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page_body(&[player("p11", "Mohamed Salah")], 1, 1)),
        )
        .mount(&server)
        .await;

    let players = scout.players();
    players.set_search("Salah").await;
    assert!(players.state().error().is_some());

    assert_eq!(players.retry().await, SubmitOutcome::Applied);
    assert_eq!(names(&players.state()), vec!["Mohamed Salah"]);
}

#[tokio::test]
async fn test_all_sentinel_never_reaches_the_wire() {
    let (server, scout) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/players"))
        .and(query_param_is_missing("position"))
        .and(query_param_is_missing("club"))
        .and(query_param("nationality", "Egypt"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(&[], 1, 0)))
        .expect(1)
        .mount(&server)
        .await;

    let filters = PlayerFilters {
        position: scoutly_core::category("*"),
        club: Some("all".into()),
        nationality: scoutly_core::category("Egypt"),
        ..PlayerFilters::default()
    };

    let players = scout.players();
    assert_eq!(players.set_filters(filters).await, SubmitOutcome::Applied);
    assert!(matches!(players.state(), FetchState::Success(p) if p.is_empty()));
}

#[tokio::test]
async fn test_foreign_shape_is_malformed() {
    let (server, scout) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/players"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [player("p1", "Erling Haaland")],
            "pagination": { "page": 1, "per_page": 20, "total": 1, "total_pages": 1 }
        })))
        .mount(&server)
        .await;

    let players = scout.players();
    players.submit_query(Query::default()).await;

    assert!(matches!(
        players.state().error(),
        Some(CoreError::MalformedResponse { .. })
    ));
}

// ── Unauthorized ────────────────────────────────────────────────────

#[tokio::test]
async fn test_unauthorized_surfaces_and_fires_handler_once() {
    let (server, scout) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/players"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "detail": "Not authenticated" })),
        )
        .mount(&server)
        .await;

    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let handler: Arc<dyn UnauthorizedHandler> = Arc::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    let scout = scout.with_unauthorized_handler(handler);

    let players = scout.players();
    players.submit_query(Query::default()).await;

    assert_eq!(players.state().error(), Some(&CoreError::Unauthorized));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

// ── Detail ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_detail_on_rejected_token_fires_handler_once() {
    let (server, scout) = setup().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "detail": "Not authenticated" })),
        )
        .mount(&server)
        .await;

    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let handler: Arc<dyn UnauthorizedHandler> = Arc::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    let scout = scout.with_unauthorized_handler(handler);

    let err = scout.detail::<Players>(&EntityId::from("p1")).await.unwrap_err();

    assert_eq!(err, CoreError::Unauthorized);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    // The similar lookup is never issued for an entity that did not load.
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_detail_survives_similar_failure() {
    let (server, scout) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/players/p1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": player("p1", "Erling Haaland")
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/players/p1/similar"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let detail = scout.detail::<Players>(&EntityId::from("p1")).await.unwrap();
    assert_eq!(detail.entity.name, "Erling Haaland");
    assert!(detail.similar.is_empty());
}

#[tokio::test]
async fn test_detail_includes_similar() {
    let (server, scout) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/players/p1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": player("p1", "Erling Haaland")
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/players/p1/similar"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [player("p2", "Victor Osimhen")]
        })))
        .mount(&server)
        .await;

    let detail = scout.detail::<Players>(&EntityId::from("p1")).await.unwrap();
    assert_eq!(detail.similar.len(), 1);
    assert_eq!(detail.similar[0].name, "Victor Osimhen");
}

#[tokio::test]
async fn test_detail_of_missing_entity_fails() {
    let (server, scout) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/players/ghost"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "success": false,
            "error": { "code": "NOT_FOUND", "message": "Player not found" }
        })))
        .mount(&server)
        .await;

    let err = scout
        .detail::<Players>(&EntityId::from("ghost"))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        CoreError::NotFound {
            message: "Player not found".into()
        }
    );
}
