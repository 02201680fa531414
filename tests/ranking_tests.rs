use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use ovation::config::Config;
use ovation::domain::Genre;
use ovation::state::SharedState;
use std::sync::Arc;
use tower::ServiceExt;

async fn spawn_app() -> (Router, Arc<SharedState>) {
    let mut config = Config::default();
    config.general.database_url = "sqlite::memory:".to_string();
    config.general.max_db_connections = 1;

    let shared = Arc::new(
        SharedState::new(config)
            .await
            .expect("Failed to create shared state"),
    );
    let state = ovation::api::create_app_state(shared.clone(), None);
    (ovation::api::router(state).await, shared)
}

async fn get(app: &Router, uri: &str) -> axum::response::Response {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

/// Seeds a performance with one staging on 2026-03-10 and the given
/// number of confirmed and placeholder reservations. Returns the
/// performance id.
async fn seed_performance(
    shared: &SharedState,
    name: &str,
    genre: Genre,
    account_id: i32,
    confirmed: usize,
    placeholders: usize,
) -> String {
    let performance = shared.store.add_performance(name, genre).await.unwrap();
    let staging = shared
        .store
        .add_staging(&performance.id, "2026-03-10T19:00:00+00:00")
        .await
        .unwrap();

    for _ in 0..confirmed {
        shared
            .store
            .add_reservation(staging.id, Some(account_id))
            .await
            .unwrap();
    }
    for _ in 0..placeholders {
        shared.store.add_reservation(staging.id, None).await.unwrap();
    }

    performance.id
}

async fn seed_account(shared: &SharedState) -> i32 {
    shared
        .store
        .insert_account("booker@example.com", "booker", "not-a-real-hash")
        .await
        .unwrap()
        .expect("account insert should succeed")
        .id
}

#[tokio::test]
async fn test_ranking_orders_by_confirmed_reservations() {
    let (app, shared) = spawn_app().await;
    let account_id = seed_account(&shared).await;

    let a = seed_performance(&shared, "Solo Night", Genre::Concert, account_id, 3, 0).await;
    // Placeholder reservations must not lift a performance above one
    // with more confirmed bookings.
    let b = seed_performance(&shared, "Duo Night", Genre::Concert, account_id, 1, 5).await;

    let response = get(&app, "/api/performances/ranking?date=2026-03-10&unit=day&size=10").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let entries = body["data"].as_array().unwrap();
    assert_eq!(entries.len(), 2);

    assert_eq!(entries[0]["id"], a.as_str());
    assert_eq!(entries[0]["reservation_count"], 3);
    assert_eq!(entries[1]["id"], b.as_str());
    assert_eq!(entries[1]["reservation_count"], 1);
}

#[tokio::test]
async fn test_ranking_window_and_genre_filters() {
    let (app, shared) = spawn_app().await;
    let account_id = seed_account(&shared).await;

    let concert = seed_performance(&shared, "March Concert", Genre::Concert, account_id, 2, 0).await;
    let musical = seed_performance(&shared, "March Musical", Genre::Musical, account_id, 4, 0).await;

    // Staging outside the queried window.
    let outside = shared
        .store
        .add_performance("April Concert", Genre::Concert)
        .await
        .unwrap();
    let staging = shared
        .store
        .add_staging(&outside.id, "2026-04-20T19:00:00+00:00")
        .await
        .unwrap();
    shared
        .store
        .add_reservation(staging.id, Some(account_id))
        .await
        .unwrap();

    let response = get(&app, "/api/performances/ranking?date=2026-03-10&unit=week&size=10").await;
    let body = body_json(response).await;
    let ids: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec![musical.as_str(), concert.as_str()]);

    let response = get(
        &app,
        "/api/performances/ranking?genre=concert&date=2026-03-10&unit=week&size=10",
    )
    .await;
    let body = body_json(response).await;
    let ids: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec![concert.as_str()]);

    // A window with no stagings yields an empty list, not an error.
    let response = get(&app, "/api/performances/ranking?date=2030-01-01&unit=month&size=10").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_ranking_ties_break_by_performance_id() {
    let (app, shared) = spawn_app().await;
    let account_id = seed_account(&shared).await;

    let first = seed_performance(&shared, "Tied One", Genre::Play, account_id, 2, 0).await;
    let second = seed_performance(&shared, "Tied Two", Genre::Play, account_id, 2, 0).await;

    let mut expected = vec![first, second];
    expected.sort();

    let response = get(&app, "/api/performances/ranking?date=2026-03-10&unit=day&size=10").await;
    let body = body_json(response).await;
    let ids: Vec<String> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_str().unwrap().to_string())
        .collect();

    assert_eq!(ids, expected);
}

#[tokio::test]
async fn test_ranking_rejects_out_of_set_parameters() {
    let (app, _shared) = spawn_app().await;

    let cases = [
        "/api/performances/ranking?size=7",
        "/api/performances/ranking?size=0",
        "/api/performances/ranking?genre=opera",
        "/api/performances/ranking?unit=year",
        "/api/performances/ranking?date=10-03-2026",
    ];
    for uri in cases {
        let response = get(&app, uri).await;
        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "{uri} should be rejected"
        );
    }
}

#[tokio::test]
async fn test_browse_and_detail() {
    let (app, shared) = spawn_app().await;
    let account_id = seed_account(&shared).await;

    let concert = seed_performance(&shared, "Browsable", Genre::Concert, account_id, 0, 0).await;
    seed_performance(&shared, "Other", Genre::Classic, account_id, 0, 0).await;

    let response = get(&app, "/api/performances").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    let response = get(&app, "/api/performances?genre=concert").await;
    let body = body_json(response).await;
    let entries = body["data"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["name"], "Browsable");

    let response = get(&app, &format!("/api/performances/{concert}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["performance"]["id"], concert.as_str());
    assert_eq!(body["data"]["stagings"].as_array().unwrap().len(), 1);

    let response = get(&app, "/api/performances/not-a-uuid").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = get(
        &app,
        "/api/performances/1f1e9c2a-0000-4000-8000-000000000000",
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
