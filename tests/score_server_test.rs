//! Tests for the score server and the HTTP reporter that talks to it.

use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tictactoe_history::score_server::{ReportAck, ServerState, router};
use tictactoe_history::{HttpScoreReporter, Mark, ScoreEvent, ScoreSink};
use tower::ServiceExt;

fn post_json(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/start_game")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Serves a fresh scoreboard on an ephemeral port.
async fn spawn_server() -> (String, ServerState) {
    let state = ServerState::new();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = router(state.clone());
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{}/start_game", addr), state)
}

fn reporter(endpoint: String) -> HttpScoreReporter {
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    HttpScoreReporter::with_client(endpoint, client, tokio::runtime::Handle::current())
}

// ─────────────────────────────────────────────────────────────
//  Router
// ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_home_page() {
    let response = router(ServerState::new())
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(String::from_utf8_lossy(&bytes).contains("/scoreboard"));
}

#[tokio::test]
async fn test_report_acknowledged_and_scored() {
    let state = ServerState::new();
    let app = router(state.clone());

    let start = ScoreEvent::started("Ann", "Bob").body().to_string();
    let response = app.clone().oneshot(post_json(&start)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let ack: ReportAck = serde_json::from_value(body_json(response).await).unwrap();
    assert_eq!(ack.message, "Scores updated!");

    let won = ScoreEvent::won("Ann", "Bob", Mark::O).body().to_string();
    app.clone().oneshot(post_json(&won)).await.unwrap();

    let response = app
        .oneshot(Request::builder().uri("/scoreboard").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(
        body_json(response).await,
        serde_json::json!([["Bob", 1], ["Ann", -1]])
    );
    assert_eq!(state.scoreboard().lock().await.score("Bob"), Some(1));
}

#[tokio::test]
async fn test_draw_body_accepted() {
    let state = ServerState::new();
    let app = router(state.clone());
    for event in [ScoreEvent::started("Ann", "Bob"), ScoreEvent::draw("Ann", "Bob")] {
        let response = app
            .clone()
            .oneshot(post_json(&event.body().to_string()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
    let board = state.scoreboard().lock().await;
    assert_eq!(board.score("Ann"), Some(0));
    assert_eq!(board.score("Bob"), Some(0));
}

#[tokio::test]
async fn test_malformed_report_rejected() {
    let response = router(ServerState::new())
        .oneshot(post_json("{not json"))
        .await
        .unwrap();
    assert!(response.status().is_client_error());
}

// ─────────────────────────────────────────────────────────────
//  Reporter against a live server
// ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_reporter_send_updates_scores() {
    let (endpoint, state) = spawn_server().await;
    let reporter = reporter(endpoint);

    reporter
        .send(&ScoreEvent::started("Ann", "Bob"))
        .await
        .unwrap();
    reporter
        .send(&ScoreEvent::won("Ann", "Bob", Mark::X))
        .await
        .unwrap();

    let board = state.scoreboard().lock().await;
    assert_eq!(board.score("Ann"), Some(1));
    assert_eq!(board.score("Bob"), Some(-1));
}

#[tokio::test]
async fn test_reporter_submit_is_fire_and_forget() {
    let (endpoint, state) = spawn_server().await;
    let reporter = reporter(endpoint);

    reporter.submit(ScoreEvent::started("Ann", "Bob"));

    let mut registered = false;
    for _ in 0..100 {
        if state.scoreboard().lock().await.score("Ann").is_some() {
            registered = true;
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    assert!(registered, "Start report never arrived");
}

#[tokio::test]
async fn test_reporter_send_to_closed_port_fails() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let reporter = reporter(format!("http://{}/start_game", addr));
    assert!(reporter.send(&ScoreEvent::started("Ann", "Bob")).await.is_err());
}

#[tokio::test]
async fn test_reporter_submit_to_closed_port_does_not_panic() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let reporter = reporter(format!("http://{}/start_game", addr));
    reporter.submit(ScoreEvent::draw("Ann", "Bob"));
    tokio::time::sleep(Duration::from_millis(100)).await;
}

#[tokio::test]
async fn test_reporter_non_success_status_is_error() {
    let (endpoint, _state) = spawn_server().await;
    let reporter = reporter(endpoint.replace("/start_game", "/missing"));
    let err = reporter
        .send(&ScoreEvent::started("Ann", "Bob"))
        .await
        .unwrap_err();
    assert!(err.message.contains("404"));
}
