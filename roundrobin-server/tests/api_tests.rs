//! Integration tests for roundrobin-server API

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use roundrobin_core::{EngineConfig, WinnerPolicy};
use roundrobin_server::{create_router, ServerConfig, ServerState};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

fn test_app() -> Router {
    app_with(ServerConfig::default())
}

fn app_with(config: ServerConfig) -> Router {
    let state = Arc::new(ServerState::new(config.engine.clone()));
    create_router(&config, state)
}

async fn send(app: &Router, method: &str, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_status_endpoint() {
    let app = test_app();
    send(&app, "POST", "/add_player/A").await;
    send(&app, "POST", "/add_player/B").await;

    let (status, body) = send(&app, "GET", "/status").await;
    assert_eq!(status, StatusCode::OK);

    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["players"], 2);
    assert_eq!(json["matches"], 1);
}

#[tokio::test]
async fn test_initial_state() {
    let app = test_app();

    let (status, body) = send(&app, "GET", "/state").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"players":[],"leaderboard":{},"current_match":[]}"#);
}

#[tokio::test]
async fn test_add_player_response() {
    let app = test_app();

    let (status, body) = send(&app, "POST", "/add_player/alice").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"players":["alice"],"leaderboard":{"alice":0}}"#);

    // Adding again changes nothing
    let (status, again) = send(&app, "POST", "/add_player/alice").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(again, body);
}

#[tokio::test]
async fn test_round_robin_scenario() {
    let app = test_app();
    for name in ["A", "B", "C"] {
        send(&app, "POST", &format!("/add_player/{name}")).await;
    }

    let (_, body) = send(&app, "GET", "/state").await;
    assert_eq!(
        body,
        r#"{"players":["A","B","C"],"leaderboard":{"A":0,"B":0,"C":0},"current_match":["A","B"]}"#
    );

    let (status, body) = send(&app, "POST", "/record_winner/A").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        r#"{"leaderboard":{"A":1,"B":0,"C":0},"current_match":["A","C"]}"#
    );

    let (_, body) = send(&app, "POST", "/record_winner/C").await;
    assert_eq!(
        body,
        r#"{"leaderboard":{"A":1,"C":1,"B":0},"current_match":["B","C"]}"#
    );

    let (status, body) = send(&app, "DELETE", "/delete_player/B").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"players":["A","C"],"leaderboard":{"A":1,"C":1}}"#);

    let (_, body) = send(&app, "GET", "/state").await;
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["current_match"], serde_json::json!(["A", "C"]));
}

#[tokio::test]
async fn test_unknown_winner_advances_match() {
    let app = test_app();
    for name in ["A", "B", "C"] {
        send(&app, "POST", &format!("/add_player/{name}")).await;
    }

    let (status, body) = send(&app, "POST", "/record_winner/nobody").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        r#"{"leaderboard":{"A":0,"B":0,"C":0},"current_match":["A","C"]}"#
    );
}

#[tokio::test]
async fn test_delete_missing_player_is_noop() {
    let app = test_app();
    send(&app, "POST", "/add_player/A").await;

    let (status, body) = send(&app, "DELETE", "/delete_player/Z").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"players":["A"],"leaderboard":{"A":0}}"#);
}

#[tokio::test]
async fn test_record_winner_with_no_matches() {
    let app = test_app();

    let (status, body) = send(&app, "POST", "/record_winner/A").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"leaderboard":{},"current_match":[]}"#);
}

#[tokio::test]
async fn test_rename_player() {
    let app = test_app();
    for name in ["A", "B"] {
        send(&app, "POST", &format!("/add_player/{name}")).await;
    }
    send(&app, "POST", "/record_winner/B").await;

    let (status, body) = send(&app, "PUT", "/rename_player/B/bea").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        r#"{"players":["A","bea"],"leaderboard":{"bea":1,"A":0},"current_match":["A","bea"]}"#
    );
}

#[tokio::test]
async fn test_skip_and_list_matches() {
    let app = test_app();
    for name in ["A", "B", "C"] {
        send(&app, "POST", &format!("/add_player/{name}")).await;
    }

    let (status, body) = send(&app, "POST", "/skip_match").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        r#"{"leaderboard":{"A":0,"B":0,"C":0},"current_match":["A","C"]}"#
    );

    let (status, body) = send(&app, "GET", "/matches").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        r#"{"matches":[["A","B"],["A","C"],["B","C"]],"cursor":1,"total":3}"#
    );
}

#[tokio::test]
async fn test_empty_schedule_listing() {
    let app = test_app();

    let (_, body) = send(&app, "GET", "/matches").await;
    assert_eq!(body, r#"{"matches":[],"cursor":null,"total":0}"#);
}

#[tokio::test]
async fn test_strict_mode_errors() {
    let config = ServerConfig {
        engine: EngineConfig::strict().with_winner_policy(WinnerPolicy::CurrentMatchOnly),
        ..Default::default()
    };
    let app = app_with(config);
    for name in ["A", "B", "C"] {
        let (status, _) = send(&app, "POST", &format!("/add_player/{name}")).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = send(&app, "POST", "/add_player/A").await;
    assert_eq!(status, StatusCode::CONFLICT);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["error"], "player already registered: A");

    let (status, _) = send(&app, "DELETE", "/delete_player/Z").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "POST", "/record_winner/C").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    // The rejected win did not move the match
    let (_, body) = send(&app, "GET", "/state").await;
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["current_match"], serde_json::json!(["A", "B"]));
}

#[tokio::test]
async fn test_wrong_method_is_rejected() {
    let app = test_app();

    let (status, _) = send(&app, "GET", "/add_player/A").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

    let (status, _) = send(&app, "GET", "/no_such_route").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cors_allows_any_origin_by_default() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/state")
                .header(header::ORIGIN, "http://localhost:5173")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn test_cors_origin_list() {
    let config = ServerConfig {
        cors_origins: vec!["http://localhost:5173".to_string()],
        ..Default::default()
    };
    let app = app_with(config);

    let allowed = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/state")
                .header(header::ORIGIN, "http://localhost:5173")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(
        allowed.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:5173"
    );

    let denied = app
        .oneshot(
            Request::builder()
                .uri("/state")
                .header(header::ORIGIN, "http://evil.example")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert!(denied
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_parallel_requests_keep_state_consistent() {
    const NAMES: [&str; 6] = ["A", "B", "C", "D", "E", "F"];

    let app = test_app();
    let mut handles = Vec::new();
    for i in 0..200 {
        let app = app.clone();
        handles.push(tokio::spawn(async move {
            let name = NAMES[i % NAMES.len()];
            let uri = match i % 3 {
                0 => format!("/add_player/{name}"),
                1 => format!("/delete_player/{name}"),
                _ => format!("/record_winner/{name}"),
            };
            let method = match i % 3 {
                0 | 2 => "POST",
                _ => "DELETE",
            };
            send(&app, method, &uri).await;

            let (status, body) = send(&app, "GET", "/state").await;
            assert_eq!(status, StatusCode::OK);
            let json: Value = serde_json::from_str(&body).unwrap();
            let players = json["players"].as_array().unwrap();
            let leaderboard = json["leaderboard"].as_object().unwrap();
            assert_eq!(leaderboard.len(), players.len());
            for player in players {
                assert!(leaderboard.contains_key(player.as_str().unwrap()));
            }
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let (_, body) = send(&app, "GET", "/state").await;
    let state: Value = serde_json::from_str(&body).unwrap();
    let n = state["players"].as_array().unwrap().len();

    let (status, body) = send(&app, "GET", "/matches").await;
    assert_eq!(status, StatusCode::OK);
    let schedule: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(schedule["total"], n * n.saturating_sub(1) / 2);
    assert_eq!(schedule["matches"].as_array().unwrap().len(), n * n.saturating_sub(1) / 2);
}
