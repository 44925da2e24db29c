use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::Response,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use crate::{api, config::Config, state::AppState};

fn setup_app() -> axum::Router {
    let state = Arc::new(AppState::new(Config::default()));
    api::routes().with_state(state)
}

async fn read_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("parse json")
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn create_estate(app: &axum::Router, width: i64, length: i64) -> String {
    let res = app
        .clone()
        .oneshot(post_json("/estate", json!({ "width": width, "length": length })))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    read_json(res).await["id"].as_str().expect("estate id").to_string()
}

async fn plant(app: &axum::Router, estate_id: &str, x: i64, y: i64, height: i64) -> Response {
    app.clone()
        .oneshot(post_json(
            &format!("/estate/{}/tree", estate_id),
            json!({ "x": x, "y": y, "height": height }),
        ))
        .await
        .unwrap()
}

#[tokio::test]
async fn ping_reports_ok() {
    let app = setup_app();
    let res = app.oneshot(get("/ping")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(read_json(res).await["status"], "ok");
}

#[tokio::test]
async fn rejects_invalid_estates() {
    let app = setup_app();
    for body in [
        json!({ "width": 1000 }),
        json!({ "width": 0, "length": 2000 }),
        json!({ "width": 1000, "length": 60000 }),
    ] {
        let res = app.clone().oneshot(post_json("/estate", body)).await.unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert!(read_json(res).await["error"].is_string());
    }
}

#[tokio::test]
async fn tree_validation() {
    let app = setup_app();
    let estate_id = create_estate(&app, 100, 100).await;

    let res = plant(&app, &estate_id, 5, 10, 15).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    assert!(read_json(res).await["id"].is_string());

    for (x, y, height) in [(0, 10, 15), (5, 0, 15), (5, 10, 40), (200, 10, 15)] {
        let res = plant(&app, &estate_id, x, y, height).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "({x}, {y}) h{height}");
    }

    // Same plot twice.
    let res = plant(&app, &estate_id, 5, 10, 3).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let missing = uuid::Uuid::new_v4().to_string();
    let res = plant(&app, &missing, 5, 10, 15).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = plant(&app, "not-a-uuid", 5, 10, 15).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn stats_summarize_tree_heights() {
    let app = setup_app();
    let estate_id = create_estate(&app, 10, 10).await;

    let res = app
        .clone()
        .oneshot(get(&format!("/estate/{}/stats", estate_id)))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        read_json(res).await,
        json!({ "count": 0, "max_height": 0, "min_height": 0, "median_height": 0 })
    );

    for (x, height) in [(1, 10), (2, 5), (3, 30), (4, 20)] {
        assert_eq!(plant(&app, &estate_id, x, 1, height).await.status(), StatusCode::CREATED);
    }

    let res = app
        .clone()
        .oneshot(get(&format!("/estate/{}/stats", estate_id)))
        .await
        .unwrap();
    assert_eq!(
        read_json(res).await,
        json!({ "count": 4, "max_height": 30, "min_height": 5, "median_height": 15 })
    );

    let res = app
        .oneshot(get(&format!("/estate/{}/stats", uuid::Uuid::new_v4())))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn drone_plan_with_and_without_budget() {
    let app = setup_app();
    let estate_id = create_estate(&app, 2, 1).await;
    assert_eq!(plant(&app, &estate_id, 2, 1, 5).await.status(), StatusCode::CREATED);

    let res = app
        .clone()
        .oneshot(get(&format!("/estate/{}/drone-plan", estate_id)))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(read_json(res).await, json!({ "distance": 13 }));

    let res = app
        .clone()
        .oneshot(get(&format!("/estate/{}/drone-plan?max_distance=1", estate_id)))
        .await
        .unwrap();
    assert_eq!(
        read_json(res).await,
        json!({ "distance": 1, "rest": { "x": 1, "y": 1 } })
    );

    let res = app
        .clone()
        .oneshot(get(&format!("/estate/{}/drone-plan?max_distance=2", estate_id)))
        .await
        .unwrap();
    assert_eq!(
        read_json(res).await,
        json!({ "distance": 7, "rest": { "x": 2, "y": 1 } })
    );

    for bad in ["0", "-5", "abc"] {
        let res = app
            .clone()
            .oneshot(get(&format!("/estate/{}/drone-plan?max_distance={}", estate_id, bad)))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "max_distance={bad}");
    }

    let res = app
        .oneshot(get(&format!("/estate/{}/drone-plan", uuid::Uuid::new_v4())))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn lists_created_estates() {
    let app = setup_app();
    let first = create_estate(&app, 3, 4).await;
    let second = create_estate(&app, 5, 6).await;
    assert_eq!(plant(&app, &second, 1, 1, 1).await.status(), StatusCode::CREATED);

    let res = app.oneshot(get("/estates")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = read_json(res).await;
    let estates = body.as_array().expect("estate list");
    assert_eq!(estates.len(), 2);

    let find = |id: &str| estates.iter().find(|e| e["id"] == id).cloned().expect("listed");
    assert_eq!(find(&first)["tree_count"], 0);
    assert_eq!(find(&second)["tree_count"], 1);
    assert_eq!(find(&second)["width"], 5);
}
