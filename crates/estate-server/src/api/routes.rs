//! REST API routes.

use axum::{
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::api::estates;
use crate::state::AppState;

/// Create the API router.
pub fn create_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(ping))
        .route("/estate", post(estates::create_estate))
        .route("/estates", get(estates::list_estates))
        .route("/estate/:id/tree", post(estates::create_tree))
        .route("/estate/:id/stats", get(estates::get_stats))
        .route("/estate/:id/drone-plan", get(estates::get_drone_plan))
}

async fn ping() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "message": "API is running"
    }))
}
