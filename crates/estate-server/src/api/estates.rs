//! Estate, tree, statistics and drone plan endpoints.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use estate_core::{PlanError, TreeStats};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use uuid::Uuid;

use crate::state::{AppState, DronePlan, EstateSummary, StoreError};

type ApiError = (StatusCode, Json<Value>);

#[derive(Debug, Deserialize)]
pub struct CreateEstateRequest {
    pub width: i64,
    pub length: i64,
}

#[derive(Debug, Deserialize)]
pub struct CreateTreeRequest {
    pub x: i64,
    pub y: i64,
    pub height: i64,
}

#[derive(Debug, Deserialize)]
pub struct DronePlanQuery {
    pub max_distance: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: Uuid,
}

/// Create a new estate.
pub async fn create_estate(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateEstateRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let Json(req) = payload.map_err(|err| bad_request(err.body_text()))?;
    let estate = state
        .create_estate(req.width, req.length)
        .map_err(store_error)?;

    tracing::info!(
        "Created estate {} ({}x{})",
        estate.id,
        estate.width,
        estate.length
    );
    Ok((StatusCode::CREATED, Json(CreatedResponse { id: estate.id })))
}

/// List all estates.
pub async fn list_estates(State(state): State<Arc<AppState>>) -> Json<Vec<EstateSummary>> {
    Json(state.list_estates())
}

/// Plant a tree on an estate.
pub async fn create_tree(
    State(state): State<Arc<AppState>>,
    id: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<CreateTreeRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let Path(estate_id) = id.map_err(|err| bad_request(err.body_text()))?;
    let Json(req) = payload.map_err(|err| bad_request(err.body_text()))?;

    let tree_id = state
        .add_tree(estate_id, req.x, req.y, req.height)
        .map_err(store_error)?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id: tree_id })))
}

/// Tree height statistics for an estate.
pub async fn get_stats(
    State(state): State<Arc<AppState>>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<TreeStats>, ApiError> {
    let Path(estate_id) = id.map_err(|err| bad_request(err.body_text()))?;
    state.tree_stats(estate_id).map(Json).map_err(store_error)
}

/// Drone sweep distance, with a landing plot when `max_distance` is given.
pub async fn get_drone_plan(
    State(state): State<Arc<AppState>>,
    id: Result<Path<Uuid>, PathRejection>,
    query: Result<Query<DronePlanQuery>, QueryRejection>,
) -> Result<Json<DronePlan>, ApiError> {
    let Path(estate_id) = id.map_err(|err| bad_request(err.body_text()))?;
    let Query(query) = query.map_err(|err| bad_request(err.body_text()))?;
    state
        .drone_plan(estate_id, query.max_distance)
        .map(Json)
        .map_err(store_error)
}

fn bad_request(message: String) -> ApiError {
    tracing::warn!("Rejected request: {}", message);
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message })))
}

fn store_error(err: StoreError) -> ApiError {
    let status = match &err {
        StoreError::EstateNotFound(_) | StoreError::Plan(PlanError::EstateNotFound(_)) => {
            StatusCode::NOT_FOUND
        }
        StoreError::Plan(_) => {
            tracing::error!("Stored estate failed planning: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR
        }
        _ => {
            tracing::warn!("Rejected request: {}", err);
            StatusCode::BAD_REQUEST
        }
    };
    (status, Json(json!({ "error": err.to_string() })))
}
