use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;

use eventcat_common::{Event, SortCriteria, sort_events};
use eventcat_storage::{EventStore, StoreError};

#[derive(Clone)]
pub struct ApiState {
    pub store: Arc<dyn EventStore>,
}

pub fn router(store: Arc<dyn EventStore>) -> Router {
    let state = ApiState { store };

    Router::new()
        .route("/health", get(health))
        .route("/api/events", get(list_events).post(create_event))
        .route(
            "/api/events/{id}",
            get(get_event).put(update_event).delete(delete_event),
        )
        .with_state(state)
}

fn error_response(err: StoreError) -> Response {
    let status = match &err {
        StoreError::NotFound(_) => StatusCode::NOT_FOUND,
        StoreError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        StoreError::Corrupt(_) | StoreError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, err.to_string()).into_response()
}

async fn health(State(state): State<ApiState>) -> Response {
    match state.store.health().await {
        Ok(_) => Json(json!({ "status": "ok" })).into_response(),
        Err(err) => (
            StatusCode::SERVICE_UNAVAILABLE,
            format!("store error: {err}"),
        )
            .into_response(),
    }
}

#[derive(Debug, Deserialize)]
struct ListQuery {
    #[serde(rename = "sortBy")]
    sort_by: Option<String>,
}

async fn list_events(State(state): State<ApiState>, Query(query): Query<ListQuery>) -> Response {
    match state.store.list_events().await {
        Ok(mut events) => {
            // An unrecognized sortBy value falls back to the unsorted list.
            if let Some(value) = query.sort_by.as_deref()
                && let Some(criteria) = SortCriteria::parse(value)
            {
                sort_events(&mut events, criteria);
            }
            Json(events).into_response()
        }
        Err(err) => error_response(err),
    }
}

async fn get_event(State(state): State<ApiState>, Path(id): Path<i64>) -> Response {
    match state.store.get_event(id).await {
        Ok(Some(event)) => Json(event).into_response(),
        Ok(None) => error_response(StoreError::NotFound(id)),
        Err(err) => error_response(err),
    }
}

async fn create_event(State(state): State<ApiState>, Json(payload): Json<Event>) -> Response {
    match state.store.create_event(payload).await {
        Ok(created) => Json(created).into_response(),
        Err(err) => error_response(err),
    }
}

async fn update_event(
    State(state): State<ApiState>,
    Path(id): Path<i64>,
    Json(payload): Json<Event>,
) -> Response {
    match state.store.update_event(id, payload).await {
        Ok(updated) => Json(updated).into_response(),
        Err(err) => error_response(err),
    }
}

async fn delete_event(State(state): State<ApiState>, Path(id): Path<i64>) -> Response {
    match state.store.delete_event(id).await {
        Ok(true) => StatusCode::OK.into_response(),
        Ok(false) => error_response(StoreError::NotFound(id)),
        Err(err) => error_response(err),
    }
}
