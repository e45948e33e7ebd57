use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use serde::Deserialize;

use crate::{
    error::AppError,
    state::AppState,
    store::{Activity, ToDoList},
};

#[derive(Debug, Deserialize)]
pub struct CreateToDoListRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateToDoListRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct AddActivityRequest {
    pub detail: String,
}

// Both fields are optional on the wire: an absent flag means inactive, an
// absent detail means empty.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateActivityRequest {
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub detail: String,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/to-do-list", post(create_to_do_list).get(list_to_do_lists))
        .route(
            "/to-do-list/{to_do_list_id}",
            get(get_to_do_list)
                .put(update_to_do_list)
                .delete(delete_to_do_list),
        )
        .route(
            "/to-do-list/{to_do_list_id}/activities",
            post(add_activity).get(list_activities),
        )
        .route(
            "/to-do-list/{to_do_list_id}/activities/{activity_id}",
            get(get_activity).put(update_activity).delete(delete_activity),
        )
        .with_state(state)
}

async fn create_to_do_list(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateToDoListRequest>,
) -> Result<(StatusCode, Json<u64>), AppError> {
    let name = normalize_name(&body.name)?;
    let id = state.store_mut()?.create_list(name);
    Ok((StatusCode::CREATED, Json(id)))
}

async fn list_to_do_lists(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ToDoList>>, AppError> {
    let lists = state.store()?.list_lists().to_vec();
    Ok(Json(lists))
}

async fn get_to_do_list(
    State(state): State<Arc<AppState>>,
    Path(to_do_list_id): Path<u64>,
) -> Result<Json<ToDoList>, AppError> {
    let to_do_list_id = require_id(to_do_list_id)?;
    let list = state.store()?.get_list(to_do_list_id)?.clone();
    Ok(Json(list))
}

async fn update_to_do_list(
    State(state): State<Arc<AppState>>,
    Path(to_do_list_id): Path<u64>,
    Json(body): Json<UpdateToDoListRequest>,
) -> Result<StatusCode, AppError> {
    let to_do_list_id = require_id(to_do_list_id)?;
    let name = normalize_name(&body.name)?;
    state.store_mut()?.update_list(to_do_list_id, name)?;
    Ok(StatusCode::OK)
}

async fn delete_to_do_list(
    State(state): State<Arc<AppState>>,
    Path(to_do_list_id): Path<u64>,
) -> Result<StatusCode, AppError> {
    let to_do_list_id = require_id(to_do_list_id)?;
    state.store_mut()?.delete_list(to_do_list_id)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn add_activity(
    State(state): State<Arc<AppState>>,
    Path(to_do_list_id): Path<u64>,
    Json(body): Json<AddActivityRequest>,
) -> Result<(StatusCode, Json<u64>), AppError> {
    let to_do_list_id = require_id(to_do_list_id)?;
    let detail = normalize_detail(&body.detail)?;
    let id = state.store_mut()?.add_activity(to_do_list_id, detail)?;
    Ok((StatusCode::CREATED, Json(id)))
}

async fn list_activities(
    State(state): State<Arc<AppState>>,
    Path(to_do_list_id): Path<u64>,
) -> Result<Json<Vec<Activity>>, AppError> {
    let to_do_list_id = require_id(to_do_list_id)?;
    let activities = state.store()?.list_activities(to_do_list_id)?.to_vec();
    Ok(Json(activities))
}

async fn get_activity(
    State(state): State<Arc<AppState>>,
    Path((to_do_list_id, activity_id)): Path<(u64, u64)>,
) -> Result<Json<Activity>, AppError> {
    let to_do_list_id = require_id(to_do_list_id)?;
    let activity_id = require_id(activity_id)?;
    let activity = state.store()?.get_activity(to_do_list_id, activity_id)?.clone();
    Ok(Json(activity))
}

async fn update_activity(
    State(state): State<Arc<AppState>>,
    Path((to_do_list_id, activity_id)): Path<(u64, u64)>,
    Json(body): Json<UpdateActivityRequest>,
) -> Result<StatusCode, AppError> {
    let to_do_list_id = require_id(to_do_list_id)?;
    let activity_id = require_id(activity_id)?;
    state
        .store_mut()?
        .update_activity(to_do_list_id, activity_id, body.is_active, &body.detail)?;
    Ok(StatusCode::OK)
}

async fn delete_activity(
    State(state): State<Arc<AppState>>,
    Path((to_do_list_id, activity_id)): Path<(u64, u64)>,
) -> Result<StatusCode, AppError> {
    let to_do_list_id = require_id(to_do_list_id)?;
    let activity_id = require_id(activity_id)?;
    state.store_mut()?.delete_activity(to_do_list_id, activity_id)?;
    Ok(StatusCode::NO_CONTENT)
}

// The extractor already rejects non-numeric and negative ids; zero parses
// fine but no entity can have it.
fn require_id(id: u64) -> Result<u64, AppError> {
    if id == 0 {
        return Err(AppError::bad_request("Ids start at 1"));
    }
    Ok(id)
}

fn normalize_name(name: &str) -> Result<&str, AppError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AppError::bad_request("Name required"));
    }
    Ok(trimmed)
}

fn normalize_detail(detail: &str) -> Result<&str, AppError> {
    let trimmed = detail.trim();
    if trimmed.is_empty() {
        return Err(AppError::bad_request("Detail required"));
    }
    Ok(trimmed)
}
