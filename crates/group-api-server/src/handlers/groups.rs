use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Extension, Path,
    },
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::models::{Group, GroupSummary};
use crate::store::GroupStore;
use crate::utils::error::ApiError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGroupRequest {
    pub group_name: String,
    pub members: Vec<String>,
}

pub async fn list_groups_handler(
    Extension(store): Extension<Arc<GroupStore>>,
) -> Json<Vec<GroupSummary>> {
    Json(store.list_groups())
}

pub async fn create_group_handler(
    Extension(store): Extension<Arc<GroupStore>>,
    payload: Result<Json<CreateGroupRequest>, JsonRejection>,
) -> Result<Json<GroupSummary>, ApiError> {
    // Malformed payloads become an explicit 400 instead of the default
    // axum rejection, so every validation failure shares one error shape.
    let Json(request) = payload.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

    info!(
        "Creating group '{}' with {} members",
        request.group_name,
        request.members.len()
    );

    let summary = store.create_group(request.group_name, request.members);
    Ok(Json(summary))
}

pub async fn get_group_handler(
    Extension(store): Extension<Arc<GroupStore>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Group>, ApiError> {
    let Path(id) = path.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

    store
        .get_group(id)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("group {} does not exist", id)))
}

pub async fn delete_group_handler(
    Extension(store): Extension<Arc<GroupStore>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = path.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

    if store.delete_group(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(format!("group {} does not exist", id)))
    }
}
