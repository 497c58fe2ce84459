use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, Json};
use serde::Serialize;

use crate::store::GroupStore;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    version: String,
    groups: usize,
    students: usize,
}

pub async fn health_check(
    Extension(store): Extension<Arc<GroupStore>>,
) -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            groups: store.group_count(),
            students: store.student_count(),
        }),
    )
}

pub async fn readiness_check() -> StatusCode {
    // Nothing external to wait for; the store is ready as soon as it exists.
    StatusCode::OK
}
