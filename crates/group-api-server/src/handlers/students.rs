use std::sync::Arc;

use axum::{extract::Extension, Json};

use crate::models::Student;
use crate::store::GroupStore;

pub async fn list_students_handler(
    Extension(store): Extension<Arc<GroupStore>>,
) -> Json<Vec<Student>> {
    Json(store.list_students())
}
