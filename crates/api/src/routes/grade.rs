use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/grades", get(handlers::grade::list_grades))
        .route("/api/grades/subjects/list", get(handlers::grade::list_subjects))
        .route(
            "/api/grades/subjects/category/:category",
            get(handlers::grade::list_subjects_by_category),
        )
        .route("/api/grades/:id", get(handlers::grade::get_grade))
}
