use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/classrooms",
            get(handlers::classroom::list_classrooms).post(handlers::classroom::create_classroom),
        )
        .route(
            "/api/classrooms/floor/:floor",
            get(handlers::classroom::list_by_floor),
        )
        // GET takes a room number; PUT and DELETE take the classroom id.
        .route(
            "/api/classrooms/:key",
            get(handlers::classroom::get_classroom)
                .put(handlers::classroom::update_classroom)
                .delete(handlers::classroom::delete_classroom),
        )
}
