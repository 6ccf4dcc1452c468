use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/timetables",
            get(handlers::timetable::list_timetables).post(handlers::timetable::create_entry),
        )
        .route("/api/timetables/flat", get(handlers::timetable::list_flat))
        .route("/api/timetables/stats", get(handlers::timetable::get_stats))
        .route("/api/timetables/today", get(handlers::timetable::get_today))
        .route("/api/timetables/day/:day", get(handlers::timetable::get_by_day))
        .route(
            "/api/timetables/grade/:grade/class/:class",
            get(handlers::timetable::get_by_class),
        )
        .route(
            "/api/timetables/room/:room_number",
            get(handlers::timetable::get_by_room),
        )
        .route(
            "/api/timetables/teacher/:teacher_name",
            get(handlers::timetable::get_by_teacher),
        )
        .route(
            "/api/timetables/:id",
            get(handlers::timetable::get_entry)
                .put(handlers::timetable::update_entry)
                .delete(handlers::timetable::delete_entry),
        )
}
