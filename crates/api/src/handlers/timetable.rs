use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use timetable_core::{
    models::{
        entry::{CreateEntryRequest, TimetableEntry, TimetableEntryView, UpdateEntryRequest},
        view::{
            ClassTimetable, DayTimetable, RoomTimetable, TeacherTimetable, TimetableStats,
            TimetableView,
        },
    },
    QueryAxis,
};

use crate::{
    handlers::parse_id,
    middleware::{auth::AuthenticatedAdmin, error_handling::AppError},
    response::ApiResponse,
    ApiState,
};

const ENTRY_NOT_FOUND: &str = "Timetable entry not found";

#[derive(Debug, Default, Deserialize)]
pub struct TimetableListQuery {
    pub view: Option<String>,
    pub day: Option<String>,
    /// Only the literal `true` selects the flat listing.
    pub flat: Option<String>,
}

impl TimetableListQuery {
    /// Unknown views and a day view without a day fall back to the whole week.
    pub fn axis(&self) -> QueryAxis {
        match (self.view.as_deref(), &self.day) {
            (Some("today"), _) => QueryAxis::Today,
            (Some("day"), Some(day)) => QueryAxis::Day(day.clone()),
            _ => QueryAxis::All,
        }
    }

    pub fn is_flat(&self) -> bool {
        self.flat.as_deref() == Some("true")
    }
}

/// Either grouped timetable views or the flat admin listing.
#[derive(Debug, serde::Serialize)]
#[serde(untagged)]
pub enum TimetableListing {
    Grouped(TimetableView),
    Flat(Vec<TimetableEntryView>),
}

fn views(entries: Vec<TimetableEntry>) -> Vec<TimetableEntryView> {
    entries.into_iter().map(TimetableEntry::into_view).collect()
}

#[axum::debug_handler]
pub async fn list_timetables(
    State(state): State<Arc<ApiState>>,
    params: Result<Query<TimetableListQuery>, QueryRejection>,
) -> Result<ApiResponse<TimetableListing>, AppError> {
    let Query(params) = params?;
    let axis = params.axis();

    if params.is_flat() {
        let entries = state.query.list(&axis).await?;
        return Ok(ApiResponse::ok(TimetableListing::Flat(views(entries))));
    }

    let view = state.query.query(axis).await?;
    Ok(ApiResponse::ok(TimetableListing::Grouped(view)))
}

#[axum::debug_handler]
pub async fn list_flat(
    State(state): State<Arc<ApiState>>,
) -> Result<ApiResponse<Vec<TimetableEntryView>>, AppError> {
    let entries = state.query.list_all().await?;
    Ok(ApiResponse::ok(views(entries)))
}

#[axum::debug_handler]
pub async fn get_stats(State(state): State<Arc<ApiState>>) -> Result<ApiResponse<TimetableStats>, AppError> {
    Ok(ApiResponse::ok(state.directory.stats().await?))
}

#[axum::debug_handler]
pub async fn get_today(State(state): State<Arc<ApiState>>) -> Result<ApiResponse<DayTimetable>, AppError> {
    Ok(ApiResponse::ok(state.query.today().await?))
}

#[axum::debug_handler]
pub async fn get_by_day(
    State(state): State<Arc<ApiState>>,
    Path(day): Path<String>,
) -> Result<ApiResponse<DayTimetable>, AppError> {
    Ok(ApiResponse::ok(state.query.by_day(&day).await?))
}

#[axum::debug_handler]
pub async fn get_by_class(
    State(state): State<Arc<ApiState>>,
    Path((grade, class)): Path<(String, String)>,
) -> Result<ApiResponse<ClassTimetable>, AppError> {
    Ok(ApiResponse::ok(state.query.by_class(&grade, &class).await?))
}

#[axum::debug_handler]
pub async fn get_by_room(
    State(state): State<Arc<ApiState>>,
    Path(room_number): Path<String>,
) -> Result<ApiResponse<RoomTimetable>, AppError> {
    Ok(ApiResponse::ok(state.query.by_room(&room_number).await?))
}

#[axum::debug_handler]
pub async fn get_by_teacher(
    State(state): State<Arc<ApiState>>,
    Path(teacher_name): Path<String>,
) -> Result<ApiResponse<TeacherTimetable>, AppError> {
    Ok(ApiResponse::ok(state.query.by_teacher(&teacher_name).await?))
}

#[axum::debug_handler]
pub async fn get_entry(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
) -> Result<ApiResponse<TimetableEntryView>, AppError> {
    let id = parse_id(&id, ENTRY_NOT_FOUND)?;
    let entry = state.admin.get_entry(id).await?;
    Ok(ApiResponse::ok(entry.into_view()))
}

#[axum::debug_handler]
pub async fn create_entry(
    State(state): State<Arc<ApiState>>,
    AuthenticatedAdmin(admin): AuthenticatedAdmin,
    payload: Result<Json<CreateEntryRequest>, JsonRejection>,
) -> Result<ApiResponse<TimetableEntryView>, AppError> {
    let Json(payload) = payload?;
    tracing::debug!("Admin {} creating timetable entry", admin.username);

    let entry = state.admin.create_entry(payload).await?;
    Ok(ApiResponse::created(
        entry.into_view(),
        "Timetable entry created successfully",
    ))
}

#[axum::debug_handler]
pub async fn update_entry(
    State(state): State<Arc<ApiState>>,
    AuthenticatedAdmin(admin): AuthenticatedAdmin,
    Path(id): Path<String>,
    payload: Result<Json<UpdateEntryRequest>, JsonRejection>,
) -> Result<ApiResponse<TimetableEntryView>, AppError> {
    let Json(payload) = payload?;
    let id = parse_id(&id, ENTRY_NOT_FOUND)?;
    tracing::debug!("Admin {} updating timetable entry {}", admin.username, id);

    let entry = state.admin.update_entry(id, payload).await?;
    Ok(ApiResponse::ok(entry.into_view()).with_message("Timetable entry updated successfully"))
}

#[axum::debug_handler]
pub async fn delete_entry(
    State(state): State<Arc<ApiState>>,
    AuthenticatedAdmin(admin): AuthenticatedAdmin,
    Path(id): Path<String>,
) -> Result<ApiResponse<()>, AppError> {
    let id = parse_id(&id, ENTRY_NOT_FOUND)?;
    tracing::debug!("Admin {} deleting timetable entry {}", admin.username, id);

    state.admin.delete_entry(id).await?;
    Ok(ApiResponse::ok(()).with_message("Timetable entry deleted successfully"))
}
