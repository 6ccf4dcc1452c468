use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use std::sync::Arc;
use timetable_core::models::teacher::{Teacher, TeacherRequest};

use crate::{
    handlers::parse_id,
    middleware::{auth::AuthenticatedAdmin, error_handling::AppError},
    response::ApiResponse,
    ApiState,
};

const TEACHER_NOT_FOUND: &str = "Teacher not found";

#[axum::debug_handler]
pub async fn list_teachers(State(state): State<Arc<ApiState>>) -> Result<ApiResponse<Vec<Teacher>>, AppError> {
    Ok(ApiResponse::ok(state.directory.list_teachers().await?))
}

#[axum::debug_handler]
pub async fn get_teacher(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
) -> Result<ApiResponse<Teacher>, AppError> {
    let id = parse_id(&id, TEACHER_NOT_FOUND)?;
    Ok(ApiResponse::ok(state.directory.get_teacher(id).await?))
}

#[axum::debug_handler]
pub async fn list_by_subject(
    State(state): State<Arc<ApiState>>,
    Path(subject): Path<String>,
) -> Result<ApiResponse<Vec<Teacher>>, AppError> {
    Ok(ApiResponse::ok(state.directory.teachers_by_subject(&subject).await?))
}

#[axum::debug_handler]
pub async fn create_teacher(
    State(state): State<Arc<ApiState>>,
    _admin: AuthenticatedAdmin,
    payload: Result<Json<TeacherRequest>, JsonRejection>,
) -> Result<ApiResponse<Teacher>, AppError> {
    let Json(payload) = payload?;
    let teacher = state.admin.create_teacher(payload).await?;
    Ok(ApiResponse::created(teacher, "Teacher created successfully"))
}

#[axum::debug_handler]
pub async fn update_teacher(
    State(state): State<Arc<ApiState>>,
    _admin: AuthenticatedAdmin,
    Path(id): Path<String>,
    payload: Result<Json<TeacherRequest>, JsonRejection>,
) -> Result<ApiResponse<Teacher>, AppError> {
    let Json(payload) = payload?;
    let id = parse_id(&id, TEACHER_NOT_FOUND)?;
    let teacher = state.admin.update_teacher(id, payload).await?;
    Ok(ApiResponse::ok(teacher).with_message("Teacher updated successfully"))
}

#[axum::debug_handler]
pub async fn delete_teacher(
    State(state): State<Arc<ApiState>>,
    _admin: AuthenticatedAdmin,
    Path(id): Path<String>,
) -> Result<ApiResponse<Teacher>, AppError> {
    let id = parse_id(&id, TEACHER_NOT_FOUND)?;
    let teacher = state.admin.deactivate_teacher(id).await?;
    Ok(ApiResponse::ok(teacher).with_message("Teacher deleted successfully"))
}
