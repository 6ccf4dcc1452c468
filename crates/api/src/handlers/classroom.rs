use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use std::sync::Arc;
use timetable_core::models::classroom::{Classroom, ClassroomRequest, ClassroomView};

use crate::{
    handlers::parse_id,
    middleware::{auth::AuthenticatedAdmin, error_handling::AppError},
    response::ApiResponse,
    ApiState,
};

const CLASSROOM_NOT_FOUND: &str = "Classroom not found";

fn views(classrooms: Vec<Classroom>) -> Vec<ClassroomView> {
    classrooms.into_iter().map(Classroom::into_view).collect()
}

#[axum::debug_handler]
pub async fn list_classrooms(
    State(state): State<Arc<ApiState>>,
) -> Result<ApiResponse<Vec<ClassroomView>>, AppError> {
    Ok(ApiResponse::ok(views(state.directory.list_classrooms().await?)))
}

#[axum::debug_handler]
pub async fn get_classroom(
    State(state): State<Arc<ApiState>>,
    Path(room_number): Path<String>,
) -> Result<ApiResponse<ClassroomView>, AppError> {
    let classroom = state.directory.get_classroom(&room_number).await?;
    Ok(ApiResponse::ok(classroom.into_view()))
}

#[axum::debug_handler]
pub async fn list_by_floor(
    State(state): State<Arc<ApiState>>,
    Path(floor): Path<String>,
) -> Result<ApiResponse<Vec<ClassroomView>>, AppError> {
    Ok(ApiResponse::ok(views(state.directory.classrooms_by_floor(&floor).await?)))
}

#[axum::debug_handler]
pub async fn create_classroom(
    State(state): State<Arc<ApiState>>,
    _admin: AuthenticatedAdmin,
    payload: Result<Json<ClassroomRequest>, JsonRejection>,
) -> Result<ApiResponse<ClassroomView>, AppError> {
    let Json(payload) = payload?;
    let classroom = state.admin.create_classroom(payload).await?;
    Ok(ApiResponse::created(
        classroom.into_view(),
        "Classroom created successfully",
    ))
}

#[axum::debug_handler]
pub async fn update_classroom(
    State(state): State<Arc<ApiState>>,
    _admin: AuthenticatedAdmin,
    Path(id): Path<String>,
    payload: Result<Json<ClassroomRequest>, JsonRejection>,
) -> Result<ApiResponse<ClassroomView>, AppError> {
    let Json(payload) = payload?;
    let id = parse_id(&id, CLASSROOM_NOT_FOUND)?;
    let classroom = state.admin.update_classroom(id, payload).await?;
    Ok(ApiResponse::ok(classroom.into_view()).with_message("Classroom updated successfully"))
}

#[axum::debug_handler]
pub async fn delete_classroom(
    State(state): State<Arc<ApiState>>,
    _admin: AuthenticatedAdmin,
    Path(id): Path<String>,
) -> Result<ApiResponse<ClassroomView>, AppError> {
    let id = parse_id(&id, CLASSROOM_NOT_FOUND)?;
    let classroom = state.admin.deactivate_classroom(id).await?;
    Ok(ApiResponse::ok(classroom.into_view()).with_message("Classroom deleted successfully"))
}
