use axum::extract::Path;
use timetable_core::models::catalog::{self, GradeInfo, SUBJECTS};

use crate::{middleware::error_handling::AppError, response::ApiResponse};

pub async fn list_grades() -> ApiResponse<Vec<GradeInfo>> {
    ApiResponse::ok(catalog::grades())
}

pub async fn get_grade(Path(id): Path<String>) -> Result<ApiResponse<GradeInfo>, AppError> {
    Ok(ApiResponse::ok(catalog::grade(&id)?))
}

pub async fn list_subjects() -> ApiResponse<Vec<&'static str>> {
    ApiResponse::ok(SUBJECTS.to_vec())
}

pub async fn list_subjects_by_category(Path(category): Path<String>) -> ApiResponse<Vec<&'static str>> {
    ApiResponse::ok(catalog::subjects_in_category(&category))
}
