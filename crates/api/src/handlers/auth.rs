use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use std::sync::Arc;
use timetable_core::models::admin::{AdminProfile, LoginRequest, LoginResponse, RegisterRequest};

use crate::{
    middleware::{
        auth::{self, AuthenticatedAdmin},
        error_handling::AppError,
    },
    response::ApiResponse,
    ApiState,
};

#[axum::debug_handler]
pub async fn login(
    State(state): State<Arc<ApiState>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<ApiResponse<LoginResponse>, AppError> {
    let Json(payload) = payload?;
    let response = auth::login(state.admins.as_ref(), payload, state.session_ttl).await?;
    Ok(ApiResponse::ok(response).with_message("Login successful"))
}

#[axum::debug_handler]
pub async fn register(
    State(state): State<Arc<ApiState>>,
    _admin: AuthenticatedAdmin,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<ApiResponse<AdminProfile>, AppError> {
    let Json(payload) = payload?;
    let admin = auth::register(state.admins.as_ref(), payload).await?;
    Ok(ApiResponse::created(admin.profile(), "Admin registered successfully"))
}

#[axum::debug_handler(state = Arc<ApiState>)]
pub async fn me(AuthenticatedAdmin(admin): AuthenticatedAdmin) -> ApiResponse<AdminProfile> {
    ApiResponse::ok(admin.profile())
}
