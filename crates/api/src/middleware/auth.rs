//! # Authentication Module
//!
//! Admin accounts log in with a username and password and receive an opaque
//! bearer token. Every mutation route extracts [`AuthenticatedAdmin`], which
//! resolves the token to an active admin or rejects the request.
//!
//! Passwords are hashed with Argon2 and stored in PHC string format.

use std::sync::Arc;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, SaltString},
    Argon2, PasswordHasher, PasswordVerifier,
};
use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use chrono::Utc;
use eyre::Result;
use rand::{distributions::Alphanumeric, Rng};
use timetable_core::{
    errors::{TimetableError, TimetableResult},
    models::admin::{
        Admin, AdminSession, LoginRequest, LoginResponse, NewAdmin, RegisterRequest, DEFAULT_ADMIN_ROLE,
    },
    store::AdminStore,
};
use tracing::{info, warn};

use crate::{middleware::error_handling::AppError, ApiState};

const TOKEN_LENGTH: usize = 48;
const MIN_USERNAME_LENGTH: usize = 3;
const MIN_PASSWORD_LENGTH: usize = 6;

/// Hashes a password using Argon2 with a fresh random salt.
///
/// # Example
///
/// ```rust
/// use timetable_api::middleware::auth::{hash_password, verify_password};
///
/// let hashed = hash_password("correct horse").unwrap();
/// assert!(verify_password("correct horse", &hashed));
/// ```
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| eyre::eyre!("Error hashing password: {}", e))?
        .to_string();

    Ok(password_hash)
}

/// Checks a password against a stored PHC hash. A malformed hash never verifies.
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    match PasswordHash::new(password_hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

fn generate_token() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(TOKEN_LENGTH)
        .map(char::from)
        .collect()
}

fn invalid_credentials() -> TimetableError {
    TimetableError::Authentication("Invalid credentials".to_string())
}

/// Verifies credentials, records the login and issues a session token.
pub async fn login(
    admins: &dyn AdminStore,
    request: LoginRequest,
    ttl: chrono::Duration,
) -> TimetableResult<LoginResponse> {
    let (Some(username), Some(password)) = (request.username, request.password) else {
        return Err(TimetableError::validation("Username and password are required"));
    };
    let username = username.trim();

    let admin = match admins.find_admin_by_username(username).await? {
        Some(admin) if admin.is_active => admin,
        _ => {
            warn!("Login rejected for unknown or inactive admin {}", username);
            return Err(invalid_credentials());
        }
    };
    if !verify_password(&password, &admin.password_hash) {
        warn!("Login rejected for admin {}: wrong password", username);
        return Err(invalid_credentials());
    }

    let now = Utc::now();
    admins.record_login(admin.id, now).await?;

    let session = AdminSession {
        token: generate_token(),
        admin_id: admin.id,
        expires_at: now + ttl,
    };
    admins.insert_session(session.clone()).await?;
    info!("Admin {} logged in", admin.username);

    Ok(LoginResponse {
        token: session.token,
        expires_at: session.expires_at,
        admin: admin.profile(),
    })
}

/// Creates another admin account.
pub async fn register(admins: &dyn AdminStore, request: RegisterRequest) -> TimetableResult<Admin> {
    let username = request.username.as_deref().map(str::trim).unwrap_or_default();
    let password = request.password.as_deref().unwrap_or_default();

    if username.is_empty() || password.is_empty() {
        return Err(TimetableError::validation("Username and password are required"));
    }
    if username.chars().count() < MIN_USERNAME_LENGTH {
        return Err(TimetableError::validation(format!(
            "Username must be at least {} characters",
            MIN_USERNAME_LENGTH
        )));
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(TimetableError::validation(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        )));
    }

    let admin = admins
        .insert_admin(NewAdmin {
            username: username.to_string(),
            password_hash: hash_password(password)?,
            role: request
                .role
                .filter(|role| !role.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_ADMIN_ROLE.to_string()),
        })
        .await?;
    info!("Registered admin {}", admin.username);
    Ok(admin)
}

/// Resolves a bearer token to the admin it was issued to.
pub async fn authenticate(admins: &dyn AdminStore, token: &str) -> TimetableResult<Admin> {
    let session = admins
        .find_session(token)
        .await?
        .filter(|session| !session.is_expired(Utc::now()))
        .ok_or_else(|| TimetableError::Authentication("Invalid or expired token".to_string()))?;

    let admin = admins
        .get_admin(session.admin_id)
        .await?
        .filter(|admin| admin.is_active)
        .ok_or_else(|| TimetableError::Authentication("Invalid token".to_string()))?;

    if admin.role != DEFAULT_ADMIN_ROLE {
        return Err(TimetableError::Authorization(
            "Admin privileges required".to_string(),
        ));
    }
    Ok(admin)
}

/// Extractor guarding admin-only handlers.
#[derive(Debug, Clone)]
pub struct AuthenticatedAdmin(pub Admin);

#[async_trait]
impl FromRequestParts<Arc<ApiState>> for AuthenticatedAdmin {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &Arc<ApiState>) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                TimetableError::Authentication("Access denied. No token provided.".to_string())
            })?;

        let admin = authenticate(state.admins.as_ref(), token).await?;
        Ok(AuthenticatedAdmin(admin))
    }
}
