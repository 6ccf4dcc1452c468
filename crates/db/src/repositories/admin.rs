use crate::models::{DbAdmin, DbAdminSession};
use chrono::{DateTime, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};
use timetable_core::models::admin::{AdminSession, NewAdmin};
use uuid::Uuid;

pub async fn create_admin(pool: &Pool<Postgres>, admin: &NewAdmin) -> Result<DbAdmin> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!("Creating admin: id={}, username={}", id, admin.username);

    let row = sqlx::query_as::<_, DbAdmin>(
        r#"
        INSERT INTO admins (id, username, password_hash, role, is_active, created_at)
        VALUES ($1, $2, $3, $4, TRUE, $5)
        RETURNING id, username, password_hash, role, is_active, last_login, created_at
        "#,
    )
    .bind(id)
    .bind(&admin.username)
    .bind(&admin.password_hash)
    .bind(&admin.role)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

pub async fn get_admin_by_username(pool: &Pool<Postgres>, username: &str) -> Result<Option<DbAdmin>> {
    let row = sqlx::query_as::<_, DbAdmin>(
        r#"
        SELECT id, username, password_hash, role, is_active, last_login, created_at
        FROM admins
        WHERE username = $1
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

pub async fn get_admin_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbAdmin>> {
    let row = sqlx::query_as::<_, DbAdmin>(
        r#"
        SELECT id, username, password_hash, role, is_active, last_login, created_at
        FROM admins
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

pub async fn update_last_login(pool: &Pool<Postgres>, id: Uuid, at: DateTime<Utc>) -> Result<()> {
    sqlx::query(
        r#"
        UPDATE admins
        SET last_login = $2
        WHERE id = $1
        "#,
    )
    .bind(id)
    .bind(at)
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn create_session(pool: &Pool<Postgres>, session: &AdminSession) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO admin_sessions (token, admin_id, expires_at, created_at)
        VALUES ($1, $2, $3, $4)
        "#,
    )
    .bind(&session.token)
    .bind(session.admin_id)
    .bind(session.expires_at)
    .bind(Utc::now())
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn get_session(pool: &Pool<Postgres>, token: &str) -> Result<Option<DbAdminSession>> {
    let row = sqlx::query_as::<_, DbAdminSession>(
        r#"
        SELECT token, admin_id, expires_at
        FROM admin_sessions
        WHERE token = $1
        "#,
    )
    .bind(token)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}
