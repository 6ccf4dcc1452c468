use crate::{models::DbTeacher, repositories::like_pattern};
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use timetable_core::models::teacher::{NewTeacher, TeacherFilter};
use uuid::Uuid;

pub async fn create_teacher(pool: &Pool<Postgres>, teacher: &NewTeacher) -> Result<DbTeacher> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let row = sqlx::query_as::<_, DbTeacher>(
        r#"
        INSERT INTO teachers (id, name, subject, is_active, created_at, updated_at)
        VALUES ($1, $2, $3, TRUE, $4, $4)
        RETURNING id, name, subject, is_active, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(&teacher.name)
    .bind(&teacher.subject)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

pub async fn update_teacher(pool: &Pool<Postgres>, id: Uuid, teacher: &NewTeacher) -> Result<Option<DbTeacher>> {
    let row = sqlx::query_as::<_, DbTeacher>(
        r#"
        UPDATE teachers
        SET name = $2, subject = $3, updated_at = $4
        WHERE id = $1
        RETURNING id, name, subject, is_active, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(&teacher.name)
    .bind(&teacher.subject)
    .bind(Utc::now())
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

pub async fn set_teacher_active(pool: &Pool<Postgres>, id: Uuid, active: bool) -> Result<Option<DbTeacher>> {
    let row = sqlx::query_as::<_, DbTeacher>(
        r#"
        UPDATE teachers
        SET is_active = $2, updated_at = $3
        WHERE id = $1
        RETURNING id, name, subject, is_active, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(active)
    .bind(Utc::now())
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

pub async fn get_teacher_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbTeacher>> {
    let row = sqlx::query_as::<_, DbTeacher>(
        r#"
        SELECT id, name, subject, is_active, created_at, updated_at
        FROM teachers
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

pub async fn find_teachers(pool: &Pool<Postgres>, filter: &TeacherFilter) -> Result<Vec<DbTeacher>> {
    let rows = sqlx::query_as::<_, DbTeacher>(
        r#"
        SELECT id, name, subject, is_active, created_at, updated_at
        FROM teachers
        WHERE ($1 = FALSE OR is_active)
          AND ($2::varchar IS NULL OR subject ILIKE $2 ESCAPE '\')
        ORDER BY name ASC
        "#,
    )
    .bind(filter.active_only)
    .bind(filter.subject.as_deref().map(like_pattern))
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
