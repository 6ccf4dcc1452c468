use crate::models::DbClassroom;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use timetable_core::models::{classroom::ClassroomFilter, room::RoomNumber};
use uuid::Uuid;

pub async fn create_classroom(pool: &Pool<Postgres>, room_number: RoomNumber) -> Result<DbClassroom> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let row = sqlx::query_as::<_, DbClassroom>(
        r#"
        INSERT INTO classrooms (id, room_number, is_active, created_at, updated_at)
        VALUES ($1, $2, TRUE, $3, $3)
        RETURNING id, room_number, is_active, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(room_number.to_string())
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

pub async fn update_classroom(
    pool: &Pool<Postgres>,
    id: Uuid,
    room_number: RoomNumber,
) -> Result<Option<DbClassroom>> {
    let row = sqlx::query_as::<_, DbClassroom>(
        r#"
        UPDATE classrooms
        SET room_number = $2, updated_at = $3
        WHERE id = $1
        RETURNING id, room_number, is_active, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(room_number.to_string())
    .bind(Utc::now())
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

pub async fn set_classroom_active(pool: &Pool<Postgres>, id: Uuid, active: bool) -> Result<Option<DbClassroom>> {
    let row = sqlx::query_as::<_, DbClassroom>(
        r#"
        UPDATE classrooms
        SET is_active = $2, updated_at = $3
        WHERE id = $1
        RETURNING id, room_number, is_active, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(active)
    .bind(Utc::now())
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

pub async fn get_classroom_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbClassroom>> {
    let row = sqlx::query_as::<_, DbClassroom>(
        r#"
        SELECT id, room_number, is_active, created_at, updated_at
        FROM classrooms
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

pub async fn find_classrooms(pool: &Pool<Postgres>, filter: &ClassroomFilter) -> Result<Vec<DbClassroom>> {
    // Room numbers are stored canonical, so the floor is the hundreds digit.
    let rows = sqlx::query_as::<_, DbClassroom>(
        r#"
        SELECT id, room_number, is_active, created_at, updated_at
        FROM classrooms
        WHERE ($1 = FALSE OR is_active)
          AND ($2::varchar IS NULL OR room_number = $2)
          AND ($3::smallint IS NULL OR LEFT(room_number, 1) = CAST($3 AS VARCHAR))
        ORDER BY room_number ASC
        "#,
    )
    .bind(filter.active_only)
    .bind(filter.room_number.map(|room| room.to_string()))
    .bind(filter.floor.map(i16::from))
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
