use crate::{models::DbTimetableEntry, repositories::like_pattern};
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use timetable_core::{models::entry::NewTimetableEntry, store::EntryFilter};
use uuid::Uuid;

const COLUMNS: &str = "id, day, period, room_number, teacher_name, teacher_subject, grade, \
                       class_label, is_break, break_type, created_at, updated_at";

pub async fn create_entry(pool: &Pool<Postgres>, entry: &NewTimetableEntry) -> Result<DbTimetableEntry> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating timetable entry: id={}, day={}, period={}, class={}",
        id,
        entry.day,
        entry.period,
        entry.slot_key().full_class_name()
    );

    let row = sqlx::query_as::<_, DbTimetableEntry>(&format!(
        r#"
        INSERT INTO timetable_entries
            (id, day, period, room_number, teacher_name, teacher_subject, grade,
             class_label, is_break, break_type, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $11)
        RETURNING {COLUMNS}
        "#
    ))
    .bind(id)
    .bind(entry.day.as_str())
    .bind(i16::from(entry.period.value()))
    .bind(entry.room_number.to_string())
    .bind(&entry.teacher_name)
    .bind(&entry.teacher_subject)
    .bind(i16::from(entry.grade.value()))
    .bind(entry.class.as_str())
    .bind(entry.is_break)
    .bind(entry.break_type.map(|kind| kind.as_str()))
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

/// Returns `None` when no entry has this id.
pub async fn update_entry(
    pool: &Pool<Postgres>,
    id: Uuid,
    entry: &NewTimetableEntry,
) -> Result<Option<DbTimetableEntry>> {
    let row = sqlx::query_as::<_, DbTimetableEntry>(&format!(
        r#"
        UPDATE timetable_entries
        SET day = $2, period = $3, room_number = $4, teacher_name = $5, teacher_subject = $6,
            grade = $7, class_label = $8, is_break = $9, break_type = $10, updated_at = $11
        WHERE id = $1
        RETURNING {COLUMNS}
        "#
    ))
    .bind(id)
    .bind(entry.day.as_str())
    .bind(i16::from(entry.period.value()))
    .bind(entry.room_number.to_string())
    .bind(&entry.teacher_name)
    .bind(&entry.teacher_subject)
    .bind(i16::from(entry.grade.value()))
    .bind(entry.class.as_str())
    .bind(entry.is_break)
    .bind(entry.break_type.map(|kind| kind.as_str()))
    .bind(Utc::now())
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

/// Returns whether a row was removed.
pub async fn delete_entry(pool: &Pool<Postgres>, id: Uuid) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM timetable_entries
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn get_entry_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbTimetableEntry>> {
    let row = sqlx::query_as::<_, DbTimetableEntry>(&format!(
        r#"
        SELECT {COLUMNS}
        FROM timetable_entries
        WHERE id = $1
        "#
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

pub async fn find_entries(pool: &Pool<Postgres>, filter: &EntryFilter) -> Result<Vec<DbTimetableEntry>> {
    tracing::debug!("Finding timetable entries: {:?}", filter);

    let rows = sqlx::query_as::<_, DbTimetableEntry>(&format!(
        r#"
        SELECT {COLUMNS}
        FROM timetable_entries
        WHERE ($1::varchar IS NULL OR day = $1)
          AND ($2::smallint IS NULL OR grade = $2)
          AND ($3::varchar IS NULL OR class_label = $3)
          AND ($4::varchar IS NULL OR room_number = $4)
          AND ($5::varchar IS NULL OR teacher_name ILIKE $5 ESCAPE '\')
        "#
    ))
    .bind(filter.day.map(|day| day.as_str()))
    .bind(filter.grade.map(|grade| i16::from(grade.value())))
    .bind(filter.class.map(|class| class.as_str()))
    .bind(filter.room_number.map(|room| room.to_string()))
    .bind(filter.teacher_name.as_deref().map(like_pattern))
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
