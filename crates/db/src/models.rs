//! Row types and their conversion into domain types.
//!
//! Rows are re-validated on the way out. The table constraints should make a
//! failure impossible, but a row edited by hand surfaces as an error instead
//! of a silently wrong timetable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use timetable_core::{
    errors::TimetableError,
    models::{
        admin::{Admin, AdminSession},
        calendar::Period,
        class_group::Grade,
        classroom::Classroom,
        entry::TimetableEntry,
        teacher::Teacher,
    },
};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbTimetableEntry {
    pub id: Uuid,
    pub day: String,
    pub period: i16,
    pub room_number: String,
    pub teacher_name: String,
    pub teacher_subject: String,
    pub grade: i16,
    pub class_label: String,
    pub is_break: bool,
    pub break_type: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<DbTimetableEntry> for TimetableEntry {
    type Error = TimetableError;

    fn try_from(row: DbTimetableEntry) -> Result<Self, Self::Error> {
        Ok(TimetableEntry {
            id: row.id,
            day: row.day.parse()?,
            period: Period::new(i64::from(row.period))?,
            room_number: row.room_number.parse()?,
            teacher_name: row.teacher_name,
            teacher_subject: row.teacher_subject,
            grade: Grade::new(i64::from(row.grade))?,
            class: row.class_label.parse()?,
            is_break: row.is_break,
            break_type: row.break_type.as_deref().map(str::parse).transpose()?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbTeacher {
    pub id: Uuid,
    pub name: String,
    pub subject: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<DbTeacher> for Teacher {
    fn from(row: DbTeacher) -> Self {
        Teacher {
            id: row.id,
            name: row.name,
            subject: row.subject,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbClassroom {
    pub id: Uuid,
    pub room_number: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<DbClassroom> for Classroom {
    type Error = TimetableError;

    fn try_from(row: DbClassroom) -> Result<Self, Self::Error> {
        Ok(Classroom {
            id: row.id,
            room_number: row.room_number.parse()?,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct DbAdmin {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
    pub role: String,
    pub is_active: bool,
    pub last_login: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<DbAdmin> for Admin {
    fn from(row: DbAdmin) -> Self {
        Admin {
            id: row.id,
            username: row.username,
            password_hash: row.password_hash,
            role: row.role,
            is_active: row.is_active,
            last_login: row.last_login,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct DbAdminSession {
    pub token: String,
    pub admin_id: Uuid,
    pub expires_at: DateTime<Utc>,
}

impl From<DbAdminSession> for AdminSession {
    fn from(row: DbAdminSession) -> Self {
        AdminSession {
            token: row.token,
            admin_id: row.admin_id,
            expires_at: row.expires_at,
        }
    }
}
