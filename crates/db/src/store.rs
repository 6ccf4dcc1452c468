//! Postgres-backed implementation of the core store traits.
//!
//! Uniqueness comes from the table constraints; a unique violation raised by
//! an insert or update is translated into the matching domain error.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use timetable_core::{
    errors::{TimetableError, TimetableResult},
    models::{
        admin::{Admin, AdminSession, NewAdmin},
        classroom::{Classroom, ClassroomFilter},
        entry::{NewTimetableEntry, TimetableEntry},
        room::RoomNumber,
        teacher::{NewTeacher, Teacher, TeacherFilter},
    },
    store::{AdminStore, ClassroomStore, EntryFilter, TeacherStore, TimetableStore},
};
use uuid::Uuid;

use crate::{
    repositories::{admin, classroom, is_unique_violation, teacher, timetable},
    DbPool,
};

#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

fn on_unique_violation(report: eyre::Report, conflict: impl FnOnce() -> TimetableError) -> TimetableError {
    if is_unique_violation(&report) {
        conflict()
    } else {
        TimetableError::Database(report)
    }
}

fn room_taken(room_number: RoomNumber) -> TimetableError {
    TimetableError::Conflict(format!("Classroom {} already exists", room_number))
}

#[async_trait]
impl TimetableStore for PgStore {
    async fn insert_entry(&self, entry: NewTimetableEntry) -> TimetableResult<TimetableEntry> {
        let slot = entry.slot_key();
        let row = timetable::create_entry(&self.pool, &entry)
            .await
            .map_err(|e| on_unique_violation(e, || TimetableError::DuplicateSlot(slot)))?;
        row.try_into()
    }

    async fn update_entry(&self, id: Uuid, entry: NewTimetableEntry) -> TimetableResult<TimetableEntry> {
        let slot = entry.slot_key();
        timetable::update_entry(&self.pool, id, &entry)
            .await
            .map_err(|e| on_unique_violation(e, || TimetableError::DuplicateSlot(slot)))?
            .ok_or_else(|| TimetableError::not_found("Timetable entry not found"))?
            .try_into()
    }

    async fn delete_entry(&self, id: Uuid) -> TimetableResult<()> {
        if timetable::delete_entry(&self.pool, id).await? {
            Ok(())
        } else {
            Err(TimetableError::not_found("Timetable entry not found"))
        }
    }

    async fn get_entry(&self, id: Uuid) -> TimetableResult<Option<TimetableEntry>> {
        timetable::get_entry_by_id(&self.pool, id)
            .await?
            .map(TimetableEntry::try_from)
            .transpose()
    }

    async fn find_entries(&self, filter: &EntryFilter) -> TimetableResult<Vec<TimetableEntry>> {
        timetable::find_entries(&self.pool, filter)
            .await?
            .into_iter()
            .map(TimetableEntry::try_from)
            .collect()
    }
}

#[async_trait]
impl TeacherStore for PgStore {
    async fn insert_teacher(&self, new_teacher: NewTeacher) -> TimetableResult<Teacher> {
        Ok(teacher::create_teacher(&self.pool, &new_teacher).await?.into())
    }

    async fn update_teacher(&self, id: Uuid, new_teacher: NewTeacher) -> TimetableResult<Option<Teacher>> {
        Ok(teacher::update_teacher(&self.pool, id, &new_teacher)
            .await?
            .map(Teacher::from))
    }

    async fn set_teacher_active(&self, id: Uuid, active: bool) -> TimetableResult<Option<Teacher>> {
        Ok(teacher::set_teacher_active(&self.pool, id, active)
            .await?
            .map(Teacher::from))
    }

    async fn get_teacher(&self, id: Uuid) -> TimetableResult<Option<Teacher>> {
        Ok(teacher::get_teacher_by_id(&self.pool, id).await?.map(Teacher::from))
    }

    async fn find_teachers(&self, filter: &TeacherFilter) -> TimetableResult<Vec<Teacher>> {
        Ok(teacher::find_teachers(&self.pool, filter)
            .await?
            .into_iter()
            .map(Teacher::from)
            .collect())
    }
}

#[async_trait]
impl ClassroomStore for PgStore {
    async fn insert_classroom(&self, room_number: RoomNumber) -> TimetableResult<Classroom> {
        classroom::create_classroom(&self.pool, room_number)
            .await
            .map_err(|e| on_unique_violation(e, || room_taken(room_number)))?
            .try_into()
    }

    async fn update_classroom(&self, id: Uuid, room_number: RoomNumber) -> TimetableResult<Option<Classroom>> {
        classroom::update_classroom(&self.pool, id, room_number)
            .await
            .map_err(|e| on_unique_violation(e, || room_taken(room_number)))?
            .map(Classroom::try_from)
            .transpose()
    }

    async fn set_classroom_active(&self, id: Uuid, active: bool) -> TimetableResult<Option<Classroom>> {
        classroom::set_classroom_active(&self.pool, id, active)
            .await?
            .map(Classroom::try_from)
            .transpose()
    }

    async fn get_classroom(&self, id: Uuid) -> TimetableResult<Option<Classroom>> {
        classroom::get_classroom_by_id(&self.pool, id)
            .await?
            .map(Classroom::try_from)
            .transpose()
    }

    async fn find_classrooms(&self, filter: &ClassroomFilter) -> TimetableResult<Vec<Classroom>> {
        classroom::find_classrooms(&self.pool, filter)
            .await?
            .into_iter()
            .map(Classroom::try_from)
            .collect()
    }
}

#[async_trait]
impl AdminStore for PgStore {
    async fn insert_admin(&self, new_admin: NewAdmin) -> TimetableResult<Admin> {
        let username = new_admin.username.clone();
        let row = admin::create_admin(&self.pool, &new_admin)
            .await
            .map_err(|e| {
                on_unique_violation(e, || {
                    TimetableError::Conflict(format!("Username {} is already taken", username))
                })
            })?;
        Ok(row.into())
    }

    async fn find_admin_by_username(&self, username: &str) -> TimetableResult<Option<Admin>> {
        Ok(admin::get_admin_by_username(&self.pool, username)
            .await?
            .map(Admin::from))
    }

    async fn get_admin(&self, id: Uuid) -> TimetableResult<Option<Admin>> {
        Ok(admin::get_admin_by_id(&self.pool, id).await?.map(Admin::from))
    }

    async fn record_login(&self, id: Uuid, at: DateTime<Utc>) -> TimetableResult<()> {
        admin::update_last_login(&self.pool, id, at).await?;
        Ok(())
    }

    async fn insert_session(&self, session: AdminSession) -> TimetableResult<()> {
        admin::create_session(&self.pool, &session).await?;
        Ok(())
    }

    async fn find_session(&self, token: &str) -> TimetableResult<Option<AdminSession>> {
        Ok(admin::get_session(&self.pool, token)
            .await?
            .map(AdminSession::from))
    }
}
