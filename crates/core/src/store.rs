//! Persistence seams.
//!
//! Every store enforces its own uniqueness rules atomically: two concurrent
//! writers aiming at the same slot (or room number, or username) must not both
//! succeed. Callers never pre-check.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    errors::TimetableResult,
    models::{
        admin::{Admin, AdminSession, NewAdmin},
        calendar::Day,
        class_group::{ClassLabel, Grade},
        classroom::{Classroom, ClassroomFilter},
        entry::{NewTimetableEntry, TimetableEntry},
        room::RoomNumber,
        teacher::{contains_ignore_case, NewTeacher, Teacher, TeacherFilter},
    },
};

/// Conjunction of optional constraints on timetable entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryFilter {
    pub day: Option<Day>,
    pub grade: Option<Grade>,
    pub class: Option<ClassLabel>,
    pub room_number: Option<RoomNumber>,
    /// Case-insensitive substring of the teacher name.
    pub teacher_name: Option<String>,
}

impl EntryFilter {
    pub fn matches(&self, entry: &TimetableEntry) -> bool {
        self.day.is_none_or(|day| day == entry.day)
            && self.grade.is_none_or(|grade| grade == entry.grade)
            && self.class.is_none_or(|class| class == entry.class)
            && self.room_number.is_none_or(|room| room == entry.room_number)
            && self
                .teacher_name
                .as_deref()
                .is_none_or(|needle| contains_ignore_case(&entry.teacher_name, needle))
    }
}

#[async_trait]
pub trait TimetableStore: Send + Sync {
    /// Fails with `DuplicateSlot` when the slot is taken.
    async fn insert_entry(&self, entry: NewTimetableEntry) -> TimetableResult<TimetableEntry>;

    /// Replaces the stored fields of `id`. Fails with `NotFound` or `DuplicateSlot`.
    async fn update_entry(&self, id: Uuid, entry: NewTimetableEntry) -> TimetableResult<TimetableEntry>;

    /// Hard delete. Fails with `NotFound`.
    async fn delete_entry(&self, id: Uuid) -> TimetableResult<()>;

    async fn get_entry(&self, id: Uuid) -> TimetableResult<Option<TimetableEntry>>;

    /// Unordered; callers sort.
    async fn find_entries(&self, filter: &EntryFilter) -> TimetableResult<Vec<TimetableEntry>>;
}

#[async_trait]
pub trait TeacherStore: Send + Sync {
    async fn insert_teacher(&self, teacher: NewTeacher) -> TimetableResult<Teacher>;

    /// Returns `None` when `id` does not exist.
    async fn update_teacher(&self, id: Uuid, teacher: NewTeacher) -> TimetableResult<Option<Teacher>>;

    async fn set_teacher_active(&self, id: Uuid, active: bool) -> TimetableResult<Option<Teacher>>;

    async fn get_teacher(&self, id: Uuid) -> TimetableResult<Option<Teacher>>;

    async fn find_teachers(&self, filter: &TeacherFilter) -> TimetableResult<Vec<Teacher>>;
}

#[async_trait]
pub trait ClassroomStore: Send + Sync {
    /// Fails with `Conflict` when the room number exists, active or not.
    async fn insert_classroom(&self, room_number: RoomNumber) -> TimetableResult<Classroom>;

    async fn update_classroom(&self, id: Uuid, room_number: RoomNumber) -> TimetableResult<Option<Classroom>>;

    async fn set_classroom_active(&self, id: Uuid, active: bool) -> TimetableResult<Option<Classroom>>;

    async fn get_classroom(&self, id: Uuid) -> TimetableResult<Option<Classroom>>;

    async fn find_classrooms(&self, filter: &ClassroomFilter) -> TimetableResult<Vec<Classroom>>;
}

#[async_trait]
pub trait AdminStore: Send + Sync {
    /// Fails with `Conflict` when the username is taken.
    async fn insert_admin(&self, admin: NewAdmin) -> TimetableResult<Admin>;

    async fn find_admin_by_username(&self, username: &str) -> TimetableResult<Option<Admin>>;

    async fn get_admin(&self, id: Uuid) -> TimetableResult<Option<Admin>>;

    async fn record_login(&self, id: Uuid, at: DateTime<Utc>) -> TimetableResult<()>;

    async fn insert_session(&self, session: AdminSession) -> TimetableResult<()>;

    async fn find_session(&self, token: &str) -> TimetableResult<Option<AdminSession>>;
}
