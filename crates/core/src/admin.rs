//! # Admin Mutation Service
//!
//! Create, update and delete operations on timetable entries, teachers and
//! classrooms. Input is validated here; slot and room-number uniqueness is
//! left to the stores, which report `DuplicateSlot` / `Conflict` so the
//! caller can tell the user which rule failed.
//!
//! Entries refer to teachers and rooms by value. Renaming or deactivating a
//! teacher or classroom does not touch existing entries.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::{
    errors::{TimetableError, TimetableResult},
    models::{
        classroom::{Classroom, ClassroomRequest},
        entry::{CreateEntryRequest, TimetableEntry, UpdateEntryRequest},
        room::RoomNumber,
        teacher::{NewTeacher, Teacher, TeacherRequest},
    },
    store::{ClassroomStore, TeacherStore, TimetableStore},
    validation::{required_text, validate_entry},
};

#[derive(Clone)]
pub struct AdminService {
    entries: Arc<dyn TimetableStore>,
    teachers: Arc<dyn TeacherStore>,
    classrooms: Arc<dyn ClassroomStore>,
}

impl AdminService {
    pub fn new(
        entries: Arc<dyn TimetableStore>,
        teachers: Arc<dyn TeacherStore>,
        classrooms: Arc<dyn ClassroomStore>,
    ) -> Self {
        Self {
            entries,
            teachers,
            classrooms,
        }
    }

    pub async fn get_entry(&self, id: Uuid) -> TimetableResult<TimetableEntry> {
        self.entries
            .get_entry(id)
            .await?
            .ok_or_else(entry_not_found)
    }

    pub async fn create_entry(&self, request: CreateEntryRequest) -> TimetableResult<TimetableEntry> {
        let entry = validate_entry(request)?;
        let created = self.entries.insert_entry(entry).await?;
        info!(
            "Created timetable entry {} for {} period {}, {}",
            created.id,
            created.day,
            created.period,
            created.full_class_name()
        );
        Ok(created)
    }

    pub async fn update_entry(&self, id: Uuid, patch: UpdateEntryRequest) -> TimetableResult<TimetableEntry> {
        let current = self.get_entry(id).await?;
        let entry = validate_entry(patch.merge_onto(&current))?;
        let updated = self.entries.update_entry(id, entry).await?;
        info!("Updated timetable entry {}", id);
        Ok(updated)
    }

    pub async fn delete_entry(&self, id: Uuid) -> TimetableResult<()> {
        self.entries.delete_entry(id).await?;
        info!("Deleted timetable entry {}", id);
        Ok(())
    }

    pub async fn create_teacher(&self, request: TeacherRequest) -> TimetableResult<Teacher> {
        let teacher = validate_teacher(request)?;
        let created = self.teachers.insert_teacher(teacher).await?;
        info!("Created teacher {} ({})", created.name, created.id);
        Ok(created)
    }

    pub async fn update_teacher(&self, id: Uuid, request: TeacherRequest) -> TimetableResult<Teacher> {
        let teacher = validate_teacher(request)?;
        self.teachers
            .update_teacher(id, teacher)
            .await?
            .ok_or_else(|| TimetableError::not_found("Teacher not found"))
    }

    /// Soft delete: the teacher stays in storage with `is_active = false`.
    pub async fn deactivate_teacher(&self, id: Uuid) -> TimetableResult<Teacher> {
        let teacher = self
            .teachers
            .set_teacher_active(id, false)
            .await?
            .ok_or_else(|| TimetableError::not_found("Teacher not found"))?;
        info!("Deactivated teacher {}", id);
        Ok(teacher)
    }

    pub async fn create_classroom(&self, request: ClassroomRequest) -> TimetableResult<Classroom> {
        let room = validate_classroom(request)?;
        let created = self.classrooms.insert_classroom(room).await?;
        info!("Created classroom {}", created.room_number);
        Ok(created)
    }

    pub async fn update_classroom(&self, id: Uuid, request: ClassroomRequest) -> TimetableResult<Classroom> {
        let room = validate_classroom(request)?;
        self.classrooms
            .update_classroom(id, room)
            .await?
            .ok_or_else(|| TimetableError::not_found("Classroom not found"))
    }

    /// Soft delete. Entries scheduled in the room are left untouched.
    pub async fn deactivate_classroom(&self, id: Uuid) -> TimetableResult<Classroom> {
        let classroom = self
            .classrooms
            .set_classroom_active(id, false)
            .await?
            .ok_or_else(|| TimetableError::not_found("Classroom not found"))?;
        info!("Deactivated classroom {}", classroom.room_number);
        Ok(classroom)
    }
}

fn entry_not_found() -> TimetableError {
    TimetableError::not_found("Timetable entry not found")
}

fn validate_teacher(request: TeacherRequest) -> TimetableResult<NewTeacher> {
    match (
        required_text("name", request.name.as_deref()),
        required_text("subject", request.subject.as_deref()),
    ) {
        (Ok(name), Ok(subject)) => Ok(NewTeacher { name, subject }),
        _ => Err(TimetableError::validation("Name and subject are required")),
    }
}

fn validate_classroom(request: ClassroomRequest) -> TimetableResult<RoomNumber> {
    required_text("Room number", request.room_number.as_deref())?.parse()
}
