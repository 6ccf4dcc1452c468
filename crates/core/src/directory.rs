//! Read side for teachers and classrooms, plus timetable statistics.

use std::sync::Arc;

use uuid::Uuid;

use crate::{
    errors::{TimetableError, TimetableResult},
    models::{
        classroom::{Classroom, ClassroomFilter},
        room::{floor_rooms, RoomNumber},
        teacher::{Teacher, TeacherFilter},
        view::TimetableStats,
    },
    store::{ClassroomStore, EntryFilter, TeacherStore, TimetableStore},
};

#[derive(Clone)]
pub struct DirectoryService {
    entries: Arc<dyn TimetableStore>,
    teachers: Arc<dyn TeacherStore>,
    classrooms: Arc<dyn ClassroomStore>,
}

impl DirectoryService {
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

    /// Active teachers by name.
    pub async fn list_teachers(&self) -> TimetableResult<Vec<Teacher>> {
        self.sorted_teachers(TeacherFilter::active()).await
    }

    /// Active teachers whose subject contains `subject`, ignoring case.
    pub async fn teachers_by_subject(&self, subject: &str) -> TimetableResult<Vec<Teacher>> {
        let filter = TeacherFilter {
            active_only: true,
            subject: Some(subject.trim().to_string()),
        };
        self.sorted_teachers(filter).await
    }

    /// Looks up any teacher, including deactivated ones.
    pub async fn get_teacher(&self, id: Uuid) -> TimetableResult<Teacher> {
        self.teachers
            .get_teacher(id)
            .await?
            .ok_or_else(|| TimetableError::not_found("Teacher not found"))
    }

    /// Active classrooms by room number.
    pub async fn list_classrooms(&self) -> TimetableResult<Vec<Classroom>> {
        self.sorted_classrooms(ClassroomFilter::active()).await
    }

    pub async fn get_classroom(&self, room_number: &str) -> TimetableResult<Classroom> {
        let not_found = || TimetableError::not_found(format!("Classroom {} not found", room_number));
        let Ok(room) = room_number.parse::<RoomNumber>() else {
            return Err(not_found());
        };

        let filter = ClassroomFilter {
            active_only: true,
            room_number: Some(room),
            ..Default::default()
        };
        self.classrooms
            .find_classrooms(&filter)
            .await?
            .into_iter()
            .next()
            .ok_or_else(not_found)
    }

    pub async fn classrooms_by_floor(&self, floor: &str) -> TimetableResult<Vec<Classroom>> {
        let Some(floor) = floor.trim().parse::<u8>().ok().filter(|f| floor_rooms(*f).is_some()) else {
            return Err(TimetableError::validation("Floor must be 1 or 2"));
        };

        let filter = ClassroomFilter {
            active_only: true,
            floor: Some(floor),
            ..Default::default()
        };
        self.sorted_classrooms(filter).await
    }

    pub async fn stats(&self) -> TimetableResult<TimetableStats> {
        let entries = self.entries.find_entries(&EntryFilter::default()).await?;
        let teachers = self.teachers.find_teachers(&TeacherFilter::active()).await?;
        let classrooms = self.classrooms.find_classrooms(&ClassroomFilter::active()).await?;
        Ok(TimetableStats::collect(&entries, teachers.len(), classrooms.len()))
    }

    async fn sorted_teachers(&self, filter: TeacherFilter) -> TimetableResult<Vec<Teacher>> {
        let mut teachers = self.teachers.find_teachers(&filter).await?;
        teachers.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(teachers)
    }

    async fn sorted_classrooms(&self, filter: ClassroomFilter) -> TimetableResult<Vec<Classroom>> {
        let mut classrooms = self.classrooms.find_classrooms(&filter).await?;
        classrooms.sort_by_key(|classroom| classroom.room_number);
        Ok(classrooms)
    }
}
