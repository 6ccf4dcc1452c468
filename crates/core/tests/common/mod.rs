#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use fake::{faker::name::en::Name, Fake};
use timetable_core::{
    clock::FixedClock,
    errors::{TimetableError, TimetableResult},
    models::{
        classroom::{Classroom, ClassroomFilter},
        entry::{CreateEntryRequest, NewTimetableEntry, TimetableEntry},
        room::RoomNumber,
        teacher::{NewTeacher, Teacher, TeacherFilter},
    },
    store::{ClassroomStore, EntryFilter, TeacherStore, TimetableStore},
    AdminService, DirectoryService, TimetableQueryEngine,
};
use uuid::Uuid;

/// Minimal store for exercising the services.
#[derive(Default)]
pub struct TestStore {
    entries: Mutex<HashMap<Uuid, TimetableEntry>>,
    teachers: Mutex<HashMap<Uuid, Teacher>>,
    classrooms: Mutex<HashMap<Uuid, Classroom>>,
}

#[async_trait]
impl TimetableStore for TestStore {
    async fn insert_entry(&self, entry: NewTimetableEntry) -> TimetableResult<TimetableEntry> {
        let mut entries = self.entries.lock().unwrap();
        let slot = entry.slot_key();
        if entries.values().any(|e| e.slot_key() == slot) {
            return Err(TimetableError::DuplicateSlot(slot));
        }
        let now = Utc::now();
        let created = entry.into_entry(Uuid::new_v4(), now, now);
        entries.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update_entry(&self, id: Uuid, entry: NewTimetableEntry) -> TimetableResult<TimetableEntry> {
        let mut entries = self.entries.lock().unwrap();
        let slot = entry.slot_key();
        if entries.values().any(|e| e.id != id && e.slot_key() == slot) {
            return Err(TimetableError::DuplicateSlot(slot));
        }
        let current = entries
            .get(&id)
            .ok_or_else(|| TimetableError::not_found("Timetable entry not found"))?;
        let updated = entry.into_entry(id, current.created_at, Utc::now());
        entries.insert(id, updated.clone());
        Ok(updated)
    }

    async fn delete_entry(&self, id: Uuid) -> TimetableResult<()> {
        self.entries
            .lock()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| TimetableError::not_found("Timetable entry not found"))
    }

    async fn get_entry(&self, id: Uuid) -> TimetableResult<Option<TimetableEntry>> {
        Ok(self.entries.lock().unwrap().get(&id).cloned())
    }

    async fn find_entries(&self, filter: &EntryFilter) -> TimetableResult<Vec<TimetableEntry>> {
        Ok(self
            .entries
            .lock()
            .unwrap()
            .values()
            .filter(|entry| filter.matches(entry))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl TeacherStore for TestStore {
    async fn insert_teacher(&self, teacher: NewTeacher) -> TimetableResult<Teacher> {
        let now = Utc::now();
        let created = Teacher {
            id: Uuid::new_v4(),
            name: teacher.name,
            subject: teacher.subject,
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        self.teachers.lock().unwrap().insert(created.id, created.clone());
        Ok(created)
    }

    async fn update_teacher(&self, id: Uuid, teacher: NewTeacher) -> TimetableResult<Option<Teacher>> {
        Ok(self.teachers.lock().unwrap().get_mut(&id).map(|stored| {
            stored.name = teacher.name;
            stored.subject = teacher.subject;
            stored.clone()
        }))
    }

    async fn set_teacher_active(&self, id: Uuid, active: bool) -> TimetableResult<Option<Teacher>> {
        Ok(self.teachers.lock().unwrap().get_mut(&id).map(|stored| {
            stored.is_active = active;
            stored.clone()
        }))
    }

    async fn get_teacher(&self, id: Uuid) -> TimetableResult<Option<Teacher>> {
        Ok(self.teachers.lock().unwrap().get(&id).cloned())
    }

    async fn find_teachers(&self, filter: &TeacherFilter) -> TimetableResult<Vec<Teacher>> {
        Ok(self
            .teachers
            .lock()
            .unwrap()
            .values()
            .filter(|teacher| filter.matches(teacher))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ClassroomStore for TestStore {
    async fn insert_classroom(&self, room_number: RoomNumber) -> TimetableResult<Classroom> {
        let mut classrooms = self.classrooms.lock().unwrap();
        if classrooms.values().any(|c| c.room_number == room_number) {
            return Err(TimetableError::Conflict(format!(
                "Classroom {} already exists",
                room_number
            )));
        }
        let now = Utc::now();
        let created = Classroom {
            id: Uuid::new_v4(),
            room_number,
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        classrooms.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update_classroom(&self, id: Uuid, room_number: RoomNumber) -> TimetableResult<Option<Classroom>> {
        Ok(self.classrooms.lock().unwrap().get_mut(&id).map(|stored| {
            stored.room_number = room_number;
            stored.clone()
        }))
    }

    async fn set_classroom_active(&self, id: Uuid, active: bool) -> TimetableResult<Option<Classroom>> {
        Ok(self.classrooms.lock().unwrap().get_mut(&id).map(|stored| {
            stored.is_active = active;
            stored.clone()
        }))
    }

    async fn get_classroom(&self, id: Uuid) -> TimetableResult<Option<Classroom>> {
        Ok(self.classrooms.lock().unwrap().get(&id).cloned())
    }

    async fn find_classrooms(&self, filter: &ClassroomFilter) -> TimetableResult<Vec<Classroom>> {
        Ok(self
            .classrooms
            .lock()
            .unwrap()
            .values()
            .filter(|classroom| filter.matches(classroom))
            .cloned()
            .collect())
    }
}

pub struct Services {
    pub store: Arc<TestStore>,
    pub query: TimetableQueryEngine,
    pub admin: AdminService,
    pub directory: DirectoryService,
}

/// 2024-01-01 was a Monday.
pub fn services_on(date: NaiveDate) -> Services {
    let store = Arc::new(TestStore::default());
    Services {
        query: TimetableQueryEngine::new(store.clone(), Arc::new(FixedClock(date))),
        admin: AdminService::new(store.clone(), store.clone(), store.clone()),
        directory: DirectoryService::new(store.clone(), store.clone(), store.clone()),
        store,
    }
}

pub fn services() -> Services {
    services_on(NaiveDate::from_ymd_opt(2024, 1, 3).unwrap())
}

pub fn lesson(day: &str, period: i64, grade: i64, class: &str, room: &str, teacher: &str) -> CreateEntryRequest {
    CreateEntryRequest {
        day: day.to_string(),
        period,
        room_number: Some(room.to_string()),
        teacher_name: Some(teacher.to_string()),
        teacher_subject: Some("Mathematics".to_string()),
        grade,
        class: class.to_string(),
        is_break: false,
        break_type: None,
    }
}

pub fn random_lesson(day: &str, period: i64, grade: i64, class: &str) -> CreateEntryRequest {
    let teacher: String = Name().fake();
    lesson(day, period, grade, class, "105", &teacher)
}
