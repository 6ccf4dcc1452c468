//! In-process store. Used by the API tests and handy for running the server
//! without Postgres.
//!
//! Each collection sits behind one `RwLock`; a write holds the lock across
//! its uniqueness check and the write itself, which is what makes the check
//! atomic.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use timetable_core::{
    errors::{TimetableError, TimetableResult},
    models::{
        admin::{Admin, AdminSession, NewAdmin},
        classroom::{Classroom, ClassroomFilter},
        entry::{NewTimetableEntry, SlotKey, TimetableEntry},
        room::RoomNumber,
        teacher::{NewTeacher, Teacher, TeacherFilter},
    },
    store::{AdminStore, ClassroomStore, EntryFilter, TeacherStore, TimetableStore},
};
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
struct EntryTable {
    rows: HashMap<Uuid, TimetableEntry>,
    slots: HashMap<SlotKey, Uuid>,
}

#[derive(Default)]
struct AdminTable {
    rows: HashMap<Uuid, Admin>,
    sessions: HashMap<String, AdminSession>,
}

#[derive(Default)]
pub struct InMemoryStore {
    entries: RwLock<EntryTable>,
    teachers: RwLock<HashMap<Uuid, Teacher>>,
    classrooms: RwLock<HashMap<Uuid, Classroom>>,
    admins: RwLock<AdminTable>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn room_taken(room_number: RoomNumber) -> TimetableError {
    TimetableError::Conflict(format!("Classroom {} already exists", room_number))
}

#[async_trait]
impl TimetableStore for InMemoryStore {
    async fn insert_entry(&self, entry: NewTimetableEntry) -> TimetableResult<TimetableEntry> {
        let mut table = self.entries.write().await;
        let slot = entry.slot_key();
        if table.slots.contains_key(&slot) {
            return Err(TimetableError::DuplicateSlot(slot));
        }

        let now = Utc::now();
        let created = entry.into_entry(Uuid::new_v4(), now, now);
        table.slots.insert(slot, created.id);
        table.rows.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update_entry(&self, id: Uuid, entry: NewTimetableEntry) -> TimetableResult<TimetableEntry> {
        let mut table = self.entries.write().await;
        let Some(current) = table.rows.get(&id) else {
            return Err(TimetableError::not_found("Timetable entry not found"));
        };

        let old_slot = current.slot_key();
        let new_slot = entry.slot_key();
        if table.slots.get(&new_slot).is_some_and(|owner| *owner != id) {
            return Err(TimetableError::DuplicateSlot(new_slot));
        }

        let updated = entry.into_entry(id, current.created_at, Utc::now());
        table.slots.remove(&old_slot);
        table.slots.insert(new_slot, id);
        table.rows.insert(id, updated.clone());
        Ok(updated)
    }

    async fn delete_entry(&self, id: Uuid) -> TimetableResult<()> {
        let mut table = self.entries.write().await;
        let removed = table
            .rows
            .remove(&id)
            .ok_or_else(|| TimetableError::not_found("Timetable entry not found"))?;
        table.slots.remove(&removed.slot_key());
        Ok(())
    }

    async fn get_entry(&self, id: Uuid) -> TimetableResult<Option<TimetableEntry>> {
        Ok(self.entries.read().await.rows.get(&id).cloned())
    }

    async fn find_entries(&self, filter: &EntryFilter) -> TimetableResult<Vec<TimetableEntry>> {
        Ok(self
            .entries
            .read()
            .await
            .rows
            .values()
            .filter(|entry| filter.matches(entry))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl TeacherStore for InMemoryStore {
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
        self.teachers.write().await.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update_teacher(&self, id: Uuid, teacher: NewTeacher) -> TimetableResult<Option<Teacher>> {
        Ok(self.teachers.write().await.get_mut(&id).map(|stored| {
            stored.name = teacher.name;
            stored.subject = teacher.subject;
            stored.updated_at = Utc::now();
            stored.clone()
        }))
    }

    async fn set_teacher_active(&self, id: Uuid, active: bool) -> TimetableResult<Option<Teacher>> {
        Ok(self.teachers.write().await.get_mut(&id).map(|stored| {
            stored.is_active = active;
            stored.updated_at = Utc::now();
            stored.clone()
        }))
    }

    async fn get_teacher(&self, id: Uuid) -> TimetableResult<Option<Teacher>> {
        Ok(self.teachers.read().await.get(&id).cloned())
    }

    async fn find_teachers(&self, filter: &TeacherFilter) -> TimetableResult<Vec<Teacher>> {
        Ok(self
            .teachers
            .read()
            .await
            .values()
            .filter(|teacher| filter.matches(teacher))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ClassroomStore for InMemoryStore {
    async fn insert_classroom(&self, room_number: RoomNumber) -> TimetableResult<Classroom> {
        let mut classrooms = self.classrooms.write().await;
        if classrooms.values().any(|c| c.room_number == room_number) {
            return Err(room_taken(room_number));
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
        let mut classrooms = self.classrooms.write().await;
        if classrooms
            .values()
            .any(|c| c.id != id && c.room_number == room_number)
        {
            return Err(room_taken(room_number));
        }

        Ok(classrooms.get_mut(&id).map(|stored| {
            stored.room_number = room_number;
            stored.updated_at = Utc::now();
            stored.clone()
        }))
    }

    async fn set_classroom_active(&self, id: Uuid, active: bool) -> TimetableResult<Option<Classroom>> {
        Ok(self.classrooms.write().await.get_mut(&id).map(|stored| {
            stored.is_active = active;
            stored.updated_at = Utc::now();
            stored.clone()
        }))
    }

    async fn get_classroom(&self, id: Uuid) -> TimetableResult<Option<Classroom>> {
        Ok(self.classrooms.read().await.get(&id).cloned())
    }

    async fn find_classrooms(&self, filter: &ClassroomFilter) -> TimetableResult<Vec<Classroom>> {
        Ok(self
            .classrooms
            .read()
            .await
            .values()
            .filter(|classroom| filter.matches(classroom))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl AdminStore for InMemoryStore {
    async fn insert_admin(&self, admin: NewAdmin) -> TimetableResult<Admin> {
        let mut table = self.admins.write().await;
        if table.rows.values().any(|a| a.username == admin.username) {
            return Err(TimetableError::Conflict(format!(
                "Username {} is already taken",
                admin.username
            )));
        }

        let created = Admin {
            id: Uuid::new_v4(),
            username: admin.username,
            password_hash: admin.password_hash,
            role: admin.role,
            is_active: true,
            last_login: None,
            created_at: Utc::now(),
        };
        table.rows.insert(created.id, created.clone());
        Ok(created)
    }

    async fn find_admin_by_username(&self, username: &str) -> TimetableResult<Option<Admin>> {
        Ok(self
            .admins
            .read()
            .await
            .rows
            .values()
            .find(|a| a.username == username)
            .cloned())
    }

    async fn get_admin(&self, id: Uuid) -> TimetableResult<Option<Admin>> {
        Ok(self.admins.read().await.rows.get(&id).cloned())
    }

    async fn record_login(&self, id: Uuid, at: DateTime<Utc>) -> TimetableResult<()> {
        if let Some(admin) = self.admins.write().await.rows.get_mut(&id) {
            admin.last_login = Some(at);
        }
        Ok(())
    }

    async fn insert_session(&self, session: AdminSession) -> TimetableResult<()> {
        self.admins
            .write()
            .await
            .sessions
            .insert(session.token.clone(), session);
        Ok(())
    }

    async fn find_session(&self, token: &str) -> TimetableResult<Option<AdminSession>> {
        Ok(self.admins.read().await.sessions.get(token).cloned())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use pretty_assertions::assert_eq;
    use timetable_core::models::{
        calendar::{Day, Period},
        class_group::{ClassLabel, Grade},
    };

    fn lesson(day: Day, period: i64, teacher: &str) -> NewTimetableEntry {
        NewTimetableEntry {
            day,
            period: Period::new(period).unwrap(),
            room_number: "102".parse().unwrap(),
            teacher_name: teacher.to_string(),
            teacher_subject: "English".to_string(),
            grade: Grade::new(7).unwrap(),
            class: ClassLabel::Green,
            is_break: false,
            break_type: None,
        }
    }

    #[tokio::test]
    async fn slot_is_released_on_delete() {
        let store = InMemoryStore::new();
        let first = store.insert_entry(lesson(Day::Monday, 1, "A")).await.unwrap();

        assert!(matches!(
            store.insert_entry(lesson(Day::Monday, 1, "B")).await,
            Err(TimetableError::DuplicateSlot(_))
        ));

        store.delete_entry(first.id).await.unwrap();
        store.insert_entry(lesson(Day::Monday, 1, "B")).await.unwrap();
    }

    #[tokio::test]
    async fn moving_an_entry_frees_its_old_slot() {
        let store = InMemoryStore::new();
        let entry = store.insert_entry(lesson(Day::Monday, 1, "A")).await.unwrap();

        store
            .update_entry(entry.id, lesson(Day::Tuesday, 1, "A"))
            .await
            .unwrap();

        store.insert_entry(lesson(Day::Monday, 1, "B")).await.unwrap();
        assert!(matches!(
            store.insert_entry(lesson(Day::Tuesday, 1, "C")).await,
            Err(TimetableError::DuplicateSlot(_))
        ));
    }

    #[tokio::test]
    async fn concurrent_inserts_into_one_slot() {
        let store = Arc::new(InMemoryStore::new());
        let handles: Vec<_> = (0..16)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move { store.insert_entry(lesson(Day::Friday, 7, &format!("T{i}"))).await })
            })
            .collect();

        let mut successes = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                successes += 1;
            }
        }

        assert_eq!(successes, 1);
        let stored = store.find_entries(&EntryFilter::default()).await.unwrap();
        assert_eq!(stored.len(), 1);
    }

    #[tokio::test]
    async fn classroom_numbers_are_unique_even_when_inactive() {
        let store = InMemoryStore::new();
        let room: RoomNumber = "110".parse().unwrap();
        let created = store.insert_classroom(room).await.unwrap();
        store.set_classroom_active(created.id, false).await.unwrap();

        assert!(matches!(
            store.insert_classroom(room).await,
            Err(TimetableError::Conflict(_))
        ));
        let active = store.find_classrooms(&ClassroomFilter::active()).await.unwrap();
        assert!(active.is_empty());
    }

    #[tokio::test]
    async fn usernames_are_unique() {
        let store = InMemoryStore::new();
        let admin = NewAdmin {
            username: "admin".to_string(),
            password_hash: "hash".to_string(),
            role: "admin".to_string(),
        };
        store.insert_admin(admin.clone()).await.unwrap();

        assert!(matches!(
            store.insert_admin(admin).await,
            Err(TimetableError::Conflict(_))
        ));
    }
}
