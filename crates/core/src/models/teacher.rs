use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A member of staff. Timetable entries copy the name and subject rather than
/// pointing here, so renaming or deactivating a teacher leaves entries as they were.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    pub id: Uuid,
    pub name: String,
    pub subject: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTeacher {
    pub name: String,
    pub subject: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeacherRequest {
    pub name: Option<String>,
    pub subject: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct TeacherFilter {
    pub active_only: bool,
    /// Case-insensitive substring of the subject.
    pub subject: Option<String>,
}

impl TeacherFilter {
    pub fn active() -> Self {
        Self {
            active_only: true,
            subject: None,
        }
    }

    pub fn matches(&self, teacher: &Teacher) -> bool {
        if self.active_only && !teacher.is_active {
            return false;
        }
        match &self.subject {
            Some(needle) => contains_ignore_case(&teacher.subject, needle),
            None => true,
        }
    }
}

pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
