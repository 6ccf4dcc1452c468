use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{
    calendar::{Day, Period},
    class_group::{full_class_name, ClassLabel, Grade},
    room::RoomNumber,
    time_slot::{self, BreakType, TimeSlot},
};

/// The (day, period, grade, class) tuple. At most one entry may occupy a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SlotKey {
    pub day: Day,
    pub period: Period,
    pub grade: Grade,
    pub class: ClassLabel,
}

impl SlotKey {
    pub fn full_class_name(&self) -> String {
        full_class_name(self.grade, self.class)
    }
}

/// A persisted timetable entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableEntry {
    pub id: Uuid,
    pub day: Day,
    pub period: Period,
    pub room_number: RoomNumber,
    pub teacher_name: String,
    pub teacher_subject: String,
    pub grade: Grade,
    pub class: ClassLabel,
    pub is_break: bool,
    #[serde(with = "break_type_field", default)]
    pub break_type: Option<BreakType>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TimetableEntry {
    pub fn slot_key(&self) -> SlotKey {
        SlotKey {
            day: self.day,
            period: self.period,
            grade: self.grade,
            class: self.class,
        }
    }

    pub fn time_slot(&self) -> TimeSlot {
        self.period.time_slot()
    }

    pub fn time_display(&self) -> String {
        time_slot::time_display(self.period, self.is_break)
    }

    pub fn full_class_name(&self) -> String {
        full_class_name(self.grade, self.class)
    }

    /// The stored, user-supplied fields without identity or timestamps.
    pub fn fields(&self) -> NewTimetableEntry {
        NewTimetableEntry {
            day: self.day,
            period: self.period,
            room_number: self.room_number,
            teacher_name: self.teacher_name.clone(),
            teacher_subject: self.teacher_subject.clone(),
            grade: self.grade,
            class: self.class,
            is_break: self.is_break,
            break_type: self.break_type,
        }
    }

    pub fn into_view(self) -> TimetableEntryView {
        TimetableEntryView {
            time_slot: self.time_slot(),
            time_display: self.time_display(),
            full_class_name: self.full_class_name(),
            entry: self,
        }
    }
}

/// Validated entry fields, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTimetableEntry {
    pub day: Day,
    pub period: Period,
    pub room_number: RoomNumber,
    pub teacher_name: String,
    pub teacher_subject: String,
    pub grade: Grade,
    pub class: ClassLabel,
    pub is_break: bool,
    pub break_type: Option<BreakType>,
}

impl NewTimetableEntry {
    pub fn slot_key(&self) -> SlotKey {
        SlotKey {
            day: self.day,
            period: self.period,
            grade: self.grade,
            class: self.class,
        }
    }

    pub fn into_entry(self, id: Uuid, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> TimetableEntry {
        TimetableEntry {
            id,
            day: self.day,
            period: self.period,
            room_number: self.room_number,
            teacher_name: self.teacher_name,
            teacher_subject: self.teacher_subject,
            grade: self.grade,
            class: self.class,
            is_break: self.is_break,
            break_type: self.break_type,
            created_at,
            updated_at,
        }
    }
}

/// An entry together with the fields derived from it on every read.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableEntryView {
    #[serde(flatten)]
    pub entry: TimetableEntry,
    pub time_slot: TimeSlot,
    pub time_display: String,
    pub full_class_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEntryRequest {
    pub day: String,
    pub period: i64,
    #[serde(default)]
    pub room_number: Option<String>,
    #[serde(default)]
    pub teacher_name: Option<String>,
    #[serde(default)]
    pub teacher_subject: Option<String>,
    pub grade: i64,
    pub class: String,
    #[serde(default)]
    pub is_break: bool,
    #[serde(default)]
    pub break_type: Option<String>,
}

/// Partial update; absent fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEntryRequest {
    pub day: Option<String>,
    pub period: Option<i64>,
    pub room_number: Option<String>,
    pub teacher_name: Option<String>,
    pub teacher_subject: Option<String>,
    pub grade: Option<i64>,
    pub class: Option<String>,
    pub is_break: Option<bool>,
    pub break_type: Option<String>,
}

impl UpdateEntryRequest {
    /// Overlays the patch on a stored entry, producing a full raw request to
    /// validate. Turning a break into a lesson drops its break type unless
    /// the patch names one.
    pub fn merge_onto(self, current: &TimetableEntry) -> CreateEntryRequest {
        let is_break = self.is_break.unwrap_or(current.is_break);
        let break_type = match self.break_type {
            Some(raw) => Some(raw),
            None if is_break => current.break_type.map(|kind| kind.as_str().to_string()),
            None => None,
        };

        CreateEntryRequest {
            day: self.day.unwrap_or_else(|| current.day.to_string()),
            period: self.period.unwrap_or_else(|| i64::from(current.period.value())),
            room_number: Some(self.room_number.unwrap_or_else(|| current.room_number.to_string())),
            teacher_name: Some(self.teacher_name.unwrap_or_else(|| current.teacher_name.clone())),
            teacher_subject: Some(
                self.teacher_subject
                    .unwrap_or_else(|| current.teacher_subject.clone()),
            ),
            grade: self.grade.unwrap_or_else(|| i64::from(current.grade.value())),
            class: self.class.unwrap_or_else(|| current.class.to_string()),
            is_break,
            break_type,
        }
    }
}

/// `breakType` travels as `""` when the entry is not a break.
pub(crate) mod break_type_field {
    use serde::{de, Deserialize, Deserializer, Serializer};

    use crate::models::time_slot::BreakType;

    pub fn serialize<S: Serializer>(value: &Option<BreakType>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(value.as_ref().map(BreakType::as_str).unwrap_or(""))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<BreakType>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(text) => text.parse().map(Some).map_err(de::Error::custom),
        }
    }
}
