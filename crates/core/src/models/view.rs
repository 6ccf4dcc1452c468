//! Display-ready timetable shapes returned by the query engine.
//!
//! Groups are ordered sequences rather than maps so that days come out
//! Monday to Friday and periods 1 to 7 regardless of serializer.

use serde::Serialize;

use crate::models::{
    calendar::{Day, Period},
    class_group::{ClassLabel, Grade},
    entry::{break_type_field, TimetableEntry},
    room::RoomNumber,
    time_slot::BreakType,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayGroup<T> {
    pub day: Day,
    pub entries: Vec<T>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodGroup<T> {
    pub period: Period,
    pub entries: Vec<T>,
}

/// Row of a class timetable; the class is fixed by the query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassRow {
    pub period: Period,
    pub time: String,
    pub room_number: RoomNumber,
    pub teacher_name: String,
    pub teacher_subject: String,
    pub is_break: bool,
    #[serde(serialize_with = "break_type_field::serialize")]
    pub break_type: Option<BreakType>,
}

impl From<TimetableEntry> for ClassRow {
    fn from(entry: TimetableEntry) -> Self {
        Self {
            time: entry.time_display(),
            period: entry.period,
            room_number: entry.room_number,
            teacher_name: entry.teacher_name,
            teacher_subject: entry.teacher_subject,
            is_break: entry.is_break,
            break_type: entry.break_type,
        }
    }
}

/// Row of a room timetable; the room is fixed by the query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomRow {
    pub period: Period,
    pub time: String,
    pub grade: Grade,
    pub class: ClassLabel,
    pub teacher_name: String,
    pub teacher_subject: String,
    pub is_break: bool,
    #[serde(serialize_with = "break_type_field::serialize")]
    pub break_type: Option<BreakType>,
}

impl From<TimetableEntry> for RoomRow {
    fn from(entry: TimetableEntry) -> Self {
        Self {
            time: entry.time_display(),
            period: entry.period,
            grade: entry.grade,
            class: entry.class,
            teacher_name: entry.teacher_name,
            teacher_subject: entry.teacher_subject,
            is_break: entry.is_break,
            break_type: entry.break_type,
        }
    }
}

/// Row of a teacher timetable.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherRow {
    pub period: Period,
    pub time: String,
    pub room_number: RoomNumber,
    pub grade: Grade,
    pub class: ClassLabel,
    pub teacher_subject: String,
    pub is_break: bool,
    #[serde(serialize_with = "break_type_field::serialize")]
    pub break_type: Option<BreakType>,
}

impl From<TimetableEntry> for TeacherRow {
    fn from(entry: TimetableEntry) -> Self {
        Self {
            time: entry.time_display(),
            period: entry.period,
            room_number: entry.room_number,
            grade: entry.grade,
            class: entry.class,
            teacher_subject: entry.teacher_subject,
            is_break: entry.is_break,
            break_type: entry.break_type,
        }
    }
}

/// Row inside a period group; day and period come from the enclosing groups.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotRow {
    pub time: String,
    pub room_number: RoomNumber,
    pub grade: Grade,
    pub class: ClassLabel,
    pub teacher_name: String,
    pub teacher_subject: String,
    pub is_break: bool,
    #[serde(serialize_with = "break_type_field::serialize")]
    pub break_type: Option<BreakType>,
}

impl From<TimetableEntry> for SlotRow {
    fn from(entry: TimetableEntry) -> Self {
        Self {
            time: entry.time_display(),
            room_number: entry.room_number,
            grade: entry.grade,
            class: entry.class,
            teacher_name: entry.teacher_name,
            teacher_subject: entry.teacher_subject,
            is_break: entry.is_break,
            break_type: entry.break_type,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassTimetable {
    pub grade: Grade,
    pub class: ClassLabel,
    pub full_class_name: String,
    pub schedule: Vec<DayGroup<ClassRow>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomTimetable {
    pub room_number: RoomNumber,
    pub floor: u8,
    pub schedule: Vec<DayGroup<RoomRow>>,
}

/// Teacher lookups match on a name fragment, so more than one teacher can
/// land in the same timetable. `teacher_name` is the first match in slot order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherTimetable {
    pub teacher_name: String,
    pub matched_teachers: Vec<String>,
    pub schedule: Vec<DayGroup<TeacherRow>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayTimetable {
    pub day: Day,
    pub schedule: Vec<PeriodGroup<SlotRow>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekDay {
    pub day: Day,
    pub periods: Vec<PeriodGroup<SlotRow>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekTimetable {
    pub schedule: Vec<WeekDay>,
}

impl WeekTimetable {
    pub fn entry_count(&self) -> usize {
        self.schedule
            .iter()
            .flat_map(|day| &day.periods)
            .map(|group| group.entries.len())
            .sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TimetableView {
    Class(ClassTimetable),
    Room(RoomTimetable),
    Teacher(TeacherTimetable),
    Day(DayTimetable),
    Week(WeekTimetable),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCount {
    pub day: Day,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableStats {
    pub total_entries: usize,
    pub total_teachers: usize,
    pub total_classrooms: usize,
    pub day_stats: Vec<DayCount>,
}

impl TimetableStats {
    /// Counts per day, Monday first; days without entries are left out.
    pub fn collect(entries: &[TimetableEntry], total_teachers: usize, total_classrooms: usize) -> Self {
        let day_stats = Day::ALL
            .into_iter()
            .map(|day| DayCount {
                day,
                count: entries.iter().filter(|entry| entry.day == day).count(),
            })
            .filter(|stat| stat.count > 0)
            .collect();

        Self {
            total_entries: entries.len(),
            total_teachers,
            total_classrooms,
            day_stats,
        }
    }
}
