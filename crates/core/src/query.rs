//! # Timetable Query Engine
//!
//! Turns a query axis into a grouped, display-ready timetable. Every axis
//! follows the same steps:
//!
//! 1. Parse the raw filter value. A value that fails validation cannot match
//!    any stored entry, so it short-circuits to the axis' empty result.
//! 2. Fetch matching entries from the [`TimetableStore`].
//! 3. Sort by slot (day, period, grade, class).
//! 4. Split the sorted run into day groups or period groups and project each
//!    entry onto the row shape of the axis.
//!
//! Scoped axes report an empty result as `NotFound`; the week view returns an
//! empty schedule instead.

use std::sync::Arc;

use chrono::Weekday;
use tracing::debug;

use crate::{
    clock::Clock,
    errors::{TimetableError, TimetableResult},
    models::{
        calendar::Day,
        class_group::{full_class_name, ClassLabel, Grade},
        entry::TimetableEntry,
        room::RoomNumber,
        view::{
            ClassTimetable, DayGroup, DayTimetable, PeriodGroup, RoomTimetable, SlotRow,
            TeacherTimetable, TimetableView, WeekDay, WeekTimetable,
        },
    },
    store::{EntryFilter, TimetableStore},
};

/// The dimension a timetable query is scoped by, with its raw filter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryAxis {
    Class { grade: String, class: String },
    Room(String),
    Teacher(String),
    Day(String),
    Today,
    All,
}

#[derive(Clone)]
pub struct TimetableQueryEngine {
    store: Arc<dyn TimetableStore>,
    clock: Arc<dyn Clock>,
}

impl TimetableQueryEngine {
    pub fn new(store: Arc<dyn TimetableStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub async fn query(&self, axis: QueryAxis) -> TimetableResult<TimetableView> {
        Ok(match axis {
            QueryAxis::Class { grade, class } => TimetableView::Class(self.by_class(&grade, &class).await?),
            QueryAxis::Room(room) => TimetableView::Room(self.by_room(&room).await?),
            QueryAxis::Teacher(name) => TimetableView::Teacher(self.by_teacher(&name).await?),
            QueryAxis::Day(day) => TimetableView::Day(self.by_day(&day).await?),
            QueryAxis::Today => TimetableView::Day(self.today().await?),
            QueryAxis::All => TimetableView::Week(self.all_days().await?),
        })
    }

    pub async fn by_class(&self, grade: &str, class: &str) -> TimetableResult<ClassTimetable> {
        debug!("Querying timetable for grade={} class={}", grade, class);
        let not_found = || TimetableError::not_found(format!("Timetable not found for Grade {} {}", grade, class));

        let parsed_grade = grade.trim().parse::<i64>().ok().and_then(|g| Grade::new(g).ok());
        let parsed_class = class.trim().parse::<ClassLabel>().ok();
        let (Some(grade), Some(class)) = (parsed_grade, parsed_class) else {
            return Err(not_found());
        };

        let filter = EntryFilter {
            grade: Some(grade),
            class: Some(class),
            ..Default::default()
        };
        let entries = self.fetch_sorted(&filter).await?;
        if entries.is_empty() {
            return Err(not_found());
        }

        Ok(ClassTimetable {
            grade,
            class,
            full_class_name: full_class_name(grade, class),
            schedule: group_by_day(entries),
        })
    }

    pub async fn by_room(&self, room_number: &str) -> TimetableResult<RoomTimetable> {
        debug!("Querying timetable for room={}", room_number);
        let not_found =
            || TimetableError::not_found(format!("No timetable entries found for room {}", room_number));

        let Ok(room) = room_number.parse::<RoomNumber>() else {
            return Err(not_found());
        };

        let filter = EntryFilter {
            room_number: Some(room),
            ..Default::default()
        };
        let entries = self.fetch_sorted(&filter).await?;
        if entries.is_empty() {
            return Err(not_found());
        }

        Ok(RoomTimetable {
            room_number: room,
            floor: room.floor(),
            schedule: group_by_day(entries),
        })
    }

    pub async fn by_teacher(&self, teacher_name: &str) -> TimetableResult<TeacherTimetable> {
        debug!("Querying timetable for teacher matching {:?}", teacher_name);
        let not_found =
            || TimetableError::not_found(format!("No timetable entries found for teacher {}", teacher_name));

        let needle = teacher_name.trim();
        if needle.is_empty() {
            return Err(not_found());
        }

        let filter = EntryFilter {
            teacher_name: Some(needle.to_string()),
            ..Default::default()
        };
        let entries = self.fetch_sorted(&filter).await?;

        let mut matched_teachers: Vec<String> = Vec::new();
        for entry in &entries {
            if !matched_teachers.contains(&entry.teacher_name) {
                matched_teachers.push(entry.teacher_name.clone());
            }
        }
        let Some(first) = matched_teachers.first().cloned() else {
            return Err(not_found());
        };

        Ok(TeacherTimetable {
            teacher_name: first,
            matched_teachers,
            schedule: group_by_day(entries),
        })
    }

    pub async fn by_day(&self, day: &str) -> TimetableResult<DayTimetable> {
        debug!("Querying timetable for day={}", day);
        let not_found = || TimetableError::not_found(format!("No timetable entries found for {}", day));

        let Ok(parsed) = day.parse::<Day>() else {
            return Err(not_found());
        };
        self.single_day(parsed).await?.ok_or_else(not_found)
    }

    pub async fn today(&self) -> TimetableResult<DayTimetable> {
        let weekday = self.clock.weekday();
        debug!("Querying today's timetable ({})", weekday_name(weekday));
        let not_found = || {
            TimetableError::not_found(format!(
                "No timetable entries found for today ({})",
                weekday_name(weekday)
            ))
        };

        let Some(day) = Day::from_weekday(weekday) else {
            return Err(not_found());
        };
        self.single_day(day).await?.ok_or_else(not_found)
    }

    /// Every entry, grouped by day then period. Never `NotFound`.
    pub async fn all_days(&self) -> TimetableResult<WeekTimetable> {
        let entries = self.fetch_sorted(&EntryFilter::default()).await?;
        let schedule = group_runs(entries, |entry| entry.day)
            .into_iter()
            .map(|(day, entries)| WeekDay {
                day,
                periods: group_by_period(entries),
            })
            .collect();

        Ok(WeekTimetable { schedule })
    }

    /// Flat listing in slot order.
    pub async fn list_all(&self) -> TimetableResult<Vec<TimetableEntry>> {
        self.fetch_sorted(&EntryFilter::default()).await
    }

    /// Flat listing of the entries an axis selects, in slot order. An axis
    /// that matches nothing yields an empty list rather than `NotFound`.
    pub async fn list(&self, axis: &QueryAxis) -> TimetableResult<Vec<TimetableEntry>> {
        match self.filter_for(axis) {
            Some(filter) => self.fetch_sorted(&filter).await,
            None => Ok(Vec::new()),
        }
    }

    /// `None` when the raw axis value cannot match any entry.
    fn filter_for(&self, axis: &QueryAxis) -> Option<EntryFilter> {
        let filter = match axis {
            QueryAxis::Class { grade, class } => EntryFilter {
                grade: Some(Grade::new(grade.trim().parse().ok()?).ok()?),
                class: Some(class.trim().parse().ok()?),
                ..Default::default()
            },
            QueryAxis::Room(room) => EntryFilter {
                room_number: Some(room.parse().ok()?),
                ..Default::default()
            },
            QueryAxis::Teacher(name) => {
                let needle = name.trim();
                if needle.is_empty() {
                    return None;
                }
                EntryFilter {
                    teacher_name: Some(needle.to_string()),
                    ..Default::default()
                }
            }
            QueryAxis::Day(day) => EntryFilter {
                day: Some(day.parse().ok()?),
                ..Default::default()
            },
            QueryAxis::Today => EntryFilter {
                day: Some(Day::from_weekday(self.clock.weekday())?),
                ..Default::default()
            },
            QueryAxis::All => EntryFilter::default(),
        };
        Some(filter)
    }

    async fn single_day(&self, day: Day) -> TimetableResult<Option<DayTimetable>> {
        let filter = EntryFilter {
            day: Some(day),
            ..Default::default()
        };
        let entries = self.fetch_sorted(&filter).await?;
        if entries.is_empty() {
            return Ok(None);
        }

        Ok(Some(DayTimetable {
            day,
            schedule: group_by_period(entries),
        }))
    }

    async fn fetch_sorted(&self, filter: &EntryFilter) -> TimetableResult<Vec<TimetableEntry>> {
        let mut entries = self.store.find_entries(filter).await?;
        entries.sort_by_key(TimetableEntry::slot_key);
        Ok(entries)
    }
}

/// Splits an already sorted sequence into runs of equal key.
fn group_runs<T, K: PartialEq + Copy>(items: Vec<T>, key: impl Fn(&T) -> K) -> Vec<(K, Vec<T>)> {
    let mut groups: Vec<(K, Vec<T>)> = Vec::new();
    for item in items {
        let k = key(&item);
        match groups.last_mut() {
            Some((last, members)) if *last == k => members.push(item),
            _ => groups.push((k, vec![item])),
        }
    }
    groups
}

/// Expects entries sorted by slot.
pub fn group_by_day<R: From<TimetableEntry>>(entries: Vec<TimetableEntry>) -> Vec<DayGroup<R>> {
    group_runs(entries, |entry| entry.day)
        .into_iter()
        .map(|(day, entries)| DayGroup {
            day,
            entries: entries.into_iter().map(R::from).collect(),
        })
        .collect()
}

/// Expects entries of a single day sorted by slot.
pub fn group_by_period(entries: Vec<TimetableEntry>) -> Vec<PeriodGroup<SlotRow>> {
    group_runs(entries, |entry| entry.period)
        .into_iter()
        .map(|(period, entries)| PeriodGroup {
            period,
            entries: entries.into_iter().map(SlotRow::from).collect(),
        })
        .collect()
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
