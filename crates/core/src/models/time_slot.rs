//! Bell schedule: the fixed start/end time of every period, and the two
//! breaks that sit between periods.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize, Serializer};

use crate::{
    errors::{TimetableError, TimetableResult},
    models::calendar::Period,
};

/// Wall-clock time of day with minute precision, rendered as `8:30` / `14:00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    pub hour: u8,
    pub minute: u8,
}

impl ClockTime {
    pub const fn new(hour: u8, minute: u8) -> Self {
        Self { hour, minute }
    }

    pub fn minutes_since_midnight(self) -> u16 {
        u16::from(self.hour) * 60 + u16::from(self.minute)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.hour, self.minute)
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeSlot {
    pub start: ClockTime,
    pub end: ClockTime,
}

impl TimeSlot {
    const fn new(start: ClockTime, end: ClockTime) -> Self {
        Self { start, end }
    }

    pub fn duration_minutes(&self) -> u16 {
        self.end
            .minutes_since_midnight()
            .saturating_sub(self.start.minutes_since_midnight())
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}

const PERIOD_SLOTS: [TimeSlot; 7] = [
    TimeSlot::new(ClockTime::new(8, 30), ClockTime::new(9, 15)),
    TimeSlot::new(ClockTime::new(9, 20), ClockTime::new(10, 5)),
    TimeSlot::new(ClockTime::new(10, 10), ClockTime::new(10, 55)),
    TimeSlot::new(ClockTime::new(11, 15), ClockTime::new(12, 0)),
    TimeSlot::new(ClockTime::new(12, 5), ClockTime::new(12, 50)),
    TimeSlot::new(ClockTime::new(14, 0), ClockTime::new(14, 45)),
    TimeSlot::new(ClockTime::new(14, 50), ClockTime::new(15, 35)),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BreakType {
    #[serde(rename = "Tea Break")]
    Tea,
    #[serde(rename = "Lunch Break")]
    Lunch,
}

impl BreakType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BreakType::Tea => "Tea Break",
            BreakType::Lunch => "Lunch Break",
        }
    }
}

impl fmt::Display for BreakType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BreakType {
    type Err = TimetableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Tea Break" => Ok(BreakType::Tea),
            "Lunch Break" => Ok(BreakType::Lunch),
            _ => Err(TimetableError::validation(
                "Break type must be Tea Break or Lunch Break",
            )),
        }
    }
}

/// A break occupies the gap after a period rather than the period's own slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakWindow {
    pub kind: BreakType,
    pub slot: TimeSlot,
}

impl fmt::Display for BreakWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.slot, self.kind)
    }
}

/// Looks up the slot of a raw period number.
pub fn resolve(period: i64) -> TimetableResult<TimeSlot> {
    Period::new(period).map(Period::time_slot)
}

/// The break window anchored at `period`, if the bell schedule has one.
pub fn break_window(period: Period) -> Option<BreakWindow> {
    match period.value() {
        3 => Some(BreakWindow {
            kind: BreakType::Tea,
            slot: TimeSlot::new(ClockTime::new(10, 55), ClockTime::new(11, 15)),
        }),
        5 => Some(BreakWindow {
            kind: BreakType::Lunch,
            slot: TimeSlot::new(ClockTime::new(12, 50), ClockTime::new(14, 0)),
        }),
        _ => None,
    }
}

/// Display text for an entry: break entries at a break period show the break
/// window, everything else shows the period's own slot.
pub fn time_display(period: Period, is_break: bool) -> String {
    if is_break {
        if let Some(window) = break_window(period) {
            return window.to_string();
        }
    }
    period.time_slot().to_string()
}

impl Period {
    pub fn time_slot(self) -> TimeSlot {
        PERIOD_SLOTS[usize::from(self.value() - Period::FIRST)]
    }
}
