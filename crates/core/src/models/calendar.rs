use std::{fmt, str::FromStr};

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::errors::{TimetableError, TimetableResult};

/// A school day. Ordering follows the week, Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Day {
    pub const ALL: [Day; 5] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
        }
    }

    /// Maps a calendar weekday onto a school day; weekends have none.
    pub fn from_weekday(weekday: Weekday) -> Option<Day> {
        match weekday {
            Weekday::Mon => Some(Day::Monday),
            Weekday::Tue => Some(Day::Tuesday),
            Weekday::Wed => Some(Day::Wednesday),
            Weekday::Thu => Some(Day::Thursday),
            Weekday::Fri => Some(Day::Friday),
            Weekday::Sat | Weekday::Sun => None,
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Day {
    type Err = TimetableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Day::ALL
            .into_iter()
            .find(|day| day.as_str() == s)
            .ok_or_else(|| {
                TimetableError::validation(
                    "Day must be one of Monday, Tuesday, Wednesday, Thursday, Friday",
                )
            })
    }
}

/// One of the seven teaching periods of a school day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Period(u8);

impl Period {
    pub const FIRST: u8 = 1;
    pub const LAST: u8 = 7;

    pub fn new(value: i64) -> TimetableResult<Self> {
        if (i64::from(Self::FIRST)..=i64::from(Self::LAST)).contains(&value) {
            Ok(Period(value as u8))
        } else {
            Err(TimetableError::UnknownPeriod(value))
        }
    }

    pub fn all() -> impl Iterator<Item = Period> {
        (Self::FIRST..=Self::LAST).map(Period)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Period {
    type Error = TimetableError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Period::new(i64::from(value))
    }
}

impl From<Period> for u8 {
    fn from(period: Period) -> Self {
        period.0
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
