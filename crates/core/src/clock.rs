use chrono::{Datelike, Local, NaiveDate, Weekday};

/// Source of "what day is it" for the `today` axis.
pub trait Clock: Send + Sync {
    fn weekday(&self) -> Weekday;
}

/// Reads the server's local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn weekday(&self) -> Weekday {
        Local::now().weekday()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn weekday(&self) -> Weekday {
        self.0.weekday()
    }
}
