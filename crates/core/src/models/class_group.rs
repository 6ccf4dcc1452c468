use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::{TimetableError, TimetableResult};

/// A school grade, 5 through 11.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Grade(u8);

impl Grade {
    pub const LOWEST: u8 = 5;
    pub const HIGHEST: u8 = 11;

    pub fn new(value: i64) -> TimetableResult<Self> {
        if (i64::from(Self::LOWEST)..=i64::from(Self::HIGHEST)).contains(&value) {
            Ok(Grade(value as u8))
        } else {
            Err(TimetableError::validation(format!(
                "Grade must be between {} and {}",
                Self::LOWEST,
                Self::HIGHEST
            )))
        }
    }

    pub fn all() -> impl Iterator<Item = Grade> {
        (Self::LOWEST..=Self::HIGHEST).map(Grade)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Grade {
    type Error = TimetableError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Grade::new(i64::from(value))
    }
}

impl From<Grade> for u8 {
    fn from(grade: Grade) -> Self {
        grade.0
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The parallel class within a grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ClassLabel {
    Green,
    Blue,
}

impl ClassLabel {
    pub const ALL: [ClassLabel; 2] = [ClassLabel::Green, ClassLabel::Blue];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClassLabel::Green => "Green",
            ClassLabel::Blue => "Blue",
        }
    }
}

impl fmt::Display for ClassLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClassLabel {
    type Err = TimetableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ClassLabel::ALL
            .into_iter()
            .find(|label| label.as_str() == s)
            .ok_or_else(|| TimetableError::validation("Class must be Green or Blue"))
    }
}

/// "Grade 7 Blue"
pub fn full_class_name(grade: Grade, class: ClassLabel) -> String {
    format!("Grade {} {}", grade, class)
}
