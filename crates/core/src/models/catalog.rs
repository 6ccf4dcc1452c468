//! Static school catalog: the grades with their classes, and the subject list.

use serde::Serialize;

use crate::{
    errors::{TimetableError, TimetableResult},
    models::class_group::{ClassLabel, Grade},
};

pub const SUBJECTS: [&str; 20] = [
    "Mathematics",
    "English",
    "Science",
    "History",
    "Geography",
    "Physical Education",
    "Art",
    "Music",
    "Computer Science",
    "Literature",
    "Physics",
    "Chemistry",
    "Biology",
    "Economics",
    "Psychology",
    "Sociology",
    "Foreign Language",
    "Religious Studies",
    "Technology",
    "Health Education",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GradeInfo {
    pub id: Grade,
    pub name: String,
    pub classes: Vec<ClassLabel>,
}

impl GradeInfo {
    fn new(grade: Grade) -> Self {
        Self {
            id: grade,
            name: format!("Grade {}", grade),
            classes: ClassLabel::ALL.to_vec(),
        }
    }
}

pub fn grades() -> Vec<GradeInfo> {
    Grade::all().map(GradeInfo::new).collect()
}

/// Grade lookup by raw id; anything outside 5-11 is not found.
pub fn grade(id: &str) -> TimetableResult<GradeInfo> {
    id.trim()
        .parse::<i64>()
        .ok()
        .and_then(|value| Grade::new(value).ok())
        .map(GradeInfo::new)
        .ok_or_else(|| TimetableError::not_found(format!("Grade {} not found", id)))
}

/// Subjects of a category. Unknown categories get the full list.
pub fn subjects_in_category(category: &str) -> Vec<&'static str> {
    match category.to_lowercase().as_str() {
        "core" => vec!["Mathematics", "English", "Science", "History", "Geography"],
        "arts" => vec!["Art", "Music", "Physical Education"],
        "sciences" => vec!["Physics", "Chemistry", "Biology", "Computer Science"],
        "humanities" => vec![
            "Literature",
            "Economics",
            "Psychology",
            "Sociology",
            "Religious Studies",
        ],
        _ => SUBJECTS.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_grade_has_both_classes() {
        let grades = grades();
        assert_eq!(grades.len(), 7);
        assert_eq!(grades[0].name, "Grade 5");
        assert!(grades.iter().all(|g| g.classes == vec![ClassLabel::Green, ClassLabel::Blue]));
    }

    #[test]
    fn grade_lookup() {
        assert_eq!(grade("10").unwrap().name, "Grade 10");
        assert!(matches!(grade("4"), Err(TimetableError::NotFound(_))));
        assert!(matches!(grade("ten"), Err(TimetableError::NotFound(_))));
    }

    #[test]
    fn categories_are_case_insensitive() {
        assert_eq!(subjects_in_category("ARTS"), vec!["Art", "Music", "Physical Education"]);
        assert_eq!(subjects_in_category("whatever").len(), SUBJECTS.len());
    }
}
