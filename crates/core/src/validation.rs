//! Entity validators.
//!
//! The `is_valid_*` predicates answer membership questions about raw input.
//! The `parse_*` functions turn raw write input into typed values and fail
//! with [`TimetableError::Validation`]. Read paths never call the `parse_*`
//! functions with error propagation; an unparseable filter just matches
//! nothing.

use crate::{
    errors::{TimetableError, TimetableResult},
    models::{
        calendar::{Day, Period},
        class_group::{ClassLabel, Grade},
        entry::{CreateEntryRequest, NewTimetableEntry},
        room::RoomNumber,
        time_slot::BreakType,
    },
};

/// Placeholder teacher name and subject stored on break entries.
pub const BREAK_PLACEHOLDER: &str = "Break";
/// Room stored on break entries when none is given.
pub const BREAK_DEFAULT_ROOM: &str = "101";

pub fn is_valid_room_number(value: &str) -> bool {
    match value.trim().parse::<u16>() {
        Ok(number) => (101..=110).contains(&number) || (201..=207).contains(&number),
        Err(_) => false,
    }
}

pub fn is_valid_day(value: &str) -> bool {
    value.parse::<Day>().is_ok()
}

pub fn is_valid_grade(value: i64) -> bool {
    Grade::new(value).is_ok()
}

pub fn is_valid_class(value: &str) -> bool {
    value.parse::<ClassLabel>().is_ok()
}

pub fn is_valid_period(value: i64) -> bool {
    Period::new(value).is_ok()
}

pub fn parse_period(value: i64) -> TimetableResult<Period> {
    Period::new(value).map_err(|_| {
        TimetableError::validation(format!(
            "Period must be between {} and {}",
            Period::FIRST,
            Period::LAST
        ))
    })
}

/// Trims a required free-text field, rejecting blanks.
pub fn required_text(field: &str, value: Option<&str>) -> TimetableResult<String> {
    match value.map(str::trim) {
        Some(text) if !text.is_empty() => Ok(text.to_string()),
        _ => Err(TimetableError::validation(format!("{} is required", field))),
    }
}

/// Validates a raw entry and fills break placeholders.
pub fn validate_entry(request: CreateEntryRequest) -> TimetableResult<NewTimetableEntry> {
    let day: Day = request.day.trim().parse()?;
    let period = parse_period(request.period)?;
    let grade = Grade::new(request.grade)?;
    let class: ClassLabel = request.class.trim().parse()?;

    let break_type = match request.break_type.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => Some(raw.parse::<BreakType>()?),
    };

    let (room_number, teacher_name, teacher_subject) = if request.is_break {
        if break_type.is_none() {
            return Err(TimetableError::validation(
                "Break entries need a break type (Tea Break or Lunch Break)",
            ));
        }
        (
            request
                .room_number
                .as_deref()
                .filter(|room| !room.trim().is_empty())
                .unwrap_or(BREAK_DEFAULT_ROOM)
                .parse::<RoomNumber>()?,
            required_text("teacherName", request.teacher_name.as_deref())
                .unwrap_or_else(|_| BREAK_PLACEHOLDER.to_string()),
            required_text("teacherSubject", request.teacher_subject.as_deref())
                .unwrap_or_else(|_| BREAK_PLACEHOLDER.to_string()),
        )
    } else {
        if break_type.is_some() {
            return Err(TimetableError::validation(
                "breakType is only allowed on break entries",
            ));
        }
        (
            required_text("roomNumber", request.room_number.as_deref())?.parse::<RoomNumber>()?,
            required_text("teacherName", request.teacher_name.as_deref())?,
            required_text("teacherSubject", request.teacher_subject.as_deref())?,
        )
    };

    Ok(NewTimetableEntry {
        day,
        period,
        room_number,
        teacher_name,
        teacher_subject,
        grade,
        class,
        is_break: request.is_break,
        break_type,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("101", true)]
    #[case("110", true)]
    #[case("201", true)]
    #[case("207", true)]
    #[case(" 105 ", true)]
    #[case("100", false)]
    #[case("111", false)]
    #[case("200", false)]
    #[case("208", false)]
    #[case("", false)]
    #[case("10a", false)]
    #[case("-101", false)]
    fn room_number_ranges(#[case] room: &str, #[case] valid: bool) {
        assert_eq!(is_valid_room_number(room), valid);
    }

    #[test]
    fn room_predicate_matches_numeric_ranges_exhaustively() {
        for number in 0u16..=999 {
            let expected = (101..=110).contains(&number) || (201..=207).contains(&number);
            assert_eq!(is_valid_room_number(&number.to_string()), expected, "{number}");
        }
    }

    #[rstest]
    #[case("Monday", true)]
    #[case("Friday", true)]
    #[case("Saturday", false)]
    #[case("monday", false)]
    fn day_membership(#[case] day: &str, #[case] valid: bool) {
        assert_eq!(is_valid_day(day), valid);
    }

    #[rstest]
    #[case(4, false)]
    #[case(5, true)]
    #[case(11, true)]
    #[case(12, false)]
    fn grade_membership(#[case] grade: i64, #[case] valid: bool) {
        assert_eq!(is_valid_grade(grade), valid);
    }

    #[rstest]
    #[case("Green", true)]
    #[case("Blue", true)]
    #[case("Red", false)]
    #[case("green", false)]
    fn class_membership(#[case] class: &str, #[case] valid: bool) {
        assert_eq!(is_valid_class(class), valid);
    }

    fn lesson() -> CreateEntryRequest {
        CreateEntryRequest {
            day: "Monday".into(),
            period: 1,
            room_number: Some("102".into()),
            teacher_name: Some("  Sarah Johnson ".into()),
            teacher_subject: Some("Mathematics".into()),
            grade: 5,
            class: "Green".into(),
            is_break: false,
            break_type: None,
        }
    }

    #[test]
    fn lesson_fields_are_trimmed() {
        let entry = validate_entry(lesson()).unwrap();
        assert_eq!(entry.teacher_name, "Sarah Johnson");
        assert_eq!(entry.room_number.to_string(), "102");
    }

    #[test]
    fn break_entries_get_placeholders() {
        let request = CreateEntryRequest {
            period: 3,
            room_number: None,
            teacher_name: None,
            teacher_subject: None,
            is_break: true,
            break_type: Some("Tea Break".into()),
            ..lesson()
        };
        let entry = validate_entry(request).unwrap();
        assert_eq!(entry.teacher_name, BREAK_PLACEHOLDER);
        assert_eq!(entry.teacher_subject, BREAK_PLACEHOLDER);
        assert_eq!(entry.room_number.to_string(), BREAK_DEFAULT_ROOM);
        assert_eq!(entry.break_type, Some(BreakType::Tea));
    }

    #[test]
    fn break_without_type_is_rejected() {
        let request = CreateEntryRequest {
            is_break: true,
            ..lesson()
        };
        assert!(matches!(validate_entry(request), Err(TimetableError::Validation(_))));
    }

    #[test]
    fn lesson_with_break_type_is_rejected() {
        let request = CreateEntryRequest {
            break_type: Some("Lunch Break".into()),
            ..lesson()
        };
        assert!(matches!(validate_entry(request), Err(TimetableError::Validation(_))));
    }

    #[rstest]
    #[case(CreateEntryRequest { day: "Sunday".into(), ..lesson() })]
    #[case(CreateEntryRequest { period: 8, ..lesson() })]
    #[case(CreateEntryRequest { grade: 12, ..lesson() })]
    #[case(CreateEntryRequest { class: "Red".into(), ..lesson() })]
    #[case(CreateEntryRequest { room_number: Some("111".into()), ..lesson() })]
    #[case(CreateEntryRequest { teacher_name: Some("   ".into()), ..lesson() })]
    #[case(CreateEntryRequest { teacher_subject: None, ..lesson() })]
    fn invalid_fields_fail_validation(#[case] request: CreateEntryRequest) {
        assert!(matches!(validate_entry(request), Err(TimetableError::Validation(_))));
    }
}
