use chrono::Utc;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{from_str, json, to_string, to_value};
use serde_test::{assert_de_tokens_error, assert_tokens, Token};
use timetable_core::models::{
    admin::{AdminProfile, LoginResponse},
    calendar::{Day, Period},
    class_group::{ClassLabel, Grade},
    classroom::Classroom,
    entry::{CreateEntryRequest, TimetableEntry, UpdateEntryRequest},
    room::RoomNumber,
    teacher::{Teacher, TeacherFilter},
};
use uuid::Uuid;

#[test]
fn test_day_tokens() {
    assert_tokens(
        &Day::Thursday,
        &[Token::UnitVariant {
            name: "Day",
            variant: "Thursday",
        }],
    );
}

#[test]
fn test_period_tokens() {
    assert_tokens(&Period::new(6).unwrap(), &[Token::U8(6)]);
    assert_de_tokens_error::<Period>(&[Token::U8(9)], "Unknown period: 9 (periods run from 1 to 7)");
}

#[test]
fn test_room_number_tokens() {
    let room: RoomNumber = "207".parse().unwrap();
    assert_tokens(&room, &[Token::Str("207")]);
    assert_de_tokens_error::<RoomNumber>(
        &[Token::Str("208")],
        "Validation error: Room number must be between 101-110 or 201-207",
    );
}

#[test]
fn test_entry_round_trip() {
    let now = Utc::now();
    let entry = TimetableEntry {
        id: Uuid::new_v4(),
        day: Day::Friday,
        period: Period::new(7).unwrap(),
        room_number: "106".parse().unwrap(),
        teacher_name: "Emily Davis".to_string(),
        teacher_subject: "Biology".to_string(),
        grade: Grade::new(10).unwrap(),
        class: ClassLabel::Blue,
        is_break: false,
        break_type: None,
        created_at: now,
        updated_at: now,
    };

    let json = to_string(&entry).expect("Failed to serialize entry");
    let deserialized: TimetableEntry = from_str(&json).expect("Failed to deserialize entry");

    assert_eq!(deserialized, entry);
}

#[test]
fn test_create_request_defaults() {
    let request: CreateEntryRequest = from_str(
        r#"{"day":"Monday","period":3,"grade":6,"class":"Green","isBreak":true,"breakType":"Tea Break"}"#,
    )
    .expect("Failed to deserialize create request");

    assert_eq!(request.room_number, None);
    assert_eq!(request.teacher_name, None);
    assert!(request.is_break);
    assert_eq!(request.break_type.as_deref(), Some("Tea Break"));
}

#[test]
fn test_update_request_is_partial() {
    let request: UpdateEntryRequest =
        from_str(r#"{"roomNumber":"204"}"#).expect("Failed to deserialize update request");

    assert_eq!(request.room_number.as_deref(), Some("204"));
    assert_eq!(request.day, None);
    assert_eq!(request.is_break, None);
}

#[test]
fn test_classroom_view_has_floor() {
    let now = Utc::now();
    let classroom = Classroom {
        id: Uuid::nil(),
        room_number: "203".parse().unwrap(),
        is_active: true,
        created_at: now,
        updated_at: now,
    };

    let value = to_value(classroom.into_view()).unwrap();
    assert_eq!(value["roomNumber"], json!("203"));
    assert_eq!(value["floor"], json!(2));
    assert_eq!(value["isActive"], json!(true));
}

#[rstest]
#[case(true, "math", true, true)]
#[case(true, "MATH", false, false)]
#[case(false, "Math", false, true)]
#[case(false, "Physics", true, false)]
fn test_teacher_filter(
    #[case] active_only: bool,
    #[case] subject: &str,
    #[case] is_active: bool,
    #[case] expected: bool,
) {
    let now = Utc::now();
    let teacher = Teacher {
        id: Uuid::new_v4(),
        name: "Sarah Johnson".to_string(),
        subject: "Mathematics".to_string(),
        is_active,
        created_at: now,
        updated_at: now,
    };
    let filter = TeacherFilter {
        active_only,
        subject: Some(subject.to_string()),
    };

    assert_eq!(filter.matches(&teacher), expected);
}

#[test]
fn test_login_response_shape() {
    let response = LoginResponse {
        token: "abc".to_string(),
        expires_at: Utc::now(),
        admin: AdminProfile {
            id: Uuid::nil(),
            username: "admin".to_string(),
            role: "admin".to_string(),
        },
    };

    let value = to_value(&response).unwrap();
    assert!(value.get("expiresAt").is_some());
    assert_eq!(value["admin"]["username"], json!("admin"));
    assert!(value["admin"].get("password_hash").is_none());
}
