pub mod auth;
pub mod classroom;
pub mod grade;
pub mod teacher;
pub mod timetable;

use timetable_core::errors::TimetableError;
use uuid::Uuid;

/// Ids arrive as raw path segments; one that is not a UUID cannot exist.
pub(crate) fn parse_id(raw: &str, not_found: &str) -> Result<Uuid, TimetableError> {
    raw.trim()
        .parse()
        .map_err(|_| TimetableError::not_found(not_found))
}
