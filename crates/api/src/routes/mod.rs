pub mod auth;
pub mod classroom;
pub mod grade;
pub mod health;
pub mod teacher;
pub mod timetable;
