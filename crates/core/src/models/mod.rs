pub mod admin;
pub mod calendar;
pub mod catalog;
pub mod class_group;
pub mod classroom;
pub mod entry;
pub mod room;
pub mod teacher;
pub mod time_slot;
pub mod view;

pub use calendar::{Day, Period};
pub use class_group::{ClassLabel, Grade};
pub use entry::{SlotKey, TimetableEntry};
pub use room::RoomNumber;
pub use time_slot::{BreakType, TimeSlot};
