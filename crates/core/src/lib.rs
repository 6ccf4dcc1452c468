//! # Timetable Core
//!
//! Domain layer of the school timetable service: value types for days,
//! periods, grades, classes and rooms; the bell schedule; input validation;
//! the store traits that persistence crates implement; and the services that
//! query and mutate the timetable through those traits.
//!
//! Nothing in this crate performs I/O on its own.

pub mod admin;
pub mod clock;
pub mod directory;
pub mod errors;
pub mod models;
pub mod query;
pub mod store;
pub mod validation;

pub use admin::AdminService;
pub use directory::DirectoryService;
pub use errors::{TimetableError, TimetableResult};
pub use query::{QueryAxis, TimetableQueryEngine};
