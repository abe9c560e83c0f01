//! Input validation for registration and booking.
//!
//! Both validators are pure: they take the raw value (plus a reference date
//! for the schedule check) and return a typed rejection the presentation
//! layer can show verbatim. No storage access happens here.

mod contact;
mod schedule;

pub use contact::*;
pub use schedule::*;
