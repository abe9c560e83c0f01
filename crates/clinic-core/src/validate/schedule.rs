//! Appointment date validation.

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

/// Rejection for a proposed appointment date.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRejected {
    #[error("appointment year cannot be in the past")]
    YearInPast,

    #[error("appointment date must be after today in the current year")]
    NotAfterToday,
}

/// Validate a proposed appointment date against a reference "today".
///
/// The check is year-granular: a past year is rejected, a date in the
/// current year must be strictly after today, and any future year is
/// accepted outright regardless of month and day. Jan 1 of next year
/// therefore passes even when today is Dec 31.
pub fn validate_appointment_date(proposed: NaiveDate, today: NaiveDate) -> Result<(), DateRejected> {
    if proposed.year() < today.year() {
        return Err(DateRejected::YearInPast);
    }
    if proposed.year() == today.year() && proposed <= today {
        return Err(DateRejected::NotAfterToday);
    }
    Ok(())
}
