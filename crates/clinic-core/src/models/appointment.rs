//! Appointment models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Appointment lifecycle status. New bookings always start out `Scheduled`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
}

/// A booking linking one patient and one doctor to a date.
///
/// The appointment's `doctor_id` is independent of the doctor the patient
/// picked at registration; nothing ties the two together.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    /// Store-generated id; `None` until inserted
    pub id: Option<i64>,
    /// Patient id
    pub patient_id: i64,
    /// Doctor id
    pub doctor_id: i64,
    /// Appointment date
    pub date: NaiveDate,
    /// Status
    pub status: AppointmentStatus,
    /// Creation timestamp
    pub created_at: String,
}

impl Appointment {
    /// Create a new appointment pending insertion.
    ///
    /// No date check happens here; the booking operation validates the date
    /// before ever constructing one.
    pub fn new(patient_id: i64, doctor_id: i64, date: NaiveDate) -> Self {
        Self {
            id: None,
            patient_id,
            doctor_id,
            date,
            status: AppointmentStatus::Scheduled,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// A display row joining an appointment with its patient and doctor names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduleEntry {
    pub appointment_id: i64,
    pub patient_id: i64,
    pub patient_name: String,
    pub doctor_id: i64,
    pub doctor_name: String,
    pub date: NaiveDate,
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_appointment_starts_scheduled() {
        let date = NaiveDate::from_ymd_opt(2099, 1, 1).unwrap();
        let appointment = Appointment::new(1, 2, date);
        assert_eq!(appointment.status, AppointmentStatus::Scheduled);
        assert_eq!(appointment.patient_id, 1);
        assert_eq!(appointment.doctor_id, 2);
        assert_eq!(appointment.id, None);
    }
}
