//! Clinic Core Library
//!
//! Local-first registration and appointment-booking core for a small dental
//! clinic's front desk.
//!
//! # Architecture
//!
//! ```text
//! Form input (raw strings)
//!        │
//!        ▼
//! ┌──────────────────────┐
//! │  validate            │  contact pattern, date rule
//! └──────────┬───────────┘
//!            ▼
//! ┌──────────────────────┐
//! │  models              │  Doctor / Patient / Appointment constructors
//! └──────────┬───────────┘
//!            ▼
//! ┌──────────────────────┐
//! │  db (SQLite)         │  single-statement inserts and listings
//! └──────────┬───────────┘
//!            ▼
//!     Listings / export          (display tables, JSON, CSV)
//! ```
//!
//! # Core Rules
//!
//! - A patient's contact number must be `09` followed by 8 digits; violating
//!   input is rejected at construction, never coerced.
//! - An appointment date is checked at year granularity: past years are
//!   rejected, current-year dates must be strictly after today, and any
//!   future year is accepted outright.
//! - Doctor availability is a stored flag only; it is never cross-checked
//!   against existing appointments, so double-booking a doctor on a date is
//!   possible (known gap).
//!
//! # Modules
//!
//! - [`db`]: SQLite database layer
//! - [`models`]: Domain types (Doctor, Patient, Appointment, etc.)
//! - [`validate`]: Pure input validators
//! - [`export`]: Schedule export (JSON/CSV)

pub mod db;
pub mod export;
pub mod models;
pub mod validate;

// Re-export commonly used types
pub use db::{Database, DbConfig};
pub use export::{ScheduleExport, ScheduleExporter};
pub use models::{
    Appointment, AppointmentStatus, Doctor, DoctorChoice, Gender, Patient, ScheduleEntry,
};
pub use validate::{validate_appointment_date, validate_contact, DateRejected, InvalidFormat};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::sync::{Arc, Mutex};

use chrono::{Local, NaiveDate};
use tracing::{info, warn};

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum ClinicError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid contact: {0}")]
    InvalidContact(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<db::DbError> for ClinicError {
    fn from(e: db::DbError) -> Self {
        match e {
            db::DbError::NotFound(what) => ClinicError::NotFound(what),
            other => ClinicError::DatabaseError(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ClinicError {
    fn from(e: serde_json::Error) -> Self {
        ClinicError::SerializationError(e.to_string())
    }
}

impl From<validate::InvalidFormat> for ClinicError {
    fn from(e: validate::InvalidFormat) -> Self {
        ClinicError::InvalidContact(e.to_string())
    }
}

impl From<validate::DateRejected> for ClinicError {
    fn from(e: validate::DateRejected) -> Self {
        ClinicError::InvalidDate(e.to_string())
    }
}

impl<T> From<std::sync::PoisonError<T>> for ClinicError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        ClinicError::DatabaseError(format!("Lock poisoned: {}", e))
    }
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Open or create a clinic store at the given path.
#[uniffi::export]
pub fn open_clinic(path: String) -> Result<Arc<ClinicCore>, ClinicError> {
    let db = Database::open(&path)?;
    Ok(Arc::new(ClinicCore {
        db: Arc::new(Mutex::new(db)),
    }))
}

/// Create an in-memory clinic store (for testing).
#[uniffi::export]
pub fn open_clinic_in_memory() -> Result<Arc<ClinicCore>, ClinicError> {
    let db = Database::open_in_memory()?;
    Ok(Arc::new(ClinicCore {
        db: Arc::new(Mutex::new(db)),
    }))
}

// =========================================================================
// Main API Object
// =========================================================================

/// Thread-safe store wrapper for the presentation layer.
///
/// The desktop shell supplies raw field strings; malformed numeric, gender
/// and date input is rejected here before any statement is issued, and the
/// returned error messages are meant to be shown verbatim.
#[derive(uniffi::Object)]
pub struct ClinicCore {
    db: Arc<Mutex<Database>>,
}

#[uniffi::export]
impl ClinicCore {
    // =========================================================================
    // Doctor Operations
    // =========================================================================

    /// Register a new doctor.
    pub fn register_doctor(
        &self,
        name: String,
        specialization: String,
        available: bool,
    ) -> Result<FfiDoctor, ClinicError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(ClinicError::InvalidInput("name must not be empty".into()));
        }

        let mut doctor = Doctor::new(name, specialization.trim().to_string(), available);
        let db = self.db.lock()?;
        let id = db.insert_doctor(&doctor)?;
        doctor.id = Some(id);
        info!(doctor_id = id, "doctor registered");
        Ok(doctor.into())
    }

    /// List doctors of a specialization who are flagged available, as
    /// selection choices with display labels.
    pub fn available_doctors(
        &self,
        specialization: String,
    ) -> Result<Vec<FfiDoctorChoice>, ClinicError> {
        let db = self.db.lock()?;
        let choices = db.list_available_doctors(&specialization)?;
        Ok(choices.into_iter().map(|c| c.into()).collect())
    }

    /// List all doctors.
    pub fn list_doctors(&self) -> Result<Vec<FfiDoctor>, ClinicError> {
        let db = self.db.lock()?;
        let doctors = db.list_doctors()?;
        Ok(doctors.into_iter().map(|d| d.into()).collect())
    }

    /// Get a doctor by id.
    pub fn get_doctor(&self, doctor_id: i64) -> Result<Option<FfiDoctor>, ClinicError> {
        let db = self.db.lock()?;
        let doctor = db.get_doctor(doctor_id)?;
        Ok(doctor.map(|d| d.into()))
    }

    /// Toggle a doctor's availability flag.
    pub fn set_doctor_availability(
        &self,
        doctor_id: i64,
        available: bool,
    ) -> Result<bool, ClinicError> {
        let db = self.db.lock()?;
        Ok(db.set_doctor_availability(doctor_id, available)?)
    }

    /// Seed the sample dentists when the store has no doctors yet.
    pub fn seed_demo_doctors(&self) -> Result<u32, ClinicError> {
        let db = self.db.lock()?;
        Ok(db.seed_demo_doctors()? as u32)
    }

    // =========================================================================
    // Patient Operations
    // =========================================================================

    /// Register a new patient from raw form fields.
    ///
    /// `age` must parse as a non-negative whole number and `gender` as one
    /// of the form's fixed options; `doctor_label` is the `"id: name"` entry
    /// the user picked from the availability list, if any.
    pub fn register_patient(
        &self,
        name: String,
        age: String,
        gender: String,
        contact: String,
        doctor_label: Option<String>,
    ) -> Result<FfiPatient, ClinicError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(ClinicError::InvalidInput("name must not be empty".into()));
        }

        let age: u32 = age.trim().parse().map_err(|_| {
            ClinicError::InvalidInput(format!(
                "age must be a non-negative whole number, got {:?}",
                age
            ))
        })?;
        let gender: Gender = gender
            .parse()
            .map_err(|e: models::InvalidGender| ClinicError::InvalidInput(e.to_string()))?;

        let doctor = match &doctor_label {
            Some(label) => Some(DoctorChoice::parse_label(label).ok_or_else(|| {
                ClinicError::InvalidInput(format!("malformed doctor selection {:?}", label))
            })?),
            None => None,
        };

        let mut patient = match Patient::new(name, age, gender, &contact, doctor.as_ref()) {
            Ok(patient) => patient,
            Err(e) => {
                warn!(contact = %e.given, "patient registration rejected");
                return Err(e.into());
            }
        };

        let db = self.db.lock()?;
        let id = db.insert_patient(&patient)?;
        patient.id = Some(id);
        info!(patient_id = id, "patient registered");
        Ok(patient.into())
    }

    /// List all patients.
    pub fn list_patients(&self) -> Result<Vec<FfiPatient>, ClinicError> {
        let db = self.db.lock()?;
        let patients = db.list_patients()?;
        Ok(patients.into_iter().map(|p| p.into()).collect())
    }

    /// Get a patient by id.
    pub fn get_patient(&self, patient_id: i64) -> Result<Option<FfiPatient>, ClinicError> {
        let db = self.db.lock()?;
        let patient = db.get_patient(patient_id)?;
        Ok(patient.map(|p| p.into()))
    }

    /// Search patients by name prefix.
    pub fn search_patients(
        &self,
        query: String,
        limit: u32,
    ) -> Result<Vec<FfiPatient>, ClinicError> {
        let db = self.db.lock()?;
        let patients = db.search_patients(&query, limit as usize)?;
        Ok(patients.into_iter().map(|p| p.into()).collect())
    }

    // =========================================================================
    // Appointment Operations
    // =========================================================================

    /// Book an appointment for a patient with a doctor on a date.
    ///
    /// The date string must be `YYYY-MM-DD` and is validated against today's
    /// local date before anything is written. The doctor id here is
    /// independent of the doctor the patient picked at registration.
    pub fn book_appointment(
        &self,
        patient_id: String,
        doctor_id: i64,
        date: String,
    ) -> Result<FfiAppointment, ClinicError> {
        let patient_id: i64 = patient_id.trim().parse().map_err(|_| {
            ClinicError::InvalidInput(format!(
                "patient id must be a whole number, got {:?}",
                patient_id
            ))
        })?;
        let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
            .map_err(|_| ClinicError::InvalidDate("invalid date format, use YYYY-MM-DD".into()))?;

        let today = Local::now().date_naive();
        if let Err(reason) = validate_appointment_date(date, today) {
            warn!(%date, %reason, "appointment date rejected");
            return Err(reason.into());
        }

        let mut appointment = Appointment::new(patient_id, doctor_id, date);
        let db = self.db.lock()?;
        let id = db.insert_appointment(&appointment)?;
        appointment.id = Some(id);
        info!(
            appointment_id = id,
            patient_id, doctor_id, "appointment booked"
        );
        Ok(appointment.into())
    }

    /// List all appointments.
    pub fn list_appointments(&self) -> Result<Vec<FfiAppointment>, ClinicError> {
        let db = self.db.lock()?;
        let appointments = db.list_appointments()?;
        Ok(appointments.into_iter().map(|a| a.into()).collect())
    }

    /// List appointments for one patient.
    pub fn patient_appointments(
        &self,
        patient_id: i64,
    ) -> Result<Vec<FfiAppointment>, ClinicError> {
        let db = self.db.lock()?;
        let appointments = db.list_appointments_for_patient(patient_id)?;
        Ok(appointments.into_iter().map(|a| a.into()).collect())
    }

    // =========================================================================
    // Export Operations
    // =========================================================================

    /// Export the appointment book as JSON.
    pub fn export_schedule_json(&self) -> Result<String, ClinicError> {
        let db = self.db.lock()?;
        let export = ScheduleExporter::new(&db).export_all()?;
        Ok(export.to_json()?)
    }

    /// Export the appointment book as CSV.
    pub fn export_schedule_csv(&self) -> Result<String, ClinicError> {
        let db = self.db.lock()?;
        let export = ScheduleExporter::new(&db).export_all()?;
        Ok(export.to_csv())
    }
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe doctor.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiDoctor {
    pub id: i64,
    pub name: String,
    pub specialization: String,
    pub available: bool,
}

impl From<Doctor> for FfiDoctor {
    fn from(doctor: Doctor) -> Self {
        Self {
            id: doctor.id.unwrap_or_default(),
            name: doctor.name,
            specialization: doctor.specialization,
            available: doctor.available,
        }
    }
}

/// FFI-safe doctor selection choice.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiDoctorChoice {
    pub id: i64,
    pub label: String,
}

impl From<DoctorChoice> for FfiDoctorChoice {
    fn from(choice: DoctorChoice) -> Self {
        Self {
            label: choice.label(),
            id: choice.id,
        }
    }
}

/// FFI-safe patient.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPatient {
    pub id: i64,
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub contact: String,
    pub selected_doctor: Option<String>,
    pub doctor_id: Option<i64>,
}

impl From<Patient> for FfiPatient {
    fn from(patient: Patient) -> Self {
        Self {
            id: patient.id.unwrap_or_default(),
            name: patient.name,
            age: patient.age,
            gender: patient.gender.as_str().to_string(),
            contact: patient.contact,
            selected_doctor: patient.selected_doctor,
            doctor_id: patient.doctor_id,
        }
    }
}

/// FFI-safe appointment.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiAppointment {
    pub id: i64,
    pub patient_id: i64,
    pub doctor_id: i64,
    pub date: String,
    pub status: String,
}

impl From<Appointment> for FfiAppointment {
    fn from(appointment: Appointment) -> Self {
        Self {
            id: appointment.id.unwrap_or_default(),
            patient_id: appointment.patient_id,
            doctor_id: appointment.doctor_id,
            date: appointment.date.format("%Y-%m-%d").to_string(),
            status: format!("{:?}", appointment.status),
        }
    }
}
