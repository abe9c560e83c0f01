//! Appointment database operations.

use chrono::NaiveDate;
use rusqlite::{params, OptionalExtension, Row};

use super::{Database, DbError, DbResult};
use crate::models::{Appointment, AppointmentStatus, ScheduleEntry};

fn appointment_from_row(row: &Row<'_>) -> rusqlite::Result<AppointmentRow> {
    Ok(AppointmentRow {
        id: row.get(0)?,
        patient_id: row.get(1)?,
        doctor_id: row.get(2)?,
        date: row.get(3)?,
        status: row.get(4)?,
        created_at: row.get(5)?,
    })
}

impl Database {
    /// Insert a new appointment, returning the store-generated id.
    ///
    /// Callers validate the date before constructing the appointment; this
    /// is a single append-only statement.
    pub fn insert_appointment(&self, appointment: &Appointment) -> DbResult<i64> {
        self.conn.execute(
            r#"
            INSERT INTO appointments (
                patient_id, doctor_id, appointment_date, status, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![
                appointment.patient_id,
                appointment.doctor_id,
                appointment.date,
                status_to_string(&appointment.status),
                appointment.created_at,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Get an appointment by id.
    pub fn get_appointment(&self, id: i64) -> DbResult<Option<Appointment>> {
        self.conn
            .query_row(
                r#"
                SELECT appointment_id, patient_id, doctor_id,
                       appointment_date, status, created_at
                FROM appointments
                WHERE appointment_id = ?
                "#,
                [id],
                appointment_from_row,
            )
            .optional()?
            .map(Appointment::try_from)
            .transpose()
    }

    /// List all appointments.
    pub fn list_appointments(&self) -> DbResult<Vec<Appointment>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT appointment_id, patient_id, doctor_id,
                   appointment_date, status, created_at
            FROM appointments
            ORDER BY appointment_id
            "#,
        )?;

        let rows = stmt.query_map([], appointment_from_row)?;

        let mut appointments = Vec::new();
        for row in rows {
            appointments.push(row?.try_into()?);
        }
        Ok(appointments)
    }

    /// List all appointments for a patient.
    pub fn list_appointments_for_patient(&self, patient_id: i64) -> DbResult<Vec<Appointment>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT appointment_id, patient_id, doctor_id,
                   appointment_date, status, created_at
            FROM appointments
            WHERE patient_id = ?
            ORDER BY appointment_date
            "#,
        )?;

        let rows = stmt.query_map([patient_id], appointment_from_row)?;

        let mut appointments = Vec::new();
        for row in rows {
            appointments.push(row?.try_into()?);
        }
        Ok(appointments)
    }

    /// List the full schedule with patient and doctor names, for display
    /// and export.
    pub fn list_schedule(&self) -> DbResult<Vec<ScheduleEntry>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT a.appointment_id, a.patient_id, p.name,
                   a.doctor_id, d.name, a.appointment_date, a.status
            FROM appointments a
            JOIN patients p ON p.patient_id = a.patient_id
            JOIN doctors d ON d.doctor_id = a.doctor_id
            ORDER BY a.appointment_date, a.appointment_id
            "#,
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(ScheduleEntry {
                appointment_id: row.get(0)?,
                patient_id: row.get(1)?,
                patient_name: row.get(2)?,
                doctor_id: row.get(3)?,
                doctor_name: row.get(4)?,
                date: row.get(5)?,
                status: row.get(6)?,
            })
        })?;

        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }
}

/// Intermediate row struct for database mapping.
struct AppointmentRow {
    id: i64,
    patient_id: i64,
    doctor_id: i64,
    date: NaiveDate,
    status: String,
    created_at: String,
}

impl TryFrom<AppointmentRow> for Appointment {
    type Error = DbError;

    fn try_from(row: AppointmentRow) -> Result<Self, Self::Error> {
        let status = string_to_status(&row.status)?;

        Ok(Appointment {
            id: Some(row.id),
            patient_id: row.patient_id,
            doctor_id: row.doctor_id,
            date: row.date,
            status,
            created_at: row.created_at,
        })
    }
}

fn status_to_string(status: &AppointmentStatus) -> &'static str {
    match status {
        AppointmentStatus::Scheduled => "Scheduled",
        AppointmentStatus::Completed => "Completed",
        AppointmentStatus::Cancelled => "Cancelled",
    }
}

fn string_to_status(s: &str) -> Result<AppointmentStatus, DbError> {
    match s {
        "Scheduled" => Ok(AppointmentStatus::Scheduled),
        "Completed" => Ok(AppointmentStatus::Completed),
        "Cancelled" => Ok(AppointmentStatus::Cancelled),
        _ => Err(DbError::Constraint(format!(
            "Unknown appointment status: {}",
            s
        ))),
    }
}
