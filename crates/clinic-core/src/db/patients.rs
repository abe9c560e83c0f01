//! Patient database operations.

use rusqlite::{params, OptionalExtension, Row};

use super::{Database, DbError, DbResult};
use crate::models::{Gender, Patient};

fn patient_from_row(row: &Row<'_>) -> rusqlite::Result<PatientRow> {
    Ok(PatientRow {
        id: row.get(0)?,
        name: row.get(1)?,
        age: row.get(2)?,
        gender: row.get(3)?,
        contact: row.get(4)?,
        selected_doctor: row.get(5)?,
        doctor_id: row.get(6)?,
        created_at: row.get(7)?,
    })
}

impl Database {
    /// Insert a new patient, returning the store-generated id.
    pub fn insert_patient(&self, patient: &Patient) -> DbResult<i64> {
        self.conn.execute(
            r#"
            INSERT INTO patients (
                name, age, gender, contact, selected_doctor, doctor_id, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
            params![
                patient.name,
                patient.age,
                patient.gender.as_str(),
                patient.contact,
                patient.selected_doctor,
                patient.doctor_id,
                patient.created_at,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Get a patient by id.
    pub fn get_patient(&self, id: i64) -> DbResult<Option<Patient>> {
        self.conn
            .query_row(
                r#"
                SELECT patient_id, name, age, gender, contact,
                       selected_doctor, doctor_id, created_at
                FROM patients
                WHERE patient_id = ?
                "#,
                [id],
                patient_from_row,
            )
            .optional()?
            .map(Patient::try_from)
            .transpose()
    }

    /// List all patients.
    pub fn list_patients(&self) -> DbResult<Vec<Patient>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT patient_id, name, age, gender, contact,
                   selected_doctor, doctor_id, created_at
            FROM patients
            ORDER BY patient_id
            "#,
        )?;

        let rows = stmt.query_map([], patient_from_row)?;

        let mut patients = Vec::new();
        for row in rows {
            patients.push(row?.try_into()?);
        }
        Ok(patients)
    }

    /// Search patients by name (prefix match).
    pub fn search_patients(&self, query: &str, limit: usize) -> DbResult<Vec<Patient>> {
        let pattern = format!("{}%", query);
        let mut stmt = self.conn.prepare(
            r#"
            SELECT patient_id, name, age, gender, contact,
                   selected_doctor, doctor_id, created_at
            FROM patients
            WHERE name LIKE ?
            ORDER BY name
            LIMIT ?
            "#,
        )?;

        let rows = stmt.query_map(params![pattern, limit as i64], patient_from_row)?;

        let mut patients = Vec::new();
        for row in rows {
            patients.push(row?.try_into()?);
        }
        Ok(patients)
    }
}

/// Intermediate row struct for database mapping.
struct PatientRow {
    id: i64,
    name: String,
    age: u32,
    gender: String,
    contact: String,
    selected_doctor: Option<String>,
    doctor_id: Option<i64>,
    created_at: String,
}

impl TryFrom<PatientRow> for Patient {
    type Error = DbError;

    fn try_from(row: PatientRow) -> Result<Self, Self::Error> {
        let gender: Gender = row
            .gender
            .parse()
            .map_err(|_| DbError::Constraint(format!("Unknown gender: {}", row.gender)))?;

        Ok(Patient {
            id: Some(row.id),
            name: row.name,
            age: row.age,
            gender,
            contact: row.contact,
            selected_doctor: row.selected_doctor,
            doctor_id: row.doctor_id,
            created_at: row.created_at,
        })
    }
}
