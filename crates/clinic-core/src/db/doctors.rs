//! Doctor database operations.

use rusqlite::{params, OptionalExtension};

use super::{Database, DbResult};
use crate::models::{Doctor, DoctorChoice};

/// Sample dentists loaded into an empty store, matching the clinic's
/// bootstrap data.
const DEMO_DENTISTS: [&str; 10] = [
    "Dr. Rediet",
    "Dr. Natnael",
    "Dr. Hafize",
    "Dr. Yiferu",
    "Dr. Dawit",
    "Dr. Elbetel",
    "Dr. Genet",
    "Dr. Abera",
    "Dr. Tsdeniya",
    "Dr. Lidiya",
];

impl Database {
    /// Insert a new doctor, returning the store-generated id.
    pub fn insert_doctor(&self, doctor: &Doctor) -> DbResult<i64> {
        self.conn.execute(
            r#"
            INSERT INTO doctors (name, specialization, availability, created_at)
            VALUES (?1, ?2, ?3, ?4)
            "#,
            params![
                doctor.name,
                doctor.specialization,
                doctor.available,
                doctor.created_at,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Get a doctor by id.
    pub fn get_doctor(&self, id: i64) -> DbResult<Option<Doctor>> {
        self.conn
            .query_row(
                r#"
                SELECT doctor_id, name, specialization, availability, created_at
                FROM doctors
                WHERE doctor_id = ?
                "#,
                [id],
                |row| {
                    Ok(Doctor {
                        id: Some(row.get(0)?),
                        name: row.get(1)?,
                        specialization: row.get(2)?,
                        available: row.get(3)?,
                        created_at: row.get(4)?,
                    })
                },
            )
            .optional()
            .map_err(Into::into)
    }

    /// List all doctors.
    pub fn list_doctors(&self) -> DbResult<Vec<Doctor>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT doctor_id, name, specialization, availability, created_at
            FROM doctors
            ORDER BY doctor_id
            "#,
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(Doctor {
                id: Some(row.get(0)?),
                name: row.get(1)?,
                specialization: row.get(2)?,
                available: row.get(3)?,
                created_at: row.get(4)?,
            })
        })?;

        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// List doctors of a specialization who are flagged available.
    ///
    /// Availability is only the stored flag; it is never cross-checked
    /// against existing appointments.
    pub fn list_available_doctors(&self, specialization: &str) -> DbResult<Vec<DoctorChoice>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT doctor_id, name
            FROM doctors
            WHERE specialization = ? AND availability = 1
            ORDER BY doctor_id
            "#,
        )?;

        let rows = stmt.query_map([specialization], |row| {
            Ok(DoctorChoice {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        })?;

        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Toggle a doctor's availability flag.
    pub fn set_doctor_availability(&self, id: i64, available: bool) -> DbResult<bool> {
        let rows_affected = self.conn.execute(
            "UPDATE doctors SET availability = ?2 WHERE doctor_id = ?1",
            params![id, available],
        )?;
        Ok(rows_affected > 0)
    }

    /// Seed the sample dentists when the doctors table is empty.
    ///
    /// Returns the number of rows inserted (zero when doctors already exist).
    pub fn seed_demo_doctors(&self) -> DbResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM doctors", [], |row| row.get(0))?;
        if count > 0 {
            return Ok(0);
        }

        for name in DEMO_DENTISTS {
            self.conn.execute(
                r#"
                INSERT INTO doctors (name, specialization, availability, created_at)
                VALUES (?1, 'Dentist', 1, ?2)
                "#,
                params![name, chrono::Utc::now().to_rfc3339()],
            )?;
        }
        Ok(DEMO_DENTISTS.len())
    }
}
