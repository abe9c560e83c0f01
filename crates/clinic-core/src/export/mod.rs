//! Schedule export for front-desk hand-off.
//!
//! Produces the appointment book (with patient and doctor names joined in)
//! as JSON or CSV.

use serde::{Deserialize, Serialize};

use crate::db::{Database, DbResult};
use crate::models::ScheduleEntry;

/// Batch schedule export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleExport {
    /// Export timestamp
    pub exported_at: String,
    /// Appointment rows, ordered by date
    pub entries: Vec<ScheduleEntry>,
    /// Total row count
    pub total: usize,
}

impl ScheduleExport {
    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Export to CSV format.
    pub fn to_csv(&self) -> String {
        let mut csv = String::new();

        // Header
        csv.push_str("appointment_id,patient_id,patient_name,doctor_id,doctor_name,date,status\n");

        // Lines
        for entry in &self.entries {
            csv.push_str(&format!(
                "{},{},{},{},{},{},{}\n",
                entry.appointment_id,
                entry.patient_id,
                escape_csv(&entry.patient_name),
                entry.doctor_id,
                escape_csv(&entry.doctor_name),
                entry.date.format("%Y-%m-%d"),
                escape_csv(&entry.status),
            ));
        }

        csv
    }
}

/// Schedule exporter.
pub struct ScheduleExporter<'a> {
    db: &'a Database,
}

impl<'a> ScheduleExporter<'a> {
    /// Create a new schedule exporter.
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Export the full appointment book.
    pub fn export_all(&self) -> DbResult<ScheduleExport> {
        let entries = self.db.list_schedule()?;
        let total = entries.len();

        Ok(ScheduleExport {
            exported_at: chrono::Utc::now().to_rfc3339(),
            entries,
            total,
        })
    }
}

/// Escape a string for CSV output.
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Appointment, Doctor, Gender, Patient};
    use chrono::NaiveDate;

    fn setup_db_with_schedule() -> Database {
        let db = Database::open_in_memory().unwrap();

        let doctor_id = db
            .insert_doctor(&Doctor::new("Dr. Test".into(), "Dentist".into(), true))
            .unwrap();
        let patient = Patient::new("Abel".into(), 30, Gender::Male, "0912345678", None).unwrap();
        let patient_id = db.insert_patient(&patient).unwrap();

        let date = NaiveDate::from_ymd_opt(2099, 1, 1).unwrap();
        db.insert_appointment(&Appointment::new(patient_id, doctor_id, date))
            .unwrap();
        db
    }

    #[test]
    fn test_export_all() {
        let db = setup_db_with_schedule();
        let exporter = ScheduleExporter::new(&db);

        let export = exporter.export_all().unwrap();
        assert_eq!(export.total, 1);
        assert_eq!(export.entries[0].patient_name, "Abel");
    }

    #[test]
    fn test_export_json() {
        let db = setup_db_with_schedule();
        let export = ScheduleExporter::new(&db).export_all().unwrap();

        let json = export.to_json().unwrap();
        assert!(json.contains("Abel"));
        assert!(json.contains("Dr. Test"));
        assert!(json.contains("Scheduled"));
    }

    #[test]
    fn test_export_csv() {
        let db = setup_db_with_schedule();
        let export = ScheduleExporter::new(&db).export_all().unwrap();

        let csv = export.to_csv();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 2); // Header + 1 row
        assert!(lines[0].contains("appointment_id"));
        assert!(lines[1].contains("Abel"));
        assert!(lines[1].contains("2099-01-01"));
    }

    #[test]
    fn test_csv_escaping() {
        assert_eq!(escape_csv("simple"), "simple");
        assert_eq!(escape_csv("with,comma"), "\"with,comma\"");
        assert_eq!(escape_csv("with\"quote"), "\"with\"\"quote\"");
    }
}
