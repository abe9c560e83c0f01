//! Doctor models.

use serde::{Deserialize, Serialize};

/// A doctor (provider) record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Doctor {
    /// Store-generated id; `None` until inserted
    pub id: Option<i64>,
    /// Display name
    pub name: String,
    /// Specialization (e.g., "Dentist")
    pub specialization: String,
    /// Whether the doctor appears in selection lists
    pub available: bool,
    /// Creation timestamp
    pub created_at: String,
}

impl Doctor {
    /// Create a new doctor pending insertion.
    pub fn new(name: String, specialization: String, available: bool) -> Self {
        Self {
            id: None,
            name,
            specialization,
            available,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// An `(id, name)` pair from the availability listing.
///
/// The presentation layer shows these as `"{id}: {name}"` and hands the same
/// label back when the user picks one, so the label must round-trip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DoctorChoice {
    pub id: i64,
    pub name: String,
}

impl DoctorChoice {
    /// Render the selection label shown in doctor pickers.
    pub fn label(&self) -> String {
        format!("{}: {}", self.id, self.name)
    }

    /// Parse a selection label back into a choice.
    ///
    /// Returns `None` when the label does not carry a leading numeric id.
    pub fn parse_label(label: &str) -> Option<Self> {
        let (id_part, name_part) = label.split_once(':')?;
        let id = id_part.trim().parse().ok()?;
        Some(Self {
            id,
            name: name_part.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_doctor() {
        let doctor = Doctor::new("Dr. Test".into(), "Dentist".into(), true);
        assert_eq!(doctor.id, None);
        assert_eq!(doctor.name, "Dr. Test");
        assert!(doctor.available);
    }

    #[test]
    fn test_choice_label_round_trip() {
        let choice = DoctorChoice {
            id: 7,
            name: "Dr. Rediet".into(),
        };
        let label = choice.label();
        assert_eq!(label, "7: Dr. Rediet");
        assert_eq!(DoctorChoice::parse_label(&label), Some(choice));
    }

    #[test]
    fn test_parse_label_rejects_garbage() {
        assert_eq!(DoctorChoice::parse_label("Dr. Rediet"), None);
        assert_eq!(DoctorChoice::parse_label("x: Dr. Rediet"), None);
        assert_eq!(DoctorChoice::parse_label(""), None);
    }
}
