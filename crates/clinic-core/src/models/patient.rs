//! Patient models.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::DoctorChoice;
use crate::validate::{validate_contact, InvalidFormat};

/// Patient gender as captured on the registration form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

/// Rejection for a gender value outside the form's fixed options.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown gender {given:?}: expected Male or Female")]
pub struct InvalidGender {
    pub given: String,
}

impl FromStr for Gender {
    type Err = InvalidGender;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(InvalidGender {
                given: s.to_string(),
            }),
        }
    }
}

/// A registered patient.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Patient {
    /// Store-generated id; `None` until inserted
    pub id: Option<i64>,
    /// Patient name
    pub name: String,
    /// Age in years
    pub age: u32,
    /// Gender
    pub gender: Gender,
    /// Contact number, always `09` followed by 8 digits
    pub contact: String,
    /// Display label of the doctor picked at registration (`"{id}: {name}"`)
    pub selected_doctor: Option<String>,
    /// Id of the doctor picked at registration
    pub doctor_id: Option<i64>,
    /// Creation timestamp
    pub created_at: String,
}

impl Patient {
    /// Create a new patient pending insertion.
    ///
    /// The contact number is validated up front; a failing contact yields
    /// `InvalidFormat` and no patient value is produced.
    pub fn new(
        name: String,
        age: u32,
        gender: Gender,
        contact: &str,
        doctor: Option<&DoctorChoice>,
    ) -> Result<Self, InvalidFormat> {
        let contact = validate_contact(contact)?;
        Ok(Self {
            id: None,
            name,
            age,
            gender,
            contact: contact.into_inner(),
            selected_doctor: doctor.map(DoctorChoice::label),
            doctor_id: doctor.map(|d| d.id),
            created_at: chrono::Utc::now().to_rfc3339(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_patient_valid_contact() {
        let patient =
            Patient::new("Abel".into(), 30, Gender::Male, "0912345678", None).unwrap();
        assert_eq!(patient.name, "Abel");
        assert_eq!(patient.contact, "0912345678");
        assert_eq!(patient.id, None);
        assert_eq!(patient.selected_doctor, None);
        assert_eq!(patient.doctor_id, None);
    }

    #[test]
    fn test_new_patient_bad_contact_rejected() {
        let result = Patient::new("Abel".into(), 30, Gender::Male, "123456", None);
        let err = result.unwrap_err();
        assert_eq!(err.given, "123456");
    }

    #[test]
    fn test_new_patient_records_doctor_choice() {
        let choice = DoctorChoice {
            id: 3,
            name: "Dr. Hafize".into(),
        };
        let patient =
            Patient::new("Sara".into(), 24, Gender::Female, "0998765432", Some(&choice))
                .unwrap();
        assert_eq!(patient.doctor_id, Some(3));
        assert_eq!(patient.selected_doctor, Some("3: Dr. Hafize".into()));
    }

    #[test]
    fn test_gender_parse() {
        assert_eq!("Male".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("female".parse::<Gender>().unwrap(), Gender::Female);
        assert!("other".parse::<Gender>().is_err());
    }
}
