//! End-to-end tests for the registration and booking flow through the
//! public API object.

use clinic_core::{open_clinic_in_memory, ClinicError};

#[test]
fn test_register_doctor_appears_in_availability_list() {
    let core = open_clinic_in_memory().unwrap();

    let doctor = core
        .register_doctor("Dr. Test".into(), "Dentist".into(), true)
        .unwrap();
    assert!(doctor.id > 0);

    let choices = core.available_doctors("Dentist".into()).unwrap();
    assert_eq!(choices.len(), 1);
    assert_eq!(choices[0].id, doctor.id);
    assert_eq!(choices[0].label, format!("{}: Dr. Test", doctor.id));
}

#[test]
fn test_unavailable_doctor_not_listed() {
    let core = open_clinic_in_memory().unwrap();

    let doctor = core
        .register_doctor("Dr. Busy".into(), "Dentist".into(), false)
        .unwrap();
    assert!(core.available_doctors("Dentist".into()).unwrap().is_empty());

    // Flipping the flag puts them back in the list
    assert!(core.set_doctor_availability(doctor.id, true).unwrap());
    assert_eq!(core.available_doctors("Dentist".into()).unwrap().len(), 1);

    let stored = core.get_doctor(doctor.id).unwrap().unwrap();
    assert!(stored.available);
}

#[test]
fn test_full_booking_flow() {
    let core = open_clinic_in_memory().unwrap();

    // Register a doctor and pick them the way the form does, via the label
    let doctor = core
        .register_doctor("Dr. Test".into(), "Dentist".into(), true)
        .unwrap();
    let choices = core.available_doctors("Dentist".into()).unwrap();
    let label = choices[0].label.clone();

    // Register a patient referencing that doctor
    let patient = core
        .register_patient(
            "Abel".into(),
            "30".into(),
            "Male".into(),
            "0912345678".into(),
            Some(label.clone()),
        )
        .unwrap();
    assert!(patient.id > 0);
    assert_eq!(patient.doctor_id, Some(doctor.id));
    assert_eq!(patient.selected_doctor, Some(label));

    let listed = core.list_patients().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "Abel");

    // Book a far-future date; future years pass the year-granular check
    let appointment = core
        .book_appointment(patient.id.to_string(), doctor.id, "2099-01-01".into())
        .unwrap();
    assert_eq!(appointment.status, "Scheduled");
    assert_eq!(appointment.date, "2099-01-01");

    let appointments = core.list_appointments().unwrap();
    assert_eq!(appointments.len(), 1);
    assert_eq!(appointments[0].patient_id, patient.id);
    assert_eq!(appointments[0].doctor_id, doctor.id);

    let for_patient = core.patient_appointments(patient.id).unwrap();
    assert_eq!(for_patient.len(), 1);
    assert_eq!(for_patient[0].id, appointment.id);
}

#[test]
fn test_booking_doctor_independent_of_registration_choice() {
    let core = open_clinic_in_memory().unwrap();

    let chosen = core
        .register_doctor("Dr. Chosen".into(), "Dentist".into(), true)
        .unwrap();
    let other = core
        .register_doctor("Dr. Other".into(), "Dentist".into(), true)
        .unwrap();

    let patient = core
        .register_patient(
            "Sara".into(),
            "24".into(),
            "Female".into(),
            "0998765432".into(),
            Some(format!("{}: Dr. Chosen", chosen.id)),
        )
        .unwrap();

    // Booking with a different doctor than the one picked at registration
    // is allowed; nothing ties the two ids together.
    let appointment = core
        .book_appointment(patient.id.to_string(), other.id, "2099-06-01".into())
        .unwrap();
    assert_eq!(appointment.doctor_id, other.id);

    let stored = core.get_patient(patient.id).unwrap().unwrap();
    assert_eq!(stored.doctor_id, Some(chosen.id));
}

#[test]
fn test_invalid_contact_rejected_before_persistence() {
    let core = open_clinic_in_memory().unwrap();

    let result = core.register_patient(
        "Abel".into(),
        "30".into(),
        "Male".into(),
        "123456".into(),
        None,
    );
    assert!(matches!(result, Err(ClinicError::InvalidContact(_))));
    assert!(core.list_patients().unwrap().is_empty());
}

#[test]
fn test_malformed_age_rejected() {
    let core = open_clinic_in_memory().unwrap();

    for age in ["abc", "-3", "4.5", ""] {
        let result = core.register_patient(
            "Abel".into(),
            age.into(),
            "Male".into(),
            "0912345678".into(),
            None,
        );
        assert!(
            matches!(result, Err(ClinicError::InvalidInput(_))),
            "age {:?} should be rejected",
            age
        );
    }
    assert!(core.list_patients().unwrap().is_empty());
}

#[test]
fn test_unknown_gender_rejected() {
    let core = open_clinic_in_memory().unwrap();

    let result = core.register_patient(
        "Abel".into(),
        "30".into(),
        "Other".into(),
        "0912345678".into(),
        None,
    );
    assert!(matches!(result, Err(ClinicError::InvalidInput(_))));
}

#[test]
fn test_malformed_booking_input_rejected() {
    let core = open_clinic_in_memory().unwrap();

    let doctor = core
        .register_doctor("Dr. Test".into(), "Dentist".into(), true)
        .unwrap();
    let patient = core
        .register_patient(
            "Abel".into(),
            "30".into(),
            "Male".into(),
            "0912345678".into(),
            None,
        )
        .unwrap();

    // Non-numeric patient id
    let result = core.book_appointment("abc".into(), doctor.id, "2099-01-01".into());
    assert!(matches!(result, Err(ClinicError::InvalidInput(_))));

    // Unparseable date
    let result = core.book_appointment(patient.id.to_string(), doctor.id, "01/01/2099".into());
    assert!(matches!(result, Err(ClinicError::InvalidDate(_))));

    // Past year
    let result = core.book_appointment(patient.id.to_string(), doctor.id, "2000-01-01".into());
    assert!(matches!(result, Err(ClinicError::InvalidDate(_))));

    assert!(core.list_appointments().unwrap().is_empty());
}

#[test]
fn test_seed_demo_doctors() {
    let core = open_clinic_in_memory().unwrap();

    assert_eq!(core.seed_demo_doctors().unwrap(), 10);
    assert_eq!(core.available_doctors("Dentist".into()).unwrap().len(), 10);

    // Idempotent listing between writes
    let first = core.available_doctors("Dentist".into()).unwrap().len();
    let second = core.available_doctors("Dentist".into()).unwrap().len();
    assert_eq!(first, second);

    // Seeding again does nothing once doctors exist
    assert_eq!(core.seed_demo_doctors().unwrap(), 0);
}

#[test]
fn test_export_schedule() {
    let core = open_clinic_in_memory().unwrap();

    let doctor = core
        .register_doctor("Dr. Test".into(), "Dentist".into(), true)
        .unwrap();
    let patient = core
        .register_patient(
            "Abel".into(),
            "30".into(),
            "Male".into(),
            "0912345678".into(),
            None,
        )
        .unwrap();
    core.book_appointment(patient.id.to_string(), doctor.id, "2099-01-01".into())
        .unwrap();

    let json = core.export_schedule_json().unwrap();
    assert!(json.contains("Abel"));
    assert!(json.contains("Dr. Test"));

    let csv = core.export_schedule_csv().unwrap();
    assert_eq!(csv.lines().count(), 2);
    assert!(csv.contains("2099-01-01"));
}
