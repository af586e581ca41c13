//! Fixed demo seed records.
//!
//! Inserted once when a collection is first observed empty; idempotent only
//! because emptiness is re-checked on every construction.

use crate::models::{Gender, Patient, RecordStatus, Report, ReportType};

/// The two demo patients seeded into an empty patient collection.
pub fn sample_patients() -> Vec<Patient> {
    vec![
        Patient {
            id: "P001".into(),
            first_name: "Sarah".into(),
            last_name: "Mitchell".into(),
            age: 45,
            gender: Gender::Female,
            contact: "+1-555-0123".into(),
            email: None,
            blood_type: None,
            medical_history: "Family history of breast cancer".into(),
            symptoms: "Lump in right breast, occasional pain".into(),
            status: RecordStatus::Active,
            last_visit: "2024-01-15".into(),
            created_at: "2024-01-10T10:00:00Z".into(),
            doctor_id: "dr.smith".into(),
        },
        Patient {
            id: "P002".into(),
            first_name: "Michael".into(),
            last_name: "Chen".into(),
            age: 62,
            gender: Gender::Male,
            contact: "+1-555-0124".into(),
            email: None,
            blood_type: None,
            medical_history: "Smoker for 30 years".into(),
            symptoms: "Persistent cough, chest pain".into(),
            status: RecordStatus::Critical,
            last_visit: "2024-01-20".into(),
            created_at: "2024-01-12T14:30:00Z".into(),
            doctor_id: "dr.johnson".into(),
        },
    ]
}

/// The demo report seeded into an empty report collection.
pub fn sample_reports() -> Vec<Report> {
    vec![Report {
        id: "R001".into(),
        patient_id: "P001".into(),
        patient_name: "Sarah Mitchell".into(),
        report_type: ReportType::Scan,
        report_date: "2024-01-15".into(),
        findings: "2.5cm mass detected in right breast".into(),
        recommendations: "Immediate biopsy recommended".into(),
        status: RecordStatus::Critical,
        created_at: "2024-01-15T14:30:00Z".into(),
        doctor_id: "dr.smith".into(),
        ai_data: None,
    }]
}
