//! Record store: patient and report collections persisted as JSON blobs,
//! plus derived dashboard statistics.
//!
//! Reads are total: an unavailable or corrupt blob degrades to an empty
//! collection (logged, never surfaced). Writes report failure as a boolean.

mod backend;
mod schema;
mod seed;

pub use backend::{BlobStore, MemoryBlobStore, SqliteBlobStore, StoreError, StoreResult};
pub use schema::SCHEMA;

use std::sync::Arc;

use rand::Rng;
use serde::{de::DeserializeOwned, Serialize};
use tracing::warn;

use crate::models::{DashboardStats, NewPatient, NewReport, Patient, RecordStatus, Report};

/// Blob key for the patient collection.
pub const PATIENTS_KEY: &str = "cancer_portal_patients";
/// Blob key for the report collection.
pub const REPORTS_KEY: &str = "cancer_portal_reports";

/// The record store. Owns the patient and report collections; all other code
/// treats returned vectors as snapshots.
///
/// Construct one per process and pass it by reference to whatever needs it.
pub struct RecordStore {
    blobs: Arc<dyn BlobStore>,
    doctor_id: String,
}

impl RecordStore {
    /// Create a store over `blobs`, seeding each collection with demo data
    /// if it is observed empty. `doctor_id` becomes the owning doctor of
    /// every record added through this store.
    pub fn new(blobs: Arc<dyn BlobStore>, doctor_id: impl Into<String>) -> Self {
        let store = Self {
            blobs,
            doctor_id: doctor_id.into(),
        };
        store.seed_if_empty();
        store
    }

    fn seed_if_empty(&self) {
        if self.patients().is_empty() {
            self.save_patients(&seed::sample_patients());
        }
        if self.reports().is_empty() {
            self.save_reports(&seed::sample_reports());
        }
    }

    // =========================================================================
    // Patients
    // =========================================================================

    /// All patients in insertion order. Returns an empty vec if storage is
    /// empty, corrupted, or unreadable.
    pub fn patients(&self) -> Vec<Patient> {
        self.read_collection(PATIENTS_KEY)
    }

    /// Overwrite the entire patient collection. Returns `false` on failure.
    pub fn save_patients(&self, patients: &[Patient]) -> bool {
        self.write_collection(PATIENTS_KEY, patients)
    }

    /// Assign an ID, creation timestamp, and owning doctor; append; persist.
    ///
    /// No field validation is performed here; that is the caller's concern.
    pub fn add_patient(&self, data: NewPatient) -> Patient {
        let patient = Patient {
            id: self.generate_id("P"),
            first_name: data.first_name,
            last_name: data.last_name,
            age: data.age,
            gender: data.gender,
            contact: data.contact,
            email: data.email,
            blood_type: data.blood_type,
            medical_history: data.medical_history,
            symptoms: data.symptoms,
            status: data.status,
            last_visit: data.last_visit,
            created_at: chrono::Utc::now().to_rfc3339(),
            doctor_id: self.doctor_id.clone(),
        };

        let mut patients = self.patients();
        patients.push(patient.clone());
        self.save_patients(&patients);
        patient
    }

    /// Look up a patient by ID.
    pub fn patient(&self, id: &str) -> Option<Patient> {
        self.patients().into_iter().find(|p| p.id == id)
    }

    /// Delete a patient by ID. Deleting a missing ID is a no-op returning
    /// `false`.
    pub fn delete_patient(&self, id: &str) -> bool {
        let mut patients = self.patients();
        let before = patients.len();
        patients.retain(|p| p.id != id);
        if patients.len() == before {
            return false;
        }
        self.save_patients(&patients)
    }

    // =========================================================================
    // Reports
    // =========================================================================

    /// All reports in insertion order; same degradation contract as
    /// [`RecordStore::patients`].
    pub fn reports(&self) -> Vec<Report> {
        self.read_collection(REPORTS_KEY)
    }

    /// Overwrite the entire report collection. Returns `false` on failure.
    pub fn save_reports(&self, reports: &[Report]) -> bool {
        self.write_collection(REPORTS_KEY, reports)
    }

    /// Assign an ID, creation timestamp, and owning doctor; append; persist.
    pub fn add_report(&self, data: NewReport) -> Report {
        let report = Report {
            id: self.generate_id("R"),
            patient_id: data.patient_id,
            patient_name: data.patient_name,
            report_type: data.report_type,
            report_date: data.report_date,
            findings: data.findings,
            recommendations: data.recommendations,
            status: data.status,
            created_at: chrono::Utc::now().to_rfc3339(),
            doctor_id: self.doctor_id.clone(),
            ai_data: data.ai_data,
        };

        let mut reports = self.reports();
        reports.push(report.clone());
        self.save_reports(&reports);
        report
    }

    /// Look up a report by ID.
    pub fn report(&self, id: &str) -> Option<Report> {
        self.reports().into_iter().find(|r| r.id == id)
    }

    /// Delete a report by ID. Deleting a missing ID is a no-op returning
    /// `false`.
    pub fn delete_report(&self, id: &str) -> bool {
        let mut reports = self.reports();
        let before = reports.len();
        reports.retain(|r| r.id != id);
        if reports.len() == before {
            return false;
        }
        self.save_reports(&reports)
    }

    // =========================================================================
    // Derived statistics
    // =========================================================================

    /// Compute dashboard statistics by scanning both collections. O(n),
    /// recomputed on every call, never cached.
    pub fn dashboard_stats(&self) -> DashboardStats {
        let patients = self.patients();
        let reports = self.reports();

        let critical_cases = patients
            .iter()
            .filter(|p| p.status == RecordStatus::Critical)
            .count();
        let completed = patients
            .iter()
            .filter(|p| p.status == RecordStatus::Completed)
            .count();
        let recovery_rate = if patients.is_empty() {
            0
        } else {
            ((completed as f64 / patients.len() as f64) * 100.0).round() as u32
        };

        DashboardStats {
            total_patients: patients.len(),
            total_reports: reports.len(),
            critical_cases,
            recovery_rate,
        }
    }

    // =========================================================================
    // ID generation
    // =========================================================================

    /// Produce an identifier: prefix + current time in base 36 + a 5-char
    /// base-36 random suffix, uppercased. Uniqueness is probabilistic; no
    /// collision check is made.
    pub fn generate_id(&self, prefix: &str) -> String {
        let millis = chrono::Utc::now().timestamp_millis().max(0) as u64;
        let mut rng = rand::thread_rng();
        let suffix: String = (0..5)
            .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
            .collect();
        format!("{}{}{}", prefix, to_base36(millis), suffix).to_uppercase()
    }

    // =========================================================================
    // Blob plumbing
    // =========================================================================

    fn read_collection<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let raw = match self.blobs.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!(key, %err, "blob store unreadable, treating as empty");
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(err) => {
                warn!(key, %err, "corrupt blob, treating as empty");
                Vec::new()
            }
        }
    }

    fn write_collection<T: Serialize>(&self, key: &str, records: &[T]) -> bool {
        let raw = match serde_json::to_string(records) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(key, %err, "failed to serialize collection");
                return false;
            }
        };
        match self.blobs.put(key, &raw) {
            Ok(()) => true,
            Err(err) => {
                warn!(key, %err, "failed to persist collection");
                false
            }
        }
    }
}

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

fn to_base36(mut n: u64) -> String {
    if n == 0 {
        return "0".into();
    }
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(BASE36[(n % 36) as usize] as char);
        n /= 36;
    }
    digits.reverse();
    digits.into_iter().collect()
}
