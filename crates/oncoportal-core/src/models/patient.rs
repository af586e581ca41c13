//! Patient models.

use serde::{Deserialize, Serialize};

/// Patient gender.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Lifecycle status of a patient or report.
///
/// `Completed` is part of the vocabulary (the recovery-rate statistic counts
/// it) but nothing in this library sets it; callers may.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    Active,
    Critical,
    Pending,
    Completed,
}

/// A patient record.
///
/// Field names in the persisted JSON stay camelCase to match the blob layout
/// the portal has always written.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    /// Store-assigned ID ("P" prefix); never set by callers
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    pub gender: Gender,
    /// Contact phone number
    pub contact: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blood_type: Option<String>,
    /// Free-text medical history
    pub medical_history: String,
    /// Free-text presenting symptoms
    pub symptoms: String,
    pub status: RecordStatus,
    /// Date of last visit (YYYY-MM-DD)
    pub last_visit: String,
    /// Creation timestamp (RFC 3339), assigned by the store
    pub created_at: String,
    /// Owning doctor, assigned by the store
    pub doctor_id: String,
}

impl Patient {
    /// Display name ("First Last").
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Caller-supplied fields for a new patient. The store fills in the ID,
/// creation timestamp, and owning doctor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewPatient {
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    pub gender: Gender,
    #[serde(default)]
    pub contact: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blood_type: Option<String>,
    #[serde(default)]
    pub medical_history: String,
    #[serde(default)]
    pub symptoms: String,
    pub status: RecordStatus,
    #[serde(default)]
    pub last_visit: String,
}
