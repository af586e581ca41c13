//! Report models.

use serde::{Deserialize, Serialize};

use super::RecordStatus;
use crate::predict::PredictionResult;

/// Kind of medical report.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ReportType {
    Scan,
    Biopsy,
    BloodTest,
    AiPrediction,
}

/// A medical report tied to a patient.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Store-assigned ID ("R" prefix); never set by callers
    pub id: String,
    /// ID of the associated patient
    pub patient_id: String,
    /// Denormalized patient display name
    pub patient_name: String,
    pub report_type: ReportType,
    /// Report date (YYYY-MM-DD)
    pub report_date: String,
    /// Free-text findings
    pub findings: String,
    /// Free-text recommendations
    pub recommendations: String,
    pub status: RecordStatus,
    /// Creation timestamp (RFC 3339), assigned by the store
    pub created_at: String,
    /// Owning doctor, assigned by the store
    pub doctor_id: String,
    /// Embedded AI prediction payload, present on ai-prediction reports
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_data: Option<PredictionResult>,
}

/// Caller-supplied fields for a new report. The store fills in the ID,
/// creation timestamp, and owning doctor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewReport {
    pub patient_id: String,
    pub patient_name: String,
    pub report_type: ReportType,
    #[serde(default)]
    pub report_date: String,
    #[serde(default)]
    pub findings: String,
    #[serde(default)]
    pub recommendations: String,
    pub status: RecordStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_data: Option<PredictionResult>,
}
