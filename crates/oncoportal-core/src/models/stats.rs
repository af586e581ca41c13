//! Derived dashboard statistics.

use serde::{Deserialize, Serialize};

/// Dashboard statistics, computed on demand from the stored collections and
/// never themselves persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Total patient count
    pub total_patients: usize,
    /// Total report count
    pub total_reports: usize,
    /// Patients with status "critical"
    pub critical_cases: usize,
    /// Rounded percentage of patients with status "completed"; 0 when the
    /// patient collection is empty
    pub recovery_rate: u32,
}
