//! Dashboard aggregation and filtering.
//!
//! Pure functions over snapshots returned by the record store; the UI layer
//! renders the results. Nothing here mutates or persists.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::models::{Gender, Patient, RecordStatus, Report, ReportType};

/// Age band filter options offered by the patient list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeBand {
    /// 0-18
    Minor,
    /// 19-30
    YoungAdult,
    /// 31-50
    Adult,
    /// 51-70
    Senior,
    /// over 70
    Elderly,
}

impl AgeBand {
    /// Whether `age` falls inside this band.
    pub fn contains(&self, age: u32) -> bool {
        match self {
            AgeBand::Minor => age <= 18,
            AgeBand::YoungAdult => (19..=30).contains(&age),
            AgeBand::Adult => (31..=50).contains(&age),
            AgeBand::Senior => (51..=70).contains(&age),
            AgeBand::Elderly => age > 70,
        }
    }
}

/// Composable patient list filter. All set criteria must match.
#[derive(Debug, Clone, Default)]
pub struct PatientFilter {
    /// Case-insensitive match against name, ID, or contact
    pub query: Option<String>,
    pub status: Option<RecordStatus>,
    pub gender: Option<Gender>,
    pub age_band: Option<AgeBand>,
}

impl PatientFilter {
    fn matches(&self, patient: &Patient) -> bool {
        if let Some(query) = &self.query {
            let query = query.to_lowercase();
            let hit = patient.first_name.to_lowercase().contains(&query)
                || patient.last_name.to_lowercase().contains(&query)
                || patient.id.to_lowercase().contains(&query)
                || patient.contact.contains(query.as_str());
            if !hit {
                return false;
            }
        }
        if let Some(status) = self.status {
            if patient.status != status {
                return false;
            }
        }
        if let Some(gender) = self.gender {
            if patient.gender != gender {
                return false;
            }
        }
        if let Some(band) = self.age_band {
            if !band.contains(patient.age) {
                return false;
            }
        }
        true
    }
}

/// Apply `filter` to a patient snapshot, preserving order.
pub fn filter_patients(patients: &[Patient], filter: &PatientFilter) -> Vec<Patient> {
    patients
        .iter()
        .filter(|p| filter.matches(p))
        .cloned()
        .collect()
}

/// Per-status patient counts shown above the patient list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBreakdown {
    pub total: usize,
    pub active: usize,
    pub critical: usize,
    pub pending: usize,
}

/// Count patients per displayed status.
pub fn status_breakdown(patients: &[Patient]) -> StatusBreakdown {
    let count = |status| {
        patients
            .iter()
            .filter(|p| p.status == status)
            .count()
    };
    StatusBreakdown {
        total: patients.len(),
        active: count(RecordStatus::Active),
        critical: count(RecordStatus::Critical),
        pending: count(RecordStatus::Pending),
    }
}

/// Month labels for the trends chart, January first.
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// New-case counts per calendar month, keyed on the report date.
/// Reports with unparseable dates are skipped.
pub fn monthly_trends(reports: &[Report]) -> [u32; 12] {
    let mut counts = [0u32; 12];
    for report in reports {
        match NaiveDate::parse_from_str(&report.report_date, "%Y-%m-%d") {
            Ok(date) => counts[date.month0() as usize] += 1,
            Err(err) => {
                debug!(report_id = %report.id, date = %report.report_date, %err,
                    "skipping report with unparseable date");
            }
        }
    }
    counts
}

/// Report counts per type, for the distribution chart.
pub fn report_type_distribution(reports: &[Report]) -> HashMap<ReportType, usize> {
    let mut distribution = HashMap::new();
    for report in reports {
        *distribution.entry(report.report_type).or_insert(0) += 1;
    }
    distribution
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Patient;

    fn patient(id: &str, first: &str, last: &str, age: u32, gender: Gender, status: RecordStatus) -> Patient {
        Patient {
            id: id.into(),
            first_name: first.into(),
            last_name: last.into(),
            age,
            gender,
            contact: "+1-555-0100".into(),
            email: None,
            blood_type: None,
            medical_history: String::new(),
            symptoms: String::new(),
            status,
            last_visit: "2024-01-15".into(),
            created_at: "2024-01-10T10:00:00Z".into(),
            doctor_id: "dr.smith".into(),
        }
    }

    fn sample_patients() -> Vec<Patient> {
        vec![
            patient("P001", "Sarah", "Mitchell", 45, Gender::Female, RecordStatus::Active),
            patient("P002", "Michael", "Chen", 62, Gender::Male, RecordStatus::Critical),
            patient("P003", "Maria", "Garcia", 17, Gender::Female, RecordStatus::Pending),
        ]
    }

    fn report(id: &str, report_type: ReportType, date: &str) -> Report {
        Report {
            id: id.into(),
            patient_id: "P001".into(),
            patient_name: "Sarah Mitchell".into(),
            report_type,
            report_date: date.into(),
            findings: String::new(),
            recommendations: String::new(),
            status: RecordStatus::Active,
            created_at: "2024-01-15T14:30:00Z".into(),
            doctor_id: "dr.smith".into(),
            ai_data: None,
        }
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let patients = sample_patients();
        let filtered = filter_patients(&patients, &PatientFilter::default());
        assert_eq!(filtered, patients);
    }

    #[test]
    fn test_query_matches_name_id_contact() {
        let patients = sample_patients();

        let by_name = filter_patients(
            &patients,
            &PatientFilter { query: Some("mitch".into()), ..Default::default() },
        );
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].id, "P001");

        let by_id = filter_patients(
            &patients,
            &PatientFilter { query: Some("p002".into()), ..Default::default() },
        );
        assert_eq!(by_id.len(), 1);

        let by_contact = filter_patients(
            &patients,
            &PatientFilter { query: Some("555-0100".into()), ..Default::default() },
        );
        assert_eq!(by_contact.len(), 3);
    }

    #[test]
    fn test_filters_compose() {
        let patients = sample_patients();
        let filter = PatientFilter {
            gender: Some(Gender::Female),
            age_band: Some(AgeBand::Adult),
            ..Default::default()
        };
        let filtered = filter_patients(&patients, &filter);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "P001");
    }

    #[test]
    fn test_age_band_edges() {
        assert!(AgeBand::Minor.contains(0));
        assert!(AgeBand::Minor.contains(18));
        assert!(!AgeBand::Minor.contains(19));
        assert!(AgeBand::YoungAdult.contains(19));
        assert!(AgeBand::Senior.contains(70));
        assert!(AgeBand::Elderly.contains(71));
        assert!(!AgeBand::Elderly.contains(70));
    }

    #[test]
    fn test_status_breakdown() {
        let breakdown = status_breakdown(&sample_patients());
        assert_eq!(
            breakdown,
            StatusBreakdown { total: 3, active: 1, critical: 1, pending: 1 }
        );
    }

    #[test]
    fn test_monthly_trends() {
        let reports = vec![
            report("R001", ReportType::Scan, "2024-01-15"),
            report("R002", ReportType::Scan, "2024-01-20"),
            report("R003", ReportType::Biopsy, "2024-03-02"),
            report("R004", ReportType::Scan, "not-a-date"),
        ];
        let trends = monthly_trends(&reports);
        assert_eq!(trends[0], 2);
        assert_eq!(trends[2], 1);
        assert_eq!(trends.iter().sum::<u32>(), 3);
    }

    #[test]
    fn test_report_type_distribution() {
        let reports = vec![
            report("R001", ReportType::Scan, "2024-01-15"),
            report("R002", ReportType::Scan, "2024-02-15"),
            report("R003", ReportType::AiPrediction, "2024-03-15"),
        ];
        let distribution = report_type_distribution(&reports);
        assert_eq!(distribution[&ReportType::Scan], 2);
        assert_eq!(distribution[&ReportType::AiPrediction], 1);
        assert_eq!(distribution.get(&ReportType::Biopsy), None);
    }
}
