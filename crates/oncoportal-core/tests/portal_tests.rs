//! End-to-end portal flows: login, prediction save, dashboard refresh, and
//! persistence across reopen.

use std::sync::Arc;

use oncoportal_core::dashboard::{self, PatientFilter};
use oncoportal_core::predict::malignant_sample;
use oncoportal_core::{
    AuthError, BlobStore, MemoryBlobStore, NoLatency, Portal, PortalConfig, RecordStatus,
    ReportType, SqliteBlobStore,
};

fn demo_portal() -> Portal {
    Portal::open_in_memory(PortalConfig::demo())
}

#[test]
fn login_rejects_each_demo_validation_rule() {
    let portal = demo_portal();
    assert!(matches!(
        portal.login("", "password123"),
        Err(AuthError::MissingUsername)
    ));
    assert!(matches!(
        portal.login("dr", "password123"),
        Err(AuthError::UsernameTooShort)
    ));
    assert!(matches!(
        portal.login("dr.smith", "pass"),
        Err(AuthError::PasswordTooShort)
    ));
    assert!(matches!(
        portal.login("dr.smith", "letmein-wrong"),
        Err(AuthError::InvalidCredentials)
    ));
}

#[test]
fn every_demo_doctor_can_log_in() {
    let portal = demo_portal();
    for username in ["dr.smith", "dr.johnson", "dr.williams", "dr.brown", "dr.davis"] {
        let user = portal.login(username, "password123").unwrap();
        assert_eq!(user.username, username);
    }
}

#[test]
fn prediction_save_updates_reports_and_stats() {
    let portal = demo_portal();
    let stats_before = portal.dashboard_stats();

    let result = portal.predict(&malignant_sample()).unwrap();
    let report = portal.save_prediction(&result);

    assert!(report.id.starts_with('R'));
    assert_eq!(report.report_type, ReportType::AiPrediction);
    assert_eq!(report.status, RecordStatus::Critical);
    assert_eq!(report.ai_data.as_ref().unwrap(), &result);

    let stats_after = portal.dashboard_stats();
    assert_eq!(stats_after.total_reports, stats_before.total_reports + 1);

    // The embedded payload survives the blob roundtrip
    let reread = portal.store().report(&report.id).unwrap();
    assert_eq!(reread.ai_data.as_ref().unwrap(), &result);
}

#[test]
fn dashboard_filter_over_store_snapshot() {
    let portal = demo_portal();
    let patients = portal.store().patients();

    let critical = dashboard::filter_patients(
        &patients,
        &PatientFilter {
            status: Some(RecordStatus::Critical),
            ..Default::default()
        },
    );
    assert_eq!(critical.len(), 1);
    assert_eq!(critical[0].id, "P002");

    let trends = dashboard::monthly_trends(&portal.store().reports());
    // Seed report is dated 2024-01-15
    assert_eq!(trends[0], 1);
}

#[test]
fn two_portals_over_shared_blobs_see_the_same_data() {
    let blobs: Arc<dyn BlobStore> = Arc::new(MemoryBlobStore::new());
    let first = Portal::new(PortalConfig::demo(), blobs.clone(), Box::new(NoLatency));
    let result = first.predict(&malignant_sample()).unwrap();
    let report = first.save_prediction(&result);

    let second = Portal::new(PortalConfig::demo(), blobs, Box::new(NoLatency));
    assert!(second.store().report(&report.id).is_some());
    // Seeding did not re-run over the populated blobs
    assert_eq!(second.store().reports().len(), 2);
}

#[test]
fn sqlite_portal_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("portal.db");

    let added_id = {
        let blobs = Arc::new(SqliteBlobStore::open(&path).unwrap());
        let portal = Portal::new(PortalConfig::demo(), blobs, Box::new(NoLatency));
        let user = portal.login("dr.brown", "password123").unwrap();
        assert_eq!(user.role, "Oncologist");

        let result = portal.predict(&malignant_sample()).unwrap();
        portal.save_prediction(&result).id
    };

    let blobs = Arc::new(SqliteBlobStore::open(&path).unwrap());
    let portal = Portal::new(PortalConfig::demo(), blobs, Box::new(NoLatency));

    // Data and session both survived the reopen
    assert!(portal.store().report(&added_id).is_some());
    let user = portal.current_user().unwrap();
    assert_eq!(user.username, "dr.brown");
}
