//! OncoPortal Core Library
//!
//! Core of a browser-style cancer detection demo portal: a blob-backed
//! record store, dashboard analytics, demo authentication, and a fake
//! threshold-formula "AI prediction".
//!
//! # Architecture
//!
//! ```text
//!            UI layer (external collaborator: DOM, charts, modals)
//!                               │
//!                       ┌───────▼────────┐
//!                       │     Portal      │  facade, explicitly constructed
//!                       └───────┬────────┘
//!          ┌────────────┬───────┼───────────┬─────────────┐
//!          ▼            ▼       ▼           ▼             ▼
//!      RecordStore  Sessions  Auth      RiskModel    LatencyHook
//!          │            │
//!          └─────┬──────┘
//!                ▼
//!           BlobStore  (kv blobs: patients, reports, session keys)
//! ```
//!
//! # Core principle
//!
//! Every read from storage is total: corruption degrades to an empty view,
//! writes report failure as a boolean, and nothing here is fatal.
//!
//! # Modules
//!
//! - [`store`]: key-value blob backends and the record store
//! - [`models`]: domain types (Patient, Report, DashboardStats)
//! - [`dashboard`]: filtering and aggregation for the dashboard UI
//! - [`auth`]: credential verification and session management
//! - [`predict`]: the fixed threshold-formula risk model
//! - [`latency`]: simulated round-trip delays behind a trait
//! - [`config`]: TOML portal configuration

pub mod auth;
pub mod config;
pub mod dashboard;
pub mod latency;
pub mod models;
pub mod predict;
pub mod store;

// Re-export commonly used types
pub use auth::{AuthError, Authenticator, CurrentUser, DoctorAccount, SessionManager};
pub use config::{ConfigError, PortalConfig};
pub use latency::{BlockingLatency, LatencyHook, NoLatency};
pub use models::{
    DashboardStats, Gender, NewPatient, NewReport, Patient, RecordStatus, Report, ReportType,
};
pub use predict::{Outcome, PredictError, PredictionInput, PredictionResult, RiskLevel, RiskModel};
pub use store::{
    BlobStore, MemoryBlobStore, RecordStore, SqliteBlobStore, StoreError, StoreResult,
};

use std::sync::Arc;
use std::time::Duration;

/// Top-level portal error.
#[derive(Debug, thiserror::Error)]
pub enum PortalError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Predict(#[from] PredictError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// The portal facade: one explicitly constructed object wiring the store,
/// authentication, and risk model together. Construct once at process start
/// and hand a reference to the UI layer — there is no global singleton.
pub struct Portal {
    store: RecordStore,
    auth: Authenticator,
    sessions: SessionManager,
    model: RiskModel,
    latency: Box<dyn LatencyHook>,
    login_delay: Duration,
    prediction_delay: Duration,
}

impl Portal {
    /// Wire a portal over the given blob backend and latency hook.
    pub fn new(
        config: PortalConfig,
        blobs: Arc<dyn BlobStore>,
        latency: Box<dyn LatencyHook>,
    ) -> Self {
        Self {
            store: RecordStore::new(blobs.clone(), config.doctor_id.clone()),
            auth: Authenticator::new(config.doctors),
            sessions: SessionManager::new(blobs, config.session_timeout_minutes),
            model: RiskModel::new(),
            latency,
            login_delay: Duration::from_millis(config.login_delay_ms),
            prediction_delay: Duration::from_millis(config.prediction_delay_ms),
        }
    }

    /// Open a portal over a SQLite blob store at `path`, with real delays.
    pub fn open<P: AsRef<std::path::Path>>(
        config: PortalConfig,
        path: P,
    ) -> Result<Self, PortalError> {
        let blobs = Arc::new(SqliteBlobStore::open(path)?);
        Ok(Self::new(config, blobs, Box::new(BlockingLatency)))
    }

    /// Open a portal over in-memory blobs with no delays (for testing).
    pub fn open_in_memory(config: PortalConfig) -> Self {
        Self::new(
            config,
            Arc::new(MemoryBlobStore::new()),
            Box::new(NoLatency),
        )
    }

    /// The record store.
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    // =========================================================================
    // Authentication
    // =========================================================================

    /// Simulate the login round trip, verify credentials, and establish a
    /// session.
    pub fn login(&self, username: &str, password: &str) -> Result<CurrentUser, AuthError> {
        self.latency.simulate(self.login_delay);
        let account = self.auth.verify(username, password)?;
        let user = CurrentUser::from_account(account);
        self.sessions.establish(&user);
        Ok(user)
    }

    /// The logged-in user, if a non-expired session exists.
    pub fn current_user(&self) -> Option<CurrentUser> {
        self.sessions.current()
    }

    /// End the current session.
    pub fn logout(&self) {
        self.sessions.clear();
    }

    // =========================================================================
    // Risk scoring
    // =========================================================================

    /// Simulate the analysis delay and run the threshold formula.
    pub fn predict(&self, input: &PredictionInput) -> Result<PredictionResult, PredictError> {
        self.latency.simulate(self.prediction_delay);
        self.model.predict(input)
    }

    /// Save a completed prediction into the report collection.
    pub fn save_prediction(&self, result: &PredictionResult) -> Report {
        self.store.add_report(result.to_report())
    }

    // =========================================================================
    // Dashboard
    // =========================================================================

    /// Derived dashboard statistics.
    pub fn dashboard_stats(&self) -> DashboardStats {
        self.store.dashboard_stats()
    }
}
