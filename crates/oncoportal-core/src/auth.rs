//! Authentication: credential verification and session management.
//!
//! The account table is injected (normally from [`crate::config::PortalConfig`]),
//! never hardcoded here. Passwords are compared in clear; this is a demo
//! portal, not security-grade authentication.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::store::{BlobStore, StoreResult};

/// Blob key for the session token.
pub const AUTH_TOKEN_KEY: &str = "authToken";
/// Blob key for the serialized current user.
pub const USER_DATA_KEY: &str = "userData";
/// Blob key for the last-activity timestamp (milliseconds since epoch).
pub const LAST_ACTIVITY_KEY: &str = "lastActivity";

/// Authentication errors. The first four are input validation, reported
/// before any credential lookup.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("Doctor ID is required")]
    MissingUsername,

    #[error("Doctor ID must be at least 3 characters")]
    UsernameTooShort,

    #[error("Password is required")]
    MissingPassword,

    #[error("Password must be at least 6 characters")]
    PasswordTooShort,

    #[error("Invalid credentials. Please try again.")]
    InvalidCredentials,
}

/// A doctor account in the injected credential table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DoctorAccount {
    pub username: String,
    pub password: String,
    /// Display name ("Dr. John Smith")
    pub name: String,
    /// Specialty shown in the header ("Oncologist")
    pub role: String,
}

/// The logged-in user, persisted as the `userData` blob.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    pub username: String,
    pub name: String,
    pub role: String,
    /// Login timestamp (RFC 3339)
    pub login_time: String,
}

impl CurrentUser {
    /// Build the session payload for a verified account.
    pub fn from_account(account: &DoctorAccount) -> Self {
        Self {
            username: account.username.clone(),
            name: account.name.clone(),
            role: account.role.clone(),
            login_time: Utc::now().to_rfc3339(),
        }
    }
}

/// Credential verifier over an injected account table.
#[derive(Debug, Clone)]
pub struct Authenticator {
    accounts: Vec<DoctorAccount>,
}

impl Authenticator {
    pub fn new(accounts: Vec<DoctorAccount>) -> Self {
        Self { accounts }
    }

    /// Validate the raw form inputs, then look up the credentials.
    pub fn verify(&self, username: &str, password: &str) -> Result<&DoctorAccount, AuthError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(AuthError::MissingUsername);
        }
        if username.len() < 3 {
            return Err(AuthError::UsernameTooShort);
        }
        if password.is_empty() {
            return Err(AuthError::MissingPassword);
        }
        if password.len() < 6 {
            return Err(AuthError::PasswordTooShort);
        }

        self.accounts
            .iter()
            .find(|a| a.username == username && a.password == password)
            .ok_or(AuthError::InvalidCredentials)
    }
}

/// Session state persisted in the blob backend under the three fixed keys.
///
/// Sessions expire after a period of inactivity; every successful read
/// refreshes the activity timestamp.
pub struct SessionManager {
    blobs: Arc<dyn BlobStore>,
    timeout: Duration,
}

impl SessionManager {
    pub fn new(blobs: Arc<dyn BlobStore>, timeout_minutes: i64) -> Self {
        Self {
            blobs,
            timeout: Duration::minutes(timeout_minutes),
        }
    }

    /// Persist a fresh session for `user`. Returns `false` if the backend
    /// rejected the write.
    pub fn establish(&self, user: &CurrentUser) -> bool {
        self.establish_at(user, Utc::now())
    }

    pub fn establish_at(&self, user: &CurrentUser, now: DateTime<Utc>) -> bool {
        let payload = match serde_json::to_string(user) {
            Ok(payload) => payload,
            Err(err) => {
                warn!(%err, "failed to serialize session user");
                return false;
            }
        };
        let result: StoreResult<()> = (|| {
            self.blobs.put(AUTH_TOKEN_KEY, &generate_token(now))?;
            self.blobs.put(USER_DATA_KEY, &payload)?;
            self.blobs
                .put(LAST_ACTIVITY_KEY, &now.timestamp_millis().to_string())?;
            Ok(())
        })();
        match result {
            Ok(()) => {
                info!(username = %user.username, "session established");
                true
            }
            Err(err) => {
                warn!(%err, "failed to persist session");
                false
            }
        }
    }

    /// The current user, if a non-expired session exists. Reading a live
    /// session refreshes its activity timestamp; an expired one is cleared.
    pub fn current(&self) -> Option<CurrentUser> {
        self.current_at(Utc::now())
    }

    pub fn current_at(&self, now: DateTime<Utc>) -> Option<CurrentUser> {
        let token = self.blobs.get(AUTH_TOKEN_KEY).ok()??;
        let payload = self.blobs.get(USER_DATA_KEY).ok()??;
        let last_activity = self.blobs.get(LAST_ACTIVITY_KEY).ok()??;
        if token.is_empty() {
            return None;
        }

        let last_millis: i64 = last_activity.parse().ok()?;
        let idle = now.timestamp_millis().saturating_sub(last_millis);
        if idle >= self.timeout.num_milliseconds() {
            info!("session expired");
            self.clear();
            return None;
        }

        let user: CurrentUser = serde_json::from_str(&payload).ok()?;
        self.touch_at(now);
        Some(user)
    }

    /// Refresh the last-activity timestamp.
    pub fn touch(&self) {
        self.touch_at(Utc::now());
    }

    pub fn touch_at(&self, now: DateTime<Utc>) {
        if let Err(err) = self
            .blobs
            .put(LAST_ACTIVITY_KEY, &now.timestamp_millis().to_string())
        {
            warn!(%err, "failed to record session activity");
        }
    }

    /// Drop the session, removing all three blobs.
    pub fn clear(&self) {
        for key in [AUTH_TOKEN_KEY, USER_DATA_KEY, LAST_ACTIVITY_KEY] {
            if let Err(err) = self.blobs.remove(key) {
                warn!(key, %err, "failed to clear session blob");
            }
        }
    }
}

/// Opaque demo token: `token_<millis>_<random>`. Not a real JWT.
fn generate_token(now: DateTime<Utc>) -> String {
    const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut rng = rand::thread_rng();
    let random: String = (0..9)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();
    format!("token_{}_{}", now.timestamp_millis(), random)
}
