//! Portal configuration.
//!
//! The credential table, session timeout, owning-doctor id, and simulated
//! delays are all injected here rather than hardcoded at their call sites.
//! Load from TOML:
//!
//! ```toml
//! doctor_id = "dr.smith"
//! session_timeout_minutes = 30
//! login_delay_ms = 1500
//! prediction_delay_ms = 2000
//!
//! [[doctors]]
//! username = "dr.smith"
//! password = "password123"
//! name = "Dr. John Smith"
//! role = "Oncologist"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::auth::DoctorAccount;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Portal-wide configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PortalConfig {
    /// Owning doctor assigned to records created through the store
    #[serde(default = "default_doctor_id")]
    pub doctor_id: String,

    /// Inactivity timeout before a session expires
    #[serde(default = "default_session_timeout")]
    pub session_timeout_minutes: i64,

    /// Simulated login round-trip delay
    #[serde(default = "default_login_delay")]
    pub login_delay_ms: u64,

    /// Simulated prediction delay
    #[serde(default = "default_prediction_delay")]
    pub prediction_delay_ms: u64,

    /// Credential table for the login screen
    #[serde(default)]
    pub doctors: Vec<DoctorAccount>,
}

fn default_doctor_id() -> String {
    "dr.smith".into()
}

fn default_session_timeout() -> i64 {
    30
}

fn default_login_delay() -> u64 {
    1500
}

fn default_prediction_delay() -> u64 {
    2000
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            doctor_id: default_doctor_id(),
            session_timeout_minutes: default_session_timeout(),
            login_delay_ms: default_login_delay(),
            prediction_delay_ms: default_prediction_delay(),
            doctors: Vec::new(),
        }
    }
}

impl PortalConfig {
    /// Parse a configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Load a configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// The demo configuration: the five sample doctor accounts and default
    /// timeouts. For demos and tests only.
    pub fn demo() -> Self {
        let doctor = |username: &str, name: &str, role: &str| DoctorAccount {
            username: username.into(),
            password: "password123".into(),
            name: name.into(),
            role: role.into(),
        };
        Self {
            doctors: vec![
                doctor("dr.smith", "Dr. John Smith", "Oncologist"),
                doctor("dr.johnson", "Dr. Sarah Johnson", "Radiologist"),
                doctor("dr.williams", "Dr. Michael Williams", "Pathologist"),
                doctor("dr.brown", "Dr. Emily Brown", "Oncologist"),
                doctor("dr.davis", "Dr. David Davis", "Surgeon"),
            ],
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config: PortalConfig = toml::from_str("").unwrap();
        assert!(config.doctors.is_empty());
        assert_eq!(config.doctor_id, "dr.smith");
        assert_eq!(config.session_timeout_minutes, 30);
        assert_eq!(config.login_delay_ms, 1500);
        assert_eq!(config.prediction_delay_ms, 2000);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
            doctor_id = "dr.house"
            session_timeout_minutes = 10

            [[doctors]]
            username = "dr.house"
            password = "lupus-never"
            name = "Dr. Gregory House"
            role = "Diagnostician"
        "#;
        let config = PortalConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.doctor_id, "dr.house");
        assert_eq!(config.session_timeout_minutes, 10);
        assert_eq!(config.doctors.len(), 1);
        assert_eq!(config.doctors[0].username, "dr.house");
        // Unset fields keep their defaults
        assert_eq!(config.prediction_delay_ms, 2000);
    }

    #[test]
    fn test_parse_error_is_surfaced() {
        assert!(PortalConfig::from_toml_str("doctors = 3").is_err());
    }

    #[test]
    fn test_demo_accounts() {
        let config = PortalConfig::demo();
        assert_eq!(config.doctors.len(), 5);
        assert!(config.doctors.iter().any(|d| d.username == "dr.davis"));
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = PortalConfig::demo();
        let serialized = toml::to_string(&config).unwrap();
        let back = PortalConfig::from_toml_str(&serialized).unwrap();
        assert_eq!(config, back);
    }
}
