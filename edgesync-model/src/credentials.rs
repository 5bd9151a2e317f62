//! Device access credentials.
//!
//! Each device owns exactly one credentials record, created at device
//! creation time and thereafter replaced wholesale (type + id + value)
//! via an explicit credentials-update message. The record's own identity
//! never changes.

use edgesync_types::{CredentialsRecordId, DeviceId};
use serde::{Deserialize, Serialize};

/// How a device authenticates itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CredentialsType {
    /// Opaque bearer token. The default for bootstrapped devices.
    #[default]
    AccessToken,
    /// Username/password pair.
    Basic,
    /// Client certificate.
    X509Certificate,
}

/// Credentials record owned 1:1 by a device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceCredentials {
    /// Row identity. `None` for a decoded-but-not-persisted value.
    pub id: Option<CredentialsRecordId>,
    pub device_id: DeviceId,
    pub credentials_type: CredentialsType,
    /// Credential identifier (e.g. the access token itself).
    pub credentials_id: String,
    /// Credential secret, when the type carries one.
    pub credentials_value: Option<String>,
}

impl Default for DeviceCredentials {
    fn default() -> Self {
        Self {
            id: None,
            device_id: DeviceId::from_uuid(uuid::Uuid::nil()),
            credentials_type: CredentialsType::default(),
            credentials_id: String::new(),
            credentials_value: None,
        }
    }
}

impl DeviceCredentials {
    /// Creates a detached credentials value for a device.
    #[must_use]
    pub fn new(device_id: DeviceId) -> Self {
        Self {
            device_id,
            ..Self::default()
        }
    }
}
