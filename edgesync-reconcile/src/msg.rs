//! Inbound update messages.
//!
//! Each message is a versioned envelope carrying either the legacy
//! discrete fields or a single opaque structured-entity blob. The
//! payload variant records which representation the sender populated;
//! the sender's declared [protocol version](edgesync_types::ProtocolVersion)
//! decides which one the decoder reads. Messages are immutable once
//! received.

use edgesync_model::{CredentialsType, ResourceType};
use edgesync_types::{CustomerId, DeviceId, DeviceProfileId, PackageId};
use serde::{Deserialize, Serialize};

/// Create-or-update message for a device.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceUpdateMsg {
    pub payload: DevicePayload,
}

impl DeviceUpdateMsg {
    /// Builds a legacy (discrete-field) message.
    #[must_use]
    pub fn legacy(fields: DeviceFields) -> Self {
        Self {
            payload: DevicePayload::Fields(fields),
        }
    }

    /// Builds a structured-entity message.
    #[must_use]
    pub fn structured(entity_json: impl Into<String>) -> Self {
        Self {
            payload: DevicePayload::Entity(entity_json.into()),
        }
    }
}

/// Which representation a device message carries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum DevicePayload {
    /// Legacy discrete fields, sent by pre-cutover nodes.
    Fields(DeviceFields),
    /// Opaque structured entity JSON, sent by current nodes.
    Entity(String),
}

/// Discrete device fields as sent by legacy nodes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceFields {
    pub name: String,
    pub device_type: String,
    pub label: Option<String>,
    pub device_profile_id: Option<DeviceProfileId>,
    pub customer_id: Option<CustomerId>,
    pub firmware_id: Option<PackageId>,
    pub software_id: Option<PackageId>,
    /// Embedded structured-data blob, encoding chosen by the sender.
    pub device_data: Option<Vec<u8>>,
    /// Free-form metadata, JSON text.
    pub additional_info: Option<String>,
}

/// Create-or-update message for a resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceUpdateMsg {
    pub payload: ResourcePayload,
}

impl ResourceUpdateMsg {
    /// Builds a legacy (discrete-field) message.
    #[must_use]
    pub fn legacy(fields: ResourceFields) -> Self {
        Self {
            payload: ResourcePayload::Fields(fields),
        }
    }

    /// Builds a structured-entity message.
    #[must_use]
    pub fn structured(entity_json: impl Into<String>) -> Self {
        Self {
            payload: ResourcePayload::Entity(entity_json.into()),
        }
    }
}

/// Which representation a resource message carries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ResourcePayload {
    Fields(ResourceFields),
    Entity(String),
}

/// Discrete resource fields as sent by legacy nodes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceFields {
    pub title: String,
    pub resource_type: ResourceType,
    pub resource_key: String,
    pub file_name: String,
    pub data: Option<String>,
    pub etag: Option<String>,
    /// System-scoped resources are owned by the sentinel tenant.
    pub is_system: bool,
}

impl Default for ResourceFields {
    fn default() -> Self {
        Self {
            title: String::new(),
            resource_type: ResourceType::new(""),
            resource_key: String::new(),
            file_name: String::new(),
            data: None,
            etag: None,
            is_system: false,
        }
    }
}

/// Explicit credentials-replacement message for a device.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialsUpdateMsg {
    pub payload: CredentialsPayload,
}

impl CredentialsUpdateMsg {
    /// Builds a legacy (discrete-field) message.
    #[must_use]
    pub fn legacy(fields: CredentialsFields) -> Self {
        Self {
            payload: CredentialsPayload::Fields(fields),
        }
    }

    /// Builds a structured-entity message.
    #[must_use]
    pub fn structured(entity_json: impl Into<String>) -> Self {
        Self {
            payload: CredentialsPayload::Entity(entity_json.into()),
        }
    }
}

/// Which representation a credentials message carries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum CredentialsPayload {
    Fields(CredentialsFields),
    Entity(String),
}

/// Discrete credentials fields as sent by legacy nodes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialsFields {
    /// The device whose credentials are being replaced.
    pub device_id: DeviceId,
    pub credentials_type: CredentialsType,
    pub credentials_id: String,
    pub credentials_value: Option<String>,
}
