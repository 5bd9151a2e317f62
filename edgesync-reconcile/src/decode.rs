//! Legacy/current message decoding.
//!
//! One decode function per message kind, branching on a protocol-version
//! comparison. Senders older than the configured cutover transmit
//! discrete fields which are read off explicitly; newer senders transmit
//! a structured entity blob which is deserialized directly, ignoring
//! unknown fields for forward compatibility.
//!
//! A decode failure means the message is fundamentally unusable and is
//! fatal to the reconciliation attempt.

use crate::codec::PayloadCodec;
use crate::msg::{
    CredentialsPayload, CredentialsUpdateMsg, DevicePayload, DeviceUpdateMsg, ResourcePayload,
    ResourceUpdateMsg,
};
use edgesync_model::{Device, DeviceCredentials, Resource};
use edgesync_types::{now_unix_millis, DeviceId, ProtocolVersion, TenantId};
use thiserror::Error;

/// A message that cannot be converted to its canonical entity.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The sender's version selects a representation the message lacks.
    #[error("message from {version} carries no {expected} representation")]
    MissingRepresentation {
        expected: &'static str,
        version: ProtocolVersion,
    },

    /// The structured entity blob does not parse.
    #[error("structured entity cannot be converted: {0}")]
    Entity(#[source] serde_json::Error),

    /// Legacy additional-info metadata is not valid JSON.
    #[error("additional info is not valid JSON: {0}")]
    AdditionalInfo(#[source] serde_json::Error),
}

/// Decodes a device update message into the canonical [`Device`] shape.
pub fn decode_device(
    msg: &DeviceUpdateMsg,
    tenant: TenantId,
    device_id: DeviceId,
    version: ProtocolVersion,
    cutover: ProtocolVersion,
    codec: &dyn PayloadCodec,
) -> Result<Device, DecodeError> {
    if version.supports_structured_entities(cutover) {
        let DevicePayload::Entity(json) = &msg.payload else {
            return Err(DecodeError::MissingRepresentation {
                expected: "structured entity",
                version,
            });
        };
        return serde_json::from_str(json).map_err(DecodeError::Entity);
    }

    let DevicePayload::Fields(fields) = &msg.payload else {
        return Err(DecodeError::MissingRepresentation {
            expected: "legacy field",
            version,
        });
    };

    let mut device = Device::new(tenant);
    // Creation time comes from the identity's embedded time component,
    // not from the message.
    device.created_at = device_id
        .embedded_unix_millis()
        .unwrap_or_else(now_unix_millis);
    device.name = fields.name.clone();
    device.device_type = fields.device_type.clone();
    device.label = fields.label.clone();
    device.device_profile_id = fields.device_profile_id;
    device.customer_id = fields.customer_id;
    device.firmware_id = fields.firmware_id;
    device.software_id = fields.software_id;
    device.additional_info = fields
        .additional_info
        .as_deref()
        .map(serde_json::from_str)
        .transpose()
        .map_err(DecodeError::AdditionalInfo)?;
    // An unrecognized encoding is not fatal; the field stays unset.
    device.device_data = fields
        .device_data
        .as_deref()
        .and_then(|bytes| codec.decode(bytes));

    Ok(device)
}

/// Decodes a resource update message into the canonical [`Resource`] shape.
pub fn decode_resource(
    msg: &ResourceUpdateMsg,
    tenant: TenantId,
    version: ProtocolVersion,
    cutover: ProtocolVersion,
) -> Result<Resource, DecodeError> {
    if version.supports_structured_entities(cutover) {
        let ResourcePayload::Entity(json) = &msg.payload else {
            return Err(DecodeError::MissingRepresentation {
                expected: "structured entity",
                version,
            });
        };
        return serde_json::from_str(json).map_err(DecodeError::Entity);
    }

    let ResourcePayload::Fields(fields) = &msg.payload else {
        return Err(DecodeError::MissingRepresentation {
            expected: "legacy field",
            version,
        });
    };

    let owner = if fields.is_system {
        TenantId::SYSTEM
    } else {
        tenant
    };
    let mut resource = Resource::new(owner);
    resource.title = fields.title.clone();
    resource.resource_type = fields.resource_type.clone();
    resource.resource_key = fields.resource_key.clone();
    resource.file_name = fields.file_name.clone();
    resource.data = fields.data.clone();
    resource.etag = fields.etag.clone();

    Ok(resource)
}

/// Decodes a credentials update message into a detached
/// [`DeviceCredentials`] value (no row identity).
pub fn decode_credentials(
    msg: &CredentialsUpdateMsg,
    version: ProtocolVersion,
    cutover: ProtocolVersion,
) -> Result<DeviceCredentials, DecodeError> {
    if version.supports_structured_entities(cutover) {
        let CredentialsPayload::Entity(json) = &msg.payload else {
            return Err(DecodeError::MissingRepresentation {
                expected: "structured entity",
                version,
            });
        };
        return serde_json::from_str(json).map_err(DecodeError::Entity);
    }

    let CredentialsPayload::Fields(fields) = &msg.payload else {
        return Err(DecodeError::MissingRepresentation {
            expected: "legacy field",
            version,
        });
    };

    let mut credentials = DeviceCredentials::new(fields.device_id);
    credentials.credentials_type = fields.credentials_type;
    credentials.credentials_id = fields.credentials_id.clone();
    credentials.credentials_value = fields.credentials_value.clone();

    Ok(credentials)
}
