//! Device credential lifecycle.
//!
//! A device's credentials record is created exactly once, synchronously,
//! inside the reconciliation call that created the device. Afterwards it
//! is only ever replaced wholesale via an explicit credentials-update
//! message; the record's own identity is preserved across replacements.

use crate::decode::{decode_credentials, DecodeError};
use crate::msg::CredentialsUpdateMsg;
use crate::random::random_alphanumeric;
use edgesync_model::{CredentialsType, DeviceCredentials};
use edgesync_store::{CredentialsStore, DeviceStore, StorageError};
use edgesync_types::{CredentialsRecordId, DeviceId, ProtocolVersion, TenantId};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, warn};

/// Length of a bootstrapped credentials identifier.
pub const CREDENTIALS_ID_LEN: usize = 20;

/// Errors from credential lifecycle operations. All fatal to the call.
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// The device exists but its credentials record is gone. Requires
    /// external reconciliation.
    #[error("device {0} has no credentials record")]
    RecordMissing(DeviceId),
}

/// Manages the credentials record dependent on a device.
pub struct CredentialManager {
    devices: Arc<dyn DeviceStore>,
    credentials: Arc<dyn CredentialsStore>,
    structured_cutover: ProtocolVersion,
}

impl CredentialManager {
    /// Creates a manager over the given stores.
    pub fn new(
        devices: Arc<dyn DeviceStore>,
        credentials: Arc<dyn CredentialsStore>,
        structured_cutover: ProtocolVersion,
    ) -> Self {
        Self {
            devices,
            credentials,
            structured_cutover,
        }
    }

    /// Issues a fresh access credential for a newly created device.
    ///
    /// Called exactly once, within the reconciliation call that created
    /// the device. A failure here fails the creation as a whole.
    pub async fn bootstrap(
        &self,
        tenant: TenantId,
        device_id: DeviceId,
    ) -> Result<DeviceCredentials, CredentialError> {
        let record = DeviceCredentials {
            id: Some(CredentialsRecordId::new()),
            device_id,
            credentials_type: CredentialsType::AccessToken,
            credentials_id: random_alphanumeric(CREDENTIALS_ID_LEN),
            credentials_value: None,
        };
        let saved = self.credentials.save(tenant, &record).await?;
        debug!(%tenant, %device_id, "bootstrapped device credentials");
        Ok(saved)
    }

    /// Applies an explicit credentials-replacement message.
    ///
    /// An update for an unknown device is not fatal: the remote node may
    /// be ahead of a not-yet-synced device creation. It is logged and
    /// absorbed.
    pub async fn apply_update(
        &self,
        tenant: TenantId,
        msg: &CredentialsUpdateMsg,
        version: ProtocolVersion,
    ) -> Result<(), CredentialError> {
        match self.run_update(tenant, msg, version).await {
            Ok(()) => Ok(()),
            Err(err) => {
                error!(%tenant, ?msg, %err, "failed to process credentials update");
                Err(err)
            }
        }
    }

    async fn run_update(
        &self,
        tenant: TenantId,
        msg: &CredentialsUpdateMsg,
        version: ProtocolVersion,
    ) -> Result<(), CredentialError> {
        let incoming = decode_credentials(msg, version, self.structured_cutover)?;

        let Some(device) = self.devices.find_by_id(tenant, incoming.device_id).await? else {
            warn!(
                %tenant,
                device_id = %incoming.device_id,
                "credentials update for unknown device, skipping"
            );
            return Ok(());
        };

        debug!(
            %tenant,
            device_name = %device.name,
            credentials_id = %incoming.credentials_id,
            "updating device credentials"
        );

        let mut record = self
            .credentials
            .find_by_device_id(tenant, incoming.device_id)
            .await?
            .ok_or(CredentialError::RecordMissing(incoming.device_id))?;

        // Replace type, identifier and value; the row identity stays.
        record.credentials_type = incoming.credentials_type;
        record.credentials_id = incoming.credentials_id;
        record.credentials_value = incoming.credentials_value;

        self.credentials.save(tenant, &record).await?;
        Ok(())
    }
}
