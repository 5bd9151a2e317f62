//! Error types for the reconciliation layer.

use crate::credentials::CredentialError;
use crate::decode::DecodeError;
use crate::validate::ValidationError;
use edgesync_store::StorageError;
use edgesync_types::DeviceId;
use thiserror::Error;

/// Result type for reconciliation operations.
pub type ReconcileResult<T> = Result<T, ReconcileError>;

/// A failed reconciliation attempt. Every variant is fatal to the call;
/// the caller owns retry and dead-lettering.
#[derive(Debug, Error)]
pub enum ReconcileError {
    /// The message cannot be converted to an entity.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// A business rule rejected the candidate. Surfaced unmodified.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The storage collaborator failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Credential bootstrap failed after the device was persisted. The
    /// device exists without credentials; the caller must alert.
    #[error("credential bootstrap failed for device {device_id}: {source}")]
    CredentialBootstrap {
        device_id: DeviceId,
        #[source]
        source: CredentialError,
    },
}
