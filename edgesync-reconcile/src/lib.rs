//! Edge-to-cloud entity reconciliation core.
//!
//! Entity state pushed from a remote (edge) node arrives as
//! possibly-out-of-order, possibly-duplicate update messages. This crate
//! turns each message into an idempotent assertion against the central
//! store:
//!
//! - **Decode**: a version-tagged payload becomes a canonical entity,
//!   via legacy discrete fields or a structured blob ([`decode`]).
//! - **Identity resolution**: lookup by the pre-generated remote
//!   identity decides create vs update.
//! - **Collision resolution**: name/key uniqueness is restored by
//!   deterministic renaming ([`collision`]).
//! - **Credential lifecycle**: devices get an access credential at
//!   creation, replaced only by explicit update messages
//!   ([`credentials`]).
//! - **Creation guard**: per-tenant serialization of the device
//!   lookup-then-insert window ([`guard`]).
//!
//! Transport, persistence, validation rules and downstream propagation
//! are external collaborators behind traits.
//!
//! # Example
//!
//! ```
//! use edgesync_reconcile::{DeviceReconciler, DeviceUpdateMsg, ReconcilerConfig};
//! use edgesync_store::{MemoryCredentialsStore, MemoryDeviceStore};
//! use edgesync_types::{DeviceId, ProtocolVersion, TenantId};
//! use std::sync::Arc;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let reconciler = DeviceReconciler::new(
//!     Arc::new(MemoryDeviceStore::new()),
//!     Arc::new(MemoryCredentialsStore::new()),
//!     ReconcilerConfig::default(),
//! );
//!
//! let tenant = TenantId::new();
//! let device_id = DeviceId::new();
//! let msg = DeviceUpdateMsg::structured(format!(
//!     r#"{{"tenant_id":"{tenant}","name":"sensor1","device_type":"sensor"}}"#
//! ));
//! let outcome = reconciler
//!     .reconcile(tenant, device_id, &msg, ProtocolVersion::CURRENT)
//!     .await?;
//! assert!(outcome.created);
//! # Ok(())
//! # }
//! ```

pub mod codec;
pub mod collision;
pub mod credentials;
pub mod decode;
mod error;
pub mod guard;
mod msg;
pub mod notify;
mod random;
mod reconciler;
pub mod validate;

pub use codec::{JsonPayloadCodec, PayloadCodec};
pub use collision::{resolve_device_name, resolve_resource_key, RENAME_SUFFIX_LEN};
pub use credentials::{CredentialError, CredentialManager, CREDENTIALS_ID_LEN};
pub use decode::{decode_credentials, decode_device, decode_resource, DecodeError};
pub use error::{ReconcileError, ReconcileResult};
pub use guard::CreationGuard;
pub use msg::{
    CredentialsFields, CredentialsPayload, CredentialsUpdateMsg, DeviceFields, DevicePayload,
    DeviceUpdateMsg, ResourceFields, ResourcePayload, ResourceUpdateMsg,
};
pub use notify::{ChangeListener, NoopListener};
pub use reconciler::{
    CustomerResolver, DeviceReconciler, KeepPriorCustomer, ReconcileOutcome, ReconcilerConfig,
    ResourceReconciler,
};
pub use validate::{EntityValidator, TenantOwnershipValidator, TenantScoped, ValidationError};
