//! Canonical entity shapes for EdgeSync.
//!
//! The reconciliation layer decodes inbound messages into these types
//! and upserts them through the storage contract. Uniqueness invariants
//! (device name per tenant, resource key per tenant and type) are
//! enforced by the reconciler, not by these types.

mod credentials;
mod device;
mod resource;

pub use credentials::{CredentialsType, DeviceCredentials};
pub use device::Device;
pub use resource::{Resource, ResourceType};
