//! Core type definitions for EdgeSync.
//!
//! Identifier newtypes, the protocol version marker, and paging
//! primitives shared by the model, store, and reconciliation layers.

mod ids;
mod page;
mod time;
mod version;

pub use ids::{
    CredentialsRecordId, CustomerId, DeviceId, DeviceProfileId, PackageId, ResourceId, TenantId,
};
pub use page::{Page, PageLink};
pub use time::now_unix_millis;
pub use version::ProtocolVersion;
