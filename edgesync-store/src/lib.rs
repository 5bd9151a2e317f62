//! Storage collaborator contract for EdgeSync.
//!
//! The reconciliation layer treats persistence as an external
//! collaborator: this crate defines the traits it depends on
//! ([`DeviceStore`], [`ResourceStore`], [`CredentialsStore`]) and ships
//! in-memory implementations for tests and embedding. A production
//! deployment implements the traits over its own storage engine.

mod error;
mod memory;
mod traits;

pub use error::{StorageError, StoreResult};
pub use memory::{MemoryCredentialsStore, MemoryDeviceStore, MemoryResourceStore};
pub use traits::{CredentialsStore, DeviceStore, ResourceStore};
