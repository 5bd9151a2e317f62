//! Storage collaborator contract.
//!
//! The reconciliation layer talks to the backing store exclusively
//! through these traits. The store provides atomicity for a single
//! upsert; the reconciler never wraps multiple operations in a
//! cross-store transaction.

use crate::error::StoreResult;
use async_trait::async_trait;
use edgesync_model::{Device, DeviceCredentials, Resource, ResourceType};
use edgesync_types::{DeviceId, Page, PageLink, ResourceId, TenantId};

/// Store for device entities.
#[async_trait]
pub trait DeviceStore: Send + Sync {
    /// Looks up a device by identity.
    async fn find_by_id(&self, tenant: TenantId, id: DeviceId) -> StoreResult<Option<Device>>;

    /// Looks up a device by its tenant-unique name.
    async fn find_by_name(&self, tenant: TenantId, name: &str) -> StoreResult<Option<Device>>;

    /// Upserts a device and returns the persisted value.
    /// The device must carry an identity.
    async fn save(&self, device: &Device) -> StoreResult<Device>;
}

/// Store for resource entities.
#[async_trait]
pub trait ResourceStore: Send + Sync {
    /// Looks up a resource by identity.
    async fn find_by_id(&self, tenant: TenantId, id: ResourceId) -> StoreResult<Option<Resource>>;

    /// Returns one page of resources of a given type for a tenant.
    ///
    /// Pages MUST be ordered by resource id so that repeated scans of an
    /// unchanged set visit entries in the same order.
    async fn find_by_type(
        &self,
        tenant: TenantId,
        resource_type: &ResourceType,
        link: PageLink,
    ) -> StoreResult<Page<Resource>>;

    /// Upserts a resource and returns the persisted value.
    /// The resource must carry an identity.
    async fn save(&self, resource: &Resource) -> StoreResult<Resource>;
}

/// Store for device credentials records.
#[async_trait]
pub trait CredentialsStore: Send + Sync {
    /// Looks up the credentials record owned by a device.
    async fn find_by_device_id(
        &self,
        tenant: TenantId,
        device_id: DeviceId,
    ) -> StoreResult<Option<DeviceCredentials>>;

    /// Upserts a credentials record and returns the persisted value.
    /// The record must carry a row identity.
    async fn save(
        &self,
        tenant: TenantId,
        credentials: &DeviceCredentials,
    ) -> StoreResult<DeviceCredentials>;
}
