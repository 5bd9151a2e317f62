//! In-memory store implementations.
//!
//! Used by tests and by embedders that do not need durable storage.
//! Paged resource lookups are ordered by resource id, as the contract
//! requires.

use crate::error::{StorageError, StoreResult};
use crate::traits::{CredentialsStore, DeviceStore, ResourceStore};
use async_trait::async_trait;
use edgesync_model::{Device, DeviceCredentials, Resource, ResourceType};
use edgesync_types::{CredentialsRecordId, DeviceId, Page, PageLink, ResourceId, TenantId};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-memory [`DeviceStore`].
#[derive(Default)]
pub struct MemoryDeviceStore {
    devices: RwLock<HashMap<DeviceId, Device>>,
}

impl MemoryDeviceStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored devices.
    pub async fn len(&self) -> usize {
        self.devices.read().await.len()
    }

    /// Whether the store is empty.
    pub async fn is_empty(&self) -> bool {
        self.devices.read().await.is_empty()
    }
}

#[async_trait]
impl DeviceStore for MemoryDeviceStore {
    async fn find_by_id(&self, tenant: TenantId, id: DeviceId) -> StoreResult<Option<Device>> {
        let devices = self.devices.read().await;
        Ok(devices
            .get(&id)
            .filter(|d| d.tenant_id == tenant)
            .cloned())
    }

    async fn find_by_name(&self, tenant: TenantId, name: &str) -> StoreResult<Option<Device>> {
        let devices = self.devices.read().await;
        Ok(devices
            .values()
            .find(|d| d.tenant_id == tenant && d.name == name)
            .cloned())
    }

    async fn save(&self, device: &Device) -> StoreResult<Device> {
        let id = device
            .id
            .ok_or_else(|| StorageError::InvalidData("device has no id".into()))?;
        let mut devices = self.devices.write().await;
        devices.insert(id, device.clone());
        Ok(device.clone())
    }
}

/// In-memory [`ResourceStore`].
#[derive(Default)]
pub struct MemoryResourceStore {
    resources: RwLock<HashMap<ResourceId, Resource>>,
}

impl MemoryResourceStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored resources.
    pub async fn len(&self) -> usize {
        self.resources.read().await.len()
    }

    /// Whether the store is empty.
    pub async fn is_empty(&self) -> bool {
        self.resources.read().await.is_empty()
    }
}

#[async_trait]
impl ResourceStore for MemoryResourceStore {
    async fn find_by_id(&self, tenant: TenantId, id: ResourceId) -> StoreResult<Option<Resource>> {
        let resources = self.resources.read().await;
        // System resources are visible to every tenant.
        Ok(resources
            .get(&id)
            .filter(|r| r.tenant_id == tenant || r.tenant_id.is_system())
            .cloned())
    }

    async fn find_by_type(
        &self,
        tenant: TenantId,
        resource_type: &ResourceType,
        link: PageLink,
    ) -> StoreResult<Page<Resource>> {
        let resources = self.resources.read().await;
        let mut matching: Vec<&Resource> = resources
            .values()
            .filter(|r| r.tenant_id == tenant && &r.resource_type == resource_type)
            .collect();
        matching.sort_by_key(|r| r.id.map(|id| id.as_uuid()));

        let start = link.offset();
        if start >= matching.len() {
            return Ok(Page::empty());
        }
        let end = (start + link.page_size).min(matching.len());
        let items = matching[start..end].iter().map(|r| (*r).clone()).collect();
        Ok(Page::new(items, end < matching.len()))
    }

    async fn save(&self, resource: &Resource) -> StoreResult<Resource> {
        let id = resource
            .id
            .ok_or_else(|| StorageError::InvalidData("resource has no id".into()))?;
        let mut resources = self.resources.write().await;
        resources.insert(id, resource.clone());
        Ok(resource.clone())
    }
}

/// In-memory [`CredentialsStore`].
#[derive(Default)]
pub struct MemoryCredentialsStore {
    records: RwLock<HashMap<CredentialsRecordId, DeviceCredentials>>,
}

impl MemoryCredentialsStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored credentials records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether the store is empty.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl CredentialsStore for MemoryCredentialsStore {
    async fn find_by_device_id(
        &self,
        _tenant: TenantId,
        device_id: DeviceId,
    ) -> StoreResult<Option<DeviceCredentials>> {
        let records = self.records.read().await;
        Ok(records
            .values()
            .find(|c| c.device_id == device_id)
            .cloned())
    }

    async fn save(
        &self,
        _tenant: TenantId,
        credentials: &DeviceCredentials,
    ) -> StoreResult<DeviceCredentials> {
        let id = credentials
            .id
            .ok_or_else(|| StorageError::InvalidData("credentials record has no id".into()))?;
        let mut records = self.records.write().await;
        records.insert(id, credentials.clone());
        Ok(credentials.clone())
    }
}
