//! The device entity.

use edgesync_types::{CustomerId, DeviceId, DeviceProfileId, PackageId, TenantId};
use serde::{Deserialize, Serialize};

/// A device as reconciled into the central store.
///
/// The pair `(tenant_id, name)` is unique among non-deleted devices of a
/// tenant; the reconciler enforces this by renaming on collision.
///
/// Unknown fields in a structured payload are ignored for forward
/// compatibility, and absent fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Device {
    /// Identity, tenant-scoped. `None` while a creation is in flight.
    pub id: Option<DeviceId>,
    pub tenant_id: TenantId,
    /// Human-facing unique key within the tenant.
    pub name: String,
    pub device_type: String,
    pub label: Option<String>,
    pub device_profile_id: Option<DeviceProfileId>,
    pub customer_id: Option<CustomerId>,
    pub firmware_id: Option<PackageId>,
    pub software_id: Option<PackageId>,
    /// Structured device configuration blob; shape is sender-defined.
    pub device_data: Option<serde_json::Value>,
    /// Free-form metadata.
    pub additional_info: Option<serde_json::Value>,
    /// Creation time, unix milliseconds.
    pub created_at: i64,
}

impl Default for Device {
    fn default() -> Self {
        Self {
            id: None,
            tenant_id: TenantId::NIL,
            name: String::new(),
            device_type: String::new(),
            label: None,
            device_profile_id: None,
            customer_id: None,
            firmware_id: None,
            software_id: None,
            device_data: None,
            additional_info: None,
            created_at: 0,
        }
    }
}

impl Device {
    /// Creates an empty device owned by a tenant.
    #[must_use]
    pub fn new(tenant_id: TenantId) -> Self {
        Self {
            tenant_id,
            ..Self::default()
        }
    }
}
