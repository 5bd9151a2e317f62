//! The resource entity.

use edgesync_types::{ResourceId, TenantId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Discriminator for resource entities. Keys are unique per
/// `(tenant, resource_type)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceType(String);

impl ResourceType {
    /// Creates a resource type from its wire name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The wire name of this type.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ResourceType {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// A shared resource (script, model, certificate, ...) reconciled into
/// the central store.
///
/// The triple `(tenant_id, resource_type, resource_key)` is unique among
/// non-deleted resources. System-scoped resources are owned by
/// [`TenantId::SYSTEM`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Resource {
    /// Identity, tenant-scoped. `None` while a creation is in flight.
    pub id: Option<ResourceId>,
    pub tenant_id: TenantId,
    pub title: String,
    pub resource_type: ResourceType,
    /// Human-facing unique key within `(tenant, resource_type)`.
    pub resource_key: String,
    pub file_name: String,
    /// Resource content, base64 on the wire.
    pub data: Option<String>,
    pub etag: Option<String>,
    /// Creation time, unix milliseconds. Stamped when first persisted.
    pub created_at: i64,
}

impl Default for Resource {
    fn default() -> Self {
        Self {
            id: None,
            tenant_id: TenantId::NIL,
            title: String::new(),
            resource_type: ResourceType::new(""),
            resource_key: String::new(),
            file_name: String::new(),
            data: None,
            etag: None,
            created_at: 0,
        }
    }
}

impl Resource {
    /// Creates an empty resource owned by a tenant.
    #[must_use]
    pub fn new(tenant_id: TenantId) -> Self {
        Self {
            tenant_id,
            ..Self::default()
        }
    }
}
