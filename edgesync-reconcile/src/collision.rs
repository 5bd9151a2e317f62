//! Deterministic key-collision resolution.
//!
//! A collision is two entities of the same kind and tenant sharing a
//! human-facing key while having different identities. Devices are
//! checked with an indexed name lookup; resources require a full
//! paginated scan of the same-typed set because no indexed lookup by
//! key is assumed available.

use crate::random::random_alphabetic;
use edgesync_model::ResourceType;
use edgesync_store::{DeviceStore, ResourceStore, StoreResult};
use edgesync_types::{DeviceId, PageLink, ResourceId, TenantId};
use tracing::warn;

/// Length of the random rename suffix/prefix.
pub const RENAME_SUFFIX_LEN: usize = 15;

/// Resolves a device name against the tenant's existing devices.
///
/// If another device already holds the name, a random alphabetic suffix
/// is appended. The new name is not re-checked against the store.
pub async fn resolve_device_name(
    store: &dyn DeviceStore,
    tenant: TenantId,
    target: DeviceId,
    name: &str,
) -> StoreResult<(String, bool)> {
    let existing = store.find_by_name(tenant, name).await?;
    match existing {
        Some(other) if other.id != Some(target) => {
            let renamed_to = format!("{}_{}", name, random_alphabetic(RENAME_SUFFIX_LEN));
            warn!(
                %tenant,
                old_name = name,
                new_name = %renamed_to,
                "device name already exists, renaming"
            );
            Ok((renamed_to, true))
        }
        _ => Ok((name.to_string(), false)),
    }
}

/// Resolves a resource key against the full set of same-typed resources
/// for a tenant.
///
/// Every entry whose key matches the candidate but whose identity differs
/// prepends a fresh random prefix — the scan continues across the full
/// result set, so a later duplicate wins over an earlier rename decision.
/// The store's id-ordered paging keeps the outcome reproducible.
pub async fn resolve_resource_key(
    store: &dyn ResourceStore,
    tenant: TenantId,
    target: ResourceId,
    resource_type: &ResourceType,
    key: &str,
    page_size: usize,
) -> StoreResult<(String, bool)> {
    let mut resolved = key.to_string();
    let mut renamed = false;

    let mut link = PageLink::first(page_size);
    loop {
        let page = store.find_by_type(tenant, resource_type, link).await?;
        for existing in &page.items {
            if existing.resource_key == resolved && existing.id != Some(target) {
                resolved = format!(
                    "{}_{}",
                    random_alphabetic(RENAME_SUFFIX_LEN),
                    resolved
                );
                warn!(
                    %tenant,
                    %resource_type,
                    old_key = key,
                    new_key = %resolved,
                    "resource key already exists, renaming"
                );
                renamed = true;
            }
        }
        if !page.has_next {
            break;
        }
        link = link.next();
    }

    Ok((resolved, renamed))
}
