//! Creation concurrency guard.
//!
//! Two reconciliation calls racing on the same target identity must not
//! both observe "absent" and both decide to create. The race window
//! spans lookup-then-insert, so the lock is held across the entire
//! decode-through-persist pipeline, not just the existence check.
//!
//! Locks are keyed by tenant: device reconciliation for one tenant is
//! fully serialized, different tenants proceed independently. Callers
//! block without timeout; a stuck persistence call stalls the tenant's
//! device reconciliation until it returns.

use edgesync_types::TenantId;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Per-tenant mutual-exclusion gate for device creation.
#[derive(Default)]
pub struct CreationGuard {
    locks: Mutex<HashMap<TenantId, Arc<Mutex<()>>>>,
}

impl CreationGuard {
    /// Creates a guard with no held locks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquires the lock for a tenant, waiting if it is held.
    pub async fn acquire(&self, tenant: TenantId) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().await;
            locks
                .entry(tenant)
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .clone()
        };
        lock.lock_owned().await
    }
}
