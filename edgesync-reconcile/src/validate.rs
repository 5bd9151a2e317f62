//! Validation collaborator.
//!
//! Validation rule bodies are external to this system; the reconcilers
//! only require an [`EntityValidator`] and surface its failures
//! unmodified. A tenant-ownership validator is provided as the default.

use edgesync_model::{Device, Resource};
use edgesync_types::TenantId;
use thiserror::Error;

/// A business-rule violation. Fatal to the reconciliation attempt.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("entity has no tenant")]
    MissingTenant,

    #[error("entity key is empty")]
    EmptyKey,

    /// Failure from an external rule set.
    #[error("{0}")]
    Rule(String),
}

/// Validates a candidate entity before persistence.
pub trait EntityValidator<E>: Send + Sync {
    fn validate(&self, entity: &E) -> Result<(), ValidationError>;
}

/// Extracts the tenant ownership and human-facing key of an entity.
pub trait TenantScoped {
    fn tenant_id(&self) -> TenantId;
    fn key(&self) -> &str;
}

impl TenantScoped for Device {
    fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }

    fn key(&self) -> &str {
        &self.name
    }
}

impl TenantScoped for Resource {
    fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }

    fn key(&self) -> &str {
        &self.resource_key
    }
}

/// Default validator: the entity must be owned by a tenant and carry a
/// non-empty key.
pub struct TenantOwnershipValidator;

impl<E: TenantScoped> EntityValidator<E> for TenantOwnershipValidator {
    fn validate(&self, entity: &E) -> Result<(), ValidationError> {
        if entity.tenant_id().is_nil() {
            return Err(ValidationError::MissingTenant);
        }
        if entity.key().is_empty() {
            return Err(ValidationError::EmptyKey);
        }
        Ok(())
    }
}
