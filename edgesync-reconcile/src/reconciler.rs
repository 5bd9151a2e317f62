//! Entity reconcilers — one per entity kind.
//!
//! Both kinds run the same linear pipeline: decode → identity resolution
//! (create vs update) → collision resolution → validation → persistence
//! → notification; devices additionally bootstrap credentials on
//! creation, under the per-tenant creation guard. Any stage failure
//! aborts the remaining stages and is re-raised to the caller.

use crate::codec::{JsonPayloadCodec, PayloadCodec};
use crate::collision::{resolve_device_name, resolve_resource_key};
use crate::credentials::CredentialManager;
use crate::decode::{decode_device, decode_resource};
use crate::error::{ReconcileError, ReconcileResult};
use crate::guard::CreationGuard;
use crate::msg::{DeviceUpdateMsg, ResourceUpdateMsg};
use crate::notify::{ChangeListener, NoopListener};
use crate::validate::{EntityValidator, TenantOwnershipValidator};
use async_trait::async_trait;
use edgesync_model::{Device, Resource};
use edgesync_store::{CredentialsStore, DeviceStore, ResourceStore};
use edgesync_types::{
    now_unix_millis, CustomerId, DeviceId, ProtocolVersion, ResourceId, TenantId,
};
use std::sync::Arc;
use tracing::error;

/// Configuration shared by the reconcilers.
#[derive(Debug, Clone)]
pub struct ReconcilerConfig {
    /// First protocol version that transmits structured entity blobs.
    pub structured_cutover: ProtocolVersion,
    /// Page size for the resource collision scan.
    pub collision_scan_page_size: usize,
}

impl Default for ReconcilerConfig {
    fn default() -> Self {
        Self {
            structured_cutover: ProtocolVersion::STRUCTURED_ENTITY_MIN,
            collision_scan_page_size: 1024,
        }
    }
}

/// Outcome of one reconciliation call, for the caller to log or notify.
/// A rename on collision is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconcileOutcome {
    /// The entity did not exist and was created.
    pub created: bool,
    /// The key was renamed to restore uniqueness.
    pub renamed: bool,
}

/// Computes a device's customer assignment. The prior assignment is
/// `None` on creation.
#[async_trait]
pub trait CustomerResolver: Send + Sync {
    async fn resolve(
        &self,
        tenant: TenantId,
        prior: Option<CustomerId>,
        msg: &DeviceUpdateMsg,
    ) -> Option<CustomerId>;
}

/// Default resolver: keeps whatever assignment already existed.
pub struct KeepPriorCustomer;

#[async_trait]
impl CustomerResolver for KeepPriorCustomer {
    async fn resolve(
        &self,
        _tenant: TenantId,
        prior: Option<CustomerId>,
        _msg: &DeviceUpdateMsg,
    ) -> Option<CustomerId> {
        prior
    }
}

/// Reconciles device update messages into the store.
pub struct DeviceReconciler {
    devices: Arc<dyn DeviceStore>,
    credentials: CredentialManager,
    validator: Arc<dyn EntityValidator<Device>>,
    customers: Arc<dyn CustomerResolver>,
    listener: Arc<dyn ChangeListener<Device>>,
    codec: Arc<dyn PayloadCodec>,
    guard: CreationGuard,
    config: ReconcilerConfig,
}

impl DeviceReconciler {
    /// Creates a reconciler with the default validator, customer
    /// resolver, listener and payload codec.
    pub fn new(
        devices: Arc<dyn DeviceStore>,
        credentials: Arc<dyn CredentialsStore>,
        config: ReconcilerConfig,
    ) -> Self {
        let manager =
            CredentialManager::new(devices.clone(), credentials, config.structured_cutover);
        Self {
            devices,
            credentials: manager,
            validator: Arc::new(TenantOwnershipValidator),
            customers: Arc::new(KeepPriorCustomer),
            listener: Arc::new(NoopListener),
            codec: Arc::new(JsonPayloadCodec),
            guard: CreationGuard::new(),
            config,
        }
    }

    /// Replaces the validator.
    #[must_use]
    pub fn with_validator(mut self, validator: Arc<dyn EntityValidator<Device>>) -> Self {
        self.validator = validator;
        self
    }

    /// Replaces the customer resolver.
    #[must_use]
    pub fn with_customer_resolver(mut self, customers: Arc<dyn CustomerResolver>) -> Self {
        self.customers = customers;
        self
    }

    /// Replaces the change listener.
    #[must_use]
    pub fn with_listener(mut self, listener: Arc<dyn ChangeListener<Device>>) -> Self {
        self.listener = listener;
        self
    }

    /// Replaces the legacy payload codec.
    #[must_use]
    pub fn with_codec(mut self, codec: Arc<dyn PayloadCodec>) -> Self {
        self.codec = codec;
        self
    }

    /// The credential lifecycle manager backing this reconciler, for
    /// applying explicit credentials-update messages.
    pub fn credentials(&self) -> &CredentialManager {
        &self.credentials
    }

    /// Reconciles one device update message.
    ///
    /// Runs under the tenant's creation lock for the whole pipeline, so
    /// concurrent calls for the same tenant cannot both decide to create
    /// the same effective identity.
    pub async fn reconcile(
        &self,
        tenant: TenantId,
        device_id: DeviceId,
        msg: &DeviceUpdateMsg,
        version: ProtocolVersion,
    ) -> ReconcileResult<ReconcileOutcome> {
        let _lock = self.guard.acquire(tenant).await;
        match self.run_pipeline(tenant, device_id, msg, version).await {
            Ok(outcome) => Ok(outcome),
            Err(err) => {
                error!(%tenant, ?msg, %err, "failed to process device update");
                Err(err)
            }
        }
    }

    async fn run_pipeline(
        &self,
        tenant: TenantId,
        device_id: DeviceId,
        msg: &DeviceUpdateMsg,
        version: ProtocolVersion,
    ) -> ReconcileResult<ReconcileOutcome> {
        let mut device = decode_device(
            msg,
            tenant,
            device_id,
            version,
            self.config.structured_cutover,
            self.codec.as_ref(),
        )?;

        let existing = self.devices.find_by_id(tenant, device_id).await?;
        let created = existing.is_none();
        if created {
            // Identity is cleared pending reinsertion; the creation time
            // comes from the identity's embedded time component.
            device.id = None;
            device.created_at = device_id
                .embedded_unix_millis()
                .unwrap_or_else(now_unix_millis);
        } else {
            device.id = Some(device_id);
        }

        let (name, renamed) =
            resolve_device_name(self.devices.as_ref(), tenant, device_id, &device.name).await?;
        device.name = name;

        let prior_customer = if created {
            None
        } else {
            existing.as_ref().and_then(|d| d.customer_id)
        };
        device.customer_id = self.customers.resolve(tenant, prior_customer, msg).await;

        self.validator.validate(&device)?;

        if created {
            // The pre-generated remote identity is authoritative; force
            // it back on before persistence.
            device.id = Some(device_id);
        }
        let saved = self.devices.save(&device).await?;

        if created {
            self.credentials
                .bootstrap(tenant, device_id)
                .await
                .map_err(|source| ReconcileError::CredentialBootstrap { device_id, source })?;
        }

        self.listener.on_changed(&saved, existing.as_ref()).await;

        Ok(ReconcileOutcome { created, renamed })
    }
}

/// Reconciles resource update messages into the store.
///
/// Unlike devices, resource creation takes no concurrency guard:
/// concurrent creates against the same key can both pass the collision
/// scan before either persists. This matches the upstream behavior and
/// is a known gap.
pub struct ResourceReconciler {
    resources: Arc<dyn ResourceStore>,
    validator: Arc<dyn EntityValidator<Resource>>,
    listener: Arc<dyn ChangeListener<Resource>>,
    config: ReconcilerConfig,
}

impl ResourceReconciler {
    /// Creates a reconciler with the default validator and listener.
    pub fn new(resources: Arc<dyn ResourceStore>, config: ReconcilerConfig) -> Self {
        Self {
            resources,
            validator: Arc::new(TenantOwnershipValidator),
            listener: Arc::new(NoopListener),
            config,
        }
    }

    /// Replaces the validator.
    #[must_use]
    pub fn with_validator(mut self, validator: Arc<dyn EntityValidator<Resource>>) -> Self {
        self.validator = validator;
        self
    }

    /// Replaces the change listener.
    #[must_use]
    pub fn with_listener(mut self, listener: Arc<dyn ChangeListener<Resource>>) -> Self {
        self.listener = listener;
        self
    }

    /// Reconciles one resource update message.
    pub async fn reconcile(
        &self,
        tenant: TenantId,
        resource_id: ResourceId,
        msg: &ResourceUpdateMsg,
        version: ProtocolVersion,
    ) -> ReconcileResult<ReconcileOutcome> {
        match self.run_pipeline(tenant, resource_id, msg, version).await {
            Ok(outcome) => Ok(outcome),
            Err(err) => {
                error!(%tenant, ?msg, %err, "failed to process resource update");
                Err(err)
            }
        }
    }

    async fn run_pipeline(
        &self,
        tenant: TenantId,
        resource_id: ResourceId,
        msg: &ResourceUpdateMsg,
        version: ProtocolVersion,
    ) -> ReconcileResult<ReconcileOutcome> {
        let mut resource =
            decode_resource(msg, tenant, version, self.config.structured_cutover)?;

        let existing = self.resources.find_by_id(tenant, resource_id).await?;
        let created = existing.is_none();
        if created {
            resource.id = None;
            resource.created_at = resource_id
                .embedded_unix_millis()
                .unwrap_or_else(now_unix_millis);
        } else {
            resource.id = Some(resource_id);
            // Creation time is immutable; legacy messages do not carry it.
            if let Some(prev) = &existing {
                resource.created_at = prev.created_at;
            }
        }

        let (key, renamed) = resolve_resource_key(
            self.resources.as_ref(),
            tenant,
            resource_id,
            &resource.resource_type,
            &resource.resource_key,
            self.config.collision_scan_page_size,
        )
        .await?;
        resource.resource_key = key;

        self.validator.validate(&resource)?;

        if created {
            resource.id = Some(resource_id);
        }
        let saved = self.resources.save(&resource).await?;

        self.listener.on_changed(&saved, existing.as_ref()).await;

        Ok(ReconcileOutcome { created, renamed })
    }
}
