//! Identifier types used throughout the EdgeSync core.
//!
//! Entity identities are generated on the remote (edge) node before
//! transmission, as UUID v7 values whose embedded millisecond timestamp
//! doubles as the entity creation time on the legacy decode path.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! uuid_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a new id with the current timestamp.
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Creates an id from an existing UUID.
            #[must_use]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the underlying UUID.
            #[must_use]
            pub const fn as_uuid(&self) -> Uuid {
                self.0
            }

            /// Parses an id from a string.
            pub fn parse(s: &str) -> Result<Self, uuid::Error> {
                Ok(Self(Uuid::parse_str(s)?))
            }

            /// Extracts the unix-millisecond timestamp embedded in the UUID,
            /// if the UUID version carries one (v1, v6, v7).
            #[must_use]
            pub fn embedded_unix_millis(&self) -> Option<i64> {
                self.0.get_timestamp().map(|ts| {
                    let (secs, nanos) = ts.to_unix();
                    secs as i64 * 1000 + i64::from(nanos) / 1_000_000
                })
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

uuid_id! {
    /// Identifier for a tenant. All entities are scoped to a tenant;
    /// resources shared across tenants use [`TenantId::SYSTEM`].
    TenantId
}

uuid_id! {
    /// Identifier for a device entity.
    DeviceId
}

uuid_id! {
    /// Identifier for a resource entity.
    ResourceId
}

uuid_id! {
    /// Identifier for a customer a device may be assigned to.
    CustomerId
}

uuid_id! {
    /// Identifier for a device profile reference.
    DeviceProfileId
}

uuid_id! {
    /// Identifier for a firmware/software package reference.
    PackageId
}

uuid_id! {
    /// Row identity of a device credentials record. Preserved across
    /// credential replacements.
    CredentialsRecordId
}

impl TenantId {
    /// Reserved sentinel tenant that owns system-scoped resources.
    pub const SYSTEM: TenantId = TenantId(Uuid::max());

    /// The absent tenant, used as a placeholder before ownership is known.
    pub const NIL: TenantId = TenantId(Uuid::nil());

    /// Returns true if this is the system sentinel tenant.
    #[must_use]
    pub fn is_system(&self) -> bool {
        *self == Self::SYSTEM
    }

    /// Returns true if the tenant id carries no value (nil UUID).
    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}
