//! Protocol version marker carried by every inbound message.
//!
//! The version is declared by the originating edge node and is used
//! solely to select the decode strategy: senders older than the
//! structured-entity cutover still transmit discrete fields, newer
//! senders transmit a single opaque entity blob.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared protocol version of a remote edge node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProtocolVersion(pub u32);

impl ProtocolVersion {
    /// The oldest version still accepted. Sends discrete fields only.
    pub const LEGACY: ProtocolVersion = ProtocolVersion(1);

    /// First version that transmits entities as a single structured blob.
    pub const STRUCTURED_ENTITY_MIN: ProtocolVersion = ProtocolVersion(2);

    /// The version this node itself speaks.
    pub const CURRENT: ProtocolVersion = ProtocolVersion(2);

    /// Whether a sender at this version transmits structured entity blobs,
    /// given the configured cutover version.
    #[must_use]
    pub fn supports_structured_entities(self, cutover: ProtocolVersion) -> bool {
        self >= cutover
    }
}

impl fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}
