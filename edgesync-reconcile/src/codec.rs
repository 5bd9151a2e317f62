//! Pluggable decoding of the legacy embedded structured-data blob.
//!
//! Legacy device messages carry their configuration blob in a
//! sender-chosen encoding. A codec that does not recognize the encoding
//! returns `None`; the decoder then leaves the field unset rather than
//! failing the message.

use serde_json::Value;

/// Decodes an embedded structured-data blob.
pub trait PayloadCodec: Send + Sync {
    /// Returns `None` when the encoding is not recognized.
    fn decode(&self, bytes: &[u8]) -> Option<Value>;
}

/// Codec for blobs encoded as UTF-8 JSON.
pub struct JsonPayloadCodec;

impl PayloadCodec for JsonPayloadCodec {
    fn decode(&self, bytes: &[u8]) -> Option<Value> {
        serde_json::from_slice(bytes).ok()
    }
}
