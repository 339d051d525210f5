//! Global identifier unmasking.
//!
//! The GraphQL layer hands out opaque global ids; the booking API wants its
//! own local ids. Decoding is a capability supplied by the caller through
//! [`IdDecoder`]. [`RelayGlobalId`] decodes the common Relay encoding,
//! `base64("Type:localId")`.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// Errors from decoding a global identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GlobalIdError {
    /// Not valid base64
    #[error("invalid base64 in global id {0:?}")]
    InvalidBase64(String),

    /// Decoded bytes are not UTF-8
    #[error("global id {0:?} does not decode to UTF-8")]
    InvalidUtf8(String),

    /// Decoded text has no `Type:` prefix
    #[error("global id {0:?} has no type separator")]
    MissingSeparator(String),
}

/// Turns an opaque global id into the upstream API's local id.
pub trait IdDecoder {
    /// Decode a single id.
    fn decode(&self, id: &str) -> Result<String, GlobalIdError>;
}

impl<F> IdDecoder for F
where
    F: Fn(&str) -> Result<String, GlobalIdError>,
{
    fn decode(&self, id: &str) -> Result<String, GlobalIdError> {
        self(id)
    }
}

/// Decoder for Relay-style global ids (`base64("Type:localId")`).
///
/// # Examples
///
/// ```
/// use itinerary_mapper::global_id::{IdDecoder, RelayGlobalId};
///
/// // base64("Booking:123")
/// assert_eq!(RelayGlobalId.decode("Qm9va2luZzoxMjM=").unwrap(), "123");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RelayGlobalId;

impl RelayGlobalId {
    /// Decode an id into its `(type, local id)` parts.
    pub fn split(&self, id: &str) -> Result<(String, String), GlobalIdError> {
        let bytes = STANDARD
            .decode(id)
            .map_err(|_| GlobalIdError::InvalidBase64(id.to_string()))?;
        let text =
            String::from_utf8(bytes).map_err(|_| GlobalIdError::InvalidUtf8(id.to_string()))?;

        // Local ids may themselves contain colons; only the first separates
        let (kind, local) = text
            .split_once(':')
            .ok_or_else(|| GlobalIdError::MissingSeparator(id.to_string()))?;

        Ok((kind.to_string(), local.to_string()))
    }
}

impl IdDecoder for RelayGlobalId {
    fn decode(&self, id: &str) -> Result<String, GlobalIdError> {
        self.split(id).map(|(_, local)| local)
    }
}

/// Decode a list of global ids, failing on the first bad one.
pub fn unmask_ids<D, S>(decoder: &D, ids: &[S]) -> Result<Vec<String>, GlobalIdError>
where
    D: IdDecoder + ?Sized,
    S: AsRef<str>,
{
    ids.iter().map(|id| decoder.decode(id.as_ref())).collect()
}
