//! Reading itinerary payloads from JSON.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::debug;

use super::error::PayloadError;
use super::types::ApiItinerary;

impl ApiItinerary {
    /// Parse an itinerary from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, PayloadError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse an itinerary from a reader (e.g., stdin).
    pub fn from_reader(reader: impl Read) -> Result<Self, PayloadError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Load an itinerary from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, PayloadError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading itinerary payload");
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }
}
