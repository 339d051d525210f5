//! Segment type.
//!
//! A `Segment` is one flown (or driven) hop within a sector, in the shape
//! consumed by the display layer.

use serde::Serialize;

use super::RouteStop;

/// The company operating a segment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Carrier {
    /// Carrier name. The booking API does not deliver it yet.
    pub name: Option<String>,
    /// IATA carrier code (e.g., "FR").
    pub code: Option<String>,
}

/// The vehicle used on a segment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    /// Vehicle type as reported upstream ("aircraft", "bus", "train", ...).
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Flight or service number.
    pub unique_no: Option<String>,
}

/// One hop of a sector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Segment {
    /// Upstream leg identifier.
    pub id: Option<String>,
    /// Minutes from departure to arrival (UTC).
    pub duration: Option<i64>,
    pub carrier: Carrier,
    pub vehicle: Vehicle,
    pub departure: RouteStop,
    pub arrival: RouteStop,
}

impl Segment {
    /// Returns the departure airport code, if known.
    pub fn origin(&self) -> Option<&str> {
        self.departure.code()
    }

    /// Returns the arrival airport code, if known.
    pub fn destination(&self) -> Option<&str> {
        self.arrival.code()
    }
}
