//! Route stop types.

use serde::Serialize;

use super::Timestamp;

/// The UTC and local times of a stop, as delivered by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StopTime {
    /// Time in UTC.
    pub utc: Option<Timestamp>,
    /// Wall-clock time at the airport.
    pub local: Option<Timestamp>,
}

/// One end of a segment or sector: an airport code and the time there.
///
/// Every field may be absent. A stop built from a missing leg has no code
/// and no times, but still serializes with an (all-null) `time` object.
///
/// # Examples
///
/// ```
/// use itinerary_mapper::domain::{RouteStop, Timestamp};
///
/// let stop = RouteStop::new(
///     Some("OSL".into()),
///     Some(Timestamp::from("2020-01-01T10:00:00Z")),
///     None,
/// );
/// assert_eq!(stop.code(), Some("OSL"));
/// assert!(RouteStop::default().code().is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RouteStop {
    /// Airport (or station) code.
    pub code: Option<String>,
    /// When the stop happens.
    pub time: StopTime,
}

impl RouteStop {
    /// Create a stop from its parts.
    pub fn new(code: Option<String>, utc: Option<Timestamp>, local: Option<Timestamp>) -> Self {
        Self {
            code,
            time: StopTime { utc, local },
        }
    }

    /// Returns the airport code, if known.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Returns the UTC time, if known.
    pub fn utc(&self) -> Option<&Timestamp> {
        self.time.utc.as_ref()
    }
}
