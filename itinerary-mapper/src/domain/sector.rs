//! Sector type.
//!
//! A `Sector` is the whole part of a trip from its departure to its
//! arrival, e.g. Oslo -> Prague. A one-way trip has one sector, a return
//! trip two, and a multi-city trip two or more. Each sector holds the
//! segments flown along the way (Oslo -> Warsaw, Warsaw -> Prague).

use serde::Serialize;

use super::{RouteStop, Segment, difference_in_minutes};

/// An origin-to-destination group of segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Sector {
    /// Minutes from the overall departure to the overall arrival (UTC).
    pub duration: Option<i64>,
    /// Time spent at the destination before the next sector. Not derived
    /// from the data; always zero.
    pub stopover_duration: i64,
    pub departure: RouteStop,
    pub arrival: RouteStop,
    pub segments: Vec<Segment>,
}

impl Sector {
    /// Open an empty sector between two stops.
    ///
    /// The duration is computed from the stops' UTC times and is `None`
    /// if either is missing.
    ///
    /// # Examples
    ///
    /// ```
    /// use itinerary_mapper::domain::{RouteStop, Sector, Timestamp};
    ///
    /// let departure = RouteStop::new(
    ///     Some("OSL".into()),
    ///     Some(Timestamp::from("2020-01-01T06:00:00Z")),
    ///     None,
    /// );
    /// let arrival = RouteStop::new(
    ///     Some("PRG".into()),
    ///     Some(Timestamp::from("2020-01-01T09:15:00Z")),
    ///     None,
    /// );
    ///
    /// let sector = Sector::open(departure, arrival);
    /// assert_eq!(sector.duration, Some(195));
    /// assert!(sector.segments.is_empty());
    /// ```
    pub fn open(departure: RouteStop, arrival: RouteStop) -> Self {
        Self {
            duration: difference_in_minutes(departure.utc(), arrival.utc()),
            stopover_duration: 0,
            departure,
            arrival,
            segments: Vec::new(),
        }
    }

    /// Returns the overall departure code, if known.
    pub fn origin(&self) -> Option<&str> {
        self.departure.code()
    }

    /// Returns the overall arrival code, if known.
    pub fn destination(&self) -> Option<&str> {
        self.arrival.code()
    }

    /// Returns the number of changes within this sector.
    pub fn changes(&self) -> usize {
        self.segments.len().saturating_sub(1)
    }
}
