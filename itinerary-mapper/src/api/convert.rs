//! Conversion from booking API DTOs to domain types.
//!
//! Conversions never fail: a missing upstream field becomes a `None` in
//! the output rather than an error, and a missing leg becomes an empty
//! stop.

use crate::domain::{Carrier, RouteStop, Segment, Vehicle, difference_in_minutes};

use super::policy::AbsentFlightNumber;
use super::types::{ApiRouteItem, FlightNumber};

/// Build the carrier of a leg.
///
/// The API does not deliver carrier names yet, so `name` is always `None`.
pub fn sanitize_carrier(item: Option<&ApiRouteItem>) -> Carrier {
    Carrier {
        name: None,
        code: item.and_then(|i| i.airline.clone()),
    }
}

/// Build a vehicle from its type and number.
pub fn map_vehicle(kind: Option<&str>, unique_no: Option<&str>) -> Vehicle {
    Vehicle {
        kind: kind.map(str::to_string),
        unique_no: unique_no.map(str::to_string),
    }
}

/// Render a flight number for display.
///
/// Present numbers are stringified. Absent ones follow `policy`: either the
/// literal `"null"` or no value at all.
pub fn flight_number_string(
    flight_no: Option<&FlightNumber>,
    policy: AbsentFlightNumber,
) -> Option<String> {
    match (flight_no, policy) {
        (Some(no), _) => Some(no.to_string()),
        (None, AbsentFlightNumber::Stringify) => Some("null".to_string()),
        (None, AbsentFlightNumber::Null) => None,
    }
}

/// The stop a leg departs from.
pub fn departure_stop(item: Option<&ApiRouteItem>) -> RouteStop {
    match item {
        Some(i) => RouteStop::new(
            i.fly_from.clone(),
            i.utc_departure.clone(),
            i.local_departure.clone(),
        ),
        None => RouteStop::default(),
    }
}

/// The stop a leg arrives at.
pub fn arrival_stop(item: Option<&ApiRouteItem>) -> RouteStop {
    match item {
        Some(i) => RouteStop::new(
            i.fly_to.clone(),
            i.utc_arrival.clone(),
            i.local_arrival.clone(),
        ),
        None => RouteStop::default(),
    }
}

/// Convert one leg into a segment.
pub fn sanitize_segment(item: &ApiRouteItem, policy: AbsentFlightNumber) -> Segment {
    let unique_no = flight_number_string(item.flight_no.as_ref(), policy);

    Segment {
        id: item.id.clone(),
        duration: difference_in_minutes(item.utc_departure.as_ref(), item.utc_arrival.as_ref()),
        carrier: sanitize_carrier(Some(item)),
        vehicle: map_vehicle(item.vehicle_type.as_deref(), unique_no.as_deref()),
        departure: departure_stop(Some(item)),
        arrival: arrival_stop(Some(item)),
    }
}
