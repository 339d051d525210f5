//! Booking REST API data.
//!
//! This module holds the DTOs for the flat `route` list returned by the
//! booking API, their conversion into domain values, and payload loading.
//!
//! Key characteristics of the API:
//! - Every field may be missing; nothing here rejects a sparse leg
//! - Times come as ISO-8601 strings or epoch seconds depending on endpoint
//! - Legs are flat; the grouping into sectors arrives separately as
//!   `routes`, one airport-code path per sector

mod convert;
mod error;
mod load;
mod policy;
mod types;

pub use convert::{
    arrival_stop, departure_stop, flight_number_string, map_vehicle, sanitize_carrier,
    sanitize_segment,
};
pub use error::PayloadError;
pub use policy::{AbsentFlightNumber, InvalidPolicy};
pub use types::{ApiItinerary, ApiRouteItem, FlightNumber};
