//! Domain types for the itinerary mapper.
//!
//! These are the output values handed to the display layer. Every field
//! that can be missing upstream is an `Option`, and absence propagates
//! instead of raising errors.

mod itinerary_type;
mod sector;
mod segment;
mod stop;
mod time;

pub use itinerary_type::ItineraryType;
pub use sector::Sector;
pub use segment::{Carrier, Segment, Vehicle};
pub use stop::{RouteStop, StopTime};
pub use time::{Timestamp, difference_in_minutes};
