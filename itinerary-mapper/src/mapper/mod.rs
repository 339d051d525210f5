//! Itinerary mapper.
//!
//! This module turns the booking API's flat list of route legs into the
//! sector/segment structure used for display:
//!
//! - A **sector** is the whole part from departure to destination, e.g.
//!   Oslo -> Prague. A return trip has two sectors, a one-way trip one.
//! - A **segment** is one hop within a sector, e.g. Oslo -> Warsaw.

mod config;
mod itinerary;
mod sectors;

pub use config::{ABSENT_FLIGHT_NUMBER_VAR, MapperConfig};
pub use crate::api::{AbsentFlightNumber, InvalidPolicy};
pub use itinerary::{MappedItinerary, map_itinerary};
pub use sectors::{map_sectors, map_sectors_with};
