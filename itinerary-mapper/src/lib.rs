//! Itinerary mapper.
//!
//! Converts the flat list of route legs returned by the booking REST API
//! into the sector/segment structure used by trip timelines, and
//! classifies itineraries as one-way or return.

pub mod api;
pub mod domain;
pub mod global_id;
pub mod mapper;
