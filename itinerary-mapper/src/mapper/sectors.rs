//! Grouping of flat route legs into sectors.
//!
//! The booking API returns every leg of a trip in one flat list and, next
//! to it, one airport-code path per sector (`[["OSL", "WAW", "PRG"],
//! ["PRG", "WAW", "OSL"]]`). A sector ends at the leg whose destination is
//! the sector's overall arrival airport; the next leg starts the next
//! sector.

use tracing::{debug, trace, warn};

use crate::api::{ApiRouteItem, arrival_stop, departure_stop, sanitize_segment};
use crate::domain::Sector;

use super::MapperConfig;

/// Accumulator for the walk over the leg list.
#[derive(Debug)]
struct SectorWalk {
    /// Sectors opened so far. Never empty; the last one is active.
    sectors: Vec<Sector>,
    /// Index of the route code group that opens the next sector.
    next_group: usize,
    /// Arrival code that closes the active sector, if it could be found.
    active_arrival: Option<String>,
    /// Set once the final group's arrival has been reached.
    exhausted: bool,
}

impl SectorWalk {
    fn start(legs: &[ApiRouteItem], route_codes: &[Vec<String>]) -> Self {
        let first_group = route_codes.first().map(Vec::as_slice).unwrap_or(&[]);
        let sector = open_sector(legs, first_group);

        Self {
            active_arrival: sector.arrival.code.clone(),
            sectors: vec![sector],
            next_group: 1,
            exhausted: false,
        }
    }

    /// Append one leg to the active sector, advancing to the next group if
    /// the leg reaches the active sector's arrival.
    fn step(
        mut self,
        leg: &ApiRouteItem,
        legs: &[ApiRouteItem],
        route_codes: &[Vec<String>],
        config: &MapperConfig,
    ) -> Self {
        if self.exhausted {
            warn!(
                leg = leg.id.as_deref().unwrap_or("?"),
                "Leg after the final sector arrival, appending to last sector"
            );
        }

        let segment = sanitize_segment(leg, config.absent_flight_number);
        if let Some(active) = self.sectors.last_mut() {
            active.segments.push(segment);
        }

        let reached_arrival = match (leg.fly_to.as_deref(), self.active_arrival.as_deref()) {
            (Some(to), Some(arrival)) => to == arrival,
            _ => false,
        };
        if !reached_arrival {
            return self;
        }

        match route_codes.get(self.next_group) {
            Some(group) => {
                let sector = open_sector(legs, group);
                trace!(
                    group = self.next_group,
                    origin = sector.origin().unwrap_or("?"),
                    destination = sector.destination().unwrap_or("?"),
                    "Opening sector"
                );
                self.active_arrival = sector.arrival.code.clone();
                self.sectors.push(sector);
                self.next_group += 1;
            }
            None => self.exhausted = true,
        }

        self
    }
}

/// Open the sector described by one route code group.
///
/// The departure is the first leg leaving the group's first airport and
/// the arrival the first leg reaching its last airport, searched over the
/// whole leg list.
fn open_sector(legs: &[ApiRouteItem], group: &[String]) -> Sector {
    let departure_code = group.first().map(String::as_str).unwrap_or("");
    let arrival_code = group.last().map(String::as_str).unwrap_or("");

    let departure = legs
        .iter()
        .find(|leg| leg.fly_from.as_deref() == Some(departure_code));
    let arrival = legs
        .iter()
        .find(|leg| leg.fly_to.as_deref() == Some(arrival_code));

    Sector::open(departure_stop(departure), arrival_stop(arrival))
}

/// Convert flat route legs into sectors using the default configuration.
///
/// See [`map_sectors_with`].
pub fn map_sectors(
    route_legs: Option<&[ApiRouteItem]>,
    route_codes: Option<&[Vec<String>]>,
) -> Option<Vec<Sector>> {
    map_sectors_with(&MapperConfig::default(), route_legs, route_codes)
}

/// Convert flat route legs into sectors with segments.
///
/// Returns `None` if either input is absent. Otherwise every leg is
/// converted to a segment and placed, in order, into exactly one sector.
/// Legs that follow the final sector's arrival stay in the last sector.
/// With no route code groups at all, a single sector with unknown
/// departure and arrival collects every leg.
///
/// # Examples
///
/// ```
/// use itinerary_mapper::api::ApiRouteItem;
/// use itinerary_mapper::mapper::map_sectors;
///
/// let leg = |from: &str, to: &str| ApiRouteItem {
///     fly_from: Some(from.into()),
///     fly_to: Some(to.into()),
///     ..ApiRouteItem::default()
/// };
/// let legs = vec![leg("OSL", "WAW"), leg("WAW", "PRG")];
/// let codes = vec![vec!["OSL".to_string(), "WAW".into(), "PRG".into()]];
///
/// let sectors = map_sectors(Some(&legs), Some(&codes)).unwrap();
/// assert_eq!(sectors.len(), 1);
/// assert_eq!(sectors[0].segments.len(), 2);
///
/// assert!(map_sectors(None, Some(&codes)).is_none());
/// ```
pub fn map_sectors_with(
    config: &MapperConfig,
    route_legs: Option<&[ApiRouteItem]>,
    route_codes: Option<&[Vec<String>]>,
) -> Option<Vec<Sector>> {
    let legs = route_legs?;
    let route_codes = route_codes?;

    let walk = legs
        .iter()
        .fold(SectorWalk::start(legs, route_codes), |walk, leg| {
            walk.step(leg, legs, route_codes, config)
        });

    debug!(
        legs = legs.len(),
        groups = route_codes.len(),
        sectors = walk.sectors.len(),
        "Mapped route legs to sectors"
    );

    Some(walk.sectors)
}
