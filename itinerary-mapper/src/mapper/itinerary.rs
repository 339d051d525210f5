//! Mapping of a whole booked itinerary.

use serde::Serialize;

use crate::api::ApiItinerary;
use crate::domain::{ItineraryType, Sector};

use super::{MapperConfig, map_sectors_with};

/// An itinerary ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MappedItinerary {
    /// Booking or search-result identifier.
    pub id: Option<String>,
    /// One-way or return; `None` for multi-city or unknown grouping.
    #[serde(rename = "type")]
    pub kind: Option<ItineraryType>,
    /// Sectors in travel order; `None` when legs or grouping are missing.
    pub sectors: Option<Vec<Sector>>,
}

/// Classify and group one itinerary payload.
pub fn map_itinerary(config: &MapperConfig, itinerary: &ApiItinerary) -> MappedItinerary {
    let route_codes = itinerary.routes.as_deref();

    MappedItinerary {
        id: itinerary.id.clone(),
        kind: ItineraryType::classify(route_codes),
        sectors: map_sectors_with(config, itinerary.route.as_deref(), route_codes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RETURN_TRIP: &str = r#"{
        "id": "booking-1",
        "route": [
            { "id": "1", "flyFrom": "OSL", "flyTo": "WAW",
              "utc_departure": "2020-01-01T06:00:00.000Z",
              "utc_arrival": "2020-01-01T07:55:00.000Z",
              "airline": "LO", "vehicle_type": "aircraft", "flight_no": 482 },
            { "id": "2", "flyFrom": "WAW", "flyTo": "PRG",
              "utc_departure": "2020-01-01T08:40:00.000Z",
              "utc_arrival": "2020-01-01T09:50:00.000Z",
              "airline": "LO", "vehicle_type": "aircraft", "flight_no": 513 },
            { "id": "3", "flyFrom": "PRG", "flyTo": "WAW",
              "utc_departure": 1578484800, "utc_arrival": 1578489000,
              "airline": "LO", "vehicle_type": "aircraft", "flight_no": 514 },
            { "id": "4", "flyFrom": "WAW", "flyTo": "OSL",
              "utc_departure": 1578492000, "utc_arrival": 1578499200,
              "airline": "LO", "vehicle_type": "aircraft" }
        ],
        "routes": [["OSL", "WAW", "PRG"], ["PRG", "WAW", "OSL"]]
    }"#;

    #[test]
    fn map_return_trip() {
        let itinerary = ApiItinerary::from_json(RETURN_TRIP).unwrap();
        let mapped = map_itinerary(&MapperConfig::default(), &itinerary);

        assert_eq!(mapped.id.as_deref(), Some("booking-1"));
        assert_eq!(mapped.kind, Some(ItineraryType::Return));

        let sectors = mapped.sectors.unwrap();
        assert_eq!(sectors.len(), 2);
        assert_eq!(sectors[0].duration, Some(230));
        // 2020-01-08 12:00Z -> 16:00Z, given as epoch seconds
        assert_eq!(sectors[1].duration, Some(240));
        assert_eq!(sectors[1].segments[1].vehicle.unique_no.as_deref(), Some("null"));
    }

    #[test]
    fn missing_grouping() {
        let itinerary = ApiItinerary {
            id: Some("x".into()),
            route: Some(Vec::new()),
            routes: None,
        };
        let mapped = map_itinerary(&MapperConfig::default(), &itinerary);

        assert_eq!(mapped.kind, None);
        assert_eq!(mapped.sectors, None);
    }

    #[test]
    fn serializes_for_display() {
        let itinerary = ApiItinerary::from_json(RETURN_TRIP).unwrap();
        let mapped = map_itinerary(&MapperConfig::default(), &itinerary);
        let json = serde_json::to_value(&mapped).unwrap();

        assert_eq!(json["type"], "return");
        assert_eq!(json["sectors"][0]["departure"]["code"], "OSL");
        assert_eq!(json["sectors"][0]["segments"][0]["vehicle"]["uniqueNo"], "482");
        assert_eq!(json["sectors"][1]["stopoverDuration"], 0);
        assert_eq!(json["sectors"][1]["departure"]["time"]["utc"], 1_578_484_800);
    }
}
