//! Booking API response DTOs.
//!
//! These types map directly to the JSON returned by the booking REST API.
//! Every field is an `Option` because the API omits fields freely, and the
//! mapper degrades to nulls rather than rejecting a payload.

use std::fmt;

use serde::Deserialize;

use crate::domain::Timestamp;

/// One leg of the `route` list: a single flown (or driven) hop.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ApiRouteItem {
    /// Upstream leg identifier.
    pub id: Option<String>,

    /// Origin airport code.
    #[serde(rename = "flyFrom")]
    pub fly_from: Option<String>,

    /// Destination airport code.
    #[serde(rename = "flyTo")]
    pub fly_to: Option<String>,

    pub utc_departure: Option<Timestamp>,
    pub local_departure: Option<Timestamp>,
    pub utc_arrival: Option<Timestamp>,
    pub local_arrival: Option<Timestamp>,

    /// Operating carrier code.
    pub airline: Option<String>,

    /// "aircraft", "bus", "train", ...
    pub vehicle_type: Option<String>,

    /// Flight number; numeric for most carriers, textual for some.
    pub flight_no: Option<FlightNumber>,
}

/// A flight number as delivered by the API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum FlightNumber {
    Number(i64),
    Text(String),
}

impl fmt::Display for FlightNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlightNumber::Number(n) => write!(f, "{n}"),
            FlightNumber::Text(s) => f.write_str(s),
        }
    }
}

/// A booked itinerary: the flat leg list plus its grouping into sectors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ApiItinerary {
    /// Booking or search-result identifier.
    pub id: Option<String>,

    /// Legs in travel order.
    pub route: Option<Vec<ApiRouteItem>>,

    /// One airport-code path per sector, e.g. `[["OSL", "WAW", "PRG"]]`.
    pub routes: Option<Vec<Vec<String>>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_route_item() {
        let json = r#"{
            "id": "0f6a2d4b",
            "flyFrom": "OSL",
            "flyTo": "WAW",
            "utc_departure": "2020-01-01T06:00:00.000Z",
            "local_departure": "2020-01-01T07:00:00.000Z",
            "utc_arrival": "2020-01-01T08:00:00.000Z",
            "local_arrival": "2020-01-01T09:00:00.000Z",
            "airline": "LO",
            "vehicle_type": "aircraft",
            "flight_no": 482,
            "fare_basis": "ignored"
        }"#;

        let item: ApiRouteItem = serde_json::from_str(json).unwrap();

        assert_eq!(item.id.as_deref(), Some("0f6a2d4b"));
        assert_eq!(item.fly_from.as_deref(), Some("OSL"));
        assert_eq!(item.fly_to.as_deref(), Some("WAW"));
        assert_eq!(
            item.utc_departure,
            Some(Timestamp::from("2020-01-01T06:00:00.000Z"))
        );
        assert_eq!(item.airline.as_deref(), Some("LO"));
        assert_eq!(item.flight_no, Some(FlightNumber::Number(482)));
    }

    #[test]
    fn deserialize_sparse_route_item() {
        let item: ApiRouteItem = serde_json::from_str(r#"{ "flight_no": null }"#).unwrap();
        assert_eq!(item, ApiRouteItem::default());
    }

    #[test]
    fn deserialize_epoch_times_and_text_flight_no() {
        let json = r#"{ "utc_departure": 1577858400, "flight_no": "X12" }"#;
        let item: ApiRouteItem = serde_json::from_str(json).unwrap();

        assert_eq!(item.utc_departure, Some(Timestamp::from(1_577_858_400)));
        assert_eq!(item.flight_no, Some(FlightNumber::Text("X12".into())));
    }

    #[test]
    fn deserialize_itinerary() {
        let json = r#"{
            "id": "booking-1",
            "route": [{ "flyFrom": "OSL", "flyTo": "PRG" }],
            "routes": [["OSL", "PRG"]]
        }"#;
        let itinerary: ApiItinerary = serde_json::from_str(json).unwrap();

        assert_eq!(itinerary.id.as_deref(), Some("booking-1"));
        assert_eq!(itinerary.route.as_ref().map(Vec::len), Some(1));
        assert_eq!(
            itinerary.routes,
            Some(vec![vec!["OSL".to_string(), "PRG".to_string()]])
        );
    }

    #[test]
    fn flight_number_display() {
        assert_eq!(FlightNumber::Number(1234).to_string(), "1234");
        assert_eq!(FlightNumber::Text("X12".into()).to_string(), "X12");
    }
}
