//! Itinerary classification.

use std::fmt;

use serde::Serialize;

/// The shape of a trip, derived from how many sectors it has.
///
/// Multi-city trips are deliberately left unclassified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ItineraryType {
    /// A single sector.
    #[serde(rename = "oneway")]
    OneWay,
    /// An outbound and an inbound sector.
    #[serde(rename = "return")]
    Return,
}

impl ItineraryType {
    /// Classify a trip by its route code groups.
    ///
    /// # Examples
    ///
    /// ```
    /// use itinerary_mapper::domain::ItineraryType;
    ///
    /// let oneway = vec![vec!["OSL".to_string(), "PRG".to_string()]];
    /// assert_eq!(ItineraryType::classify(Some(&oneway)), Some(ItineraryType::OneWay));
    /// assert_eq!(ItineraryType::classify(None), None);
    /// ```
    pub fn classify(route_codes: Option<&[Vec<String>]>) -> Option<Self> {
        match route_codes?.len() {
            1 => Some(ItineraryType::OneWay),
            2 => Some(ItineraryType::Return),
            _ => None,
        }
    }

    /// Returns the wire name ("oneway" or "return").
    pub fn as_str(&self) -> &'static str {
        match self {
            ItineraryType::OneWay => "oneway",
            ItineraryType::Return => "return",
        }
    }
}

impl fmt::Display for ItineraryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
