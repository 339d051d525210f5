//! Mapper configuration.

use tracing::warn;

use crate::api::{AbsentFlightNumber, InvalidPolicy};

/// Environment variable selecting the [`AbsentFlightNumber`] policy.
pub const ABSENT_FLIGHT_NUMBER_VAR: &str = "ITINERARY_ABSENT_FLIGHT_NUMBER";

/// Configuration for sector mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapperConfig {
    /// How to render missing flight numbers.
    pub absent_flight_number: AbsentFlightNumber,
}

impl MapperConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(absent_flight_number: AbsentFlightNumber) -> Self {
        Self {
            absent_flight_number,
        }
    }

    /// Read the configuration from the environment.
    ///
    /// Unset variables use the defaults. Invalid values are logged and
    /// also fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let absent_flight_number = match lookup(ABSENT_FLIGHT_NUMBER_VAR) {
            None => AbsentFlightNumber::default(),
            Some(raw) => raw.parse().unwrap_or_else(|e: InvalidPolicy| {
                warn!(variable = ABSENT_FLIGHT_NUMBER_VAR, error = %e, "Using default");
                AbsentFlightNumber::default()
            }),
        };

        Self::new(absent_flight_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = MapperConfig::default();
        assert_eq!(config.absent_flight_number, AbsentFlightNumber::Stringify);
    }

    #[test]
    fn from_lookup_unset() {
        let config = MapperConfig::from_lookup(|_| None);
        assert_eq!(config, MapperConfig::default());
    }

    #[test]
    fn from_lookup_set() {
        let config = MapperConfig::from_lookup(|key| {
            (key == ABSENT_FLIGHT_NUMBER_VAR).then(|| "null".to_string())
        });
        assert_eq!(config.absent_flight_number, AbsentFlightNumber::Null);
    }

    #[test]
    fn from_lookup_invalid_falls_back() {
        let config = MapperConfig::from_lookup(|_| Some("sometimes".to_string()));
        assert_eq!(config, MapperConfig::default());
    }
}
