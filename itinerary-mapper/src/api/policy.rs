//! Flight number rendering policy.

use std::str::FromStr;

/// What a segment's `uniqueNo` becomes when the leg has no flight number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AbsentFlightNumber {
    /// The literal string `"null"`, as existing consumers expect.
    #[default]
    Stringify,
    /// No value.
    Null,
}

/// Error returned when parsing an unknown policy name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown absent flight number policy: {0} (expected \"stringify\" or \"null\")")]
pub struct InvalidPolicy(String);

impl FromStr for AbsentFlightNumber {
    type Err = InvalidPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stringify" => Ok(AbsentFlightNumber::Stringify),
            "null" => Ok(AbsentFlightNumber::Null),
            _ => Err(InvalidPolicy(s.to_string())),
        }
    }
}
