use serde::{Deserialize, Serialize};
use std::fmt;

/// Geographic point a workout is pinned to, in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Parse a `"lat,lng"` pair as received from the map collaborator.
    /// Rejects non-numeric components and out-of-range coordinates.
    pub fn parse(s: &str) -> Option<Self> {
        let (lat_raw, lng_raw) = s.split_once(',')?;
        let lat: f64 = lat_raw.trim().parse().ok()?;
        let lng: f64 = lng_raw.trim().parse().ok()?;
        if !lat.is_finite() || !lng.is_finite() {
            return None;
        }
        if lat.abs() > 90.0 || lng.abs() > 180.0 {
            return None;
        }
        Some(Self { lat, lng })
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5}, {:.5}", self.lat, self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_plain_pair() {
        let c = Coordinates::parse("50.45,30.52").unwrap();
        assert_eq!(c.lat, 50.45);
        assert_eq!(c.lng, 30.52);
    }

    #[test]
    fn tolerates_whitespace_around_components() {
        let c = Coordinates::parse(" 48.85 , 2.35 ").unwrap();
        assert_eq!(c.lat, 48.85);
        assert_eq!(c.lng, 2.35);
    }

    #[test]
    fn rejects_garbage_and_out_of_range_values() {
        assert!(Coordinates::parse("fifty,30").is_none());
        assert!(Coordinates::parse("50.45").is_none());
        assert!(Coordinates::parse("91.0,10.0").is_none());
        assert!(Coordinates::parse("45.0,-181.0").is_none());
        assert!(Coordinates::parse("NaN,10.0").is_none());
    }
}
