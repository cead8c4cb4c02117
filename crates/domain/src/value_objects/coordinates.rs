//! Coordinate pair value object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A latitude/longitude pair in decimal degrees
///
/// On the wire a coordinate pair is the comma-joined string `"lat,lon"`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in degrees (-90 to 90)
    latitude: f64,
    /// Longitude in degrees (-180 to 180)
    longitude: f64,
}

impl Coordinates {
    /// Create a new coordinate pair with range validation
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinates` if latitude is not in [-90, 90]
    /// or longitude is not in [-180, 180].
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(DomainError::invalid_coordinates(
                format!("{latitude},{longitude}"),
                "latitude must be -90 to 90",
            ));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(DomainError::invalid_coordinates(
                format!("{latitude},{longitude}"),
                "longitude must be -180 to 180",
            ));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Create a coordinate pair without validation (for trusted constants)
    #[must_use]
    pub const fn new_unchecked(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Parse a `"lat,lon"` string strictly
    ///
    /// Whitespace around either component is ignored.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinates` if the string does not contain
    /// exactly two comma-separated numbers or either number is out of range.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let mut parts = input.split(',');
        let (Some(lat), Some(lon), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(DomainError::invalid_coordinates(
                input,
                "expected exactly two comma-separated values",
            ));
        };

        let latitude: f64 = lat
            .trim()
            .parse()
            .map_err(|_| DomainError::invalid_coordinates(input, "latitude is not a number"))?;
        let longitude: f64 = lon
            .trim()
            .parse()
            .map_err(|_| DomainError::invalid_coordinates(input, "longitude is not a number"))?;

        Self::new(latitude, longitude).map_err(|_| {
            DomainError::invalid_coordinates(input, "coordinates out of range")
        })
    }

    /// Get the latitude
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Get the longitude
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl FromStr for Coordinates {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

/// Demonstration locations
impl Coordinates {
    /// Bangalore, India
    #[must_use]
    pub const fn bangalore() -> Self {
        Self::new_unchecked(12.971_598_7, 77.594_566)
    }

    /// Delhi, India
    #[must_use]
    pub const fn delhi() -> Self {
        Self::new_unchecked(28.613_939_1, 77.209_021_2)
    }
}
