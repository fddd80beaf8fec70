//! Geographic location of the observer.

use crate::error::SolarError;

/// Observer position in signed decimal degrees, longitude positive East.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    latitude: f64,
    longitude: f64,
}

impl GeoLocation {
    /// Creates a validated location.
    ///
    /// # Errors
    ///
    /// Returns [`SolarError::InvalidLatitude`] or [`SolarError::InvalidLongitude`]
    /// if a coordinate is non-finite or out of range.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, SolarError> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(SolarError::InvalidLatitude { latitude });
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(SolarError::InvalidLongitude { longitude });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Returns the latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns the longitude in degrees, positive East.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}
