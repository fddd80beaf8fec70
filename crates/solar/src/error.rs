//! Error types for the suntable-solar crate.

use std::fmt;

/// Which way a polar condition goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polar {
    /// The sun stays above the horizon all day.
    Day,
    /// The sun stays below the horizon all day.
    Night,
}

impl fmt::Display for Polar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Day => f.write_str("polar day"),
            Self::Night => f.write_str("polar night"),
        }
    }
}

/// Error type for all fallible operations in the suntable-solar crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SolarError {
    /// The sun does not cross the configured zenith on this date.
    #[error("no sunrise or sunset ({polar}): cos(hour angle) = {cos_hour_angle:.4}")]
    PolarDayOrNight {
        /// Whether the sun stays up or stays down.
        polar: Polar,
        /// The out-of-range cosine of the local hour angle.
        cos_hour_angle: f64,
    },

    /// Latitude outside -90..=90 degrees or not finite.
    #[error("invalid latitude: {latitude} (must be within -90..=90)")]
    InvalidLatitude {
        /// The rejected latitude.
        latitude: f64,
    },

    /// Longitude outside -180..=180 degrees or not finite.
    #[error("invalid longitude: {longitude} (must be within -180..=180)")]
    InvalidLongitude {
        /// The rejected longitude.
        longitude: f64,
    },

    /// Zenith angle outside -90..=90 degrees or not finite.
    #[error("invalid zenith: {zenith} (must be within -90..=90)")]
    InvalidZenith {
        /// The rejected zenith angle.
        zenith: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_polar_day() {
        let err = SolarError::PolarDayOrNight {
            polar: Polar::Day,
            cos_hour_angle: -1.25,
        };
        assert_eq!(
            err.to_string(),
            "no sunrise or sunset (polar day): cos(hour angle) = -1.2500"
        );
    }

    #[test]
    fn display_invalid_latitude() {
        let err = SolarError::InvalidLatitude { latitude: 91.0 };
        assert_eq!(
            err.to_string(),
            "invalid latitude: 91 (must be within -90..=90)"
        );
    }

    #[test]
    fn display_invalid_longitude() {
        let err = SolarError::InvalidLongitude { longitude: -200.5 };
        assert_eq!(
            err.to_string(),
            "invalid longitude: -200.5 (must be within -180..=180)"
        );
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<SolarError>();
    }
}
