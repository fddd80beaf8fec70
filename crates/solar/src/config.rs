//! Configuration for the sun time calculation.

use crate::error::SolarError;

/// Sun centre angle at the horizon crossing, including atmospheric refraction.
pub const DEFAULT_ZENITH: f64 = -0.83;

/// Parameters of the sun time calculation that are not per-day inputs.
///
/// # Example
///
/// ```
/// use suntable_solar::SolarConfig;
///
/// let config = SolarConfig::default().with_zenith(-6.0); // civil twilight
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarConfig {
    /// Zenith angle in degrees.
    zenith: f64,
}

impl Default for SolarConfig {
    fn default() -> Self {
        Self {
            zenith: DEFAULT_ZENITH,
        }
    }
}

impl SolarConfig {
    /// Sets the zenith angle in degrees.
    pub fn with_zenith(mut self, zenith: f64) -> Self {
        self.zenith = zenith;
        self
    }

    /// Returns the zenith angle in degrees.
    pub fn zenith(&self) -> f64 {
        self.zenith
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SolarError::InvalidZenith`] if the zenith is non-finite or
    /// outside -90..=90.
    pub fn validate(&self) -> Result<(), SolarError> {
        if !self.zenith.is_finite() || !(-90.0..=90.0).contains(&self.zenith) {
            return Err(SolarError::InvalidZenith {
                zenith: self.zenith,
            });
        }
        Ok(())
    }
}
