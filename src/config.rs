use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level suntable configuration.
///
/// Every section is optional; an empty file (or no file at all) yields the
/// built-in defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SuntableConfig {
    /// Observer location.
    #[serde(default)]
    pub location: LocationToml,

    /// Solar geometry settings.
    #[serde(default)]
    pub solar: SolarToml,

    /// Calendar settings.
    #[serde(default)]
    pub calendar: CalendarToml,
}

impl SuntableConfig {
    /// Reads and parses a TOML configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocationToml {
    #[serde(default = "default_latitude")]
    pub latitude: f64,
    #[serde(default = "default_longitude")]
    pub longitude: f64,
}

impl Default for LocationToml {
    fn default() -> Self {
        Self {
            latitude: default_latitude(),
            longitude: default_longitude(),
        }
    }
}

fn default_latitude() -> f64 {
    50.0
}
fn default_longitude() -> f64 {
    11.0
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SolarToml {
    #[serde(default = "default_zenith")]
    pub zenith: f64,
}

impl Default for SolarToml {
    fn default() -> Self {
        Self {
            zenith: default_zenith(),
        }
    }
}

fn default_zenith() -> f64 {
    suntable_solar::DEFAULT_ZENITH
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarToml {
    #[serde(default = "default_leap_rule")]
    pub leap_rule: String,
}

impl Default for CalendarToml {
    fn default() -> Self {
        Self {
            leap_rule: default_leap_rule(),
        }
    }
}

fn default_leap_rule() -> String {
    "gregorian".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_uses_defaults() {
        let config: SuntableConfig = toml::from_str("").unwrap();
        assert_eq!(config.location.latitude, 50.0);
        assert_eq!(config.location.longitude, 11.0);
        assert_eq!(config.solar.zenith, -0.83);
        assert_eq!(config.calendar.leap_rule, "gregorian");
    }

    #[test]
    fn partial_sections() {
        let config: SuntableConfig = toml::from_str(
            r#"
            [location]
            latitude = 60.17

            [calendar]
            leap_rule = "source-compatible"
            "#,
        )
        .unwrap();
        assert_eq!(config.location.latitude, 60.17);
        assert_eq!(config.location.longitude, 11.0);
        assert_eq!(config.calendar.leap_rule, "source-compatible");
    }

    #[test]
    fn unknown_field_rejected() {
        let result: Result<SuntableConfig, _> = toml::from_str("[solar]\nzenit = -6.0\n");
        assert!(result.is_err());
    }

    #[test]
    fn unknown_section_rejected() {
        let result: Result<SuntableConfig, _> = toml::from_str("[output]\npath = \"x\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn from_file_reads_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("suntable.toml");
        std::fs::write(&path, "[solar]\nzenith = -6.0\n").unwrap();
        let config = SuntableConfig::from_file(&path).unwrap();
        assert_eq!(config.solar.zenith, -6.0);
    }

    #[test]
    fn from_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = SuntableConfig::from_file(&dir.path().join("absent.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read config file"));
    }
}
