//! Pure conversion functions: TOML config plus CLI overrides -> crate API config types.

use anyhow::{Context, Result, bail};

use suntable_calendar::LeapRule;
use suntable_dataset::GeneratorConfig;
use suntable_solar::{GeoLocation, SolarConfig};

use crate::cli::{Cli, LeapRuleArg};
use crate::config::{LocationToml, SolarToml, SuntableConfig};

/// Parses a leap-rule name string into the corresponding enum variant.
pub fn parse_leap_rule(s: &str) -> Result<LeapRule> {
    match s.to_lowercase().as_str() {
        "gregorian" => Ok(LeapRule::Gregorian),
        "source-compatible" | "source_compatible" => Ok(LeapRule::SourceCompatible),
        other => bail!("unknown leap rule: {other:?}"),
    }
}

impl From<LeapRuleArg> for LeapRule {
    fn from(arg: LeapRuleArg) -> Self {
        match arg {
            LeapRuleArg::Gregorian => LeapRule::Gregorian,
            LeapRuleArg::SourceCompatible => LeapRule::SourceCompatible,
        }
    }
}

/// Builds a `GeoLocation`, letting `--latitude` / `--longitude` override the file.
pub fn build_location(t: &LocationToml, cli: &Cli) -> Result<GeoLocation> {
    let latitude = cli.latitude.unwrap_or(t.latitude);
    let longitude = cli.longitude.unwrap_or(t.longitude);
    GeoLocation::new(latitude, longitude).context("invalid observer location")
}

/// Builds a `SolarConfig`, letting `--zenith` override the file.
pub fn build_solar_config(t: &SolarToml, cli: &Cli) -> Result<SolarConfig> {
    let config = SolarConfig::default().with_zenith(cli.zenith.unwrap_or(t.zenith));
    config.validate().context("invalid solar settings")?;
    Ok(config)
}

/// Builds the full `GeneratorConfig` from the merged configuration.
pub fn build_generator_config(config: &SuntableConfig, cli: &Cli) -> Result<GeneratorConfig> {
    let leap_rule = match cli.leap_rule {
        Some(arg) => arg.into(),
        None => parse_leap_rule(&config.calendar.leap_rule)?,
    };

    let generator_config = GeneratorConfig::new(
        cli.from_year,
        cli.until_year,
        build_location(&config.location, cli)?,
    )
    .with_utc_offset(cli.utc_offset)
    .with_solar(build_solar_config(&config.solar, cli)?)
    .with_leap_rule(leap_rule);

    generator_config
        .validate()
        .context("invalid generation settings")?;
    Ok(generator_config)
}
