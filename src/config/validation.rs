//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::{ProfileConfig, SystemConfig};

/// Validate a system configuration.
///
/// Checks, for every profile:
/// - Cruise delay is non-zero
/// - Transition time yields at least one ramp step
/// - Table size is at least 2
pub fn validate_config(config: &SystemConfig) -> Result<()> {
    for (name, profile) in config.profiles.iter() {
        validate_profile(name.as_str(), profile)?;
    }

    Ok(())
}

fn validate_profile(_name: &str, profile: &ProfileConfig) -> Result<()> {
    profile.timing()?;

    if profile.table_size < 2 {
        return Err(Error::Config(ConfigError::InvalidTableSize(
            profile.table_size,
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_profile() {
        assert!(validate_profile("x", &ProfileConfig::new(10_000, 100)).is_ok());
    }

    #[test]
    fn test_transition_too_short() {
        let result = validate_profile("x", &ProfileConfig::new(150, 100));
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidConfiguration {
                transition_time_us: 150,
                cruise_delay_us: 100,
            }))
        ));
    }

    #[test]
    fn test_invalid_table_size() {
        let profile = ProfileConfig {
            table_size: 0,
            ..ProfileConfig::new(10_000, 100)
        };
        assert!(matches!(
            validate_profile("x", &profile),
            Err(Error::Config(ConfigError::InvalidTableSize(0)))
        ));
    }
}
