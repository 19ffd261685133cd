//! Configuration loading from files (std only).

use std::fs;
use std::path::Path;

use crate::error::{ConfigError, Error, Result};

use super::SystemConfig;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
///
/// ```rust,ignore
/// use scurve_stepper::load_config;
///
/// let config = load_config("axes.toml")?;
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SystemConfig> {
    let content = fs::read_to_string(path.as_ref()).map_err(|e| {
        let msg = heapless::String::try_from(e.to_string().as_str()).unwrap_or_default();
        Error::Config(ConfigError::IoError(msg))
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
///
/// # Errors
///
/// Returns an error if the TOML is invalid or fails validation.
pub fn parse_config(content: &str) -> Result<SystemConfig> {
    let config: SystemConfig = toml::from_str(content).map_err(|e| {
        let msg = heapless::String::try_from(e.message()).unwrap_or_default();
        Error::Config(ConfigError::ParseError(msg))
    })?;

    super::validation::validate_config(&config)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::Shape;

    #[test]
    fn test_parse_minimal_config() {
        let toml = r#"
[profiles.x_axis]
transition_time_us = 10000
cruise_delay_us = 100
"#;

        let config = parse_config(toml).unwrap();
        let profile = config.profile("x_axis").unwrap();
        assert_eq!(profile.shape, Shape::Sinusoidal);
        assert_eq!(profile.table_size, 4096);
    }

    #[test]
    fn test_parse_linear_shape() {
        let toml = r#"
[profiles.feeder]
transition_time_us = 5000
cruise_delay_us = 250
shape = "linear"
table_size = 512
"#;

        let config = parse_config(toml).unwrap();
        let profile = config.profile("feeder").unwrap();
        assert_eq!(profile.shape, Shape::Linear);
        assert_eq!(profile.table_size, 512);
    }

    #[test]
    fn test_parse_rejects_unknown_shape() {
        let toml = r#"
[profiles.x_axis]
transition_time_us = 10000
cruise_delay_us = 100
shape = "cubic"
"#;

        assert!(matches!(
            parse_config(toml),
            Err(Error::Config(ConfigError::ParseError(_)))
        ));
    }

    #[test]
    fn test_parse_runs_validation() {
        let toml = r#"
[profiles.x_axis]
transition_time_us = 100
cruise_delay_us = 100
"#;

        assert!(matches!(
            parse_config(toml),
            Err(Error::Config(ConfigError::InvalidConfiguration { .. }))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            load_config("/nonexistent/axes.toml"),
            Err(Error::Config(ConfigError::IoError(_)))
        ));
    }
}
