//! System configuration - root configuration structure.

use heapless::{FnvIndexMap, String};
use serde::Deserialize;

use crate::error::ConfigError;

use super::profile::ProfileConfig;

/// Root configuration structure from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct SystemConfig {
    /// Named generator profiles, typically one per axis.
    pub profiles: FnvIndexMap<String<32>, ProfileConfig, 16>,
}

impl SystemConfig {
    /// Get a profile by name.
    pub fn profile(&self, name: &str) -> Option<&ProfileConfig> {
        self.profiles
            .iter()
            .find(|(k, _)| k.as_str() == name)
            .map(|(_, v)| v)
    }

    /// Get a profile by name, or a `ProfileNotFound` error.
    pub fn require_profile(&self, name: &str) -> Result<&ProfileConfig, ConfigError> {
        self.profile(name).ok_or_else(|| {
            ConfigError::ProfileNotFound(String::try_from(name).unwrap_or_default())
        })
    }

    /// List all profile names.
    pub fn profile_names(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(|s| s.as_str())
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            profiles: FnvIndexMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let mut config = SystemConfig::default();
        config
            .profiles
            .insert(String::try_from("x_axis").unwrap(), ProfileConfig::new(10_000, 100))
            .unwrap();

        assert!(config.profile("x_axis").is_some());
        assert!(config.profile("y_axis").is_none());
        assert_eq!(config.profile_names().count(), 1);
    }

    #[test]
    fn test_require_missing_profile() {
        let config = SystemConfig::default();
        assert_eq!(
            config.require_profile("z_axis").unwrap_err(),
            ConfigError::ProfileNotFound(String::try_from("z_axis").unwrap())
        );
    }
}
