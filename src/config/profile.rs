//! Generator profile configuration from TOML.

use serde::Deserialize;

use crate::curve::{CurveTable, Shape};
use crate::error::{ConfigError, Result};
use crate::motion::{SCurveGenerator, TimingParameters};

/// Timing and curve settings for one axis.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProfileConfig {
    /// Duration of the acceleration (and deceleration) ramp in microseconds.
    pub transition_time_us: u32,

    /// Delay between steps at cruise speed in microseconds.
    pub cruise_delay_us: u32,

    /// Ramp shape used to generate the curve table.
    #[serde(default)]
    pub shape: Shape,

    /// Number of samples in the generated curve table (>= 2).
    #[serde(default = "default_table_size")]
    pub table_size: usize,
}

fn default_table_size() -> usize {
    4096
}

impl ProfileConfig {
    /// Create a profile with the default shape and table size.
    pub fn new(transition_time_us: u32, cruise_delay_us: u32) -> Self {
        Self {
            transition_time_us,
            cruise_delay_us,
            shape: Shape::default(),
            table_size: default_table_size(),
        }
    }

    /// Derive the timing constants for this profile.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidConfiguration` if the timings give no ramp steps.
    pub fn timing(&self) -> core::result::Result<TimingParameters, ConfigError> {
        TimingParameters::derive(self.transition_time_us, self.cruise_delay_us)
    }

    /// Build a stopped generator over `table`.
    ///
    /// # Errors
    ///
    /// Returns an error if the timings give no ramp steps.
    pub fn build<'a>(&self, table: CurveTable<'a>) -> Result<SCurveGenerator<'a>> {
        Ok(SCurveGenerator::with_timing(table, self.timing()?))
    }

    /// Generate the curve samples for this profile's shape and table size.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidTableSize` if `table_size` is below 2.
    #[cfg(feature = "alloc")]
    pub fn generate_table(&self) -> Result<alloc::vec::Vec<f32>> {
        if self.table_size < 2 {
            return Err(ConfigError::InvalidTableSize(self.table_size).into());
        }

        let mut samples = alloc::vec![0.0f32; self.table_size];
        self.shape.fill(&mut samples)?;
        Ok(samples)
    }
}
