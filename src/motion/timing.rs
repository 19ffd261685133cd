//! Timing parameters derived from the requested ramp and cruise timings.

use core::f32::consts::PI;

use crate::error::ConfigError;

/// Derived timing constants, computed once at construction.
///
/// A full ramp traverses the curve domain in `2π · kt` microseconds. The
/// step count is chosen so that the per-step delay at the top of the ramp
/// matches the cruise delay, which makes the ramp-to-cruise handoff seamless.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimingParameters {
    /// Requested ramp duration in microseconds.
    transition_time_us: u32,

    /// Time scale, `transition_time_us / 2π`.
    kt: f32,

    /// Steps in one acceleration (or deceleration) ramp. Always >= 1.
    transition_steps: u32,

    /// Delay between steps while cruising, `π · kt / transition_steps`.
    cruise_delay: f32,
}

impl TimingParameters {
    /// Derive timing constants.
    ///
    /// # Arguments
    ///
    /// * `transition_time_us` - Duration of the acceleration (and deceleration) ramp
    /// * `cruise_delay_us` - Requested delay between steps at cruise speed
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidConfiguration` if the cruise delay is zero
    /// or the ramp would have no steps (transition shorter than twice the
    /// cruise delay).
    pub fn derive(transition_time_us: u32, cruise_delay_us: u32) -> Result<Self, ConfigError> {
        let invalid = ConfigError::InvalidConfiguration {
            transition_time_us,
            cruise_delay_us,
        };

        if cruise_delay_us == 0 {
            return Err(invalid);
        }

        // floor(π · kt / cruise) with π · kt = transition / 2, done in integers
        let transition_steps =
            (u64::from(transition_time_us) / (2 * u64::from(cruise_delay_us))) as u32;
        if transition_steps == 0 {
            return Err(invalid);
        }

        let kt = transition_time_us as f32 / (2.0 * PI);
        let cruise_delay = transition_time_us as f32 / (2.0 * transition_steps as f32);

        Ok(Self {
            transition_time_us,
            kt,
            transition_steps,
            cruise_delay,
        })
    }

    /// Time scale applied to curve values.
    #[inline]
    pub fn kt(&self) -> f32 {
        self.kt
    }

    /// Number of steps in one ramp.
    #[inline]
    pub fn transition_steps(&self) -> u32 {
        self.transition_steps
    }

    /// Delay between steps while cruising, in microseconds.
    #[inline]
    pub fn cruise_delay(&self) -> f32 {
        self.cruise_delay
    }

    /// Requested ramp duration in microseconds.
    #[inline]
    pub fn transition_time_us(&self) -> u32 {
        self.transition_time_us
    }

    /// Ramp duration implied by `kt`, `2π · kt`.
    #[inline]
    pub fn ramp_duration_us(&self) -> f32 {
        2.0 * PI * self.kt
    }
}
