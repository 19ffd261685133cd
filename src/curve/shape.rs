//! Built-in shaping functions for generating curve tables.
//!
//! Each shape describes a velocity ramp over curve time `τ ∈ [0, 2π]` that
//! starts at rest, ends at velocity `2π`, and covers distance `2π²`. A table
//! sample is the curve time at which a given distance is reached, which is
//! what [`CurveTable::solve`](super::CurveTable::solve) interpolates.
//!
//! Table generation runs offline (or once at startup) in `f64`; the samples
//! are stored as `f32`.

use core::f64::consts::PI;

use serde::Deserialize;

use crate::error::CurveError;

/// Curve time at the end of the ramp.
const RAMP_END: f64 = 2.0 * PI;

/// Distance covered by the end of the ramp.
const DISTANCE_END: f64 = 2.0 * PI * PI;

/// Bisection rounds when inverting the distance function.
const BISECTION_ROUNDS: u32 = 64;

/// Velocity ramp shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    /// Jerk-limited S-curve: acceleration `1 - cos τ` rises from zero and
    /// falls back to zero, so the handoff into cruise is smooth.
    #[default]
    Sinusoidal,
    /// Constant acceleration (trapezoidal velocity).
    Linear,
}

impl Shape {
    /// Distance reached at curve time `tau`.
    fn distance(self, tau: f64) -> f64 {
        match self {
            Shape::Sinusoidal => {
                // cos τ - 1 written as -2 sin²(τ/2) to keep precision near zero
                let half = libm::sin(0.5 * tau);
                0.5 * tau * tau - 2.0 * half * half
            }
            Shape::Linear => 0.5 * tau * tau,
        }
    }

    /// Exact curve time at ramp position `d`, with `d` clamped to `[0, 2π²]`.
    pub fn sample(self, d: f64) -> f64 {
        if d.is_nan() || d <= 0.0 {
            return 0.0;
        }
        if d >= DISTANCE_END {
            return RAMP_END;
        }

        match self {
            Shape::Linear => libm::sqrt(2.0 * d),
            Shape::Sinusoidal => {
                // distance is strictly increasing on [0, 2π] but has zero
                // slope at the origin, so Newton is unreliable there
                let (mut lo, mut hi) = (0.0, RAMP_END);
                for _ in 0..BISECTION_ROUNDS {
                    let mid = 0.5 * (lo + hi);
                    if self.distance(mid) < d {
                        lo = mid;
                    } else {
                        hi = mid;
                    }
                }
                0.5 * (lo + hi)
            }
        }
    }

    /// Fill `out` with a table for this shape.
    ///
    /// Sample `k` holds the curve time at position `k · 2π² / out.len()`,
    /// matching the spacing [`CurveTable`](super::CurveTable) assumes.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::TableTooShort` if `out` has fewer than two slots.
    pub fn fill(self, out: &mut [f32]) -> Result<(), CurveError> {
        if out.len() < 2 {
            return Err(CurveError::TableTooShort(out.len()));
        }

        let step = DISTANCE_END / out.len() as f64;
        for (k, slot) in out.iter_mut().enumerate() {
            *slot = self.sample(k as f64 * step) as f32;
        }

        Ok(())
    }
}
