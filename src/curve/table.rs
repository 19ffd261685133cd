//! Lookup table evaluation.
//!
//! A curve table holds N samples of a non-decreasing function over
//! `[0, 2π²]`, spaced `2π² / N` apart. Values between samples are
//! linearly interpolated; positions past the covered range clamp to the
//! last sample.

use core::f32::consts::PI;

use crate::error::CurveError;

/// π².
pub const PI2: f32 = PI * PI;

/// Upper bound of the ramp domain, `2π²`.
pub const DOMAIN_END: f32 = 2.0 * PI2;

/// Read-only view over precomputed curve samples.
///
/// The table is borrowed, so one set of samples can back any number of
/// generators.
#[derive(Debug, Clone, Copy)]
pub struct CurveTable<'a> {
    samples: &'a [f32],

    /// Domain width covered by one sample interval.
    step: f32,
}

impl<'a> CurveTable<'a> {
    /// Wrap a sample slice.
    ///
    /// # Errors
    ///
    /// Returns an error if the slice has fewer than two samples, contains a
    /// non-finite value, or decreases anywhere.
    pub fn new(samples: &'a [f32]) -> Result<Self, CurveError> {
        if samples.len() < 2 {
            return Err(CurveError::TableTooShort(samples.len()));
        }

        for (index, sample) in samples.iter().enumerate() {
            if !sample.is_finite() {
                return Err(CurveError::NonFiniteSample { index });
            }
        }

        if let Some(index) = samples
            .windows(2)
            .position(|pair| pair[1] < pair[0])
        {
            return Err(CurveError::NonMonotonic { index: index + 1 });
        }

        Ok(Self {
            samples,
            step: DOMAIN_END / samples.len() as f32,
        })
    }

    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false; construction rejects tables shorter than two samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Domain width between adjacent samples.
    #[inline]
    pub fn step(&self) -> f32 {
        self.step
    }

    /// The raw samples.
    #[inline]
    pub fn samples(&self) -> &'a [f32] {
        self.samples
    }

    /// First sample, the curve value at position 0.
    #[inline]
    pub fn first(&self) -> f32 {
        self.samples[0]
    }

    /// Last sample, returned for every position at or past the domain end.
    #[inline]
    pub fn last(&self) -> f32 {
        self.samples[self.samples.len() - 1]
    }

    /// Evaluate the curve at ramp position `d`.
    ///
    /// Piecewise-linear between samples. No extrapolation: positions at or
    /// beyond `2π²`, and positions in the final partial interval that has no
    /// right-hand sample, return the last sample. Non-positive and NaN
    /// positions return the first sample.
    pub fn solve(&self, d: f32) -> f32 {
        if d >= DOMAIN_END {
            return self.last();
        }
        if d.is_nan() || d <= 0.0 {
            return self.first();
        }

        let n = (d / self.step) as usize;
        match (self.samples.get(n), self.samples.get(n + 1)) {
            (Some(&lo), Some(&hi)) => {
                let frac = d - n as f32 * self.step;
                lo + (hi - lo) * frac / self.step
            }
            _ => self.last(),
        }
    }
}
