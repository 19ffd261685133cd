//! Generator phases.

/// Current phase of a motion cycle.
///
/// Cycles `Stopped → Accelerating → Cruising → Decelerating → Stopped`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// At rest. Only `start()` has an effect.
    #[default]
    Stopped,
    /// Ramping up toward cruise speed.
    Accelerating,
    /// Constant cruise speed. Only `stop()` has an effect.
    Cruising,
    /// Ramping down toward rest.
    Decelerating,
}

impl Phase {
    /// Check if the motor is stepping in this phase.
    #[inline]
    pub fn is_moving(self) -> bool {
        self != Phase::Stopped
    }

    /// Check if this is one of the two ramp phases.
    #[inline]
    pub fn is_ramping(self) -> bool {
        matches!(self, Phase::Accelerating | Phase::Decelerating)
    }
}
