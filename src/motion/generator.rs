//! S-curve step delay generator.
//!
//! Pull-based: every call to [`SCurveGenerator::next_delay`] returns the
//! delay until the next step and advances the state machine. `start()` and
//! `stop()` only request transitions; they take effect on the next pull.

use crate::curve::{CurveTable, DOMAIN_END};
use crate::error::Result;

use super::phase::Phase;
use super::timing::TimingParameters;

/// Step delay generator for one axis.
///
/// Borrows its curve table, so a single table can serve several generators.
/// Every operation runs in constant time without allocation.
#[derive(Debug, Clone)]
pub struct SCurveGenerator<'a> {
    /// Curve samples (time as a function of ramp position).
    table: CurveTable<'a>,

    /// Constants fixed at construction.
    timing: TimingParameters,

    /// Current phase.
    phase: Phase,

    /// Ramp index, `0..=transition_steps`.
    index: u32,

    /// Curve time at the last evaluated ramp index, in microseconds.
    t_previous: f32,

    /// Last delay handed out.
    delay: f32,
}

impl<'a> SCurveGenerator<'a> {
    /// Create a stopped generator.
    ///
    /// # Arguments
    ///
    /// * `table` - Curve samples over `[0, 2π²]`
    /// * `transition_time_us` - Duration of the acceleration (and deceleration) ramp
    /// * `cruise_delay_us` - Delay between steps at cruise speed
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidConfiguration` if the timings cannot
    /// produce a ramp of at least one step.
    pub fn new(table: CurveTable<'a>, transition_time_us: u32, cruise_delay_us: u32) -> Result<Self> {
        let timing = TimingParameters::derive(transition_time_us, cruise_delay_us)?;
        Ok(Self::with_timing(table, timing))
    }

    /// Create a stopped generator from already derived timing.
    pub fn with_timing(table: CurveTable<'a>, timing: TimingParameters) -> Self {
        Self {
            table,
            timing,
            phase: Phase::Stopped,
            index: 0,
            t_previous: 0.0,
            delay: 0.0,
        }
    }

    /// Current phase.
    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Check if the generator is at rest.
    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.phase == Phase::Stopped
    }

    /// Steps in one acceleration (or deceleration) ramp.
    #[inline]
    pub fn number_of_transition_steps(&self) -> u32 {
        self.timing.transition_steps()
    }

    /// Current ramp index.
    #[inline]
    pub fn ramp_index(&self) -> u32 {
        self.index
    }

    /// Last delay returned by a pull, without advancing.
    #[inline]
    pub fn current_delay(&self) -> f32 {
        self.delay
    }

    /// Timing constants.
    #[inline]
    pub fn timing(&self) -> &TimingParameters {
        &self.timing
    }

    /// The curve table in use.
    #[inline]
    pub fn table(&self) -> &CurveTable<'a> {
        &self.table
    }

    /// Request acceleration. No-op unless stopped.
    pub fn start(&mut self) {
        if self.phase != Phase::Stopped {
            return;
        }

        self.index = 0;
        self.t_previous = self.curve_time(0);
        self.phase = Phase::Accelerating;

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "start: ramp of {} steps, cruise {} us",
            self.timing.transition_steps(),
            self.timing.cruise_delay()
        );
    }

    /// Request deceleration. No-op unless cruising.
    ///
    /// Deceleration runs the full ramp in reverse; it cannot be cut short.
    pub fn stop(&mut self) {
        if self.phase != Phase::Cruising {
            return;
        }

        let steps = self.timing.transition_steps();
        self.index = steps;
        self.t_previous = self.curve_time(steps - 1);
        self.phase = Phase::Decelerating;

        #[cfg(feature = "defmt")]
        defmt::debug!("stop: decelerating from index {}", self.index);
    }

    /// Pull the delay until the next step, in microseconds, and advance.
    ///
    /// A ramp of `n` steps evaluates the curve at indices `0..n`: its first
    /// `n - 1` delays are the curve intervals, and the `n`-th pull hands off
    /// at the cruise delay, switching phase in the same call. Deceleration
    /// returns the same delays in reverse. While stopped, the last delay is
    /// returned again.
    pub fn next_delay(&mut self) -> f32 {
        let steps = self.timing.transition_steps();

        let (delay, next) = match self.phase {
            Phase::Stopped => (self.delay, Phase::Stopped),
            Phase::Accelerating => {
                self.index += 1;
                if self.index >= steps {
                    (self.timing.cruise_delay(), Phase::Cruising)
                } else {
                    let t = self.curve_time(self.index);
                    let delay = t - self.t_previous;
                    self.t_previous = t;
                    (delay, Phase::Accelerating)
                }
            }
            Phase::Cruising => (self.timing.cruise_delay(), Phase::Cruising),
            Phase::Decelerating => {
                let from = self.index;
                self.index = from.saturating_sub(1);
                let delay = if from >= steps {
                    self.timing.cruise_delay()
                } else {
                    let t = self.curve_time(self.index);
                    // delay grows as speed drops, so the sign flips
                    let delay = self.t_previous - t;
                    self.t_previous = t;
                    delay
                };

                if self.index == 0 {
                    (delay, Phase::Stopped)
                } else {
                    (delay, Phase::Decelerating)
                }
            }
        };

        #[cfg(feature = "defmt")]
        if next != self.phase {
            defmt::debug!("phase {} -> {}", self.phase, next);
        }

        self.phase = next;
        self.delay = delay;
        delay
    }

    /// Pull the next delay truncated to whole microseconds.
    #[inline]
    pub fn next_delay_us(&mut self) -> u32 {
        // `as` saturates: negative or NaN become 0
        self.next_delay() as u32
    }

    /// Curve time at ramp index `i`, in microseconds.
    ///
    /// Only called with `i < transition_steps`, so positions stay below
    /// `2π²` and inside the sampled range of any table with at least as
    /// many samples as ramp steps.
    fn curve_time(&self, i: u32) -> f32 {
        let d = DOMAIN_END * i as f32 / self.timing.transition_steps() as f32;
        self.table.solve(d) * self.timing.kt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::Shape;

    const TABLE_SIZE: usize = 1024;

    fn linear_samples() -> [f32; TABLE_SIZE] {
        let mut samples = [0.0f32; TABLE_SIZE];
        Shape::Linear.fill(&mut samples).unwrap();
        samples
    }

    fn run_to_cruise(generator: &mut SCurveGenerator<'_>) -> heapless::Vec<f32, 256> {
        let mut delays = heapless::Vec::new();
        generator.start();
        while generator.phase() == Phase::Accelerating {
            delays.push(generator.next_delay()).unwrap();
        }
        delays
    }

    #[test]
    fn test_initial_state() {
        let samples = linear_samples();
        let table = CurveTable::new(&samples).unwrap();
        let mut generator = SCurveGenerator::new(table, 10_000, 100).unwrap();

        assert_eq!(generator.phase(), Phase::Stopped);
        assert_eq!(generator.ramp_index(), 0);
        assert_eq!(generator.number_of_transition_steps(), 50);
        assert_eq!(generator.next_delay(), 0.0);
        assert_eq!(generator.phase(), Phase::Stopped);
    }

    #[test]
    fn test_cruise_reached_on_last_ramp_step() {
        let samples = linear_samples();
        let table = CurveTable::new(&samples).unwrap();
        let mut generator = SCurveGenerator::new(table, 10_000, 100).unwrap();

        generator.start();
        for pull in 1..50 {
            generator.next_delay();
            assert_eq!(generator.phase(), Phase::Accelerating, "pull {}", pull);
            assert_eq!(generator.ramp_index(), pull);
        }

        generator.next_delay();
        assert_eq!(generator.phase(), Phase::Cruising);
        assert_eq!(generator.ramp_index(), 50);
    }

    #[test]
    fn test_cruise_delay_is_constant() {
        let samples = linear_samples();
        let table = CurveTable::new(&samples).unwrap();
        let mut generator = SCurveGenerator::new(table, 10_000, 100).unwrap();

        run_to_cruise(&mut generator);
        for _ in 0..10 {
            assert!((generator.next_delay() - 100.0).abs() < 1e-4);
            assert_eq!(generator.next_delay_us(), 100);
        }
        assert_eq!(generator.phase(), Phase::Cruising);
    }

    #[test]
    fn test_acceleration_speeds_up() {
        let samples = linear_samples();
        let table = CurveTable::new(&samples).unwrap();
        let mut generator = SCurveGenerator::new(table, 10_000, 100).unwrap();

        let delays = run_to_cruise(&mut generator);
        assert_eq!(delays.len(), 50);
        assert!(delays[0] > delays[49]);
        for pair in delays.windows(2) {
            assert!(pair[1] <= pair[0] + 1e-2, "{} then {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_stop_ignored_unless_cruising() {
        let samples = linear_samples();
        let table = CurveTable::new(&samples).unwrap();
        let mut generator = SCurveGenerator::new(table, 10_000, 100).unwrap();

        generator.stop();
        assert_eq!(generator.phase(), Phase::Stopped);
        assert_eq!(generator.ramp_index(), 0);

        generator.start();
        generator.next_delay();
        generator.next_delay();
        generator.stop();
        assert_eq!(generator.phase(), Phase::Accelerating);
        assert_eq!(generator.ramp_index(), 2);
    }

    #[test]
    fn test_start_ignored_while_moving() {
        let samples = linear_samples();
        let table = CurveTable::new(&samples).unwrap();
        let mut generator = SCurveGenerator::new(table, 10_000, 100).unwrap();

        generator.start();
        generator.next_delay();
        generator.start();
        assert_eq!(generator.ramp_index(), 1);

        while generator.phase() == Phase::Accelerating {
            generator.next_delay();
        }
        generator.start();
        assert_eq!(generator.phase(), Phase::Cruising);
    }

    #[test]
    fn test_deceleration_mirrors_acceleration() {
        let samples = linear_samples();
        let table = CurveTable::new(&samples).unwrap();
        let mut generator = SCurveGenerator::new(table, 10_000, 100).unwrap();

        let accel = run_to_cruise(&mut generator);
        generator.next_delay();
        generator.stop();
        assert_eq!(generator.phase(), Phase::Decelerating);
        assert_eq!(generator.ramp_index(), 50);

        let mut decel: heapless::Vec<f32, 256> = heapless::Vec::new();
        while generator.phase() == Phase::Decelerating {
            decel.push(generator.next_delay()).unwrap();
        }

        assert_eq!(generator.phase(), Phase::Stopped);
        assert_eq!(generator.ramp_index(), 0);
        assert_eq!(decel.len(), accel.len());
        for (a, d) in accel.iter().zip(decel.iter().rev()) {
            assert!((a - d).abs() < 1e-3);
        }
    }

    #[test]
    fn test_stopped_repeats_last_delay() {
        let samples = linear_samples();
        let table = CurveTable::new(&samples).unwrap();
        let mut generator = SCurveGenerator::new(table, 10_000, 100).unwrap();

        run_to_cruise(&mut generator);
        generator.stop();
        let mut last = 0.0;
        while !generator.is_stopped() {
            last = generator.next_delay();
        }

        assert_eq!(generator.next_delay(), last);
        assert_eq!(generator.current_delay(), last);
    }

    #[test]
    fn test_restart_after_full_cycle() {
        let samples = linear_samples();
        let table = CurveTable::new(&samples).unwrap();
        let mut generator = SCurveGenerator::new(table, 10_000, 100).unwrap();

        let first = run_to_cruise(&mut generator);
        generator.stop();
        while !generator.is_stopped() {
            generator.next_delay();
        }

        let second = run_to_cruise(&mut generator);
        assert_eq!(first, second);
    }

    #[test]
    fn test_single_step_ramp() {
        let samples = linear_samples();
        let table = CurveTable::new(&samples).unwrap();
        let mut generator = SCurveGenerator::new(table, 200, 100).unwrap();

        generator.start();
        let delay = generator.next_delay();
        assert_eq!(generator.phase(), Phase::Cruising);
        assert_eq!(delay, generator.timing().cruise_delay());

        generator.stop();
        assert_eq!(generator.next_delay(), delay);
        assert!(generator.is_stopped());
    }

    #[test]
    fn test_last_ramp_delay_is_cruise_delay() {
        let samples = linear_samples();
        let table = CurveTable::new(&samples).unwrap();
        let mut generator = SCurveGenerator::new(table, 10_000, 100).unwrap();

        let delays = run_to_cruise(&mut generator);
        assert_eq!(delays[49], generator.timing().cruise_delay());

        // last curve interval, t(49) - t(48), for tau = sqrt(2d)
        let expected = 10_000.0 * (libm::sqrtf(0.98) - libm::sqrtf(0.96));
        assert!((delays[48] - expected).abs() < 0.1, "{} vs {}", delays[48], expected);
        assert!(delays[48] >= delays[49]);
    }

    #[test]
    fn test_start_and_stop_ignored_while_decelerating() {
        let samples = linear_samples();
        let table = CurveTable::new(&samples).unwrap();
        let mut generator = SCurveGenerator::new(table, 10_000, 100).unwrap();

        run_to_cruise(&mut generator);
        generator.stop();
        for _ in 0..5 {
            generator.next_delay();
        }
        assert_eq!(generator.phase(), Phase::Decelerating);
        assert_eq!(generator.ramp_index(), 45);

        generator.stop();
        assert_eq!(generator.phase(), Phase::Decelerating);
        assert_eq!(generator.ramp_index(), 45);

        generator.start();
        assert_eq!(generator.phase(), Phase::Decelerating);
        assert_eq!(generator.ramp_index(), 45);

        let mut remaining = 0;
        while !generator.is_stopped() {
            generator.next_delay();
            remaining += 1;
        }
        assert_eq!(remaining, 45);
    }

    #[test]
    fn test_invalid_timing_rejected() {
        let samples = linear_samples();
        let table = CurveTable::new(&samples).unwrap();

        assert!(SCurveGenerator::new(table, 100, 100).is_err());
        assert!(SCurveGenerator::new(table, 10_000, 0).is_err());
    }
}
