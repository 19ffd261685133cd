//! Motion module for scurve-stepper.
//!
//! Provides timing derivation and the step delay generator.

mod generator;
mod phase;
mod timing;

pub use generator::SCurveGenerator;
pub use phase::Phase;
pub use timing::TimingParameters;
