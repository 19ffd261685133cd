//! Curve module for scurve-stepper.
//!
//! Provides the lookup table evaluator and the built-in shaping functions
//! used to generate tables offline.

mod shape;
mod table;

pub use shape::Shape;
pub use table::{CurveTable, DOMAIN_END, PI2};
