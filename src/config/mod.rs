//! Configuration module for scurve-stepper.
//!
//! Provides types for loading and validating named generator profiles
//! from TOML files (with `std` feature) or pre-parsed data.

mod profile;
mod system;
#[cfg(feature = "std")]
mod loader;
mod validation;

pub use profile::ProfileConfig;
pub use system::SystemConfig;
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};
