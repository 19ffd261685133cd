//! # scurve-stepper
//!
//! Table-driven S-curve step delay generation for stepper motors.
//!
//! A motor-control loop asks the generator how long to wait before the next
//! step. The generator ramps the delay down along a precomputed curve,
//! holds a constant cruise delay, then ramps it back up when asked to stop.
//!
//! ## Features
//!
//! - **Pull-based**: one call per step, constant time, no allocation
//! - **Table-driven**: the curve is a borrowed sample slice shared by any number of axes
//! - **Seamless handoff**: the final ramp delay meets the cruise delay
//! - **no_std compatible**: core library works without standard library
//! - **Configuration-driven**: named axis profiles from TOML files
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use scurve_stepper::{CurveTable, Phase, SCurveGenerator, Shape};
//!
//! let mut samples = [0.0f32; 1024];
//! Shape::Sinusoidal.fill(&mut samples)?;
//! let table = CurveTable::new(&samples)?;
//!
//! // 10 ms ramps, 100 us between steps at cruise speed
//! let mut generator = SCurveGenerator::new(table, 10_000, 100)?;
//!
//! generator.start();
//! while generator.phase() != Phase::Cruising {
//!     pulse_after(generator.next_delay_us());
//! }
//! generator.stop();
//! while !generator.is_stopped() {
//!     pulse_after(generator.next_delay_us());
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing; implies `alloc`
//! - `alloc`: Enables table generation into a `Vec` for no_std with allocator
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Core modules
pub mod config;
pub mod curve;
pub mod error;
pub mod motion;

// Re-exports for ergonomic API
pub use config::{validate_config, ProfileConfig, SystemConfig};
pub use curve::{CurveTable, Shape, DOMAIN_END, PI2};
pub use error::{ConfigError, CurveError, Error, Result};
pub use motion::{Phase, SCurveGenerator, TimingParameters};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};
