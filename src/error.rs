//! Error types for scurve-stepper.
//!
//! Provides unified error handling across configuration and curve tables.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all scurve-stepper operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Curve table error
    Curve(CurveError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Timing parameters that cannot produce a ramp of at least one step
    InvalidConfiguration {
        /// Requested ramp duration in microseconds
        transition_time_us: u32,
        /// Requested cruise delay in microseconds
        cruise_delay_us: u32,
    },
    /// Curve table size too small (must be >= 2)
    InvalidTableSize(usize),
    /// Profile name not found in configuration
    ProfileNotFound(heapless::String<32>),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Curve table errors.
#[derive(Debug, Clone, PartialEq)]
pub enum CurveError {
    /// Table holds fewer than two samples
    TableTooShort(usize),
    /// Sample is NaN or infinite
    NonFiniteSample {
        /// Index of the offending sample
        index: usize,
    },
    /// Sample is smaller than its predecessor
    NonMonotonic {
        /// Index of the offending sample
        index: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Curve(e) => write!(f, "Curve table error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::InvalidConfiguration {
                transition_time_us,
                cruise_delay_us,
            } => write!(
                f,
                "Invalid timing: transition of {} us with cruise delay {} us gives no ramp steps. \
                 Transition time must be at least twice the cruise delay",
                transition_time_us, cruise_delay_us
            ),
            ConfigError::InvalidTableSize(n) => {
                write!(f, "Invalid table size: {}. Must be >= 2", n)
            }
            ConfigError::ProfileNotFound(name) => write!(f, "Profile '{}' not found", name),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for CurveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurveError::TableTooShort(n) => {
                write!(f, "Table has {} samples, at least 2 required", n)
            }
            CurveError::NonFiniteSample { index } => {
                write!(f, "Sample {} is not finite", index)
            }
            CurveError::NonMonotonic { index } => {
                write!(f, "Sample {} is smaller than sample {}", index, index.saturating_sub(1))
            }
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<CurveError> for Error {
    fn from(e: CurveError) -> Self {
        Error::Curve(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for CurveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_configuration_message() {
        let err: Error = ConfigError::InvalidConfiguration {
            transition_time_us: 100,
            cruise_delay_us: 200,
        }
        .into();

        let msg = err.to_string();
        assert!(msg.starts_with("Configuration error"));
        assert!(msg.contains("100 us"));
        assert!(msg.contains("200 us"));
    }

    #[test]
    fn test_non_monotonic_message() {
        let err = Error::from(CurveError::NonMonotonic { index: 3 });
        assert_eq!(
            err.to_string(),
            "Curve table error: Sample 3 is smaller than sample 2"
        );
    }
}
