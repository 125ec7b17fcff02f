//! Experiment configuration.
//!
//! One value from each condition list (urn size, unknown-urn side) is
//! assigned uniformly at random per session, so conditions fill evenly
//! given an adequate sample size. Demographic option lists and age bounds
//! gate what the intake flow accepts.

use serde::{Deserialize, Serialize};

use crate::outcome::Side;

/// Configuration errors caught before a session starts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The permitted urn-size list is empty.
    #[error("no permitted urn sizes configured")]
    NoUrnSizes,

    /// A configured urn size is zero.
    #[error("urn sizes must be positive")]
    ZeroUrnSize,

    /// The permitted unknown-side list is empty.
    #[error("no permitted unknown-urn sides configured")]
    NoSides,

    /// The gender option list is empty.
    #[error("no gender options configured")]
    NoGenders,

    /// The education option list is empty.
    #[error("no education options configured")]
    NoEducations,

    /// Age bounds are inverted.
    #[error("invalid age bounds: min {min} > max {max}")]
    InvalidAgeBounds {
        /// Lower bound.
        min: u32,
        /// Upper bound.
        max: u32,
    },
}

/// Static experiment parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    /// Permitted urn sizes; one is assigned per session.
    pub urn_sizes: Vec<u32>,
    /// Permitted unknown-urn positions; one is assigned per session.
    pub sides: Vec<Side>,
    /// Gender options offered by the intake flow.
    pub genders: Vec<String>,
    /// Education-level options offered by the intake flow.
    pub educations: Vec<String>,
    /// Minimum participant age, inclusive.
    pub min_age: u32,
    /// Maximum participant age, inclusive.
    pub max_age: u32,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            urn_sizes: vec![10, 100],
            sides: vec![Side::Left, Side::Right],
            genders: ["Female", "Male", "Non-binary", "Prefer not to say"]
                .map(String::from)
                .to_vec(),
            educations: ["High school", "Undergraduate", "Postgraduate", "Doctorate"]
                .map(String::from)
                .to_vec(),
            min_age: 18,
            max_age: 100,
        }
    }
}

impl ExperimentConfig {
    /// Validate the configuration before any session uses it.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found: empty condition or option
    /// lists, a zero urn size, or inverted age bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.urn_sizes.is_empty() {
            return Err(ConfigError::NoUrnSizes);
        }
        if self.urn_sizes.iter().any(|&size| size == 0) {
            return Err(ConfigError::ZeroUrnSize);
        }
        if self.sides.is_empty() {
            return Err(ConfigError::NoSides);
        }
        if self.genders.is_empty() {
            return Err(ConfigError::NoGenders);
        }
        if self.educations.is_empty() {
            return Err(ConfigError::NoEducations);
        }
        if self.min_age > self.max_age {
            return Err(ConfigError::InvalidAgeBounds { min: self.min_age, max: self.max_age });
        }

        Ok(())
    }
}
