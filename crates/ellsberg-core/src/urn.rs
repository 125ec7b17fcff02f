//! Urn model: a two-color ball container with a known or hidden mix.
//!
//! ## Responsibilities
//!
//! - Composition: fix the red-ball count once, at construction
//! - Draws: produce one ball per call, consistent with the urn's mode
//!
//! ## Design
//!
//! - Eager sampling: the composition is sampled at construction regardless
//!   of the `unknown` flag, so a later mode flip draws against a count that
//!   was actually fixed up front
//! - Draw mode, not ball removal: draws are independent and never mutate
//!   the composition

use serde::{Deserialize, Serialize};

use crate::env::Environment;

/// Ball colors drawn from an urn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    /// A red ball. Drawing red loses.
    Red,
    /// A blue ball. Drawing blue wins.
    Blue,
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Red => write!(f, "Red"),
            Self::Blue => write!(f, "Blue"),
        }
    }
}

/// Errors from urn construction and mutation.
#[derive(Debug, thiserror::Error)]
pub enum UrnError {
    /// Urn size must be a positive ball count.
    #[error("urn size must be positive, got {size}")]
    InvalidSize {
        /// The rejected size.
        size: u32,
    },

    /// A forced composition exceeded the urn size.
    #[error("red count {red_count} exceeds urn size {size}")]
    CompositionOutOfRange {
        /// Requested red-ball count.
        red_count: u32,
        /// Total ball count.
        size: u32,
    },
}

/// A container of red and blue balls.
///
/// In known mode the mix is an implicit 50/50: draws resolve by a fair
/// coin, no concrete ball counts are consulted. In unknown mode the mix is
/// the `red_count` fixed at construction, hidden from the participant.
///
/// # Invariants
///
/// - `red_count <= size` at all times, enforced by construction
/// - `red_count` is never resampled after construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Urn {
    /// Total ball count.
    size: u32,
    /// Whether the mix is hidden from the participant.
    unknown: bool,
    /// Red-ball count, fixed at construction.
    red_count: u32,
}

impl Urn {
    /// Create an urn, sampling its composition from the environment.
    ///
    /// The red-ball count is drawn once, uniformly from `[0, size]`
    /// inclusive (an urn can legally be all-blue or all-red) and is fixed
    /// for the urn's lifetime. Sampling happens regardless of the `unknown`
    /// flag, so flipping the mode later (see [`Urn::set_unknown`]) draws
    /// against this same count.
    ///
    /// # Errors
    ///
    /// Returns [`UrnError::InvalidSize`] if `size` is zero.
    pub fn new<E: Environment>(env: &E, size: u32, unknown: bool) -> Result<Self, UrnError> {
        if size == 0 {
            return Err(UrnError::InvalidSize { size });
        }

        // The sampled value is <= size, which already fits in u32.
        let red_count = u32::try_from(env.uniform_range(0..=u64::from(size))).unwrap_or(size);
        Ok(Self { size, unknown, red_count })
    }

    /// Create an urn with a forced composition.
    ///
    /// Used by tests and debriefing tooling that need a specific mix
    /// instead of a sampled one.
    ///
    /// # Errors
    ///
    /// Returns [`UrnError::InvalidSize`] if `size` is zero, or
    /// [`UrnError::CompositionOutOfRange`] if `red_count > size`.
    pub fn with_composition(size: u32, red_count: u32, unknown: bool) -> Result<Self, UrnError> {
        if size == 0 {
            return Err(UrnError::InvalidSize { size });
        }
        if red_count > size {
            return Err(UrnError::CompositionOutOfRange { red_count, size });
        }

        Ok(Self { size, unknown, red_count })
    }

    /// Total ball count.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Whether the mix is hidden from the participant.
    pub fn is_unknown(&self) -> bool {
        self.unknown
    }

    /// Red-ball count fixed at construction.
    ///
    /// Only consulted by draws in unknown mode; a known urn draws by a
    /// fair coin instead.
    pub fn red_count(&self) -> u32 {
        self.red_count
    }

    /// Change the total ball count.
    ///
    /// # Errors
    ///
    /// Returns [`UrnError::InvalidSize`] if `size` is zero, or
    /// [`UrnError::CompositionOutOfRange`] if the new size would fall below
    /// the composition fixed at construction.
    pub fn set_size(&mut self, size: u32) -> Result<(), UrnError> {
        if size == 0 {
            return Err(UrnError::InvalidSize { size });
        }
        if self.red_count > size {
            return Err(UrnError::CompositionOutOfRange { red_count: self.red_count, size });
        }

        self.size = size;
        Ok(())
    }

    /// Flip the urn between known and unknown mode.
    ///
    /// This changes ONLY the draw rule. The composition was sampled
    /// eagerly at construction and is NOT resampled here: an urn switched
    /// to unknown mode draws against the count fixed when it was built.
    pub fn set_unknown(&mut self, unknown: bool) {
        self.unknown = unknown;
    }

    /// Human-readable summary of the urn's declared state.
    pub fn describe(&self) -> String {
        format!("Urn: [Size: {}, Unknown: {}]", self.size, self.unknown)
    }

    /// Draw one ball.
    ///
    /// Unknown mode: a uniform index over the `size` balls, red iff the
    /// index lands among the `red_count` red ones; the marginal
    /// probability is exactly `red_count / size`. Known mode: a uniform
    /// float in `[0, 1)`, with draws strictly below `0.5` yielding red.
    ///
    /// Draws are independent and never mutate the urn.
    pub fn draw<E: Environment>(&self, env: &E) -> Color {
        if self.unknown {
            let index = env.uniform_range(0..=u64::from(self.size - 1));
            if index < u64::from(self.red_count) { Color::Red } else { Color::Blue }
        } else if env.uniform_f64() < 0.5 {
            Color::Red
        } else {
            Color::Blue
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        ops::RangeInclusive,
        sync::{
            Arc, Mutex,
            atomic::{AtomicU64, Ordering},
        },
    };

    use proptest::prelude::*;

    use super::*;

    /// Deterministic stub: integers step through the requested range via a
    /// shared counter, floats pop from a script.
    #[derive(Clone)]
    struct StubEnv {
        step: Arc<AtomicU64>,
        floats: Arc<Mutex<Vec<f64>>>,
    }

    impl StubEnv {
        fn new(floats: Vec<f64>) -> Self {
            let mut script = floats;
            script.reverse();
            Self { step: Arc::new(AtomicU64::new(0)), floats: Arc::new(Mutex::new(script)) }
        }
    }

    impl Environment for StubEnv {
        fn uniform_f64(&self) -> f64 {
            self.floats.lock().map(|mut s| s.pop().unwrap_or(0.75)).unwrap_or(0.75)
        }

        fn uniform_range(&self, range: RangeInclusive<u64>) -> u64 {
            let (lo, hi) = (*range.start(), *range.end());
            let n = self.step.fetch_add(1, Ordering::Relaxed);
            lo + n % (hi - lo + 1)
        }
    }

    #[test]
    fn zero_size_is_rejected() {
        let env = StubEnv::new(vec![]);

        assert!(matches!(Urn::new(&env, 0, true), Err(UrnError::InvalidSize { size: 0 })));
    }

    #[test]
    fn forced_composition_validates_bounds() {
        assert!(Urn::with_composition(10, 11, true).is_err());
        assert!(Urn::with_composition(0, 0, true).is_err());
        assert!(Urn::with_composition(10, 10, true).is_ok());
        assert!(Urn::with_composition(10, 0, false).is_ok());
    }

    #[test]
    fn composition_survives_mode_flip() {
        let env = StubEnv::new(vec![]);
        let mut urn = Urn::new(&env, 100, false).expect("valid size");
        let fixed = urn.red_count();

        urn.set_unknown(true);
        assert!(urn.is_unknown());
        assert_eq!(urn.red_count(), fixed, "mode flip must not resample");
    }

    #[test]
    fn set_size_cannot_break_composition_invariant() {
        let mut urn = Urn::with_composition(50, 30, true).expect("valid");

        assert!(urn.set_size(0).is_err());
        assert!(urn.set_size(29).is_err());
        assert!(urn.set_size(30).is_ok());
        assert_eq!(urn.size(), 30);
    }

    #[test]
    fn all_red_urn_always_draws_red() {
        let env = StubEnv::new(vec![]);
        let urn = Urn::with_composition(10, 10, true).expect("valid");

        for _ in 0..100 {
            assert_eq!(urn.draw(&env), Color::Red);
        }
    }

    #[test]
    fn all_blue_urn_never_draws_red() {
        let env = StubEnv::new(vec![]);
        let urn = Urn::with_composition(10, 0, true).expect("valid");

        for _ in 0..100 {
            assert_eq!(urn.draw(&env), Color::Blue);
        }
    }

    #[test]
    fn known_urn_red_boundary_is_inclusive_low() {
        let urn = Urn::with_composition(100, 0, false).expect("valid");

        let below = StubEnv::new(vec![0.49]);
        assert_eq!(urn.draw(&below), Color::Red);

        let at = StubEnv::new(vec![0.5]);
        assert_eq!(urn.draw(&at), Color::Blue);
    }

    #[test]
    fn describe_reports_declared_state() {
        let urn = Urn::with_composition(100, 40, false).expect("valid");

        assert_eq!(urn.describe(), "Urn: [Size: 100, Unknown: false]");
    }

    proptest! {
        #[test]
        fn sampled_composition_stays_in_bounds(size in 1u32..10_000) {
            let env = StubEnv::new(vec![]);
            let urn = Urn::new(&env, size, true).expect("positive size");

            prop_assert!(urn.red_count() <= urn.size());
        }

        #[test]
        fn draw_is_total_over_two_colors(size in 1u32..1_000, seed in 0u64..1_000) {
            let env = StubEnv::new(vec![0.3]);
            // Skew the stub's phase so different draw indices are hit.
            for _ in 0..seed % 7 {
                let _ = env.uniform_range(0..=u64::from(size));
            }
            let urn = Urn::new(&env, size, true).expect("positive size");

            let color = urn.draw(&env);
            prop_assert!(matches!(color, Color::Red | Color::Blue));
        }
    }
}
