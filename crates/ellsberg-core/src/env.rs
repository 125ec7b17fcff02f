//! Environment abstraction for deterministic testing.
//!
//! The `Environment` trait decouples the experiment model from the
//! process-wide random generator. This enables:
//!
//! - Deterministic testing: a seeded RNG reproduces a full session exactly,
//!   draw for draw.
//! - Production runtime: the runner uses OS-seeded randomness without any
//!   code changes to the model.
//!
//! # Invariants
//!
//! - Uniformity: `uniform_f64` covers `[0, 1)`, `uniform_range` covers the
//!   closed range with both endpoints reachable
//! - Determinism: given the same seed, a seeded implementation produces the
//!   same sequence
//! - Isolation: implementations must not share global state

use std::ops::RangeInclusive;

/// Abstract source of randomness for the experiment model.
///
/// All random decisions in the model (urn composition, condition
/// assignment, ball draws) go through this trait, so tests can substitute
/// a deterministic or scripted source instead of depending on process-wide
/// generator state.
///
/// # Safety
///
/// Implementations MUST guarantee:
///
/// 1. `uniform_f64()` returns values in `[0, 1)`, never `1.0`
/// 2. `uniform_range(lo..=hi)` returns values in `[lo, hi]`, both endpoints
///    possible
/// 3. Minimal panics: methods are infallible except in exceptional
///    circumstances (e.g., an empty `RangeInclusive`, incorrect scripted
///    setup)
pub trait Environment: Clone + Send + Sync + 'static {
    /// Draws a uniform float in `[0, 1)`.
    ///
    /// Used by known urns: draws strictly below `0.5` resolve to Red.
    fn uniform_f64(&self) -> f64;

    /// Draws a uniform integer from a closed range, endpoints inclusive.
    ///
    /// Used for urn composition (`0..=size`) and draw indices
    /// (`0..=size-1`).
    ///
    /// # Invariants
    ///
    /// - The range must be non-empty (`lo <= hi`)
    fn uniform_range(&self, range: RangeInclusive<u64>) -> u64;

    /// Picks a uniformly random element of a slice.
    ///
    /// Returns `None` on an empty slice. Used for condition assignment
    /// (urn size, unknown-urn side).
    fn pick<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let index = self.uniform_range(0..=(items.len() as u64 - 1));
        items.get(usize::try_from(index).ok()?)
    }
}
