//! Scripted environment: draws come from queues the test fills.
//!
//! For boundary cases the seeded environment is the wrong tool - waiting
//! for a ChaCha stream to emit exactly `0.5` never terminates. The
//! scripted environment hands the model exactly the values the test
//! pushed, in order.

use std::{
    collections::VecDeque,
    ops::RangeInclusive,
    sync::{Arc, Mutex, PoisonError},
};

use ellsberg_core::Environment;

/// Environment returning pre-scripted values.
///
/// Floats and integers live in separate FIFO queues. An exhausted queue
/// logs an error and returns the lowest legal value rather than panicking;
/// integer values outside the requested range are clamped with a warning,
/// since the script was written against an expected call sequence.
#[derive(Clone, Default)]
pub struct ScriptedEnv {
    floats: Arc<Mutex<VecDeque<f64>>>,
    ints: Arc<Mutex<VecDeque<u64>>>,
}

impl ScriptedEnv {
    /// Create an environment with empty scripts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an environment pre-loaded with float draws.
    #[must_use]
    pub fn with_floats(floats: impl IntoIterator<Item = f64>) -> Self {
        let env = Self::new();
        for value in floats {
            env.push_float(value);
        }
        env
    }

    /// Queue a float for a future `uniform_f64` call.
    pub fn push_float(&self, value: f64) {
        self.floats.lock().unwrap_or_else(PoisonError::into_inner).push_back(value);
    }

    /// Queue an integer for a future `uniform_range` call.
    pub fn push_int(&self, value: u64) {
        self.ints.lock().unwrap_or_else(PoisonError::into_inner).push_back(value);
    }
}

impl Environment for ScriptedEnv {
    fn uniform_f64(&self) -> f64 {
        match self.floats.lock().unwrap_or_else(PoisonError::into_inner).pop_front() {
            Some(value) => value,
            None => {
                tracing::error!("scripted float queue exhausted, returning 0.0");
                0.0
            },
        }
    }

    fn uniform_range(&self, range: RangeInclusive<u64>) -> u64 {
        let (lo, hi) = (*range.start(), *range.end());

        match self.ints.lock().unwrap_or_else(PoisonError::into_inner).pop_front() {
            Some(value) if (lo..=hi).contains(&value) => value,
            Some(value) => {
                tracing::warn!(value, lo, hi, "scripted integer outside range, clamping");
                value.clamp(lo, hi)
            },
            None => {
                tracing::error!(lo, hi, "scripted integer queue exhausted, returning floor");
                lo
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_values_come_back_in_order() {
        let env = ScriptedEnv::new();
        env.push_float(0.1);
        env.push_float(0.9);
        env.push_int(3);
        env.push_int(7);

        assert!((env.uniform_f64() - 0.1).abs() < f64::EPSILON);
        assert!((env.uniform_f64() - 0.9).abs() < f64::EPSILON);
        assert_eq!(env.uniform_range(0..=10), 3);
        assert_eq!(env.uniform_range(0..=10), 7);
    }

    #[test]
    fn out_of_range_integers_clamp() {
        let env = ScriptedEnv::new();
        env.push_int(100);

        assert_eq!(env.uniform_range(0..=10), 10);
    }

    #[test]
    fn exhausted_queues_return_floors() {
        let env = ScriptedEnv::new();

        assert!((env.uniform_f64() - 0.0).abs() < f64::EPSILON);
        assert_eq!(env.uniform_range(5..=10), 5);
    }
}
