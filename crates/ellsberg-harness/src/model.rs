//! Reference model for oracle comparison.
//!
//! The model restates the experiment's reasoning in obviously-correct
//! form, without going through the real types. It serves as the oracle
//! against which the real implementation is verified.
//!
//! # Design Principles
//!
//! - Simplicity: the model should be obviously correct
//! - Specification not implementation: captures WHAT, not HOW
//! - Deterministic: same inputs produce same outputs

use ellsberg_core::Color;

/// The fixed combination table over raw side codes (`1` left, `0` right).
///
/// `None` marks a pair outside the 2x2 domain; the real implementation
/// must reject those, never default them.
pub fn model_selected_is_unknown(selected: u8, unknown: u8) -> Option<bool> {
    match (selected, unknown) {
        (1, 0) => Some(false),
        (1, 1) => Some(true),
        (0, 0) => Some(true),
        (0, 1) => Some(false),
        _ => None,
    }
}

/// The win mapping: blue wins, anything else loses.
pub fn model_won(color: Color) -> bool {
    color == Color::Blue
}

/// Reference urn: plain fields, draw rules written out directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelUrn {
    /// Total ball count.
    pub size: u32,
    /// Red-ball count (only meaningful in unknown mode).
    pub red_count: u32,
    /// Whether the urn draws by its composition or by a fair coin.
    pub unknown: bool,
}

impl ModelUrn {
    /// The marginal probability of drawing red.
    pub fn red_probability(&self) -> f64 {
        if self.unknown {
            f64::from(self.red_count) / f64::from(self.size)
        } else {
            0.5
        }
    }

    /// Known-mode draw rule: a uniform float strictly below 0.5 is red.
    pub fn color_for_float(&self, value: f64) -> Color {
        if value < 0.5 { Color::Red } else { Color::Blue }
    }

    /// Unknown-mode draw rule: a uniform index over the balls lands red
    /// iff it falls among the first `red_count`.
    pub fn color_for_index(&self, index: u64) -> Color {
        if index < u64::from(self.red_count) { Color::Red } else { Color::Blue }
    }
}
