//! Outcome resolution: which urn did the participant actually pick?
//!
//! The display layer shows two urns side by side; which side holds the
//! unknown urn is randomized per session. Resolution maps the pair
//! (selected side, unknown side) to "the participant picked the unknown
//! urn" through a fixed combination table, then the draw result maps to
//! win or loss.
//!
//! ## Design
//!
//! - Explicit table: the 2x2 mapping is written out arm by arm, not
//!   derived from a formula, so the pairing is auditable at a glance
//! - Fail loudly: raw side codes outside the binary domain are an upstream
//!   encoding bug and are rejected, never defaulted

use serde::{Deserialize, Serialize};

use crate::urn::Color;

/// Side code for the left urn position.
pub const LEFT_CODE: u8 = 1;

/// Side code for the right urn position.
pub const RIGHT_CODE: u8 = 0;

/// A displayed urn position.
///
/// Codes follow the display layer's convention: `1` is left, `0` is right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The left urn position (code `1`).
    Left,
    /// The right urn position (code `0`).
    Right,
}

impl Side {
    /// The wire/logging code for this side.
    pub fn code(self) -> u8 {
        match self {
            Self::Left => LEFT_CODE,
            Self::Right => RIGHT_CODE,
        }
    }

    /// Parse a side from its code.
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError::InvalidSideCode`] for anything outside the
    /// binary domain.
    pub fn from_code(code: u8) -> Result<Self, OutcomeError> {
        match code {
            LEFT_CODE => Ok(Self::Left),
            RIGHT_CODE => Ok(Self::Right),
            _ => Err(OutcomeError::InvalidSideCode { code }),
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

/// Errors from outcome resolution on untrusted side encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum OutcomeError {
    /// A side code outside the binary domain.
    #[error("invalid side code {code}, expected 0 (right) or 1 (left)")]
    InvalidSideCode {
        /// The rejected code.
        code: u8,
    },

    /// A side-code pair not present in the resolution table.
    #[error("unrecognized side pair (selected={selected}, unknown={unknown})")]
    UnrecognizedPair {
        /// Selected-side code.
        selected: u8,
        /// Unknown-side code.
        unknown: u8,
    },
}

/// Resolve whether the participant selected the unknown urn.
///
/// The fixed combination table, with sides as codes (`1` left, `0` right):
///
/// | selected | unknown side | selected is unknown |
/// |----------|--------------|---------------------|
/// | 1        | 0            | false               |
/// | 1        | 1            | true                |
/// | 0        | 0            | true                |
/// | 0        | 1            | false               |
///
/// The table is equality of the two side codes, NOT exclusive-or.
pub fn selected_is_unknown(selected: Side, unknown_side: Side) -> bool {
    match (selected, unknown_side) {
        (Side::Left, Side::Right) => false,
        (Side::Left, Side::Left) => true,
        (Side::Right, Side::Right) => true,
        (Side::Right, Side::Left) => false,
    }
}

/// Resolve the combination table over raw side codes.
///
/// Upstream layers that carry sides as integers (click handlers, log
/// replay) go through this entry point so an encoding bug surfaces as an
/// error instead of silently defaulting.
///
/// # Errors
///
/// Returns [`OutcomeError::UnrecognizedPair`] for any pair outside the
/// 2x2 binary domain.
pub fn selected_is_unknown_codes(selected: u8, unknown: u8) -> Result<bool, OutcomeError> {
    match (selected, unknown) {
        (LEFT_CODE, RIGHT_CODE) => Ok(false),
        (LEFT_CODE, LEFT_CODE) => Ok(true),
        (RIGHT_CODE, RIGHT_CODE) => Ok(true),
        (RIGHT_CODE, LEFT_CODE) => Ok(false),
        _ => Err(OutcomeError::UnrecognizedPair { selected, unknown }),
    }
}

/// Win/loss outcome of a completed session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A blue ball was drawn.
    Win,
    /// A red ball was drawn.
    Lost,
}

impl Outcome {
    /// Map a drawn ball to win or loss: blue wins, red loses.
    ///
    /// Binary and exhaustive over the two-color domain.
    pub fn from_color(color: Color) -> Self {
        match color {
            Color::Blue => Self::Win,
            Color::Red => Self::Lost,
        }
    }

    /// Whether this outcome is a win.
    pub fn won(self) -> bool {
        matches!(self, Self::Win)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Win => write!(f, "Win"),
            Self::Lost => write!(f, "Lost"),
        }
    }
}
