//! Result records and append-only sinks.
//!
//! One record per completed session, in the study's stable delimited
//! format: age, gender, education, urn size, unknown-urn side code,
//! selected side code, drawn color. Sides are logged as their numeric
//! codes (`1` left, `0` right) so downstream analysis scripts keep
//! working.

use serde::{Deserialize, Serialize};

use crate::{
    outcome::Side,
    urn::Color,
};

/// One completed session, ready to persist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Participant age.
    pub age: u32,
    /// Participant gender.
    pub gender: String,
    /// Participant education level.
    pub education: String,
    /// Assigned urn size.
    pub urn_size: u32,
    /// Side the unknown urn was rendered on.
    pub unknown_side: Side,
    /// Side the participant selected.
    pub choice: Side,
    /// Color of the drawn ball.
    pub drawn: Color,
}

impl Record {
    /// Render the record as one delimited results line.
    ///
    /// Field order and separators are stable; analysis scripts depend on
    /// them.
    pub fn to_line(&self) -> String {
        format!(
            "{}, {}, {}, {}, {}, {}, {}",
            self.age,
            self.gender,
            self.education,
            self.urn_size,
            self.unknown_side.code(),
            self.choice.code(),
            self.drawn,
        )
    }
}

/// Errors from appending to a results sink.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// Underlying I/O failure.
    #[error("results I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Record could not be serialized.
    #[error("record serialization failed: {0}")]
    Serialize(String),
}

/// Append-only destination for completed-session records.
pub trait ResultsSink {
    /// Append one record.
    fn append(&mut self, record: &Record) -> Result<(), SinkError>;
}

/// In-memory sink for tests and embedders.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Vec<Record>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records appended so far, in order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }
}

impl ResultsSink for MemorySink {
    fn append(&mut self, record: &Record) -> Result<(), SinkError> {
        self.records.push(record.clone());
        Ok(())
    }
}
