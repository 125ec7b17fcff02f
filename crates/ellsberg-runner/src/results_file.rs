//! Append-only results file sink.
//!
//! One line per completed session. The CSV-line format matches the study's
//! original results file; JSON lines are available for tooling that
//! prefers self-describing rows.

use std::{
    fs::{File, OpenOptions},
    io::Write,
    path::Path,
    str::FromStr,
};

use ellsberg_core::{Record, ResultsSink, SinkError};

/// On-disk representation of a results row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordFormat {
    /// The study's delimited line format.
    #[default]
    Csv,
    /// One JSON object per line.
    Json,
}

impl FromStr for RecordFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown results format '{other}', expected csv or json")),
        }
    }
}

/// Append-only file sink for session records.
///
/// The file and its parent directory are created on open; existing
/// contents are never touched. Each append writes one line and flushes.
#[derive(Debug)]
pub struct FileSink {
    file: File,
    format: RecordFormat,
}

impl FileSink {
    /// Open (or create) the results file for appending.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError::Io`] if the directory or file cannot be
    /// created.
    pub fn open(path: &Path, format: RecordFormat) -> Result<Self, SinkError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self { file, format })
    }
}

impl ResultsSink for FileSink {
    fn append(&mut self, record: &Record) -> Result<(), SinkError> {
        let line = match self.format {
            RecordFormat::Csv => record.to_line(),
            RecordFormat::Json => {
                serde_json::to_string(record).map_err(|e| SinkError::Serialize(e.to_string()))?
            },
        };

        writeln!(self.file, "{line}")?;
        self.file.flush()?;
        Ok(())
    }
}
