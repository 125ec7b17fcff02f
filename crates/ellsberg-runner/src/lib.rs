//! Interactive runner for the urn-choice experiment.
//!
//! This crate wires the core model to a terminal:
//!
//! ```text
//! ellsberg-runner
//!   ├─ SystemEnv / SeededEnv   (production Environment impls)
//!   ├─ flow                    (consent → demographics → choice → debrief)
//!   ├─ FileSink                (append-only CSV/JSON results file)
//!   └─ clap + tracing          (CLI surface and logging)
//! ```
//!
//! The flow reads from any `BufRead` and writes to any `Write`; the binary
//! just plugs in stdin/stdout, a results file, and an environment.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
pub mod flow;
mod results_file;
mod system_env;

pub use error::RunnerError;
pub use flow::{CONSENT_TEXT, DEBRIEF_TEXT, FlowError, FlowTexts, run_flow};
pub use results_file::{FileSink, RecordFormat};
pub use system_env::{SeededEnv, SystemEnv};
