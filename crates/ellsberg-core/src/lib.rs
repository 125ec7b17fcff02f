//! Core model for the urn-choice experiment.
//!
//! A participant is shown two urns of colored balls: one with a declared
//! 50/50 mix, one whose mix is hidden but fixed. Which side the unknown
//! urn appears on is randomized per session. The participant picks an urn,
//! one ball is drawn, and blue wins.
//!
//! ## Architecture
//!
//! ```text
//! ellsberg-core
//!   ├─ Environment       (injectable randomness provider)
//!   ├─ Urn               (two-color container, known or hidden mix)
//!   ├─ outcome           (side codes + fixed resolution table + win map)
//!   ├─ Session           (assignment → intake → choice → resolution)
//!   ├─ ExperimentConfig  (condition lists, option lists, age bounds)
//!   └─ Record / sinks    (append-only results rows)
//! ```
//!
//! All randomness flows through the [`Environment`] trait, so a seeded
//! implementation reproduces a full session exactly. The model itself is
//! single-threaded and synchronous; each session exclusively owns its urn.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod env;
pub mod outcome;
pub mod record;
pub mod session;
pub mod urn;

pub use config::{ConfigError, ExperimentConfig};
pub use env::Environment;
pub use outcome::{Outcome, OutcomeError, Side, selected_is_unknown, selected_is_unknown_codes};
pub use record::{MemorySink, Record, ResultsSink, SinkError};
pub use session::{Demographics, Session, SessionError, SessionResult};
pub use urn::{Color, Urn, UrnError};
