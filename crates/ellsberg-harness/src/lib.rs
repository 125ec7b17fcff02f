//! Deterministic test harness for the urn-choice experiment.
//!
//! This crate provides seeded and scripted implementations of the
//! `Environment` trait, plus a reference model of the experiment's
//! reasoning, enabling deterministic, reproducible testing.
//!
//! # Why Deterministic Testing?
//!
//! The production runner draws from an unseeded process-wide RNG. Tests
//! that depend on that state are non-reproducible: a statistical outlier
//! or a rare branch cannot be replayed. The harness solves this:
//!
//! - **Perfect reproducibility**: given the same seed, a full session
//!   replays draw for draw
//! - **Scripted draws**: boundary cases (a uniform float of exactly 0.49
//!   or 0.5) are injected directly instead of waited for
//! - **Oracle comparison**: the reference model restates the resolution
//!   table and draw rule in obviously-correct form and is checked against
//!   the real implementation
//!
//! # Example
//!
//! ```rust,ignore
//! use ellsberg_core::{ExperimentConfig, Session, Side};
//! use ellsberg_harness::SimEnv;
//!
//! #[test]
//! fn seeded_session_replays() {
//!     let env = SimEnv::with_seed(42);
//!     let mut session = Session::new(&ExperimentConfig::default(), &env)?;
//!     session.choose(Side::Left);
//!     let result = session.resolve(&env)?;
//!     // Same seed, same result, every run.
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod model;
pub mod scripted_env;
pub mod sim_env;

pub use model::{ModelUrn, model_selected_is_unknown, model_won};
pub use scripted_env::ScriptedEnv;
pub use sim_env::SimEnv;
