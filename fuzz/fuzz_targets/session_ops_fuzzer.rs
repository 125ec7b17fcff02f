//! Fuzz target for the `Session` state machine
//!
//! Prevent out-of-order flows from producing silent garbage records
//!
//! # Strategy
//!
//! - Operation sequences: arbitrary interleavings of consent,
//!   demographics, choice, resolution, and record extraction
//! - Invalid side codes: clicks encoded as arbitrary bytes
//! - Raw code pairs: the resolution table probed outside the binary
//!   domain
//!
//! # Invariants
//!
//! - Resolving before a choice MUST fail with `NoChoice`, never draw
//! - A record only exists after consent + demographics + choice +
//!   resolution
//! - Win iff the drawn ball is blue
//! - Out-of-domain code pairs MUST be rejected, in-domain pairs resolve
//!   to code equality
//! - The composition bound `red_count <= size` survives any sequence
//! - NEVER panic on any operation order

#![no_main]

use arbitrary::Arbitrary;
use ellsberg_core::{
    Color, Demographics, ExperimentConfig, Session, SessionError, Side,
    selected_is_unknown_codes,
};
use ellsberg_harness::SimEnv;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, Arbitrary)]
enum SessionOp {
    Consent(bool),
    Demographics { age: u8, gender_index: u8, education_index: u8 },
    Choose { code: u8 },
    Resolve,
    Record,
    ResolveCodes { selected: u8, unknown: u8 },
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    /// Seed for the deterministic environment.
    seed: u64,
    /// Operation sequence to apply.
    ops: Vec<SessionOp>,
}

fuzz_target!(|input: FuzzInput| {
    let env = SimEnv::with_seed(input.seed);
    let config = ExperimentConfig::default();

    let Ok(mut session) = Session::new(&config, &env) else {
        return;
    };

    let mut consented = false;
    let mut has_demographics = false;
    let mut chose = false;
    let mut resolved = false;

    for op in input.ops {
        match op {
            SessionOp::Consent(consent) => {
                session.record_consent(consent);
                consented = consent;
            },

            SessionOp::Demographics { age, gender_index, education_index } => {
                let gender = &config.genders[gender_index as usize % config.genders.len()];
                let education =
                    &config.educations[education_index as usize % config.educations.len()];

                if let Ok(demographics) =
                    Demographics::new(&config, u32::from(age), gender, education)
                {
                    session.record_demographics(demographics);
                    has_demographics = true;
                }
            },

            SessionOp::Choose { code } => {
                if let Ok(side) = Side::from_code(code) {
                    session.choose(side);
                    chose = true;
                }
            },

            SessionOp::Resolve => match session.resolve(&env) {
                Ok(result) => {
                    resolved = true;
                    assert_eq!(result.won(), result.drawn == Color::Blue);
                },
                Err(error) => {
                    assert!(!chose, "resolve may only fail before a choice");
                    assert!(matches!(error, SessionError::NoChoice));
                },
            },

            SessionOp::Record => {
                let record = session.record();
                if consented && has_demographics && chose && resolved {
                    assert!(record.is_ok(), "completed flow must produce a record");
                } else {
                    assert!(record.is_err(), "incomplete flow must not produce a record");
                }
            },

            SessionOp::ResolveCodes { selected, unknown } => {
                let result = selected_is_unknown_codes(selected, unknown);
                if selected <= 1 && unknown <= 1 {
                    assert_eq!(result, Ok(selected == unknown));
                } else {
                    assert!(result.is_err(), "out-of-domain pair must be rejected");
                }
            },
        }

        assert!(session.urn().red_count() <= session.urn().size());
    }
});
