//! Fuzz target for `Urn` construction and mutation
//!
//! # Strategy
//!
//! - Arbitrary sizes, including zero and degenerate one-ball urns
//! - Forced compositions at and beyond the size bound
//! - Interleaved resizes, mode flips, and draws
//!
//! # Invariants
//!
//! - `red_count <= size` after every accepted operation
//! - `set_size` rejects zero and anything below the fixed composition
//! - Mode flips never resample the composition
//! - Draws are total over `{Red, Blue}` and all-red / all-blue urns are
//!   exact
//! - NEVER panic

#![no_main]

use arbitrary::Arbitrary;
use ellsberg_core::{Color, Urn};
use ellsberg_harness::SimEnv;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, Arbitrary)]
enum UrnOp {
    SetSize(u16),
    SetUnknown(bool),
    Draw,
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    seed: u64,
    size: u16,
    red_count: u16,
    unknown: bool,
    ops: Vec<UrnOp>,
}

fuzz_target!(|input: FuzzInput| {
    let env = SimEnv::with_seed(input.seed);

    let constructed = Urn::with_composition(
        u32::from(input.size),
        u32::from(input.red_count),
        input.unknown,
    );

    if input.size == 0 || input.red_count > input.size {
        assert!(constructed.is_err(), "invalid composition must be rejected");
        return;
    }

    let Ok(mut urn) = constructed else {
        return;
    };
    let fixed_red = urn.red_count();

    for op in input.ops {
        match op {
            UrnOp::SetSize(size) => {
                let result = urn.set_size(u32::from(size));
                if size == 0 || u32::from(size) < fixed_red {
                    assert!(result.is_err());
                } else {
                    assert!(result.is_ok());
                    assert_eq!(urn.size(), u32::from(size));
                }
            },

            UrnOp::SetUnknown(unknown) => {
                urn.set_unknown(unknown);
                assert_eq!(urn.is_unknown(), unknown);
                assert_eq!(urn.red_count(), fixed_red, "mode flip must not resample");
            },

            UrnOp::Draw => {
                let color = urn.draw(&env);
                if urn.is_unknown() {
                    if urn.red_count() == urn.size() {
                        assert_eq!(color, Color::Red);
                    } else if urn.red_count() == 0 {
                        assert_eq!(color, Color::Blue);
                    }
                }
            },
        }

        assert!(urn.red_count() <= urn.size());
    }
});
