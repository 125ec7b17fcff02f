//! Model-based property tests.
//!
//! Proptest generates draw inputs and side codes; each is applied to both
//! the reference model and the real implementation, and the results are
//! compared.
//!
//! # Architecture
//!
//! ```text
//! proptest generates: draw values / side codes
//!                          │
//!           ┌──────────────┼──────────────┐
//!           ▼              ▼              ▼
//!      ModelUrn       real Urn        Compare
//!      (reference)    (ScriptedEnv)   Results
//! ```

use ellsberg_core::{Color, Outcome, Urn, selected_is_unknown_codes};
use ellsberg_harness::{ModelUrn, ScriptedEnv, model_selected_is_unknown, model_won};
use proptest::prelude::*;

proptest! {
    #[test]
    fn known_mode_draw_matches_model(
        value in 0.0f64..1.0,
        (size, red_count) in (1u32..=300).prop_flat_map(|size| (Just(size), 0..=size)),
    ) {
        let model = ModelUrn { size, red_count, unknown: false };
        let real = Urn::with_composition(size, red_count, false).expect("valid composition");

        let drawn = real.draw(&ScriptedEnv::with_floats([value]));
        prop_assert_eq!(drawn, model.color_for_float(value));
    }

    #[test]
    fn unknown_mode_draw_matches_model(
        (size, red_count, index) in (1u32..=300)
            .prop_flat_map(|size| (Just(size), 0..=size, 0..u64::from(size))),
    ) {
        let model = ModelUrn { size, red_count, unknown: true };
        let real = Urn::with_composition(size, red_count, true).expect("valid composition");

        let env = ScriptedEnv::new();
        env.push_int(index);

        prop_assert_eq!(real.draw(&env), model.color_for_index(index));
    }

    #[test]
    fn code_resolution_matches_model(selected in any::<u8>(), unknown in any::<u8>()) {
        let real = selected_is_unknown_codes(selected, unknown);
        let model = model_selected_is_unknown(selected, unknown);

        match model {
            Some(expected) => prop_assert_eq!(real, Ok(expected)),
            None => prop_assert!(real.is_err()),
        }
    }

    #[test]
    fn win_mapping_matches_model(red in any::<bool>()) {
        let color = if red { Color::Red } else { Color::Blue };

        prop_assert_eq!(Outcome::from_color(color).won(), model_won(color));
    }
}
