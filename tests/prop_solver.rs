//! Property-based tests for program handling, mutation, and simulation.
//!
//! Run with: cargo test --release prop_solver

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use proptest::prelude::*;

use lumen::{execute, mutate_valid, BitRng, ParseError, Program};

/// Any 28-symbol text over the full alphabet.
fn any_text() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[RL12*F^_]{28}").unwrap()
}

/// Text whose segments already honor the call rules.
fn valid_text() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[RL12*F^_]{12}[RL2*F^_]{8}[RL*F^_]{8}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2000))]

    /// Decoding then re-encoding any well-formed text is the identity.
    #[test]
    fn prop_text_round_trip(text in any_text()) {
        let program: Program = text.parse().unwrap();
        prop_assert_eq!(program.to_string().replace(' ', ""), text);
    }

    /// Validity is exactly the two segment rules, nothing more.
    #[test]
    fn prop_validity_matches_segment_rules(text in any_text()) {
        let program: Program = text.parse().unwrap();
        let symbols: Vec<char> = text.chars().collect();
        let sub1_clean = symbols[12..20].iter().all(|&s| s != '1');
        let sub2_clean = symbols[20..28].iter().all(|&s| s != '1' && s != '2');
        prop_assert_eq!(program.is_valid(), sub1_clean && sub2_clean);
    }

    /// Segment-clean text always decodes to a valid program.
    #[test]
    fn prop_segment_clean_text_is_valid(text in valid_text()) {
        let program: Program = text.parse().unwrap();
        prop_assert!(program.is_valid());
    }

    /// Repeated mutation reaches a valid program in finitely many steps
    /// from any starting point, valid or not.
    #[test]
    fn prop_mutate_valid_terminates(text in any_text()) {
        let mut rng = BitRng::new();
        let mut program: Program = text.parse().unwrap();
        mutate_valid(&mut program, &mut rng);
        prop_assert!(program.is_valid());
    }

    /// Execution halts for every program, valid or not, with fitness
    /// bounded by the map.
    #[test]
    fn prop_execution_halts_with_bounded_fitness(text in any_text()) {
        let program: Program = text.parse().unwrap();
        let fitness = execute(&program);
        prop_assert!(fitness.lights_lit() <= 2);
        prop_assert!(fitness.max_height() <= 4);
        prop_assert_eq!(
            fitness.score(),
            u32::from(fitness.lights_lit()) * 256 + u32::from(fitness.max_height())
        );
    }

    /// The simulator is a pure function of its program.
    #[test]
    fn prop_execution_is_pure(text in any_text()) {
        let program: Program = text.parse().unwrap();
        prop_assert_eq!(execute(&program), execute(&program));
    }

    /// Short text fails with a length error, never a panic.
    #[test]
    fn prop_wrong_length_is_rejected(text in "[RL12*F^_]{0,27}") {
        let length = text.chars().count();
        prop_assert_eq!(text.parse::<Program>(), Err(ParseError::BadLength(length)));
    }
}
