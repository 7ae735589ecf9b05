//! Property-Based Tests — Domain Layer Invariants
//!
//! Uses `proptest` to verify that classification and body handling hold
//! their invariants across random inputs.

use proptest::prelude::*;

use atlassian_status_exporter::domain::{AppState, classify, is_blank, parse_state};

const KNOWN: [&str; 5] = ["RUNNING", "ERROR", "STARTING", "STOPPING", "FIRST_RUN"];

// ── Classification Properties ───────────────────────────────

proptest! {
    /// Classification is a pure function of its input.
    #[test]
    fn classify_is_deterministic(state in ".*") {
        prop_assert_eq!(classify(&state), classify(&state));
    }

    /// Every code lies in 0..=6 and agrees with the variant.
    #[test]
    fn classify_is_total(state in ".*") {
        let (code, desc) = classify(&state);
        prop_assert!(code <= 6);
        let variant = AppState::from_state(&state);
        prop_assert_eq!(code, variant.code());
        prop_assert_eq!(desc, variant.description());
    }

    /// Anything outside the known set (and non-empty) is Unknown with code 6.
    #[test]
    fn unrecognized_strings_are_unknown(state in "[a-zA-Z_ ]{1,24}") {
        prop_assume!(!KNOWN.contains(&state.as_str()));
        prop_assert_eq!(classify(&state).0, 6);
        let variant = AppState::from_state(&state);
        prop_assert_eq!(variant.label(), state.as_str());
    }
}

// ── Body Handling Properties ────────────────────────────────

proptest! {
    /// Whitespace-only bodies are blank, whatever their mix of characters.
    #[test]
    fn whitespace_bodies_are_blank(body in "[ \t\r\n]{0,32}") {
        prop_assert!(is_blank(body.as_bytes()));
    }

    /// A well-formed body always decodes to its embedded state string.
    #[test]
    fn wellformed_body_decodes_state(state in "[A-Z_]{0,16}") {
        let body = serde_json::json!({ "state": &state }).to_string();
        prop_assert!(!is_blank(body.as_bytes()));
        prop_assert_eq!(parse_state(body.as_bytes()).unwrap(), state);
    }
}
