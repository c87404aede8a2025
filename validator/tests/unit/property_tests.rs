//! Property-based tests for ANSI stripping and error extraction.
//!
//! Uses `proptest` to verify invariants across many random inputs.

use proptest::prelude::*;

use fluentbit_validator::domain::extract::{extract_error, strip_ansi};

/// Color and cursor sequences Fluent Bit (and terminals in general) emit.
const ESCAPES: &[&str] = &[
    "\x1b[0m",
    "\x1b[1m",
    "\x1b[31m",
    "\x1b[1;31m",
    "\x1b[38;5;208m",
    "\x1b[2K",
    "\x1b[?25l",
    "\u{9b}33m",
    "\x1b]0;fluentbit\x07",
];

fn escape() -> impl Strategy<Value = &'static str> {
    prop::sample::select(ESCAPES)
}

// ============================================================================
// strip_ansi() property tests
// ============================================================================

proptest! {
    /// Text without escape introducers is returned byte-identical.
    #[test]
    fn prop_plain_text_is_unchanged(text in "[^\u{1b}\u{9b}]{0,200}") {
        prop_assert_eq!(strip_ansi(&text), text);
    }

    /// Interleaving escapes into plain text and stripping recovers the text.
    #[test]
    fn prop_stripping_recovers_plain_text(
        parts in prop::collection::vec(("[a-zA-Z0-9 .:'\\[\\]/_-]{0,20}", escape()), 0..12)
    ) {
        let mut colored = String::new();
        let mut plain = String::new();
        for (text, esc) in &parts {
            colored.push_str(esc);
            colored.push_str(text);
            plain.push_str(text);
        }
        prop_assert_eq!(strip_ansi(&colored), plain);
    }

}

// ============================================================================
// extract_error() property tests
// ============================================================================

proptest! {
    /// Extraction never panics and always returns a piece of the stripped input.
    #[test]
    fn prop_extraction_is_substring_of_stripped_input(text in "(Error|Error:| |\n|[a-z.]|\u{1b}\\[31m){0,60}") {
        let extracted = extract_error(&text);
        prop_assert!(strip_ansi(&text).contains(&extracted));
    }

    /// A fallback result (`Error <rest of line>`) extracts to itself.
    #[test]
    fn prop_fallback_result_is_fixed_point(rest in "[a-z][a-z ]{0,40}") {
        let line = format!("noise Error {rest}");
        let first = extract_error(&line);
        prop_assert_eq!(&first, &format!("Error {rest}"));
        prop_assert_eq!(extract_error(&first), first);
    }

    /// A labelled description without the marker has nothing left to extract.
    #[test]
    fn prop_labelled_result_has_no_further_match(desc in "[a-z][a-z ]{0,40}") {
        let first = extract_error(&format!("prefix Error: {desc}."));
        prop_assert_eq!(&first, &format!("{desc}."));
        prop_assert_eq!(extract_error(&first), "");
    }

    /// Colors around a two-line diagnostic do not change the result.
    #[test]
    fn prop_colors_do_not_change_two_line_result(msg in "[a-z][a-z ]{0,40}", esc in escape()) {
        let plain = format!("Error {msg}\nError: Configuration file contains errors. Aborting");
        let colored = format!("{esc}Error{esc} {msg}\n{esc}Error: Configuration file contains errors. Aborting{esc}");
        prop_assert_eq!(extract_error(&colored), extract_error(&plain));
        prop_assert_eq!(extract_error(&plain), format!("Error {msg}"));
    }
}
