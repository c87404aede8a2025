//! Error extraction from Fluent Bit dry-run output. No I/O, no async.
//!
//! Fluent Bit prints human-oriented diagnostics whose shape changed between
//! releases. Three shapes are recognised, most specific first:
//!
//! 1. `Error <msg>\nError: Configuration file contains errors. Aborting`
//! 2. `Error: <msg>. Aborting`
//! 3. `[<time>] [error] File <file>\n[<time>] [error] Error in line 4: <msg>`
//!    (often wrapped in ANSI color codes, with a trailing `Error:` line)
//!
//! Text matching none of the specific shapes falls back to the first
//! `Error <rest of line>` occurrence.

use std::sync::LazyLock;

use regex::Regex;

/// The strip-ansi grammar: `ESC` or 8-bit CSI, an optional run of
/// `[]()#;?`, then either an alphanumeric/`;` run terminated by BEL or
/// numeric parameters terminated by a final byte. Digit classes are ASCII.
pub static ANSI_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Safety: constant pattern.
    #[allow(clippy::expect_used)]
    Regex::new(
        r"[\x1B\x{9B}][\[\]()#;?]*(?:(?:(?:[a-zA-Z0-9]*(?:;[a-zA-Z0-9]*)*)?\x07)|(?:(?:[0-9]{1,4}(?:;[0-9]{0,4})*)?[0-9A-PRZcf-ntqry=><~]))",
    )
    .expect("valid regex")
});

/// How a matched pattern yields the extracted description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capture {
    /// Use the numbered capture group.
    Group(usize),
    /// Use the whole match.
    Whole,
}

/// One entry of the extraction cascade.
pub struct ErrorPattern {
    /// Short name used in trace events and tests.
    pub name: &'static str,
    pub regex: Regex,
    pub capture: Capture,
}

impl ErrorPattern {
    fn new(name: &'static str, pattern: &str, capture: Capture) -> Self {
        // Safety: only called with the constant patterns below.
        #[allow(clippy::expect_used)]
        let regex = Regex::new(pattern).expect("valid regex");
        Self {
            name,
            regex,
            capture,
        }
    }

    /// Apply this pattern to `text`, returning the captured description.
    #[must_use]
    pub fn apply<'t>(&self, text: &'t str) -> Option<&'t str> {
        match self.capture {
            Capture::Whole => self.regex.find(text).map(|m| m.as_str()),
            Capture::Group(i) => self
                .regex
                .captures(text)
                .and_then(|caps| caps.get(i))
                .map(|m| m.as_str()),
        }
    }
}

/// Ordered cascade, first match wins.
///
/// `[\t\n\f\r ]` is the ASCII whitespace class; `.` never crosses a newline.
pub static ERROR_PATTERNS: LazyLock<[ErrorPattern; 3]> = LazyLock::new(|| {
    [
        // Description line, then an `Error:` label line. The byte after
        // `Error` must not be `]` so `[Error]` log-level tokens are skipped.
        ErrorPattern::new(
            "two-line",
            r"(?P<description>Error[^\]].+)\n(?P<label>Error:.+)",
            Capture::Group(1),
        ),
        // `Error: ` label followed by a description ending in a period.
        ErrorPattern::new(
            "labelled",
            r".*(?P<label>Error:[\t\n\f\r ])(?P<description>.+\.)",
            Capture::Group(2),
        ),
        ErrorPattern::new("fallback", r"Error[\t\n\f\r ].+", Capture::Whole),
    ]
});

/// Remove every ANSI escape sequence from `text`.
///
/// Returns a new string; text outside escape sequences is kept byte-identical.
#[must_use]
pub fn strip_ansi(text: &str) -> String {
    ANSI_RE.replace_all(text, "").into_owned()
}

/// Extract a one-line error description from Fluent Bit dry-run output.
///
/// Total over any input: returns an empty string when no pattern matches
/// (for example when `Error` is only ever followed by `:` with no space, or
/// by end of input).
#[must_use]
pub fn extract_error(output: &str) -> String {
    let stripped = strip_ansi(output);
    ERROR_PATTERNS
        .iter()
        .find_map(|pattern| pattern.apply(&stripped))
        .map(str::to_owned)
        .unwrap_or_default()
}

/// Name of the first pattern that matches `output`, if any.
#[must_use]
pub fn matching_pattern(output: &str) -> Option<&'static str> {
    let stripped = strip_ansi(output);
    ERROR_PATTERNS
        .iter()
        .find(|pattern| pattern.apply(&stripped).is_some())
        .map(|pattern| pattern.name)
}

// ── Unit tests ───────────────────────────────────────────────────────────────
