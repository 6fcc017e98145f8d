// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Pseudo-evaluation of Lua snippets.
//!
//! Nothing here runs Lua. [`evaluate`] fabricates console output by picking
//! out lines that start with `print` and echoing their argument text with
//! quote characters removed:
//!
//! ```rust
//! use lualearn::evaluate;
//!
//! let output = evaluate("local name = \"Ada\"\nprint(\"Hello, \" .. name)");
//! assert_eq!(output.lines()[2], "Hello,  .. name");
//! ```
//!
//! The argument is captured from the first `print(` to the *last* `)` on the
//! line. Parentheses are not balanced, so a trailing comment containing a
//! `)` widens the capture.

use crate::error::{LualearnError, Result};
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::any::Any;
use std::fmt;
use std::panic;

/// First line of every successful run.
pub const SUCCESS_BANNER: &str = "-- Code executed successfully!";

/// Second line of every successful run.
pub const INTEGRATION_BANNER: &str =
    "-- Output would appear here when Lua interpreter is integrated";

/// Prefix of the single line produced when the evaluation guard trips.
pub const FAULT_PREFIX: &str = "Error: ";

// `.` here must stop at every line terminator, not only `\n`.
const PRINT_CALL_PATTERN: &str = r"print\(([^\r\n\x{2028}\x{2029}]*)\)";

lazy_static! {
    static ref PRINT_CALL: std::result::Result<Regex, regex::Error> =
        Regex::new(PRINT_CALL_PATTERN);
}

/// One line of simulated console output.
pub type OutputLine = String;

/// The full output of one run.
///
/// Each run produces a fresh sequence; nothing is ever appended to an
/// existing one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OutputSequence(Vec<OutputLine>);

impl OutputSequence {
    /// An empty sequence, as shown before anything has run.
    pub fn new() -> Self {
        Self::default()
    }

    /// All lines in display order.
    pub fn lines(&self) -> &[OutputLine] {
        &self.0
    }

    /// Number of lines, banners included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True before the first run.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the lines.
    pub fn iter(&self) -> std::slice::Iter<'_, OutputLine> {
        self.0.iter()
    }

    /// Lines derived from `print` calls, without the banners.
    pub fn derived(&self) -> &[OutputLine] {
        if self.has_banners() {
            &self.0[2..]
        } else {
            &[]
        }
    }

    /// True when the run tripped the evaluation guard.
    pub fn is_fault(&self) -> bool {
        self.0.len() == 1 && self.0[0].starts_with(FAULT_PREFIX)
    }

    fn has_banners(&self) -> bool {
        self.0.len() >= 2 && self.0[0] == SUCCESS_BANNER && self.0[1] == INTEGRATION_BANNER
    }

    /// Consumes the sequence, returning its lines.
    pub fn into_lines(self) -> Vec<OutputLine> {
        self.0
    }
}

impl<'a> IntoIterator for &'a OutputSequence {
    type Item = &'a OutputLine;
    type IntoIter = std::slice::Iter<'a, OutputLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for OutputSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("\n"))
    }
}

/// Fabricates the console output of `source` without running it.
///
/// The result starts with [`SUCCESS_BANNER`] and [`INTEGRATION_BANNER`],
/// followed by one line per source line whose trimmed text starts with
/// `print`:
///
/// - if the line contains `print(...)`, the text between the first `(` and
///   the last `)` with every `"` and `'` removed;
/// - otherwise the line itself, untouched.
///
/// This function never fails. If matching faults, the whole result is the
/// single line `Error: <description>`.
pub fn evaluate(source: &str) -> OutputSequence {
    guarded(source, derive_lines)
}

/// Runs `derive` under the evaluation guard: its lines get the banners, while
/// an error or a panic becomes the single `Error: ` line.
fn guarded<F>(source: &str, derive: F) -> OutputSequence
where
    F: FnOnce(&str) -> Result<Vec<OutputLine>> + panic::UnwindSafe,
{
    let outcome = panic::catch_unwind(move || derive(source)).unwrap_or_else(|payload| {
        Err(LualearnError::EvaluationFault(panic_message(payload.as_ref())))
    });

    match outcome {
        Ok(derived) => {
            tracing::debug!(
                source_lines = source.split('\n').count(),
                print_lines = derived.len(),
                "Evaluated snippet"
            );
            let mut lines = Vec::with_capacity(derived.len() + 2);
            lines.push(SUCCESS_BANNER.to_string());
            lines.push(INTEGRATION_BANNER.to_string());
            lines.extend(derived);
            OutputSequence(lines)
        }
        Err(err) => {
            tracing::warn!(error = %err, "Evaluation guard tripped");
            OutputSequence(vec![format!("{}{}", FAULT_PREFIX, err)])
        }
    }
}

fn derive_lines(source: &str) -> Result<Vec<OutputLine>> {
    let print_call = PRINT_CALL
        .as_ref()
        .map_err(|err| LualearnError::from(err.clone()))?;

    Ok(source
        .split('\n')
        .filter(|line| is_print_line(line))
        .map(|line| derive_line(print_call, line))
        .collect())
}

fn is_print_line(line: &str) -> bool {
    line.trim_start_matches(is_blank).starts_with("print")
}

fn derive_line(print_call: &Regex, line: &str) -> OutputLine {
    match print_call.captures(line).and_then(|caps| caps.get(1)) {
        Some(args) => args.as_str().replace(['"', '\''], ""),
        None => line.to_string(),
    }
}

// Whitespace as browsers trim it: BOM counts, NEL does not.
fn is_blank(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown evaluation failure".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn derived(source: &str) -> Vec<String> {
        evaluate(source).derived().to_vec()
    }

    #[test]
    fn test_hello_world_scenario() {
        let output = evaluate("print(\"Hello, World!\")\nprint(\"Welcome!\")\nlocal x = 5");
        assert_eq!(
            output.lines(),
            [
                "-- Code executed successfully!",
                "-- Output would appear here when Lua interpreter is integrated",
                "Hello, World!",
                "Welcome!",
            ]
        );
    }

    #[test]
    fn test_empty_source_yields_only_banners() {
        let output = evaluate("");
        assert_eq!(output.lines(), [SUCCESS_BANNER, INTEGRATION_BANNER]);
        assert!(output.derived().is_empty());
        assert!(!output.is_fault());
    }

    #[test]
    fn test_strips_both_quote_kinds() {
        assert_eq!(derived("print(\"a'b\")"), ["ab"]);
    }

    #[test]
    fn test_unterminated_call_falls_back_to_line() {
        assert_eq!(derived("print(\"unterminated"), ["print(\"unterminated"]);
    }

    #[test]
    fn test_capture_runs_to_last_paren() {
        assert_eq!(derived("print(\"a\") -- print(\"b\")"), ["a) -- print(b"]);
    }

    #[test]
    fn test_concatenation_is_not_evaluated() {
        assert_eq!(derived("print(\"Hello, \" .. name)"), ["Hello,  .. name"]);
    }

    #[test]
    fn test_nested_call_and_trailing_comment() {
        assert_eq!(derived("print(type(str))      -- string"), ["type(str)"]);
    }

    #[test]
    fn test_indented_print_is_selected() {
        assert_eq!(derived("    print(innerVar)"), ["innerVar"]);
    }

    #[test]
    fn test_fallback_keeps_indentation() {
        assert_eq!(derived("  printer = 1"), ["  printer = 1"]);
        assert_eq!(derived("printf(\"x\")"), ["printf(\"x\")"]);
        assert_eq!(derived("print \"bare\""), ["print \"bare\""]);
    }

    #[test]
    fn test_empty_argument_list() {
        assert_eq!(derived("print()"), [""]);
    }

    #[test]
    fn test_non_print_lines_are_dropped() {
        let source = "-- print(\"commented\")\nlocal p = print\ngreet(\"x\")";
        assert!(derived(source).is_empty());
    }

    #[test]
    fn test_carriage_returns_do_not_crash() {
        assert_eq!(derived("print(\"a\")\r\nprint(\"b\")\r"), ["a", "b"]);
        // The capture cannot span a carriage return.
        assert_eq!(derived("print(\"a\r\")"), ["print(\"a\r\")"]);
    }

    #[test]
    fn test_order_is_preserved() {
        let source = "print(3)\nx = 1\nprint(1)\n\tprint(2)";
        assert_eq!(derived(source), ["3", "1", "2"]);
    }

    #[test]
    fn test_display_joins_lines() {
        let output = evaluate("print('hi')");
        assert_eq!(
            output.to_string(),
            format!("{}\n{}\nhi", SUCCESS_BANNER, INTEGRATION_BANNER)
        );
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let output = evaluate("print(1)");
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(
            json,
            serde_json::json!([SUCCESS_BANNER, INTEGRATION_BANNER, "1"])
        );
    }

    #[test]
    fn test_fault_detection() {
        let fault = OutputSequence(vec!["Error: boom".to_string()]);
        assert!(fault.is_fault());
        assert!(fault.derived().is_empty());
        assert!(!OutputSequence::new().is_fault());
    }

    #[test]
    fn test_guard_catches_panic() {
        let output = guarded("print(1)", |_| panic!("matcher blew up"));
        assert_eq!(output.lines(), ["Error: matcher blew up"]);
        assert!(output.is_fault());
        assert!(output.derived().is_empty());

        let line = 7;
        let output = guarded("", |_| panic!("split failed at line {}", line));
        assert_eq!(output.lines(), ["Error: split failed at line 7"]);
    }

    #[test]
    fn test_guard_reports_derive_error() {
        let output = guarded("print(1)", |_| {
            Err(LualearnError::EvaluationFault("bad pattern".to_string()))
        });
        assert_eq!(output.lines(), ["Error: bad pattern"]);
        assert!(output.is_fault());
    }

    #[test]
    fn test_guard_adds_banners_to_derived_lines() {
        let output = guarded("ignored", |source| Ok(vec![source.to_uppercase()]));
        assert_eq!(output.lines(), [SUCCESS_BANNER, INTEGRATION_BANNER, "IGNORED"]);
    }

    #[test]
    fn test_panic_message_payloads() {
        assert_eq!(panic_message(&"static"), "static");
        assert_eq!(panic_message(&String::from("owned")), "owned");
        assert_eq!(panic_message(&42_u8), "unknown evaluation failure");
    }

    fn snippet_line() -> impl Strategy<Value = String> {
        prop_oneof![
            "[ \t]{0,3}print\\([a-z\"' .,]{0,10}\\)?[ a-z()-]{0,6}",
            "[ \t]{0,2}printf?[a-z(\"')]{0,8}",
            "[a-z =0-9\"'()-]{0,16}",
        ]
    }

    proptest! {
        #[test]
        fn prop_banners_then_one_line_per_print(lines in prop::collection::vec(snippet_line(), 0..12)) {
            let source = lines.join("\n");
            let output = evaluate(&source);
            let expected = lines
                .iter()
                .filter(|line| line.trim_start().starts_with("print"))
                .count();

            prop_assert_eq!(&output.lines()[0], SUCCESS_BANNER);
            prop_assert_eq!(&output.lines()[1], INTEGRATION_BANNER);
            prop_assert_eq!(output.len() - 2, expected);
        }

        #[test]
        fn prop_evaluate_is_deterministic(source in "[ \tprint()\"'a-z\n-]{0,80}") {
            prop_assert_eq!(evaluate(&source), evaluate(&source));
        }
    }
}
