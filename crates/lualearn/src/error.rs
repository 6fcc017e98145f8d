// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Error types for LuaLearn.
//!
//! This module defines [`LualearnError`], the main error enum, and
//! [`SourceContext`] for pointing at the offending line of a Lua snippet.
//!
//! # Error Categories
//!
//! - **Evaluation faults**: the pseudo-evaluator tripped its guard
//! - **Catalog lookups**: unknown lesson slug or sample number
//! - **Syntax errors**: a snippet failed to compile as Lua
//! - **Lua / IO errors**: passed through from `mlua` and `std::io`

use std::fmt;
use thiserror::Error;

/// Source context for enhanced error messages.
///
/// Captures a snippet of source code around an error location,
/// enabling rich error messages with line numbers and a caret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceContext {
    /// All lines from the source.
    pub lines: Vec<String>,
    /// The line number where the error occurred (1-indexed).
    pub error_line: usize,
    /// The column number where the error occurred (1-indexed, 0 if unknown).
    pub error_column: usize,
    /// First line number of the snippet (1-indexed).
    pub snippet_start: usize,
    /// Last line number of the snippet (1-indexed).
    pub snippet_end: usize,
}

impl SourceContext {
    /// Creates a source context from source code and error location.
    ///
    /// Captures 2 lines before and after the error line.
    pub fn from_source(source: &str, line: usize, column: usize) -> Self {
        let lines: Vec<String> = source.lines().map(str::to_string).collect();
        let snippet_start = line.saturating_sub(2).max(1);
        let snippet_end = (line + 2).min(lines.len());

        Self {
            lines,
            error_line: line,
            error_column: column,
            snippet_start,
            snippet_end,
        }
    }

    /// Formats the snippet with line numbers and, when the column is known,
    /// a caret on the error line.
    ///
    /// ```text
    ///    2 | local x = 1
    ///    3 | if x then
    ///      | ^
    /// ```
    pub fn format_snippet(&self) -> String {
        let mut result = String::new();

        for line_num in self.snippet_start..=self.snippet_end {
            let Some(line) = self.lines.get(line_num - 1) else {
                break;
            };

            result.push_str(&format!("{:4} | {}\n", line_num, line));

            if line_num == self.error_line && self.error_column > 0 {
                result.push_str(&format!(
                    "     | {}^\n",
                    " ".repeat(self.error_column.saturating_sub(1))
                ));
            }
        }

        result
    }
}

impl fmt::Display for SourceContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_snippet())
    }
}

/// The main error type for LuaLearn operations.
#[derive(Error, Debug)]
pub enum LualearnError {
    /// The pseudo-evaluator could not split or match its input.
    ///
    /// Never escapes [`crate::evaluate`]; it is folded into the output.
    #[error("{0}")]
    EvaluationFault(String),

    /// No lesson is registered under the given slug.
    #[error("Lesson not found: {0}")]
    LessonNotFound(String),

    /// The lesson exists but has no sample with that number.
    #[error("Lesson {lesson} has no sample {index} (it has {available})")]
    SampleNotFound {
        /// Lesson slug.
        lesson: String,
        /// Requested 1-based sample number.
        index: usize,
        /// Number of samples the lesson has.
        available: usize,
    },

    /// A snippet failed to compile as Lua.
    #[error("Syntax error in {chunk}:{line}: {message}\n{context}")]
    Syntax {
        /// Chunk name shown to the user (file name or sample title).
        chunk: String,
        /// Line reported by the Lua compiler (1-indexed).
        line: usize,
        /// Compiler message without the chunk prefix.
        message: String,
        /// Snippet around the failing line.
        context: SourceContext,
    },

    /// Lua state error outside of compilation.
    #[error("Lua error: {0}")]
    Lua(#[from] mlua::Error),

    /// File I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<regex::Error> for LualearnError {
    fn from(err: regex::Error) -> Self {
        LualearnError::EvaluationFault(err.to_string())
    }
}

/// Convenience type alias for Results with [`LualearnError`].
pub type Result<T> = std::result::Result<T, LualearnError>;
