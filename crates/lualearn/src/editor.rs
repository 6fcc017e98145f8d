// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Code editor state.
//!
//! A [`CodeEditor`] owns one editable snippet and the output of its most
//! recent run. Every run replaces the previous output entirely.

use crate::evaluator::{evaluate, OutputSequence};
use std::time::{Duration, Instant};

/// Height hint used when the caller does not pass one.
pub const DEFAULT_HEIGHT: &str = "300px";

/// How long the "copied" acknowledgement stays up after a copy.
pub const COPY_ACKNOWLEDGEMENT: Duration = Duration::from_secs(2);

/// Shown in the output panel until the first run.
pub const OUTPUT_PLACEHOLDER: &str = "Click \"Run Code\" to see output";

/// An editable Lua snippet with a simulated output panel.
#[derive(Debug, Clone)]
pub struct CodeEditor {
    title: String,
    height: String,
    code: String,
    output: OutputSequence,
    copied_at: Option<Instant>,
}

impl CodeEditor {
    /// Creates an editor preloaded with `initial_code`.
    pub fn new(initial_code: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            height: DEFAULT_HEIGHT.to_string(),
            code: initial_code.into(),
            output: OutputSequence::new(),
            copied_at: None,
        }
    }

    /// Sets the rendering height hint (e.g. `"420px"`).
    pub fn with_height(mut self, height: impl Into<String>) -> Self {
        self.height = height.into();
        self
    }

    /// Display title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Rendering height hint, passed through untouched.
    pub fn height(&self) -> &str {
        &self.height
    }

    /// Current snippet text.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Replaces the snippet text.
    ///
    /// The output of the previous run stays on screen until the next run.
    pub fn set_code(&mut self, code: impl Into<String>) {
        self.code = code.into();
    }

    /// Runs the current snippet and replaces the output panel.
    pub fn run(&mut self) -> &OutputSequence {
        tracing::debug!(title = %self.title, "Running snippet");
        self.output = evaluate(&self.code);
        &self.output
    }

    /// Output of the most recent run (empty before the first one).
    pub fn output(&self) -> &OutputSequence {
        &self.output
    }

    /// Lines the output panel shows: the run output, or the placeholder.
    pub fn panel_lines(&self) -> Vec<&str> {
        if self.output.is_empty() {
            vec![OUTPUT_PLACEHOLDER]
        } else {
            self.output.iter().map(String::as_str).collect()
        }
    }

    /// Returns the snippet text verbatim for the clipboard and raises the
    /// "copied" acknowledgement.
    pub fn copy_code(&mut self) -> String {
        self.copy_code_at(Instant::now())
    }

    /// [`CodeEditor::copy_code`] with an explicit clock.
    pub fn copy_code_at(&mut self, now: Instant) -> String {
        self.copied_at = Some(now);
        self.code.clone()
    }

    /// Whether the "copied" acknowledgement is still showing.
    pub fn is_copied(&self) -> bool {
        self.is_copied_at(Instant::now())
    }

    /// [`CodeEditor::is_copied`] with an explicit clock.
    pub fn is_copied_at(&self, now: Instant) -> bool {
        self.copied_at
            .is_some_and(|at| now.saturating_duration_since(at) < COPY_ACKNOWLEDGEMENT)
    }

    /// Label of the copy button.
    pub fn copy_label(&self) -> &'static str {
        if self.is_copied() {
            "Copied!"
        } else {
            "Copy"
        }
    }
}
