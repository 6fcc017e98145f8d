// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

// Warn on missing documentation for public items
#![warn(missing_docs)]
// The Syntax variant carries a full source snippet for display.
#![allow(clippy::result_large_err)]

//! # LuaLearn
//!
//! Lua tutorial lessons with a simulated code editor.
//!
//! The editor does not embed a Lua interpreter. Running a snippet produces
//! two banner lines followed by the argument text of every `print(...)`
//! line, quotes removed. Snippets can be syntax-checked against a real Lua
//! compiler, but they are never executed.
//!
//! ## Quick Start
//!
//! ```rust
//! use lualearn::{find_lesson, CodeEditor};
//!
//! let mut editor = CodeEditor::new("print(\"Hello, World!\")\nlocal x = 5", "Hello");
//! assert_eq!(editor.run().derived(), ["Hello, World!"]);
//!
//! let intro = find_lesson("intro")?;
//! let mut sample = intro.sample(1)?.editor();
//! assert_eq!(sample.run().derived()[0], "Hello, World!");
//! # Ok::<(), lualearn::LualearnError>(())
//! ```

/// Print-line pseudo-evaluation.
pub mod evaluator;
/// Code editor state (snippet, output panel, copy acknowledgement).
pub mod editor;
/// Bundled lessons and their snippets.
pub mod lessons;
/// Lua syntax checking.
pub mod syntax;
/// Error types and reporting.
pub mod error;

pub use editor::CodeEditor;
pub use error::*;
pub use evaluator::{evaluate, OutputLine, OutputSequence};
pub use lessons::{catalog, find_lesson, Lesson, Sample};
pub use syntax::check_syntax;
