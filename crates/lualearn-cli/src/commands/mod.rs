// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! CLI command implementations.
//!
//! - `run`: Run a snippet file through the simulated editor
//! - `lessons`: List the bundled lessons
//! - `show`: Print a lesson's samples, optionally with their output
//! - `check`: Syntax-check snippets with a real Lua compiler
//! - `init`: Write a practice workspace with every sample
//! - `watch`: Re-run a snippet every time it is saved

/// Syntax check command.
pub mod check;
/// Practice workspace initialization command.
pub mod init;
/// Lesson listing command.
pub mod lessons;
/// Snippet run command.
pub mod run;
/// Lesson display command.
pub mod show;
/// File watch command.
pub mod watch;

/// Writes rendered text to stdout, ending it with exactly one newline.
pub(crate) fn emit(text: &str) {
    if text.ends_with('\n') {
        print!("{}", text);
    } else {
        println!("{}", text);
    }
}
