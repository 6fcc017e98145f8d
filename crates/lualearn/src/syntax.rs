// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Lua syntax checking.
//!
//! Snippets are compiled into a function with a throwaway Lua state and then
//! dropped; nothing is ever called.

use crate::error::{LualearnError, Result, SourceContext};
use lazy_static::lazy_static;
use mlua::Lua;
use regex::Regex;

lazy_static! {
    static ref LOCATION: std::result::Result<Regex, regex::Error> =
        Regex::new(r"(?s)^.*?:(\d+): (.*)$");
    static ref NEAR_TOKEN: std::result::Result<Regex, regex::Error> =
        Regex::new(r"near '(.+)'$");
}

/// Compiles `source` as a Lua chunk named `chunk` without running it.
///
/// # Errors
///
/// Returns [`LualearnError::Syntax`] with the compiler's line number and a
/// snippet of the surrounding source when the chunk does not compile.
pub fn check_syntax(chunk: &str, source: &str) -> Result<()> {
    let lua = Lua::new();
    // "=" keeps Lua from wrapping the name in `[string "..."]`
    let compiled = lua
        .load(source)
        .set_name(&format!("={}", chunk))
        .into_function();

    match compiled {
        Ok(_) => {
            tracing::debug!(chunk, "Syntax check passed");
            Ok(())
        }
        Err(mlua::Error::SyntaxError { message, .. }) => {
            let (line, message) = split_location(&message);
            let source_line = source.lines().nth(line.saturating_sub(1)).unwrap_or("");
            let column = token_column(&message, source_line);
            tracing::debug!(chunk, line, column, %message, "Syntax check failed");
            Err(LualearnError::Syntax {
                chunk: chunk.to_string(),
                line,
                context: SourceContext::from_source(source, line, column),
                message,
            })
        }
        Err(other) => Err(other.into()),
    }
}

/// Splits `name:LINE: message` into the line number and the bare message.
fn split_location(raw: &str) -> (usize, String) {
    match LOCATION.as_ref().ok().and_then(|re| re.captures(raw)) {
        Some(caps) => {
            let line = caps[1].parse().unwrap_or(1);
            (line, caps[2].trim_end().to_string())
        }
        None => (1, raw.trim_end().to_string()),
    }
}

/// 1-based column of the `near '<token>'` token on `line`, or 0 when the
/// message names no token (`near <eof>`) or the token is not on the line.
fn token_column(message: &str, line: &str) -> usize {
    NEAR_TOKEN
        .as_ref()
        .ok()
        .and_then(|re| re.captures(message))
        .and_then(|caps| line.find(&caps[1]))
        .map(|byte| line[..byte].chars().count() + 1)
        .unwrap_or(0)
}
