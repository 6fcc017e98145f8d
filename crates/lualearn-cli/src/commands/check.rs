// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Check command: compile snippets with Lua to catch syntax errors.

use crate::commands::emit;
use crate::config::OutputFormat;
use crate::render::Presentation;
use anyhow::Context;
use console::style;
use lualearn::check_syntax;
use serde_json::json;
use std::fs;
use std::path::PathBuf;

/// Result of checking one snippet.
#[derive(Debug)]
pub struct CheckOutcome {
    /// File path or `lesson/sample` name.
    pub name: String,
    /// Compiler verdict.
    pub result: lualearn::Result<()>,
}

impl CheckOutcome {
    /// Whether the snippet compiled.
    pub fn passed(&self) -> bool {
        self.result.is_ok()
    }
}

/// Checks `files`, or every bundled sample when `files` is empty.
///
/// Fails when any snippet does not compile.
pub fn run(files: &[PathBuf], p: &Presentation) -> anyhow::Result<()> {
    let outcomes = if files.is_empty() {
        check_bundled()
    } else {
        check_files(files)?
    };

    emit(&render_outcomes(&outcomes, p));

    let failed = outcomes.iter().filter(|o| !o.passed()).count();
    if failed > 0 {
        anyhow::bail!(
            "{} of {} snippets failed the syntax check",
            failed,
            outcomes.len()
        );
    }
    Ok(())
}

/// Checks every sample in the lesson catalog.
pub fn check_bundled() -> Vec<CheckOutcome> {
    lualearn::catalog()
        .iter()
        .flat_map(|lesson| {
            lesson.numbered_samples().map(move |(n, sample)| {
                let name = format!("{}/{}", lesson.slug, sample.file_name(n));
                CheckOutcome {
                    result: check_syntax(&name, sample.code),
                    name,
                }
            })
        })
        .collect()
}

/// Checks files on disk.
pub fn check_files(files: &[PathBuf]) -> anyhow::Result<Vec<CheckOutcome>> {
    files
        .iter()
        .map(|path| {
            let source = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let name = path.display().to_string();
            Ok(CheckOutcome {
                result: check_syntax(&name, &source),
                name,
            })
        })
        .collect()
}

fn render_outcomes(outcomes: &[CheckOutcome], p: &Presentation) -> String {
    if p.format == OutputFormat::Json {
        let entries: Vec<_> = outcomes
            .iter()
            .map(|o| {
                json!({
                    "name": o.name,
                    "ok": o.passed(),
                    "error": o.result.as_ref().err().map(|e| e.to_string()),
                })
            })
            .collect();
        return serde_json::Value::Array(entries).to_string();
    }

    let mut out = String::new();
    for outcome in outcomes {
        match &outcome.result {
            Ok(()) => {
                let mark = p.paint(style("ok").green());
                out.push_str(&format!("  {}    {}\n", mark, outcome.name));
            }
            Err(err) => {
                let mark = p.paint(style("FAIL").red().bold());
                out.push_str(&format!("  {}  {}\n{}\n", mark, outcome.name, err));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_samples_pass() {
        let outcomes = check_bundled();
        assert_eq!(outcomes.len(), 13);
        assert!(outcomes.iter().all(CheckOutcome::passed));
        assert_eq!(outcomes[0].name, "intro/1-hello-world-example.lua");
    }

    #[test]
    fn test_plain_report() {
        let outcomes = vec![
            CheckOutcome {
                name: "good.lua".to_string(),
                result: Ok(()),
            },
            CheckOutcome {
                name: "bad.lua".to_string(),
                result: check_syntax("bad.lua", "if then"),
            },
        ];
        let text = render_outcomes(&outcomes, &Presentation::plain());
        assert!(text.starts_with("  ok    good.lua\n  FAIL  bad.lua\n"));
        assert!(text.contains("Syntax error in bad.lua:1:"));
    }
}
