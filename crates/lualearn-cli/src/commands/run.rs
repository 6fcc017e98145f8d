// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Run command: feed a snippet file through the simulated editor.

use crate::commands::emit;
use crate::config::Config;
use crate::render::{render_editor, Presentation};
use anyhow::Context;
use lualearn::CodeEditor;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Reads `path` (or stdin for `-`), runs it and prints the editor panel.
pub fn run(path: &str, output_only: bool, config: &Config, p: &Presentation) -> anyhow::Result<()> {
    let mut editor = load_editor(path, config)?;
    editor.run();
    emit(&render_editor(&editor, !output_only, p));
    Ok(())
}

/// Opens an editor on the contents of `path`, titled with its file name.
pub fn load_editor(path: &str, config: &Config) -> anyhow::Result<CodeEditor> {
    let (title, code) = if path == "-" {
        let mut code = String::new();
        io::stdin()
            .read_to_string(&mut code)
            .context("Failed to read snippet from stdin")?;
        ("stdin".to_string(), code)
    } else {
        let code = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?;
        let title = Path::new(path)
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| path.to_string());
        (title, code)
    };

    tracing::info!("Loaded {} ({} bytes)", title, code.len());
    Ok(CodeEditor::new(code, title).with_height(config.editor.height.as_str()))
}
