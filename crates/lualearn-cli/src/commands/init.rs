// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Init command: write a practice workspace with every lesson sample.

use crate::config::{Config, CONFIG_FILE};
use console::style;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_TEMPLATE: &str = r#"# LuaLearn practice workspace

[editor]
height = "300px"

[output]
format = "text"
color = true

[workspace]
lessons_dir = "{lessons_dir}"

[watch]
debounce_ms = 750
"#;

/// Files touched by [`scaffold`].
#[derive(Debug, Default)]
pub struct InitSummary {
    /// Files created.
    pub written: Vec<PathBuf>,
    /// Files left alone because they already existed.
    pub skipped: Vec<PathBuf>,
}

/// Initializes a practice workspace in `dir` (default: current directory).
pub fn run(dir: Option<PathBuf>, config: &Config) -> anyhow::Result<()> {
    let project_dir = match dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let summary = scaffold(&project_dir, &config.workspace.lessons_dir)?;

    for path in &summary.skipped {
        println!("  {} {}", style("exists").yellow(), path.display());
    }
    println!();
    println!(
        "{} Wrote {} files to {}",
        style("✓").green().bold(),
        summary.written.len(),
        project_dir.display()
    );
    println!();
    println!("Try one:");
    println!("  lualearn run {}/intro/1-hello-world-example.lua", config.workspace.lessons_dir);
    println!("  lualearn watch {}/tables/1-basic-tables-example.lua", config.workspace.lessons_dir);
    Ok(())
}

/// Writes `lualearn.toml` and every sample under `dir/<lessons_dir>/<slug>/`.
///
/// Existing files are never overwritten.
pub fn scaffold(dir: &Path, lessons_dir: &str) -> anyhow::Result<InitSummary> {
    let mut summary = InitSummary::default();

    if dir.exists() {
        tracing::info!("Initializing lualearn workspace in existing directory: {}", dir.display());
    } else {
        fs::create_dir_all(dir)?;
        tracing::info!("Created workspace directory: {}", dir.display());
    }

    let config = CONFIG_TEMPLATE.replace("{lessons_dir}", lessons_dir);
    write_new(&dir.join(CONFIG_FILE), &config, &mut summary)?;

    for lesson in lualearn::catalog() {
        let lesson_dir = dir.join(lessons_dir).join(lesson.slug);
        fs::create_dir_all(&lesson_dir)?;
        for (number, sample) in lesson.numbered_samples() {
            let path = lesson_dir.join(sample.file_name(number));
            write_new(&path, sample.code, &mut summary)?;
        }
    }

    Ok(summary)
}

fn write_new(path: &Path, content: &str, summary: &mut InitSummary) -> anyhow::Result<()> {
    if path.exists() {
        tracing::debug!("Skipping existing file: {}", path.display());
        summary.skipped.push(path.to_path_buf());
    } else {
        fs::write(path, content)?;
        summary.written.push(path.to_path_buf());
    }
    Ok(())
}
