// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Watch command: re-run a snippet every time it is saved.

use crate::commands::{emit, run::load_editor};
use crate::config::Config;
use crate::render::{render_editor, Presentation};
use crate::watcher::FileWatcher;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tokio::signal;

/// Runs `path` once, then again after every change until Ctrl+C.
pub async fn run(path: &str, output_only: bool, config: &Config, p: &Presentation) -> anyhow::Result<()> {
    if path == "-" {
        anyhow::bail!("Cannot watch stdin; pass a file path");
    }

    let mut editor = load_editor(path, config)?;
    editor.run();
    emit(&render_editor(&editor, !output_only, p));

    println!("Watching {} for changes", path);
    println!("Press Ctrl+C to stop...");
    println!();

    let presentation = *p;
    let debounce = Duration::from_millis(config.watch.debounce_ms);
    let _watcher = FileWatcher::new(Path::new(path), debounce, move |changed| {
        match fs::read_to_string(&changed) {
            Ok(code) => {
                editor.set_code(code);
                editor.run();
                emit(&render_editor(&editor, !output_only, &presentation));
            }
            Err(err) => {
                tracing::warn!("Could not re-read {}: {}", changed.display(), err);
            }
        }
    })?;

    // Wait for Ctrl+C
    signal::ctrl_c().await?;

    println!("\nStopping file watcher...");
    Ok(())
}
