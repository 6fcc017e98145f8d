// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! File system watching for re-running a snippet on save.
//!
//! Editors often save by writing a temporary file and renaming it over the
//! original, so the watcher observes the parent directory and filters
//! events down to the one file name.

use notify::{RecommendedWatcher, RecursiveMode};
use notify_debouncer_full::{new_debouncer_opt, DebouncedEvent, Debouncer, FileIdMap};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Watches a single file and invokes a callback after it changes.
pub struct FileWatcher {
    #[allow(dead_code)]
    debouncer: Debouncer<RecommendedWatcher, FileIdMap>,
}

impl FileWatcher {
    /// Creates a watcher for `file`.
    ///
    /// # Arguments
    ///
    /// * `file` - File to watch; its parent directory must exist
    /// * `debounce` - Quiet period before `on_change` fires
    /// * `on_change` - Called with the changed path after each burst of events
    pub fn new<F>(file: &Path, debounce: Duration, mut on_change: F) -> anyhow::Result<Self>
    where
        F: FnMut(PathBuf) + Send + 'static,
    {
        let file = file.canonicalize()?;
        let file_name = file
            .file_name()
            .map(OsString::from)
            .ok_or_else(|| anyhow::anyhow!("Not a file: {}", file.display()))?;
        let dir = file
            .parent()
            .map(Path::to_path_buf)
            .ok_or_else(|| anyhow::anyhow!("No parent directory: {}", file.display()))?;

        let mut debouncer = new_debouncer_opt::<_, RecommendedWatcher, FileIdMap>(
            debounce,
            None,
            move |result: Result<Vec<DebouncedEvent>, Vec<notify::Error>>| match result {
                Ok(events) => {
                    if touches(&events, &file_name) {
                        on_change(file.clone());
                    }
                }
                Err(errors) => {
                    for error in errors {
                        tracing::warn!("Watch error: {}", error);
                    }
                }
            },
            FileIdMap::new(),
            notify::Config::default(),
        )?;

        debouncer.watch(&dir, RecursiveMode::NonRecursive)?;
        tracing::debug!("Watching {}", dir.display());

        Ok(Self { debouncer })
    }
}

fn touches(events: &[DebouncedEvent], file_name: &OsString) -> bool {
    events
        .iter()
        .flat_map(|e| e.paths.iter())
        .any(|p| p.file_name() == Some(file_name.as_os_str()))
}
