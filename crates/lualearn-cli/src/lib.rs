// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

// Warn on missing documentation for public items
#![warn(missing_docs)]

//! LuaLearn CLI library.
//!
//! Terminal front end for the LuaLearn lessons and simulated code editor.
//!
//! # Usage
//!
//! This crate is primarily used through the `lualearn` binary:
//!
//! ```bash
//! lualearn lessons                      # List lessons
//! lualearn show tables --sample 2 --run # Print a sample and its output
//! lualearn run hello.lua                # Run a snippet file
//! lualearn watch hello.lua              # Re-run on every save
//! lualearn check                        # Syntax-check every bundled sample
//! lualearn init practice                # Write all samples to disk
//! ```
//!
//! # Configuration
//!
//! Defaults can be changed in `lualearn.toml` in the working directory.

/// CLI commands (run, lessons, show, check, init, watch).
pub mod commands;
/// Configuration from `lualearn.toml`.
pub mod config;
/// Terminal and JSON rendering.
pub mod render;
/// File system watching for re-runs on save.
pub mod watcher;
