// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Lessons command: list the bundled lessons.

use crate::commands::emit;
use crate::render::{render_catalog, Presentation};

/// Prints every lesson with its numbered samples.
pub fn run(p: &Presentation) -> anyhow::Result<()> {
    emit(&render_catalog(lualearn::catalog(), p));
    Ok(())
}
