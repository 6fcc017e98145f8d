// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Show command: print a lesson's samples as editor panels.

use crate::commands::emit;
use crate::config::OutputFormat;
use crate::render::{render_editor, render_lesson_header, Presentation};
use lualearn::{find_lesson, CodeEditor, Sample};
use serde_json::json;

/// Prints the samples of lesson `slug`, or only sample `number` if given.
///
/// With `execute`, each editor is run before it is printed.
pub fn run(slug: &str, number: Option<usize>, execute: bool, p: &Presentation) -> anyhow::Result<()> {
    emit(&render_lesson(slug, number, execute, p)?);
    Ok(())
}

/// Renders what [`run`] prints.
pub fn render_lesson(
    slug: &str,
    number: Option<usize>,
    execute: bool,
    p: &Presentation,
) -> anyhow::Result<String> {
    let lesson = find_lesson(slug)?;
    let samples: Vec<(usize, &Sample)> = match number {
        Some(n) => vec![(n, lesson.sample(n)?)],
        None => lesson.numbered_samples().collect(),
    };

    let editors: Vec<(usize, CodeEditor)> = samples
        .into_iter()
        .map(|(n, sample)| {
            let mut editor = sample.editor();
            if execute {
                editor.run();
            }
            (n, editor)
        })
        .collect();

    if p.format == OutputFormat::Json {
        let samples: Vec<_> = editors
            .iter()
            .map(|(n, editor)| {
                json!({
                    "number": n,
                    "title": editor.title(),
                    "height": editor.height(),
                    "code": editor.code(),
                    "output": editor.output(),
                })
            })
            .collect();
        return Ok(json!({
            "slug": lesson.slug,
            "title": lesson.title,
            "summary": lesson.summary,
            "samples": samples,
        })
        .to_string());
    }

    let mut out = render_lesson_header(lesson, p);
    for (_, editor) in &editors {
        out.push('\n');
        out.push_str(&render_editor(editor, true, p));
    }
    Ok(out)
}
