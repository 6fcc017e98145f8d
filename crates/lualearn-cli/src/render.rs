// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Terminal rendering of editors, lessons and the lesson catalog.
//!
//! Every function here returns a `String`; commands decide where it goes.

use crate::config::{Config, OutputFormat};
use console::{style, StyledObject};
use lualearn::{CodeEditor, Lesson};
use serde_json::json;
use std::fmt;

/// How a command presents its results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presentation {
    /// Text panels or JSON.
    pub format: OutputFormat,
    /// Whether to emit ANSI styling in text mode.
    pub color: bool,
}

impl Presentation {
    /// Combines the config file with command-line overrides.
    pub fn new(config: &Config, json: bool, no_color: bool) -> Self {
        Self {
            format: if json {
                OutputFormat::Json
            } else {
                config.output.format
            },
            color: config.output.color && !no_color,
        }
    }

    /// Plain text without styling, used by tests and pipes.
    pub fn plain() -> Self {
        Self {
            format: OutputFormat::Text,
            color: false,
        }
    }

    /// Applies `styled` unless color is off; with color on, `console`
    /// still drops styling when stdout is not a terminal.
    pub fn paint<D: fmt::Display>(&self, styled: StyledObject<D>) -> String {
        if self.color {
            styled.to_string()
        } else {
            styled.force_styling(false).to_string()
        }
    }

    fn heading(&self, text: &str) -> String {
        self.paint(style(text).cyan().bold())
    }

    fn dim(&self, text: &str) -> String {
        self.paint(style(text).dim())
    }

    fn output_line(&self, text: &str) -> String {
        self.paint(style(text).green())
    }
}

/// Renders an editor as a panel: title, optionally the numbered code, then
/// the output (or placeholder).
pub fn render_editor(editor: &CodeEditor, show_code: bool, p: &Presentation) -> String {
    if p.format == OutputFormat::Json {
        return json!({
            "title": editor.title(),
            "height": editor.height(),
            "output": editor.output(),
        })
        .to_string();
    }

    let mut out = String::new();
    out.push_str(&p.heading(editor.title()));
    out.push('\n');

    if show_code {
        for (number, line) in editor.code().split('\n').enumerate() {
            out.push_str(&p.dim(&format!("{:4} |", number + 1)));
            out.push(' ');
            out.push_str(line);
            out.push('\n');
        }
        out.push('\n');
    }

    out.push_str(&p.dim("Output:"));
    out.push('\n');
    for line in editor.panel_lines() {
        out.push_str(&p.output_line(line));
        out.push('\n');
    }
    out
}

/// Renders the lesson list with numbered samples.
pub fn render_catalog(lessons: &[Lesson], p: &Presentation) -> String {
    if p.format == OutputFormat::Json {
        let entries: Vec<_> = lessons
            .iter()
            .map(|lesson| {
                json!({
                    "slug": lesson.slug,
                    "title": lesson.title,
                    "summary": lesson.summary,
                    "samples": lesson.samples.iter().map(|s| s.title).collect::<Vec<_>>(),
                })
            })
            .collect();
        return serde_json::Value::Array(entries).to_string();
    }

    let mut out = String::new();
    for lesson in lessons {
        out.push_str(&format!(
            "{} {}\n",
            p.heading(&format!("{:<13}", lesson.slug)),
            lesson.title
        ));
        out.push_str(&format!("              {}\n", p.dim(lesson.summary)));
        for (number, sample) in lesson.numbered_samples() {
            out.push_str(&format!("              {}. {}\n", number, sample.title));
        }
    }
    out
}

/// Renders the header of a lesson page.
pub fn render_lesson_header(lesson: &Lesson, p: &Presentation) -> String {
    format!(
        "{}\n{}\n",
        p.heading(lesson.title),
        p.dim(lesson.summary)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use lualearn::find_lesson;

    #[test]
    fn test_placeholder_before_run() {
        let editor = CodeEditor::new("print(1)", "Demo");
        let text = render_editor(&editor, false, &Presentation::plain());
        assert_eq!(text, "Demo\nOutput:\nClick \"Run Code\" to see output\n");
    }

    #[test]
    fn test_code_is_numbered() {
        let mut editor = CodeEditor::new("x = 1\nprint(x)", "Numbered");
        editor.run();
        let text = render_editor(&editor, true, &Presentation::plain());
        assert!(text.contains("   1 | x = 1\n   2 | print(x)\n"));
        assert!(text.ends_with("-- Code executed successfully!\n-- Output would appear here when Lua interpreter is integrated\nx\n"));
    }

    #[test]
    fn test_editor_json() {
        let mut editor = CodeEditor::new("print('a')", "Json").with_height("120px");
        editor.run();
        let p = Presentation {
            format: OutputFormat::Json,
            color: true,
        };
        let value: serde_json::Value = serde_json::from_str(&render_editor(&editor, true, &p)).unwrap();
        assert_eq!(value["title"], "Json");
        assert_eq!(value["height"], "120px");
        assert_eq!(value["output"][2], "a");
    }

    #[test]
    fn test_plain_catalog_has_no_ansi() {
        let lesson = *find_lesson("functions").unwrap();
        let text = render_catalog(&[lesson], &Presentation::plain());
        assert!(!text.contains('\u{1b}'));
        assert!(text.starts_with("functions     Functions\n"));
        assert!(text.contains("3. Local & Higher-Order Functions"));
    }

    #[test]
    fn test_overrides() {
        let config = Config::default();
        assert_eq!(Presentation::new(&config, true, false).format, OutputFormat::Json);
        assert!(!Presentation::new(&config, false, true).color);
        assert!(Presentation::new(&config, false, false).color);
    }
}
