// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Bundled tutorial lessons.
//!
//! The catalog holds the introduction and the four core lessons in reading
//! order. Each lesson carries the snippets its editors open with; the Lua
//! sources are embedded from `lessons/<slug>/` at compile time.
//!
//! Samples are numbered from 1, the way they are presented to readers.

use crate::editor::CodeEditor;
use crate::error::{LualearnError, Result};
use serde::Serialize;

/// A snippet shown in a lesson's code editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Sample {
    /// Editor title.
    pub title: &'static str,
    /// Initial editor contents.
    pub code: &'static str,
    /// Editor height hint.
    pub height: &'static str,
}

impl Sample {
    /// Opens a fresh editor on this snippet.
    pub fn editor(&self) -> CodeEditor {
        CodeEditor::new(self.code, self.title).with_height(self.height)
    }

    /// File name used when writing this sample to disk, e.g.
    /// `2-data-types-example.lua` for sample 2.
    pub fn file_name(&self, number: usize) -> String {
        format!("{}-{}.lua", number, slugify(self.title))
    }
}

/// One tutorial page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Lesson {
    /// Short identifier, e.g. `control-flow`.
    pub slug: &'static str,
    /// Page heading.
    pub title: &'static str,
    /// One-sentence summary shown under the heading.
    pub summary: &'static str,
    /// Editors on the page, in order.
    pub samples: &'static [Sample],
}

impl Lesson {
    /// Returns sample `number` (1-based).
    pub fn sample(&self, number: usize) -> Result<&Sample> {
        number
            .checked_sub(1)
            .and_then(|index| self.samples.get(index))
            .ok_or_else(|| LualearnError::SampleNotFound {
                lesson: self.slug.to_string(),
                index: number,
                available: self.samples.len(),
            })
    }

    /// Samples paired with their 1-based numbers.
    pub fn numbered_samples(&self) -> impl Iterator<Item = (usize, &Sample)> {
        self.samples.iter().enumerate().map(|(i, s)| (i + 1, s))
    }
}

static LESSONS: &[Lesson] = &[
    Lesson {
        slug: "intro",
        title: "Introduction to Lua",
        summary: "Discover the power and simplicity of Lua programming language.",
        samples: &[Sample {
            title: "Hello World Example",
            code: include_str!("../lessons/intro/1-hello-world.lua"),
            height: "250px",
        }],
    },
    Lesson {
        slug: "variables",
        title: "Variables & Data Types",
        summary: "Learn how to store and work with data in Lua using variables and different data types.",
        samples: &[
            Sample {
                title: "Basic Variables Example",
                code: include_str!("../lessons/variables/1-basic-variables.lua"),
                height: "280px",
            },
            Sample {
                title: "Data Types Example",
                code: include_str!("../lessons/variables/2-data-types.lua"),
                height: "320px",
            },
            Sample {
                title: "Variable Scope Example",
                code: include_str!("../lessons/variables/3-scope.lua"),
                height: "300px",
            },
        ],
    },
    Lesson {
        slug: "functions",
        title: "Functions",
        summary: "Master the art of writing reusable code with Lua functions.",
        samples: &[
            Sample {
                title: "Basic Functions Example",
                code: include_str!("../lessons/functions/1-basic-function.lua"),
                height: "340px",
            },
            Sample {
                title: "Advanced Functions Example",
                code: include_str!("../lessons/functions/2-advanced-function.lua"),
                height: "360px",
            },
            Sample {
                title: "Local & Higher-Order Functions",
                code: include_str!("../lessons/functions/3-local-function.lua"),
                height: "380px",
            },
        ],
    },
    Lesson {
        slug: "tables",
        title: "Tables & Arrays",
        summary: "Learn Lua's versatile table data structure - the foundation of data organization.",
        samples: &[
            Sample {
                title: "Basic Tables Example",
                code: include_str!("../lessons/tables/1-basic-tables.lua"),
                height: "380px",
            },
            Sample {
                title: "Advanced Tables Example",
                code: include_str!("../lessons/tables/2-advanced-tables.lua"),
                height: "400px",
            },
            Sample {
                title: "Table Methods & Iteration",
                code: include_str!("../lessons/tables/3-table-methods.lua"),
                height: "450px",
            },
        ],
    },
    Lesson {
        slug: "control-flow",
        title: "Control Flow",
        summary: "Master decision making and repetition in your Lua programs.",
        samples: &[
            Sample {
                title: "Conditional Statements Example",
                code: include_str!("../lessons/control-flow/1-conditional.lua"),
                height: "420px",
            },
            Sample {
                title: "Loops Example",
                code: include_str!("../lessons/control-flow/2-loops.lua"),
                height: "450px",
            },
            Sample {
                title: "Advanced Control Flow Example",
                code: include_str!("../lessons/control-flow/3-advanced-control.lua"),
                height: "480px",
            },
        ],
    },
];

/// All lessons in reading order.
pub fn catalog() -> &'static [Lesson] {
    LESSONS
}

/// Looks up a lesson by slug.
pub fn find_lesson(slug: &str) -> Result<&'static Lesson> {
    LESSONS
        .iter()
        .find(|lesson| lesson.slug == slug)
        .ok_or_else(|| LualearnError::LessonNotFound(slug.to_string()))
}

/// Lowercases `title` and joins its alphanumeric runs with `-`.
pub fn slugify(title: &str) -> String {
    title
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_in_reading_order() {
        let slugs: Vec<_> = catalog().iter().map(|l| l.slug).collect();
        assert_eq!(slugs, ["intro", "variables", "functions", "tables", "control-flow"]);
    }

    #[test]
    fn test_every_sample_prints_something() {
        for lesson in catalog() {
            assert!(!lesson.samples.is_empty(), "{} has no samples", lesson.slug);
            for sample in lesson.samples {
                let mut editor = sample.editor();
                let output = editor.run();
                assert!(
                    !output.derived().is_empty(),
                    "{} / {} has no print lines",
                    lesson.slug,
                    sample.title
                );
            }
        }
    }

    #[test]
    fn test_intro_sample_output() {
        let sample = find_lesson("intro").unwrap().sample(1).unwrap();
        let mut editor = sample.editor();
        assert_eq!(editor.height(), "250px");
        assert_eq!(
            editor.run().derived(),
            ["Hello, World!", "Welcome to Lua programming!", "message"]
        );
    }

    #[test]
    fn test_multi_argument_prints_keep_commas() {
        let sample = find_lesson("variables").unwrap().sample(1).unwrap();
        let mut editor = sample.editor();
        assert_eq!(
            editor.run().derived(),
            [
                "Name:, name",
                "Age:, age",
                "Height:, height, feet",
                "Is student:, isStudent",
            ]
        );
    }

    #[test]
    fn test_unknown_lesson() {
        let err = find_lesson("metatables").unwrap_err();
        assert!(matches!(err, LualearnError::LessonNotFound(ref s) if s == "metatables"));
    }

    #[test]
    fn test_sample_numbers_are_one_based() {
        let lesson = find_lesson("tables").unwrap();
        assert_eq!(lesson.sample(1).unwrap().title, "Basic Tables Example");
        assert_eq!(lesson.sample(3).unwrap().title, "Table Methods & Iteration");
        assert!(matches!(
            lesson.sample(0),
            Err(LualearnError::SampleNotFound { index: 0, available: 3, .. })
        ));
        assert!(matches!(
            lesson.sample(4),
            Err(LualearnError::SampleNotFound { index: 4, .. })
        ));
    }

    #[test]
    fn test_sample_file_names() {
        let lesson = find_lesson("functions").unwrap();
        let names: Vec<_> = lesson
            .numbered_samples()
            .map(|(n, s)| s.file_name(n))
            .collect();
        assert_eq!(
            names,
            [
                "1-basic-functions-example.lua",
                "2-advanced-functions-example.lua",
                "3-local-higher-order-functions.lua",
            ]
        );
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Tables & Arrays"), "tables-arrays");
        assert_eq!(slugify("  Hello World!  "), "hello-world");
        assert_eq!(slugify("&&"), "");
    }
}
