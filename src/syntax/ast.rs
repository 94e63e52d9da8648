//! The assembled feature document.
//!
//! Plain owned structs, built once per parse by the
//! [`FeatureBuilder`](super::builder::FeatureBuilder). Structural equality is
//! derived throughout; parsing the same text twice yields equal documents.

use std::path::PathBuf;

use smol_str::SmolStr;

use crate::base::Position;
pub use crate::parser::StepKind;

/// A parsed feature document.
///
/// `language` and `source_file` are stamped by the orchestrator after
/// assembly: `language` with the resolved tag's canonical name, and
/// `source_file` with the absolute path when the caller supplied one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feature {
    /// The header keyword as written (localized).
    pub keyword: SmolStr,
    pub name: String,
    pub description: String,
    pub tags: Vec<Tag>,
    pub background: Option<Background>,
    pub scenarios: Vec<Scenario>,
    pub language: String,
    pub source_file: Option<PathBuf>,
    pub position: Position,
}

impl Feature {
    pub fn new(keyword: &str, name: &str, position: Position) -> Self {
        Self {
            keyword: SmolStr::new(keyword),
            name: name.to_string(),
            description: String::new(),
            tags: Vec::new(),
            background: None,
            scenarios: Vec::new(),
            language: String::new(),
            source_file: None,
            position,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Background {
    pub keyword: SmolStr,
    pub name: String,
    pub description: String,
    pub steps: Vec<Step>,
    pub position: Position,
}

/// Whether a scenario block is a plain scenario or an outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioKind {
    Scenario,
    Outline,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub kind: ScenarioKind,
    pub keyword: SmolStr,
    pub name: String,
    pub description: String,
    pub tags: Vec<Tag>,
    pub steps: Vec<Step>,
    /// Non-empty only for outlines.
    pub examples: Vec<Examples>,
    pub position: Position,
}

impl Scenario {
    pub fn is_outline(&self) -> bool {
        self.kind == ScenarioKind::Outline
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub kind: StepKind,
    /// The step keyword as written (localized).
    pub keyword: SmolStr,
    pub text: String,
    pub table: Option<Table>,
    pub doc_string: Option<String>,
    pub position: Position,
}

/// One examples block of a scenario outline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Examples {
    pub keyword: SmolStr,
    pub name: String,
    pub tags: Vec<Tag>,
    pub table: Table,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    pub rows: Vec<TableRow>,
}

impl Table {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The header row, when the table has one.
    pub fn header(&self) -> Option<&TableRow> {
        self.rows.first()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub cells: Vec<String>,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
    pub position: Position,
}
