//! The event interface between the line lexer and document assembly.
//!
//! The lexer classifies lines and reports them as events; a [`Listener`]
//! decides what the events mean. Assembly problems and scan problems travel
//! the same way, as [`Diagnostic`] values via [`Listener::error`].

use crate::base::Position;

/// The step flavor a step keyword maps to.
///
/// `And`/`But` (and the `*` bullet, reported as `And`) keep their own kind;
/// resolving them against the preceding step is a consumer concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    Given,
    When,
    Then,
    And,
    But,
}

impl StepKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Given => "Given",
            Self::When => "When",
            Self::Then => "Then",
            Self::And => "And",
            Self::But => "But",
        }
    }
}

/// One problem reported while scanning or assembling a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub message: String,
    pub position: Position,
}

impl Diagnostic {
    pub fn new(message: impl Into<String>, position: Position) -> Self {
        Self {
            message: message.into(),
            position,
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.position, self.message)
    }
}

/// Receiver for scan events, in document order.
///
/// Header events carry the localized keyword as written plus the title text
/// after the `:`. Positions point at the first significant character of the
/// originating line.
pub trait Listener {
    fn feature(&mut self, keyword: &str, name: &str, position: Position);
    fn background(&mut self, keyword: &str, name: &str, position: Position);
    fn scenario(&mut self, keyword: &str, name: &str, position: Position);
    fn scenario_outline(&mut self, keyword: &str, name: &str, position: Position);
    fn examples(&mut self, keyword: &str, name: &str, position: Position);
    fn step(&mut self, kind: StepKind, keyword: &str, text: &str, position: Position);
    fn table_row(&mut self, cells: Vec<String>, position: Position);
    fn doc_string(&mut self, content: String, position: Position);
    fn tag(&mut self, name: &str, position: Position);
    /// A non-blank line that matched nothing else; descriptions and stray
    /// text both arrive here.
    fn text(&mut self, line: &str, position: Position);
    fn error(&mut self, diagnostic: Diagnostic);

    fn comment(&mut self, _text: &str, _position: Position) {}
    fn eof(&mut self) {}
}
