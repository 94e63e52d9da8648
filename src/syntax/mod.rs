//! Document model and parse orchestration.
//!
//! - [`ast`] - the assembled feature document (`Feature`, `Scenario`, `Step`, …)
//! - [`builder`] - the listener that assembles documents from scan events
//! - [`parser`] - [`FeatureParser`], the resolve → dispatch → scan pipeline

pub mod ast;
pub mod builder;
pub mod parser;

pub use ast::{
    Background, Examples, Feature, Scenario, ScenarioKind, Step, StepKind, Table, TableRow, Tag,
};
pub use builder::FeatureBuilder;
pub use parser::{FeatureParser, ParserError};
