//! Assembles a feature document from scan events.
//!
//! [`FeatureBuilder`] is the listener bound to each scan: it routes events
//! into the document under construction, records every out-of-place event as
//! a diagnostic, and hands both back through [`FeatureBuilder::into_result`].
//! A builder is used for exactly one scan.

use smol_str::SmolStr;

use super::ast::{Background, Examples, Feature, Scenario, ScenarioKind, Step, Table, TableRow, Tag};
use crate::base::Position;
use crate::parser::{Diagnostic, Listener, StepKind};

/// Which part of the document subsequent events belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Block {
    None,
    Feature,
    Background,
    Scenario,
    Examples,
}

/// Listener that builds a [`Feature`] and collects diagnostics.
pub struct FeatureBuilder {
    feature: Option<Feature>,
    pending_tags: Vec<Tag>,
    block: Block,
    diagnostics: Vec<Diagnostic>,
}

impl FeatureBuilder {
    pub fn new() -> Self {
        Self {
            feature: None,
            pending_tags: Vec::new(),
            block: Block::None,
            diagnostics: Vec::new(),
        }
    }

    /// The assembled document (if any) and every diagnostic, in order.
    pub fn into_result(self) -> (Option<Feature>, Vec<Diagnostic>) {
        (self.feature, self.diagnostics)
    }

    fn report(&mut self, message: impl Into<String>, position: Position) {
        self.diagnostics.push(Diagnostic::new(message, position));
    }

    fn take_tags(&mut self) -> Vec<Tag> {
        std::mem::take(&mut self.pending_tags)
    }

    /// Pending tags ahead of an element that cannot carry them.
    fn refuse_tags(&mut self, context: &'static str) {
        if let Some(first) = self.pending_tags.first() {
            let position = first.position;
            self.pending_tags.clear();
            self.report(format!("tags are not allowed before {context}"), position);
        }
    }

    fn current_scenario(&self) -> Option<&Scenario> {
        self.feature.as_ref()?.scenarios.last()
    }

    fn current_steps_mut(&mut self) -> Option<&mut Vec<Step>> {
        let feature = self.feature.as_mut()?;
        match self.block {
            Block::Background => feature.background.as_mut().map(|b| &mut b.steps),
            Block::Scenario => feature.scenarios.last_mut().map(|s| &mut s.steps),
            _ => None,
        }
    }

    fn last_step_mut(&mut self) -> Option<&mut Step> {
        self.current_steps_mut()?.last_mut()
    }

    fn open_scenario(&mut self, kind: ScenarioKind, keyword: &str, name: &str, position: Position) {
        if self.feature.is_none() {
            self.pending_tags.clear();
            self.report("scenario outside of a feature", position);
            return;
        }
        let tags = self.take_tags();
        if let Some(feature) = self.feature.as_mut() {
            feature.scenarios.push(Scenario {
                kind,
                keyword: SmolStr::new(keyword),
                name: name.to_string(),
                description: String::new(),
                tags,
                steps: Vec::new(),
                examples: Vec::new(),
                position,
            });
        }
        self.block = Block::Scenario;
    }
}

impl Default for FeatureBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Listener for FeatureBuilder {
    fn feature(&mut self, keyword: &str, name: &str, position: Position) {
        if self.feature.is_some() {
            self.pending_tags.clear();
            self.report("duplicate feature header", position);
            return;
        }
        let mut feature = Feature::new(keyword, name, position);
        feature.tags = self.take_tags();
        self.feature = Some(feature);
        self.block = Block::Feature;
    }

    fn background(&mut self, keyword: &str, name: &str, position: Position) {
        if self.feature.is_none() {
            self.pending_tags.clear();
            self.report("background outside of a feature", position);
            return;
        }
        if self.feature.as_ref().is_some_and(|f| f.background.is_some()) {
            self.report("duplicate background", position);
            return;
        }
        self.refuse_tags("a background");
        if let Some(feature) = self.feature.as_mut() {
            feature.background = Some(Background {
                keyword: SmolStr::new(keyword),
                name: name.to_string(),
                description: String::new(),
                steps: Vec::new(),
                position,
            });
        }
        self.block = Block::Background;
    }

    fn scenario(&mut self, keyword: &str, name: &str, position: Position) {
        self.open_scenario(ScenarioKind::Scenario, keyword, name, position);
    }

    fn scenario_outline(&mut self, keyword: &str, name: &str, position: Position) {
        self.open_scenario(ScenarioKind::Outline, keyword, name, position);
    }

    fn examples(&mut self, keyword: &str, name: &str, position: Position) {
        if !self.current_scenario().is_some_and(|s| s.is_outline()) {
            self.pending_tags.clear();
            self.report("examples are only allowed in a scenario outline", position);
            return;
        }
        let tags = self.take_tags();
        if let Some(feature) = self.feature.as_mut() {
            if let Some(scenario) = feature.scenarios.last_mut() {
                scenario.examples.push(Examples {
                    keyword: SmolStr::new(keyword),
                    name: name.to_string(),
                    tags,
                    table: Table::default(),
                    position,
                });
            }
        }
        self.block = Block::Examples;
    }

    fn step(&mut self, kind: StepKind, keyword: &str, text: &str, position: Position) {
        self.refuse_tags("a step");
        let step = Step {
            kind,
            keyword: SmolStr::new(keyword),
            text: text.to_string(),
            table: None,
            doc_string: None,
            position,
        };
        match self.current_steps_mut() {
            Some(steps) => steps.push(step),
            None => self.report("step outside of a scenario", position),
        }
    }

    fn table_row(&mut self, cells: Vec<String>, position: Position) {
        let row = TableRow { cells, position };
        if self.block == Block::Examples {
            if let Some(feature) = self.feature.as_mut() {
                if let Some(examples) = feature
                    .scenarios
                    .last_mut()
                    .and_then(|s| s.examples.last_mut())
                {
                    examples.table.rows.push(row);
                    return;
                }
            }
        }
        match self.last_step_mut() {
            Some(step) => step.table.get_or_insert_with(Table::default).rows.push(row),
            None => self.report("table row outside of a step", position),
        }
    }

    fn doc_string(&mut self, content: String, position: Position) {
        match self.last_step_mut().map(|step| step.doc_string.is_some()) {
            None => self.report("doc string outside of a step", position),
            Some(true) => self.report("step already has a doc string", position),
            Some(false) => {
                if let Some(step) = self.last_step_mut() {
                    step.doc_string = Some(content);
                }
            }
        }
    }

    fn tag(&mut self, name: &str, position: Position) {
        self.pending_tags.push(Tag {
            name: name.to_string(),
            position,
        });
    }

    fn text(&mut self, line: &str, position: Position) {
        match self.block {
            Block::None => {
                self.report("unexpected text before the feature header", position);
                return;
            }
            Block::Examples => {
                self.report("expected a table row", position);
                return;
            }
            _ => {}
        }

        // Free text is description until the block's first step.
        let has_steps = self
            .current_steps_mut()
            .is_some_and(|steps| !steps.is_empty());
        if has_steps {
            self.report("expected a step, table row or doc string", position);
            return;
        }

        if let Some(feature) = self.feature.as_mut() {
            let description = match self.block {
                Block::Feature => Some(&mut feature.description),
                Block::Background => feature.background.as_mut().map(|b| &mut b.description),
                Block::Scenario => feature.scenarios.last_mut().map(|s| &mut s.description),
                _ => None,
            };
            if let Some(description) = description {
                if !description.is_empty() {
                    description.push('\n');
                }
                description.push_str(line);
            }
        }
    }

    fn error(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    fn eof(&mut self) {
        if let Some(first) = self.pending_tags.first() {
            let position = first.position;
            self.pending_tags.clear();
            self.report("tags are not attached to any element", position);
        }
    }
}
