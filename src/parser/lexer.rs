//! Single-pass line lexer for feature files.
//!
//! The scanner walks the document once, classifies each line against its
//! keyword table and reports events to the bound [`Listener`]. There is no
//! incremental mode; a fresh lexer is constructed per scan.

use super::keywords::KeywordTable;
use super::listener::{Diagnostic, Listener, StepKind};
use crate::base::Position;

const DOC_STRING_FENCE: &str = "\"\"\"";

/// A lexer over one keyword grammar, bound to a listener.
pub struct Lexer<'l, L: Listener> {
    keywords: &'static KeywordTable,
    listener: &'l mut L,
}

/// An open doc string: fence position, fence indentation, collected lines.
struct DocString {
    position: Position,
    indent: usize,
    lines: Vec<String>,
}

impl<'l, L: Listener> Lexer<'l, L> {
    pub fn new(keywords: &'static KeywordTable, listener: &'l mut L) -> Self {
        Self { keywords, listener }
    }

    pub fn keywords(&self) -> &'static KeywordTable {
        self.keywords
    }

    /// Scan the whole document, reporting every significant line in order.
    pub fn scan(mut self, input: &str) {
        let mut doc_string: Option<DocString> = None;

        for (index, raw) in input.lines().enumerate() {
            let indent = raw.chars().take_while(|c| c.is_whitespace()).count();
            let position = Position::new(index + 1, indent + 1);
            let line = raw.trim();

            // Inside a doc string everything is content until the closing
            // fence, blank lines included.
            if let Some(mut active) = doc_string.take() {
                if line == DOC_STRING_FENCE {
                    self.listener
                        .doc_string(active.lines.join("\n"), active.position);
                } else {
                    active.lines.push(strip_indent(raw, active.indent).to_string());
                    doc_string = Some(active);
                }
                continue;
            }

            if line.is_empty() {
                continue;
            }

            if line.starts_with(DOC_STRING_FENCE) {
                // Anything after the opening fence (a content type) is ignored.
                doc_string = Some(DocString {
                    position,
                    indent,
                    lines: Vec::new(),
                });
                continue;
            }

            if let Some(rest) = line.strip_prefix('#') {
                self.listener.comment(rest.trim(), position);
                continue;
            }

            if line.starts_with('@') {
                self.scan_tags(line, position);
                continue;
            }

            if line.starts_with('|') {
                self.scan_table_row(line, position);
                continue;
            }

            if self.scan_header(line, position) {
                continue;
            }

            if self.scan_step(line, position) {
                continue;
            }

            self.listener.text(line, position);
        }

        if let Some(active) = doc_string {
            self.listener.error(Diagnostic::new(
                "doc string is never closed",
                active.position,
            ));
        }

        self.listener.eof();
    }

    fn scan_tags(&mut self, line: &str, position: Position) {
        for token in line.split_whitespace() {
            match token.strip_prefix('@') {
                Some(name) if !name.is_empty() => self.listener.tag(name, position),
                _ => self.listener.error(Diagnostic::new(
                    format!("malformed tag '{token}'"),
                    position,
                )),
            }
        }
    }

    fn scan_table_row(&mut self, line: &str, position: Position) {
        match line
            .strip_prefix('|')
            .and_then(|rest| rest.strip_suffix('|'))
        {
            Some(inner) => {
                let cells = inner.split('|').map(|cell| cell.trim().to_string()).collect();
                self.listener.table_row(cells, position);
            }
            None => self.listener.error(Diagnostic::new(
                "table row is missing its closing '|'",
                position,
            )),
        }
    }

    fn scan_header(&mut self, line: &str, position: Position) -> bool {
        // Outline keywords first: several languages build them from the
        // plain scenario keyword.
        if let Some((keyword, title)) = match_header(line, self.keywords.scenario_outline) {
            self.listener.scenario_outline(keyword, title, position);
            return true;
        }
        if let Some((keyword, title)) = match_header(line, self.keywords.feature) {
            self.listener.feature(keyword, title, position);
            return true;
        }
        if let Some((keyword, title)) = match_header(line, self.keywords.background) {
            self.listener.background(keyword, title, position);
            return true;
        }
        if let Some((keyword, title)) = match_header(line, self.keywords.scenario) {
            self.listener.scenario(keyword, title, position);
            return true;
        }
        if let Some((keyword, title)) = match_header(line, self.keywords.examples) {
            self.listener.examples(keyword, title, position);
            return true;
        }
        false
    }

    fn scan_step(&mut self, line: &str, position: Position) -> bool {
        let kinds: [(StepKind, &'static [&'static str]); 5] = [
            (StepKind::Given, self.keywords.given),
            (StepKind::When, self.keywords.when),
            (StepKind::Then, self.keywords.then),
            (StepKind::And, self.keywords.and),
            (StepKind::But, self.keywords.but),
        ];
        for (kind, keywords) in kinds {
            for &keyword in keywords {
                if let Some(rest) = line.strip_prefix(keyword) {
                    // Step keywords need trailing whitespace, except the `*`
                    // bullet and elided forms like `Lorsqu'`.
                    let bare = keyword == "*" || keyword.ends_with('\'');
                    if bare || rest.is_empty() || rest.starts_with(char::is_whitespace) {
                        self.listener.step(kind, keyword, rest.trim(), position);
                        return true;
                    }
                }
            }
        }
        false
    }
}

/// Match a header line against a set of candidate keywords.
///
/// A header is a keyword from `keywords` immediately followed by `:`; the
/// text after the colon is the trimmed title. Returns the matched keyword
/// and title, or `None` when no keyword heads the line.
fn match_header<'a>(line: &'a str, keywords: &'static [&'static str]) -> Option<(&'static str, &'a str)> {
    for &keyword in keywords {
        if let Some(rest) = line.strip_prefix(keyword) {
            if let Some(title) = rest.strip_prefix(':') {
                return Some((keyword, title.trim()));
            }
        }
    }
    None
}

/// Remove up to `indent` leading whitespace characters.
fn strip_indent(line: &str, indent: usize) -> &str {
    let mut removed = 0;
    for (offset, ch) in line.char_indices() {
        if removed >= indent || !ch.is_whitespace() {
            return &line[offset..];
        }
        removed += 1;
    }
    ""
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::keywords::{EN, SE};

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl Listener for Recorder {
        fn feature(&mut self, keyword: &str, name: &str, position: Position) {
            self.events.push(format!("feature[{keyword}:{name}]@{}", position.line));
        }
        fn background(&mut self, keyword: &str, name: &str, position: Position) {
            self.events.push(format!("background[{keyword}:{name}]@{}", position.line));
        }
        fn scenario(&mut self, keyword: &str, name: &str, position: Position) {
            self.events.push(format!("scenario[{keyword}:{name}]@{}", position.line));
        }
        fn scenario_outline(&mut self, keyword: &str, name: &str, position: Position) {
            self.events.push(format!("outline[{keyword}:{name}]@{}", position.line));
        }
        fn examples(&mut self, keyword: &str, name: &str, position: Position) {
            self.events.push(format!("examples[{keyword}:{name}]@{}", position.line));
        }
        fn step(&mut self, kind: StepKind, keyword: &str, text: &str, position: Position) {
            self.events.push(format!(
                "step[{}:{keyword}:{text}]@{}",
                kind.as_str(),
                position.line
            ));
        }
        fn table_row(&mut self, cells: Vec<String>, position: Position) {
            self.events
                .push(format!("row[{}]@{}", cells.join(","), position.line));
        }
        fn doc_string(&mut self, content: String, position: Position) {
            self.events
                .push(format!("docstring[{content}]@{}", position.line));
        }
        fn tag(&mut self, name: &str, position: Position) {
            self.events.push(format!("tag[{name}]@{}", position.line));
        }
        fn text(&mut self, line: &str, position: Position) {
            self.events.push(format!("text[{line}]@{}", position.line));
        }
        fn error(&mut self, diagnostic: Diagnostic) {
            self.events.push(format!("error[{}]", diagnostic.message));
        }
        fn comment(&mut self, text: &str, position: Position) {
            self.events.push(format!("comment[{text}]@{}", position.line));
        }
        fn eof(&mut self) {
            self.events.push("eof".to_string());
        }
    }

    fn scan(input: &str) -> Vec<String> {
        let mut recorder = Recorder::default();
        Lexer::new(&EN, &mut recorder).scan(input);
        recorder.events
    }

    #[test]
    fn test_headers_and_steps() {
        let events = scan("Feature: Accounts\n\nScenario: Login\n  Given a user\n  When they log in\n  Then they see a dashboard\n");
        assert_eq!(
            events,
            [
                "feature[Feature:Accounts]@1",
                "scenario[Scenario:Login]@3",
                "step[Given:Given:a user]@4",
                "step[When:When:they log in]@5",
                "step[Then:Then:they see a dashboard]@6",
                "eof",
            ]
        );
    }

    #[test]
    fn test_outline_is_not_a_scenario() {
        let events = scan("Scenario Outline: Sizes\n");
        assert_eq!(events, ["outline[Scenario Outline:Sizes]@1", "eof"]);
    }

    #[test]
    fn test_tags_and_comments() {
        let events = scan("@web @slow\n# reviewed 2024-06\nFeature: F\n");
        assert_eq!(
            events,
            [
                "tag[web]@1",
                "tag[slow]@1",
                "comment[reviewed 2024-06]@2",
                "feature[Feature:F]@3",
                "eof",
            ]
        );
    }

    #[test]
    fn test_table_rows() {
        let events = scan("| name | size |\n| small | 1 |\n");
        assert_eq!(events, ["row[name,size]@1", "row[small,1]@2", "eof"]);
    }

    #[test]
    fn test_unterminated_table_row() {
        let events = scan("| name | size\n");
        assert_eq!(
            events,
            ["error[table row is missing its closing '|']", "eof"]
        );
    }

    #[test]
    fn test_doc_string_strips_fence_indent() {
        let events = scan("  \"\"\"\n    payload\n  \"\"\"\n");
        assert_eq!(events, ["docstring[  payload]@1", "eof"]);
    }

    #[test]
    fn test_unclosed_doc_string() {
        let events = scan("\"\"\"\nstranded\n");
        assert_eq!(
            events,
            ["error[doc string is never closed]", "eof"]
        );
    }

    #[test]
    fn test_bullet_step() {
        let events = scan("* a bullet step\n");
        assert_eq!(events, ["step[And:*:a bullet step]@1", "eof"]);
    }

    #[test]
    fn test_keyword_without_separator_is_text() {
        let events = scan("Givenness is not a step\n");
        assert_eq!(events, ["text[Givenness is not a step]@1", "eof"]);
    }

    #[test]
    fn test_swedish_grammar() {
        let mut recorder = Recorder::default();
        Lexer::new(&SE, &mut recorder)
            .scan("Egenskap: Konto\nScenario: Inloggning\n  Givet en användare\n  Så ser de en panel\n");
        assert_eq!(
            recorder.events,
            [
                "feature[Egenskap:Konto]@1",
                "scenario[Scenario:Inloggning]@2",
                "step[Given:Givet:en användare]@3",
                "step[Then:Så:ser de en panel]@4",
                "eof",
            ]
        );
    }
}
