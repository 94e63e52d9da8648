//! Failure paths
//!
//! Tests for the error taxonomy: syntax diagnostics, empty results, and the
//! guarantee that no partial document escapes a failed parse.

use rstest::rstest;

use featlang::{FeatureParser, LanguageTag, ParserError};

fn parser() -> FeatureParser {
    FeatureParser::new(LanguageTag::new("en").expect("tag"))
}

fn expect_syntax_errors(text: &str) -> Vec<String> {
    match parser().parse(text).expect_err("parse should fail") {
        ParserError::SyntaxErrors { diagnostics } => {
            assert!(!diagnostics.is_empty());
            diagnostics.iter().map(|d| d.message.clone()).collect()
        }
        other => panic!("expected SyntaxErrors, got {other:?}"),
    }
}

// ============================================================================
// Syntax diagnostics
// ============================================================================

#[test]
fn test_two_stray_lines_yield_two_diagnostics() {
    let messages = expect_syntax_errors(
        "Feature: F\nScenario: S\n  Given a step\n  not a step line\n  also not a step\n",
    );
    assert_eq!(messages.len(), 2);
    assert!(messages.iter().all(|m| m == "expected a step, table row or doc string"));
}

#[test]
fn test_diagnostics_carry_positions_in_order() {
    let error = parser()
        .parse("Feature: F\nScenario: S\n  Given a step\n  ???\n  ???\n")
        .expect_err("parse should fail");
    let diagnostics = error.diagnostics();
    assert_eq!(diagnostics.len(), 2);
    assert_eq!(diagnostics[0].position.line, 4);
    assert_eq!(diagnostics[1].position.line, 5);
    assert!(error.has_diagnostics());
}

#[rstest]
#[case("Feature: F\nGiven x\n", "step outside of a scenario")]
#[case("Given x\n", "step outside of a scenario")]
#[case("stray text\n", "unexpected text before the feature header")]
#[case("Feature: F\nFeature: G\n", "duplicate feature header")]
#[case("Feature: F\nBackground:\nGiven x\nBackground:\n", "duplicate background")]
#[case("Scenario: S\n", "scenario outside of a feature")]
#[case(
    "Feature: F\nScenario: S\nExamples:\n",
    "examples are only allowed in a scenario outline"
)]
#[case("Feature: F\nScenario: S\n| a |\n", "table row outside of a step")]
#[case("Feature: F\n| a | b\n", "table row is missing its closing '|'")]
#[case(
    "Feature: F\nScenario: S\nGiven x\n\"\"\"\nstranded\n",
    "doc string is never closed"
)]
#[case("Feature: F\n@orphan\n", "tags are not attached to any element")]
fn test_misplaced_elements(#[case] text: &str, #[case] expected: &str) {
    let messages = expect_syntax_errors(text);
    assert!(
        messages.iter().any(|m| m == expected),
        "missing '{expected}' in {messages:?}"
    );
}

// ============================================================================
// Empty results
// ============================================================================

#[rstest]
#[case("")]
#[case("\n\n\n")]
#[case("# only a comment\n")]
#[case("# language: en\n# nothing else\n")]
fn test_documents_with_no_feature(#[case] text: &str) {
    let error = parser().parse(text).expect_err("parse should fail");
    assert!(matches!(error, ParserError::EmptyResult));
    assert!(!error.has_diagnostics());
}

// ============================================================================
// No partial documents
// ============================================================================

#[test]
fn test_failed_parse_returns_no_document() {
    // The feature header and first step are well-formed, but the stray line
    // must poison the whole parse.
    let result = parser().parse("Feature: F\nScenario: S\n  Given a step\n  ???\n");
    assert!(result.is_err());
}

#[test]
fn test_failures_are_stable_across_calls() {
    let parser = parser();
    let text = "Feature: F\nScenario: S\n  Given a step\n  ???\n";
    let first = expect_messages(&parser, text);
    let second = expect_messages(&parser, text);
    assert_eq!(first, second);
}

fn expect_messages(parser: &FeatureParser, text: &str) -> Vec<String> {
    match parser.parse(text).expect_err("parse should fail") {
        ParserError::SyntaxErrors { diagnostics } => {
            diagnostics.into_iter().map(|d| d.message).collect()
        }
        other => panic!("expected SyntaxErrors, got {other:?}"),
    }
}
