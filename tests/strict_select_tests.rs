//! Tests for the strict selection operations against a small fixture
//! document, covering the zero/one/many match cases and transitivity of
//! the augmentation through child selections.

use rstest::rstest;
use strict_scraper::{SelectOptions, StrictHtml, StrictQueryable, StrictSelectError};

const SAMPLE: &str = concat!(
    r#"<h1 value="123"><text>H1 Test</text></h1>"#,
    r#"<h2><text>H2 Test 1</text></h2>"#,
    r#"<h2>H2 Text 2</h2>"#,
);

fn sample() -> StrictHtml {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
    StrictHtml::parse_document(SAMPLE)
}

#[test]
fn strict_select_returns_multiple_matches_in_document_order() {
    let doc = sample();
    let matches = doc.strict_select("h2").unwrap();
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].html(), "<h2><text>H2 Test 1</text></h2>");
    assert_eq!(matches[1].html(), "<h2>H2 Text 2</h2>");
}

#[test]
fn strict_select_returns_single_match() {
    let doc = sample();
    let matches = doc.strict_select("h1").unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(
        matches[0].html(),
        r#"<h1 value="123"><text>H1 Test</text></h1>"#
    );
}

#[test]
fn strict_select_fails_on_zero_matches() {
    let doc = sample();
    assert_eq!(
        doc.strict_select("h3").unwrap_err(),
        StrictSelectError::NoMatches {
            selector: "h3".to_string()
        }
    );
}

#[test]
fn strict_select_works_on_child_nodes() {
    let doc = sample();
    let headings = doc.strict_select("h2").unwrap();
    let inner = headings[0].strict_select("text").unwrap();
    assert_eq!(inner.len(), 1);
    assert_eq!(inner[0].html(), "<text>H2 Test 1</text>");
}

#[test]
fn strict_select_one_returns_the_single_match() {
    let doc = sample();
    let heading = doc.strict_select_one("h1").unwrap();
    assert_eq!(heading.to_string(), r#"<h1 value="123"><text>H1 Test</text></h1>"#);
}

#[test]
fn strict_select_one_equals_loose_select_one_on_unique_match() {
    let doc = sample();
    let strict = doc.strict_select_one("h1").unwrap();
    let loose = doc.select_one("h1").unwrap().unwrap();
    assert_eq!(strict, loose);
}

#[test]
fn strict_select_one_fails_on_zero_matches() {
    let doc = sample();
    assert_eq!(
        doc.strict_select_one("h3").unwrap_err(),
        StrictSelectError::NoMatches {
            selector: "h3".to_string()
        }
    );
}

#[test]
fn strict_select_one_reports_the_observed_count() {
    let doc = sample();
    let err = doc.strict_select_one("h2").unwrap_err();
    assert_eq!(
        err,
        StrictSelectError::AmbiguousMatch {
            selector: "h2".to_string(),
            count: 2
        }
    );
    assert_eq!(err.to_string(), "Found 2 matches for strict_select_one(h2)");
}

#[test]
fn strict_select_one_works_on_child_nodes() {
    let doc = sample();
    let headings = doc.strict_select("h2").unwrap();
    let inner = headings[0].strict_select_one("text").unwrap();
    assert_eq!(inner.html(), "<text>H2 Test 1</text>");
}

#[test]
fn loose_select_allows_zero_matches() {
    let doc = sample();
    assert!(doc.select("h3").unwrap().is_empty());
    assert!(doc.select_one("h3").unwrap().is_none());
}

#[test]
fn select_preserves_document_order_across_selectors() {
    let doc = sample();
    let matches = doc.select("h1, h2").unwrap();
    let names: Vec<_> = matches.iter().map(|node| node.name()).collect();
    assert_eq!(names, ["h1", "h2", "h2"]);
}

#[test]
fn strict_select_honors_a_caller_limit() {
    let doc = sample();
    let matches = doc
        .strict_select_with("h2", &SelectOptions::new().limit(1))
        .unwrap();
    assert_eq!(matches.len(), 1);
}

// A caller limit must never mask a multi-match condition in the
// single-match path: strict_select_one takes no limit and always observes
// the true count.
#[test]
fn strict_select_one_cannot_be_masked_by_a_limit() {
    let doc = sample();
    let limited = doc
        .select_with("h2", &SelectOptions::new().limit(1))
        .unwrap();
    assert_eq!(limited.len(), 1);
    assert_eq!(
        doc.strict_select_one("h2").unwrap_err(),
        StrictSelectError::AmbiguousMatch {
            selector: "h2".to_string(),
            count: 2
        }
    );
}

#[rstest]
#[case("h1", 1)]
#[case("h2", 2)]
#[case("h1, h2", 3)]
#[case("text", 2)]
fn strict_select_match_counts(#[case] selector: &str, #[case] expected: usize) {
    let doc = sample();
    assert_eq!(doc.strict_select(selector).unwrap().len(), expected);
}
