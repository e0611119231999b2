mod common;

use common::DocxBuilder;
use docwords::config::RulesConfig;
use docwords::trace::TraceReason;
use docwords::{engine, words, Document, DocumentError, ExclusionRules};
use tempfile::TempDir;

fn thesis() -> DocxBuilder {
    DocxBuilder::new()
        .heading_style("Heading1", 0)
        .heading_style("Heading2", 1)
        .plain_style("Caption")
        .paragraph(Some("Heading1"), "Abstract")
        .paragraph(None, "A summary nobody counts.")
        .paragraph(Some("Heading1"), "Introduction")
        .paragraph(None, "Body text A")
        .paragraph(Some("Heading2"), "Background")
        .paragraph(None, "This was shown (Smith, 2014) to work.")
        .paragraph(Some("Caption"), "Figure 1: a diagram")
        .textbox_paragraph("", "Caption text here")
        .paragraph(Some("Heading1"), "Bibliography")
        .paragraph(None, "Body text B")
}

fn thesis_rules() -> ExclusionRules {
    ExclusionRules::with_default_citations()
        .ignore_style("Caption")
        .start_after("Introduction")
        .stop_before("Bibliography")
}

#[test]
fn test_counts_thesis_document() {
    let dir = TempDir::new().unwrap();
    let path = thesis().write(dir.path(), "thesis.docx");

    let document = Document::open(&path).unwrap();
    assert_eq!(document.paragraphs().len(), 10);

    let result = engine::run(&document, &thesis_rules());
    // Introduction(1) + Body text A(3) + Background(1) + citation-stripped sentence(5)
    assert_eq!(result.counted, 10);
    // Abstract(1) + summary(4) + caption(4) + Bibliography(1) + Body text B(3)
    assert_eq!(result.ignored, 13);
    // The text box's VML fallback is not counted a second time
    assert_eq!(result.textbox, 3);
    assert_eq!(result.as_array(), [10, 13, 3, 26]);
}

#[test]
fn test_total_is_sum_of_buckets_and_breakdown_matches() {
    let dir = TempDir::new().unwrap();
    let document = Document::open(thesis().write(dir.path(), "thesis.docx")).unwrap();

    for rules in [
        ExclusionRules::new(),
        ExclusionRules::with_default_citations(),
        thesis_rules(),
        ExclusionRules::new().stop_before("Introduction"),
    ] {
        let result = engine::run(&document, &rules);
        assert_eq!(result.total(), result.counted + result.ignored + result.textbox);
        assert_eq!(result.sections.total(), result.counted);
    }
}

#[test]
fn test_every_paragraph_lands_in_one_bucket() {
    let dir = TempDir::new().unwrap();
    let document = Document::open(thesis().write(dir.path(), "thesis.docx")).unwrap();

    // Without citation stripping, counted + ignored equals the naive count of
    // all inline text, so no paragraph is dropped or counted twice.
    let rules = ExclusionRules::new()
        .ignore_style("Caption")
        .start_after("Introduction")
        .stop_before("Bibliography");
    let result = engine::run(&document, &rules);
    let naive: usize = document
        .paragraphs()
        .iter()
        .map(|p| words::count_tokens(p.text()))
        .sum();
    assert_eq!(result.counted + result.ignored, naive);
}

#[test]
fn test_boundary_scenario() {
    let dir = TempDir::new().unwrap();
    let path = DocxBuilder::new()
        .heading_style("Heading1", 0)
        .paragraph(Some("Heading1"), "Introduction")
        .paragraph(None, "Body text A")
        .paragraph(Some("Heading1"), "Bibliography")
        .paragraph(None, "Body text B")
        .write(dir.path(), "boundary.docx");
    let document = Document::open(path).unwrap();

    let rules = ExclusionRules::new()
        .start_after("Introduction")
        .stop_before("Bibliography");
    let result = engine::run_traced(&document, &rules);

    assert_eq!(result.counted, 4);
    assert_eq!(result.ignored, 4);
    assert_eq!(result.sections.get("Introduction"), Some(4));
    assert_eq!(result.sections.get("Bibliography"), None);

    let ignored: Vec<&str> = result
        .trace
        .iter()
        .filter(|entry| entry.reason == TraceReason::OutsideRegion)
        .map(|entry| entry.text.as_str())
        .collect();
    assert_eq!(ignored, vec!["Bibliography", "Body text B"]);
}

#[test]
fn test_style_exclusion_scenario() {
    let dir = TempDir::new().unwrap();
    let path = DocxBuilder::new()
        .plain_style("Caption")
        .paragraph(Some("Caption"), "Figure 1: a diagram")
        .write(dir.path(), "caption.docx");
    let document = Document::open(path).unwrap();

    let rules = ExclusionRules::new().ignore_style("Caption");
    let result = engine::run(&document, &rules);
    assert_eq!(result.counted, 0);
    assert_eq!(result.ignored, words::count_tokens("Figure 1: a diagram"));
}

#[test]
fn test_citation_stripping_scenario() {
    let dir = TempDir::new().unwrap();
    let text = "This was shown (Smith, 2014) to work.";
    let path = DocxBuilder::new()
        .paragraph(None, text)
        .write(dir.path(), "citation.docx");
    let document = Document::open(path).unwrap();

    let stripped = engine::run(&document, &ExclusionRules::with_default_citations());
    let naive = engine::run(&document, &ExclusionRules::new());
    assert_eq!(naive.counted, 7);
    assert_eq!(stripped.counted, 5);
}

#[test]
fn test_textbox_scenario() {
    let dir = TempDir::new().unwrap();
    let path = DocxBuilder::new()
        .textbox_paragraph("", "Caption text here")
        .write(dir.path(), "textbox.docx");
    let document = Document::open(path).unwrap();

    let result = engine::run_traced(&document, &ExclusionRules::new());
    assert_eq!(result.as_array(), [0, 0, 3, 3]);
    assert_eq!(result.trace[0].reason, TraceReason::Textbox);
    assert_eq!(result.trace[0].text, "Caption text here");
}

#[test]
fn test_text_split_across_runs_is_joined() {
    let dir = TempDir::new().unwrap();
    let path = DocxBuilder::new()
        .split_paragraph(&["Bold", "face and", " plain"])
        .write(dir.path(), "runs.docx");
    let document = Document::open(path).unwrap();

    assert_eq!(document.paragraphs()[0].text(), "Boldface and plain");
    assert_eq!(engine::run(&document, &ExclusionRules::new()).counted, 3);
}

#[test]
fn test_table_text_is_not_counted() {
    let dir = TempDir::new().unwrap();
    let path = DocxBuilder::new()
        .paragraph(None, "one two")
        .table("three four five")
        .write(dir.path(), "table.docx");
    let document = Document::open(path).unwrap();

    assert_eq!(engine::run(&document, &ExclusionRules::new()).counted, 2);
}

#[test]
fn test_missing_styles_part_counts_everything() {
    let dir = TempDir::new().unwrap();
    let path = DocxBuilder::new()
        .without_styles_part()
        .paragraph(Some("Heading1"), "Introduction")
        .paragraph(None, "Body text")
        .write(dir.path(), "nostyles.docx");
    let document = Document::open(path).unwrap();

    // Unknown styles give no outline depth, so the start title is never seen
    let rules = ExclusionRules::new().start_after("Introduction");
    let result = engine::run(&document, &rules);
    assert_eq!(result.counted, 0);
    assert_eq!(result.ignored, 3);
    assert!(document.outline().is_empty());
}

#[test]
fn test_styles_and_outline_listing() {
    let dir = TempDir::new().unwrap();
    let document = Document::open(thesis().write(dir.path(), "thesis.docx")).unwrap();

    let used: Vec<&str> = document.used_styles().into_iter().collect();
    assert_eq!(used, vec!["Caption", "Heading1", "Heading2"]);
    assert_eq!(
        document.outline(),
        vec!["Abstract", "Introduction", "Background", "Bibliography"]
    );
}

#[test]
fn test_rules_from_config_file() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("rules.toml");
    std::fs::write(
        &config_path,
        r#"
ignore_styles = ["Caption"]
start_after = "Introduction"
stop_before = "Bibliography"
"#,
    )
    .unwrap();

    let document = Document::open(thesis().write(dir.path(), "thesis.docx")).unwrap();
    let rules = RulesConfig::load(&config_path)
        .unwrap()
        .into_rules()
        .unwrap();

    assert_eq!(
        engine::run(&document, &rules),
        engine::run(&document, &thesis_rules())
    );
}

#[test]
fn test_repeated_runs_are_identical() {
    let dir = TempDir::new().unwrap();
    let document = Document::open(thesis().write(dir.path(), "thesis.docx")).unwrap();
    let rules = thesis_rules();

    assert_eq!(
        engine::run_traced(&document, &rules),
        engine::run_traced(&document, &rules)
    );
}

#[test]
fn test_invalid_package_is_fatal() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.docx");
    std::fs::write(&path, b"this is not a zip archive").unwrap();

    assert!(matches!(Document::open(&path), Err(DocumentError::Zip(_))));
    assert!(matches!(
        Document::open(dir.path().join("missing.docx")),
        Err(DocumentError::Io(_))
    ));
}
