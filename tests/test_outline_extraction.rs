//! Integration tests for end-to-end outline extraction.
//!
//! These tests feed fragment lists shaped like real extractor output through
//! the public API and check the resulting title and outline.

use outline_oxide::geometry::Rect;
use outline_oxide::layout::TextFragment;
use outline_oxide::{extract_outline, OutlineConfig, OutlinePipeline, OutlineResult};

// ============================================================================
// Helper Functions for Creating Mock Data
// ============================================================================

/// Create a fragment at a vertical position on a page.
fn mock_fragment(text: &str, page: u32, y: f32, size: f32, bold: bool) -> TextFragment {
    let width = text.chars().count() as f32 * size * 0.5;
    TextFragment::new(text, page, Rect::from_points(72.0, y, 72.0 + width, y + size), size)
        .with_bold(bold)
}

/// A short report: title page, numbered sections and body text.
fn create_report() -> Vec<TextFragment> {
    vec![
        mock_fragment("Regional Water Study", 1, 60.0, 24.0, true),
        mock_fragment("Prepared by the planning office in March", 1, 100.0, 12.0, false),
        mock_fragment("1. Introduction", 1, 160.0, 14.0, true),
        mock_fragment("This report is about regional water use.", 1, 190.0, 12.0, false),
        mock_fragment("Water demand has grown every year since", 1, 206.0, 12.0, false),
        mock_fragment("1.1 Study Area", 1, 240.0, 12.0, true),
        mock_fragment("The area covers four counties.", 1, 260.0, 12.0, false),
        mock_fragment("2. Methods", 2, 60.0, 14.0, true),
        mock_fragment("2.1 Data Sources", 2, 90.0, 12.0, true),
        mock_fragment("2.1.1 Rainfall Records", 2, 120.0, 12.0, false),
        mock_fragment("• Gauge readings from 40 sites", 2, 140.0, 12.0, false),
        mock_fragment("KEY FINDINGS", 3, 60.0, 12.0, true),
        mock_fragment("Demand exceeds supply in dry years.", 3, 90.0, 12.0, false),
    ]
}

fn levels_and_texts(result: &OutlineResult) -> Vec<(&str, &str, u32)> {
    result
        .outline
        .iter()
        .map(|e| (e.level.as_str(), e.text.as_str(), e.page))
        .collect()
}

// ============================================================================
// Scenario Tests
// ============================================================================

#[test]
fn test_end_to_end_scenario() {
    let fragments = vec![
        mock_fragment("OVERVIEW", 1, 40.0, 16.0, true),
        mock_fragment("1. Introduction", 1, 80.0, 14.0, false),
        mock_fragment("This is a sentence about things.", 1, 120.0, 12.0, false),
        mock_fragment("1.1 Motivation", 2, 40.0, 12.0, false),
    ];

    let result = extract_outline(&fragments);

    // A single all-caps word is not a heading, so the first H1 is the title
    assert_eq!(result.title, "1. Introduction");
    assert_eq!(
        levels_and_texts(&result),
        vec![("H1", "1. Introduction", 1), ("H2", "1.1 Motivation", 2)]
    );
}

#[test]
fn test_report_outline() {
    let result = extract_outline(&create_report());

    assert_eq!(result.title, "Regional Water Study");
    assert_eq!(
        levels_and_texts(&result),
        vec![
            ("H1", "Regional Water Study", 1),
            ("H1", "1. Introduction", 1),
            ("H2", "1.1 Study Area", 1),
            ("H1", "2. Methods", 2),
            ("H2", "2.1 Data Sources", 2),
            ("H3", "2.1.1 Rainfall Records", 2),
            ("H1", "KEY FINDINGS", 3),
        ]
    );
}

#[test]
fn test_numbered_heading_precision() {
    let fragments = vec![
        mock_fragment("1. Introduction", 1, 10.0, 12.0, false),
        mock_fragment("1.1 Background", 1, 30.0, 12.0, false),
        mock_fragment("1.1.1 Scope", 1, 50.0, 12.0, false),
    ];
    let result = extract_outline(&fragments);
    let levels: Vec<&str> = result.outline.iter().map(|e| e.level.as_str()).collect();
    assert_eq!(levels, vec!["H1", "H2", "H3"]);
}

#[test]
fn test_exclusion_precision() {
    let fragments = vec![
        mock_fragment("and therefore we conclude", 1, 10.0, 30.0, true),
        mock_fragment("1. Results", 1, 50.0, 12.0, false),
    ];
    let result = extract_outline(&fragments);
    assert!(result.outline.iter().all(|e| e.text != "and therefore we conclude"));
    assert_eq!(result.outline.len(), 1);
}

#[test]
fn test_title_fallback_regardless_of_order() {
    let small_first = vec![
        mock_fragment("preliminary draft", 1, 20.0, 14.0, false),
        mock_fragment("harbour survey results", 1, 300.0, 20.0, false),
        mock_fragment("body text here", 1, 400.0, 10.0, false),
        mock_fragment("more body text", 1, 420.0, 10.0, false),
    ];
    let mut large_first = small_first.clone();
    large_first.swap(0, 1);

    // Push the size thresholds out of reach so no fragment becomes an H1
    let config = OutlineConfig::new().with_size_deltas(50.0, 60.0);
    let pipeline = OutlinePipeline::with_config(config);

    assert_eq!(pipeline.extract(&small_first).title, "harbour survey results");
    assert_eq!(pipeline.extract(&large_first).title, "harbour survey results");
}

#[test]
fn test_headings_sorted_into_reading_order() {
    // Extractor emitted page 2 before page 1 and a lower heading first
    let fragments = vec![
        mock_fragment("3. Discussion", 2, 100.0, 12.0, false),
        mock_fragment("2. Methods", 1, 500.0, 12.0, false),
        mock_fragment("1. Introduction", 1, 80.0, 12.0, false),
    ];
    let result = extract_outline(&fragments);
    let texts: Vec<&str> = result.outline.iter().map(|e| e.text.as_str()).collect();
    assert_eq!(texts, vec!["1. Introduction", "2. Methods", "3. Discussion"]);
    // Title is the first H1 in fragment order, not reading order
    assert_eq!(result.title, "3. Discussion");
}

#[test]
fn test_no_headings_title_from_page_one() {
    let fragments = vec![
        mock_fragment("some body text goes on", 1, 100.0, 12.0, false),
        mock_fragment("more body text goes on", 1, 120.0, 12.0, false),
    ];
    let result = extract_outline(&fragments);
    assert!(result.outline.is_empty());
    assert_eq!(result.title, "some body text goes on");
}

#[test]
fn test_no_page_one_fragments() {
    let fragments = vec![mock_fragment("lowercase only text", 3, 10.0, 12.0, false)];
    let result = extract_outline(&fragments);
    assert_eq!(result, OutlineResult::empty());
}

#[test]
fn test_missing_font_sizes_use_defaults() {
    // All sizes unknown: body defaults to 12, thresholds 14/16
    let fragments = vec![
        mock_fragment("Funding Sources", 1, 10.0, 0.0, false),
        mock_fragment("2.4 Grant Terms", 1, 30.0, 0.0, false),
    ];
    let result = extract_outline(&fragments);
    assert_eq!(
        levels_and_texts(&result),
        vec![("H3", "Funding Sources", 1), ("H2", "2.4 Grant Terms", 1)]
    );
}

// ============================================================================
// Fail-soft Boundary
// ============================================================================

#[test]
fn test_empty_input_law() {
    let result = extract_outline(&[]);
    assert_eq!(serde_json::to_string(&result).unwrap(), r#"{"title":"","outline":[]}"#);
}

#[test]
fn test_malformed_fragment_yields_empty_result() {
    let mut fragments = create_report();
    fragments[4].bbox = Rect::from_points(100.0, 50.0, 10.0, 60.0);
    assert_eq!(extract_outline(&fragments), OutlineResult::empty());
}

#[test]
fn test_try_extract_reports_malformed_fragment() {
    let mut fragments = create_report();
    fragments[2].page_num = 0;
    let err = OutlinePipeline::new().try_extract(&fragments).unwrap_err();
    assert!(err.to_string().contains("index 2"));
}

// ============================================================================
// Output Contract
// ============================================================================

#[test]
fn test_json_output_shape() {
    let result = extract_outline(&create_report());
    let value = serde_json::to_value(&result).unwrap();

    let obj = value.as_object().unwrap();
    assert_eq!(obj.len(), 2);
    assert!(obj["title"].is_string());

    for entry in obj["outline"].as_array().unwrap() {
        let entry = entry.as_object().unwrap();
        assert_eq!(entry.len(), 3);
        assert!(["H1", "H2", "H3"].contains(&entry["level"].as_str().unwrap()));
        assert!(entry["text"].is_string());
        assert!(entry["page"].is_u64());
    }
}

#[test]
fn test_parallel_documents() {
    let pipeline = OutlinePipeline::new();
    let report = create_report();
    let expected = pipeline.extract(&report);

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4).map(|_| s.spawn(|| pipeline.extract(&report))).collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
