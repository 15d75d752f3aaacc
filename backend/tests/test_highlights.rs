//! Tests for highlight spans and the document viewer

use subrogation_workflow_core::document::{
    locate, segments, ConfidenceTier, HighlightCategory, HighlightError, ViewerError,
};
use subrogation_workflow_core::{DocumentRef, DocumentViewer, TextHighlight, ViewMode};

const TEXT: &str = "Patient fell on wet floor with no warning signs at the store.";

fn span(start: usize, end: usize) -> TextHighlight {
    TextHighlight {
        text: TEXT[start..end].to_string(),
        start_offset: start,
        end_offset: end,
        category: HighlightCategory::LiabilitySignal,
        confidence: 91,
    }
}

fn joined(parts: &[subrogation_workflow_core::document::Segment<'_>]) -> String {
    parts.iter().map(|s| s.text).collect()
}

#[test]
fn test_segments_reassemble_text() {
    let spans = vec![span(16, 25), span(0, 7)];
    let parts = segments(TEXT, &spans).unwrap();

    assert_eq!(joined(&parts), TEXT);
    let marked: Vec<&str> = parts.iter().filter(|s| s.is_marked()).map(|s| s.text).collect();
    assert_eq!(marked, vec!["Patient", "wet floor"]);
}

#[test]
fn test_overlapping_span_skipped() {
    let spans = vec![span(16, 25), span(20, 30)];
    let parts = segments(TEXT, &spans).unwrap();

    assert_eq!(joined(&parts), TEXT);
    assert_eq!(parts.iter().filter(|s| s.is_marked()).count(), 1);
}

#[test]
fn test_empty_span_marks_nothing() {
    let spans = [span(5, 5)];
    let parts = segments(TEXT, &spans).unwrap();
    assert_eq!(parts.len(), 1);
    assert!(!parts[0].is_marked());
}

#[test]
fn test_no_spans_single_plain_segment() {
    let no_spans: [TextHighlight; 0] = [];
    let parts = segments(TEXT, &no_spans).unwrap();
    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0].text, TEXT);
}

#[test]
fn test_invalid_spans_rejected() {
    let mut out_of_range = span(0, 7);
    out_of_range.end_offset = TEXT.len() + 1;
    assert!(matches!(
        segments(TEXT, &[out_of_range]),
        Err(HighlightError::OutOfBounds { .. })
    ));

    let mut inverted = span(0, 7);
    inverted.start_offset = 10;
    assert!(matches!(
        segments(TEXT, &[inverted]),
        Err(HighlightError::InvertedSpan { .. })
    ));

    let accented = "Café visit";
    let mid_char = TextHighlight {
        text: String::new(),
        start_offset: 4,
        end_offset: 6,
        category: HighlightCategory::LiabilitySignal,
        confidence: 50,
    };
    assert_eq!(
        segments(accented, &[mid_char]).unwrap_err(),
        HighlightError::NotCharBoundary { offset: 4 }
    );
}

#[test]
fn test_locate_phrase() {
    let found = locate(
        TEXT,
        "wet floor with no warning signs",
        HighlightCategory::LiabilitySignal,
        91,
    )
    .unwrap();
    assert_eq!(found.start_offset, 16);
    assert_eq!(&TEXT[found.start_offset..found.end_offset], found.text);

    assert!(locate(TEXT, "forklift", HighlightCategory::LiabilitySignal, 91).is_none());
    assert!(locate(TEXT, "", HighlightCategory::LiabilitySignal, 91).is_none());
}

#[test]
fn test_confidence_tiers() {
    assert_eq!(ConfidenceTier::from_confidence(81), ConfidenceTier::High);
    assert_eq!(ConfidenceTier::from_confidence(80), ConfidenceTier::Medium);
    assert_eq!(ConfidenceTier::from_confidence(61), ConfidenceTier::Medium);
    assert_eq!(ConfidenceTier::from_confidence(60), ConfidenceTier::Low);
}

// ============================================================================
// Viewer
// ============================================================================

fn fall_doc(with_text: bool) -> DocumentRef {
    DocumentRef {
        url: "/demo-data/pdfs/Provider_Claim_Note_Fall.pdf".to_string(),
        title: "Provider Claim Note - Fall".to_string(),
        extracted_text: with_text.then(|| TEXT.to_string()),
        highlights: vec![span(16, 47)],
    }
}

#[test]
fn test_viewer_open_close() {
    let mut viewer = DocumentViewer::new();
    assert!(!viewer.is_open());
    assert_eq!(viewer.set_mode(ViewMode::Text), Err(ViewerError::NothingOpen));

    viewer.open(fall_doc(true));
    assert!(viewer.is_open());
    assert_eq!(viewer.mode(), ViewMode::Pdf);
    assert_eq!(viewer.download_name().as_deref(), Some("Provider_Claim_Note_Fall.pdf"));
    assert_eq!(
        viewer.external_url(),
        Some("/demo-data/pdfs/Provider_Claim_Note_Fall.pdf")
    );

    viewer.set_mode(ViewMode::Text).unwrap();
    let parts = viewer.text_segments().unwrap();
    assert_eq!(joined(&parts), TEXT);
    assert_eq!(
        parts.iter().find(|s| s.is_marked()).map(|s| s.text),
        Some("wet floor with no warning signs")
    );

    viewer.close();
    assert!(viewer.current().is_none());
    assert_eq!(viewer.mode(), ViewMode::Pdf);
}

#[test]
fn test_viewer_reopen_resets_mode() {
    let mut viewer = DocumentViewer::new();
    viewer.open(fall_doc(true));
    viewer.set_mode(ViewMode::Text).unwrap();
    viewer.open(fall_doc(true));
    assert_eq!(viewer.mode(), ViewMode::Pdf);
}

#[test]
fn test_text_mode_needs_extracted_text() {
    let mut viewer = DocumentViewer::new();
    viewer.open(fall_doc(false));
    assert!(matches!(
        viewer.set_mode(ViewMode::Text),
        Err(ViewerError::NoExtractedText(_))
    ));
    assert_eq!(viewer.mode(), ViewMode::Pdf);
    assert!(viewer.text_segments().is_err());
}
