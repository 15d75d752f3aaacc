//! Tests for claims filtering, summaries and document references

use subrogation_workflow_core::catalog::demo_claims;
use subrogation_workflow_core::claims::PDF_ASSET_PREFIX;
use subrogation_workflow_core::document::HighlightCategory;
use subrogation_workflow_core::{filter_claims, ClaimFilter, ClaimStatus, ClaimSummary};

#[test]
fn test_all_filter_keeps_order() {
    let claims = demo_claims();
    let all = filter_claims(&claims, ClaimFilter::All);
    let numbers: Vec<&str> = all.iter().map(|c| c.claim_number.as_str()).collect();
    assert_eq!(
        numbers,
        vec![
            "CLM-2024-0001",
            "CLM-2024-0002",
            "CLM-2024-0003",
            "CLM-2024-0004",
            "CLM-2024-0005",
            "CLM-2024-0006",
        ]
    );
}

#[test]
fn test_status_filters_partition_claims() {
    let claims = demo_claims();
    let total: usize = ClaimStatus::ALL
        .iter()
        .map(|s| filter_claims(&claims, ClaimFilter::Status(*s)).len())
        .sum();
    assert_eq!(total, claims.len());

    let flagged = filter_claims(&claims, "flagged_opportunity".parse().unwrap());
    assert_eq!(flagged.len(), 3);
    assert!(flagged
        .iter()
        .all(|c| c.status == ClaimStatus::FlaggedOpportunity));
}

#[test]
fn test_unknown_filter_rejected() {
    let err = "opportunity".parse::<ClaimFilter>().unwrap_err();
    assert!(err.to_string().contains("opportunity"));
}

#[test]
fn test_summary_counts_and_exposure() {
    let summary = ClaimSummary::from_claims(&demo_claims());
    assert_eq!(summary.total, 6);
    assert_eq!(summary.cleared, 1);
    assert_eq!(summary.low_confidence, 2);
    assert_eq!(summary.flagged, 3);
    assert_eq!(summary.flagged_exposure, 1_575_000 + 320_000 + 95_000);
}

#[test]
fn test_summary_of_no_claims() {
    assert_eq!(ClaimSummary::from_claims(&[]), ClaimSummary::default());
}

#[test]
fn test_every_flag_phrase_is_found_in_its_document() {
    for claim in demo_claims() {
        if claim.subrogation_flag.is_none() {
            continue;
        }
        let span = claim
            .flag_highlight()
            .unwrap_or_else(|| panic!("{} flag phrase missing", claim.claim_number));
        let text = claim.primary_document().unwrap().text().unwrap();
        assert_eq!(&text[span.start_offset..span.end_offset], span.text);
    }
}

#[test]
fn test_document_ref_carries_flag_highlight() {
    let claims = demo_claims();
    let claim = &claims[0];
    let doc = claim.document_ref().unwrap();

    assert!(doc.url.starts_with(PDF_ASSET_PREFIX));
    assert!(doc.url.ends_with("Provider_Claim_Note_AutoAccident.pdf"));
    assert_eq!(doc.highlights.len(), 1);
    assert_eq!(doc.highlights[0].category, HighlightCategory::AccidentDescription);
    assert_eq!(doc.highlights[0].confidence, 89);
}

#[test]
fn test_inline_document_has_no_viewer_ref() {
    let claims = demo_claims();
    let cleared = claims
        .iter()
        .find(|c| c.status == ClaimStatus::Cleared)
        .unwrap();
    assert!(cleared.subrogation_flag.is_none());
    assert!(cleared.document_ref().is_none());
    assert!(cleared.primary_document().unwrap().text().is_some());
}

#[test]
fn test_status_labels() {
    assert_eq!(ClaimStatus::FlaggedOpportunity.label(), "Opportunity");
    assert_eq!(ClaimStatus::LowConfidence.label(), "Review");
    assert_eq!(ClaimStatus::LowConfidence.detail_label(), "Needs Review");
}
