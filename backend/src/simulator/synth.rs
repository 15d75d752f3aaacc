//! Output synthesis
//!
//! Completed stages get an output of their kind's shape. Content is
//! illustrative; only the OCR document is drawn at random.

use crate::models::{
    AgentKind, AgentOutput, DecisionOutput, FinalDecision, FlagType, LiabilityOutput, OcrOutput,
    Priority, Recommendation, Route, RoutingOutput, RulesOutput,
};
use crate::rng::RngManager;

/// Demo PDFs the parser pretends to have read
pub const DEMO_DOCUMENTS: [&str; 5] = [
    "Provider_Claim_Note_AutoAccident.pdf",
    "Provider_Claim_Note_Fall.pdf",
    "Member_Letter_WorkplaceAccident.pdf",
    "COB_Clause_AutoInsurance.pdf",
    "Employer_Letter_SickLeave.pdf",
];

/// Build the output for a stage of `kind` that finished with `confidence`
pub fn synthesize_output(kind: AgentKind, confidence: u8, rng: &mut RngManager) -> AgentOutput {
    match kind {
        AgentKind::OcrParsing => {
            let file = rng.pick(&DEMO_DOCUMENTS).copied().unwrap_or(DEMO_DOCUMENTS[0]);
            AgentOutput::OcrParsing(OcrOutput {
                document_url: format!("/demo-data/pdfs/{}", file),
                extracted_text: "Document text extracted from PDF...".to_string(),
                confidence: 0.95,
            })
        }
        AgentKind::LiabilityDetection => AgentOutput::LiabilityDetection(LiabilityOutput {
            flag_type: FlagType::AutoAccident,
            confidence,
            highlighted_text: "rear-ended at intersection".to_string(),
        }),
        AgentKind::RulesEngine => AgentOutput::RulesEngine(RulesOutput {
            recommendation: Recommendation::PursueSubrogation,
            priority: Priority::High,
            estimated_recovery: 850_000,
        }),
        AgentKind::DecisionAgent => AgentOutput::DecisionAgent(DecisionOutput {
            final_decision: FinalDecision::FlagForSubrogation,
            confidence,
            reasoning: "Clear liability detected".to_string(),
        }),
        AgentKind::WorkflowRouting => AgentOutput::WorkflowRouting(RoutingOutput {
            route: Route::SubrogationQueue,
            assigned_reviewer: "John Smith".to_string(),
            priority: Priority::High,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_produces_matching_output() {
        let mut rng = RngManager::new(1);
        for kind in AgentKind::PIPELINE {
            assert_eq!(synthesize_output(kind, 90, &mut rng).kind(), kind);
        }
    }

    #[test]
    fn test_ocr_document_is_a_demo_pdf() {
        let mut rng = RngManager::new(77);
        for _ in 0..20 {
            match synthesize_output(AgentKind::OcrParsing, 90, &mut rng) {
                AgentOutput::OcrParsing(o) => {
                    let file = o.document_url.trim_start_matches("/demo-data/pdfs/");
                    assert!(DEMO_DOCUMENTS.contains(&file), "unexpected {}", file);
                }
                other => panic!("wrong kind: {:?}", other),
            }
        }
    }
}
