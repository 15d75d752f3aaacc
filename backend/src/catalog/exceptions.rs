//! Cases seeded into the human-review queue

use crate::models::FlagType;
use crate::review::{ExceptionCase, ReviewStatus};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
}

pub fn demo_exception_cases() -> Vec<ExceptionCase> {
    vec![
        ExceptionCase {
            id: "exc-001".to_string(),
            claim_id: "claim-001".to_string(),
            claim_number: "SUB-2024-001".to_string(),
            member_name: "John Anderson".to_string(),
            flagged_reason: "Work-related injury detected".to_string(),
            ai_decision: "Flag for subrogation - workplace injury liability".to_string(),
            reviewer_decision: Some("Incorrect - fully covered by employer plan".to_string()),
            reviewer_comments: Some(
                "The accident occurred at work but the employer plan has comprehensive coverage \
                 with no coordination of benefits needed. AI needs to better distinguish between \
                 workplace accidents with and without third-party liability."
                    .to_string(),
            ),
            status: ReviewStatus::Reviewed,
            date_created: date(2024, 8, 25),
            date_reviewed: Some(date(2024, 8, 26)),
            reviewer: Some("Sarah Johnson".to_string()),
            confidence: 78,
            flag_type: FlagType::WorkplaceInjury,
            highlighted_text: "injured while operating forklift at warehouse facility".to_string(),
            document_source: "Provider Notes - Emergency Room Visit".to_string(),
        },
        ExceptionCase {
            id: "exc-002".to_string(),
            claim_id: "claim-002".to_string(),
            claim_number: "SUB-2024-002".to_string(),
            member_name: "Maria Garcia".to_string(),
            flagged_reason: "Auto accident coordination detected".to_string(),
            ai_decision: "Flag for coordination of benefits - dual coverage".to_string(),
            reviewer_decision: None,
            reviewer_comments: None,
            status: ReviewStatus::PendingReview,
            date_created: date(2024, 8, 26),
            date_reviewed: None,
            reviewer: None,
            confidence: 82,
            flag_type: FlagType::CoordinationOfBenefits,
            highlighted_text: "patient has secondary insurance through spouse employer plan"
                .to_string(),
            document_source: "Member Verification Form".to_string(),
        },
        ExceptionCase {
            id: "exc-003".to_string(),
            claim_id: "claim-003".to_string(),
            claim_number: "SUB-2024-003".to_string(),
            member_name: "David Kim".to_string(),
            flagged_reason: "Third-party liability suggested".to_string(),
            ai_decision: "Flag for subrogation - potential liability claim".to_string(),
            reviewer_decision: Some("Correct - pursuing third-party recovery".to_string()),
            reviewer_comments: Some(
                "Good catch by AI. Property owner liability is clear from incident report."
                    .to_string(),
            ),
            status: ReviewStatus::Corrected,
            date_created: date(2024, 8, 24),
            date_reviewed: Some(date(2024, 8, 25)),
            reviewer: Some("Mark Thompson".to_string()),
            confidence: 91,
            flag_type: FlagType::ThirdPartyLiability,
            highlighted_text: "slipped on wet floor with no warning signs posted".to_string(),
            document_source: "Incident Report".to_string(),
        },
    ]
}
