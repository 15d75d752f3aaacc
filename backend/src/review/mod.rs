//! Human-review queue
//!
//! Cases the pipeline flagged with low confidence wait here for a reviewer.
//! A review records the reviewer's verdict on the AI decision; confirmed
//! decisions count toward the AI accuracy rate.

use crate::models::FlagType;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Review state of a case
///
/// `Corrected` is a case whose AI decision the reviewer confirmed (the
/// recovery is being pursued); `Reviewed` is one the reviewer overturned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    PendingReview,
    Reviewed,
    Corrected,
}

impl ReviewStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewStatus::PendingReview => "pending_review",
            ReviewStatus::Reviewed => "reviewed",
            ReviewStatus::Corrected => "corrected",
        }
    }
}

/// Reviewer verdict on the AI decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewDecision {
    AiCorrect,
    AiIncorrect,
    NeedsMoreInfo,
}

impl ReviewDecision {
    pub fn label(&self) -> &'static str {
        match self {
            ReviewDecision::AiCorrect => "AI was correct - pursue subrogation",
            ReviewDecision::AiIncorrect => "AI was incorrect - no subrogation needed",
            ReviewDecision::NeedsMoreInfo => "Needs additional information",
        }
    }

    fn resulting_status(&self) -> ReviewStatus {
        match self {
            ReviewDecision::AiCorrect => ReviewStatus::Corrected,
            ReviewDecision::AiIncorrect => ReviewStatus::Reviewed,
            ReviewDecision::NeedsMoreInfo => ReviewStatus::PendingReview,
        }
    }
}

impl FromStr for ReviewDecision {
    type Err = ReviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "correct" => Ok(ReviewDecision::AiCorrect),
            "incorrect" => Ok(ReviewDecision::AiIncorrect),
            "needs_more_info" => Ok(ReviewDecision::NeedsMoreInfo),
            other => Err(ReviewError::UnknownDecision(other.to_string())),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ReviewError {
    #[error("Unknown review case: {0}")]
    UnknownCase(String),

    #[error("A review decision must be selected")]
    MissingDecision,

    #[error("Review comments must not be empty")]
    MissingComments,

    #[error("Case {0} has already been reviewed")]
    AlreadyReviewed(String),

    #[error("Unknown review decision '{0}' (expected correct, incorrect or needs_more_info)")]
    UnknownDecision(String),
}

/// A flagged case awaiting or having received human review
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExceptionCase {
    pub id: String,
    pub claim_id: String,
    pub claim_number: String,
    pub member_name: String,
    pub flagged_reason: String,
    pub ai_decision: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewer_decision: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewer_comments: Option<String>,
    pub status: ReviewStatus,
    pub date_created: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_reviewed: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewer: Option<String>,
    /// Percentage
    pub confidence: u8,
    pub flag_type: FlagType,
    pub highlighted_text: String,
    pub document_source: String,
}

/// Review form contents
#[derive(Debug, Clone, Default)]
pub struct ReviewSubmission {
    pub decision: Option<ReviewDecision>,
    pub comments: String,
}

/// In-memory review queue
#[derive(Debug, Clone, Default)]
pub struct ReviewQueue {
    cases: Vec<ExceptionCase>,
}

impl ReviewQueue {
    pub fn new(cases: Vec<ExceptionCase>) -> Self {
        Self { cases }
    }

    pub fn cases(&self) -> &[ExceptionCase] {
        &self.cases
    }

    pub fn get(&self, case_id: &str) -> Option<&ExceptionCase> {
        self.cases.iter().find(|c| c.id == case_id)
    }

    pub fn pending(&self) -> Vec<&ExceptionCase> {
        self.cases
            .iter()
            .filter(|c| c.status == ReviewStatus::PendingReview)
            .collect()
    }

    pub fn reviewed(&self) -> Vec<&ExceptionCase> {
        self.cases
            .iter()
            .filter(|c| c.status != ReviewStatus::PendingReview)
            .collect()
    }

    /// Share of decided cases where the AI was confirmed, as a percentage
    ///
    /// `None` until at least one case has been decided.
    pub fn accuracy_rate(&self) -> Option<f64> {
        let reviewed = self.reviewed();
        if reviewed.is_empty() {
            return None;
        }
        let confirmed = reviewed
            .iter()
            .filter(|c| c.status == ReviewStatus::Corrected)
            .count();
        Some(confirmed as f64 / reviewed.len() as f64 * 100.0)
    }

    /// Record a review for a pending case
    ///
    /// `NeedsMoreInfo` keeps the case pending but stores the comments.
    pub fn submit_review(
        &mut self,
        case_id: &str,
        submission: ReviewSubmission,
        reviewer: &str,
        date: NaiveDate,
    ) -> Result<&ExceptionCase, ReviewError> {
        let decision = submission.decision.ok_or(ReviewError::MissingDecision)?;
        let comments = submission.comments.trim();
        if comments.is_empty() {
            return Err(ReviewError::MissingComments);
        }

        let case = self
            .cases
            .iter_mut()
            .find(|c| c.id == case_id)
            .ok_or_else(|| ReviewError::UnknownCase(case_id.to_string()))?;

        if case.status != ReviewStatus::PendingReview {
            tracing::warn!(case_id, "review rejected: case already decided");
            return Err(ReviewError::AlreadyReviewed(case_id.to_string()));
        }

        case.status = decision.resulting_status();
        case.reviewer_decision = Some(decision.label().to_string());
        case.reviewer_comments = Some(comments.to_string());
        case.reviewer = Some(reviewer.to_string());
        case.date_reviewed = Some(date);

        tracing::info!(
            case_id,
            reviewer,
            status = case.status.as_str(),
            "review submitted"
        );
        Ok(case)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_parse() {
        assert_eq!("correct".parse::<ReviewDecision>(), Ok(ReviewDecision::AiCorrect));
        assert_eq!(
            "maybe".parse::<ReviewDecision>(),
            Err(ReviewError::UnknownDecision("maybe".to_string()))
        );
    }

    #[test]
    fn test_empty_queue_has_no_accuracy() {
        assert_eq!(ReviewQueue::default().accuracy_rate(), None);
    }
}
