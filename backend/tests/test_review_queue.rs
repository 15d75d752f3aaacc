//! Tests for the human-review queue

use chrono::NaiveDate;
use subrogation_workflow_core::catalog::demo_exception_cases;
use subrogation_workflow_core::{
    ReviewDecision, ReviewError, ReviewQueue, ReviewStatus, ReviewSubmission,
};

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 8, 28).unwrap()
}

fn submission(decision: Option<ReviewDecision>, comments: &str) -> ReviewSubmission {
    ReviewSubmission {
        decision,
        comments: comments.to_string(),
    }
}

#[test]
fn test_demo_queue_partitions() {
    let queue = ReviewQueue::new(demo_exception_cases());
    assert_eq!(queue.cases().len(), 3);
    assert_eq!(queue.pending().len(), 1);
    assert_eq!(queue.pending()[0].id, "exc-002");
    assert_eq!(queue.reviewed().len(), 2);
    assert_eq!(queue.accuracy_rate(), Some(50.0));
}

#[test]
fn test_confirming_review_marks_corrected() {
    let mut queue = ReviewQueue::new(demo_exception_cases());
    let case = queue
        .submit_review(
            "exc-002",
            submission(Some(ReviewDecision::AiCorrect), "  Dual coverage confirmed.  "),
            "Alex Rivera",
            day(),
        )
        .unwrap();

    assert_eq!(case.status, ReviewStatus::Corrected);
    assert_eq!(case.reviewer_comments.as_deref(), Some("Dual coverage confirmed."));
    assert_eq!(case.reviewer.as_deref(), Some("Alex Rivera"));
    assert_eq!(case.date_reviewed, Some(day()));
    assert_eq!(
        case.reviewer_decision.as_deref(),
        Some(ReviewDecision::AiCorrect.label())
    );

    assert!(queue.pending().is_empty());
    // Two of three decided cases now confirm the AI
    let rate = queue.accuracy_rate().unwrap();
    assert!((rate - 200.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_rejecting_review_marks_reviewed() {
    let mut queue = ReviewQueue::new(demo_exception_cases());
    queue
        .submit_review(
            "exc-002",
            submission(Some(ReviewDecision::AiIncorrect), "Single coverage only"),
            "Alex Rivera",
            day(),
        )
        .unwrap();
    assert_eq!(queue.get("exc-002").unwrap().status, ReviewStatus::Reviewed);
    assert!((queue.accuracy_rate().unwrap() - 100.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_needs_more_info_stays_pending() {
    let mut queue = ReviewQueue::new(demo_exception_cases());
    queue
        .submit_review(
            "exc-002",
            submission(Some(ReviewDecision::NeedsMoreInfo), "Request spouse plan details"),
            "Alex Rivera",
            day(),
        )
        .unwrap();

    let case = queue.get("exc-002").unwrap();
    assert_eq!(case.status, ReviewStatus::PendingReview);
    assert_eq!(case.reviewer_comments.as_deref(), Some("Request spouse plan details"));
    assert_eq!(queue.accuracy_rate(), Some(50.0));
}

#[test]
fn test_submission_validation() {
    let mut queue = ReviewQueue::new(demo_exception_cases());

    assert_eq!(
        queue
            .submit_review("exc-002", submission(None, "text"), "r", day())
            .unwrap_err(),
        ReviewError::MissingDecision
    );
    assert_eq!(
        queue
            .submit_review(
                "exc-002",
                submission(Some(ReviewDecision::AiCorrect), "   "),
                "r",
                day()
            )
            .unwrap_err(),
        ReviewError::MissingComments
    );
    assert_eq!(
        queue
            .submit_review(
                "exc-999",
                submission(Some(ReviewDecision::AiCorrect), "ok"),
                "r",
                day()
            )
            .unwrap_err(),
        ReviewError::UnknownCase("exc-999".to_string())
    );
    assert_eq!(
        queue
            .submit_review(
                "exc-001",
                submission(Some(ReviewDecision::AiCorrect), "ok"),
                "r",
                day()
            )
            .unwrap_err(),
        ReviewError::AlreadyReviewed("exc-001".to_string())
    );

    // Nothing changed
    assert_eq!(queue.cases(), demo_exception_cases().as_slice());
}
