//! `subro-demo review`: submit a review against the demo queue
//!
//! The queue lives in memory, so the submission is reflected only in this
//! command's output.

use std::io::Write;

use anyhow::Context;
use chrono::NaiveDate;
use subrogation_workflow_core::catalog::demo_exception_cases;
use subrogation_workflow_core::{ReviewDecision, ReviewQueue, ReviewSubmission};

use super::print_json;
use crate::render;

pub struct ReviewArgs<'a> {
    pub case_id: &'a str,
    pub decision: ReviewDecision,
    pub comments: &'a str,
    pub reviewer: &'a str,
    pub date: NaiveDate,
}

pub fn submit<W: Write>(out: &mut W, args: ReviewArgs<'_>, json: bool) -> anyhow::Result<()> {
    let mut queue = ReviewQueue::new(demo_exception_cases());
    let submission = ReviewSubmission {
        decision: Some(args.decision),
        comments: args.comments.to_string(),
    };
    let case = queue
        .submit_review(args.case_id, submission, args.reviewer, args.date)
        .with_context(|| format!("reviewing case {}", args.case_id))?
        .clone();

    if json {
        return print_json(out, &case);
    }
    write!(out, "{}", render::review_case(&case))?;
    let accuracy = queue
        .accuracy_rate()
        .map(|r| format!("{:.0}%", r))
        .unwrap_or_else(|| "-".to_string());
    writeln!(out, "AI accuracy: {}", accuracy)?;
    Ok(())
}
