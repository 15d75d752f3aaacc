//! `subro-demo queue`: human-review queue

use std::io::Write;

use serde::Serialize;
use subrogation_workflow_core::catalog::demo_exception_cases;
use subrogation_workflow_core::{ExceptionCase, ReviewQueue};

use super::print_json;
use crate::render;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct QueueOutput<'a> {
    pending: Vec<&'a ExceptionCase>,
    reviewed: Vec<&'a ExceptionCase>,
    accuracy_rate: Option<f64>,
}

pub fn list<W: Write>(out: &mut W, json: bool) -> anyhow::Result<()> {
    let queue = ReviewQueue::new(demo_exception_cases());
    if json {
        return print_json(
            out,
            &QueueOutput {
                pending: queue.pending(),
                reviewed: queue.reviewed(),
                accuracy_rate: queue.accuracy_rate(),
            },
        );
    }
    write!(out, "{}", render::review_queue(&queue))?;
    Ok(())
}
