//! `subro-demo impact`: financial impact breakdown

use std::io::Write;

use serde::Serialize;
use subrogation_workflow_core::catalog::demo_impact_breakdown;
use subrogation_workflow_core::ImpactLine;

use super::print_json;
use crate::render;

#[derive(Serialize)]
struct ImpactOutput<'a> {
    total: i64,
    lines: Vec<ImpactLine<'a>>,
}

pub fn show<W: Write>(out: &mut W, json: bool) -> anyhow::Result<()> {
    let breakdown = demo_impact_breakdown();
    if json {
        return print_json(
            out,
            &ImpactOutput {
                total: breakdown.total(),
                lines: breakdown.lines(),
            },
        );
    }
    write!(out, "{}", render::impact_breakdown(&breakdown))?;
    Ok(())
}
