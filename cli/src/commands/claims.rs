//! `subro-demo claims`: dashboard table and summary

use std::io::Write;

use serde::Serialize;
use subrogation_workflow_core::catalog::demo_claims;
use subrogation_workflow_core::{filter_claims, Claim, ClaimFilter, ClaimSummary};

use super::print_json;
use crate::render;

#[derive(Serialize)]
struct ClaimsOutput<'a> {
    summary: ClaimSummary,
    claims: Vec<&'a Claim>,
}

pub fn list<W: Write>(out: &mut W, filter: ClaimFilter, json: bool) -> anyhow::Result<()> {
    let claims = demo_claims();
    let shown = filter_claims(&claims, filter);
    // Summary always covers the whole book, like the dashboard header
    let summary = ClaimSummary::from_claims(&claims);
    tracing::debug!(?filter, shown = shown.len(), "claims filtered");

    if json {
        return print_json(
            out,
            &ClaimsOutput {
                summary,
                claims: shown,
            },
        );
    }
    write!(out, "{}", render::claims_table(&shown))?;
    write!(out, "{}", render::claim_summary(&summary))?;
    Ok(())
}
