//! `subro-demo workflows`: list the scenario catalog

use std::io::Write;

use serde::Serialize;
use subrogation_workflow_core::{Clock, ScenarioCatalog, SystemClock};

use super::print_json;
use crate::render;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CatalogEntry<'a> {
    workflow_id: &'a str,
    claim_id: &'a str,
    claim_number: &'a str,
    current_step: usize,
}

pub fn list<W: Write>(out: &mut W, json: bool) -> anyhow::Result<()> {
    let catalog = ScenarioCatalog::demo();
    if json {
        let entries: Vec<CatalogEntry<'_>> = catalog
            .scenarios()
            .iter()
            .map(|s| CatalogEntry {
                workflow_id: &s.workflow_id,
                claim_id: &s.claim_id,
                claim_number: &s.claim_number,
                current_step: s.current_step,
            })
            .collect();
        return print_json(out, &entries);
    }
    write!(out, "{}", render::catalog(&catalog, SystemClock.now_ms()))?;
    Ok(())
}
