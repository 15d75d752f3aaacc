//! `subro-demo document`: show a claim's primary document

use std::io::Write;

use anyhow::Context;
use subrogation_workflow_core::catalog::demo_claims;
use subrogation_workflow_core::{DocumentViewer, ViewMode};

use crate::render;

pub fn show<W: Write>(out: &mut W, claim_ref: &str, mode: ViewMode) -> anyhow::Result<()> {
    let claims = demo_claims();
    let claim = claims
        .iter()
        .find(|c| c.claim_number == claim_ref || c.id == claim_ref)
        .with_context(|| format!("no claim '{}'", claim_ref))?;
    let document = claim
        .primary_document()
        .with_context(|| format!("claim {} has no documents", claim.claim_number))?;

    let Some(doc_ref) = claim.document_ref() else {
        // Inline note without a PDF: nothing to open in the viewer
        writeln!(out, "{}", document.title)?;
        writeln!(out, "{}", document.text().unwrap_or_default())?;
        return Ok(());
    };

    let mut viewer = DocumentViewer::new();
    viewer.open(doc_ref);
    viewer.set_mode(mode)?;

    writeln!(out, "{}", document.title)?;
    match viewer.mode() {
        ViewMode::Pdf => {
            writeln!(out, "Open: {}", viewer.external_url().unwrap_or_default())?;
            writeln!(
                out,
                "Download as: {}",
                viewer.download_name().unwrap_or_default()
            )?;
        }
        ViewMode::Text => {
            let parts = viewer.text_segments()?;
            writeln!(out, "{}", render::segments(&parts))?;
        }
    }
    if let Some(flag) = &claim.subrogation_flag {
        writeln!(
            out,
            "Flag: {} ({}%) from {}",
            flag.flag_type.label(),
            flag.confidence_pct(),
            flag.document_source
        )?;
    }
    Ok(())
}
