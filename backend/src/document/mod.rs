//! Document viewer
//!
//! Viewer state for a claim document (PDF or extracted text) and the
//! highlight spans drawn over its text. The viewer only reads; nothing it
//! does feeds back into the workflow simulator.

mod highlight;

pub use highlight::{
    locate, segments, ConfidenceTier, HighlightCategory, HighlightError, Segment, TextHighlight,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A document the viewer can open
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRef {
    /// Relative asset path, e.g. `/demo-data/pdfs/Provider_Claim_Note_Fall.pdf`
    pub url: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extracted_text: Option<String>,
    #[serde(default)]
    pub highlights: Vec<TextHighlight>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    Pdf,
    Text,
}

#[derive(Debug, Error, PartialEq)]
pub enum ViewerError {
    #[error("No document is open")]
    NothingOpen,

    #[error("Document '{0}' has no extracted text")]
    NoExtractedText(String),

    #[error(transparent)]
    Highlight(#[from] HighlightError),
}

/// Open/close/mode state of the viewer
#[derive(Debug, Clone, Default)]
pub struct DocumentViewer {
    current: Option<DocumentRef>,
    mode: ViewMode,
}

impl DocumentViewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open `doc` in PDF mode, replacing whatever was open
    pub fn open(&mut self, doc: DocumentRef) {
        self.current = Some(doc);
        self.mode = ViewMode::Pdf;
    }

    pub fn close(&mut self) {
        self.current = None;
        self.mode = ViewMode::Pdf;
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    pub fn current(&self) -> Option<&DocumentRef> {
        self.current.as_ref()
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Switch view mode; text mode needs extracted text
    pub fn set_mode(&mut self, mode: ViewMode) -> Result<(), ViewerError> {
        let doc = self.current.as_ref().ok_or(ViewerError::NothingOpen)?;
        if mode == ViewMode::Text && doc.extracted_text.is_none() {
            return Err(ViewerError::NoExtractedText(doc.title.clone()));
        }
        self.mode = mode;
        Ok(())
    }

    /// File name offered for download
    pub fn download_name(&self) -> Option<String> {
        let doc = self.current.as_ref()?;
        let name = doc.url.rsplit('/').next().unwrap_or(&doc.url);
        if name.is_empty() {
            Some(doc.title.clone())
        } else {
            Some(name.to_string())
        }
    }

    /// URL to open in a new tab
    pub fn external_url(&self) -> Option<&str> {
        self.current.as_ref().map(|d| d.url.as_str())
    }

    /// Marked text of the open document
    pub fn text_segments(&self) -> Result<Vec<Segment<'_>>, ViewerError> {
        let doc = self.current.as_ref().ok_or(ViewerError::NothingOpen)?;
        let text = doc
            .extracted_text
            .as_deref()
            .ok_or_else(|| ViewerError::NoExtractedText(doc.title.clone()))?;
        Ok(segments(text, &doc.highlights)?)
    }
}
