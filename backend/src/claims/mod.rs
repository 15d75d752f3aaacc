//! Claims dashboard
//!
//! Claim records, status filtering and the headline counts shown above the
//! claims table.
//!
//! CRITICAL: All money values are i64 (cents)

use crate::document::{locate, DocumentRef, HighlightCategory, TextHighlight};
use crate::models::{DocumentType, FlagType};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Prefix of demo PDF assets
pub const PDF_ASSET_PREFIX: &str = "/demo-data/pdfs/";

/// Outcome of automated screening
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimStatus {
    Cleared,
    LowConfidence,
    FlaggedOpportunity,
}

impl ClaimStatus {
    pub const ALL: [ClaimStatus; 3] = [
        ClaimStatus::Cleared,
        ClaimStatus::LowConfidence,
        ClaimStatus::FlaggedOpportunity,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::Cleared => "cleared",
            ClaimStatus::LowConfidence => "low_confidence",
            ClaimStatus::FlaggedOpportunity => "flagged_opportunity",
        }
    }

    /// Short table label
    pub fn label(&self) -> &'static str {
        match self {
            ClaimStatus::Cleared => "Clear",
            ClaimStatus::LowConfidence => "Review",
            ClaimStatus::FlaggedOpportunity => "Opportunity",
        }
    }

    /// Label used in the claim detail view
    pub fn detail_label(&self) -> &'static str {
        match self {
            ClaimStatus::Cleared => "Clear",
            ClaimStatus::LowConfidence => "Needs Review",
            ClaimStatus::FlaggedOpportunity => "Subrogation Opportunity",
        }
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("Unknown claim filter '{0}' (expected all, cleared, low_confidence or flagged_opportunity)")]
pub struct FilterParseError(pub String);

impl FromStr for ClaimStatus {
    type Err = FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ClaimStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| FilterParseError(s.to_string()))
    }
}

/// Why a claim was flagged
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubrogationFlag {
    pub flag_type: FlagType,
    /// Fraction in `[0, 1]`
    pub confidence: f64,
    pub reasoning: String,
    pub highlighted_text: String,
    pub document_source: String,
}

impl SubrogationFlag {
    pub fn highlight_category(&self) -> HighlightCategory {
        match self.flag_type {
            FlagType::AutoAccident => HighlightCategory::AccidentDescription,
            FlagType::WorkplaceInjury | FlagType::ThirdPartyLiability => {
                HighlightCategory::LiabilitySignal
            }
            FlagType::CoordinationOfBenefits => HighlightCategory::CoordinationBenefit,
        }
    }

    /// Confidence as a percentage
    pub fn confidence_pct(&self) -> u8 {
        (self.confidence * 100.0).round().clamp(0.0, 100.0) as u8
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimDocument {
    pub id: String,
    pub doc_type: DocumentType,
    pub title: String,
    /// Either a PDF asset path or inline text
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extracted_text: Option<String>,
    #[serde(default)]
    pub highlights: Vec<TextHighlight>,
}

impl ClaimDocument {
    /// Asset path when the content is a demo PDF
    pub fn pdf_url(&self) -> Option<&str> {
        self.content
            .starts_with(PDF_ASSET_PREFIX)
            .then_some(self.content.as_str())
    }

    /// Text to show: extracted text, or inline content for non-PDF documents
    pub fn text(&self) -> Option<&str> {
        match (&self.extracted_text, self.pdf_url()) {
            (Some(text), _) => Some(text),
            (None, None) => Some(&self.content),
            (None, Some(_)) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteType {
    ProviderNote,
    ReviewerNote,
    SystemNote,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimNote {
    pub id: String,
    pub author: String,
    pub timestamp: NaiveDateTime,
    pub content: String,
    pub note_type: NoteType,
}

/// Claim record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claim {
    pub id: String,
    pub claim_number: String,
    pub member_name: String,
    pub date_of_service: NaiveDate,
    pub provider: String,
    /// Cents
    pub total_amount: i64,
    pub status: ClaimStatus,
    /// Fraction in `[0, 1]`
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subrogation_flag: Option<SubrogationFlag>,
    pub documents: Vec<ClaimDocument>,
    pub notes: Vec<ClaimNote>,
}

impl Claim {
    pub fn primary_document(&self) -> Option<&ClaimDocument> {
        self.documents.first()
    }

    /// Span of the flagged phrase inside the primary document's text
    pub fn flag_highlight(&self) -> Option<TextHighlight> {
        let flag = self.subrogation_flag.as_ref()?;
        let text = self.primary_document()?.text()?;
        locate(
            text,
            &flag.highlighted_text,
            flag.highlight_category(),
            flag.confidence_pct(),
        )
    }

    /// Viewer reference for the primary document, with the flag marked
    ///
    /// Only PDF-backed documents can be opened in the viewer.
    pub fn document_ref(&self) -> Option<DocumentRef> {
        let doc = self.primary_document()?;
        let url = doc.pdf_url()?;
        let mut highlights = doc.highlights.clone();
        if highlights.is_empty() {
            highlights.extend(self.flag_highlight());
        }
        Some(DocumentRef {
            url: url.to_string(),
            title: doc.title.clone(),
            extracted_text: doc.extracted_text.clone(),
            highlights,
        })
    }
}

/// Claims table filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClaimFilter {
    #[default]
    All,
    Status(ClaimStatus),
}

impl ClaimFilter {
    pub fn matches(&self, claim: &Claim) -> bool {
        match self {
            ClaimFilter::All => true,
            ClaimFilter::Status(status) => claim.status == *status,
        }
    }
}

impl FromStr for ClaimFilter {
    type Err = FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(ClaimFilter::All);
        }
        s.parse().map(ClaimFilter::Status)
    }
}

/// Claims matching `filter`, in their original order
pub fn filter_claims(claims: &[Claim], filter: ClaimFilter) -> Vec<&Claim> {
    claims.iter().filter(|c| filter.matches(c)).collect()
}

/// Headline counts for a set of claims
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimSummary {
    pub total: usize,
    pub cleared: usize,
    pub low_confidence: usize,
    pub flagged: usize,
    /// Cents billed on flagged claims
    pub flagged_exposure: i64,
}

impl ClaimSummary {
    pub fn from_claims(claims: &[Claim]) -> Self {
        claims.iter().fold(
            ClaimSummary {
                total: claims.len(),
                ..Default::default()
            },
            |mut acc, claim| {
                match claim.status {
                    ClaimStatus::Cleared => acc.cleared += 1,
                    ClaimStatus::LowConfidence => acc.low_confidence += 1,
                    ClaimStatus::FlaggedOpportunity => {
                        acc.flagged += 1;
                        acc.flagged_exposure += claim.total_amount;
                    }
                }
                acc
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_parse() {
        assert_eq!("all".parse::<ClaimFilter>(), Ok(ClaimFilter::All));
        assert_eq!(
            "low_confidence".parse::<ClaimFilter>(),
            Ok(ClaimFilter::Status(ClaimStatus::LowConfidence))
        );
        assert!("flagged".parse::<ClaimFilter>().is_err());
    }

    #[test]
    fn test_confidence_pct_rounds() {
        let flag = SubrogationFlag {
            flag_type: FlagType::AutoAccident,
            confidence: 0.456,
            reasoning: String::new(),
            highlighted_text: String::new(),
            document_source: String::new(),
        };
        assert_eq!(flag.confidence_pct(), 46);
    }
}
