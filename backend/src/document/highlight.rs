//! Highlight spans over extracted document text
//!
//! Spans are byte offsets into the text. Marking is non-destructive: the
//! segments produced by [`segments`] concatenate back to the exact input.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What a highlighted phrase signals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HighlightCategory {
    LiabilitySignal,
    AccidentDescription,
    CoordinationBenefit,
}

impl HighlightCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            HighlightCategory::LiabilitySignal => "liability_signal",
            HighlightCategory::AccidentDescription => "accident_description",
            HighlightCategory::CoordinationBenefit => "coordination_benefit",
        }
    }
}

/// Display tier for a highlight's confidence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceTier {
    /// > 80
    High,
    /// > 60
    Medium,
    Low,
}

impl ConfidenceTier {
    pub fn from_confidence(confidence: u8) -> Self {
        if confidence > 80 {
            ConfidenceTier::High
        } else if confidence > 60 {
            ConfidenceTier::Medium
        } else {
            ConfidenceTier::Low
        }
    }
}

/// A marked span of document text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextHighlight {
    pub text: String,
    pub start_offset: usize,
    pub end_offset: usize,
    pub category: HighlightCategory,
    /// Percentage
    pub confidence: u8,
}

impl TextHighlight {
    pub fn tier(&self) -> ConfidenceTier {
        ConfidenceTier::from_confidence(self.confidence)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum HighlightError {
    #[error("Highlight {start}..{end} exceeds text length {len}")]
    OutOfBounds { start: usize, end: usize, len: usize },

    #[error("Highlight start {start} is after end {end}")]
    InvertedSpan { start: usize, end: usize },

    #[error("Highlight offset {offset} is not on a character boundary")]
    NotCharBoundary { offset: usize },
}

/// One run of text, marked or plain
#[derive(Debug, Clone, PartialEq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub highlight: Option<&'a TextHighlight>,
}

impl Segment<'_> {
    pub fn is_marked(&self) -> bool {
        self.highlight.is_some()
    }
}

fn validate(text: &str, h: &TextHighlight) -> Result<(), HighlightError> {
    if h.start_offset > h.end_offset {
        return Err(HighlightError::InvertedSpan {
            start: h.start_offset,
            end: h.end_offset,
        });
    }
    if h.end_offset > text.len() {
        return Err(HighlightError::OutOfBounds {
            start: h.start_offset,
            end: h.end_offset,
            len: text.len(),
        });
    }
    for offset in [h.start_offset, h.end_offset] {
        if !text.is_char_boundary(offset) {
            return Err(HighlightError::NotCharBoundary { offset });
        }
    }
    Ok(())
}

/// Split `text` into plain and marked segments
///
/// Spans are applied in start order. A span overlapping one already applied
/// is skipped; empty spans mark nothing.
///
/// # Example
/// ```
/// use subrogation_workflow_core::document::{segments, HighlightCategory, TextHighlight};
///
/// let text = "Patient was rear-ended at intersection.";
/// let spans = vec![TextHighlight {
///     text: "rear-ended".to_string(),
///     start_offset: 12,
///     end_offset: 22,
///     category: HighlightCategory::AccidentDescription,
///     confidence: 87,
/// }];
///
/// let parts = segments(text, &spans).unwrap();
/// assert_eq!(parts.len(), 3);
/// assert_eq!(parts[1].text, "rear-ended");
/// assert!(parts[1].is_marked());
/// ```
pub fn segments<'a>(
    text: &'a str,
    highlights: &'a [TextHighlight],
) -> Result<Vec<Segment<'a>>, HighlightError> {
    for h in highlights {
        validate(text, h)?;
    }

    let mut ordered: Vec<&TextHighlight> = highlights.iter().collect();
    ordered.sort_by_key(|h| (h.start_offset, h.end_offset));

    let mut out = Vec::new();
    let mut cursor = 0;
    for h in ordered {
        if h.start_offset == h.end_offset || h.start_offset < cursor {
            continue;
        }
        if h.start_offset > cursor {
            out.push(Segment {
                text: &text[cursor..h.start_offset],
                highlight: None,
            });
        }
        out.push(Segment {
            text: &text[h.start_offset..h.end_offset],
            highlight: Some(h),
        });
        cursor = h.end_offset;
    }
    if cursor < text.len() {
        out.push(Segment {
            text: &text[cursor..],
            highlight: None,
        });
    }
    Ok(out)
}

/// Span covering the first occurrence of `phrase`, if any
pub fn locate(
    text: &str,
    phrase: &str,
    category: HighlightCategory,
    confidence: u8,
) -> Option<TextHighlight> {
    if phrase.is_empty() {
        return None;
    }
    let start = text.find(phrase)?;
    Some(TextHighlight {
        text: phrase.to_string(),
        start_offset: start,
        end_offset: start + phrase.len(),
        category,
        confidence,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(ConfidenceTier::from_confidence(81), ConfidenceTier::High);
        assert_eq!(ConfidenceTier::from_confidence(80), ConfidenceTier::Medium);
        assert_eq!(ConfidenceTier::from_confidence(61), ConfidenceTier::Medium);
        assert_eq!(ConfidenceTier::from_confidence(60), ConfidenceTier::Low);
    }

    #[test]
    fn test_empty_text_no_segments() {
        assert!(segments("", &[]).unwrap().is_empty());
    }
}
