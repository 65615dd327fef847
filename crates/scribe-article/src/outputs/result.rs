use serde::{Deserialize, Serialize};

use crate::segment::{PARAGRAPH_DELIMITER, paragraphs};

/// A generated article split into its summary and its body.
///
/// Both fields come from one source text: `summary` is the first non-empty
/// paragraph, `body` the remaining paragraphs joined by a blank line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ArticleResult {
    /// Self-contained summary paragraph.
    pub summary: String,
    /// Article text following the summary. Serialised as `article`.
    #[serde(rename = "article")]
    pub body: String,
}

impl ArticleResult {
    /// Segment `text` into summary and body.
    ///
    /// * two or more paragraphs – first is the summary, the rest the body;
    /// * one paragraph – it becomes the summary, the body stays empty;
    /// * blank text – both fields are empty.
    pub fn from_text(text: &str) -> Self {
        Self::from_paragraphs(&paragraphs(text))
    }

    pub(crate) fn from_paragraphs(parts: &[&str]) -> Self {
        match parts.split_first() {
            Some((summary, rest)) => Self {
                summary: (*summary).to_owned(),
                body: rest.join(PARAGRAPH_DELIMITER),
            },
            None => Self::default(),
        }
    }

    /// `true` when neither a summary nor a body was produced.
    pub fn is_empty(&self) -> bool {
        self.summary.is_empty() && self.body.is_empty()
    }
}
