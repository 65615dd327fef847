//! Paragraph segmentation of generated text.

/// Two consecutive newlines separate paragraphs. Carriage returns are not
/// normalised.
pub const PARAGRAPH_DELIMITER: &str = "\n\n";

/// Split `text` on [`PARAGRAPH_DELIMITER`], trim every piece and drop the
/// ones that end up empty.
pub fn paragraphs(text: &str) -> Vec<&str> {
    text.split(PARAGRAPH_DELIMITER)
        .map(str::trim)
        .filter(|paragraph| !paragraph.is_empty())
        .collect()
}
