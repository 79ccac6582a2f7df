//! Document extraction — uploaded PDF bytes to plain text.

use crate::errors::AppError;

/// Extracts the concatenated text of all pages from a PDF byte stream.
///
/// Pages with no extractable text contribute nothing; only a document the
/// parser cannot read at all is an error. The result is trimmed, so a
/// scanned-image PDF comes back as an empty string rather than whitespace.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, AppError> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| AppError::UnprocessableEntity(format!("Could not read the PDF: {e}")))?;
    Ok(text.trim().to_string())
}
