//! Document text extraction for the two supported resume formats.

use thiserror::Error;

/// Per-document extraction failure. The ranking driver recovers these as
/// skipped documents; they never abort the batch.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("PDF parse failed: {0}")]
    Pdf(String),

    #[error("text is not valid UTF-8: {0}")]
    Decoding(#[from] std::string::FromUtf8Error),
}

/// Supported resume formats, resolved from the uploaded file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Text,
}

impl DocumentFormat {
    /// Resolves the format from the file extension (ASCII case-insensitive).
    /// `None` means unsupported; the caller decides whether to skip or reject.
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let (_, ext) = file_name.rsplit_once('.')?;
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(DocumentFormat::Pdf),
            "txt" => Some(DocumentFormat::Text),
            _ => None,
        }
    }
}

/// Extracts the full text of one document.
///
/// The PDF path concatenates per-page text. A document-level parse failure
/// surfaces as `ExtractionError::Pdf` instead of being folded into the
/// returned text, so callers can always tell content from failure.
pub fn extract_text(bytes: &[u8], format: DocumentFormat) -> Result<String, ExtractionError> {
    match format {
        DocumentFormat::Pdf => pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| ExtractionError::Pdf(e.to_string())),
        DocumentFormat::Text => Ok(String::from_utf8(bytes.to_vec())?),
    }
}
