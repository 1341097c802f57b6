//! Text extraction from uploaded resume documents.
//!
//! Supported inputs are PDF (per-page text) and UTF-8 plain text. The file type
//! is decided from the declared filename only, never by sniffing the bytes.

use std::string::FromUtf8Error;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Unsupported file type: {extension}")]
    UnsupportedType { extension: String },

    #[error("Failed to decode text file as UTF-8: {0}")]
    Decode(#[from] FromUtf8Error),

    /// The bytes could not be parsed as a PDF. Reported as its own error rather
    /// than the generic "Processing failed" used for parser panics.
    #[error("Failed to read PDF: {0}")]
    Pdf(String),
}

/// Text pulled out of a single document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractedText {
    /// One entry per PDF page, in page order. Pages without text are empty strings.
    Pages(Vec<String>),
    Plain(String),
}

impl ExtractedText {
    /// Flattens the document into one string. Pages are joined with a newline so an
    /// empty page still occupies its position.
    pub fn into_joined(self) -> String {
        match self {
            ExtractedText::Pages(pages) => pages.join("\n"),
            ExtractedText::Plain(text) => text,
        }
    }
}

/// Extracts text from `bytes`, dispatching on the extension of `file_name`
/// (case-insensitive).
pub fn extract(bytes: &[u8], file_name: &str) -> Result<ExtractedText, ExtractionError> {
    let lowered = file_name.to_lowercase();

    if lowered.ends_with(".pdf") {
        let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
            .map_err(|e| ExtractionError::Pdf(e.to_string()))?;
        Ok(ExtractedText::Pages(pages))
    } else if lowered.ends_with(".txt") {
        let text = String::from_utf8(bytes.to_vec())?;
        Ok(ExtractedText::Plain(text))
    } else {
        Err(ExtractionError::UnsupportedType {
            extension: extension_of(file_name).to_string(),
        })
    }
}

/// Returns the trailing `.ext` of a filename in its original case, or `""`.
fn extension_of(file_name: &str) -> &str {
    file_name
        .rfind('.')
        .map(|idx| &file_name[idx..])
        .unwrap_or("")
}

#[cfg(test)]
pub mod testing;
