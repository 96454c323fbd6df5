use crate::error::ExtractError;
use crate::extraction::PageTextSource;

/// PDF extraction backend using the pure-Rust `pdf-extract` crate.
pub struct PdfTextBackend;

impl PdfTextBackend {
    pub fn new() -> Self {
        PdfTextBackend
    }
}

impl Default for PdfTextBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl PageTextSource for PdfTextBackend {
    fn page_texts(&self, bytes: &[u8]) -> Result<Vec<String>, ExtractError> {
        pdf_extract::extract_text_from_mem_by_pages(bytes)
            .map_err(|e| ExtractError::InvalidPdf(Box::new(e)))
    }

    fn backend_name(&self) -> &str {
        "pdf-extract"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_are_rejected_with_chained_cause() {
        let backend = PdfTextBackend::new();
        let err = backend.page_texts(b"This is not a PDF").unwrap_err();
        match err {
            ExtractError::InvalidPdf(_) => {
                assert!(std::error::Error::source(&err).is_some());
            }
            other => panic!("expected InvalidPdf, got {other:?}"),
        }
    }
}
