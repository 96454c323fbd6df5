pub mod document;
pub mod error;
pub mod extraction;
pub mod model;
pub mod workbook;

use std::collections::BTreeMap;
use std::path::Path;

use error::ExtractError;
use extraction::pdf_text::PdfTextBackend;
use extraction::xlsx::XlsxBackend;
use model::{Cell, Page, SheetSummary};

/// Extract all text from a PDF file as a single string.
///
/// Pages without extractable text are omitted; the rest are joined with a
/// blank line in document order. Returns an empty string for a document
/// with no extractable text at all.
pub fn read_pdf(path: impl AsRef<Path>) -> Result<String, ExtractError> {
    let bytes = read_existing(path.as_ref())?;
    document::document_text(&bytes, &PdfTextBackend::new())
}

/// Extract text from a PDF file, one record per page.
///
/// Every page of the source document appears in the output, blank pages
/// included, so the result length equals the document's page count.
pub fn extract_text_by_page(path: impl AsRef<Path>) -> Result<Vec<Page>, ExtractError> {
    let bytes = read_existing(path.as_ref())?;
    document::text_by_page(&bytes, &PdfTextBackend::new())
}

/// Extract all data from an xlsx workbook as a sheet-name-keyed mapping.
///
/// Fully empty rows are dropped; empty cells inside retained rows are
/// kept as explicit markers.
pub fn read_xlsx(
    path: impl AsRef<Path>,
) -> Result<BTreeMap<String, Vec<Vec<Cell>>>, ExtractError> {
    let bytes = read_existing(path.as_ref())?;
    workbook::sheet_data(&bytes, &XlsxBackend::new())
}

/// Extract data from an xlsx workbook, organized by sheet with row and
/// column counts, in the workbook's declared sheet order.
pub fn extract_sheets(path: impl AsRef<Path>) -> Result<Vec<SheetSummary>, ExtractError> {
    let bytes = read_existing(path.as_ref())?;
    workbook::sheet_summaries(&bytes, &XlsxBackend::new())
}

/// Check existence before reading so a missing path surfaces as
/// `NotFound` rather than a bare IO error. The file can still disappear
/// between the check and the read, so a not-found read error maps to
/// `NotFound` as well.
fn read_existing(path: &Path) -> Result<Vec<u8>, ExtractError> {
    if !path.is_file() {
        return Err(ExtractError::NotFound(path.to_path_buf()));
    }
    std::fs::read(path).map_err(|e| read_error(path, e))
}

fn read_error(path: &Path, e: std::io::Error) -> ExtractError {
    if e.kind() == std::io::ErrorKind::NotFound {
        ExtractError::NotFound(path.to_path_buf())
    } else {
        ExtractError::Io(e)
    }
}
