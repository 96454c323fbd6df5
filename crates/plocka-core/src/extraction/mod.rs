pub mod pdf_text;
pub mod xlsx;

use crate::error::ExtractError;
use crate::model::Cell;

/// One worksheet as delivered by a backend: name plus the unfiltered
/// cell grid, before any empty-row filtering is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSheet {
    pub name: String,
    pub rows: Vec<Vec<Cell>>,
}

/// Trait for PDF text extraction backends.
pub trait PageTextSource {
    /// Extract text from document bytes, one string per page, in
    /// document order. Blank pages yield empty strings.
    fn page_texts(&self, bytes: &[u8]) -> Result<Vec<String>, ExtractError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Trait for workbook reading backends.
pub trait WorkbookSource {
    /// Read every worksheet from workbook bytes, in the workbook's
    /// declared sheet order. Cell values are computed values, never
    /// formula source text.
    fn sheets(&self, bytes: &[u8]) -> Result<Vec<RawSheet>, ExtractError>;

    /// Name of this reading backend (for diagnostics).
    fn backend_name(&self) -> &str;
}
