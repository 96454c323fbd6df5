use crate::error::ExtractError;
use crate::extraction::PageTextSource;
use crate::model::Page;

/// Extract all text from a document as a single string.
///
/// Pages with no extractable text (empty or whitespace-only) are left out
/// of the concatenation; the remaining pages are joined with a blank line
/// in document order. A document with no extractable text at all (e.g. a
/// scanned image PDF) yields an empty string.
pub fn document_text(bytes: &[u8], source: &dyn PageTextSource) -> Result<String, ExtractError> {
    let pages = source.page_texts(bytes)?;
    let parts: Vec<String> = pages
        .into_iter()
        .filter(|text| !text.trim().is_empty())
        .collect();
    Ok(parts.join("\n\n"))
}

/// Extract text from a document, one record per page.
///
/// Unlike [`document_text`], blank pages are kept (with an empty `text`
/// and `char_count` 0) so the output length always equals the page count
/// of the source document.
pub fn text_by_page(bytes: &[u8], source: &dyn PageTextSource) -> Result<Vec<Page>, ExtractError> {
    let pages = source.page_texts(bytes)?;
    Ok(pages
        .into_iter()
        .enumerate()
        .map(|(i, text)| Page::new(i + 1, text))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedPages(Vec<&'static str>);

    impl PageTextSource for FixedPages {
        fn page_texts(&self, _bytes: &[u8]) -> Result<Vec<String>, ExtractError> {
            Ok(self.0.iter().map(|s| s.to_string()).collect())
        }

        fn backend_name(&self) -> &str {
            "fixed"
        }
    }

    #[test]
    fn blank_pages_are_dropped_from_concatenation() {
        let source = FixedPages(vec!["first page", "   \n", "third page"]);
        let text = document_text(&[], &source).unwrap();
        assert_eq!(text, "first page\n\nthird page");
    }

    #[test]
    fn blank_pages_are_kept_in_per_page_output() {
        let source = FixedPages(vec!["first page", "", "third page"]);
        let pages = text_by_page(&[], &source).unwrap();
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[1].number, 2);
        assert_eq!(pages[1].text, "");
        assert_eq!(pages[1].char_count, 0);
    }

    #[test]
    fn document_with_no_text_yields_empty_string() {
        let source = FixedPages(vec!["", "  "]);
        assert_eq!(document_text(&[], &source).unwrap(), "");
    }
}
