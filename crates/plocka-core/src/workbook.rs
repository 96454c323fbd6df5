use std::collections::BTreeMap;

use crate::error::ExtractError;
use crate::extraction::WorkbookSource;
use crate::model::{Cell, SheetSummary};

/// Extract every worksheet as a name-keyed mapping of filtered rows.
///
/// Fully empty rows are dropped; retained rows keep their original cell
/// order, with empty cells inside them represented as explicit
/// [`Cell::Empty`] markers so row widths stay consistent.
pub fn sheet_data(
    bytes: &[u8],
    source: &dyn WorkbookSource,
) -> Result<BTreeMap<String, Vec<Vec<Cell>>>, ExtractError> {
    let sheets = source.sheets(bytes)?;
    Ok(sheets
        .into_iter()
        .map(|sheet| (sheet.name, retained_rows(sheet.rows)))
        .collect())
}

/// Extract every worksheet with size metadata, in workbook-declared order.
///
/// `row_count` counts retained (non-empty) rows; `column_count` is the
/// width of the widest retained row, 0 for a sheet with no retained rows.
pub fn sheet_summaries(
    bytes: &[u8],
    source: &dyn WorkbookSource,
) -> Result<Vec<SheetSummary>, ExtractError> {
    let sheets = source.sheets(bytes)?;
    Ok(sheets
        .into_iter()
        .map(|sheet| {
            let data = retained_rows(sheet.rows);
            let column_count = data.iter().map(|row| row.len()).max().unwrap_or(0);
            SheetSummary {
                name: sheet.name,
                row_count: data.len(),
                column_count,
                data,
            }
        })
        .collect())
}

/// Keep only rows with at least one non-empty cell.
///
/// A whitespace-only text cell still counts as non-empty; only
/// [`Cell::Empty`] marks an absent value.
fn retained_rows(rows: Vec<Vec<Cell>>) -> Vec<Vec<Cell>> {
    rows.into_iter()
        .filter(|row| row.iter().any(|cell| !cell.is_empty()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::RawSheet;

    struct FixedSheets(Vec<RawSheet>);

    impl WorkbookSource for FixedSheets {
        fn sheets(&self, _bytes: &[u8]) -> Result<Vec<RawSheet>, ExtractError> {
            Ok(self.0.clone())
        }

        fn backend_name(&self) -> &str {
            "fixed"
        }
    }

    fn text(s: &str) -> Cell {
        Cell::Text(s.to_string())
    }

    #[test]
    fn fully_empty_rows_are_dropped() {
        let rows = vec![
            vec![text("Metric"), text("Value")],
            vec![Cell::Empty, Cell::Empty],
            vec![text("Headcount"), Cell::Int(12)],
        ];
        let filtered = retained_rows(rows);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[1][0], text("Headcount"));
    }

    #[test]
    fn whitespace_text_counts_as_non_empty() {
        let rows = vec![vec![text("  "), Cell::Empty]];
        assert_eq!(retained_rows(rows).len(), 1);
    }

    #[test]
    fn empty_cells_inside_retained_rows_are_kept() {
        let rows = vec![vec![text("Alice"), Cell::Empty, Cell::Int(1)]];
        let filtered = retained_rows(rows);
        assert_eq!(filtered[0].len(), 3);
        assert_eq!(filtered[0][1], Cell::Empty);
    }

    #[test]
    fn summaries_report_zero_columns_for_empty_sheet() {
        let source = FixedSheets(vec![RawSheet {
            name: "Blank".into(),
            rows: vec![vec![Cell::Empty, Cell::Empty]],
        }]);
        let summaries = sheet_summaries(&[], &source).unwrap();
        assert_eq!(summaries[0].row_count, 0);
        assert_eq!(summaries[0].column_count, 0);
    }

    #[test]
    fn summaries_keep_workbook_sheet_order() {
        let source = FixedSheets(vec![
            RawSheet {
                name: "Zulu".into(),
                rows: vec![vec![text("z")]],
            },
            RawSheet {
                name: "Alpha".into(),
                rows: vec![vec![text("a")]],
            },
        ]);
        let summaries = sheet_summaries(&[], &source).unwrap();
        let names: Vec<&str> = summaries.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Zulu", "Alpha"]);
    }
}
