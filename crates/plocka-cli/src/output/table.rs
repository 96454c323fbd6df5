use std::collections::BTreeMap;

use plocka_core::model::{Cell, Page, SheetSummary};

pub fn format_pages(pages: &[Page]) -> String {
    let mut out = String::new();
    for page in pages {
        out.push_str(&format!(
            "=== Page {} ({} chars) ===\n",
            page.number, page.char_count
        ));
        out.push_str(&page.text);
        if !page.text.ends_with('\n') {
            out.push('\n');
        }
        out.push('\n');
    }
    out
}

pub fn format_sheets(data: &BTreeMap<String, Vec<Vec<Cell>>>) -> String {
    let mut out = String::new();
    for (name, rows) in data {
        out.push_str(&format!("=== Sheet: {name} ===\n"));
        for row in rows {
            out.push_str(&format_row(row));
            out.push('\n');
        }
        out.push('\n');
    }
    out
}

pub fn format_summaries(sheets: &[SheetSummary]) -> String {
    let mut out = String::new();
    for sheet in sheets {
        out.push_str(&format!(
            "=== Sheet: {} ({} rows, {} cols) ===\n",
            sheet.name, sheet.row_count, sheet.column_count
        ));
        for row in &sheet.data {
            out.push_str(&format_row(row));
            out.push('\n');
        }
        out.push('\n');
    }
    out
}

fn format_row(row: &[Cell]) -> String {
    row.iter()
        .map(|cell| cell.to_string())
        .collect::<Vec<_>>()
        .join(" | ")
}
