use std::io::Cursor;

use calamine::{Data, Reader, Xlsx};

use crate::error::ExtractError;
use crate::extraction::{RawSheet, WorkbookSource};
use crate::model::Cell;

/// Workbook reading backend for the modern xlsx container, using calamine.
///
/// Opens the workbook values-only: formula cells yield their last computed
/// value. Legacy binary xls files are rejected by the container check and
/// surface as `InvalidWorkbook`.
pub struct XlsxBackend;

impl XlsxBackend {
    pub fn new() -> Self {
        XlsxBackend
    }
}

impl Default for XlsxBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkbookSource for XlsxBackend {
    fn sheets(&self, bytes: &[u8]) -> Result<Vec<RawSheet>, ExtractError> {
        let cursor = Cursor::new(bytes);
        let mut workbook: Xlsx<_> = calamine::open_workbook_from_rs(cursor)
            .map_err(|e| ExtractError::InvalidWorkbook(Box::new(e)))?;

        let mut sheets = Vec::new();
        for name in workbook.sheet_names() {
            let range = workbook
                .worksheet_range(&name)
                .map_err(|e| ExtractError::InvalidWorkbook(Box::new(e)))?;

            let rows: Vec<Vec<Cell>> = range
                .rows()
                .map(|row| row.iter().map(convert_cell).collect())
                .collect();

            sheets.push(RawSheet { name, rows });
        }

        Ok(sheets)
    }

    fn backend_name(&self) -> &str {
        "calamine"
    }
}

fn convert_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Int(*i),
        Data::Bool(b) => Cell::Bool(*b),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(t) => Cell::DateTime(t.to_string()),
            None => Cell::Number(dt.as_f64()),
        },
        Data::DateTimeIso(s) => Cell::DateTime(s.clone()),
        Data::DurationIso(s) => Cell::Text(s.clone()),
        Data::Error(e) => Cell::Text(format!("{e}")),
    }
}
