use serde::{Deserialize, Serialize};
use std::fmt;

/// One page of an extracted document.
///
/// `number` is 1-based and contiguous; `char_count` counts Unicode
/// scalar values in `text`, not bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub number: usize,
    pub text: String,
    pub char_count: usize,
}

impl Page {
    pub fn new(number: usize, text: String) -> Page {
        let char_count = text.chars().count();
        Page {
            number,
            text,
            char_count,
        }
    }
}

/// A scalar spreadsheet cell value.
///
/// Serialized untagged so JSON output reads as plain scalars
/// (`Empty` becomes `null`), keeping rows usable as tabular data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Empty,
    Bool(bool),
    Int(i64),
    Number(f64),
    Text(String),
    DateTime(String),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Bool(b) => write!(f, "{b}"),
            Cell::Int(i) => write!(f, "{i}"),
            Cell::Number(n) => write!(f, "{n}"),
            Cell::Text(s) => write!(f, "{s}"),
            Cell::DateTime(s) => write!(f, "{s}"),
        }
    }
}

/// One worksheet with its retained rows and size metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetSummary {
    pub name: String,
    pub row_count: usize,
    pub column_count: usize,
    pub data: Vec<Vec<Cell>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_char_count_uses_chars_not_bytes() {
        let page = Page::new(1, "åäö".to_string());
        assert_eq!(page.char_count, 3);
        assert_eq!(page.text.len(), 6);
    }

    #[test]
    fn cell_serializes_as_plain_scalar() {
        let row = vec![
            Cell::Int(1),
            Cell::Text("Alice".into()),
            Cell::Empty,
            Cell::Bool(true),
        ];
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(json, r#"[1,"Alice",null,true]"#);
    }
}
