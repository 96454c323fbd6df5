use std::path::Path;

use plocka_core::error::ExtractError;
use serde::Serialize;

pub fn print<T: Serialize>(value: &T) -> Result<(), ExtractError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}

/// Write pretty JSON to a file, regardless of the terminal output format.
pub fn write<T: Serialize>(value: &T, path: &Path) -> Result<(), ExtractError> {
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json)?;
    Ok(())
}
