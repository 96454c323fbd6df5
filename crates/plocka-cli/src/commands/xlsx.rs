use std::path::PathBuf;

use plocka_core::error::ExtractError;

use crate::output;

pub fn run(
    input_file: PathBuf,
    summary: bool,
    output_format: &str,
    output_file: Option<PathBuf>,
) -> Result<(), ExtractError> {
    if summary {
        let sheets = plocka_core::extract_sheets(&input_file)?;

        match output_file {
            Some(path) => {
                output::json::write(&sheets, &path)?;
                eprintln!("Extracted {} sheet(s), written to {}", sheets.len(), path.display());
            }
            None => match output_format {
                "json" => output::json::print(&sheets)?,
                _ => print!("{}", output::table::format_summaries(&sheets)),
            },
        }
    } else {
        let data = plocka_core::read_xlsx(&input_file)?;

        match output_file {
            Some(path) => {
                output::json::write(&data, &path)?;
                eprintln!("Extracted {} sheet(s), written to {}", data.len(), path.display());
            }
            None => match output_format {
                "json" => output::json::print(&data)?,
                _ => print!("{}", output::table::format_sheets(&data)),
            },
        }
    }

    Ok(())
}
