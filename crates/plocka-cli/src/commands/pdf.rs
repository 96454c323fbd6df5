use std::path::PathBuf;

use plocka_core::error::ExtractError;

use crate::output;

pub fn run(
    input_file: PathBuf,
    by_page: bool,
    output_format: &str,
    output_file: Option<PathBuf>,
) -> Result<(), ExtractError> {
    if by_page {
        let pages = plocka_core::extract_text_by_page(&input_file)?;

        match output_file {
            Some(path) => {
                output::json::write(&pages, &path)?;
                eprintln!("Extracted {} page(s), written to {}", pages.len(), path.display());
            }
            None => match output_format {
                "json" => output::json::print(&pages)?,
                _ => print!("{}", output::table::format_pages(&pages)),
            },
        }
    } else {
        let text = plocka_core::read_pdf(&input_file)?;

        match output_file {
            Some(path) => {
                output::json::write(&text, &path)?;
                eprintln!("Extracted {} char(s), written to {}", text.chars().count(), path.display());
            }
            None => match output_format {
                "json" => output::json::print(&text)?,
                _ => println!("{text}"),
            },
        }
    }

    Ok(())
}
