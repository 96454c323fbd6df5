mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "plocka",
    version,
    about = "Extract text from PDF documents and data from xlsx workbooks"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract text from a PDF document
    Pdf {
        /// Path to the PDF file
        input_file: PathBuf,

        /// Emit one record per page instead of a single text block
        #[arg(long)]
        by_page: bool,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write extracted output to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Extract data from an xlsx workbook
    Xlsx {
        /// Path to the xlsx file
        input_file: PathBuf,

        /// Emit per-sheet summaries with row/column counts
        #[arg(long)]
        summary: bool,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write extracted output to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Pdf {
            input_file,
            by_page,
            output,
            out,
        } => commands::pdf::run(input_file, by_page, &output, out),
        Commands::Xlsx {
            input_file,
            summary,
            output,
            out,
        } => commands::xlsx::run(input_file, summary, &output, out),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
