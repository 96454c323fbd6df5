use std::path::PathBuf;

/// Boxed backend error, kept as the chained cause of a format failure.
pub type SourceError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to read PDF: {0}")]
    InvalidPdf(#[source] SourceError),

    #[error("failed to read workbook: {0}")]
    InvalidWorkbook(#[source] SourceError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
