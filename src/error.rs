//! Error types for document conversion.

/// Result type alias for conversion operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading or converting a document.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error while reading a source file or writing output
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not a readable ZIP archive
    #[error("not a readable docx archive: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// The archive lacks the main document part
    #[error("no word/document.xml in archive: {0}")]
    MissingDocumentPart(String),

    /// The document XML could not be parsed
    #[error("malformed document XML: {0}")]
    Xml(#[from] quick_xml::Error),

    /// JSON output could not be serialized
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
