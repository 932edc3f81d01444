use thiserror::Error;

/// Failures surfaced by the document I/O boundary.
///
/// The parser core itself has no fatal error path: empty input and pattern
/// misses produce unset fields, never errors. Everything here happens before
/// text reaches the extractor.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to read '{path}'")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("text extraction failed for '{path}': {message}")]
    TextExtraction { path: String, message: String },

    #[error("unsupported file type: '{0}' (expected .pdf or .txt)")]
    UnsupportedFile(String),
}
