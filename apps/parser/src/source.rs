use std::path::Path;

use crate::errors::ExtractError;

/// Text acquisition for the extractor. The parser core never decodes
/// documents itself; this collaborator recovers plain text from a file and
/// is the only hard-failure path in the crate (unreadable files, image-only
/// PDFs, unsupported extensions).
pub fn read_document(path: &Path) -> Result<String, ExtractError> {
    match extension_of(path).as_deref() {
        Some("pdf") => pdf_extract::extract_text(path).map_err(|e| ExtractError::TextExtraction {
            path: path.display().to_string(),
            message: e.to_string(),
        }),
        Some("txt") | Some("text") => {
            std::fs::read_to_string(path).map_err(|e| ExtractError::Io {
                path: path.display().to_string(),
                source: e,
            })
        }
        _ => Err(ExtractError::UnsupportedFile(path.display().to_string())),
    }
}

/// Whether a batch walk should pick this file up.
pub fn is_supported(path: &Path) -> bool {
    matches!(extension_of(path).as_deref(), Some("pdf" | "txt" | "text"))
}

fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}
