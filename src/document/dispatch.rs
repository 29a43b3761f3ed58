use crate::document::Document;
use std::path::Path;

/// Resolve a document kind from a kind name or file extension.
pub fn document_from_token(token: &str) -> Result<Document, String> {
    let normalized = token.trim().trim_start_matches('.').to_lowercase();

    Document::ALL
        .into_iter()
        .find(|doc| doc.aliases().contains(&normalized.as_str()))
        .ok_or_else(|| format!("unrecognized document kind '{token}'"))
}

/// Resolve a document kind from the extension of a file path.
///
/// Only the extension is inspected; the file itself is never opened.
pub fn document_from_path(path: &Path) -> Result<Document, String> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or_else(|| format!("'{}' has no file extension", path.display()))?;

    document_from_token(extension)
        .map_err(|_| format!("unsupported extension '{extension}' on '{}'", path.display()))
}
