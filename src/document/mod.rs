pub mod dispatch;

pub use dispatch::{document_from_path, document_from_token};
use serde::Serialize;
use std::fmt;

/// The closed set of document kinds understood by the parser.
///
/// Variants carry no payload. The label returned by [`Document::description`]
/// is the only thing that distinguishes one kind from another in output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Document {
    #[serde(rename = "ZIP")]
    Zip,
    #[serde(rename = "EXCEL")]
    Excel,
    #[serde(rename = "DOC")]
    Doc,
    #[serde(rename = "PDF")]
    Pdf,
}

impl Document {
    /// Every kind, in the fixed construction order.
    pub const ALL: [Document; 4] = [Document::Zip, Document::Excel, Document::Doc, Document::Pdf];

    pub fn description(self) -> &'static str {
        match self {
            Document::Zip => "ZIP",
            Document::Excel => "EXCEL",
            Document::Doc => "DOC",
            Document::Pdf => "PDF",
        }
    }

    /// Tokens accepted on the command line for this kind, lowercase.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Document::Zip => &["zip"],
            Document::Excel => &["excel", "xlsx", "xls"],
            Document::Doc => &["doc", "docx"],
            Document::Pdf => &["pdf"],
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// The document sequence used when no documents are requested explicitly.
pub fn default_documents() -> Vec<Document> {
    Document::ALL.to_vec()
}
