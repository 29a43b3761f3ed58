use serde::Serialize;

pub const REFUSAL_VERSION: &str = "docvisit.v0";

/// Run-mode refusal codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RefusalCode {
    /// A requested document could not be resolved to a supported kind.
    #[serde(rename = "E_BAD_INPUT")]
    BadInput,
}

/// Detail for a document argument that did not resolve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BadDocumentDetail {
    /// Zero-based position among the DOCUMENT arguments.
    pub position: usize,
    pub argument: String,
    pub error: String,
    pub supported: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RefusalDetail {
    BadDocument(BadDocumentDetail),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefusalBody {
    pub code: RefusalCode,
    pub message: String,
    pub detail: RefusalDetail,
    pub next_command: Option<String>,
}

/// Refusal envelope emitted to stdout on exit 2.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefusalEnvelope {
    pub version: String,
    pub outcome: String,
    pub refusal: RefusalBody,
}

pub fn build_envelope(
    code: RefusalCode,
    message: &str,
    detail: RefusalDetail,
    next_command: Option<String>,
) -> RefusalEnvelope {
    RefusalEnvelope {
        version: REFUSAL_VERSION.to_owned(),
        outcome: "REFUSAL".to_owned(),
        refusal: RefusalBody {
            code,
            message: message.to_owned(),
            detail,
            next_command,
        },
    }
}
