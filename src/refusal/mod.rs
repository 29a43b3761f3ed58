pub mod codes;

pub use codes::{
    BadDocumentDetail, RefusalBody, RefusalCode, RefusalDetail, RefusalEnvelope, build_envelope,
};
