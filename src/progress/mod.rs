pub mod reporter;

pub use reporter::{ProgressEvent, report_progress};
