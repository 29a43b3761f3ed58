pub mod jsonl;
pub mod line;

pub use jsonl::{result_record, write_jsonl};
pub use line::write_line;
