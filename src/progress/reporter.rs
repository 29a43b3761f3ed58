use serde::Serialize;
use std::io::{self, Write};

/// Structured progress event emitted to stderr.
#[derive(Debug, Serialize)]
pub struct ProgressEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    pub tool: String,
    pub processed: u64,
    pub total: Option<u64>,
    pub percent: Option<f64>,
    pub elapsed_ms: u64,
}

impl ProgressEvent {
    pub fn new(processed: u64, total: u64, elapsed_ms: u64) -> Self {
        let percent = (total > 0).then(|| processed as f64 * 100.0 / total as f64);
        Self {
            event_type: "progress".to_owned(),
            tool: "docvisit".to_owned(),
            processed,
            total: Some(total),
            percent,
            elapsed_ms,
        }
    }
}

/// Report progress to stderr as JSONL.
pub fn report_progress(event: &ProgressEvent) {
    let mut stderr = io::stderr().lock();
    let _ = write_event_line(&mut stderr, event);
}

fn write_event_line<T: Serialize>(out: &mut dyn Write, event: &T) -> Result<(), String> {
    serde_json::to_writer(&mut *out, event)
        .map_err(|error| format!("failed to serialize progress event: {error}"))?;
    out.write_all(b"\n")
        .map_err(|error| format!("failed to write progress event newline: {error}"))?;
    out.flush()
        .map_err(|error| format!("failed to flush progress event output: {error}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{ProgressEvent, report_progress, write_event_line};
    use serde_json::json;
    use std::io::{Cursor, Error, ErrorKind, Write};

    #[test]
    fn serializes_progress_event() {
        let event = ProgressEvent::new(1, 4, 3);

        assert_eq!(
            serde_json::to_value(event).expect("serialize progress event"),
            json!({
                "type": "progress",
                "tool": "docvisit",
                "processed": 1,
                "total": 4,
                "percent": 25.0,
                "elapsed_ms": 3
            })
        );
    }

    #[test]
    fn percent_is_absent_for_zero_total() {
        let event = ProgressEvent::new(0, 0, 0);
        assert_eq!(event.percent, None);
    }

    #[test]
    fn write_event_line_writes_json_with_newline() {
        let event = ProgressEvent {
            event_type: "progress".to_owned(),
            tool: "docvisit".to_owned(),
            processed: 1,
            total: None,
            percent: None,
            elapsed_ms: 2,
        };
        let mut out = Cursor::new(Vec::new());

        write_event_line(&mut out, &event).expect("write progress event");

        let output = String::from_utf8(out.into_inner()).expect("valid UTF-8 output");
        assert_eq!(
            output,
            "{\"type\":\"progress\",\"tool\":\"docvisit\",\"processed\":1,\"total\":null,\"percent\":null,\"elapsed_ms\":2}\n"
        );
    }

    #[test]
    fn write_event_line_surfaces_write_errors() {
        struct AlwaysFailWriter;

        impl Write for AlwaysFailWriter {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(Error::new(ErrorKind::BrokenPipe, "write failed"))
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let mut writer = AlwaysFailWriter;
        let event = ProgressEvent::new(1, 1, 0);
        let error = write_event_line(&mut writer, &event).expect_err("write should fail");
        assert!(error.contains("failed to serialize progress event"));
    }

    #[test]
    fn report_progress_is_callable() {
        report_progress(&ProgressEvent::new(2, 4, 1));
    }
}
