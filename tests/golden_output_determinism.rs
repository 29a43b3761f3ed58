use std::process::{Command, Output};

fn run_docvisit(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_docvisit"))
        .args(args)
        .output()
        .expect("run docvisit binary")
}

#[test]
fn default_output_is_deterministic_across_runs() {
    let first = run_docvisit(&[]);
    let second = run_docvisit(&[]);
    let third = run_docvisit(&[]);

    assert_eq!(first.status.code(), Some(0));
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(second.stdout, third.stdout);
    assert_eq!(
        first.stdout,
        b"Parsed ZIP Parsed EXCEL Parsed DOC Parsed PDF \n".to_vec()
    );
}

#[test]
fn jsonl_output_is_deterministic_across_runs() {
    let first = run_docvisit(&["--jsonl", "doc", "pdf"]);
    let second = run_docvisit(&["--jsonl", "doc", "pdf"]);

    assert_eq!(first.status.code(), Some(0));
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn library_dispatch_matches_binary_output() {
    use docvisit::document::default_documents;
    use docvisit::output::write_line;
    use docvisit::parser::DocumentParser;
    use docvisit::pipeline::dispatch;

    let results = dispatch(&default_documents(), &mut DocumentParser);
    let mut buffer: Vec<u8> = Vec::new();
    write_line(&mut buffer, &results).expect("write line");

    assert_eq!(buffer, run_docvisit(&[]).stdout);
}
