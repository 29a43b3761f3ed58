#![forbid(unsafe_code)]

pub mod cli;
pub mod document;
pub mod output;
pub mod parser;
pub mod pipeline;
pub mod progress;
pub mod refusal;

/// Run the docvisit CLI. Returns an exit code (0 or 2).
pub fn run() -> u8 {
    use clap::Parser;
    use cli::Cli;

    // Parse CLI args (handles --version and --help via clap, then exits)
    let cli = Cli::parse();

    // Handle flags that cause immediate exit
    if cli.describe {
        return handle_describe();
    }
    if cli.list {
        return handle_list();
    }

    handle_run_mode(&cli).exit_code()
}

/// Handle --describe flag: print operator.json and exit.
fn handle_describe() -> u8 {
    let operator = serde_json::json!({
        "name": "docvisit",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Parse a sequence of documents through a single visitor",
        "author": "CMD+RVL",
        "input_format": "ARGS",
        "output_format": ["TEXT", "JSONL"],
        "stdin_support": false,
        "file_support": true,
        "documents": document::Document::ALL,
    });

    if let Ok(json) = serde_json::to_string_pretty(&operator) {
        println!("{}", json);
        0
    } else {
        eprintln!("Error: Failed to serialize operator metadata");
        2
    }
}

/// Handle --list flag: print supported document kinds and exit.
fn handle_list() -> u8 {
    for doc in document::Document::ALL {
        println!("{} ({})", doc.description(), doc.aliases().join(", "));
    }
    0
}

/// Default run mode: dispatch documents and write the results to stdout.
fn handle_run_mode(cli: &cli::Cli) -> cli::Outcome {
    use cli::Outcome;
    use document::default_documents;
    use output::{result_record, write_jsonl, write_line};
    use parser::DocumentParser;
    use pipeline::dispatch_with;
    use progress::{ProgressEvent, report_progress};
    use std::io;
    use std::time::Instant;

    let docs = if cli.no_defaults {
        Vec::new()
    } else if cli.documents.is_empty() {
        default_documents()
    } else {
        match resolve_documents(&cli.documents) {
            Ok(docs) => docs,
            Err(refusal) => {
                output_refusal_envelope(&refusal);
                return Outcome::Refusal;
            }
        }
    };

    let started = Instant::now();
    let total = docs.len() as u64;
    let mut parser = DocumentParser;
    let results = dispatch_with(&docs, &mut parser, |index, _| {
        if cli.progress {
            report_progress(&ProgressEvent::new(
                index as u64 + 1,
                total,
                started.elapsed().as_millis() as u64,
            ));
        }
    });

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let written = if cli.jsonl {
        let records: Vec<serde_json::Value> = docs
            .iter()
            .zip(&results)
            .enumerate()
            .map(|(index, (doc, result))| result_record(index, *doc, result))
            .collect();
        write_jsonl(&mut out, &records)
    } else {
        write_line(&mut out, &results)
    };

    match written {
        Ok(()) => Outcome::Success,
        Err(error) => {
            eprintln!("Error: {error}");
            Outcome::Refusal
        }
    }
}

/// Resolve DOCUMENT arguments in order, refusing on the first one that does not resolve.
fn resolve_documents(
    arguments: &[String],
) -> Result<Vec<document::Document>, refusal::RefusalEnvelope> {
    use document::{Document, document_from_path, document_from_token};
    use refusal::{BadDocumentDetail, RefusalCode, RefusalDetail, build_envelope};
    use std::path::Path;

    arguments
        .iter()
        .enumerate()
        .map(|(position, argument)| {
            let path = Path::new(argument);
            let resolved = if path.extension().is_some() {
                document_from_path(path)
            } else {
                document_from_token(argument)
            };

            resolved.map_err(|error| {
                build_envelope(
                    RefusalCode::BadInput,
                    "Unrecognized document",
                    RefusalDetail::BadDocument(BadDocumentDetail {
                        position,
                        argument: argument.clone(),
                        error,
                        supported: Document::ALL
                            .iter()
                            .map(|doc| doc.description().to_owned())
                            .collect(),
                    }),
                    Some("docvisit --list".to_owned()),
                )
            })
        })
        .collect()
}

/// Output a refusal envelope as JSON to stdout.
fn output_refusal_envelope(refusal: &refusal::RefusalEnvelope) {
    if let Ok(json) = serde_json::to_string(refusal) {
        println!("{}", json);
    }
}
