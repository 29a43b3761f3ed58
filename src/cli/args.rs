use clap::Parser;

#[derive(Parser)]
#[command(name = "docvisit", version)]
pub struct Cli {
    /// Documents to parse: kind names (zip, excel, doc, pdf), extensions, or file paths
    /// (default: ZIP EXCEL DOC PDF)
    #[arg(value_name = "DOCUMENT")]
    pub documents: Vec<String>,

    /// Start from an empty document sequence instead of the default four
    #[arg(long, conflicts_with = "documents")]
    pub no_defaults: bool,

    /// Emit one JSON record per result instead of a single line
    #[arg(long)]
    pub jsonl: bool,

    /// Emit progress to stderr
    #[arg(long)]
    pub progress: bool,

    /// List supported document kinds and exit
    #[arg(long)]
    pub list: bool,

    /// Print operator.json and exit
    #[arg(long)]
    pub describe: bool,
}
