use std::process::ExitCode;

fn main() -> ExitCode {
    ExitCode::from(docvisit::run())
}
