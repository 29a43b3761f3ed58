use std::io::Write;

/// Write results on a single line, each followed by one space.
pub fn write_line(out: &mut dyn Write, results: &[String]) -> Result<(), String> {
    for result in results {
        write!(out, "{result} ")
            .map_err(|error| format!("failed to write result '{result}': {error}"))?;
    }
    out.write_all(b"\n")
        .map_err(|error| format!("failed to write line terminator: {error}"))?;

    out.flush()
        .map_err(|error| format!("failed to flush output: {error}"))?;

    Ok(())
}
