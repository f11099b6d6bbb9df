//! Reading spec lists from files.

use std::error::Error;
use std::path::Path;

/// Read a spec file, returning its non-blank lines trimmed and in file order.
///
/// # Arguments
/// * `file` - Path to the spec file
///
/// # Returns
/// * `Ok(Vec<String>)` - One entry per non-blank line
/// * `Err` - If the file does not exist or can not be read as UTF-8
pub fn read_spec_file<P: AsRef<Path>>(file: P) -> Result<Vec<String>, Box<dyn Error>> {
    let file = file.as_ref();
    if !file.exists() {
        return Err(format!("Spec file does not exist: {}", file.display()).into());
    }

    let text = std::fs::read_to_string(file)
        .map_err(|e| format!("Error reading spec file {}: {e}", file.display()))?;
    let specs = spec_lines(&text);
    log::info!("Read {} spec(s) from {}", specs.len(), file.display());
    Ok(specs)
}

/// Split text into trimmed, non-blank lines.
pub fn spec_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
