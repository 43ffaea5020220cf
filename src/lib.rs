pub mod case;
pub mod config;
pub mod error;
pub mod normalize;
pub mod output;
pub mod word;

pub use error::{Error, Result};

use config::{Config, EmptyLines};
use std::fs;
use std::path::Path;

/// Pascal-cases every word of `text`, in order, applying the empty-line policy.
pub fn pascalize_text(text: &str, config: &Config) -> Result<Vec<String>> {
    let mut out = Vec::new();
    for word in normalize::words(text) {
        if word.is_empty() {
            match config.empty_lines {
                EmptyLines::Reject => return Err(Error::MalformedInput { line: word.line }),
                EmptyLines::Skip => continue,
                EmptyLines::Keep => {}
            }
        }
        out.push(case::pascalize(&word.text));
    }
    Ok(out)
}

/// Reads `input`, Pascal-cases each line and appends the result to `output`.
///
/// The whole input is transformed before `output` is opened, so a failed read
/// or a rejected line leaves the output file untouched. Returns the number of
/// lines written.
pub fn run(input: &Path, output: &Path, config: &Config) -> Result<usize> {
    let text = fs::read_to_string(input).map_err(|source| Error::Read {
        path: input.to_path_buf(),
        source,
    })?;
    let lines = pascalize_text(&text, config)?;
    output::append_lines(output, &lines)?;
    Ok(lines.len())
}
