use serde::Deserialize;

/// What to do with a word that is empty after trimming.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EmptyLines {
    /// Abort with `Error::MalformedInput`.
    #[default]
    Reject,
    /// Drop the line from the output.
    Skip,
    /// Write an empty output line.
    Keep,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub empty_lines: EmptyLines,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            empty_lines: EmptyLines::Reject,
        }
    }
}
