use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("cannot read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("cannot write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("line {line}: empty word")]
    MalformedInput { line: usize },
}

impl Error {
    /// True for failures of the file system rather than of the input text.
    pub fn is_io(&self) -> bool {
        matches!(self, Error::Read { .. } | Error::Write { .. })
    }
}
