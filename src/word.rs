/// One input line after trimming, tagged with its line number in the source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub line: usize,
    pub text: String,
}

impl Word {
    pub fn new(line: usize, text: impl Into<String>) -> Self {
        Word {
            line,
            text: text.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
