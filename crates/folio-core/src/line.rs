use serde::{Deserialize, Serialize};
use std::fmt;

/// Text of the line a command returns to ask the shell to close the terminal.
/// The shell intercepts it and never renders it.
pub const EXIT_SENTINEL: &str = "__EXIT__";

/// Display kind of a terminal line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Input,
    Output,
    Error,
    System,
    Ascii,
    Success,
}

impl LineKind {
    pub fn as_str(self) -> &'static str {
        match self {
            LineKind::Input => "input",
            LineKind::Output => "output",
            LineKind::Error => "error",
            LineKind::System => "system",
            LineKind::Ascii => "ascii",
            LineKind::Success => "success",
        }
    }
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One rendered row of terminal text. `text` may itself contain newlines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputLine {
    pub kind: LineKind,
    pub text: String,
}

impl OutputLine {
    pub fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn input(text: impl Into<String>) -> Self {
        Self::new(LineKind::Input, text)
    }

    pub fn output(text: impl Into<String>) -> Self {
        Self::new(LineKind::Output, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(LineKind::Error, text)
    }

    pub fn system(text: impl Into<String>) -> Self {
        Self::new(LineKind::System, text)
    }

    pub fn ascii(text: impl Into<String>) -> Self {
        Self::new(LineKind::Ascii, text)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(LineKind::Success, text)
    }

    pub fn exit() -> Self {
        Self::system(EXIT_SENTINEL)
    }

    /// Only a system line carries the sentinel; echoed user text never does.
    pub fn is_exit(&self) -> bool {
        self.kind == LineKind::System && self.text == EXIT_SENTINEL
    }
}

impl fmt::Display for OutputLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
