//! The terminal session: open state, line buffer, input box, history and
//! tab completion.
//!
//! Key handling is expressed over [`SessionKey`] rather than a backend event
//! type, so the whole state machine runs without a terminal attached.

use crate::interpreter::{Command, Interpreter};
use folio_core::OutputLine;

/// The keys the session reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionKey {
    Up,
    Down,
    Tab,
    Enter,
    Backspace,
    Char(char),
    /// Anything else; only resets the completion cycle
    Other,
}

/// What a submitted line did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Blank input, echoed as a bare prompt
    Blank,
    /// Output appended to the buffer
    Appended,
    /// The buffer was wiped
    Cleared,
    /// The terminal closed itself
    Closed,
}

#[derive(Debug)]
pub struct TerminalSession {
    interpreter: Interpreter,
    is_open: bool,
    booted: bool,
    lines: Vec<OutputLine>,
    input: String,
    /// Submitted lines, oldest first
    history: Vec<String>,
    /// Offset from the newest history entry, `None` when not browsing
    history_cursor: Option<usize>,
    tab_matches: Vec<&'static str>,
    tab_cursor: usize,
}

impl TerminalSession {
    pub fn new(interpreter: Interpreter) -> Self {
        Self {
            interpreter,
            is_open: false,
            booted: false,
            lines: Vec::new(),
            input: String::new(),
            history: Vec::new(),
            history_cursor: None,
            tab_matches: Vec::new(),
            tab_cursor: 0,
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn lines(&self) -> &[OutputLine] {
        &self.lines
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn history_cursor(&self) -> Option<usize> {
        self.history_cursor
    }

    pub fn tab_matches(&self) -> &[&'static str] {
        &self.tab_matches
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    /// Open the terminal. The first open seeds the buffer with the boot lines.
    pub fn open(&mut self) {
        if !self.booted {
            self.lines = self.interpreter.boot_lines();
            self.booted = true;
        }
        self.is_open = true;
        tracing::debug!("terminal opened");
    }

    pub fn close(&mut self) {
        self.is_open = false;
        self.input.clear();
        self.reset_tab();
        tracing::debug!("terminal closed");
    }

    pub fn toggle(&mut self) {
        if self.is_open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Feed one key. Returns the submission outcome for `Enter`.
    pub fn handle_key(&mut self, key: SessionKey) -> Option<Submission> {
        if key != SessionKey::Tab {
            self.reset_tab();
        }
        match key {
            SessionKey::Up => self.history_up(),
            SessionKey::Down => self.history_down(),
            SessionKey::Tab => self.complete(),
            SessionKey::Enter => return Some(self.submit()),
            SessionKey::Backspace => {
                self.input.pop();
            }
            SessionKey::Char(ch) => self.input.push(ch),
            SessionKey::Other => {}
        }
        None
    }

    /// Replace the input box contents, as a paste would.
    pub fn set_input(&mut self, text: &str) {
        self.reset_tab();
        self.input = text.to_string();
    }

    fn history_up(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let newest = self.history.len() - 1;
        let cursor = self.history_cursor.map_or(0, |c| (c + 1).min(newest));
        self.history_cursor = Some(cursor);
        self.input = self.history[newest - cursor].clone();
    }

    fn history_down(&mut self) {
        match self.history_cursor {
            None | Some(0) => {
                self.history_cursor = None;
                self.input.clear();
            }
            Some(cursor) => {
                let cursor = cursor - 1;
                self.history_cursor = Some(cursor);
                self.input = self.history[self.history.len() - 1 - cursor].clone();
            }
        }
    }

    /// Tab completion over command names. Once several matches are found,
    /// repeated Tab presses cycle through them until another key is pressed.
    fn complete(&mut self) {
        if !self.tab_matches.is_empty() {
            self.tab_cursor = (self.tab_cursor + 1) % self.tab_matches.len();
            self.input = self.tab_matches[self.tab_cursor].to_string();
            return;
        }

        let partial = self.input.trim().to_lowercase();
        if partial.is_empty() {
            return;
        }

        let matches = Command::completions(&partial);
        match matches.as_slice() {
            [] => {}
            [only] => self.input = only.to_string(),
            [first, ..] => {
                self.input = first.to_string();
                self.lines.push(OutputLine::system(format!(
                    "  Matches: {}",
                    matches.join(", ")
                )));
                self.tab_matches = matches;
                self.tab_cursor = 0;
            }
        }
    }

    fn reset_tab(&mut self) {
        self.tab_matches.clear();
        self.tab_cursor = 0;
    }

    /// Run the current input through the interpreter.
    pub fn submit(&mut self) -> Submission {
        let input = std::mem::take(&mut self.input);
        let trimmed = input.trim();
        if trimmed.is_empty() {
            self.lines.push(OutputLine::input("$ "));
            return Submission::Blank;
        }

        let output = self.interpreter.interpret(trimmed, &self.history);
        self.history.push(trimmed.to_string());
        self.history_cursor = None;

        // Only the bare word clears; `clear foo` is echoed like any other line.
        if trimmed.eq_ignore_ascii_case("clear") {
            self.lines.clear();
            return Submission::Cleared;
        }
        if output.iter().any(OutputLine::is_exit) {
            self.close();
            return Submission::Closed;
        }

        self.lines.push(OutputLine::input(format!("$ {trimmed}")));
        self.lines.extend(output);
        Submission::Appended
    }

    /// Submit `line` as if it had been typed. Used by `--exec`.
    pub fn run_line(&mut self, line: &str) -> Submission {
        self.set_input(line);
        self.submit()
    }
}
