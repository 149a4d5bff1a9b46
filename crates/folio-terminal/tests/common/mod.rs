// Common test utilities

#![allow(dead_code)]

use folio::interpreter::Interpreter;
use folio::services::navigator::RecordingNavigator;
use folio::services::time_source::TestTimeSource;
use folio::session::TerminalSession;
use folio_core::{builtin, OutputLine};
use std::sync::Arc;

/// An interpreter over the built-in content with a fixed clock, a fixed
/// seed and a navigator that only records.
pub fn interpreter() -> (Interpreter, Arc<RecordingNavigator>) {
    let navigator = RecordingNavigator::shared();
    let interpreter = Interpreter::new(Arc::new(builtin::site().clone()))
        .with_time_source(TestTimeSource::shared())
        .with_navigator(navigator.clone())
        .with_seed(42);
    (interpreter, navigator)
}

pub fn session() -> TerminalSession {
    TerminalSession::new(interpreter().0)
}

pub fn texts(lines: &[OutputLine]) -> Vec<&str> {
    lines.iter().map(|l| l.text.as_str()).collect()
}

/// One `kind | text` row per line, for snapshots.
pub fn transcript(lines: &[OutputLine]) -> String {
    lines
        .iter()
        .map(|l| format!("{:<7}| {}", l.kind.as_str(), l.text))
        .collect::<Vec<_>>()
        .join("\n")
}
