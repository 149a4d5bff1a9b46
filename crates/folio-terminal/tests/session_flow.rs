// Terminal session flows: boot, history, completion, clear and exit

mod common;

use common::{session, texts};
use folio::session::{SessionKey, Submission, TerminalSession};
use folio_core::LineKind;

fn type_text(session: &mut TerminalSession, text: &str) {
    for ch in text.chars() {
        session.handle_key(SessionKey::Char(ch));
    }
}

#[test]
fn first_open_boots_once() {
    let mut session = session();
    session.open();
    let booted = session.lines().len();
    assert!(booted > 0);
    assert_eq!(session.lines()[0].kind, LineKind::Ascii);

    session.close();
    session.open();
    assert_eq!(session.lines().len(), booted);
}

#[test]
fn submitted_line_is_echoed_before_output() {
    let mut session = session();
    session.open();
    let before = session.lines().len();

    type_text(&mut session, "  echo hi  ");
    assert_eq!(session.handle_key(SessionKey::Enter), Some(Submission::Appended));

    let added = &session.lines()[before..];
    assert_eq!(texts(added), vec!["$ echo hi", "hi"]);
    assert_eq!(added[0].kind, LineKind::Input);
    assert_eq!(session.history(), ["echo hi".to_string()]);
    assert!(session.input().is_empty());
}

#[test]
fn history_sees_only_earlier_commands() {
    let mut session = session();
    session.run_line("whoami");
    session.run_line("history");
    let tail: Vec<&str> = texts(session.lines()).into_iter().rev().take(2).collect();
    assert_eq!(tail, vec!["     1  whoami", "$ history"]);
}

#[test]
fn arrow_keys_walk_history() {
    let mut session = session();
    for line in ["help", "skills", "tree"] {
        session.run_line(line);
    }

    session.handle_key(SessionKey::Up);
    assert_eq!(session.input(), "tree");
    session.handle_key(SessionKey::Up);
    session.handle_key(SessionKey::Up);
    session.handle_key(SessionKey::Up);
    assert_eq!(session.input(), "help");

    session.handle_key(SessionKey::Down);
    assert_eq!(session.input(), "skills");
    session.handle_key(SessionKey::Down);
    assert_eq!(session.input(), "tree");
    session.handle_key(SessionKey::Down);
    assert_eq!(session.input(), "");
    assert_eq!(session.history_cursor(), None);
}

#[test]
fn tab_completes_and_cycles() {
    let mut session = session();
    session.open();

    type_text(&mut session, "wh");
    session.handle_key(SessionKey::Tab);
    assert_eq!(session.input(), "whoami");

    session.set_input("th");
    session.handle_key(SessionKey::Tab);
    assert_eq!(session.input(), "theme");
    assert!(texts(session.lines()).contains(&"  Matches: theme, themes"));
    session.handle_key(SessionKey::Tab);
    assert_eq!(session.input(), "themes");
    session.handle_key(SessionKey::Tab);
    assert_eq!(session.input(), "theme");
}

#[test]
fn clear_empties_buffer_but_keeps_history() {
    let mut session = session();
    session.open();
    session.run_line("about");
    assert_eq!(session.run_line("clear"), Submission::Cleared);
    assert!(session.lines().is_empty());
    assert_eq!(session.history().len(), 2);
}

#[test]
fn exit_closes_without_echo() {
    let mut session = session();
    session.open();
    let before = session.lines().len();
    assert_eq!(session.run_line("exit"), Submission::Closed);
    assert!(!session.is_open());
    assert_eq!(session.lines().len(), before);
}

#[test]
fn blank_submit_echoes_bare_prompt() {
    let mut session = session();
    session.open();
    type_text(&mut session, "   ");
    assert_eq!(session.handle_key(SessionKey::Enter), Some(Submission::Blank));
    assert_eq!(session.lines().last().map(|l| l.text.as_str()), Some("$ "));
    assert!(session.history().is_empty());
}
