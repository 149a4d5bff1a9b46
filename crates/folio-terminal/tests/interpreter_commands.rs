// Command interpreter behaviour through the public API

mod common;

use common::{interpreter, texts, transcript};
use folio::interpreter::{Command, COMMANDS};
use folio::services::navigator::LinkTarget;
use folio_core::{LineKind, ThemeId};
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn whoami_panel_snapshot() {
    let (mut interp, _) = interpreter();
    let transcript = transcript(&interp.interpret("whoami", &[]));
    insta::assert_snapshot!("whoami_panel", transcript);
}

#[test]
fn every_listed_command_has_a_manual_page() {
    let (mut interp, _) = interpreter();
    for spec in COMMANDS {
        let lines = interp.interpret(&format!("man {}", spec.name()), &[]);
        assert!(
            lines.iter().all(|l| l.kind != LineKind::Error),
            "man {} failed: {:?}",
            spec.name(),
            texts(&lines)
        );
    }
}

#[test]
fn aliases_dispatch_to_the_same_command() {
    let (mut a, _) = interpreter();
    let (mut b, _) = interpreter();
    assert_eq!(a.interpret("certifications", &[]), b.interpret("certs", &[]));
    assert_eq!(Command::resolve("cv"), Some(Command::Resume));
    assert_eq!(Command::resolve("quit"), Some(Command::Exit));
    assert_eq!(Command::resolve("logout"), None);
}

#[test]
fn command_names_are_case_insensitive() {
    let (mut a, _) = interpreter();
    let (mut b, _) = interpreter();
    assert_eq!(a.interpret("WHOAMI", &[]), b.interpret("whoami", &[]));
}

#[test]
fn unknown_command_reports_name_and_hint() {
    let (mut interp, _) = interpreter();
    let lines = interp.interpret("frobnicate now", &[]);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].kind, LineKind::Error);
    assert!(lines[0].text.contains("frobnicate"));
    assert!(lines[1].text.contains("help"));
}

#[test]
fn theme_command_invokes_injected_setter() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let (interp, _) = interpreter();
    let mut interp = interp.with_theme_setter(move |id| sink.borrow_mut().push(id));

    let ok = interp.interpret("theme OCEAN", &[]);
    assert_eq!(ok[0].kind, LineKind::Success);
    let bad = interp.interpret("theme lava", &[]);
    assert_eq!(bad[0].kind, LineKind::Error);
    assert!(bad[0].text.contains("mining, ocean, nebula"));

    assert_eq!(*seen.borrow(), vec![ThemeId::Ocean]);
}

#[test]
fn link_commands_go_through_navigator() {
    let (mut interp, nav) = interpreter();
    interp.interpret("open github", &[]);
    interp.interpret("email", &[]);
    interp.interpret("repo rag", &[]);

    let opened = nav.opened();
    assert_eq!(opened.len(), 3);
    assert_eq!(
        opened[0],
        (
            "https://github.com/Chandan062311".to_string(),
            LinkTarget::NewContext
        )
    );
    assert!(opened[1].0.starts_with("mailto:"));
    assert_eq!(opened[1].1, LinkTarget::SameContext);
    assert_eq!(opened[2].0, "https://github.com/Chandan062311/Agentic_rag");
}

#[test]
fn unmatched_open_target_opens_nothing() {
    let (mut interp, nav) = interpreter();
    let lines = interp.interpret("open myspace", &[]);
    assert_eq!(texts(&lines), vec!["Not found: \"myspace\""]);
    assert!(nav.opened().is_empty());
}

#[test]
fn echo_keeps_original_case() {
    let (mut interp, _) = interpreter();
    let lines = interp.interpret("echo Hello World", &[]);
    assert_eq!(texts(&lines), vec!["Hello World"]);
}

#[test]
fn history_lists_previous_commands_numbered() {
    let (mut interp, _) = interpreter();
    let history = vec!["help".to_string(), "ls projects".to_string()];
    let lines = interp.interpret("history", &history);
    assert_eq!(texts(&lines), vec!["     1  help", "     2  ls projects"]);
}

#[test]
fn date_uses_injected_clock() {
    let (mut interp, _) = interpreter();
    let lines = interp.interpret("date", &[]);
    assert_eq!(texts(&lines), vec!["  Wed Jan 01 2025 09:30:00 GMT+0000"]);
}

#[test]
fn seeded_interpreters_agree_on_random_output() {
    let (mut a, _) = interpreter();
    let (mut b, _) = interpreter();
    for line in ["fortune", "ping github", "fortune"] {
        assert_eq!(a.interpret(line, &[]), b.interpret(line, &[]));
    }
}

#[test]
fn exit_yields_only_the_sentinel() {
    let (mut interp, _) = interpreter();
    let lines = interp.interpret("q", &[]);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].is_exit());
}
