//! Commands with side effects (links, theme) and the small utilities.

use super::format::hms;
use super::Interpreter;
use crate::services::navigator::LinkTarget;
use folio_core::{OutputLine, ThemeId};
use rand::Rng;

impl Interpreter {
    /// Hand `url` to the navigator and report the outcome as one line.
    fn launch(&self, url: &str, success: String) -> Vec<OutputLine> {
        match self.navigator.open(url, LinkTarget::for_url(url)) {
            Ok(()) => vec![OutputLine::success(success)],
            Err(err) => {
                tracing::warn!(url, error = %err, "failed to open link");
                vec![OutputLine::error(format!("Could not open {url}: {err}"))]
            }
        }
    }

    pub(super) fn theme(&mut self, args: &str) -> Vec<OutputLine> {
        if args.is_empty() {
            return vec![OutputLine::output(format!(
                "Usage: theme <{}>",
                ThemeId::ALL.map(ThemeId::as_str).join("|")
            ))];
        }
        match args.parse::<ThemeId>() {
            Ok(id) => {
                if let Some(setter) = self.theme_setter.as_mut() {
                    setter(id);
                }
                vec![OutputLine::success(format!("Theme switched to: {id} ✓"))]
            }
            Err(_) => vec![OutputLine::error(format!(
                "Unknown theme: \"{args}\". Available: {}",
                ThemeId::list()
            ))],
        }
    }

    pub(super) fn themes(&self) -> Vec<OutputLine> {
        let mut lines = vec![super::format::section_rule("Available Themes")];
        lines.extend(ThemeId::ALL.iter().map(|id| {
            let preset = id.preset();
            OutputLine::output(format!(
                "  {:<8} {}  {}",
                id.as_str(),
                preset.icon,
                preset.tagline
            ))
        }));
        lines.push(OutputLine::output("\n  Usage: theme <name>"));
        lines
    }

    pub(super) fn open(&self, args: &str) -> Vec<OutputLine> {
        if args.is_empty() {
            return vec![OutputLine::output(
                "Usage: open <github|linkedin|email|youtube|x|project-name>",
            )];
        }

        if let Some(link) = self.content.find_contact(args) {
            return self.launch(&link.href, format!("Opening {}... ↗", link.label));
        }

        let project = self.content.projects.iter().find_map(|p| {
            let live = p.live_url.as_deref()?;
            let matches = p.name.to_lowercase().contains(args) || live.to_lowercase().contains(args);
            matches.then_some((p, live))
        });
        match project {
            Some((project, live)) => {
                self.launch(live, format!("Opening {} live demo... ↗", project.name))
            }
            None => vec![OutputLine::error(format!("Not found: \"{args}\""))],
        }
    }

    pub(super) fn repo(&self, args: &str) -> Vec<OutputLine> {
        if args.is_empty() {
            return vec![OutputLine::output(
                "Usage: repo <project-name>\n  Example: repo rag",
            )];
        }
        match self.content.find_project(args) {
            Some(project) => self.launch(
                &project.repo_url,
                format!("Opening {} repository... ↗", project.name),
            ),
            None => vec![OutputLine::error(format!("Project not found: \"{args}\""))],
        }
    }

    pub(super) fn github(&self) -> Vec<OutputLine> {
        match self.content.contact_on_domain("github.com") {
            Some(link) => self.launch(&link.href, "Opening GitHub profile... ↗".to_string()),
            None => vec![OutputLine::error("No GitHub profile configured")],
        }
    }

    pub(super) fn linkedin(&self) -> Vec<OutputLine> {
        match self.content.contact_on_domain("linkedin.com") {
            Some(link) => self.launch(&link.href, "Opening LinkedIn profile... ↗".to_string()),
            None => vec![OutputLine::error("No LinkedIn profile configured")],
        }
    }

    pub(super) fn email(&self) -> Vec<OutputLine> {
        let href = self
            .content
            .email_link()
            .map(|link| link.href.clone())
            .unwrap_or_else(|| format!("mailto:{}", self.content.email));
        self.launch(&href, "Opening email client... ↗".to_string())
    }

    pub(super) fn ping(&mut self, args: &str) -> Vec<OutputLine> {
        if args.is_empty() {
            return vec![OutputLine::output(
                "Usage: ping <target>\n  Example: ping github",
            )];
        }
        let latency: u32 = self.rng.gen_range(10..50);
        let second = latency + self.rng.gen_range(0..10);
        let third = latency + self.rng.gen_range(0..15);
        vec![
            OutputLine::output(format!("PING {args} (127.0.0.1): 56 data bytes")),
            OutputLine::output(format!("64 bytes: icmp_seq=0 ttl=64 time={latency}ms")),
            OutputLine::output(format!("64 bytes: icmp_seq=1 ttl=64 time={second}ms")),
            OutputLine::output(format!("64 bytes: icmp_seq=2 ttl=64 time={third}ms")),
            OutputLine::success(format!("\n--- {args} ping statistics ---")),
            OutputLine::output("3 packets transmitted, 3 received, 0% packet loss"),
        ]
    }

    /// Echo keeps the argument's original case.
    pub(super) fn echo(&self, raw_args: &str) -> Vec<OutputLine> {
        if raw_args.is_empty() {
            return vec![OutputLine::output("Usage: echo <text>")];
        }
        vec![OutputLine::output(raw_args)]
    }

    pub(super) fn date(&self) -> Vec<OutputLine> {
        let now = self.clock.wall_clock();
        vec![OutputLine::output(format!(
            "  {}",
            now.format("%a %b %d %Y %H:%M:%S GMT%z")
        ))]
    }

    pub(super) fn uptime(&self) -> Vec<OutputLine> {
        vec![OutputLine::output(format!("  up {}", hms(self.uptime_secs())))]
    }

    pub(super) fn history(&self, history: &[String]) -> Vec<OutputLine> {
        if history.is_empty() {
            return vec![OutputLine::output("  No commands in history yet.")];
        }
        history
            .iter()
            .enumerate()
            .map(|(i, cmd)| OutputLine::output(format!("  {:>4}  {cmd}", i + 1)))
            .collect()
    }

    pub(super) fn sudo(&self) -> Vec<OutputLine> {
        vec![
            OutputLine::system("  Nice try. 😏"),
            OutputLine::output("  This incident will be reported."),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use crate::services::navigator::LinkTarget;
    use folio_core::{LineKind, ThemeId};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_theme_calls_setter_once_on_success() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = calls.clone();
        let mut interp = interpreter().with_theme_setter(move |id| sink.borrow_mut().push(id));

        let lines = interp.interpret("theme Ocean", &[]);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].kind, LineKind::Success);
        assert_eq!(lines[0].text, "Theme switched to: ocean ✓");
        assert_eq!(*calls.borrow(), vec![ThemeId::Ocean]);

        let lines = interp.interpret("theme bogus", &[]);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].kind, LineKind::Error);
        assert_eq!(
            lines[0].text,
            "Unknown theme: \"bogus\". Available: mining, ocean, nebula"
        );
        assert_eq!(calls.borrow().len(), 1);
    }

    #[test]
    fn test_theme_without_setter_still_reports_success() {
        let lines = interpreter().interpret("theme nebula", &[]);
        assert_eq!(lines[0].kind, LineKind::Success);
    }

    #[test]
    fn test_theme_usage() {
        let lines = interpreter().interpret("theme", &[]);
        assert_eq!(lines[0].text, "Usage: theme <mining|ocean|nebula>");
        assert_eq!(lines[0].kind, LineKind::Output);
    }

    #[test]
    fn test_open_prefers_contact_links() {
        let (mut interp, nav) = recording();
        let lines = interp.interpret("open github", &[]);
        assert_eq!(lines, vec![folio_core::OutputLine::success("Opening GitHub... ↗")]);
        assert_eq!(
            nav.opened(),
            vec![(
                "https://github.com/Chandan062311".to_string(),
                LinkTarget::NewContext
            )]
        );
    }

    #[test]
    fn test_open_mail_uses_same_context() {
        let (mut interp, nav) = recording();
        interp.interpret("open email", &[]);
        assert_eq!(nav.opened()[0].1, LinkTarget::SameContext);
    }

    #[test]
    fn test_open_falls_back_to_project_demo() {
        let (mut interp, nav) = recording();
        let lines = interp.interpret("open async", &[]);
        assert_eq!(lines[0].text, "Opening Async Think live demo... ↗");
        assert_eq!(nav.opened()[0].0, "https://async-think-csailabs.vercel.app");
    }

    #[test]
    fn test_open_miss_opens_nothing() {
        let (mut interp, nav) = recording();
        let lines = interp.interpret("open zzz", &[]);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text, "Not found: \"zzz\"");
        assert!(nav.opened().is_empty());
    }

    #[test]
    fn test_repo_opens_repository() {
        let (mut interp, nav) = recording();
        let lines = interp.interpret("repo rag", &[]);
        assert_eq!(lines[0].text, "Opening Agentic RAG Arcade repository... ↗");
        assert_eq!(nav.opened()[0].0, "https://github.com/Chandan062311/Agentic_rag");
    }

    #[test]
    fn test_ping_shape() {
        let lines = interpreter().interpret("ping github", &[]);
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0].text, "PING github (127.0.0.1): 56 data bytes");
        let first: u32 = lines[1]
            .text
            .trim_start_matches("64 bytes: icmp_seq=0 ttl=64 time=")
            .trim_end_matches("ms")
            .parse()
            .unwrap();
        assert!((10..50).contains(&first));
        assert_eq!(lines[4].kind, LineKind::Success);
    }

    #[test]
    fn test_echo_keeps_case_and_collapses_spaces() {
        let lines = interpreter().interpret("ECHO  Hello   World", &[]);
        assert_eq!(lines, vec![folio_core::OutputLine::output("Hello World")]);
    }

    #[test]
    fn test_date_uses_wall_clock() {
        let lines = interpreter().interpret("date", &[]);
        assert_eq!(lines[0].text, "  Wed Jan 01 2025 09:30:00 GMT+0000");
    }

    #[test]
    fn test_history_is_one_indexed_oldest_first() {
        let history = vec!["help".to_string(), "projects rag".to_string()];
        let lines = interpreter().interpret("history", &history);
        assert_eq!(texts(&lines), vec!["     1  help", "     2  projects rag"]);

        let lines = interpreter().interpret("history", &[]);
        assert_eq!(texts(&lines), vec!["  No commands in history yet."]);
    }
}
