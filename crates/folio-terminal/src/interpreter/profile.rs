//! Commands that present the portfolio owner: identity, projects, skills and
//! the diagnostic panels.

use super::format::{self, dotted_list, dotted_row, hms};
use super::{art, Interpreter, OS_VERSION};
use folio_core::{OutputLine, ProjectItem};

impl Interpreter {
    pub(super) fn whoami(&self) -> Vec<OutputLine> {
        let c = &self.content;
        vec![
            format::panel_top("Identity"),
            format::panel_row("Name", &c.name, 10),
            format::panel_row("Role", &c.title, 10),
            format::panel_row("Email", &c.email, 10),
            format::panel_row("Status", &c.availability, 10),
            format::panel_row("Location", &c.location, 10),
            format::panel_row("Lab", &c.lab, 10),
            format::panel_bottom(),
        ]
    }

    pub(super) fn about(&self) -> Vec<OutputLine> {
        let mut lines = vec![format::section_rule("About")];
        lines.extend(
            self.content
                .about
                .iter()
                .enumerate()
                .map(|(i, para)| OutputLine::output(format!("\n  [{}] {para}", i + 1))),
        );
        lines.push(OutputLine::system(format!("\n{}", format::rule().text)));
        lines
    }

    pub(super) fn skills(&self) -> Vec<OutputLine> {
        let mut lines = vec![format::section_rule("Skill Matrix")];
        for group in &self.content.skills {
            lines.push(OutputLine::system(format!("\n  ┌ {}", group.title)));
            lines.push(OutputLine::output(format!("  │ {}", dotted_list(&group.items))));
            lines.push(OutputLine::system(format!("  └{}", "─".repeat(21))));
        }
        lines
    }

    pub(super) fn projects(&self, args: &str) -> Vec<OutputLine> {
        if !args.is_empty() {
            return match self.content.find_project(args) {
                Some(project) => case_study(project),
                None => vec![OutputLine::error(format!(
                    "Project not found: \"{args}\". Try: projects"
                ))],
            };
        }

        let mut lines = vec![format::section_rule("Featured Projects")];
        for (i, project) in self.content.projects.iter().enumerate() {
            lines.push(OutputLine::system(format!("\n  [{}] {}", i + 1, project.name)));
            lines.push(OutputLine::output(format!("      {}", project.summary)));
            lines.push(OutputLine::output(format!(
                "      Stack: {}",
                dotted_list(&project.stack)
            )));
            if let Some(live) = &project.live_url {
                lines.push(OutputLine::success(format!("      Live:  {live}")));
            }
        }
        lines.push(OutputLine::output(
            "\n  Tip: 'projects <name>' for full case study",
        ));
        lines
    }

    pub(super) fn experience(&self) -> Vec<OutputLine> {
        let mut lines = vec![format::section_rule("Experience Timeline")];
        for item in &self.content.experience {
            lines.push(OutputLine::system(format!("\n  ┌─ {}", item.role)));
            lines.push(OutputLine::output(format!(
                "  │  {} · {}",
                item.company, item.period
            )));
            lines.push(OutputLine::system("  │"));
            lines.extend(
                item.highlights
                    .iter()
                    .map(|h| OutputLine::output(format!("  │  ▸ {h}"))),
            );
            lines.push(OutputLine::system(format!("  └{}", "─".repeat(30))));
        }
        lines
    }

    pub(super) fn contact(&self) -> Vec<OutputLine> {
        let mut lines = vec![format::section_rule("Contact")];
        lines.extend(
            self.content
                .contact_links
                .iter()
                .map(|link| OutputLine::output(format!("  {:<14} {}", link.label, link.href))),
        );
        lines.push(OutputLine::output("\n  Tip: 'open <label>' to open in browser"));
        lines
    }

    pub(super) fn social(&self) -> Vec<OutputLine> {
        let mut lines = vec![format::section_rule("Social Profiles")];
        lines.extend(
            self.content
                .contact_links
                .iter()
                .filter(|link| !link.is_mail())
                .map(|link| OutputLine::output(format!("  {:<14} → {}", link.label, link.href))),
        );
        lines.push(format::rule());
        lines
    }

    pub(super) fn learning(&self) -> Vec<OutputLine> {
        let mut lines = vec![format::section_rule("Learning Radar")];
        for topic in &self.content.learning_radar {
            lines.push(OutputLine::system(format!(
                "\n  ◉ {}  [{}]",
                topic.title, topic.cadence
            )));
            lines.push(OutputLine::output(format!("    {}", topic.focus)));
        }
        lines.push(OutputLine::system(format!("\n{}", format::rule().text)));
        lines
    }

    pub(super) fn stack(&self) -> Vec<OutputLine> {
        let mut lines = vec![format::section_rule("Full Technology Stack")];
        for (heading, rows) in art::STACK {
            lines.push(OutputLine::system(format!("\n  [{heading}]")));
            lines.extend(rows.iter().map(|row| OutputLine::output(format!("  {row}"))));
        }
        lines.push(OutputLine::system(format!("\n{}", format::rule().text)));
        lines
    }

    pub(super) fn status(&self) -> Vec<OutputLine> {
        let c = &self.content;
        let mut lines = vec![format::panel_top("SYSTEM DIAGNOSTICS")];
        let rows = [
            ("Uptime", hms(self.uptime_secs())),
            ("Mission", c.hud.mission_label.clone()),
            ("Sections", format!("{} active", c.section_order.len())),
            ("Projects", format!("{} deployed", c.projects.len())),
            ("Skills", format!("{} indexed", c.skill_count())),
            ("Learning", format!("{} active signals", c.learning_radar.len())),
            ("Contacts", format!("{} channels", c.contact_links.len())),
        ];
        lines.extend(
            rows.iter()
                .map(|(label, value)| OutputLine::output(dotted_row(label, value))),
        );
        lines.extend(
            [
                ("Reactor", "ONLINE ●"),
                ("AI Core", "OPERATIONAL ●"),
                ("Build Status", "PASSING ✓"),
            ]
            .iter()
            .map(|(label, value)| OutputLine::success(dotted_row(label, value))),
        );
        lines.push(format::panel_bottom());
        lines
    }

    pub(super) fn neofetch(&self) -> Vec<OutputLine> {
        let c = &self.content;
        let divider = || OutputLine::system("─".repeat(40));
        let first = self.first_name();
        let rows = [
            ("OS", format!("{first} OS {OS_VERSION}")),
            ("Host", c.name.clone()),
            ("Role", c.title.clone()),
            ("Kernel", "Rust + ratatui + crossterm".to_string()),
            ("Shell", format!("portfolio-sh {}", OS_VERSION.trim_start_matches('v'))),
            ("Terminal", self.host.terminal.clone()),
            ("Uptime", format!("{}m", self.uptime_secs() / 60)),
            ("Packages", format!("{} skills, {} projects", c.skill_count(), c.projects.len())),
            ("Theme", "HUD / try `themes`".to_string()),
            ("CPU", "GenAI-powered".to_string()),
            ("Memory", format!("{} signals tracked", c.learning_radar.len())),
        ];

        let mut lines = vec![OutputLine::ascii(art::BANNER), divider()];
        lines.extend(
            rows.iter()
                .map(|(label, value)| OutputLine::output(format!("  {:<11}{value}", format!("{label}:")))),
        );
        lines.push(divider());
        lines.push(OutputLine::output("  ● ● ● ● ● ● ● ●"));
        lines
    }

    pub(super) fn blog(&self) -> Vec<OutputLine> {
        vec![OutputLine::output("  Blog coming soon... Stay tuned! 🚧")]
    }

    pub(super) fn resume(&self) -> Vec<OutputLine> {
        vec![OutputLine::output(
            "  Resume available on request — reach out via contact links.",
        )]
    }

    pub(super) fn certifications(&self) -> Vec<OutputLine> {
        vec![OutputLine::output(
            "  Certifications section coming soon! Check LinkedIn for current certs.",
        )]
    }
}

/// The full `projects <name>` block.
fn case_study(project: &ProjectItem) -> Vec<OutputLine> {
    let mut lines = vec![
        OutputLine::system(format!(
            "\n╔══ {} {}",
            project.name.to_uppercase(),
            "═".repeat(26)
        )),
        OutputLine::output(format!("║ {}", project.summary)),
        OutputLine::system("║"),
        OutputLine::output(format!("║ Problem:  {}", project.problem)),
        OutputLine::system("║"),
        OutputLine::output("║ Decisions:"),
    ];
    lines.extend(
        project
            .decisions
            .iter()
            .enumerate()
            .map(|(i, d)| OutputLine::output(format!("║   {}. {d}", i + 1))),
    );
    lines.push(OutputLine::system("║"));
    lines.push(OutputLine::success(format!("║ Outcome: {}", project.outcome)));
    lines.push(OutputLine::output(format!(
        "║ Stack:   {}",
        dotted_list(&project.stack)
    )));
    lines.push(OutputLine::output(format!("║ Repo:    {}", project.repo_url)));
    if let Some(live) = &project.live_url {
        lines.push(OutputLine::output(format!("║ Live:    {live}")));
    }
    lines.push(OutputLine::system(format!("╚{}", "═".repeat(43))));
    lines
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use crate::services::time_source::TestTimeSource;
    use folio_core::LineKind;
    use std::time::Duration;

    #[test]
    fn test_whoami_lists_identity_fields() {
        let lines = interpreter().interpret("whoami", &[]);
        let body = texts(&lines);
        assert_eq!(body[0].chars().count(), 45);
        assert!(body.contains(&"│  Name:     Chandan Satwani"));
        assert!(body.iter().any(|l| l.starts_with("│  Email:    ")));
        assert!(body.iter().any(|l| l.starts_with("│  Lab:      ")));
    }

    #[test]
    fn test_projects_list_numbers_every_project() {
        let lines = interpreter().interpret("projects", &[]);
        let body = texts(&lines);
        assert!(body.contains(&"\n  [1] Agentic RAG Arcade"));
        assert!(body.iter().any(|l| l.starts_with("\n  [3] ")));
        assert!(body.last().unwrap().contains("for full case study"));
    }

    #[test]
    fn test_projects_case_study_for_match_only() {
        let lines = interpreter().interpret("projects RAG", &[]);
        assert_eq!(lines[0].text.trim_start().split(' ').nth(1), Some("AGENTIC"));
        assert!(lines.iter().all(|l| l.kind != LineKind::Error));
        assert!(!texts(&lines).join("\n").contains("Dragon"));
        assert!(lines.last().unwrap().text.starts_with('╚'));
        let outcome = lines.iter().find(|l| l.text.starts_with("║ Outcome:")).unwrap();
        assert_eq!(outcome.kind, LineKind::Success);
        assert!(lines.iter().any(|l| l.text.starts_with("║   1. ")));
    }

    #[test]
    fn test_projects_miss_is_one_error() {
        let lines = interpreter().interpret("projects zzz", &[]);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].kind, LineKind::Error);
        assert_eq!(lines[0].text, "Project not found: \"zzz\". Try: projects");
    }

    #[test]
    fn test_social_skips_mail_links() {
        let lines = interpreter().interpret("social", &[]);
        let body = texts(&lines).join("\n");
        assert!(!body.contains("mailto:"));
        assert!(body.contains("github.com"));
    }

    #[test]
    fn test_status_reports_uptime_from_clock() {
        let clock = TestTimeSource::shared();
        let mut interp = interpreter().with_time_source(clock.clone());
        clock.advance(Duration::from_secs(3_725));
        let lines = interp.interpret("status", &[]);
        assert_eq!(lines[1].text, "│  Uptime .......... 1h 2m 5s");
        assert!(lines.iter().any(|l| l.text == "│  Projects ........ 3 deployed"));
        assert_eq!(
            lines.iter().filter(|l| l.kind == LineKind::Success).count(),
            3
        );
    }

    #[test]
    fn test_neofetch_shape() {
        let lines = interpreter().interpret("neofetch", &[]);
        assert_eq!(lines[0].kind, LineKind::Ascii);
        assert!(lines.iter().any(|l| l.text == "  OS:        Chandan OS v2.0"));
        assert!(lines.iter().any(|l| l.text.starts_with("  Terminal:  ")));
    }

    #[test]
    fn test_stack_has_every_heading() {
        let lines = interpreter().interpret("stack", &[]);
        let body = texts(&lines).join("\n");
        for heading in ["[AI / ML]", "[GenAI]", "[Frontend]", "[Backend]", "[Infra]"] {
            assert!(body.contains(heading), "{heading}");
        }
    }
}
