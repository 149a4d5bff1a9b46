use super::format;
use super::{art, Interpreter};
use folio_core::OutputLine;
use rand::seq::SliceRandom;

impl Interpreter {
    pub(super) fn banner(&self) -> Vec<OutputLine> {
        vec![
            OutputLine::ascii(art::BANNER),
            OutputLine::system(format!("  {} — Portfolio Terminal", self.os_title())),
            OutputLine::output("  Type 'help' for available commands.\n"),
        ]
    }

    pub(super) fn coffee(&self) -> Vec<OutputLine> {
        vec![
            OutputLine::ascii(art::COFFEE),
            OutputLine::success("  Brewing... ☕ Ready."),
            OutputLine::output("  Take a break. You've earned it.\n"),
        ]
    }

    pub(super) fn matrix(&self) -> Vec<OutputLine> {
        vec![
            OutputLine::system("  Wake up, Neo..."),
            OutputLine::output("  The Matrix has you..."),
            OutputLine::system("  Follow the white rabbit."),
            OutputLine::ascii("  01001000 01100101 01101100 01101100 01101111"),
            OutputLine::output("\n  ▓▓▒▒░░ ENTERING THE MATRIX ░░▒▒▓▓"),
            OutputLine::system("  ... just kidding. But nice taste. 🐇\n"),
        ]
    }

    pub(super) fn fortune(&mut self) -> Vec<OutputLine> {
        let fortune = art::FORTUNES
            .choose(&mut self.rng)
            .copied()
            .unwrap_or_default();
        let edge = "─".repeat(38);
        vec![
            OutputLine::system(format!("\n  ╭{edge}╮")),
            OutputLine::output(format!("  │  {fortune}")),
            OutputLine::system(format!("  ╰{edge}╯\n")),
        ]
    }

    pub(super) fn weather(&self) -> Vec<OutputLine> {
        let mut lines = vec![
            format::section_rule("Weather Report"),
            OutputLine::output(format!("  {:<13}{}", "Location:", self.content.location)),
        ];
        lines.extend(
            art::WEATHER
                .iter()
                .map(|(label, value)| OutputLine::output(format!("  {:<13}{value}", format!("{label}:")))),
        );
        lines.push(OutputLine::system("\n  (simulated — not a live feed)"));
        lines
    }

    pub(super) fn editor(&self, name: &str) -> Vec<OutputLine> {
        vec![OutputLine::output(format!(
            "  {name}: this terminal is read-only. Use VS Code instead. 😄"
        ))]
    }

    pub(super) fn package_manager(&self, name: &str) -> Vec<OutputLine> {
        vec![OutputLine::output(format!(
            "  {name}: packages are managed behind the scenes. 📦"
        ))]
    }

    pub(super) fn greeting(&self) -> Vec<OutputLine> {
        vec![OutputLine::output(format!(
            "  Hey there! 👋 Welcome to {}'s terminal. Type 'help' to explore.",
            self.first_name()
        ))]
    }
}
