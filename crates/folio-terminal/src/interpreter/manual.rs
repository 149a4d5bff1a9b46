use super::command::{Category, Command, COMMANDS};
use super::format;
use super::Interpreter;
use folio_core::OutputLine;

/// Column the `→` arrow lines up on in `help`.
const NAME_WIDTH: usize = 11;

impl Interpreter {
    pub(super) fn help(&self) -> Vec<OutputLine> {
        let title = format!("{} OS — COMMAND REFERENCE", self.first_name().to_uppercase());
        let mut lines = vec![format::box_top(), format::box_title(&title), format::box_divider()];

        for (i, category) in Category::LISTED.into_iter().enumerate() {
            if i > 0 {
                lines.push(format::box_row(""));
            }
            lines.push(format::box_row(category.heading()));
            for spec in COMMANDS.iter().filter(|spec| spec.category == category) {
                lines.push(format::box_row(&format!(
                    "{:<NAME_WIDTH$} → {}",
                    spec.name(),
                    spec.summary
                )));
            }
        }

        lines.push(format::box_bottom());
        lines.push(OutputLine::output(
            "\n  Tip: Use ↑/↓ arrows for command history, Tab for autocomplete.",
        ));
        lines
    }

    pub(super) fn man(&self, args: &str) -> Vec<OutputLine> {
        if args.is_empty() {
            return vec![OutputLine::output("Usage: man <command>\n  Example: man projects")];
        }
        let Some(command) = Command::resolve(args) else {
            return vec![OutputLine::error(format!("No manual entry for '{args}'"))];
        };

        let spec = command.spec();
        let mut page = format!("{} — {}\n  Usage: {}", spec.name(), spec.description, spec.usage);
        if let Some(example) = spec.example {
            page.push_str(&format!("\n  Example: {example}"));
        }
        if !spec.aliases().is_empty() {
            page.push_str(&format!("\n  Aliases: {}", spec.aliases().join(", ")));
        }

        vec![
            OutputLine::system(format!("\n  MANUAL: {}", spec.name().to_uppercase())),
            OutputLine::output(format!("  {}", page.replace('\n', "\n  "))),
            OutputLine::system(""),
        ]
    }
}
