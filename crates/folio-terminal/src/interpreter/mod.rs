//! The command interpreter.
//!
//! [`Interpreter::interpret`] maps one raw input line, plus the session's
//! command history, to a list of typed [`OutputLine`]s. Apart from its return
//! value it only ever does three things: hand a URL to the [`Navigator`],
//! call the bound theme setter, or return the exit sentinel line.
//!
//! Handlers live in sibling modules, each adding `impl Interpreter` blocks
//! for one group of commands.

mod actions;
pub mod art;
pub mod command;
pub mod format;
mod filesystem;
mod fun;
mod manual;
pub mod parse;
mod profile;

use crate::services::navigator::{LoggingNavigator, SharedNavigator};
use crate::services::time_source::{RealTimeSource, SharedTimeSource};
pub use command::{Category, Command, CommandSpec, COMMANDS};
use folio_core::{OutputLine, SiteContent, ThemeId};
pub use parse::ParsedInput;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use std::time::Instant;

/// Version shown in the banner, `neofetch` and the title bar.
pub const OS_VERSION: &str = "v2.0";

/// Callback invoked by `theme <id>`.
pub type ThemeSetter = Box<dyn FnMut(ThemeId)>;

/// Facts about the hosting terminal, shown by `neofetch`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostInfo {
    pub terminal: String,
    pub shell: String,
}

impl HostInfo {
    /// Read `TERM` and `SHELL`, falling back to "unknown".
    pub fn detect() -> Self {
        let var = |key: &str| {
            std::env::var(key)
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| "unknown".to_string())
        };
        let shell = var("SHELL");
        let shell = shell.rsplit('/').next().unwrap_or(&shell).to_string();
        Self {
            terminal: var("TERM"),
            shell,
        }
    }
}

impl Default for HostInfo {
    fn default() -> Self {
        Self {
            terminal: "unknown".to_string(),
            shell: "unknown".to_string(),
        }
    }
}

pub struct Interpreter {
    content: Arc<SiteContent>,
    theme_setter: Option<ThemeSetter>,
    navigator: SharedNavigator,
    clock: SharedTimeSource,
    started: Instant,
    host: HostInfo,
    rng: StdRng,
}

impl std::fmt::Debug for Interpreter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Interpreter")
            .field("owner", &self.content.name)
            .field("theme_setter", &self.theme_setter.is_some())
            .field("navigator", &self.navigator)
            .field("host", &self.host)
            .finish_non_exhaustive()
    }
}

impl Interpreter {
    /// An interpreter with no theme setter, a logging-only navigator, the
    /// real clock and an entropy-seeded RNG.
    pub fn new(content: Arc<SiteContent>) -> Self {
        let clock = RealTimeSource::shared();
        Self {
            content,
            theme_setter: None,
            navigator: Arc::new(LoggingNavigator),
            started: clock.now(),
            clock,
            host: HostInfo::default(),
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_theme_setter(mut self, setter: impl FnMut(ThemeId) + 'static) -> Self {
        self.theme_setter = Some(Box::new(setter));
        self
    }

    pub fn with_navigator(mut self, navigator: SharedNavigator) -> Self {
        self.navigator = navigator;
        self
    }

    /// Replace the clock. Uptime is measured from this call.
    pub fn with_time_source(mut self, clock: SharedTimeSource) -> Self {
        self.started = clock.now();
        self.clock = clock;
        self
    }

    /// Seed the RNG behind `fortune` and `ping`.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn with_host(mut self, host: HostInfo) -> Self {
        self.host = host;
        self
    }

    pub fn content(&self) -> &SiteContent {
        &self.content
    }

    /// Run one input line. Blank input yields no lines.
    pub fn interpret(&mut self, input: &str, history: &[String]) -> Vec<OutputLine> {
        let Some(parsed) = ParsedInput::parse(input) else {
            return Vec::new();
        };

        let Some(command) = Command::resolve(&parsed.name) else {
            tracing::debug!(name = %parsed.name, "unknown command");
            return command_not_found(&parsed.name);
        };

        tracing::debug!(command = command.name(), args = %parsed.args, "dispatching");
        self.dispatch(command, &parsed, history)
    }

    fn dispatch(
        &mut self,
        command: Command,
        parsed: &ParsedInput<'_>,
        history: &[String],
    ) -> Vec<OutputLine> {
        let args = parsed.args.as_str();
        match command {
            Command::Help => self.help(),
            Command::Man => self.man(args),

            Command::Whoami => self.whoami(),
            Command::About => self.about(),
            Command::Skills => self.skills(),
            Command::Projects => self.projects(args),
            Command::Experience => self.experience(),
            Command::Contact => self.contact(),
            Command::Social => self.social(),
            Command::Learning => self.learning(),
            Command::Stack => self.stack(),
            Command::Status => self.status(),
            Command::Neofetch => self.neofetch(),
            Command::Blog => self.blog(),
            Command::Certifications => self.certifications(),
            Command::Resume => self.resume(),

            Command::Ls => self.ls(args),
            Command::Cat => self.cat(args),
            Command::Tree => self.tree(),
            Command::Pwd => self.pwd(),
            Command::Cd => self.cd(),
            Command::Rm => self.rm(),

            Command::Theme => self.theme(args),
            Command::Themes => self.themes(),
            Command::Open => self.open(args),
            Command::Repo => self.repo(args),
            Command::Github => self.github(),
            Command::Linkedin => self.linkedin(),
            Command::Email => self.email(),
            Command::Ping => self.ping(args),
            Command::Echo => self.echo(&parsed.raw_args),
            Command::Date => self.date(),
            Command::Uptime => self.uptime(),
            Command::History => self.history(history),
            Command::Sudo => self.sudo(),

            Command::Banner => self.banner(),
            Command::Coffee => self.coffee(),
            Command::Matrix => self.matrix(),
            Command::Fortune => self.fortune(),
            Command::Weather => self.weather(),
            Command::Editor => self.editor(&parsed.name),
            Command::PackageManager => self.package_manager(&parsed.name),
            Command::Greeting => self.greeting(),

            Command::Clear => Vec::new(),
            Command::Exit => vec![OutputLine::exit()],
        }
    }

    /// Lines shown the first time the terminal opens.
    pub fn boot_lines(&self) -> Vec<OutputLine> {
        vec![
            OutputLine::ascii(art::BANNER),
            OutputLine::system(format!("  {} — Portfolio Terminal", self.os_title())),
            OutputLine::output("  Type 'help' for commands · ↑↓ history · Tab autocomplete\n"),
        ]
    }

    /// Owner's first name, used for the OS branding.
    fn first_name(&self) -> &str {
        self.content
            .name
            .split_whitespace()
            .next()
            .unwrap_or("portfolio")
    }

    /// "CHANDAN OS v2.0"
    pub fn os_title(&self) -> String {
        format!("{} OS {OS_VERSION}", self.first_name().to_uppercase())
    }

    /// "chandan@portfolio:~", shown in the title bar.
    pub fn prompt_label(&self) -> String {
        format!("{}@portfolio:~", self.first_name().to_lowercase())
    }

    fn uptime_secs(&self) -> u64 {
        self.clock.elapsed_since(self.started).as_secs()
    }
}

/// The two lines returned for a name that resolves to no command.
pub fn command_not_found(name: &str) -> Vec<OutputLine> {
    vec![
        OutputLine::error(format!("  command not found: {name}")),
        OutputLine::output("  Type 'help' for available commands, or 'man <cmd>' for details."),
    ]
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use folio_core::LineKind;

    #[test]
    fn test_blank_input_yields_nothing() {
        let mut interp = interpreter();
        assert!(interp.interpret("", &[]).is_empty());
        assert!(interp.interpret("   ", &["help".to_string()]).is_empty());
    }

    #[test]
    fn test_unknown_command_yields_error_and_hint() {
        let mut interp = interpreter();
        let lines = interp.interpret("Frobnicate now", &[]);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].kind, LineKind::Error);
        assert_eq!(lines[0].text, "  command not found: frobnicate");
        assert_eq!(lines[1].kind, LineKind::Output);
        assert!(lines[1].text.contains("man <cmd>"));
    }

    #[test]
    fn test_exit_aliases_yield_only_the_sentinel() {
        let mut interp = interpreter();
        for name in ["exit", "quit", "q", "EXIT"] {
            assert_eq!(interp.interpret(name, &[]), vec![OutputLine::exit()]);
        }
    }

    #[test]
    fn test_clear_yields_nothing() {
        assert!(interpreter().interpret("clear", &[]).is_empty());
    }

    #[test]
    fn test_branding_uses_first_name() {
        let interp = interpreter();
        assert_eq!(interp.os_title(), "CHANDAN OS v2.0");
        assert_eq!(interp.prompt_label(), "chandan@portfolio:~");
    }

    #[test]
    fn test_boot_lines() {
        let lines = interpreter().boot_lines();
        assert_eq!(lines[0].kind, LineKind::Ascii);
        assert_eq!(lines[1].text, "  CHANDAN OS v2.0 — Portfolio Terminal");
        assert!(lines[2].text.contains("Tab autocomplete"));
    }

    #[test]
    fn test_every_command_without_required_args_succeeds() {
        for spec in COMMANDS {
            if matches!(spec.command, Command::Clear | Command::Exit) {
                continue;
            }
            for name in spec.names {
                let (mut interp, _nav) = recording();
                let lines = interp.interpret(name, &[]);
                assert!(!lines.is_empty(), "{name} produced no output");
                assert!(
                    lines.iter().all(|l| l.kind != LineKind::Error),
                    "{name} produced an error: {:?}",
                    texts(&lines)
                );
            }
        }
    }
}
