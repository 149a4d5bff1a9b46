//! The fixed command table.
//!
//! Every name the interpreter accepts resolves to exactly one [`Command`]
//! variant. Anything else is an unknown command, handled by the caller.

/// A command the interpreter knows how to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Help,
    Whoami,
    About,
    Skills,
    Projects,
    Experience,
    Contact,
    Status,
    Clear,
    Exit,
    Theme,
    Themes,
    Repo,
    Coffee,
    Neofetch,
    Date,
    Uptime,
    Ping,
    Echo,
    History,
    Banner,
    Matrix,
    Fortune,
    Weather,
    Ls,
    Cat,
    Open,
    Sudo,
    Blog,
    Learning,
    Stack,
    Certifications,
    Linkedin,
    Github,
    Email,
    Social,
    Resume,
    Tree,
    Man,
    Pwd,
    Cd,
    Rm,
    Editor,
    PackageManager,
    Greeting,
}

/// Grouping used by `help`. Hidden commands work but are not listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Navigation,
    Tools,
    FileSystem,
    Fun,
    Actions,
    Hidden,
}

impl Category {
    /// Categories in the order `help` prints them.
    pub const LISTED: [Category; 5] = [
        Category::Navigation,
        Category::Tools,
        Category::FileSystem,
        Category::Fun,
        Category::Actions,
    ];

    pub fn heading(self) -> &'static str {
        match self {
            Category::Navigation => "NAVIGATION",
            Category::Tools => "TOOLS",
            Category::FileSystem => "FILE SYSTEM",
            Category::Fun => "FUN",
            Category::Actions => "ACTIONS",
            Category::Hidden => "",
        }
    }
}

/// Static metadata for one command.
#[derive(Debug)]
pub struct CommandSpec {
    pub command: Command,
    /// Primary name first, then aliases
    pub names: &'static [&'static str],
    pub category: Category,
    /// One-line description shown by `help`
    pub summary: &'static str,
    /// Longer description shown by `man`
    pub description: &'static str,
    pub usage: &'static str,
    pub example: Option<&'static str>,
    /// Offered by tab completion under its primary name
    pub completable: bool,
}

impl CommandSpec {
    pub fn name(&self) -> &'static str {
        self.names[0]
    }

    pub fn aliases(&self) -> &'static [&'static str] {
        &self.names[1..]
    }

    /// Keep the command out of tab completion.
    const fn uncompleted(self) -> Self {
        CommandSpec {
            completable: false,
            ..self
        }
    }
}

const fn spec(
    command: Command,
    names: &'static [&'static str],
    category: Category,
    summary: &'static str,
    description: &'static str,
    usage: &'static str,
    example: Option<&'static str>,
) -> CommandSpec {
    CommandSpec {
        command,
        names,
        category,
        summary,
        description,
        usage,
        example,
        completable: true,
    }
}

use Category::{Actions, FileSystem, Fun, Hidden, Navigation, Tools};

/// The command table, in `help` order within each category.
pub static COMMANDS: &[CommandSpec] = &[
    spec(Command::Whoami, &["whoami"], Navigation, "Identity & current role", "Print identity and current role.", "whoami", None),
    spec(Command::About, &["about"], Navigation, "Bio & background", "Display bio / about paragraphs.", "about", None),
    spec(Command::Experience, &["experience"], Navigation, "Work timeline", "Show work experience timeline.", "experience", None),
    spec(Command::Projects, &["projects"], Navigation, "Featured builds", "Show featured project cards, or one case study.", "projects [name]", Some("projects rag")),
    spec(Command::Skills, &["skills"], Navigation, "Skill matrix", "List skill groups with items.", "skills", None),
    spec(Command::Learning, &["learning"], Navigation, "Active learning radar", "Show topics currently being studied.", "learning", None),
    spec(Command::Contact, &["contact"], Navigation, "Contact links", "Display contact links.", "contact", None),
    spec(Command::Social, &["social"], Navigation, "All social profiles", "List all social links.", "social", None),
    spec(Command::Status, &["status"], Tools, "System diagnostics", "System diagnostics.", "status", None),
    spec(Command::Neofetch, &["neofetch"], Tools, "System info display", "System information display.", "neofetch", None),
    spec(Command::Stack, &["stack"], Tools, "Full tech stack", "Show full technology stack.", "stack", None),
    spec(Command::Theme, &["theme"], Tools, "Switch theme (try it!)", "Switch portfolio theme.", "theme <mining|ocean|nebula>", Some("theme ocean")),
    spec(Command::Themes, &["themes"], Tools, "List available themes", "List available themes.", "themes", None),
    spec(Command::Ls, &["ls"], FileSystem, "List directory", "List current directory contents.", "ls [section]", Some("ls projects")),
    spec(Command::Cat, &["cat"], FileSystem, "Read section content", "Read a section's content.\n  Sections: about, skills, projects, experience, contact, learning", "cat <section>", Some("cat about")),
    spec(Command::Tree, &["tree"], FileSystem, "Portfolio structure", "Show portfolio file tree.", "tree", None),
    spec(Command::Fortune, &["fortune"], Fun, "Developer wisdom", "Random developer wisdom.", "fortune", None),
    spec(Command::Coffee, &["coffee"], Fun, "Brew some ☕", "Brew some ASCII coffee.", "coffee", None),
    spec(Command::Matrix, &["matrix"], Fun, "Enter the Matrix", "Activate the Matrix.", "matrix", None),
    spec(Command::Banner, &["banner"], Fun, "Show welcome art", "Show the welcome banner.", "banner", None),
    spec(Command::Weather, &["weather"], Fun, "Current conditions", "Simulated weather report.", "weather", None),
    spec(Command::Open, &["open"], Actions, "Open URL (github, etc)", "Open a contact link or project demo in the browser.", "open <project-name|github|linkedin|email>", Some("open github")),
    spec(Command::Repo, &["repo"], Actions, "Open project repo", "Open a project's GitHub repository.", "repo <project-name>", Some("repo rag")),
    spec(Command::Ping, &["ping"], Actions, "Ping a service", "Ping a service.", "ping <target>", Some("ping github")),
    spec(Command::Echo, &["echo"], Actions, "Print text", "Print text to the terminal, keeping its case.", "echo <text>", None),
    spec(Command::Man, &["man"], Actions, "Manual for a command", "Show the manual for a command.", "man <command>", Some("man projects")),
    spec(Command::History, &["history"], Actions, "Command history", "Show command history.", "history", None),
    spec(Command::Clear, &["clear"], Actions, "Clear screen", "Clear the terminal screen.", "clear", None),
    spec(Command::Exit, &["exit", "quit", "q"], Actions, "Close terminal", "Close the terminal.", "exit", None),
    spec(Command::Help, &["help"], Hidden, "Command reference", "Display list of available commands.", "help", None),
    spec(Command::Date, &["date"], Hidden, "Current date", "Print the current date and time.", "date", None),
    spec(Command::Uptime, &["uptime"], Hidden, "Session uptime", "Print how long this session has been running.", "uptime", None),
    spec(Command::Sudo, &["sudo"], Hidden, "Elevate privileges", "Attempt to become root.", "sudo", None),
    spec(Command::Blog, &["blog"], Hidden, "Blog", "Show the blog status.", "blog", None),
    spec(Command::Certifications, &["certifications", "certs"], Hidden, "Certifications", "Show certifications.", "certifications", None),
    spec(Command::Linkedin, &["linkedin"], Hidden, "Open LinkedIn", "Open the LinkedIn profile.", "linkedin", None),
    spec(Command::Github, &["github"], Hidden, "Open GitHub", "Open the GitHub profile.", "github", None),
    spec(Command::Email, &["email"], Hidden, "Send email", "Open the mail client.", "email", None),
    spec(Command::Resume, &["resume", "cv"], Hidden, "Resume", "Show how to get the resume.", "resume", None),
    spec(Command::Pwd, &["pwd"], Hidden, "Working directory", "Print the working directory.", "pwd", None).uncompleted(),
    spec(Command::Cd, &["cd"], Hidden, "Change directory", "Change directory.", "cd", None).uncompleted(),
    spec(Command::Rm, &["rm"], Hidden, "Remove files", "Remove files.", "rm", None).uncompleted(),
    spec(Command::Editor, &["vim", "nano", "vi"], Hidden, "Edit files", "Open a text editor.", "vim", None).uncompleted(),
    spec(Command::PackageManager, &["npm", "yarn", "pnpm"], Hidden, "Manage packages", "Run a package manager.", "npm", None).uncompleted(),
    spec(Command::Greeting, &["hello", "hi", "hey"], Hidden, "Say hello", "Say hello.", "hello", None).uncompleted(),
];

impl Command {
    /// Resolve a lower-case command name (primary or alias).
    pub fn resolve(name: &str) -> Option<Command> {
        COMMANDS
            .iter()
            .find(|spec| spec.names.contains(&name))
            .map(|spec| spec.command)
    }

    pub fn spec(self) -> &'static CommandSpec {
        // Every variant has exactly one table row; see test_every_variant_has_one_spec
        COMMANDS
            .iter()
            .find(|spec| spec.command == self)
            .unwrap_or(&COMMANDS[0])
    }

    pub fn name(self) -> &'static str {
        self.spec().name()
    }

    /// Primary names offered by tab completion, sorted. Aliases and the
    /// joke commands are accepted but never offered.
    pub fn completable_names() -> Vec<&'static str> {
        let mut names: Vec<&'static str> = COMMANDS
            .iter()
            .filter(|spec| spec.completable)
            .map(CommandSpec::name)
            .collect();
        names.sort_unstable();
        names
    }

    /// Completable names starting with `prefix` (compared lower-case).
    pub fn completions(prefix: &str) -> Vec<&'static str> {
        let prefix = prefix.to_lowercase();
        Self::completable_names()
            .into_iter()
            .filter(|name| name.starts_with(&prefix))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_variant_has_one_spec() {
        let mut seen = HashSet::new();
        for spec in COMMANDS {
            assert!(seen.insert(spec.command), "{:?} listed twice", spec.command);
            assert_eq!(spec.command.spec().command, spec.command);
        }
        assert_eq!(seen.len(), 45);
    }

    #[test]
    fn test_names_are_unique_and_lower_case() {
        let mut seen = HashSet::new();
        for spec in COMMANDS {
            for name in spec.names {
                assert_eq!(*name, name.to_lowercase());
                assert!(seen.insert(*name), "{name} used twice");
            }
        }
    }

    #[test]
    fn test_resolve_aliases() {
        assert_eq!(Command::resolve("q"), Some(Command::Exit));
        assert_eq!(Command::resolve("quit"), Some(Command::Exit));
        assert_eq!(Command::resolve("certs"), Some(Command::Certifications));
        assert_eq!(Command::resolve("cv"), Some(Command::Resume));
        assert_eq!(Command::resolve("nano"), Some(Command::Editor));
        assert_eq!(Command::resolve("frobnicate"), None);
    }

    #[test]
    fn test_completions_are_sorted_prefix_matches() {
        assert_eq!(Command::completions("pro"), vec!["projects"]);
        assert_eq!(Command::completions("th"), vec!["theme", "themes"]);
        assert_eq!(Command::completions("H"), vec!["help", "history"]);
        assert!(Command::completions("zzz").is_empty());
    }

    #[test]
    fn test_aliases_and_jokes_are_not_completed() {
        for prefix in ["q", "cv", "vi", "npm", "pwd", "rm"] {
            assert!(
                Command::completions(prefix).is_empty(),
                "{prefix} completed to {:?}",
                Command::completions(prefix)
            );
        }
        assert_eq!(Command::completions("ce"), vec!["certifications"]);
        assert_eq!(Command::completable_names().len(), 39);
    }

    #[test]
    fn test_help_summaries_fit_the_box() {
        for spec in COMMANDS {
            if spec.category != Category::Hidden {
                assert!(
                    spec.summary.chars().count() <= 26,
                    "{} summary too long",
                    spec.name()
                );
            }
        }
    }
}
