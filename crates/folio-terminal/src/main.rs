use anyhow::{Context, Result as AnyhowResult};
use clap::Parser;
use crossterm::event::read as event_read;
use folio::app::{build_session, App};
use folio::config::Config;
use folio::config_io::{load_config, load_content, DirectoryContext};
use folio::services::navigator::{LoggingNavigator, SharedNavigator, SystemNavigator};
use folio::services::terminal_modes::{self, TerminalModes};
use folio::services::{log_dirs, tracing_setup};
use folio::session::{Submission, TerminalSession};
use folio::theme::{FileThemeStore, SharedThemeRegistry, ThemeRegistry};
use folio_core::SiteContent;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, stdout, Write};
use std::path::PathBuf;
use std::sync::Arc;

/// A portfolio presented as a terminal
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "A portfolio you explore by typing commands", long_about = None)]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Load portfolio content from a JSON file instead of the built-in content
    #[arg(long, value_name = "PATH")]
    content: Option<PathBuf>,

    /// Path to log file (default: per-process file in the state directory)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Don't read or write the saved theme preference
    #[arg(long)]
    no_persist: bool,

    /// Start with the terminal open
    #[arg(long)]
    open: bool,

    /// Run a command line, print its output and exit. May be repeated.
    #[arg(long, value_name = "LINE")]
    exec: Vec<String>,

    /// Print the effective content as JSON and exit
    #[arg(long)]
    dump_content: bool,

    /// Print the JSON Schema of the content file and exit
    #[arg(long)]
    content_schema: bool,

    /// Print the directories used by Folio and exit
    #[arg(long)]
    show_paths: bool,
}

fn main() -> AnyhowResult<()> {
    let args = Args::parse();

    if args.content_schema {
        let schema = schemars::schema_for!(SiteContent);
        println!("{}", serde_json::to_string_pretty(&schema)?);
        return Ok(());
    }

    let dir_context =
        DirectoryContext::from_system().context("Failed to determine config directories")?;

    if args.show_paths {
        log_dirs::print_all_paths(&dir_context);
        return Ok(());
    }

    let mut config = load_config(args.config.as_deref(), &dir_context)
        .context("Failed to load configuration")?;
    apply_overrides(&mut config, &args);

    let content =
        load_content(config.content_path.as_deref()).context("Failed to load content")?;

    if args.dump_content {
        println!("{}", serde_json::to_string_pretty(content.as_ref())?);
        return Ok(());
    }

    let log_file = args.log_file.clone().unwrap_or_else(log_dirs::main_log_path);
    if !tracing_setup::init_global(&log_file) {
        eprintln!("Warning: logging disabled, could not open {}", log_file.display());
    }
    log_dirs::cleanup_stale_logs();
    tracing::info!(exec = !args.exec.is_empty(), "folio starting");

    let themes = theme_registry(&config, &dir_context);

    if !args.exec.is_empty() {
        let session = build_session(content, &themes, Arc::new(LoggingNavigator));
        return run_exec(session, &args.exec);
    }

    let navigator: SharedNavigator = if config.open_links {
        Arc::new(SystemNavigator)
    } else {
        Arc::new(LoggingNavigator)
    };
    let session = build_session(content, &themes, navigator);
    run_interactive(session, themes, &config)
}

fn apply_overrides(config: &mut Config, args: &Args) {
    if let Some(path) = &args.content {
        config.content_path = Some(path.clone());
    }
    if args.no_persist {
        config.persist_theme = false;
    }
    if args.open {
        config.start_open = true;
    }
}

fn theme_registry(config: &Config, dir_context: &DirectoryContext) -> SharedThemeRegistry {
    let registry = if config.persist_theme {
        let store = FileThemeStore::new(dir_context.theme_preference_path());
        ThemeRegistry::with_store(Box::new(store))
    } else {
        ThemeRegistry::in_memory()
    };
    registry.into_shared()
}

/// Feed each line through the session and print what it appended.
fn run_exec(mut session: TerminalSession, lines: &[String]) -> AnyhowResult<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for line in lines {
        let before = session.lines().len();
        match session.run_line(line) {
            Submission::Closed => break,
            Submission::Cleared => continue,
            Submission::Blank | Submission::Appended => {}
        }
        for output in session.lines().get(before..).unwrap_or_default() {
            writeln!(out, "{}", output.text)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn run_interactive(
    session: TerminalSession,
    themes: SharedThemeRegistry,
    config: &Config,
) -> AnyhowResult<()> {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        terminal_modes::emergency_cleanup();
        original_hook(panic);
    }));

    let mut terminal_modes = TerminalModes::enable().context("Failed to set up terminal")?;
    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut app = App::new(session, themes, config.toggle_key);
    if config.start_open {
        app.session_mut().open();
    }

    let result = run_event_loop(&mut app, &mut terminal);
    terminal_modes.undo();
    tracing::info!("folio exiting");
    result
}

fn run_event_loop(
    app: &mut App,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> AnyhowResult<()> {
    while !app.should_quit() {
        terminal.draw(|frame| app.render(frame))?;
        let event = event_read()?;
        app.handle_event(event);
    }
    Ok(())
}
