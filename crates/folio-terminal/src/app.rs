//! The interactive application: the landing screen, the terminal overlay
//! and the theme registry they share.

use crate::input::{KeyRouter, RouteState, RoutedEvent};
use crate::interpreter::{HostInfo, Interpreter};
use crate::services::navigator::SharedNavigator;
use crate::session::TerminalSession;
use crate::theme::SharedThemeRegistry;
use crate::view::{LandingRenderer, Palette, TerminalRenderer};
use crossterm::event::Event;
use folio_core::SiteContent;
use ratatui::layout::Rect;
use ratatui::Frame;
use std::rc::Rc;
use std::sync::Arc;

/// Wire an interpreter to the theme registry and navigator and wrap it in a
/// session. Shared by the interactive app and `--exec`.
pub fn build_session(
    content: Arc<SiteContent>,
    themes: &SharedThemeRegistry,
    navigator: SharedNavigator,
) -> TerminalSession {
    let registry = Rc::clone(themes);
    let interpreter = Interpreter::new(content)
        .with_navigator(navigator)
        .with_host(HostInfo::detect())
        .with_theme_setter(move |id| registry.borrow_mut().set_active(id));
    TerminalSession::new(interpreter)
}

#[derive(Debug)]
pub struct App {
    session: TerminalSession,
    themes: SharedThemeRegistry,
    toggle_key: char,
    should_quit: bool,
}

impl App {
    pub fn new(session: TerminalSession, themes: SharedThemeRegistry, toggle_key: char) -> Self {
        Self {
            session,
            themes,
            toggle_key,
            should_quit: false,
        }
    }

    pub fn session(&self) -> &TerminalSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut TerminalSession {
        &mut self.session
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => {
                let state = RouteState {
                    terminal_open: self.session.is_open(),
                    input_empty: self.session.input().is_empty(),
                    toggle_key: self.toggle_key,
                };
                self.apply(KeyRouter::route_key_event(&key, state));
            }
            Event::Paste(text) if self.session.is_open() => {
                let joined = format!("{}{}", self.session.input(), text.replace(['\r', '\n'], " "));
                self.session.set_input(&joined);
            }
            _ => {}
        }
    }

    fn apply(&mut self, routed: RoutedEvent) {
        match routed {
            RoutedEvent::Toggle => self.session.toggle(),
            RoutedEvent::Close => self.session.close(),
            RoutedEvent::CycleTheme => {
                self.themes.borrow_mut().cycle();
            }
            RoutedEvent::Quit => {
                tracing::info!("quit requested");
                self.should_quit = true;
            }
            RoutedEvent::Session(key) => {
                self.session.handle_key(key);
            }
            RoutedEvent::Ignored => {}
        }
    }

    pub fn render(&self, frame: &mut Frame) {
        let preset = self.themes.borrow().active();
        let palette = Palette::from_preset(preset);
        let area = frame.area();

        LandingRenderer::render(
            frame,
            area,
            self.session.interpreter().content(),
            preset,
            &palette,
            self.toggle_key,
        );
        if self.session.is_open() {
            TerminalRenderer::render(frame, overlay_area(area), &self.session, &palette);
        }
    }
}

/// Centered overlay rectangle, at most 100x32 cells.
fn overlay_area(area: Rect) -> Rect {
    let width = (area.width.saturating_mul(9) / 10).clamp(area.width.min(20), 100);
    let height = (area.height.saturating_mul(4) / 5).clamp(area.height.min(8), 32);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::navigator::RecordingNavigator;
    use crate::theme::{MemoryThemeStore, ThemeRegistry};
    use crate::view::test_support::contains;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use folio_core::{builtin, ThemeId};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn app() -> (App, SharedThemeRegistry) {
        let themes = ThemeRegistry::with_store(Box::new(MemoryThemeStore::new())).into_shared();
        let session = build_session(
            Arc::new(builtin::site().clone()),
            &themes,
            RecordingNavigator::shared(),
        );
        (App::new(session, Rc::clone(&themes), '`'), themes)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    fn type_line(app: &mut App, line: &str) {
        for ch in line.chars() {
            press(app, KeyCode::Char(ch));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn test_theme_command_updates_shared_registry() {
        let (mut app, themes) = app();
        press(&mut app, KeyCode::Char('`'));
        assert!(app.session().is_open());

        type_line(&mut app, "theme nebula");
        assert_eq!(themes.borrow().active_id(), ThemeId::Nebula);
    }

    #[test]
    fn test_f2_cycles_and_escape_closes() {
        let (mut app, themes) = app();
        press(&mut app, KeyCode::F(2));
        assert_eq!(themes.borrow().active_id(), ThemeId::Ocean);

        press(&mut app, KeyCode::Enter);
        assert!(app.session().is_open());
        press(&mut app, KeyCode::Esc);
        assert!(!app.session().is_open());
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn test_paste_appends_single_line() {
        let (mut app, _) = app();
        press(&mut app, KeyCode::Char('`'));
        press(&mut app, KeyCode::Char('e'));
        app.handle_event(Event::Paste("cho hi\nthere".to_string()));
        assert_eq!(app.session().input(), "echo hi there");
    }

    #[test]
    fn test_render_overlays_terminal_when_open() {
        let (mut app, _) = app();
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();

        terminal.draw(|frame| app.render(frame)).unwrap();
        assert!(contains(terminal.backend().buffer(), "Chandan Satwani"));
        assert!(!contains(terminal.backend().buffer(), "chandan@portfolio:~"));

        press(&mut app, KeyCode::Char('`'));
        terminal.draw(|frame| app.render(frame)).unwrap();
        assert!(contains(terminal.backend().buffer(), "chandan@portfolio:~"));
    }

    #[test]
    fn test_overlay_area_fits_inside_small_screens() {
        for (w, h) in [(0, 0), (5, 3), (80, 24), (300, 120)] {
            let area = Rect::new(0, 0, w, h);
            let overlay = overlay_area(area);
            assert!(overlay.width <= w && overlay.height <= h);
            assert!(overlay.right() <= area.right() && overlay.bottom() <= area.bottom());
        }
    }
}
