//! Routing crossterm key events to application actions.

use crate::session::SessionKey;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press asks the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutedEvent {
    /// Open or close the terminal
    Toggle,
    /// Close the terminal
    Close,
    /// Switch to the next theme preset
    CycleTheme,
    /// Leave the application
    Quit,
    /// Forward to the open terminal session
    Session(SessionKey),
    /// Nothing to do
    Ignored,
}

/// The parts of application state that change how a key routes.
#[derive(Debug, Clone, Copy)]
pub struct RouteState {
    pub terminal_open: bool,
    pub input_empty: bool,
    pub toggle_key: char,
}

pub struct KeyRouter;

impl KeyRouter {
    pub fn route_key_event(event: &KeyEvent, state: RouteState) -> RoutedEvent {
        if event.kind == KeyEventKind::Release {
            return RoutedEvent::Ignored;
        }

        match (event.modifiers, event.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => RoutedEvent::Quit,
            (_, KeyCode::F(2)) => RoutedEvent::CycleTheme,
            _ if state.terminal_open => Self::route_open(event, state),
            _ => Self::route_closed(event, state),
        }
    }

    fn route_open(event: &KeyEvent, state: RouteState) -> RoutedEvent {
        match event.code {
            KeyCode::Esc => RoutedEvent::Close,
            KeyCode::Char(ch) if ch == state.toggle_key && state.input_empty => RoutedEvent::Toggle,
            KeyCode::Up => RoutedEvent::Session(SessionKey::Up),
            KeyCode::Down => RoutedEvent::Session(SessionKey::Down),
            KeyCode::Tab => RoutedEvent::Session(SessionKey::Tab),
            KeyCode::Enter => RoutedEvent::Session(SessionKey::Enter),
            KeyCode::Backspace => RoutedEvent::Session(SessionKey::Backspace),
            KeyCode::Char(ch)
                if !event
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                RoutedEvent::Session(SessionKey::Char(ch))
            }
            _ => RoutedEvent::Session(SessionKey::Other),
        }
    }

    fn route_closed(event: &KeyEvent, state: RouteState) -> RoutedEvent {
        match event.code {
            KeyCode::Char(ch) if ch == state.toggle_key => RoutedEvent::Toggle,
            KeyCode::Enter => RoutedEvent::Toggle,
            KeyCode::Char('q') | KeyCode::Esc => RoutedEvent::Quit,
            _ => RoutedEvent::Ignored,
        }
    }
}
