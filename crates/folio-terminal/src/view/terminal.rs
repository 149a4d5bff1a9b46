//! Terminal overlay rendering

use crate::interpreter::OS_VERSION;
use crate::session::TerminalSession;
use crate::view::palette::Palette;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const PROMPT: &str = "$ ";

/// Renders the open terminal: title bar, scrollback and the input row.
pub struct TerminalRenderer;

impl TerminalRenderer {
    /// Render the terminal into `area`, keeping the newest lines visible.
    ///
    /// Places the cursor at the end of the input when it fits.
    pub fn render(frame: &mut Frame, area: Rect, session: &TerminalSession, palette: &Palette) {
        let accent = Style::default().fg(palette.accent).add_modifier(Modifier::BOLD);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.accent))
            .style(Style::default().bg(palette.surface).fg(palette.text))
            .title(Line::from(Span::styled(
                format!(" {} ", session.interpreter().prompt_label()),
                accent,
            )))
            .title(
                Line::from(Span::styled(
                    format!(" {OS_VERSION} "),
                    Style::default().fg(palette.muted),
                ))
                .right_aligned(),
            );

        let inner = block.inner(area);
        frame.render_widget(Clear, area);
        frame.render_widget(block, area);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let [scrollback, input_row] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

        let rows = Self::scrollback_rows(session, palette, scrollback.height as usize);
        frame.render_widget(Paragraph::new(rows), scrollback);

        let input = Line::from(vec![
            Span::styled(PROMPT, accent),
            Span::styled(session.input().to_string(), Style::default().fg(palette.text)),
        ]);
        frame.render_widget(Paragraph::new(input), input_row);

        let cursor_x = input_row.x as usize + PROMPT.len() + session.input().chars().count();
        if cursor_x < input_row.right() as usize {
            frame.set_cursor_position(Position::new(cursor_x as u16, input_row.y));
        }
    }

    /// The last `height` visual rows of the buffer. Multi-line entries
    /// are split so each row keeps its entry's style.
    fn scrollback_rows<'a>(
        session: &'a TerminalSession,
        palette: &Palette,
        height: usize,
    ) -> Vec<Line<'a>> {
        let rows: Vec<Line<'a>> = session
            .lines()
            .iter()
            .flat_map(|line| {
                let style = palette.line_style(line.kind);
                line.text.split('\n').map(move |row| Line::styled(row, style))
            })
            .collect();
        let skip = rows.len().saturating_sub(height);
        rows.into_iter().skip(skip).collect()
    }
}
