//! Landing screen shown while the terminal is closed.

use crate::view::palette::Palette;
use folio_core::{SiteContent, ThemePreset};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};
use ratatui::Frame;

pub struct LandingRenderer;

impl LandingRenderer {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        content: &SiteContent,
        preset: &ThemePreset,
        palette: &Palette,
        toggle_key: char,
    ) {
        frame.render_widget(
            Block::default().style(Style::default().bg(palette.background)),
            area,
        );

        let lines = Self::lines(content, preset, palette, toggle_key);
        let top = area.height.saturating_sub(lines.len() as u16) / 2;
        let body = Rect {
            y: area.y + top,
            height: area.height - top,
            ..area
        };
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            body,
        );
    }

    fn lines<'a>(
        content: &'a SiteContent,
        preset: &ThemePreset,
        palette: &Palette,
        toggle_key: char,
    ) -> Vec<Line<'a>> {
        let muted = Style::default().fg(palette.muted);
        let mut lines = vec![
            Line::styled(
                content.hud.mission_label.as_str(),
                Style::default().fg(palette.steel),
            ),
            Line::default(),
            Line::styled(
                content.name.as_str(),
                Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
            ),
            Line::styled(content.title.as_str(), Style::default().fg(palette.text)),
            Line::styled(content.tagline.as_str(), muted),
            Line::default(),
        ];

        for (i, section) in content.section_order.iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled(format!("{:02} ", i + 1), Style::default().fg(palette.accent)),
                Span::styled(content.nav_label(*section), Style::default().fg(palette.text)),
            ]));
        }

        lines.push(Line::default());
        lines.push(Line::styled(
            format!("{} {} · {}", preset.icon, preset.label, preset.tagline),
            Style::default().fg(palette.glow),
        ));
        lines.push(Line::styled(
            format!("{toggle_key} terminal · F2 theme · q quit"),
            muted,
        ));
        lines
    }
}
