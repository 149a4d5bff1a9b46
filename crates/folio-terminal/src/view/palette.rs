//! Converting preset colour tokens into ratatui styles.

use folio_core::{LineKind, ThemePreset};
use ratatui::style::{Color, Modifier, Style};

/// Fixed colours for kinds that do not follow the preset.
const ERROR_RED: Color = Color::Rgb(0xF8, 0x71, 0x71);
const SUCCESS_GREEN: Color = Color::Rgb(0x34, 0xD3, 0x99);

/// Parse `#RRGGBB` (or `#RGB`) into an RGB colour.
pub fn parse_hex(value: &str) -> Option<Color> {
    let hex = value.trim().strip_prefix('#')?;
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        6 => Some(Color::Rgb(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        3 => {
            let mut rgb = [0u8; 3];
            for (slot, ch) in rgb.iter_mut().zip(hex.chars()) {
                let v = ch.to_digit(16)? as u8;
                *slot = v * 16 + v;
            }
            Some(Color::Rgb(rgb[0], rgb[1], rgb[2]))
        }
        _ => None,
    }
}

/// Parse `rgba(r, g, b, a)` into an RGB colour, dropping the alpha.
pub fn parse_rgba(value: &str) -> Option<Color> {
    let inner = value
        .trim()
        .strip_prefix("rgba(")
        .or_else(|| value.trim().strip_prefix("rgb("))?
        .strip_suffix(')')?;
    let mut parts = inner.split(',').map(|p| p.trim().parse::<u8>().ok());
    Some(Color::Rgb(parts.next()??, parts.next()??, parts.next()??))
}

fn parse_token(value: &str, fallback: Color) -> Color {
    parse_hex(value)
        .or_else(|| parse_rgba(value))
        .unwrap_or(fallback)
}

/// Mix `a` toward `b` by `t` (0.0 keeps `a`).
fn blend(a: Color, b: Color, t: f32) -> Color {
    match (a, b) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ => a,
    }
}

/// Resolved colours for one preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub surface_strong: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub steel: Color,
    pub glow: Color,
}

impl Palette {
    pub fn from_preset(preset: &ThemePreset) -> Self {
        let c = preset.colors;
        let background = parse_token(c.background, Color::Black);
        Self {
            background,
            surface: parse_token(c.surface, Color::Black),
            surface_strong: parse_token(c.surface_strong, Color::DarkGray),
            text: parse_token(c.text, Color::White),
            muted: parse_token(c.muted, Color::Gray),
            accent: parse_token(c.accent_crimson, Color::Yellow),
            steel: parse_token(c.accent_steel, Color::Cyan),
            glow: parse_token(c.accent_glow, Color::Yellow),
        }
    }

    /// Style for a terminal line of the given kind.
    pub fn line_style(&self, kind: LineKind) -> Style {
        let base = Style::default().bg(self.surface);
        match kind {
            LineKind::Input => base.fg(self.accent).add_modifier(Modifier::BOLD),
            LineKind::Error => base.fg(ERROR_RED),
            LineKind::System => base.fg(self.steel),
            LineKind::Ascii => base.fg(blend(self.accent, self.surface, 0.4)),
            LineKind::Success => base.fg(SUCCESS_GREEN),
            LineKind::Output => base.fg(self.text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::ThemeId;

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("#D88A2A"), Some(Color::Rgb(0xD8, 0x8A, 0x2A)));
        assert_eq!(parse_hex("#fff"), Some(Color::Rgb(255, 255, 255)));
        assert_eq!(parse_hex("D88A2A"), None);
        assert_eq!(parse_hex("#GG0000"), None);
    }

    #[test]
    fn test_parse_rgba_drops_alpha() {
        assert_eq!(
            parse_rgba("rgba(216, 138, 42, 0.34)"),
            Some(Color::Rgb(216, 138, 42))
        );
        assert_eq!(parse_rgba("hsl(1, 2, 3)"), None);
    }

    #[test]
    fn test_every_preset_resolves_to_rgb() {
        for id in ThemeId::ALL {
            let palette = Palette::from_preset(id.preset());
            for color in [palette.background, palette.text, palette.accent, palette.glow] {
                assert!(matches!(color, Color::Rgb(..)), "{id}: {color:?}");
            }
        }
    }

    #[test]
    fn test_line_styles_follow_preset_accent() {
        let mining = Palette::from_preset(ThemeId::Mining.preset());
        let ocean = Palette::from_preset(ThemeId::Ocean.preset());
        assert_eq!(mining.line_style(LineKind::Input).fg, Some(Color::Rgb(0xD8, 0x8A, 0x2A)));
        assert_eq!(ocean.line_style(LineKind::Input).fg, Some(Color::Rgb(0x00, 0xBC, 0xD4)));
        assert_eq!(mining.line_style(LineKind::Error).fg, ocean.line_style(LineKind::Error).fg);
    }
}
