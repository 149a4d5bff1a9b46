//! Box-drawing helpers shared by the command handlers.

use folio_core::OutputLine;

/// Width of section rules and box borders, in characters.
pub const RULE_WIDTH: usize = 45;

/// Inner width of the double-line `help` box.
pub const BOX_INNER: usize = 42;

/// `─── Title ──────...` padded to [`RULE_WIDTH`].
pub fn section_rule(title: &str) -> OutputLine {
    let used = title.chars().count() + 5;
    let fill = RULE_WIDTH.saturating_sub(used).max(3);
    OutputLine::system(format!("─── {title} {}", "─".repeat(fill)))
}

/// A plain horizontal rule.
pub fn rule() -> OutputLine {
    OutputLine::system("─".repeat(RULE_WIDTH))
}

/// Opening border of a single-line panel: `┌─ Title ───...`.
pub fn panel_top(title: &str) -> OutputLine {
    let used = title.chars().count() + 4;
    let fill = RULE_WIDTH.saturating_sub(used).max(3);
    OutputLine::system(format!("┌─ {title} {}", "─".repeat(fill)))
}

pub fn panel_bottom() -> OutputLine {
    OutputLine::system(format!("└{}", "─".repeat(RULE_WIDTH - 1)))
}

/// A `│  Label:   value` row with the label padded to `width`.
pub fn panel_row(label: &str, value: impl std::fmt::Display, width: usize) -> OutputLine {
    OutputLine::output(format!("│  {:<width$}{value}", format!("{label}:")))
}

/// A dotted diagnostic row: `│  Label ....... value`.
pub fn dotted_row(label: &str, value: impl std::fmt::Display) -> String {
    const LABEL_WIDTH: usize = 17;
    let dots = LABEL_WIDTH.saturating_sub(label.chars().count() + 1).max(2);
    format!("│  {label} {} {value}", ".".repeat(dots))
}

pub fn box_top() -> OutputLine {
    OutputLine::system(format!("╔{}╗", "═".repeat(BOX_INNER)))
}

pub fn box_divider() -> OutputLine {
    OutputLine::system(format!("╠{}╣", "═".repeat(BOX_INNER)))
}

pub fn box_bottom() -> OutputLine {
    OutputLine::system(format!("╚{}╝", "═".repeat(BOX_INNER)))
}

/// Centred title row inside the double-line box.
pub fn box_title(title: &str) -> OutputLine {
    OutputLine::system(format!("║{title:^BOX_INNER$}║"))
}

/// Left-aligned row inside the double-line box, indented two columns.
pub fn box_row(text: &str) -> OutputLine {
    let inner = BOX_INNER - 2;
    OutputLine::output(format!("║  {text:<inner$}║"))
}

/// Join items with the middle-dot separator used across listings.
pub fn dotted_list(items: &[String]) -> String {
    items.join(" · ")
}

/// `hh:mm:ss`-style uptime text: `1h 2m 3s`.
pub fn hms(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let mins = (total_secs % 3600) / 60;
    let secs = total_secs % 60;
    format!("{hours}h {mins}m {secs}s")
}

/// File-name form of a label: lower-case, non-alphanumeric runs become one
/// hyphen ("X / Twitter" -> "x-twitter").
pub fn file_slug(label: &str) -> String {
    let mut slug = String::with_capacity(label.len());
    let mut pending_dash = false;
    for ch in label.chars() {
        if ch.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(ch.to_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}
