//! ratatui rendering for the landing screen and the terminal overlay.

pub mod landing;
pub mod palette;
pub mod terminal;

pub use landing::LandingRenderer;
pub use palette::Palette;
pub use terminal::TerminalRenderer;
