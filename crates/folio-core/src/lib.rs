//! Core types for the Folio portfolio terminal.
//!
//! Everything here is pure data: the content store, the theme presets and the
//! typed lines the terminal renders. No I/O and no terminal dependencies, so
//! the types can be shared by the interpreter, the front-end and tooling that
//! only needs the content schema.

pub mod builtin;
pub mod content;
pub mod line;
pub mod section;
pub mod theme;
pub mod validate;

pub use content::{
    ContactLink, ExperienceItem, Hud, LearningTopic, NavItem, ProjectItem, SectionArt,
    SiteContent, SkillGroup,
};
pub use line::{LineKind, OutputLine, EXIT_SENTINEL};
pub use section::SectionId;
pub use theme::{ThemeColors, ThemeId, ThemePreset, ThemeTokens};
pub use validate::ContentError;
