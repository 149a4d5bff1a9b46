//! Structural checks on a [`SiteContent`].
//!
//! The built-in content is checked in debug builds only; content read from a
//! user file is always checked before it reaches the interpreter.

use crate::content::SiteContent;
use crate::section::SectionId;
use std::collections::BTreeSet;

/// Maximum number of featured projects.
pub const MAX_PROJECTS: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub enum ContentError {
    MissingField(&'static str),
    InvalidEmail(String),
    EmptyNavigation,
    NavStyle(String),
    SectionOrderLength(usize),
    DuplicateSection,
    MissingSection(SectionId),
    MissingArt {
        section: SectionId,
        field: &'static str,
    },
    OverlayOutOfRange {
        section: SectionId,
        value: f64,
    },
    MissingNavLink(SectionId),
    DuplicateNavLink(SectionId),
    NoProjects,
    TooManyProjects(usize),
    NoLearningTopics,
    NoGithubLink,
}

impl std::fmt::Display for ContentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentError::MissingField(field) => write!(f, "missing required field: {field}"),
            ContentError::InvalidEmail(email) => write!(f, "invalid email: {email:?}"),
            ContentError::EmptyNavigation => {
                write!(f, "navigation must include at least one item")
            }
            ContentError::NavStyle(style) => {
                write!(f, "HUD navigation style must be `hud`, got {style:?}")
            }
            ContentError::SectionOrderLength(len) => write!(
                f,
                "section order must contain exactly {} sections, got {len}",
                SectionId::ALL.len()
            ),
            ContentError::DuplicateSection => write!(f, "section order contains duplicate items"),
            ContentError::MissingSection(id) => {
                write!(f, "section order is missing required section: {id}")
            }
            ContentError::MissingArt { section, field } => {
                write!(f, "missing section art {field} for: {section}")
            }
            ContentError::OverlayOutOfRange { section, value } => write!(
                f,
                "section art overlayStrength must be between 0 and 1 for {section}, got {value}"
            ),
            ContentError::MissingNavLink(id) => {
                write!(f, "navigation is missing required section link: {id}")
            }
            ContentError::DuplicateNavLink(id) => {
                write!(f, "navigation links section more than once: {id}")
            }
            ContentError::NoProjects => write!(f, "at least one featured project is required"),
            ContentError::TooManyProjects(n) => write!(
                f,
                "at most {MAX_PROJECTS} featured projects are allowed, got {n}"
            ),
            ContentError::NoLearningTopics => {
                write!(f, "learning radar requires at least one active topic")
            }
            ContentError::NoGithubLink => write!(f, "contact links must include a GitHub profile"),
        }
    }
}

impl std::error::Error for ContentError {}

impl SiteContent {
    /// Check every structural rule, returning the first violation.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.name.trim().is_empty() {
            return Err(ContentError::MissingField("name"));
        }
        if self.title.trim().is_empty() {
            return Err(ContentError::MissingField("title"));
        }
        if !self.email.contains('@') {
            return Err(ContentError::InvalidEmail(self.email.clone()));
        }
        if self.nav.is_empty() {
            return Err(ContentError::EmptyNavigation);
        }
        if self.hud.nav_style != "hud" {
            return Err(ContentError::NavStyle(self.hud.nav_style.clone()));
        }
        if self.hud.mission_label.trim().is_empty() {
            return Err(ContentError::MissingField("hud.missionLabel"));
        }

        if self.section_order.len() != SectionId::ALL.len() {
            return Err(ContentError::SectionOrderLength(self.section_order.len()));
        }
        let order: BTreeSet<SectionId> = self.section_order.iter().copied().collect();
        if order.len() != SectionId::ALL.len() {
            return Err(ContentError::DuplicateSection);
        }

        for section in SectionId::ALL {
            if !order.contains(&section) {
                return Err(ContentError::MissingSection(section));
            }
            let Some(art) = self.section_art.get(&section) else {
                return Err(ContentError::MissingArt {
                    section,
                    field: "src",
                });
            };
            if art.src.trim().is_empty() {
                return Err(ContentError::MissingArt {
                    section,
                    field: "src",
                });
            }
            if art.alt.trim().is_empty() {
                return Err(ContentError::MissingArt {
                    section,
                    field: "alt",
                });
            }
            if !(0.0..=1.0).contains(&art.overlay_strength) {
                return Err(ContentError::OverlayOutOfRange {
                    section,
                    value: art.overlay_strength,
                });
            }
        }

        let mut nav = BTreeSet::new();
        for item in &self.nav {
            if !nav.insert(item.id) {
                return Err(ContentError::DuplicateNavLink(item.id));
            }
        }
        if let Some(missing) = SectionId::ALL.into_iter().find(|s| !nav.contains(s)) {
            return Err(ContentError::MissingNavLink(missing));
        }

        if self.projects.is_empty() {
            return Err(ContentError::NoProjects);
        }
        if self.projects.len() > MAX_PROJECTS {
            return Err(ContentError::TooManyProjects(self.projects.len()));
        }
        if self.learning_radar.is_empty() {
            return Err(ContentError::NoLearningTopics);
        }
        if self.contact_on_domain("github.com").is_none() {
            return Err(ContentError::NoGithubLink);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin;
    use crate::content::ContactLink;

    fn site() -> SiteContent {
        builtin::site().clone()
    }

    #[test]
    fn test_builtin_content_is_valid() {
        assert_eq!(builtin::site().validate(), Ok(()));
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let mut content = site();
        content.name = "   ".to_string();
        assert_eq!(content.validate(), Err(ContentError::MissingField("name")));
    }

    #[test]
    fn test_email_needs_at_sign() {
        let mut content = site();
        content.email = "nobody".to_string();
        assert!(matches!(
            content.validate(),
            Err(ContentError::InvalidEmail(_))
        ));
    }

    #[test]
    fn test_duplicate_section_is_rejected() {
        let mut content = site();
        content.section_order[1] = SectionId::Home;
        assert_eq!(content.validate(), Err(ContentError::DuplicateSection));
    }

    #[test]
    fn test_short_section_order_is_rejected() {
        let mut content = site();
        content.section_order.pop();
        assert_eq!(content.validate(), Err(ContentError::SectionOrderLength(6)));
    }

    #[test]
    fn test_missing_art_names_section() {
        let mut content = site();
        content.section_art.remove(&SectionId::Skills);
        assert_eq!(
            content.validate(),
            Err(ContentError::MissingArt {
                section: SectionId::Skills,
                field: "src"
            })
        );
    }

    #[test]
    fn test_overlay_strength_range() {
        let mut content = site();
        if let Some(art) = content.section_art.get_mut(&SectionId::About) {
            art.overlay_strength = 1.5;
        }
        assert!(matches!(
            content.validate(),
            Err(ContentError::OverlayOutOfRange {
                section: SectionId::About,
                ..
            })
        ));
    }

    #[test]
    fn test_missing_nav_link() {
        let mut content = site();
        content.nav.retain(|item| item.id != SectionId::Learning);
        assert_eq!(
            content.validate(),
            Err(ContentError::MissingNavLink(SectionId::Learning))
        );
    }

    #[test]
    fn test_duplicate_nav_link() {
        let mut content = site();
        let home = content.nav[0].clone();
        assert_eq!(home.id, SectionId::Home);
        content.nav.push(home);
        assert_eq!(
            content.validate(),
            Err(ContentError::DuplicateNavLink(SectionId::Home))
        );
    }

    #[test]
    fn test_project_count_bounds() {
        let mut content = site();
        let extra = content.projects[0].clone();
        content.projects.push(extra);
        assert_eq!(content.validate(), Err(ContentError::TooManyProjects(4)));

        content.projects.clear();
        assert_eq!(content.validate(), Err(ContentError::NoProjects));
    }

    #[test]
    fn test_github_link_required() {
        let mut content = site();
        content.contact_links = vec![ContactLink {
            label: "Email".to_string(),
            href: "mailto:someone@example.com".to_string(),
        }];
        assert_eq!(content.validate(), Err(ContentError::NoGithubLink));
    }

    #[test]
    fn test_errors_render_readable_messages() {
        let err = ContentError::MissingNavLink(SectionId::Contact);
        assert_eq!(
            err.to_string(),
            "navigation is missing required section link: contact"
        );
    }
}
