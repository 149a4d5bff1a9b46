//! The content store: everything the portfolio says about its owner.
//!
//! Content is read once at start-up and never mutated afterwards. Consumers
//! share it behind an `Arc` and treat it as immutable.

use crate::section::SectionId;
use crate::theme::ThemeTokens;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A navigation entry, one per section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct NavItem {
    pub id: SectionId,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ExperienceItem {
    pub role: String,
    pub company: String,
    pub period: String,
    pub highlights: Vec<String>,
}

/// A featured project with its case study.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProjectItem {
    pub name: String,
    pub summary: String,
    pub problem: String,
    pub decisions: Vec<String>,
    pub outcome: String,
    pub stack: Vec<String>,
    pub repo_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
}

impl ProjectItem {
    /// Directory-style slug used by the terminal's file listings.
    pub fn slug(&self) -> String {
        slugify(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SkillGroup {
    pub title: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct LearningTopic {
    pub title: String,
    pub focus: String,
    pub cadence: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ContactLink {
    pub label: String,
    pub href: String,
}

impl ContactLink {
    pub fn is_mail(&self) -> bool {
        self.href.starts_with("mailto:")
    }
}

/// Backdrop art for one section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SectionArt {
    pub src: String,
    pub alt: String,
    /// Darkening overlay applied over the art, 0.0 to 1.0
    pub overlay_strength: f64,
    pub focal_position: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_focal_position: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Hud {
    pub mission_label: String,
    /// Only `"hud"` is accepted by validation
    pub nav_style: String,
}

/// The whole content object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SiteContent {
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub intro: String,
    pub profile_statement: String,
    pub hero_highlights: Vec<String>,
    pub availability: String,
    pub email: String,
    pub location: String,
    pub lab: String,
    pub nav: Vec<NavItem>,
    pub section_order: Vec<SectionId>,
    pub section_art: BTreeMap<SectionId, SectionArt>,
    pub hud: Hud,
    pub about: Vec<String>,
    pub experience: Vec<ExperienceItem>,
    pub skills: Vec<SkillGroup>,
    pub projects: Vec<ProjectItem>,
    pub learning_radar: Vec<LearningTopic>,
    pub contact_links: Vec<ContactLink>,
    pub theme: ThemeTokens,
}

impl SiteContent {
    /// Parse content from JSON without validating it.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// First contact link whose label or href contains `needle` (already lower-case).
    pub fn find_contact(&self, needle: &str) -> Option<&ContactLink> {
        self.contact_links.iter().find(|link| {
            link.label.to_lowercase().contains(needle) || link.href.to_lowercase().contains(needle)
        })
    }

    /// First project whose name contains `needle` (already lower-case).
    pub fn find_project(&self, needle: &str) -> Option<&ProjectItem> {
        self.projects
            .iter()
            .find(|p| p.name.to_lowercase().contains(needle))
    }

    /// First contact link whose href points at `domain`.
    pub fn contact_on_domain(&self, domain: &str) -> Option<&ContactLink> {
        self.contact_links.iter().find(|l| l.href.contains(domain))
    }

    pub fn email_link(&self) -> Option<&ContactLink> {
        self.contact_links.iter().find(|l| l.is_mail())
    }

    pub fn skill_count(&self) -> usize {
        self.skills.iter().map(|g| g.items.len()).sum()
    }

    /// Navigation label for a section, falling back to its id.
    pub fn nav_label(&self, section: SectionId) -> &str {
        self.nav
            .iter()
            .find(|n| n.id == section)
            .map(|n| n.label.as_str())
            .unwrap_or(section.as_str())
    }
}

/// Lower-case, hyphen-joined form of a title ("Agentic RAG Arcade" -> "agentic-rag-arcade").
pub fn slugify(title: &str) -> String {
    title
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin;

    #[test]
    fn test_slugify_collapses_whitespace() {
        assert_eq!(slugify("Agentic RAG Arcade"), "agentic-rag-arcade");
        assert_eq!(slugify("  Infra   &  Data "), "infra-&-data");
    }

    #[test]
    fn test_find_project_is_case_insensitive_substring() {
        let content = builtin::site();
        let found = content.find_project("rag").unwrap();
        assert_eq!(found.name, "Agentic RAG Arcade");
        assert!(content.find_project("zzz").is_none());
    }

    #[test]
    fn test_find_contact_matches_label_or_href() {
        let content = builtin::site();
        assert_eq!(content.find_contact("linkedin").unwrap().label, "LinkedIn");
        assert_eq!(content.find_contact("x.com").unwrap().label, "X / Twitter");
    }

    #[test]
    fn test_json_round_trip_preserves_content() {
        let content = builtin::site();
        let json = serde_json::to_string_pretty(content).unwrap();
        let back = SiteContent::from_json(&json).unwrap();
        assert_eq!(&back, content);
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let content = builtin::site();
        let mut value = serde_json::to_value(content).unwrap();
        value["favouriteColour"] = serde_json::json!("teal");
        assert!(serde_json::from_value::<SiteContent>(value).is_err());
    }
}
