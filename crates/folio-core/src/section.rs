use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the seven fixed top-level content blocks.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Home,
    About,
    Experience,
    Projects,
    Skills,
    Learning,
    Contact,
}

impl SectionId {
    /// Every section, in canonical page order.
    pub const ALL: [SectionId; 7] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Experience,
        SectionId::Projects,
        SectionId::Skills,
        SectionId::Learning,
        SectionId::Contact,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Experience => "experience",
            SectionId::Projects => "projects",
            SectionId::Skills => "skills",
            SectionId::Learning => "learning",
            SectionId::Contact => "contact",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == name)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_round_trips_every_section() {
        for section in SectionId::ALL {
            assert_eq!(SectionId::from_name(section.as_str()), Some(section));
        }
        assert_eq!(SectionId::from_name("blog"), None);
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&SectionId::Learning).unwrap();
        assert_eq!(json, "\"learning\"");
        let back: SectionId = serde_json::from_str("\"contact\"").unwrap();
        assert_eq!(back, SectionId::Contact);
    }
}
