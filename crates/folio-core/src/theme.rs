//! Theme tokens and the fixed set of switchable presets.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The eight named colour tokens every preset provides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ThemeColors {
    pub background: String,
    pub surface: String,
    pub surface_strong: String,
    pub text: String,
    pub muted: String,
    pub accent_crimson: String,
    pub accent_steel: String,
    /// Usually an `rgba(...)` value, not a hex colour
    pub accent_glow: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct RevealMotion {
    pub duration: f64,
    /// Cubic bezier control points
    pub ease: [f64; 4],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct AmbientPulse {
    pub duration: f64,
    pub intensity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MotionTokens {
    pub reveal: RevealMotion,
    pub stagger: f64,
    pub ambient_pulse: AmbientPulse,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ThemeTokens {
    pub colors: ThemeColors,
    pub motion: MotionTokens,
}

/// Identifier of a built-in preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ThemeId {
    Mining,
    Ocean,
    Nebula,
}

impl ThemeId {
    pub const ALL: [ThemeId; 3] = [ThemeId::Mining, ThemeId::Ocean, ThemeId::Nebula];

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeId::Mining => "mining",
            ThemeId::Ocean => "ocean",
            ThemeId::Nebula => "nebula",
        }
    }

    /// Comma-separated list of every id, for usage and error messages.
    pub fn list() -> String {
        Self::ALL
            .iter()
            .map(|id| id.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// The preset that follows this one, wrapping around.
    pub fn next(self) -> ThemeId {
        match self {
            ThemeId::Mining => ThemeId::Ocean,
            ThemeId::Ocean => ThemeId::Nebula,
            ThemeId::Nebula => ThemeId::Mining,
        }
    }

    pub fn preset(self) -> &'static ThemePreset {
        match self {
            ThemeId::Mining => &PRESETS[0],
            ThemeId::Ocean => &PRESETS[1],
            ThemeId::Nebula => &PRESETS[2],
        }
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no preset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTheme(pub String);

impl fmt::Display for UnknownTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown theme {:?}, expected one of {}", self.0, ThemeId::list())
    }
}

impl std::error::Error for UnknownTheme {}

impl FromStr for ThemeId {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemeId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownTheme(s.to_string()))
    }
}

/// A named, fixed bundle of colour tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemePreset {
    pub id: ThemeId,
    pub label: &'static str,
    pub icon: &'static str,
    pub tagline: &'static str,
    /// Appended to section art file names, empty for the default preset
    pub image_suffix: &'static str,
    pub colors: PresetColors,
}

/// Static form of [`ThemeColors`] so presets can live in a `static`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetColors {
    pub background: &'static str,
    pub surface: &'static str,
    pub surface_strong: &'static str,
    pub text: &'static str,
    pub muted: &'static str,
    pub accent_crimson: &'static str,
    pub accent_steel: &'static str,
    pub accent_glow: &'static str,
}

impl PresetColors {
    pub fn to_tokens(self) -> ThemeColors {
        ThemeColors {
            background: self.background.to_string(),
            surface: self.surface.to_string(),
            surface_strong: self.surface_strong.to_string(),
            text: self.text.to_string(),
            muted: self.muted.to_string(),
            accent_crimson: self.accent_crimson.to_string(),
            accent_steel: self.accent_steel.to_string(),
            accent_glow: self.accent_glow.to_string(),
        }
    }
}

impl ThemePreset {
    /// Art path for this preset ("/art/hero.png" -> "/art/hero-ocean.png").
    pub fn art_path(&self, src: &str) -> String {
        if self.image_suffix.is_empty() {
            return src.to_string();
        }
        match src.rfind('.') {
            Some(dot) => format!("{}{}{}", &src[..dot], self.image_suffix, &src[dot..]),
            None => format!("{}{}", src, self.image_suffix),
        }
    }
}

/// The built-in presets. The first entry is the default.
pub static PRESETS: [ThemePreset; 3] = [
    ThemePreset {
        id: ThemeId::Mining,
        label: "Mining",
        icon: "⛏",
        tagline: "Amber HUD / Underground Ops",
        image_suffix: "",
        colors: PresetColors {
            background: "#080B0F",
            surface: "#111720",
            surface_strong: "#18212D",
            text: "#F1F5F9",
            muted: "#C1CBD6",
            accent_crimson: "#D88A2A",
            accent_steel: "#5FA8A0",
            accent_glow: "rgba(216, 138, 42, 0.34)",
        },
    },
    ThemePreset {
        id: ThemeId::Ocean,
        label: "Deep Sea",
        icon: "🌊",
        tagline: "Cyan Deep Sea / Bioluminescent",
        image_suffix: "-ocean",
        colors: PresetColors {
            background: "#040D14",
            surface: "#0A1A28",
            surface_strong: "#122636",
            text: "#E8F4F8",
            muted: "#8BB8CC",
            accent_crimson: "#00BCD4",
            accent_steel: "#26A69A",
            accent_glow: "rgba(0, 188, 212, 0.28)",
        },
    },
    ThemePreset {
        id: ThemeId::Nebula,
        label: "Nebula",
        icon: "🪐",
        tagline: "Purple Cosmic / Stardust",
        image_suffix: "-nebula",
        colors: PresetColors {
            background: "#0C0716",
            surface: "#16102A",
            surface_strong: "#201838",
            text: "#F0EAFF",
            muted: "#B4A8D4",
            accent_crimson: "#C084FC",
            accent_steel: "#818CF8",
            accent_glow: "rgba(192, 132, 252, 0.28)",
        },
    },
];
