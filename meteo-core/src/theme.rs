use serde::{Deserialize, Serialize};
use std::{convert::TryFrom, fmt};

use crate::condition::{ConditionCategory, coarse};

/// Light or dark variant of a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ThemeMode {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            _ => Err(anyhow::anyhow!("Unknown theme mode '{value}'. Supported modes: light, dark.")),
        }
    }
}

/// Colours for one weather theme in one mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub primary: &'static str,
    pub secondary: &'static str,
    /// CSS gradient for the page backdrop.
    pub background: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
}

#[derive(Debug, Clone, Copy)]
struct ThemeEntry {
    category: ConditionCategory,
    light: Palette,
    dark: Palette,
}

static THEMES: [ThemeEntry; 5] = [
    ThemeEntry {
        category: ConditionCategory::Clear,
        light: Palette {
            primary: "#2196F3",
            secondary: "#FFA726",
            background: "linear-gradient(120deg, #89f7fe 0%, #66a6ff 100%)",
            text_primary: "#1A237E",
            text_secondary: "#424242",
        },
        dark: Palette {
            primary: "#90CAF9",
            secondary: "#FFB74D",
            background: "linear-gradient(120deg, #0f2027 0%, #203a43 50%, #2c5364 100%)",
            text_primary: "#E3F2FD",
            text_secondary: "#B0BEC5",
        },
    },
    ThemeEntry {
        category: ConditionCategory::Rain,
        light: Palette {
            primary: "#4FC3F7",
            secondary: "#78909C",
            background: "linear-gradient(to bottom, #E1F5FE 0%, #B3E5FC 100%)",
            text_primary: "#1A237E",
            text_secondary: "#424242",
        },
        dark: Palette {
            primary: "#81D4FA",
            secondary: "#90A4AE",
            background: "linear-gradient(to bottom, #1A237E 0%, #0D47A1 100%)",
            text_primary: "#E3F2FD",
            text_secondary: "#B0BEC5",
        },
    },
    ThemeEntry {
        category: ConditionCategory::Clouds,
        light: Palette {
            primary: "#90A4AE",
            secondary: "#78909C",
            background: "linear-gradient(135deg, #E3F2FD 0%, #BBDEFB 100%)",
            text_primary: "#263238",
            text_secondary: "#424242",
        },
        dark: Palette {
            primary: "#B0BEC5",
            secondary: "#90A4AE",
            background: "linear-gradient(135deg, #37474F 0%, #263238 100%)",
            text_primary: "#ECEFF1",
            text_secondary: "#B0BEC5",
        },
    },
    ThemeEntry {
        category: ConditionCategory::Snow,
        light: Palette {
            primary: "#B3E5FC",
            secondary: "#90A4AE",
            background: "linear-gradient(to bottom, #E0F7FA 0%, #B2EBF2 100%)",
            text_primary: "#0D47A1",
            text_secondary: "#424242",
        },
        dark: Palette {
            primary: "#81D4FA",
            secondary: "#B0BEC5",
            background: "linear-gradient(to bottom, #1A237E 0%, #0D47A1 100%)",
            text_primary: "#E1F5FE",
            text_secondary: "#B0BEC5",
        },
    },
    ThemeEntry {
        category: ConditionCategory::Thunderstorm,
        light: Palette {
            primary: "#7E57C2",
            secondary: "#FFB74D",
            background: "linear-gradient(to bottom, #5C6BC0 0%, #3949AB 100%)",
            text_primary: "#E8EAF6",
            text_secondary: "#C5CAE9",
        },
        dark: Palette {
            primary: "#9575CD",
            secondary: "#FFA726",
            background: "linear-gradient(to bottom, #1A237E 0%, #311B92 100%)",
            text_primary: "#E8EAF6",
            text_secondary: "#C5CAE9",
        },
    },
];

/// Which palette family a condition code selects.
///
/// Drizzle reads as rain, atmosphere as clouds, and codes outside every
/// range as clear. Only the five categories with a palette are returned.
pub fn theme_for(code: i32) -> ConditionCategory {
    match coarse(code) {
        Some(ConditionCategory::Atmosphere) => ConditionCategory::Clouds,
        Some(category) => category,
        None => ConditionCategory::Clear,
    }
}

/// Palette for a theme category; categories without their own palette use clear.
pub fn palette(category: ConditionCategory, mode: ThemeMode) -> &'static Palette {
    let entry = THEMES.iter().find(|t| t.category == category).unwrap_or(&THEMES[0]);

    match mode {
        ThemeMode::Light => &entry.light,
        ThemeMode::Dark => &entry.dark,
    }
}

pub fn palette_for_code(code: i32, mode: ThemeMode) -> &'static Palette {
    palette(theme_for(code), mode)
}
