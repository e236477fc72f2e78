use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Colour theme selected in settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Blue,
    Purple,
    Dark,
    Sunset,
}

/// Fixed colour table for a theme. Values are `#RRGGBB` strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub background: &'static str,
    pub text: &'static str,
    pub light_text: &'static str,
    pub danger: &'static str,
    pub success: &'static str,
    pub warning: &'static str,
    pub card: &'static str,
    pub border: &'static str,
}

const BLUE: Palette = Palette {
    primary: "#4A90E2",
    secondary: "#50C878",
    background: "#F8F9FA",
    text: "#333333",
    light_text: "#777777",
    danger: "#E74C3C",
    success: "#2ECC71",
    warning: "#F39C12",
    card: "#FFFFFF",
    border: "#E0E0E0",
};

const PURPLE: Palette = Palette {
    primary: "#8E44AD",
    secondary: "#3498DB",
    background: "#F5F5F5",
    text: "#2C3E50",
    light_text: "#7F8C8D",
    danger: "#E74C3C",
    success: "#27AE60",
    warning: "#F39C12",
    card: "#FFFFFF",
    border: "#E6E6E6",
};

const DARK: Palette = Palette {
    primary: "#3498DB",
    secondary: "#2ECC71",
    background: "#121212",
    text: "#FFFFFF",
    light_text: "#AAAAAA",
    danger: "#E74C3C",
    success: "#2ECC71",
    warning: "#F39C12",
    card: "#1E1E1E",
    border: "#333333",
};

const SUNSET: Palette = Palette {
    primary: "#FF7E5F",
    secondary: "#FEB47B",
    background: "#FFF8F0",
    text: "#4A4A4A",
    light_text: "#888888",
    danger: "#E74C3C",
    success: "#2ECC71",
    warning: "#F39C12",
    card: "#FFFFFF",
    border: "#EAEAEA",
};

impl Theme {
    pub const ALL: [Theme; 4] = [Theme::Blue, Theme::Purple, Theme::Dark, Theme::Sunset];

    pub fn palette(self) -> &'static Palette {
        match self {
            Theme::Blue => &BLUE,
            Theme::Purple => &PURPLE,
            Theme::Dark => &DARK,
            Theme::Sunset => &SUNSET,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Blue => "blue",
            Theme::Purple => "purple",
            Theme::Dark => "dark",
            Theme::Sunset => "sunset",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::UnknownTheme(s.to_string()))
    }
}
