//! Theme preference value.
//!
//! Two themes only. The persisted form is the lowercase name; anything other
//! than the exact string `"dark"` reads back as [`Theme::Light`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Theme options
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a stored preference. Unknown values fall back to light.
    pub fn parse(s: &str) -> Self {
        match s {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    /// Resolve an optional stored value (unset means light).
    pub fn from_stored(value: Option<&str>) -> Self {
        value.map(Theme::parse).unwrap_or_default()
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Theme implied by the presence of the body marker class.
    pub fn from_dark_marker(present: bool) -> Self {
        if present {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
