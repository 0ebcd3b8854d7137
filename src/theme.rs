//! Theme values and classification of the root element's class tokens.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Class token and stored value for the light theme.
pub const LIGHT: &str = "light";
/// Class token and stored value for the dark theme.
pub const DARK: &str = "dark";

/// One of the two supported visual modes.
///
/// "No theme chosen yet" is not a variant; it is `Option::None` wherever a
/// theme may be absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// The class token (and stored value) for this theme.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => LIGHT,
            Self::Dark => DARK,
        }
    }

    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// First explicit choice when nothing is applied yet: the opposite of
    /// what the OS currently prefers.
    #[must_use]
    pub fn first_choice(os_prefers_dark: bool) -> Self {
        if os_prefers_dark { Self::Light } else { Self::Dark }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored value that is neither `"light"` nor `"dark"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme: {0:?}")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            LIGHT => Ok(Self::Light),
            DARK => Ok(Self::Dark),
            other => Err(UnknownTheme(other.to_owned())),
        }
    }
}

/// Theme state as read off the root element's class tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeState {
    /// Neither token present.
    Undefined,
    Light,
    Dark,
    /// Both tokens present. Only reachable through external class edits.
    Both,
}

impl ThemeState {
    #[must_use]
    pub fn from_tokens(has_light: bool, has_dark: bool) -> Self {
        match (has_light, has_dark) {
            (false, false) => Self::Undefined,
            (true, false) => Self::Light,
            (false, true) => Self::Dark,
            (true, true) => Self::Both,
        }
    }

    #[must_use]
    pub fn is_defined(self) -> bool {
        self != Self::Undefined
    }

    /// The single applied theme, if exactly one token is present.
    #[must_use]
    pub fn theme(self) -> Option<Theme> {
        match self {
            Self::Light => Some(Theme::Light),
            Self::Dark => Some(Theme::Dark),
            Self::Undefined | Self::Both => None,
        }
    }
}
