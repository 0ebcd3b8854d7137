//! Page integration settings.
//!
//! Defaults match the conventional markup: a `#theme-toggle` button, the
//! preference under `localStorage["theme"]`, and theme classes on `<body>`.
//! A host page can override any subset by passing JSON to
//! [`ToggleConfig::from_json`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::fmt;

use serde::{Deserialize, Serialize};

pub const DEFAULT_STORAGE_KEY: &str = "theme";
pub const DEFAULT_TOGGLE_ID: &str = "theme-toggle";

/// Element whose class list carries the theme token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RootTarget {
    /// `document.body`
    #[default]
    Body,
    /// `document.documentElement` (`<html>`)
    #[serde(rename = "html")]
    DocumentElement,
}

impl fmt::Display for RootTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Body => "body",
            Self::DocumentElement => "html",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToggleConfig {
    /// Storage key holding `"light"` or `"dark"`.
    pub storage_key: String,
    /// `id` of the control that flips the theme.
    pub toggle_id: String,
    pub root: RootTarget,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            toggle_id: DEFAULT_TOGGLE_ID.to_owned(),
            root: RootTarget::default(),
        }
    }
}

impl ToggleConfig {
    /// Parse a (possibly partial) JSON config; missing fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error for malformed JSON or unknown root targets.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
