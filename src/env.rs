//! Capabilities the toggle needs from its host.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page's storage area, root element, and color-scheme media query are
//! ambient browser globals. They are modelled as small traits so the toggle
//! core can run against in-memory stand-ins in native tests and against
//! `web-sys` adapters (see `browser`) in the page.

#[cfg(test)]
#[path = "env_test.rs"]
mod env_test;

use std::collections::HashMap;

use crate::error::ThemeError;

/// Key-value preference storage (`localStorage` in the browser).
///
/// An unavailable storage area is represented by the host not providing a
/// store at all, never by an implementation that errors on read.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns [`ThemeError::StorageWrite`] if the host refuses the write.
    fn set(&mut self, key: &str, value: &str) -> Result<(), ThemeError>;
}

/// Mutable class-token collection of the element carrying the theme.
pub trait RootClasses {
    fn contains(&self, token: &str) -> bool;
    fn add(&mut self, token: &str);
    fn remove(&mut self, token: &str);
    /// Flip membership of `token`; returns whether it is present afterwards.
    fn toggle(&mut self, token: &str) -> bool;
}

/// The `(prefers-color-scheme: dark)` media query.
pub trait ColorSchemeQuery {
    fn prefers_dark(&self) -> bool;
}

/// Preference store backed by a `HashMap`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a single entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.to_owned(), value.to_owned());
        Self { entries }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Color-scheme query with a fixed answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedScheme {
    pub prefers_dark: bool,
}

impl FixedScheme {
    #[must_use]
    pub fn dark() -> Self {
        Self { prefers_dark: true }
    }

    #[must_use]
    pub fn light() -> Self {
        Self { prefers_dark: false }
    }
}

impl ColorSchemeQuery for FixedScheme {
    fn prefers_dark(&self) -> bool {
        self.prefers_dark
    }
}
