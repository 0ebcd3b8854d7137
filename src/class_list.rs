//! In-memory model of an element's `class` attribute.
//!
//! Mirrors `DOMTokenList` semantics closely enough for theme logic: tokens are
//! split on ASCII whitespace, duplicates collapse, insertion order is kept,
//! and membership is exact (`"dark-theme"` does not contain `"dark"`).

#[cfg(test)]
#[path = "class_list_test.rs"]
mod class_list_test;

use std::fmt;

use crate::env::RootClasses;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    tokens: Vec<String>,
}

impl ClassList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a raw `class` attribute value.
    #[must_use]
    pub fn parse(class_name: &str) -> Self {
        let mut list = Self::new();
        for token in class_name.split_ascii_whitespace() {
            list.add(token);
        }
        list
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }
}

impl RootClasses for ClassList {
    fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    fn add(&mut self, token: &str) {
        if !self.contains(token) {
            self.tokens.push(token.to_owned());
        }
    }

    fn remove(&mut self, token: &str) {
        self.tokens.retain(|t| t != token);
    }

    fn toggle(&mut self, token: &str) -> bool {
        if self.contains(token) {
            self.remove(token);
            false
        } else {
            self.add(token);
            true
        }
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens.join(" "))
    }
}

impl From<&str> for ClassList {
    fn from(class_name: &str) -> Self {
        Self::parse(class_name)
    }
}
