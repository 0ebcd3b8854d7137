//! Error type for wiring the toggle into a page.
//!
//! Only integration problems are errors. An unavailable storage area is a
//! normal degraded state and never surfaces here.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::config::RootTarget;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no {target} element")]
    NoRoot { target: RootTarget },
    #[error("toggle control #{id} not found")]
    MissingControl { id: String },
    #[error("storage write failed: {0}")]
    StorageWrite(String),
    #[error("DOM error: {0}")]
    Dom(String),
}
