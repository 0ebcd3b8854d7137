//! Theme toggle core.
//!
//! DESIGN
//! ======
//! `ThemeToggle` owns its three capabilities (preference store, root classes,
//! color-scheme query) and implements the two page events: load
//! ([`ThemeToggle::initialize`]) and click ([`ThemeToggle::on_click`]). The
//! class-list steps live in free functions generic over [`RootClasses`] so the
//! same code drives the DOM adapter and the pure [`restore`]/[`transition`]
//! functions over [`ClassList`].
//!
//! TRADE-OFFS
//! ==========
//! A click on a defined state flips `light` and `dark` membership
//! independently rather than swapping. With exactly one token present that is
//! a swap. With both present (external class edits) it removes both, and the
//! persisted value falls back to `light` because `dark` is absent.

#[cfg(test)]
#[path = "toggle_test.rs"]
mod toggle_test;

use log::{debug, info, warn};

use crate::class_list::ClassList;
use crate::config::DEFAULT_STORAGE_KEY;
use crate::env::{ColorSchemeQuery, FixedScheme, PreferenceStore, RootClasses};
use crate::theme::{DARK, LIGHT, Theme, ThemeState};

// =============================================================================
// CLASS-LIST STEPS
// =============================================================================

/// Read the theme state off a class collection.
pub fn classify<R: RootClasses + ?Sized>(root: &R) -> ThemeState {
    ThemeState::from_tokens(root.contains(LIGHT), root.contains(DARK))
}

/// Apply a stored preference at load. Unknown values are ignored.
pub fn apply_stored<R: RootClasses + ?Sized>(root: &mut R, stored: Option<&str>) -> Option<Theme> {
    let raw = stored?;
    let theme = match raw.parse::<Theme>() {
        Ok(theme) => theme,
        Err(err) => {
            warn!("ignoring stored preference: {err}");
            return None;
        }
    };
    root.remove(LIGHT);
    root.remove(DARK);
    root.add(theme.as_str());
    Some(theme)
}

/// Apply one click and return the resulting theme.
///
/// The color-scheme query is consulted only when no theme token is present.
pub fn apply_click<R, M>(root: &mut R, scheme: &M) -> Theme
where
    R: RootClasses + ?Sized,
    M: ColorSchemeQuery + ?Sized,
{
    let before = classify(root);
    if before.is_defined() {
        root.toggle(LIGHT);
        root.toggle(DARK);
    } else {
        let first = Theme::first_choice(scheme.prefers_dark());
        root.add(first.as_str());
    }

    let after = if root.contains(DARK) { Theme::Dark } else { Theme::Light };
    if before == ThemeState::Both {
        warn!("both theme classes were present; toggled both and persisting {after}");
    }
    debug!("theme click: {before:?} -> {:?}", classify(root));
    after
}

// =============================================================================
// PURE FORMS
// =============================================================================

/// Class state after load, given the stored preference.
#[must_use]
pub fn restore(classes: &ClassList, stored: Option<&str>) -> (ClassList, Option<Theme>) {
    let mut next = classes.clone();
    let applied = apply_stored(&mut next, stored);
    (next, applied)
}

/// Class state and value to persist after one click.
#[must_use]
pub fn transition(classes: &ClassList, os_prefers_dark: bool) -> (ClassList, Theme) {
    let mut next = classes.clone();
    let theme = apply_click(&mut next, &FixedScheme { prefers_dark: os_prefers_dark });
    (next, theme)
}

// =============================================================================
// THEME TOGGLE
// =============================================================================

/// Synchronizes the root element's theme class with the stored preference
/// and user clicks.
///
/// `storage` is `None` when the host has no usable storage area; reads then
/// behave as "no preference" and writes are skipped.
pub struct ThemeToggle<S, R, M> {
    storage: Option<S>,
    root: R,
    scheme: M,
    storage_key: String,
}

impl<S, R, M> ThemeToggle<S, R, M>
where
    S: PreferenceStore,
    R: RootClasses,
    M: ColorSchemeQuery,
{
    pub fn new(storage: Option<S>, root: R, scheme: M) -> Self {
        Self { storage, root, scheme, storage_key: DEFAULT_STORAGE_KEY.to_owned() }
    }

    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Page-load step: apply the stored preference, if any.
    pub fn initialize(&mut self) -> Option<Theme> {
        let stored = self.storage.as_ref().and_then(|s| s.get(&self.storage_key));
        if self.storage.is_none() {
            debug!("storage unavailable; no theme restored");
        }
        let applied = apply_stored(&mut self.root, stored.as_deref());
        if let Some(theme) = applied {
            info!("restored {theme} theme");
        }
        applied
    }

    /// Click step: flip or choose the theme, then persist it.
    pub fn on_click(&mut self) -> Theme {
        let theme = apply_click(&mut self.root, &self.scheme);
        self.persist(theme);
        theme
    }

    fn persist(&mut self, theme: Theme) {
        let Some(storage) = self.storage.as_mut() else {
            debug!("storage unavailable; {theme} not persisted");
            return;
        };
        if let Err(err) = storage.set(&self.storage_key, theme.as_str()) {
            warn!("failed to persist theme: {err}");
        }
    }

    /// Current theme state of the root element.
    pub fn state(&self) -> ThemeState {
        classify(&self.root)
    }

    pub fn root(&self) -> &R {
        &self.root
    }

    pub fn storage(&self) -> Option<&S> {
        self.storage.as_ref()
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }
}
