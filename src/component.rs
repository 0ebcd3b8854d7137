//! Leptos button that drives the page theme.
//!
//! An alternative to `browser::wire` for pages rendered with Leptos:
//! the button restores the stored theme when it is created and runs the click
//! step itself. Use one or the other on a page, not both.

#[cfg(test)]
#[path = "component_test.rs"]
mod component_test;

use leptos::prelude::*;

use crate::config::ToggleConfig;
use crate::theme::{Theme, ThemeState};

/// Theme the next click will leave applied.
///
/// `None` from the corrupted both-tokens state: the click removes both and
/// leaves no theme class.
pub fn next_theme(state: ThemeState, os_prefers_dark: bool) -> Option<Theme> {
    match state {
        ThemeState::Undefined => Some(Theme::first_choice(os_prefers_dark)),
        ThemeState::Light | ThemeState::Dark => state.theme().map(Theme::opposite),
        ThemeState::Both => None,
    }
}

/// Accessible label describing what the next click does.
pub fn button_label(next: Option<Theme>) -> &'static str {
    match next {
        Some(Theme::Dark) => "Switch to dark mode",
        Some(Theme::Light) => "Switch to light mode",
        None => "Reset theme",
    }
}

/// Glyph for the theme the next click applies.
pub fn button_icon(next: Option<Theme>) -> &'static str {
    match next {
        Some(Theme::Dark) => "\u{263E}",
        Some(Theme::Light) => "\u{2600}",
        None => "\u{25D0}",
    }
}

#[cfg(feature = "csr")]
fn restore_on_mount(config: &ToggleConfig) -> (ThemeState, bool) {
    match crate::browser::page_toggle(config) {
        Ok(mut toggle) => {
            toggle.initialize();
            (toggle.state(), crate::browser::os_prefers_dark())
        }
        Err(err) => {
            log::warn!("theme not restored: {err}");
            (ThemeState::Undefined, false)
        }
    }
}

#[cfg(not(feature = "csr"))]
fn restore_on_mount(_config: &ToggleConfig) -> (ThemeState, bool) {
    (ThemeState::Undefined, false)
}

/// Theme toggle button.
///
/// Reads a [`ToggleConfig`] from context when one is provided, otherwise uses
/// the defaults (`#theme-toggle`, `localStorage["theme"]`, `<body>`).
#[component]
pub fn ThemeToggleButton() -> impl IntoView {
    let config = use_context::<ToggleConfig>().unwrap_or_default();
    let (initial_state, initial_os_dark) = restore_on_mount(&config);
    let state = RwSignal::new(initial_state);
    let os_dark = RwSignal::new(initial_os_dark);
    let toggle_id = config.toggle_id.clone();

    let on_click = move |_| {
        #[cfg(feature = "csr")]
        {
            match crate::browser::click_state(&config) {
                Ok(after) => {
                    state.set(after);
                    os_dark.set(crate::browser::os_prefers_dark());
                }
                Err(err) => log::error!("theme toggle failed: {err}"),
            }
        }
    };

    let next = move || next_theme(state.get(), os_dark.get());
    let label = move || button_label(next());

    view! {
        <button
            id=toggle_id
            class="theme-toggle"
            type="button"
            title=label
            aria-label=label
            on:click=on_click
        >
            {move || button_icon(next())}
        </button>
    }
}
