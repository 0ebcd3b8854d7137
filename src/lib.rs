//! # theme-toggle
//!
//! Light/dark theme toggle for web pages. On load the stored preference (if
//! any) is applied as a `light` or `dark` class on the page root; each click
//! on the toggle control flips the class and writes the result back to
//! `localStorage`. With no class applied yet, the first click picks the
//! opposite of the OS color-scheme preference.
//!
//! The logic runs against capability traits so it is testable natively; the
//! `csr` feature adds the `web-sys` adapters and the WASM entry points.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`toggle`] | [`ThemeToggle`] core and the pure `restore`/`transition` forms |
//! | [`theme`] | [`Theme`] and [`ThemeState`] classification |
//! | [`class_list`] | In-memory class-token set |
//! | [`env`] | Storage, root-class, and color-scheme capability traits |
//! | [`config`] | [`ToggleConfig`] page integration settings |
//! | [`error`] | [`ThemeError`] |
//! | [`component`] | Leptos `<ThemeToggleButton/>` |
//! | `browser` | `web-sys` adapters and `wire` (`csr` only) |

#[cfg(feature = "csr")]
pub mod browser;
pub mod class_list;
pub mod component;
pub mod config;
pub mod env;
pub mod error;
pub mod theme;
pub mod toggle;

pub use class_list::ClassList;
pub use config::{RootTarget, ToggleConfig};
pub use error::ThemeError;
pub use theme::{Theme, ThemeState};
pub use toggle::ThemeToggle;

#[cfg(feature = "csr")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "csr")]
fn install_console() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        log::debug!("console logger already installed: {err}");
    }
}

#[cfg(feature = "csr")]
fn wire_for_page(config: &ToggleConfig) -> Result<(), ThemeError> {
    browser::wire(config)?.forget();
    Ok(())
}

/// Wire the toggle with default settings. Call once after the module loads.
#[cfg(feature = "csr")]
#[wasm_bindgen(js_name = startThemeToggle)]
pub fn start() {
    install_console();
    if let Err(err) = wire_for_page(&ToggleConfig::default()) {
        log::error!("theme toggle not wired: {err}");
    }
}

/// Wire the toggle with a JSON [`ToggleConfig`]; missing fields use defaults.
///
/// # Errors
///
/// Rejects malformed config and reports wiring failures to the caller.
#[cfg(feature = "csr")]
#[wasm_bindgen(js_name = startThemeToggleWithConfig)]
pub fn start_with_config(config_json: &str) -> Result<(), JsValue> {
    install_console();
    let config = ToggleConfig::from_json(config_json).map_err(|err| JsValue::from_str(&err.to_string()))?;
    wire_for_page(&config).map_err(|err| JsValue::from_str(&err.to_string()))
}
