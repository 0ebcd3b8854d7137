//! `web-sys` adapters and page wiring.
//!
//! SYSTEM CONTEXT
//! ==============
//! Implements the `env` capabilities over `window.localStorage`, an element's
//! `DOMTokenList`, and `window.matchMedia`, then wires a click listener on the
//! toggle control. Compiled only with the `csr` feature.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, DomTokenList, Element, Event, MediaQueryList, Storage, Window};

use crate::config::{RootTarget, ToggleConfig};
use crate::env::{ColorSchemeQuery, PreferenceStore, RootClasses};
use crate::error::ThemeError;
use crate::theme::{Theme, ThemeState};
use crate::toggle::ThemeToggle;

const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Toggle bound to the live page.
pub type PageToggle = ThemeToggle<LocalStorage, DomClasses, MediaQuery>;

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

// =============================================================================
// STORAGE
// =============================================================================

/// `window.localStorage`.
pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    /// `None` when the page has no usable storage area. Accessing
    /// `localStorage` throws when storage is disabled by policy.
    pub fn from_window(window: &Window) -> Option<Self> {
        match window.local_storage() {
            Ok(Some(storage)) => Some(Self { storage }),
            Ok(None) => {
                debug!("localStorage not available");
                None
            }
            Err(err) => {
                debug!("localStorage access denied: {}", describe(&err));
                None
            }
        }
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        match self.storage.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                warn!("localStorage read of {key:?} failed: {}", describe(&err));
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.storage
            .set_item(key, value)
            .map_err(|err| ThemeError::StorageWrite(describe(&err)))
    }
}

// =============================================================================
// ROOT CLASSES
// =============================================================================

/// Class list of the element carrying the theme.
pub struct DomClasses {
    list: DomTokenList,
}

impl DomClasses {
    pub fn new(element: &Element) -> Self {
        Self { list: element.class_list() }
    }
}

impl RootClasses for DomClasses {
    fn contains(&self, token: &str) -> bool {
        self.list.contains(token)
    }

    fn add(&mut self, token: &str) {
        if let Err(err) = self.list.add_1(token) {
            warn!("classList.add({token:?}) failed: {}", describe(&err));
        }
    }

    fn remove(&mut self, token: &str) {
        if let Err(err) = self.list.remove_1(token) {
            warn!("classList.remove({token:?}) failed: {}", describe(&err));
        }
    }

    fn toggle(&mut self, token: &str) -> bool {
        match self.list.toggle(token) {
            Ok(present) => present,
            Err(err) => {
                warn!("classList.toggle({token:?}) failed: {}", describe(&err));
                self.list.contains(token)
            }
        }
    }
}

// =============================================================================
// COLOR SCHEME
// =============================================================================

/// Live `(prefers-color-scheme: dark)` query. Answers "not dark" where the
/// browser does not support the query.
pub struct MediaQuery {
    list: Option<MediaQueryList>,
}

impl MediaQuery {
    pub fn new(window: &Window) -> Self {
        let list = match window.match_media(PREFERS_DARK_QUERY) {
            Ok(list) => list,
            Err(err) => {
                debug!("matchMedia unsupported: {}", describe(&err));
                None
            }
        };
        Self { list }
    }
}

impl ColorSchemeQuery for MediaQuery {
    fn prefers_dark(&self) -> bool {
        self.list.as_ref().is_some_and(MediaQueryList::matches)
    }
}

// =============================================================================
// PAGE
// =============================================================================

fn window_and_document() -> Result<(Window, Document), ThemeError> {
    let window = web_sys::window().ok_or(ThemeError::NoWindow)?;
    let document = window.document().ok_or(ThemeError::NoDocument)?;
    Ok((window, document))
}

fn root_element(document: &Document, target: RootTarget) -> Result<Element, ThemeError> {
    let root = match target {
        RootTarget::Body => document.body().map(Element::from),
        RootTarget::DocumentElement => document.document_element(),
    };
    root.ok_or(ThemeError::NoRoot { target })
}

fn build_toggle(window: &Window, document: &Document, config: &ToggleConfig) -> Result<PageToggle, ThemeError> {
    let root = root_element(document, config.root)?;
    let toggle = ThemeToggle::new(LocalStorage::from_window(window), DomClasses::new(&root), MediaQuery::new(window))
        .with_storage_key(config.storage_key.clone());
    Ok(toggle)
}

/// Build a toggle over the current page without touching it.
///
/// # Errors
///
/// Fails if the window, document, or configured root element is missing.
pub fn page_toggle(config: &ToggleConfig) -> Result<PageToggle, ThemeError> {
    let (window, document) = window_and_document()?;
    build_toggle(&window, &document, config)
}

/// Run the page-load step once.
///
/// # Errors
///
/// See [`page_toggle`].
pub fn initialize(config: &ToggleConfig) -> Result<Option<Theme>, ThemeError> {
    Ok(page_toggle(config)?.initialize())
}

/// Run the click step once.
///
/// # Errors
///
/// See [`page_toggle`].
pub fn click(config: &ToggleConfig) -> Result<Theme, ThemeError> {
    Ok(page_toggle(config)?.on_click())
}

/// Run the click step once and return the class state it leaves behind.
///
/// Differs from the persisted theme only from the both-tokens state, where
/// the click removes both classes.
///
/// # Errors
///
/// See [`page_toggle`].
pub fn click_state(config: &ToggleConfig) -> Result<ThemeState, ThemeError> {
    let mut toggle = page_toggle(config)?;
    toggle.on_click();
    Ok(toggle.state())
}

/// Current answer of the `(prefers-color-scheme: dark)` query; `false`
/// outside a window.
pub fn os_prefers_dark() -> bool {
    web_sys::window().is_some_and(|window| MediaQuery::new(&window).prefers_dark())
}

/// Click listener attached by [`wire`].
///
/// Dropping the binding detaches the listener; [`Binding::forget`] keeps it
/// for the life of the page.
pub struct Binding {
    control: Element,
    on_click: Closure<dyn FnMut(Event)>,
    toggle: Rc<RefCell<PageToggle>>,
}

impl Binding {
    /// Shared handle to the toggle driven by the listener.
    pub fn toggle(&self) -> Rc<RefCell<PageToggle>> {
        Rc::clone(&self.toggle)
    }

    /// Leak the binding so the listener outlives this scope.
    pub fn forget(self) {
        std::mem::forget(self);
    }
}

impl Drop for Binding {
    fn drop(&mut self) {
        if let Err(err) = self
            .control
            .remove_event_listener_with_callback("click", self.on_click.as_ref().unchecked_ref())
        {
            warn!("failed to detach theme toggle listener: {}", describe(&err));
        }
    }
}

/// Apply the stored theme and attach the click handler to the control.
///
/// # Errors
///
/// Fails fast if the page lacks the root element or the toggle control, or if
/// the listener cannot be attached.
pub fn wire(config: &ToggleConfig) -> Result<Binding, ThemeError> {
    let (window, document) = window_and_document()?;
    let mut toggle = build_toggle(&window, &document, config)?;
    toggle.initialize();

    let control = document
        .get_element_by_id(&config.toggle_id)
        .ok_or_else(|| ThemeError::MissingControl { id: config.toggle_id.clone() })?;

    let toggle = Rc::new(RefCell::new(toggle));
    let handler_toggle = Rc::clone(&toggle);
    let on_click = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        let theme = handler_toggle.borrow_mut().on_click();
        debug!("theme toggled to {theme}");
    });

    control
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .map_err(|err| ThemeError::Dom(describe(&err)))?;

    info!("theme toggle wired to #{}", config.toggle_id);
    Ok(Binding { control, on_click, toggle })
}
