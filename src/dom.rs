//! Browser wiring: `localStorage`, `<body>`, and the trigger control.
//!
//! Mounting waits for `DOMContentLoaded` when the document is still loading,
//! otherwise it runs immediately. Every failure is logged and leaves the page
//! untouched; nothing is surfaced to the user.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{Document, Element, Event, HtmlElement, Storage, Window};

use crate::config::ToggleConfig;
use crate::consts::CONFIG_META_NAME;
use crate::controller::ThemeController;
use crate::store::{PreferenceStore, StorageError};
use crate::surface::ThemeSurface;

#[derive(Debug, thiserror::Error)]
pub enum MountError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("document has no <body>")]
    MissingRoot,
    #[error("no element matches `{0}`")]
    MissingTrigger(String),
    #[error("invalid trigger selector `{selector}`: {reason}")]
    InvalidSelector { selector: String, reason: String },
    #[error("could not attach listener: {0}")]
    Listen(String),
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

// ── Storage ─────────────────────────────────────────────────────

/// `window.localStorage`. Opening can throw (disabled storage, sandboxed
/// frames); the reason is kept and reported on each access.
pub struct LocalStore {
    storage: Result<Storage, String>,
}

impl LocalStore {
    pub fn open(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) => Err("localStorage is not exposed".to_owned()),
            Err(err) => Err(describe(&err)),
        };
        Self { storage }
    }

    fn storage(&self) -> Result<&Storage, StorageError> {
        self.storage.as_ref().map_err(|reason| StorageError::Unavailable(reason.clone()))
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?.get_item(key).map_err(|err| StorageError::Read(describe(&err)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?.set_item(key, value).map_err(|err| StorageError::Write(describe(&err)))
    }
}

// ── Surface ─────────────────────────────────────────────────────

/// Dark marker as a class on `<body>`, glyph as the trigger's text content.
pub struct DomSurface {
    root: HtmlElement,
    trigger: Element,
    dark_class: String,
}

impl DomSurface {
    pub fn new(root: HtmlElement, trigger: Element, dark_class: String) -> Self {
        Self { root, trigger, dark_class }
    }
}

impl ThemeSurface for DomSurface {
    fn is_dark(&self) -> bool {
        self.root.class_list().contains(&self.dark_class)
    }

    fn set_dark(&mut self, dark: bool) {
        let classes = self.root.class_list();
        let result = if dark {
            classes.add_1(&self.dark_class)
        } else {
            classes.remove_1(&self.dark_class)
        };
        if let Err(err) = result {
            log::warn!("could not update `{}` class: {}", self.dark_class, describe(&err));
        }
    }

    fn toggle_dark(&mut self) -> bool {
        match self.root.class_list().toggle(&self.dark_class) {
            Ok(dark) => dark,
            Err(err) => {
                log::warn!("could not toggle `{}` class: {}", self.dark_class, describe(&err));
                self.is_dark()
            }
        }
    }

    fn set_glyph(&mut self, glyph: &str) {
        self.trigger.set_text_content(Some(glyph));
    }
}

// ── Mounting ────────────────────────────────────────────────────

/// A live click listener. Dropping it detaches the listener.
struct Mounted {
    trigger: Element,
    on_click: Closure<dyn FnMut(Event)>,
}

impl Drop for Mounted {
    fn drop(&mut self) {
        if let Err(err) = self
            .trigger
            .remove_event_listener_with_callback("click", self.on_click.as_ref().unchecked_ref())
        {
            log::warn!("could not detach theme toggle: {}", describe(&err));
        }
    }
}

/// Resolve both elements before touching the page, then apply the saved
/// theme and attach the click handler.
fn mount(window: &Window, document: &Document, config: &ToggleConfig) -> Result<Mounted, MountError> {
    let root = document.body().ok_or(MountError::MissingRoot)?;
    let selector = &config.trigger_selector;
    let trigger = document
        .query_selector(selector)
        .map_err(|err| MountError::InvalidSelector { selector: selector.clone(), reason: describe(&err) })?
        .ok_or_else(|| MountError::MissingTrigger(selector.clone()))?;

    let surface = DomSurface::new(root, trigger.clone(), config.dark_class.clone());
    let mut controller = ThemeController::new(config.clone(), LocalStore::open(window), surface);
    let applied = controller.apply_saved();
    log::debug!("theme toggle mounted on `{selector}` with saved preference {applied:?}");

    let is_link = trigger.tag_name().eq_ignore_ascii_case("a");
    let on_click = Closure::wrap(Box::new(move |event: Event| {
        if is_link {
            event.prevent_default();
        }
        controller.toggle();
    }) as Box<dyn FnMut(Event)>);
    trigger
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .map_err(|err| MountError::Listen(describe(&err)))?;

    Ok(Mounted { trigger, on_click })
}

fn mount_or_warn(window: &Window, document: &Document, config: &ToggleConfig) -> Option<Mounted> {
    match mount(window, document, config) {
        Ok(mounted) => Some(mounted),
        Err(err) => {
            log::warn!("theme toggle disabled: {err}");
            None
        }
    }
}

// ── Handle ──────────────────────────────────────────────────────

struct HandleState {
    document: Document,
    on_ready: Option<Closure<dyn FnMut()>>,
    mounted: Option<Mounted>,
}

impl Drop for HandleState {
    fn drop(&mut self) {
        if let Some(on_ready) = self.on_ready.take() {
            if let Err(err) = self
                .document
                .remove_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
            {
                log::warn!("could not detach ready listener: {}", describe(&err));
            }
        }
    }
}

/// Owns the toggle's listeners. Dropping the handle detaches them.
pub struct ToggleHandle {
    state: Rc<RefCell<HandleState>>,
}

impl ToggleHandle {
    /// Whether the toggle found its elements and is listening for clicks.
    pub fn is_mounted(&self) -> bool {
        self.state.borrow().mounted.is_some()
    }

    /// Keep the listeners alive for the rest of the page's lifetime.
    pub fn forget(self) {
        std::mem::forget(self);
    }
}

/// Start the toggle, deferring to `DOMContentLoaded` while the document is
/// still loading. Returns `None` outside a browser document.
pub fn start(config: ToggleConfig) -> Option<ToggleHandle> {
    let (window, document) = match browser() {
        Ok(found) => found,
        Err(err) => {
            log::warn!("theme toggle disabled: {err}");
            return None;
        }
    };

    let state = Rc::new(RefCell::new(HandleState { document: document.clone(), on_ready: None, mounted: None }));

    if document.ready_state() == "loading" {
        let weak = Rc::downgrade(&state);
        let ready_document = document.clone();
        let on_ready = Closure::wrap(Box::new(move || {
            let Some(state) = weak.upgrade() else {
                return;
            };
            let mounted = mount_or_warn(&window, &ready_document, &config);
            state.borrow_mut().mounted = mounted;
        }) as Box<dyn FnMut()>);
        if let Err(err) =
            document.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
        {
            log::warn!("theme toggle disabled: {}", MountError::Listen(describe(&err)));
            return None;
        }
        state.borrow_mut().on_ready = Some(on_ready);
    } else {
        let mounted = mount_or_warn(&window, &document, &config);
        state.borrow_mut().mounted = mounted;
    }

    Some(ToggleHandle { state })
}

fn browser() -> Result<(Window, Document), MountError> {
    let window = web_sys::window().ok_or(MountError::NoWindow)?;
    let document = window.document().ok_or(MountError::NoDocument)?;
    Ok((window, document))
}

/// Read the JSON config from `<meta name="theme-toggle-config">`. Falls back
/// to defaults when the tag is absent or its content does not parse.
pub fn page_config(document: &Document) -> ToggleConfig {
    let selector = format!("meta[name=\"{CONFIG_META_NAME}\"]");
    let raw = match document.query_selector(&selector) {
        Ok(Some(meta)) => meta.get_attribute("content"),
        Ok(None) => None,
        Err(err) => {
            log::warn!("could not look up toggle config: {}", describe(&err));
            None
        }
    };
    let Some(raw) = raw else {
        return ToggleConfig::default();
    };
    ToggleConfig::from_json(&raw).unwrap_or_else(|err| {
        log::warn!("{err}; using defaults");
        ToggleConfig::default()
    })
}

/// Install the console logger and panic hook.
pub fn init_logging() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("console logger already installed");
    }
}

/// Module entry point: starts the toggle for the page's lifetime.
#[wasm_bindgen(start)]
pub fn run() {
    init_logging();
    let config = match browser() {
        Ok((_, document)) => page_config(&document),
        Err(_) => ToggleConfig::default(),
    };
    if let Some(handle) = start(config) {
        handle.forget();
    }
}
