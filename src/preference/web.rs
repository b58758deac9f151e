//! Browser collaborators over `web-sys`.

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{ Document, Element, MediaQueryList, MediaQueryListEvent, Storage };

use crate::configs::ThemeConfig;
use crate::error::PreferenceError;
use super::display::{ ClickHandler, ThemeDisplay, ToggleTrigger };
use super::resolver::PreferenceResolver;
use super::storage::PreferenceStore;
use super::system::{ SchemeListener, SystemScheme };

pub type WebResolver = PreferenceResolver<LocalStorageStore, MediaQueryScheme, DomDisplay>;

fn document() -> Option<Document> {
    web_sys::window()?.document()
}

/// `window.localStorage`, looked up on every access since it can throw in
/// restricted browsing contexts.
pub struct LocalStorageStore;

impl LocalStorageStore {
    fn storage(&self) -> Result<Storage, PreferenceError> {
        let window = web_sys::window().ok_or_else(|| PreferenceError::Unavailable("window".to_string()))?;
        window.local_storage()?.ok_or_else(|| PreferenceError::Unavailable("localStorage".to_string()))
    }
}

impl PreferenceStore for LocalStorageStore {
    fn read(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.storage()?.get_item(key)?)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.storage()?.set_item(key, value)?;
        Ok(())
    }
}

pub struct MediaQueryScheme {
    query: String,
}

impl MediaQueryScheme {
    pub fn new(query: &str) -> Self {
        Self { query: query.to_string() }
    }

    fn list(&self) -> Option<MediaQueryList> {
        web_sys::window()?.match_media(&self.query).ok().flatten()
    }
}

impl SystemScheme for MediaQueryScheme {
    fn prefers_dark(&self) -> Option<bool> {
        self.list().map(|list| list.matches())
    }

    fn subscribe(&self, mut listener: SchemeListener) -> Result<(), PreferenceError> {
        let list = self.list().ok_or_else(|| PreferenceError::Unavailable(format!("matchMedia {}", self.query)))?;

        let closure = Closure::<dyn FnMut(MediaQueryListEvent)>::new(move |event: MediaQueryListEvent| {
            listener(event.matches());
        });
        let callback: &js_sys::Function = closure.as_ref().unchecked_ref();

        if list.add_event_listener_with_callback("change", callback).is_err() {
            // Older Safari only has the deprecated addListener
            list
                .add_listener_with_opt_callback(Some(callback))
                .map_err(|e| PreferenceError::Listener(format!("{:?}", e)))?;
        }
        closure.forget();
        Ok(())
    }
}

pub struct DomDisplay {
    config: ThemeConfig,
}

impl DomDisplay {
    pub fn new(config: ThemeConfig) -> Self {
        Self { config }
    }

    fn icon(&self) -> Option<Element> {
        document()?.get_element_by_id(&self.config.toggle_icon_id)
    }
}

impl ThemeDisplay for DomDisplay {
    fn icon_present(&self) -> bool {
        self.icon().is_some()
    }

    fn set_root_dark_class(&self, is_dark: bool) {
        let Some(root) = document().and_then(|doc| doc.document_element()) else {
            return;
        };
        let classes = root.class_list();
        let result = if is_dark {
            classes.add_1(&self.config.dark_class)
        } else {
            classes.remove_1(&self.config.dark_class)
        };
        if let Err(e) = result {
            log::warn!("Failed to update root class: {:?}", e);
        }
    }

    fn set_icon_state(&self, is_dark: bool) {
        let Some(icon) = self.icon() else {
            return;
        };
        let (remove, add) = if is_dark {
            (&self.config.moon_icon, &self.config.sun_icon)
        } else {
            (&self.config.sun_icon, &self.config.moon_icon)
        };
        let classes = icon.class_list();
        if let Err(e) = classes.remove_1(remove).and_then(|_| classes.add_1(add)) {
            log::warn!("Failed to update toggle icon: {:?}", e);
        }
    }
}

pub struct ElementTrigger {
    id: String,
}

impl ElementTrigger {
    pub fn new(id: &str) -> Self {
        Self { id: id.to_string() }
    }
}

impl ToggleTrigger for ElementTrigger {
    fn on_click(&self, mut handler: ClickHandler) -> Result<(), PreferenceError> {
        let element = document()
            .and_then(|doc| doc.get_element_by_id(&self.id))
            .ok_or_else(|| PreferenceError::MissingElement(self.id.clone()))?;

        let closure = Closure::<dyn FnMut()>::new(move || handler());
        element
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            .map_err(|e| PreferenceError::Listener(format!("{:?}", e)))?;
        closure.forget();
        Ok(())
    }
}

/// Wires the engine to the live page. Call once the toggle anchors are mounted.
pub fn install(config: ThemeConfig) -> Rc<WebResolver> {
    let trigger = ElementTrigger::new(&config.toggle_container_id);
    let resolver = Rc::new(
        PreferenceResolver::new(
            config.clone(),
            LocalStorageStore,
            MediaQueryScheme::new(&config.media_query),
            DomDisplay::new(config)
        )
    );
    resolver.initialize(&trigger);
    resolver
}
