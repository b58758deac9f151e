use std::cell::RefCell;
use std::collections::{ BTreeSet, HashMap };
use std::rc::Rc;

use crate::configs::ThemeConfig;
use crate::error::PreferenceError;
use crate::preference::{
    ClickHandler,
    PreferenceStore,
    SchemeListener,
    SystemScheme,
    ThemeDisplay,
    ToggleTrigger,
};

#[derive(Default)]
struct StoreState {
    values: HashMap<String, String>,
    fail_reads: bool,
    fail_writes: bool,
}

/// Stand-in for browser local storage that can be switched into failure modes.
#[derive(Clone, Default)]
pub struct MemoryStore {
    state: Rc<RefCell<StoreState>>,
}

impl MemoryStore {
    pub fn put(&self, key: &str, value: &str) {
        self.state.borrow_mut().values.insert(key.to_string(), value.to_string());
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.state.borrow().values.get(key).cloned()
    }

    pub fn fail_reads(&self, fail: bool) {
        self.state.borrow_mut().fail_reads = fail;
    }

    pub fn fail_writes(&self, fail: bool) {
        self.state.borrow_mut().fail_writes = fail;
    }
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        let state = self.state.borrow();
        if state.fail_reads {
            return Err(PreferenceError::Storage("read blocked".to_string()));
        }
        Ok(state.values.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let mut state = self.state.borrow_mut();
        if state.fail_writes {
            return Err(PreferenceError::Storage("quota exceeded".to_string()));
        }
        state.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Default)]
struct SchemeState {
    prefers_dark: Option<bool>,
    listeners: Vec<SchemeListener>,
}

/// System preference signal whose value and change events are driven by the test.
#[derive(Clone, Default)]
pub struct MockScheme {
    state: Rc<RefCell<SchemeState>>,
}

impl MockScheme {
    pub fn prefers(is_dark: bool) -> Self {
        let scheme = Self::default();
        scheme.state.borrow_mut().prefers_dark = Some(is_dark);
        scheme
    }

    pub fn unsupported() -> Self {
        Self::default()
    }

    pub fn listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }

    /// Changes the system value and notifies subscribers.
    pub fn emit(&self, is_dark: bool) {
        self.state.borrow_mut().prefers_dark = Some(is_dark);
        let mut listeners = std::mem::take(&mut self.state.borrow_mut().listeners);
        for listener in listeners.iter_mut() {
            listener(is_dark);
        }
        self.state.borrow_mut().listeners.extend(listeners);
    }
}

impl SystemScheme for MockScheme {
    fn prefers_dark(&self) -> Option<bool> {
        self.state.borrow().prefers_dark
    }

    fn subscribe(&self, listener: SchemeListener) -> Result<(), PreferenceError> {
        let mut state = self.state.borrow_mut();
        if state.prefers_dark.is_none() {
            return Err(PreferenceError::Unavailable("matchMedia".to_string()));
        }
        state.listeners.push(listener);
        Ok(())
    }
}

struct DisplayState {
    dark_class: String,
    moon_icon: String,
    sun_icon: String,
    icon_present: bool,
    root: BTreeSet<String>,
    icon: BTreeSet<String>,
}

/// Root element and icon modelled as plain class sets.
#[derive(Clone)]
pub struct MockDisplay {
    state: Rc<RefCell<DisplayState>>,
}

impl MockDisplay {
    pub fn new(config: &ThemeConfig) -> Self {
        Self::build(config, true)
    }

    pub fn without_icon(config: &ThemeConfig) -> Self {
        Self::build(config, false)
    }

    fn build(config: &ThemeConfig, icon_present: bool) -> Self {
        Self {
            state: Rc::new(
                RefCell::new(DisplayState {
                    dark_class: config.dark_class.clone(),
                    moon_icon: config.moon_icon.clone(),
                    sun_icon: config.sun_icon.clone(),
                    icon_present,
                    root: BTreeSet::new(),
                    icon: BTreeSet::new(),
                })
            ),
        }
    }

    pub fn root_classes(&self) -> BTreeSet<String> {
        self.state.borrow().root.clone()
    }

    pub fn icon_classes(&self) -> BTreeSet<String> {
        self.state.borrow().icon.clone()
    }

    pub fn root_is_dark(&self) -> bool {
        let state = self.state.borrow();
        state.root.contains(&state.dark_class)
    }

    pub fn snapshot(&self) -> (BTreeSet<String>, BTreeSet<String>) {
        (self.root_classes(), self.icon_classes())
    }
}

impl ThemeDisplay for MockDisplay {
    fn icon_present(&self) -> bool {
        self.state.borrow().icon_present
    }

    fn set_root_dark_class(&self, is_dark: bool) {
        let mut state = self.state.borrow_mut();
        let class = state.dark_class.clone();
        if is_dark {
            state.root.insert(class);
        } else {
            state.root.remove(&class);
        }
    }

    fn set_icon_state(&self, is_dark: bool) {
        let mut state = self.state.borrow_mut();
        let (add, remove) = if is_dark {
            (state.sun_icon.clone(), state.moon_icon.clone())
        } else {
            (state.moon_icon.clone(), state.sun_icon.clone())
        };
        state.icon.remove(&remove);
        state.icon.insert(add);
    }
}

/// Toggle control; `missing()` behaves like an absent container element.
#[derive(Clone, Default)]
pub struct MockTrigger {
    handler: Rc<RefCell<Option<ClickHandler>>>,
    missing: bool,
}

impl MockTrigger {
    pub fn missing() -> Self {
        Self { missing: true, ..Self::default() }
    }

    pub fn is_registered(&self) -> bool {
        self.handler.borrow().is_some()
    }

    pub fn click(&self) {
        if let Some(handler) = self.handler.borrow_mut().as_mut() {
            handler();
        }
    }
}

impl ToggleTrigger for MockTrigger {
    fn on_click(&self, handler: ClickHandler) -> Result<(), PreferenceError> {
        if self.missing {
            return Err(PreferenceError::MissingElement("DarkThemeToggleContainer".to_string()));
        }
        *self.handler.borrow_mut() = Some(handler);
        Ok(())
    }
}
