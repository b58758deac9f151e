use std::cell::Cell;
use std::rc::Rc;

use crate::configs::ThemeConfig;
use super::display::{ ThemeDisplay, ToggleTrigger };
use super::storage::PreferenceStore;
use super::system::SystemScheme;
use super::types::{ decode_override, encode_override, ThemePreference };

/// Single source of truth for whether dark mode is active.
///
/// A stored user override always wins over the system signal. Only
/// [`on_toggle_click`](Self::on_toggle_click) writes the override; live
/// system changes repaint the display and leave the store untouched, so the
/// next fresh resolution honours the override again.
pub struct PreferenceResolver<S, Q, D> {
    config: ThemeConfig,
    store: S,
    system: Q,
    display: D,
    // Last explicit choice made on this page. A light choice persists as "no
    // override", so this is what keeps repeated toggling consistent.
    session_override: Cell<Option<bool>>,
}

impl<S, Q, D> PreferenceResolver<S, Q, D>
    where S: PreferenceStore, Q: SystemScheme, D: ThemeDisplay
{
    pub fn new(config: ThemeConfig, store: S, system: Q, display: D) -> Self {
        Self {
            config,
            store,
            system,
            display,
            session_override: Cell::new(None),
        }
    }

    fn stored_override(&self) -> Option<bool> {
        if let Some(is_dark) = self.session_override.get() {
            return Some(is_dark);
        }
        match self.store.read(&self.config.storage_key) {
            Ok(raw) => decode_override(raw.as_deref()),
            Err(e) => {
                log::warn!("Reading theme override failed, deferring to system: {}", e);
                None
            }
        }
    }

    pub fn resolve(&self) -> ThemePreference {
        match self.stored_override() {
            Some(is_dark) => ThemePreference::user_override(is_dark),
            None => ThemePreference::system(self.system.prefers_dark().unwrap_or(false)),
        }
    }

    pub fn is_dark(&self) -> bool {
        self.resolve().is_dark
    }

    /// Persists an explicit choice and remembers it for the session. A
    /// rejected write is logged, not reported.
    pub fn set_override(&self, is_dark: bool) {
        self.session_override.set(Some(is_dark));
        if let Err(e) = self.store.write(&self.config.storage_key, encode_override(is_dark)) {
            log::warn!("Persisting theme override failed, keeping it for this session: {}", e);
        }
    }

    /// Repaints root class and icon. Does nothing at all when the icon is missing.
    pub fn apply_display(&self, is_dark: bool) {
        if !self.display.icon_present() {
            log::debug!("#{} not found, display left unchanged", self.config.toggle_icon_id);
            return;
        }
        self.display.set_root_dark_class(is_dark);
        self.display.set_icon_state(is_dark);
        log::debug!("Display set to {}", if is_dark { "dark" } else { "light" });
    }

    pub fn on_toggle_click(&self) {
        let next = !self.is_dark();
        self.set_override(next);
        self.apply_display(next);
    }

    pub fn on_system_scheme_change(&self, is_dark_from_os: bool) {
        log::debug!("System scheme changed, prefers dark: {}", is_dark_from_os);
        self.apply_display(is_dark_from_os);
    }
}

impl<S, Q, D> PreferenceResolver<S, Q, D>
    where S: PreferenceStore + 'static, Q: SystemScheme + 'static, D: ThemeDisplay + 'static
{
    /// Applies the resolved theme, then wires the toggle and the system
    /// listener. Either registration may fail without affecting the other.
    pub fn initialize<T: ToggleTrigger>(self: &Rc<Self>, trigger: &T) {
        let preference = self.resolve();
        log::info!("Initial theme: {:?}", preference);
        self.apply_display(preference.is_dark);

        let resolver = Rc::clone(self);
        if let Err(e) = trigger.on_click(Box::new(move || resolver.on_toggle_click())) {
            log::warn!("Theme toggle not registered: {}", e);
        }

        let resolver = Rc::clone(self);
        if let Err(e) = self.system.subscribe(Box::new(move |is_dark| resolver.on_system_scheme_change(is_dark))) {
            log::warn!("System scheme changes not watched: {}", e);
        }
    }
}
