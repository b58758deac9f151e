use crate::error::PreferenceError;

pub type ClickHandler = Box<dyn FnMut()>;

/// Observable outputs of the resolved theme: a class on the document root and
/// the toggle icon's moon/sun state.
pub trait ThemeDisplay {
    fn icon_present(&self) -> bool;

    fn set_root_dark_class(&self, is_dark: bool);

    fn set_icon_state(&self, is_dark: bool);
}

/// The clickable control that flips the theme.
pub trait ToggleTrigger {
    fn on_click(&self, handler: ClickHandler) -> Result<(), PreferenceError>;
}
