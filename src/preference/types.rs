const DARK_VALUE: &str = "dark";

/// Where the current light/dark decision came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeSource {
    UserOverride,
    System,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemePreference {
    pub source: ThemeSource,
    pub is_dark: bool,
}

impl ThemePreference {
    pub fn user_override(is_dark: bool) -> Self {
        Self { source: ThemeSource::UserOverride, is_dark }
    }

    pub fn system(is_dark: bool) -> Self {
        Self { source: ThemeSource::System, is_dark }
    }
}

/// Value written to the store for an explicit user choice. Light is stored
/// as the empty string, which reads back as "no override".
pub fn encode_override(is_dark: bool) -> &'static str {
    if is_dark { DARK_VALUE } else { "" }
}

/// Any non-empty stored value is a dark override; absent or empty defers to
/// the system.
pub fn decode_override(raw: Option<&str>) -> Option<bool> {
    match raw.map(str::trim) {
        None | Some("") => None,
        Some(_) => Some(true),
    }
}
