use std::fmt::{ Display, Formatter };

#[derive(Debug, Clone, PartialEq)]
pub enum PreferenceError {
    Storage(String),
    Unavailable(String),
    MissingElement(String),
    Listener(String),
    Config(String),
}

impl Display for PreferenceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PreferenceError::Storage(msg) => write!(f, "Storage Error: {}", msg),
            PreferenceError::Unavailable(msg) => write!(f, "Capability Unavailable: {}", msg),
            PreferenceError::MissingElement(id) => write!(f, "Missing Element: #{}", id),
            PreferenceError::Listener(msg) => write!(f, "Listener Error: {}", msg),
            PreferenceError::Config(msg) => write!(f, "Config Error: {}", msg),
        }
    }
}

impl std::error::Error for PreferenceError {}

impl From<serde_json::Error> for PreferenceError {
    fn from(error: serde_json::Error) -> Self {
        PreferenceError::Config(error.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for PreferenceError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        PreferenceError::Storage(format!("{:?}", value))
    }
}
