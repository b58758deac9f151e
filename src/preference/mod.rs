//! Dark/light preference engine.
//!
//! [`PreferenceResolver`] reconciles a stored user override, the system
//! "prefers dark" signal and live toggles, and mirrors the result onto the
//! document root class and the toggle icon. Collaborators are injected
//! through the traits below; browser implementations live in `web`.

pub mod types;
pub mod storage;
pub mod system;
pub mod display;
pub mod resolver;
#[cfg(target_arch = "wasm32")]
pub mod web;

// Re-export commonly used items
pub use types::{ ThemePreference, ThemeSource, encode_override, decode_override };
pub use storage::PreferenceStore;
pub use system::{ SystemScheme, SchemeListener };
pub use display::{ ThemeDisplay, ToggleTrigger, ClickHandler };
pub use resolver::PreferenceResolver;
