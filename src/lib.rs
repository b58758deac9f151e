mod views;
mod routes;
pub mod configs;
pub mod error;
pub mod preference;

pub use crate::routes::*;
pub use crate::configs::ThemeConfig;
pub use crate::error::PreferenceError;
pub use crate::preference::{ PreferenceResolver, ThemePreference, ThemeSource };
