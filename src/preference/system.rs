use crate::error::PreferenceError;

pub type SchemeListener = Box<dyn FnMut(bool)>;

/// Operating-system "prefers dark" signal.
pub trait SystemScheme {
    /// `None` when the environment cannot answer the query at all.
    fn prefers_dark(&self) -> Option<bool>;

    /// Registers `listener` for live scheme changes for the rest of the session.
    fn subscribe(&self, listener: SchemeListener) -> Result<(), PreferenceError>;
}
