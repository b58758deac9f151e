use crate::error::PreferenceError;

/// Durable synchronous key-value store holding the user's override.
///
/// Both operations may fail (storage disabled, quota exceeded); callers are
/// expected to recover locally.
pub trait PreferenceStore {
    fn read(&self, key: &str) -> Result<Option<String>, PreferenceError>;

    fn write(&self, key: &str, value: &str) -> Result<(), PreferenceError>;
}
