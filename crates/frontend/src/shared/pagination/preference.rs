//! Where paginated lists remember the user's page position

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use contracts::shared::pagination::PagePreference;
use thiserror::Error;

const KEY_PREFIX: &str = "pagination.";

#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("Storage is not available: {0}")]
    Unavailable(String),

    #[error("Storage operation failed: {0}")]
    Storage(String),

    #[error("Stored preference is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Key-value store for page preferences, keyed by list name
pub trait PreferenceStore {
    fn get(&self, name: &str) -> Result<Option<PagePreference>, PreferenceError>;

    /// Stores without expiry, visible to the whole site
    fn put(&self, name: &str, preference: &PagePreference) -> Result<(), PreferenceError>;
}

impl<S> PreferenceStore for Rc<S>
where
    S: PreferenceStore + ?Sized,
{
    fn get(&self, name: &str) -> Result<Option<PagePreference>, PreferenceError> {
        (**self).get(name)
    }

    fn put(&self, name: &str, preference: &PagePreference) -> Result<(), PreferenceError> {
        (**self).put(name, preference)
    }
}

pub fn storage_key(name: &str) -> String {
    format!("{}{}", KEY_PREFIX, name)
}

fn decode(raw: Option<String>) -> Result<Option<PagePreference>, PreferenceError> {
    match raw {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Browser `localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStoragePreferenceStore;

impl LocalStoragePreferenceStore {
    fn storage() -> Result<web_sys::Storage, PreferenceError> {
        let window = web_sys::window()
            .ok_or_else(|| PreferenceError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| PreferenceError::Storage(format!("{:?}", e)))?
            .ok_or_else(|| PreferenceError::Unavailable("localStorage is disabled".to_string()))
    }
}

impl PreferenceStore for LocalStoragePreferenceStore {
    fn get(&self, name: &str) -> Result<Option<PagePreference>, PreferenceError> {
        let raw = Self::storage()?
            .get_item(&storage_key(name))
            .map_err(|e| PreferenceError::Storage(format!("{:?}", e)))?;
        decode(raw)
    }

    fn put(&self, name: &str, preference: &PagePreference) -> Result<(), PreferenceError> {
        let raw = serde_json::to_string(preference)?;
        Self::storage()?
            .set_item(&storage_key(name), &raw)
            .map_err(|e| PreferenceError::Storage(format!("{:?}", e)))
    }
}

/// In-memory store with the same encoding as [`LocalStoragePreferenceStore`]
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw stored value, as it would appear in the browser
    pub fn raw(&self, name: &str) -> Option<String> {
        self.entries.borrow().get(&storage_key(name)).cloned()
    }

    pub fn insert_raw(&self, name: &str, raw: impl Into<String>) {
        self.entries.borrow_mut().insert(storage_key(name), raw.into());
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, name: &str) -> Result<Option<PagePreference>, PreferenceError> {
        decode(self.raw(name))
    }

    fn put(&self, name: &str, preference: &PagePreference) -> Result<(), PreferenceError> {
        let raw = serde_json::to_string(preference)?;
        self.insert_raw(name, raw);
        Ok(())
    }
}
