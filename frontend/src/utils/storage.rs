use std::{cell::RefCell, collections::HashMap, rc::Rc};

use log::warn;
use thiserror::Error;
use web_sys::{Storage, Window};

use crate::api::User;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("failed to {op} `{key}`")]
    Operation { op: &'static str, key: String },
    #[error("failed to encode `{key}`: {reason}")]
    Encode { key: String, reason: String },
}

pub fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "No window object".to_string())
}

pub fn local_storage() -> Result<Storage, String> {
    window()?
        .local_storage()
        .map_err(|_| "No localStorage".to_string())?
        .ok_or_else(|| "No localStorage".to_string())
}

/// Minimal string key-value store. Backed by `localStorage` in the browser.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Result<Storage, StorageError> {
        local_storage().map_err(StorageError::Unavailable)
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|_| StorageError::Operation {
                op: "read",
                key: key.to_string(),
            })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|_| StorageError::Operation {
                op: "write",
                key: key.to_string(),
            })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|_| StorageError::Operation {
                op: "remove",
                key: key.to_string(),
            })
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Typed access to the two persisted session entries.
#[derive(Clone)]
pub struct SessionStorage {
    inner: Rc<dyn KeyValueStore>,
}

impl SessionStorage {
    pub fn new(inner: Rc<dyn KeyValueStore>) -> Self {
        Self { inner }
    }

    pub fn browser() -> Self {
        Self::new(Rc::new(BrowserStorage))
    }

    pub fn in_memory(store: MemoryStorage) -> Self {
        Self::new(Rc::new(store))
    }

    pub fn token(&self) -> Option<String> {
        match self.inner.get(TOKEN_KEY) {
            Ok(token) => token.filter(|t| !t.trim().is_empty()),
            Err(err) => {
                warn!("Unable to read stored token: {}", err);
                None
            }
        }
    }

    pub fn set_token(&self, token: &str) -> Result<(), StorageError> {
        self.inner.set(TOKEN_KEY, token)
    }

    pub fn cached_user(&self) -> Option<User> {
        let raw = self.inner.get(USER_KEY).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }

    pub fn set_user(&self, user: &User) -> Result<(), StorageError> {
        let encoded = serde_json::to_string(user).map_err(|err| StorageError::Encode {
            key: USER_KEY.to_string(),
            reason: err.to_string(),
        })?;
        self.inner.set(USER_KEY, &encoded)
    }

    /// Removes both session entries. Failures are logged, never surfaced.
    pub fn clear(&self) {
        for key in [TOKEN_KEY, USER_KEY] {
            if let Err(err) = self.inner.remove(key) {
                warn!("Unable to clear `{}` from storage: {}", key, err);
            }
        }
    }
}
