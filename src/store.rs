//! Persistent key/value storage for the theme preference.
//!
//! The browser implementation lives in `dom::LocalStore`. [`MemoryStore`]
//! backs non-browser hosts and tests.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashMap;

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage read failed: {0}")]
    Read(String),
    #[error("storage write failed: {0}")]
    Write(String),
}

/// A string key/value store scoped to the page's origin.
pub trait PreferenceStore {
    /// Read `key`. `Ok(None)` means the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-process store. Contents are lost when it is dropped.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    unavailable: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every access fails with [`StorageError::Unavailable`].
    #[must_use]
    pub fn unavailable() -> Self {
        Self { entries: HashMap::new(), unavailable: true }
    }

    /// Seed `key` with `value`, bypassing the availability check.
    #[must_use]
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_owned(), value.to_owned());
        self
    }

    /// Raw contents of `key`, bypassing the availability check.
    pub fn peek(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    fn check(&self) -> Result<(), StorageError> {
        if self.unavailable {
            Err(StorageError::Unavailable("memory store disabled".to_owned()))
        } else {
            Ok(())
        }
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.check()?;
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check()?;
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
