use crate::errors::{AppError, AppResult};
use crate::store::KeyValueStore;
use std::collections::{HashMap, HashSet};

/// In-process store, used by tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    failing: HashSet<String>,
    read_only: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with raw values, bypassing any encoding.
    pub fn with_values<I, K, V>(values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: values
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            ..Self::default()
        }
    }

    /// Make every subsequent `set` fail.
    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    /// Make subsequent writes to `key` fail; other keys keep working.
    pub fn fail_writes_to(&mut self, key: &str) {
        self.failing.insert(key.to_string());
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        if self.read_only || self.failing.contains(key) {
            return Err(AppError::Other(format!("write to '{key}' rejected")));
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
