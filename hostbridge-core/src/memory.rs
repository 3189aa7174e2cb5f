//! In-memory backend for native tests and non-browser embeddings.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::backend::KeyValueBackend;
use crate::error::{BridgeError, Result};

/// Shared, in-memory [`KeyValueBackend`].
///
/// Clones share one underlying map, mirroring how every store in a browser
/// page sees the same `localStorage`. An optional byte quota makes the
/// quota-exhaustion path reachable without a real host.
#[derive(Clone, Default)]
pub struct MemoryBackend {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
    quota: Option<usize>,
}

impl MemoryBackend {
    /// Empty backend with no quota.
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend that refuses any write that would push the total stored bytes
    /// (key names plus values) past `bytes`.
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            quota: Some(bytes),
            ..Self::default()
        }
    }

    fn used_bytes(entries: &BTreeMap<String, String>) -> usize {
        entries.iter().map(|(k, v)| k.len() + v.len()).sum()
    }
}

impl KeyValueBackend for MemoryBackend {
    fn get_item(&self, name: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(name).cloned())
    }

    fn set_item(&self, name: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.borrow_mut();
        if let Some(quota) = self.quota {
            // An overwrite releases the replaced entry's bytes first.
            let released = entries
                .get(name)
                .map(|old| name.len() + old.len())
                .unwrap_or(0);
            let used = Self::used_bytes(&entries) - released;
            if used + name.len() + value.len() > quota {
                return Err(BridgeError::QuotaExceeded);
            }
        }
        entries.insert(name.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, name: &str) -> Result<()> {
        self.entries.borrow_mut().remove(name);
        Ok(())
    }

    fn key(&self, index: u32) -> Result<Option<String>> {
        Ok(self.entries.borrow().keys().nth(index as usize).cloned())
    }

    fn length(&self) -> Result<u32> {
        Ok(self.entries.borrow().len() as u32)
    }

    fn keys(&self) -> Result<Vec<String>> {
        Ok(self.entries.borrow().keys().cloned().collect())
    }
}
