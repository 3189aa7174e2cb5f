//! Browser `localStorage` backend and the process-wide store handle.

use std::cell::OnceCell;

use hostbridge_core::{BridgeError, KeyValueBackend, PrefixedStore, Result};

use crate::error::js_error;

/// Prefix on every key this binary writes to `localStorage`.
///
/// It lets entries created here be identified and cleared without touching
/// keys written by other scripts sharing the same page.
pub const STORAGE_PREFIX: &str = "hostbridge/";

/// `window.localStorage` wrapped as a [`KeyValueBackend`].
///
/// Clones share the same underlying host object; the host owns its lifetime
/// and its persistence, so there is no teardown.
#[derive(Clone)]
pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    /// Bind to the window's `localStorage`.
    ///
    /// Fails with [`BridgeError::Host`] when no window exists in this context
    /// or the host denies storage access.
    pub fn new() -> Result<Self> {
        let window = web_sys::window()
            .ok_or_else(|| BridgeError::Host("no window in this context".into()))?;
        let storage = window
            .local_storage()
            .map_err(|err| js_error("localStorage", err))?
            .ok_or_else(|| BridgeError::Host("localStorage unavailable".into()))?;
        Ok(Self { storage })
    }
}

impl KeyValueBackend for LocalStorage {
    fn get_item(&self, name: &str) -> Result<Option<String>> {
        self.storage
            .get_item(name)
            .map_err(|err| js_error("getItem", err))
    }

    fn set_item(&self, name: &str, value: &str) -> Result<()> {
        self.storage
            .set_item(name, value)
            .map_err(|err| js_error("setItem", err))
    }

    fn remove_item(&self, name: &str) -> Result<()> {
        self.storage
            .remove_item(name)
            .map_err(|err| js_error("removeItem", err))
    }

    fn key(&self, index: u32) -> Result<Option<String>> {
        self.storage.key(index).map_err(|err| js_error("key", err))
    }

    fn length(&self) -> Result<u32> {
        self.storage.length().map_err(|err| js_error("length", err))
    }

    fn keys(&self) -> Result<Vec<String>> {
        let len = self.length()?;
        let mut keys = Vec::with_capacity(len as usize);
        for index in 0..len {
            if let Some(name) = self.key(index)? {
                keys.push(name);
            }
        }
        Ok(keys)
    }
}

thread_local! {
    static SHARED: OnceCell<PrefixedStore<LocalStorage>> = const { OnceCell::new() };
}

/// The process-wide store over `window.localStorage`.
///
/// Built on first use with [`STORAGE_PREFIX`] and reused for the lifetime of
/// the page. Handles are cheap clones over the same host object.
pub fn local_store() -> Result<PrefixedStore<LocalStorage>> {
    SHARED.with(|cell| {
        if let Some(store) = cell.get() {
            return Ok(store.clone());
        }
        let store = PrefixedStore::new(STORAGE_PREFIX, LocalStorage::new()?);
        Ok(cell.get_or_init(|| store).clone())
    })
}
