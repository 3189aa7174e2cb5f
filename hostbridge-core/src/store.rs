//! Prefix-scoped view over a flat host key/value backend.
//!
//! Values are arbitrary bytes, base64 encoded (RFC 4648 with padding) on the
//! way in because the backend only stores text. Every key this store touches
//! carries an immutable prefix chosen at construction, so independent users
//! of one shared backend stay out of each other's key space.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use tracing::debug;

use crate::backend::KeyValueBackend;
use crate::error::{BridgeError, Result};

/// Namespaced store over a [`KeyValueBackend`].
///
/// The backend is shared, ambient host state; the store holds a handle to it
/// but does not own its lifetime, and imposes no locking of its own. Prefix
/// scoping protects against key collisions between namespaces, not against
/// concurrent mutation from other code in the same host.
#[derive(Clone)]
pub struct PrefixedStore<B> {
    backend: B,
    prefix: String,
}

impl<B: KeyValueBackend> PrefixedStore<B> {
    /// Create a store scoped to `prefix`. No validation is performed; an
    /// empty prefix degenerates the store into operating over the entire
    /// backend namespace.
    pub fn new(prefix: impl Into<String>, backend: B) -> Self {
        Self {
            backend,
            prefix: prefix.into(),
        }
    }

    fn key_for(&self, key: &str) -> String {
        format!("{}{key}", self.prefix)
    }

    /// Decode and return the value stored under `key`.
    ///
    /// Fails with [`BridgeError::NotFound`] when the key has never been set
    /// and with [`BridgeError::Decode`] when the stored string is not valid
    /// base64 (written outside this store's contract).
    pub fn get(&self, key: &str) -> Result<Vec<u8>> {
        let stored = self
            .backend
            .get_item(&self.key_for(key))?
            .ok_or(BridgeError::NotFound)?;
        Ok(BASE64.decode(stored)?)
    }

    /// Encode `value` and store it under `key`.
    ///
    /// Fails with [`BridgeError::QuotaExceeded`] when the backend refuses the
    /// write for lack of space.
    pub fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        let encoded = BASE64.encode(value);
        self.backend.set_item(&self.key_for(key), &encoded)
    }

    /// Remove `key`. Removing an absent key is a no-op, never an error.
    pub fn remove_item(&self, key: &str) -> Result<()> {
        self.backend.remove_item(&self.key_for(key))
    }

    /// Remove every key belonging to this store. Returns the number removed.
    pub fn clear(&self) -> Result<usize> {
        // Snapshot the candidates before deleting anything; removing entries
        // while walking the live backend index is undefined in host stores.
        let keys = self.backend.keys_with_prefix(&self.prefix)?;
        for key in &keys {
            self.remove_item(key)?;
        }
        debug!(prefix = %self.prefix, removed = keys.len(), "cleared store");
        Ok(keys.len())
    }

    /// Remove every key of this store that additionally starts with
    /// `sub_prefix`. Returns the number removed.
    pub fn clear_prefix(&self, sub_prefix: &str) -> Result<usize> {
        let full = format!("{}{sub_prefix}", self.prefix);
        let keys = self.backend.keys_with_prefix(&full)?;
        for key in &keys {
            // `keys` are stripped of the composite prefix; remove_item adds
            // the store prefix back, so only the sub prefix is re-applied.
            self.remove_item(&format!("{sub_prefix}{key}"))?;
        }
        debug!(prefix = %full, removed = keys.len(), "cleared sub-prefix");
        Ok(keys.len())
    }

    /// Name of the n-th key in the backend, with this store's prefix stripped
    /// when present. Fails with [`BridgeError::NotFound`] when `index` is out
    /// of range.
    ///
    /// The index runs over the whole backend, not just this store's keys, so
    /// the returned name can belong to another namespace and comes back
    /// unstripped. That leak is inherited from the backend's own indexed
    /// access and is preserved here rather than tightened. Order is
    /// backend-defined and may change whenever the backend is mutated.
    pub fn key(&self, index: u32) -> Result<String> {
        let name = self.backend.key(index)?.ok_or(BridgeError::NotFound)?;
        Ok(name.strip_prefix(&self.prefix).unwrap_or(&name).to_owned())
    }

    /// Stripped names of every key belonging to this store, in no defined
    /// order.
    pub fn keys(&self) -> Result<Vec<String>> {
        self.backend.keys_with_prefix(&self.prefix)
    }

    /// Total number of keys in the backend, across every namespace. This is
    /// the backend's raw count, not `keys().len()`.
    pub fn length(&self) -> Result<u32> {
        self.backend.length()
    }

    /// The prefix this store was constructed with.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Raw access to the underlying backend, bypassing prefix scoping and the
    /// value codec.
    ///
    /// Key names and values pass through untouched. Anything written this way
    /// is invisible to [`get`](Self::get) unless it lands under this store's
    /// prefix and decodes as base64.
    pub fn backend(&self) -> &B {
        &self.backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryBackend;

    fn store(prefix: &str) -> (PrefixedStore<MemoryBackend>, MemoryBackend) {
        let backend = MemoryBackend::new();
        (PrefixedStore::new(prefix, backend.clone()), backend)
    }

    #[test]
    fn round_trip_bytes() {
        let (store, _) = store("ns/");
        store.set("k", &[1, 2, 3]).unwrap();
        assert_eq!(store.get("k").unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn round_trip_empty_value() {
        let (store, _) = store("ns/");
        store.set("empty", &[]).unwrap();
        assert_eq!(store.get("empty").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn round_trip_every_byte_value() {
        let (store, _) = store("ns/");
        let all: Vec<u8> = (0..=255).collect();
        store.set("all", &all).unwrap();
        assert_eq!(store.get("all").unwrap(), all);
    }

    #[test]
    fn get_missing_key_is_not_found() {
        let (store, _) = store("ns/");
        let err = store.get("never-set").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn namespaces_are_isolated() {
        let backend = MemoryBackend::new();
        let a = PrefixedStore::new("A/", backend.clone());
        let b = PrefixedStore::new("B/", backend.clone());

        a.set("shared-name", b"from a").unwrap();
        assert!(b.get("shared-name").unwrap_err().is_not_found());
        assert!(b.keys().unwrap().is_empty());

        b.set("shared-name", b"from b").unwrap();
        assert_eq!(a.get("shared-name").unwrap(), b"from a");

        // Clearing one namespace must not touch the other.
        assert_eq!(a.clear().unwrap(), 1);
        assert_eq!(b.get("shared-name").unwrap(), b"from b");
    }

    #[test]
    fn remove_is_idempotent() {
        let (store, _) = store("ns/");
        store.remove_item("absent").unwrap();

        store.set("k", b"v").unwrap();
        store.remove_item("k").unwrap();
        store.remove_item("k").unwrap();
        assert!(store.get("k").unwrap_err().is_not_found());
    }

    #[test]
    fn clear_counts_only_own_keys() {
        let (store, backend) = store("ns/");
        store.set("a", b"1").unwrap();
        store.set("b", b"2").unwrap();
        store.set("c", b"3").unwrap();
        backend.set_item("foreign/x", "raw").unwrap();
        backend.set_item("foreign/y", "raw").unwrap();

        assert_eq!(store.clear().unwrap(), 3);
        assert_eq!(backend.length().unwrap(), 2);
        assert_eq!(backend.get_item("foreign/x").unwrap(), Some("raw".into()));
        assert_eq!(backend.get_item("foreign/y").unwrap(), Some("raw".into()));
    }

    #[test]
    fn clear_on_empty_store_returns_zero() {
        let (store, _) = store("ns/");
        assert_eq!(store.clear().unwrap(), 0);
    }

    #[test]
    fn clear_prefix_removes_only_the_sub_namespace() {
        let (store, _) = store("ns/");
        store.set("p/x1", b"1").unwrap();
        store.set("p/x2", b"2").unwrap();
        store.set("q/y1", b"3").unwrap();

        assert_eq!(store.clear_prefix("p/").unwrap(), 2);
        assert!(store.get("p/x1").unwrap_err().is_not_found());
        assert!(store.get("p/x2").unwrap_err().is_not_found());
        assert_eq!(store.get("q/y1").unwrap(), b"3");
    }

    #[test]
    fn clear_prefix_does_not_double_prefix() {
        // Regression guard for re-applying the store prefix on top of the
        // composite prefix during deletion: a key that would only match the
        // doubled form must survive, and the intended key must go.
        let (store, backend) = store("ns/");
        store.set("p/x", b"1").unwrap();
        backend.set_item("ns/ns/p/x", "decoy").unwrap();

        assert_eq!(store.clear_prefix("p/").unwrap(), 1);
        assert!(store.get("p/x").unwrap_err().is_not_found());
        assert_eq!(
            backend.get_item("ns/ns/p/x").unwrap(),
            Some("decoy".to_string())
        );
    }

    #[test]
    fn keys_lists_exactly_own_stripped_names() {
        let (store, backend) = store("ns/");
        store.set("a", b"1").unwrap();
        store.set("b", b"2").unwrap();
        backend.set_item("other/c", "raw").unwrap();
        backend.set_item("nsx", "raw").unwrap();

        let mut keys = store.keys().unwrap();
        keys.sort();
        assert_eq!(keys, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn concrete_scenario_from_empty_backend() {
        let (store, backend) = store("ns/");
        store.set("a", &[1, 2, 3]).unwrap();

        assert_eq!(backend.keys().unwrap(), vec!["ns/a".to_string()]);
        assert_eq!(store.length().unwrap(), 1);
        assert_eq!(store.get("a").unwrap(), vec![1, 2, 3]);
        assert!(store.get("b").unwrap_err().is_not_found());
    }

    #[test]
    fn length_counts_every_namespace() {
        let (store, backend) = store("ns/");
        store.set("a", b"1").unwrap();
        backend.set_item("other/b", "raw").unwrap();

        assert_eq!(store.length().unwrap(), 2);
        assert_eq!(store.keys().unwrap().len(), 1);
    }

    #[test]
    fn indexed_key_spans_foreign_namespaces() {
        let (store, backend) = store("ns/");
        store.set("a", b"1").unwrap();
        backend.set_item("other/b", "raw").unwrap();

        let mut seen: Vec<String> = (0..store.length().unwrap())
            .map(|i| store.key(i).unwrap())
            .collect();
        seen.sort();
        // Own keys come back stripped; foreign keys leak through unstripped.
        assert_eq!(seen, vec!["a".to_string(), "other/b".to_string()]);
    }

    #[test]
    fn indexed_key_out_of_range_is_not_found() {
        let (store, _) = store("ns/");
        store.set("a", b"1").unwrap();
        let err = store.key(1).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn quota_exhaustion_surfaces_on_set() {
        let backend = MemoryBackend::with_quota(16);
        let store = PrefixedStore::new("ns/", backend);
        let err = store.set("big", &[0u8; 64]).unwrap_err();
        assert!(matches!(err, BridgeError::QuotaExceeded));
    }

    #[test]
    fn contaminated_entry_fails_with_decode_error() {
        let (store, backend) = store("ns/");
        backend.set_item("ns/bad", "*** not base64 ***").unwrap();
        let err = store.get("bad").unwrap_err();
        assert!(matches!(err, BridgeError::Decode(_)));
    }

    #[test]
    fn empty_prefix_covers_whole_backend() {
        let backend = MemoryBackend::new();
        let scoped = PrefixedStore::new("ns/", backend.clone());
        let unscoped = PrefixedStore::new("", backend);

        scoped.set("a", b"1").unwrap();
        assert_eq!(unscoped.keys().unwrap(), vec!["ns/a".to_string()]);
        assert_eq!(unscoped.clear().unwrap(), 1);
        assert!(scoped.get("a").unwrap_err().is_not_found());
    }

    #[test]
    fn raw_backend_bypasses_codec_and_prefix() {
        let (store, _) = store("ns/");
        store.set("k", b"v").unwrap();
        let raw = store.backend().get_item("ns/k").unwrap().unwrap();
        assert_eq!(raw, BASE64.encode(b"v"));
    }

    #[test]
    fn host_faults_pass_through_typed() {
        struct BrokenBackend;

        impl KeyValueBackend for BrokenBackend {
            fn get_item(&self, _: &str) -> Result<Option<String>> {
                Err(BridgeError::Host("backend unavailable".into()))
            }
            fn set_item(&self, _: &str, _: &str) -> Result<()> {
                Err(BridgeError::Host("backend unavailable".into()))
            }
            fn remove_item(&self, _: &str) -> Result<()> {
                Err(BridgeError::Host("backend unavailable".into()))
            }
            fn key(&self, _: u32) -> Result<Option<String>> {
                Err(BridgeError::Host("backend unavailable".into()))
            }
            fn length(&self) -> Result<u32> {
                Err(BridgeError::Host("backend unavailable".into()))
            }
            fn keys(&self) -> Result<Vec<String>> {
                Err(BridgeError::Host("backend unavailable".into()))
            }
        }

        let store = PrefixedStore::new("ns/", BrokenBackend);
        assert!(matches!(store.get("k"), Err(BridgeError::Host(_))));
        assert!(matches!(store.set("k", b"v"), Err(BridgeError::Host(_))));
        assert!(matches!(store.clear(), Err(BridgeError::Host(_))));
        assert!(matches!(store.key(0), Err(BridgeError::Host(_))));
    }
}
