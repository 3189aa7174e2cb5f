//! Contract for the flat host key/value backend.

use crate::error::Result;

/// Flat, synchronous, string-keyed storage contract.
///
/// Models the surface of a browser `localStorage`-style store: string values
/// addressable by name or by position, persisted by the host, and shared with
/// every other script running against the same backend. All calls complete or
/// fail synchronously; there are no suspension points.
///
/// Implementations must recover any host-level fault at the call site and
/// return it as a typed error. No panic or untyped host exception may escape
/// these methods.
pub trait KeyValueBackend {
    /// Look up the raw string stored under `name`, if any.
    fn get_item(&self, name: &str) -> Result<Option<String>>;

    /// Store `value` under `name`, overwriting any previous value. Fails with
    /// [`QuotaExceeded`](crate::BridgeError::QuotaExceeded) when the backend
    /// is out of space.
    fn set_item(&self, name: &str, value: &str) -> Result<()>;

    /// Delete `name`. Deleting an absent name is a no-op.
    fn remove_item(&self, name: &str) -> Result<()>;

    /// Name of the n-th key. The order is backend-defined and may change
    /// whenever the backend is mutated.
    fn key(&self, index: u32) -> Result<Option<String>>;

    /// Total number of keys, across every namespace sharing the backend.
    fn length(&self) -> Result<u32>;

    /// Every live key name, in no defined order.
    fn keys(&self) -> Result<Vec<String>>;

    /// Key names starting with `prefix`, with the prefix stripped.
    fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>> {
        Ok(self
            .keys()?
            .into_iter()
            .filter_map(|name| name.strip_prefix(prefix).map(str::to_owned))
            .collect())
    }
}
