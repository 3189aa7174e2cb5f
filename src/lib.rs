//! Workspace facade crate.
//!
//! Depending on `hostbridge` pulls in the portable store contract on every
//! target and the browser bindings when compiling for `wasm32`, without
//! needing to wire each workspace crate individually.

pub use hostbridge_core::{BridgeError, KeyValueBackend, MemoryBackend, PrefixedStore, Result};

#[cfg(target_arch = "wasm32")]
pub use hostbridge_wasm as wasm;
