//! Platform-independent contract for the browser host bridge.
//!
//! The host exposes a flat, synchronous, string-keyed store that is shared by
//! every script running in the same page. [`KeyValueBackend`] captures that
//! contract; [`PrefixedStore`] layers namespace scoping and a binary value
//! codec on top of it so independent users of one shared backend do not
//! collide. Browser wiring lives in the `hostbridge-wasm` crate;
//! [`MemoryBackend`] backs native tests and non-browser embeddings.

#![warn(missing_docs)]

pub mod backend;
pub mod error;
pub mod memory;
pub mod store;

pub use backend::KeyValueBackend;
pub use error::{BridgeError, Result};
pub use memory::MemoryBackend;
pub use store::PrefixedStore;
