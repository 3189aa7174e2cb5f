//! Browser bindings for the host bridge.
//!
//! This crate wires the portable contract from `hostbridge-core` to the
//! browser's host objects through `wasm-bindgen` and `web-sys`:
//!
//! - [`storage`]: `window.localStorage` as a [`hostbridge_core::KeyValueBackend`],
//!   plus the process-wide prefixed store handle.
//! - [`console`]: pass-through proxies for the host console methods.
//! - [`exception`]: building and throwing Javascript `Error` values from Rust
//!   errors, and routing panics to the console.
//! - [`error`]: the recovery boundary that converts host-thrown faults into
//!   the typed taxonomy.
//!
//! # Platform support
//!
//! This crate is designed exclusively for the `wasm32-unknown-unknown` target
//! and compiles to nothing elsewhere.

#![cfg(target_arch = "wasm32")]
#![warn(missing_docs)]

pub mod console;
pub mod error;
pub mod exception;
pub mod storage;

pub use error::js_error;
pub use exception::set_panic_hook;
pub use storage::{local_store, LocalStorage, STORAGE_PREFIX};
