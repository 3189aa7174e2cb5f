//! Interop between Rust errors and Javascript `Error` values.

use std::fmt::{Debug, Display};

use wasm_bindgen::JsValue;

/// Build a Javascript `Error` carrying `err`'s display message.
pub fn new_error<E: Display>(err: &E) -> js_sys::Error {
    js_sys::Error::new(&err.to_string())
}

/// Build a Javascript `Error` carrying `err`'s debug form, which for rich
/// error types includes the full source chain.
pub fn new_trace<E: Debug>(err: &E) -> js_sys::Error {
    js_sys::Error::new(&format!("{err:?}"))
}

/// Throw `err` across the boundary as a Javascript exception. Does not
/// return.
pub fn throw_error<E: Display>(err: &E) -> ! {
    wasm_bindgen::throw_val(JsValue::from(new_error(err)))
}

/// Throw a Javascript exception with the given message. Does not return.
pub fn throw_message(message: &str) -> ! {
    wasm_bindgen::throw_str(message)
}

/// Route panic messages to `console.error` so an aborting panic shows up in
/// the browser instead of ending as an opaque `unreachable` trap. Safe to
/// call more than once.
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}
