//! Pass-through proxies for the host console.
//!
//! Each function forwards a single formatted string to the matching
//! `console` method; none of them add any logic of their own.

use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsValue;

#[wasm_bindgen]
extern "C" {
    /// `console.assert(condition, message)`.
    #[wasm_bindgen(js_namespace = console)]
    pub fn assert(condition: bool, message: &str);

    /// `console.clear()`.
    #[wasm_bindgen(js_namespace = console)]
    pub fn clear();

    /// `console.debug(message)`.
    #[wasm_bindgen(js_namespace = console)]
    pub fn debug(message: &str);

    /// `console.error(message)`.
    #[wasm_bindgen(js_namespace = console)]
    pub fn error(message: &str);

    /// `console.info(message)`.
    #[wasm_bindgen(js_namespace = console)]
    pub fn info(message: &str);

    /// `console.log(message)`.
    #[wasm_bindgen(js_namespace = console)]
    pub fn log(message: &str);

    /// `console.table(data)`.
    #[wasm_bindgen(js_namespace = console)]
    pub fn table(data: &JsValue);

    /// `console.trace(message)`.
    #[wasm_bindgen(js_namespace = console)]
    pub fn trace(message: &str);

    /// `console.warn(message)`.
    #[wasm_bindgen(js_namespace = console)]
    pub fn warn(message: &str);
}

/// Log a formatted message to the host console.
#[macro_export]
macro_rules! console_log {
    ($($t:tt)*) => {
        $crate::console::log(&format!($($t)*))
    };
}
