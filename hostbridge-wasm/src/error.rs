//! Recovery boundary for faults crossing the host boundary.

use hostbridge_core::BridgeError;
use wasm_bindgen::{JsCast, JsValue};

/// Convert a fault thrown by the host into the typed taxonomy.
///
/// Quota refusals arrive as a `DOMException` named `QuotaExceededError` and
/// map to [`BridgeError::QuotaExceeded`]; everything else is stringified into
/// [`BridgeError::Host`], with `context` naming the host call that failed.
/// Every call into a host object funnels through this one helper so no
/// untyped value escapes the bridge.
pub fn js_error(context: &str, err: JsValue) -> BridgeError {
    if let Some(dom) = err.dyn_ref::<web_sys::DomException>() {
        if dom.name() == "QuotaExceededError" {
            return BridgeError::QuotaExceeded;
        }
        return BridgeError::Host(format!("{context}: {}: {}", dom.name(), dom.message()));
    }

    let message = if err.is_string() {
        err.as_string().unwrap_or_default()
    } else if let Some(js_err) = err.dyn_ref::<js_sys::Error>() {
        String::from(js_err.message())
    } else {
        format!("{err:?}")
    };
    BridgeError::Host(format!("{context}: {message}"))
}
