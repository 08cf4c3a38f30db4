//! WebAssembly FFI bindings for the Crux Core
//!
//! The page shell loads this module, sends `Initialize` at mount and forwards
//! its interval, deadline and HTTP results through these functions.

use lazy_static::lazy_static;
use wasm_bindgen::{prelude::wasm_bindgen, JsValue};

use crux_core::{bridge::Bridge, Core};

use crate::App;

lazy_static! {
    static ref CORE: Bridge<App> = Bridge::new(Core::new());
}

fn to_js_error(context: &str, error: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&format!("{context}: {error}"))
}

/// Set up console logging when the module is loaded
#[wasm_bindgen(start)]
pub fn init_wasm() -> Result<(), JsValue> {
    console_log::init_with_level(log::Level::Debug)
        .map_err(|e| to_js_error("failed to initialize logger", e))
}

/// Process a bincode-serialized Event, returning bincode-serialized Effects
#[wasm_bindgen]
pub fn process_event(event_bytes: &[u8]) -> Result<Vec<u8>, JsValue> {
    let mut effects = Vec::new();
    CORE.update(event_bytes, &mut effects)
        .map_err(|e| to_js_error("failed to process event", e))?;
    Ok(effects)
}

/// Get the bincode-serialized view model
#[wasm_bindgen]
pub fn view() -> Result<Vec<u8>, JsValue> {
    let mut view = Vec::new();
    CORE.view(&mut view)
        .map_err(|e| to_js_error("failed to get view model", e))?;
    Ok(view)
}

/// Resolve the effect `id` with bincode-serialized response data
#[wasm_bindgen]
pub fn handle_response(id: u32, response_bytes: &[u8]) -> Result<Vec<u8>, JsValue> {
    let mut effects = Vec::new();
    CORE.resolve(
        crux_core::bridge::EffectId(id),
        response_bytes,
        &mut effects,
    )
    .map_err(|e| to_js_error("failed to handle response", e))?;
    Ok(effects)
}
