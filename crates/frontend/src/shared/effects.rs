//! Decorative effects triggered after a successful prediction.

use wasm_bindgen::{JsCast, JsValue};

/// Call `window.confetti()` if a confetti script registered one.
///
/// Returns `Err` when the hook is missing or throws; callers ignore it.
pub fn fire_confetti() -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    let hook = js_sys::Reflect::get(&window, &JsValue::from_str("confetti"))
        .map_err(|e| format!("{e:?}"))?;
    let confetti = hook
        .dyn_into::<js_sys::Function>()
        .map_err(|_| "window.confetti is not a function".to_string())?;
    confetti
        .call0(&JsValue::NULL)
        .map(|_| ())
        .map_err(|e| format!("{e:?}"))
}
