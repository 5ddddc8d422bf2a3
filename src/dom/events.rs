// ============================================================================
// EVENT HANDLING - Sistema de eventos
// ============================================================================
// Los listeners de la página viven lo que vive la página, por eso se usa
// closure.forget(). Se registran una sola vez en cada mount.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent, MouseEvent};

/// Helper para crear click handler simple
pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Ejecuta `handler` cuando se presiona Enter en el elemento
pub fn on_enter_key<F>(element: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    let closure = Closure::wrap(Box::new(move |e: KeyboardEvent| {
        if is_enter(&e.key()) {
            e.prevent_default();
            handler();
        }
    }) as Box<dyn FnMut(KeyboardEvent)>);
    element.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn is_enter(key: &str) -> bool {
    key == "Enter"
}
