// ============================================================================
// PAGES - Controladores de cada página (dashboard y scanner)
// ============================================================================
// Cada página tiene su propio entry point; no comparten estado
// ============================================================================

pub mod dashboard;
pub mod scanner;

pub use dashboard::StatsPoller;
pub use scanner::ScannerController;

use wasm_bindgen::JsValue;
use web_sys::MouseEvent;

use crate::dom::{get_attribute_present, get_element_by_id, on_click};

/// Conecta un click solo si el botón no trae ya un `onclick` inline
/// (la página puede llamar directo a las funciones exportadas)
pub(crate) fn wire_click<F>(id: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    match get_element_by_id(id) {
        Some(element) if !get_attribute_present(&element, "onclick") => on_click(&element, handler),
        Some(_) => {
            log::debug!("🖱️ [PAGES] #{} usa onclick inline", id);
            Ok(())
        }
        None => Ok(()),
    }
}
