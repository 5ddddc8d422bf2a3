// ============================================================================
// ELEMENT HELPERS - Funciones básicas para manipular DOM
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::error::AppError;

/// Obtener window global
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Obtener document
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Obtener elemento por ID
pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Elemento obligatorio con tipo concreto (input, video, button...)
pub fn element_by_id<T: JsCast>(id: &str) -> Result<T, AppError> {
    get_element_by_id(id)
        .ok_or_else(|| AppError::missing_element(id))?
        .dyn_into::<T>()
        .map_err(|_| AppError::Dom(format!("#{} has an unexpected element type", id)))
}

/// Crear elemento
pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))
        .and_then(|doc| doc.create_element(tag))
}

/// Establecer class name (reemplaza todas las clases)
pub fn set_class_name(element: &Element, class: &str) {
    element.set_class_name(class);
}

/// Remover clase
pub fn remove_class(element: &Element, class: &str) -> Result<(), JsValue> {
    element.class_list().remove_1(class)
}

/// Establecer text content
pub fn set_text_content(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

/// Establecer inner HTML
pub fn set_inner_html(element: &Element, html: &str) {
    element.set_inner_html(html);
}

/// Agregar hijo
pub fn append_child(parent: &Element, child: &Element) -> Result<(), JsValue> {
    parent.append_child(child).map(|_| ())
}

/// Establecer atributo
pub fn set_attribute(element: &Element, name: &str, value: &str) -> Result<(), JsValue> {
    element.set_attribute(name, value)
}

/// Verificar si el elemento trae un atributo (p.ej. `onclick` inline)
pub fn get_attribute_present(element: &Element, name: &str) -> bool {
    element.has_attribute(name)
}

/// Propiedad CSS inline (`element.style.<name> = value`)
pub fn set_style(element: &Element, name: &str, value: &str) -> Result<(), JsValue> {
    element
        .dyn_ref::<HtmlElement>()
        .ok_or_else(|| JsValue::from_str("Element is not an HtmlElement"))?
        .style()
        .set_property(name, value)
}

/// Pintar HTML en un elemento opcional de la página; sin elemento no hace nada
pub fn render_into_optional(id: &str, html: &str) -> bool {
    match get_element_by_id(id) {
        Some(element) => {
            set_inner_html(&element, html);
            true
        }
        None => false,
    }
}

/// Alerta bloqueante del navegador
pub fn alert(message: &str) {
    if let Some(win) = window() {
        if let Err(e) = win.alert_with_message(message) {
            log::error!("❌ [DOM] alert falló: {:?}", e);
        }
    }
}
