// ============================================================================
// ERRORES - Un solo tipo de error para servicios, estado y vistas
// ============================================================================

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {text}")]
    Http { status: u16, text: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("{0}")]
    Camera(String),

    #[error("DOM error: {0}")]
    Dom(String),
}

impl AppError {
    /// Red, HTTP o JSON: se muestran en línea y nunca se reintentan
    pub fn is_network_or_parse(&self) -> bool {
        matches!(self, AppError::Network(_) | AppError::Http { .. } | AppError::Parse(_))
    }

    pub fn missing_element(id: &str) -> Self {
        AppError::Dom(format!("No #{} element found", id))
    }

    /// Errores de getUserMedia (DOMException) y similares
    pub fn camera(value: &JsValue) -> Self {
        AppError::Camera(js_error_message(value))
    }
}

impl From<JsValue> for AppError {
    fn from(value: JsValue) -> Self {
        AppError::Dom(js_error_message(&value))
    }
}

impl From<AppError> for JsValue {
    fn from(error: AppError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}

/// Extrae `message` de un error JS; si no existe usa la representación Debug
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    js_sys::Reflect::get(value, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_inline_messages() {
        assert_eq!(
            AppError::Network("Failed to fetch".into()).to_string(),
            "Network error: Failed to fetch"
        );
        assert_eq!(
            AppError::Http { status: 502, text: "Bad Gateway".into() }.to_string(),
            "HTTP 502: Bad Gateway"
        );
        assert_eq!(AppError::Camera("Permission denied".into()).to_string(), "Permission denied");
    }

    #[test]
    fn classification() {
        assert!(AppError::Parse("eof".into()).is_network_or_parse());
        assert!(AppError::Http { status: 500, text: String::new() }.is_network_or_parse());
        assert!(!AppError::Camera("x".into()).is_network_or_parse());
        assert!(!AppError::missing_element("video").is_network_or_parse());
        assert_eq!(
            AppError::missing_element("video").to_string(),
            "DOM error: No #video element found"
        );
    }
}
