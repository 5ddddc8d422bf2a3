// ============================================================================
// HAPTICS - Vibración según resultado de validación
// ============================================================================

use wasm_bindgen::prelude::*;

use crate::models::ValidationStatus;

pub const VALID_PATTERN: [u32; 3] = [100, 50, 100];
pub const INVALID_PATTERN: [u32; 3] = [300, 100, 300];

/// Doble pulso corto para válido, triple pulso largo para todo lo demás
pub fn vibration_pattern(estado: ValidationStatus) -> &'static [u32] {
    if estado.is_valid() {
        &VALID_PATTERN
    } else {
        &INVALID_PATTERN
    }
}

/// `navigator.vibrate` es opcional (no existe en iOS Safari ni en desktop)
pub fn supports_vibration() -> bool {
    web_sys::window()
        .map(|win| {
            js_sys::Reflect::has(&win.navigator(), &JsValue::from_str("vibrate")).unwrap_or(false)
        })
        .unwrap_or(false)
}

/// Devuelve `true` si el patrón se envió al dispositivo
pub fn vibrate(pattern: &[u32]) -> bool {
    if !supports_vibration() {
        log::debug!("📳 [HAPTICS] Vibración no soportada");
        return false;
    }
    let Some(win) = web_sys::window() else {
        return false;
    };
    let js_pattern: js_sys::Array = pattern.iter().map(|ms| JsValue::from(*ms)).collect();
    win.navigator().vibrate_with_pattern(&js_pattern)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_gets_short_double_pulse() {
        assert_eq!(vibration_pattern(ValidationStatus::Valido), &[100, 50, 100]);
    }

    #[test]
    fn everything_else_gets_long_pulse() {
        for estado in [
            ValidationStatus::Invalido,
            ValidationStatus::Error,
            ValidationStatus::NoEncontrado,
            ValidationStatus::YaUsado,
            ValidationStatus::Desconocido,
        ] {
            assert_eq!(vibration_pattern(estado), &[300, 100, 300]);
        }
    }
}
