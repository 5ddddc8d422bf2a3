// ============================================================================
// QR DECODER FFI - Foreign Function Interface para jsQR
// ============================================================================
// La página carga jsQR como global; aquí solo se declara la firma
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::Clamped;

#[wasm_bindgen]
extern "C" {
    /// Resultado de jsQR (`{ data, binaryData, location, ... }`)
    pub type QrCode;

    #[wasm_bindgen(method, getter)]
    pub fn data(this: &QrCode) -> String;

    /// `jsQR(data, width, height)` devuelve `null` si no hay código en el frame
    #[wasm_bindgen(js_name = jsQR)]
    pub fn js_qr(data: Clamped<&[u8]>, width: u32, height: u32) -> Option<QrCode>;
}

/// Decodifica un frame RGBA; `None` si no hay QR o si el contenido está vacío
pub fn decode_rgba(pixels: &[u8], width: u32, height: u32) -> Option<String> {
    if width == 0 || height == 0 {
        return None;
    }
    js_qr(Clamped(pixels), width, height)
        .map(|code| code.data())
        .filter(|data| !data.is_empty())
}
