// ============================================================================
// VIEWS - Funciones que producen HTML (sin lógica ni acceso a la red)
// ============================================================================

pub mod validation_result;
pub mod stats;

pub use validation_result::*;
pub use stats::*;

/// Texto visible de un fragmento HTML (sin etiquetas)
#[cfg(test)]
pub(crate) fn text_content(html: &str) -> String {
    let mut out = String::new();
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}
