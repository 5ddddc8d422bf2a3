// ============================================================================
// VALIDATION RESULT VIEW - Bloques de resultado (dashboard y scanner)
// ============================================================================

use crate::models::{TicketDetails, ValidationResult};
use crate::utils::html::{escape, or_placeholder};

pub const VALID_MARKER: &str = "✅ VÁLIDO";
pub const INVALID_MARKER: &str = "❌ INVÁLIDO";

/// Colores de la tarjeta del scanner (fondo, texto)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardColors {
    pub background: &'static str,
    pub color: &'static str,
}

pub fn card_colors(result: &ValidationResult) -> CardColors {
    if result.is_valid() {
        CardColors { background: "#d4edda", color: "#155724" }
    } else {
        CardColors { background: "#f8d7da", color: "#721c24" }
    }
}

fn marker(result: &ValidationResult) -> &'static str {
    if result.is_valid() {
        VALID_MARKER
    } else {
        INVALID_MARKER
    }
}

fn detail_line(label: &str, value: Option<&str>) -> String {
    format!("<p><strong>{}:</strong> {}</p>", label, or_placeholder(value))
}

fn used_at_line(result: &ValidationResult) -> String {
    result
        .fecha_uso
        .as_deref()
        .map(|fecha| format!("<p><strong>Usado:</strong> {}</p>", escape(fecha)))
        .unwrap_or_default()
}

/// Bloque de `#resultado` en el dashboard: cliente y evento
pub fn render_validation_block(result: &ValidationResult) -> String {
    let class = if result.is_valid() { "result-valid" } else { "result-invalid" };
    let details = result
        .datos_boleto
        .as_ref()
        .map(|t: &TicketDetails| {
            format!(
                "{}{}",
                detail_line("Cliente", t.nombre_cliente.as_deref()),
                detail_line("Evento", t.evento.as_deref()),
            )
        })
        .unwrap_or_default();

    format!(
        r#"<div class="{}"><h3>{}</h3><p>{}</p>{}{}</div>"#,
        class,
        marker(result),
        escape(&result.mensaje),
        details,
        used_at_line(result),
    )
}

/// Fallo de red o de parseo en el dashboard
pub fn render_error_block(message: &str) -> String {
    format!(r#"<div class="result-error"><p>Error: {}</p></div>"#, escape(message))
}

/// Contenido de `#resultadoCard` (el botón "escanear otro" se agrega aparte)
pub fn render_result_card_body(result: &ValidationResult) -> String {
    let details = result
        .datos_boleto
        .as_ref()
        .map(|t| {
            format!(
                "{}{}",
                detail_line("Cliente", t.nombre_cliente.as_deref()),
                detail_line("Asiento", t.asiento.as_deref()),
            )
        })
        .unwrap_or_default();

    format!(
        "<h3>{}</h3><p>{}</p>{}{}",
        marker(result),
        escape(&result.mensaje),
        details,
        used_at_line(result),
    )
}
