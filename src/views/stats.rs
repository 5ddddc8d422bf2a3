// ============================================================================
// STATS VIEW - Contadores, últimos escaneos e indicador de API
// ============================================================================

use crate::models::{ScanRecord, StatsSnapshot};
use crate::utils::html::{escape, or_placeholder};

fn stat_item(number: u64, label: &str, extra: Option<String>) -> String {
    format!(
        r#"<div class="stat-item"><div class="stat-number">{}</div><div class="stat-label">{}</div>{}</div>"#,
        number,
        label,
        extra.map(|e| format!("<div>{}</div>", e)).unwrap_or_default(),
    )
}

/// Tres contadores: total, validados (con porcentaje) y pendientes
pub fn render_stats(stats: &StatsSnapshot) -> String {
    [
        stat_item(stats.total_boletos, "TOTAL", None),
        stat_item(
            stats.validados,
            "VALIDADOS",
            Some(format!("{}%", stats.porcentaje_validado)),
        ),
        stat_item(stats.pendientes, "PENDIENTES", None),
    ]
    .concat()
}

pub fn render_recent_scans(scans: &[ScanRecord]) -> String {
    if scans.is_empty() {
        return r#"<p class="scan-empty">Sin escaneos todavía</p>"#.to_string();
    }

    let rows: String = scans
        .iter()
        .map(|scan| {
            let ok = scan.resultado.as_deref() == Some("valido");
            format!(
                r#"<li class="scan-item {}"><span class="scan-icon">{}</span> <strong>{}</strong> · {} · {} <small>{} · {}</small></li>"#,
                if ok { "scan-valid" } else { "scan-invalid" },
                if ok { "✅" } else { "❌" },
                escape(&scan.codigo_unico),
                or_placeholder(scan.nombre_cliente.as_deref()),
                or_placeholder(scan.resultado.as_deref()),
                or_placeholder(scan.fecha_escaneo.as_deref()),
                or_placeholder(scan.dispositivo.as_deref()),
            )
        })
        .collect();

    format!(r#"<ul class="scan-list">{}</ul>"#, rows)
}

pub fn render_health_badge(online: bool) -> &'static str {
    if online {
        "🟢 API en línea"
    } else {
        "🔴 API sin conexión"
    }
}
