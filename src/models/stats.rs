use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Respuesta completa de `GET /api/estadisticas`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsResponse {
    #[serde(default)]
    pub timestamp: Option<String>,
    pub estadisticas: StatsSnapshot,
    #[serde(default)]
    pub ultimos_escaneos: Vec<ScanRecord>,
}

impl StatsResponse {
    /// `timestamp` viene de `datetime.isoformat()` (hora local, sin zona)
    pub fn updated_at(&self) -> Option<NaiveDateTime> {
        parse_server_timestamp(self.timestamp.as_deref()?)
    }

    /// Hora de la última actualización como `HH:MM:SS`
    pub fn updated_at_label(&self) -> Option<String> {
        self.updated_at()
            .map(|t| format!("{:02}:{:02}:{:02}", t.hour(), t.minute(), t.second()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub total_boletos: u64,
    pub validados: u64,
    pub pendientes: u64,
    #[serde(default)]
    pub porcentaje_validado: f64,
}

/// Escaneo reciente (join de `escaneos` con `boletos`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanRecord {
    pub codigo_unico: String,
    #[serde(default)]
    pub fecha_escaneo: Option<String>,
    #[serde(default)]
    pub resultado: Option<String>,
    #[serde(default)]
    pub dispositivo: Option<String>,
    #[serde(default)]
    pub ubicacion: Option<String>,
    #[serde(default)]
    pub usuario_validador: Option<String>,
    #[serde(default)]
    pub nombre_cliente: Option<String>,
    #[serde(default)]
    pub evento: Option<String>,
}

/// Respuesta de `GET /api/health`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl HealthStatus {
    pub fn is_online(&self) -> bool {
        self.status == "online"
    }
}

fn parse_server_timestamp(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_stats_payload() {
        let json = r#"{
            "timestamp": "2026-10-19T21:04:05.123456",
            "estadisticas": {
                "total_boletos": 100,
                "validados": 40,
                "pendientes": 60,
                "porcentaje_validado": 40
            },
            "ultimos_escaneos": [
                {
                    "id": 3,
                    "codigo_unico": "ABC123",
                    "fecha_escaneo": "2026-10-19 21:00:00",
                    "resultado": "valido",
                    "dispositivo": "mobile",
                    "ubicacion": "general",
                    "usuario_validador": "validador",
                    "nombre_cliente": "Jane",
                    "evento": null
                }
            ]
        }"#;
        let response: StatsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.estadisticas.total_boletos, 100);
        assert_eq!(response.estadisticas.porcentaje_validado, 40.0);
        assert_eq!(response.ultimos_escaneos.len(), 1);
        assert_eq!(response.ultimos_escaneos[0].evento, None);
        assert_eq!(response.updated_at_label().as_deref(), Some("21:04:05"));
    }

    #[test]
    fn minimal_payload_defaults_history() {
        let response: StatsResponse = serde_json::from_str(
            r#"{"estadisticas":{"total_boletos":0,"validados":0,"pendientes":0,"porcentaje_validado":0}}"#,
        )
        .unwrap();
        assert!(response.ultimos_escaneos.is_empty());
        assert_eq!(response.updated_at(), None);
    }

    #[test]
    fn malformed_timestamp_is_ignored() {
        let response = StatsResponse {
            timestamp: Some("ayer".into()),
            estadisticas: StatsSnapshot::default(),
            ultimos_escaneos: Vec::new(),
        };
        assert_eq!(response.updated_at_label(), None);
    }

    #[test]
    fn health_status() {
        let health: HealthStatus =
            serde_json::from_str(r#"{"status":"online","timestamp":"2026-10-19T10:00:00"}"#).unwrap();
        assert!(health.is_online());
    }
}
