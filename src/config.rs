// ============================================================================
// CONFIG - Configuración en tiempo de compilación (build.rs + .env)
// ============================================================================

use serde::{Deserialize, Serialize};

pub const DEFAULT_STATS_POLL_INTERVAL_MS: u32 = 5000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// URL base de la API. Vacía = mismo origen que la página
    pub api_base_url: String,
    pub stats_poll_interval_ms: u32,
    /// Se envían como `usuario` / `ubicacion` solo si están configurados
    pub validator_user: Option<String>,
    pub validator_location: Option<String>,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            stats_poll_interval_ms: DEFAULT_STATS_POLL_INTERVAL_MS,
            validator_user: None,
            validator_location: None,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("API_BASE_URL"),
            option_env!("STATS_POLL_INTERVAL_MS"),
            option_env!("VALIDATOR_USER"),
            option_env!("VALIDATOR_LOCATION"),
            option_env!("LOG_LEVEL"),
        )
    }

    fn from_values(
        api_base_url: Option<&str>,
        poll_interval: Option<&str>,
        validator_user: Option<&str>,
        validator_location: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        let non_empty = |v: Option<&str>| {
            v.map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        Self {
            api_base_url: non_empty(api_base_url)
                .map(|s| s.trim_end_matches('/').to_string())
                .unwrap_or_default(),
            stats_poll_interval_ms: poll_interval
                .and_then(|v| v.trim().parse().ok())
                .filter(|ms: &u32| *ms > 0)
                .unwrap_or(DEFAULT_STATS_POLL_INTERVAL_MS),
            validator_user: non_empty(validator_user),
            validator_location: non_empty(validator_location),
            log_level: non_empty(log_level).unwrap_or_else(|| "info".to_string()),
        }
    }

    /// Nivel para wasm-logger; valores desconocidos caen a Info
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = AppConfig::from_values(None, None, None, None, None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.stats_poll_interval_ms, 5000);
        assert_eq!(config.log_level(), log::Level::Info);
    }

    #[test]
    fn values_are_trimmed_and_validated() {
        let config = AppConfig::from_values(
            Some("https://boletos.example.com/"),
            Some("0"),
            Some("  "),
            Some("puerta-norte"),
            Some("debug"),
        );
        assert_eq!(config.api_base_url, "https://boletos.example.com");
        assert_eq!(config.stats_poll_interval_ms, DEFAULT_STATS_POLL_INTERVAL_MS);
        assert_eq!(config.validator_user, None);
        assert_eq!(config.validator_location.as_deref(), Some("puerta-norte"));
        assert_eq!(config.log_level(), log::Level::Debug);
    }

    #[test]
    fn unparseable_interval_falls_back() {
        let config = AppConfig::from_values(None, Some("cinco"), None, None, Some("ruido"));
        assert_eq!(config.stats_poll_interval_ms, DEFAULT_STATS_POLL_INTERVAL_MS);
        assert_eq!(config.log_level(), log::Level::Info);
    }
}
