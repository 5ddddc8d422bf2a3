// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// La validación y las estadísticas las calcula el servidor; aquí solo se
// arman URLs, se hacen requests y se parsea JSON
// ============================================================================

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::CONFIG;
use crate::error::AppError;
use crate::models::{Device, HealthStatus, StatsResponse, ValidationResult};

/// Operaciones que los viewmodels necesitan de la API de validación
#[allow(async_fn_in_trait)]
pub trait TicketApi {
    async fn validate(&self, code: &str, device: Device) -> Result<ValidationResult, AppError>;
    async fn stats(&self) -> Result<StatsResponse, AppError>;
    async fn health(&self) -> Result<HealthStatus, AppError>;
}

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    validator_user: Option<String>,
    validator_location: Option<String>,
}

impl ApiClient {
    /// Usa `API_BASE_URL` si está configurada, si no el origen de la página
    pub fn new() -> Self {
        let base_url = if CONFIG.api_base_url.is_empty() {
            page_origin().unwrap_or_default()
        } else {
            CONFIG.api_base_url.clone()
        };
        Self::with_base(&base_url)
            .with_validator(CONFIG.validator_user.clone(), CONFIG.validator_location.clone())
    }

    pub fn with_base(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            validator_user: None,
            validator_location: None,
        }
    }

    pub fn with_validator(mut self, user: Option<String>, location: Option<String>) -> Self {
        self.validator_user = user;
        self.validator_location = location;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `/api/validar/{code}` con el código como un solo segmento codificado
    pub fn validation_url(&self, code: &str, device: Device) -> Result<Url, AppError> {
        let mut url = self.endpoint(&["api", "validar", code])?;

        let mut pairs: Vec<(&str, &str)> = Vec::new();
        // El servidor asume `web` cuando no viene dispositivo
        if device != Device::Web {
            pairs.push(("dispositivo", device.as_str()));
        }
        if let Some(user) = self.validator_user.as_deref() {
            pairs.push(("usuario", user));
        }
        if let Some(location) = self.validator_location.as_deref() {
            pairs.push(("ubicacion", location));
        }
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }

        Ok(url)
    }

    pub fn stats_url(&self) -> Result<Url, AppError> {
        self.endpoint(&["api", "estadisticas"])
    }

    pub fn health_url(&self) -> Result<Url, AppError> {
        self.endpoint(&["api", "health"])
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, AppError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| AppError::Parse(format!("Invalid API base '{}': {}", self.base_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| AppError::Parse(format!("API base cannot have a path: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, AppError> {
        log::debug!("🌐 [API] GET {}", url);

        let response = Request::get(url.as_str())
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        read_json(response).await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl TicketApi for ApiClient {
    async fn validate(&self, code: &str, device: Device) -> Result<ValidationResult, AppError> {
        log::info!("🎫 [API] Validando código: {} ({})", code, device.as_str());
        let result: ValidationResult = self.get_json(self.validation_url(code, device)?).await?;
        log::info!("🎫 [API] {} → {:?}", code, result.estado);
        Ok(result)
    }

    async fn stats(&self) -> Result<StatsResponse, AppError> {
        self.get_json(self.stats_url()?).await
    }

    async fn health(&self) -> Result<HealthStatus, AppError> {
        self.get_json(self.health_url()?).await
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    if !response.ok() {
        return Err(AppError::Http {
            status: response.status(),
            text: response.status_text(),
        });
    }
    response
        .json::<T>()
        .await
        .map_err(|e| AppError::Parse(e.to_string()))
}

fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient::with_base("https://boletos.example.com/")
    }

    #[test]
    fn dashboard_validation_has_no_query() {
        let url = client().validation_url("ABC123", Device::Web).unwrap();
        assert_eq!(url.as_str(), "https://boletos.example.com/api/validar/ABC123");
    }

    #[test]
    fn mobile_validation_is_tagged() {
        let url = client().validation_url("ABC123", Device::Mobile).unwrap();
        assert_eq!(
            url.as_str(),
            "https://boletos.example.com/api/validar/ABC123?dispositivo=mobile"
        );
    }

    #[test]
    fn code_stays_a_single_segment() {
        let url = client().validation_url("A/B C?1", Device::Web).unwrap();
        assert_eq!(
            url.as_str(),
            "https://boletos.example.com/api/validar/A%2FB%20C%3F1"
        );
    }

    #[test]
    fn configured_validator_is_sent() {
        let api = client().with_validator(Some("ana".into()), Some("puerta norte".into()));
        let url = api.validation_url("X1", Device::Mobile).unwrap();
        assert_eq!(
            url.query(),
            Some("dispositivo=mobile&usuario=ana&ubicacion=puerta+norte")
        );
    }

    #[test]
    fn base_with_path_prefix() {
        let api = ApiClient::with_base("https://example.com/boletos");
        assert_eq!(
            api.stats_url().unwrap().as_str(),
            "https://example.com/boletos/api/estadisticas"
        );
        assert_eq!(api.health_url().unwrap().path(), "/boletos/api/health");
    }

    #[test]
    fn empty_base_is_a_parse_error() {
        let api = ApiClient::with_base("");
        assert!(matches!(api.stats_url(), Err(AppError::Parse(_))));
    }
}
