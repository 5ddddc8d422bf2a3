use serde::{Deserialize, Serialize};

/// Resultado de `GET /api/validar/{codigo}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub estado: ValidationStatus,
    #[serde(default)]
    pub mensaje: String,
    #[serde(default)]
    pub datos_boleto: Option<TicketDetails>,
    /// Solo cuando el boleto ya fue usado
    #[serde(default)]
    pub fecha_uso: Option<String>,
    #[serde(default)]
    pub fecha_validacion: Option<String>,
    #[serde(default)]
    pub validador: Option<String>,
}

impl ValidationResult {
    /// Resultado local cuando la API no responde
    pub fn connection_error() -> Self {
        Self {
            estado: ValidationStatus::Error,
            mensaje: "Error de conexión".to_string(),
            datos_boleto: None,
            fecha_uso: None,
            fecha_validacion: None,
            validador: None,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.estado.is_valid()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationStatus {
    Valido,
    Invalido,
    Error,
    NoEncontrado,
    YaUsado,
    #[serde(other)]
    Desconocido,
}

impl ValidationStatus {
    pub fn is_valid(self) -> bool {
        matches!(self, ValidationStatus::Valido)
    }
}

/// Datos del boleto devueltos por el servidor (fila completa de `boletos`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TicketDetails {
    #[serde(default)]
    pub codigo_unico: Option<String>,
    #[serde(default)]
    pub nombre_cliente: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub evento: Option<String>,
    #[serde(default)]
    pub fecha_evento: Option<String>,
    #[serde(default)]
    pub tipo_entrada: Option<String>,
    #[serde(default)]
    pub asiento: Option<String>,
}

/// Origen de la validación (`dispositivo` en la query)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Device {
    Web,
    Mobile,
}

impl Device {
    pub fn as_str(self) -> &'static str {
        match self {
            Device::Web => "web",
            Device::Mobile => "mobile",
        }
    }
}
