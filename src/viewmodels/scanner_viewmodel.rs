// ============================================================================
// SCANNER VIEWMODEL - Validación desde cámara o input manual
// ============================================================================

use crate::models::{Device, ValidationResult};
use crate::services::TicketApi;
use crate::utils::vibration_pattern;
use crate::viewmodels::normalize_code;

/// Lo que la página debe mostrar tras una validación
#[derive(Debug, Clone, PartialEq)]
pub struct ScanOutcome {
    pub result: ValidationResult,
    /// `None` sin soporte de vibración o si la API no respondió
    pub vibration: Option<&'static [u32]>,
}

pub struct ScannerViewModel<A: TicketApi> {
    api: A,
    haptics: bool,
}

impl<A: TicketApi> ScannerViewModel<A> {
    pub fn new(api: A, haptics: bool) -> Self {
        Self { api, haptics }
    }

    pub async fn validate_code(&self, code: &str) -> ScanOutcome {
        match self.api.validate(code, Device::Mobile).await {
            Ok(result) => {
                let vibration = self.haptics.then(|| vibration_pattern(result.estado));
                ScanOutcome { result, vibration }
            }
            Err(e) => {
                log::error!("❌ [SCANNER] Error validando {}: {}", code, e);
                ScanOutcome {
                    result: ValidationResult::connection_error(),
                    vibration: None,
                }
            }
        }
    }

    /// Igual que `validate_code` pero desde el input manual; vacío = no-op
    pub async fn validate_manual(&self, raw: &str) -> Option<ScanOutcome> {
        let code = normalize_code(raw)?;
        Some(self.validate_code(code).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::models::ValidationStatus;
    use crate::viewmodels::mock::MockApi;
    use futures::executor::block_on;

    fn result(estado: ValidationStatus) -> ValidationResult {
        ValidationResult {
            estado,
            mensaje: "msg".into(),
            datos_boleto: None,
            fecha_uso: None,
            fecha_validacion: None,
            validador: None,
        }
    }

    #[test]
    fn valid_scan_vibrates_short() {
        let vm = ScannerViewModel::new(
            MockApi::default().with_validation(Ok(result(ValidationStatus::Valido))),
            true,
        );
        let outcome = block_on(vm.validate_code("QR-1"));
        assert!(outcome.result.is_valid());
        assert_eq!(outcome.vibration, Some(&[100, 50, 100][..]));
        assert_eq!(
            vm.api.validate_calls.borrow().as_slice(),
            &[("QR-1".to_string(), Device::Mobile)]
        );
    }

    #[test]
    fn invalid_scan_vibrates_long() {
        let vm = ScannerViewModel::new(
            MockApi::default().with_validation(Ok(result(ValidationStatus::YaUsado))),
            true,
        );
        assert_eq!(block_on(vm.validate_code("QR-2")).vibration, Some(&[300, 100, 300][..]));
    }

    #[test]
    fn no_vibration_without_capability() {
        let vm = ScannerViewModel::new(
            MockApi::default().with_validation(Ok(result(ValidationStatus::Valido))),
            false,
        );
        assert_eq!(block_on(vm.validate_code("QR-3")).vibration, None);
    }

    #[test]
    fn network_failure_is_connection_error_without_vibration() {
        let vm = ScannerViewModel::new(
            MockApi::default().with_validation(Err(AppError::Parse("expected value".into()))),
            true,
        );
        let outcome = block_on(vm.validate_code("QR-4"));
        assert_eq!(outcome.result, ValidationResult::connection_error());
        assert_eq!(outcome.vibration, None);
    }

    #[test]
    fn manual_blank_is_ignored() {
        let vm = ScannerViewModel::new(MockApi::default(), true);
        assert_eq!(block_on(vm.validate_manual("  ")), None);
        assert!(vm.api.validate_calls.borrow().is_empty());
    }

    #[test]
    fn manual_code_is_trimmed() {
        let vm = ScannerViewModel::new(
            MockApi::default().with_validation(Ok(result(ValidationStatus::Invalido))),
            false,
        );
        let outcome = block_on(vm.validate_manual(" M-9 ")).unwrap();
        assert!(!outcome.result.is_valid());
        assert_eq!(vm.api.validate_calls.borrow()[0].0, "M-9");
    }
}
