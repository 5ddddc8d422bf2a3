// ============================================================================
// VIEWMODELS - Lógica de cada página, sin DOM
// ============================================================================
// Devuelven lo que hay que pintar; las páginas (pages/) lo aplican al DOM
// ============================================================================

pub mod dashboard_viewmodel;
pub mod scanner_viewmodel;

pub use dashboard_viewmodel::{DashboardViewModel, TicketFeedback};
pub use scanner_viewmodel::{ScanOutcome, ScannerViewModel};

/// Código recortado, o `None` si el input está vacío
pub fn normalize_code(raw: &str) -> Option<&str> {
    let code = raw.trim();
    (!code.is_empty()).then_some(code)
}

#[cfg(test)]
pub(crate) mod mock {
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;

    use crate::error::AppError;
    use crate::models::{Device, HealthStatus, StatsResponse, ValidationResult};
    use crate::services::TicketApi;

    /// API falsa con respuestas encoladas y registro de llamadas
    #[derive(Default)]
    pub struct MockApi {
        pub validations: RefCell<VecDeque<Result<ValidationResult, AppError>>>,
        pub stats: RefCell<VecDeque<Result<StatsResponse, AppError>>>,
        pub health: RefCell<Option<Result<HealthStatus, AppError>>>,
        pub validate_calls: RefCell<Vec<(String, Device)>>,
        pub stats_calls: Cell<u32>,
    }

    impl MockApi {
        pub fn with_validation(self, result: Result<ValidationResult, AppError>) -> Self {
            self.validations.borrow_mut().push_back(result);
            self
        }

        pub fn with_stats(self, result: Result<StatsResponse, AppError>) -> Self {
            self.stats.borrow_mut().push_back(result);
            self
        }
    }

    impl TicketApi for MockApi {
        async fn validate(&self, code: &str, device: Device) -> Result<ValidationResult, AppError> {
            self.validate_calls.borrow_mut().push((code.to_string(), device));
            self.validations
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(AppError::Network("no response queued".into())))
        }

        async fn stats(&self) -> Result<StatsResponse, AppError> {
            self.stats_calls.set(self.stats_calls.get() + 1);
            self.stats
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(AppError::Network("no response queued".into())))
        }

        async fn health(&self) -> Result<HealthStatus, AppError> {
            self.health
                .borrow_mut()
                .take()
                .unwrap_or_else(|| Err(AppError::Network("offline".into())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize() {
        assert_eq!(normalize_code("  ABC123 \n"), Some("ABC123"));
        assert_eq!(normalize_code(""), None);
        assert_eq!(normalize_code(" \t "), None);
    }
}
