// ============================================================================
// DASHBOARD VIEWMODEL - Validación manual + polling de estadísticas
// ============================================================================

use crate::error::AppError;
use crate::models::{Device, StatsResponse};
use crate::services::TicketApi;
use crate::state::StatsState;
use crate::viewmodels::normalize_code;
use crate::views::{render_error_block, render_validation_block};

/// HTML para `#resultado`; `validated` = la API respondió (refrescar stats)
#[derive(Debug, Clone, PartialEq)]
pub struct TicketFeedback {
    pub html: String,
    pub validated: bool,
}

pub struct DashboardViewModel<A: TicketApi> {
    api: A,
    stats: StatsState,
}

impl<A: TicketApi> DashboardViewModel<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            stats: StatsState::new(),
        }
    }

    /// `None` si el input está vacío (no hay request)
    pub async fn validate_ticket(&self, raw: &str) -> Option<TicketFeedback> {
        let code = normalize_code(raw)?;

        let feedback = match self.api.validate(code, Device::Web).await {
            Ok(result) => TicketFeedback {
                html: render_validation_block(&result),
                validated: true,
            },
            Err(e) => {
                log::error!("❌ [DASHBOARD] Error validando {}: {}", code, e);
                TicketFeedback {
                    html: render_error_block(&e.to_string()),
                    validated: false,
                }
            }
        };
        Some(feedback)
    }

    /// Snapshot a pintar, o `None` si falló o no cambió.
    /// En error el snapshot anterior queda visible.
    pub async fn load_stats(&self) -> Option<StatsResponse> {
        match self.api.stats().await {
            Ok(response) => {
                if self.stats.replace(response.clone()) {
                    Some(response)
                } else {
                    log::debug!("📊 [DASHBOARD] Estadísticas sin cambios");
                    None
                }
            }
            Err(e) => {
                log::error!("❌ [DASHBOARD] Error loading stats: {}", e);
                None
            }
        }
    }

    pub async fn check_health(&self) -> Result<bool, AppError> {
        let health = self.api.health().await?;
        Ok(health.is_online())
    }

    pub fn last_stats(&self) -> Option<StatsResponse> {
        self.stats.get()
    }
}
