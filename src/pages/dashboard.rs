// ============================================================================
// DASHBOARD - StatsPoller: polling de estadísticas + validación manual
// ============================================================================

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Interval;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;

use crate::config::CONFIG;
use crate::dom::{element_by_id, on_enter_key, render_into_optional};
use crate::error::AppError;
use crate::models::StatsResponse;
use crate::pages::wire_click;
use crate::services::ApiClient;
use crate::viewmodels::DashboardViewModel;
use crate::views::{render_health_badge, render_recent_scans, render_stats};

const CODE_INPUT_ID: &str = "codigoInput";
const VALIDATE_BUTTON_ID: &str = "validarBtn";
const RESULT_ID: &str = "resultado";
const STATS_ID: &str = "estadisticas";
const RECENT_SCANS_ID: &str = "ultimosEscaneos";
const UPDATED_AT_ID: &str = "ultimaActualizacion";
const HEALTH_ID: &str = "estadoApi";

pub struct StatsPoller {
    vm: DashboardViewModel<ApiClient>,
    interval: RefCell<Option<Interval>>,
}

impl StatsPoller {
    /// Registra listeners, carga estadísticas y arranca el timer
    pub fn mount() -> Result<Rc<Self>, AppError> {
        let input: HtmlInputElement = element_by_id(CODE_INPUT_ID)?;
        let poller = Rc::new(Self {
            vm: DashboardViewModel::new(ApiClient::new()),
            interval: RefCell::new(None),
        });

        {
            let weak = Rc::downgrade(&poller);
            on_enter_key(&input, move || with_poller(&weak, |p| p.validate_ticket()))?;
        }
        {
            let weak = Rc::downgrade(&poller);
            wire_click(VALIDATE_BUTTON_ID, move |_| with_poller(&weak, |p| p.validate_ticket()))?;
        }

        poller.load_stats();
        poller.start_polling();
        poller.check_health();

        log::info!(
            "📊 [DASHBOARD] Montado (refresco cada {} ms)",
            CONFIG.stats_poll_interval_ms
        );
        Ok(poller)
    }

    /// Valida el código de `#codigoInput`; vacío no hace nada
    pub fn validate_ticket(self: &Rc<Self>) {
        let raw = match element_by_id::<HtmlInputElement>(CODE_INPUT_ID) {
            Ok(input) => input.value(),
            Err(e) => {
                log::error!("❌ [DASHBOARD] {}", e);
                return;
            }
        };

        let this = self.clone();
        spawn_local(async move {
            let Some(feedback) = this.vm.validate_ticket(&raw).await else {
                return;
            };
            if !render_into_optional(RESULT_ID, &feedback.html) {
                log::warn!("⚠️ [DASHBOARD] No existe #{}", RESULT_ID);
            }
            if feedback.validated {
                this.load_stats();
            }
        });
    }

    /// Un fetch de estadísticas; el anterior sigue visible si falla
    pub fn load_stats(self: &Rc<Self>) {
        let this = self.clone();
        spawn_local(async move {
            if let Some(response) = this.vm.load_stats().await {
                render_stats_response(&response);
            }
        });
    }

    fn start_polling(self: &Rc<Self>) {
        let weak = Rc::downgrade(self);
        let interval = Interval::new(CONFIG.stats_poll_interval_ms, move || {
            with_poller(&weak, |p| p.load_stats());
        });
        // Reemplazar un Interval lo cancela
        *self.interval.borrow_mut() = Some(interval);
    }

    fn check_health(self: &Rc<Self>) {
        let this = self.clone();
        spawn_local(async move {
            let online = match this.vm.check_health().await {
                Ok(online) => online,
                Err(e) => {
                    log::warn!("⚠️ [DASHBOARD] Health check falló: {}", e);
                    false
                }
            };
            render_into_optional(HEALTH_ID, render_health_badge(online));
        });
    }
}

fn with_poller(weak: &Weak<StatsPoller>, f: impl FnOnce(&Rc<StatsPoller>)) {
    if let Some(poller) = weak.upgrade() {
        f(&poller);
    }
}

fn render_stats_response(response: &StatsResponse) {
    if !render_into_optional(STATS_ID, &render_stats(&response.estadisticas)) {
        log::warn!("⚠️ [DASHBOARD] No existe #{}", STATS_ID);
    }
    render_into_optional(RECENT_SCANS_ID, &render_recent_scans(&response.ultimos_escaneos));
    if let Some(label) = response.updated_at_label() {
        render_into_optional(UPDATED_AT_ID, &label);
    }
}
