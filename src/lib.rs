// ============================================================================
// TICKET VALIDATOR - FRONTEND RUST + WASM
// ============================================================================
// Dos páginas independientes, cada una con su entry point:
// - Dashboard: estadísticas en vivo + validación manual (mount_dashboard)
// - Scanner móvil: cámara + QR + validación (mount_scanner)
// La página host decide cuál montar; no se mira location.pathname
// ============================================================================

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod viewmodels;
pub mod views;
pub mod dom;
pub mod utils;
pub mod pages;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::config::CONFIG;
use crate::pages::{ScannerController, StatsPoller};

// Controladores vivos durante toda la vida de la página
thread_local! {
    static DASHBOARD: RefCell<Option<Rc<StatsPoller>>> = RefCell::new(None);
    static SCANNER: RefCell<Option<Rc<ScannerController>>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🎫 Ticket Validator - Rust + WASM");
}

/// Entry point de la página de dashboard
#[wasm_bindgen]
pub fn mount_dashboard() -> Result<(), JsValue> {
    if DASHBOARD.with(|d| d.borrow().is_some()) {
        log::warn!("⚠️ [DASHBOARD] Ya estaba montado");
        return Ok(());
    }
    let poller = StatsPoller::mount()?;
    DASHBOARD.with(|d| *d.borrow_mut() = Some(poller));
    Ok(())
}

/// Entry point de la página del scanner móvil
#[wasm_bindgen]
pub fn mount_scanner() -> Result<(), JsValue> {
    if SCANNER.with(|s| s.borrow().is_some()) {
        log::warn!("⚠️ [SCANNER] Ya estaba montado");
        return Ok(());
    }
    let controller = ScannerController::mount()?;
    SCANNER.with(|s| *s.borrow_mut() = Some(controller));
    Ok(())
}

fn with_dashboard(f: impl FnOnce(&Rc<StatsPoller>)) {
    // Clonar el Rc para no mantener el borrow mientras corre el handler
    match DASHBOARD.with(|d| d.borrow().clone()) {
        Some(poller) => f(&poller),
        None => log::error!("❌ [DASHBOARD] No está montado (llamar a mount_dashboard)"),
    }
}

fn with_scanner(f: impl FnOnce(&Rc<ScannerController>)) {
    match SCANNER.with(|s| s.borrow().clone()) {
        Some(controller) => f(&controller),
        None => log::error!("❌ [SCANNER] No está montado (llamar a mount_scanner)"),
    }
}

// Funciones llamables desde onclick="..." en el HTML

#[wasm_bindgen(js_name = validateTicket)]
pub fn validate_ticket() {
    with_dashboard(|p| p.validate_ticket());
}

#[wasm_bindgen(js_name = loadStats)]
pub fn load_stats() {
    with_dashboard(|p| p.load_stats());
}

#[wasm_bindgen(js_name = toggleCamera)]
pub fn toggle_camera() {
    with_scanner(|c| c.toggle_camera());
}

#[wasm_bindgen(js_name = stopCamera)]
pub fn stop_camera() {
    with_scanner(|c| c.stop_camera());
}

#[wasm_bindgen(js_name = validateManual)]
pub fn validate_manual() {
    with_scanner(|c| c.validate_manual());
}

#[wasm_bindgen(js_name = resetScanner)]
pub fn reset_scanner() {
    with_scanner(|c| c.reset_scanner());
}
