// ============================================================================
// SCANNER - ScannerController: cámara, loop de decodificación y resultado
// ============================================================================
// Estados: Idle -> Capturing -> Idle (stop, código detectado o error)
// Solo toggle_camera/stop_camera tocan el stream; el loop de frames recibe
// un ScanToken y termina cuando se cancela
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{
    CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement, HtmlInputElement, HtmlMediaElement,
    HtmlVideoElement, MediaStream, MediaStreamConstraints, ScrollBehavior, ScrollIntoViewOptions,
};

use crate::dom::{
    append_child, create_element, element_by_id, get_element_by_id, on_click, on_enter_key,
    remove_class, set_class_name, set_inner_html, set_style, set_text_content, window,
    ElementBuilder,
};
use crate::error::AppError;
use crate::models::ValidationResult;
use crate::pages::wire_click;
use crate::services::ApiClient;
use crate::state::{CameraSession, ScanToken};
use crate::utils::haptics;
use crate::utils::qr_ffi::decode_rgba;
use crate::viewmodels::{normalize_code, ScanOutcome, ScannerViewModel};
use crate::views::{card_colors, render_result_card_body};

const VIDEO_ID: &str = "video";
const CAMERA_BUTTON_ID: &str = "cameraBtn";
const MANUAL_INPUT_ID: &str = "codigoManual";
const MANUAL_BUTTON_ID: &str = "validarManualBtn";
const RESULT_CARD_ID: &str = "resultadoCard";

const START_LABEL: &str = "▶ INICIAR CÁMARA";
const START_CLASS: &str = "btn btn-primary";
const STOP_LABEL: &str = "⏸ DETENER";
const STOP_CLASS: &str = "btn btn-danger";

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

pub struct ScannerController {
    vm: ScannerViewModel<ApiClient>,
    session: RefCell<CameraSession<MediaStream>>,
    // getUserMedia en curso (el usuario aún no respondió al permiso)
    requesting: Cell<bool>,
}

impl ScannerController {
    pub fn mount() -> Result<Rc<Self>, AppError> {
        let controller = Rc::new(Self {
            vm: ScannerViewModel::new(ApiClient::new(), haptics::supports_vibration()),
            session: RefCell::new(CameraSession::new()),
            requesting: Cell::new(false),
        });

        {
            let weak = Rc::downgrade(&controller);
            wire_click(CAMERA_BUTTON_ID, move |_| with_controller(&weak, |c| c.toggle_camera()))?;
        }
        {
            let weak = Rc::downgrade(&controller);
            wire_click(MANUAL_BUTTON_ID, move |_| with_controller(&weak, |c| c.validate_manual()))?;
        }
        if let Some(input) = get_element_by_id(MANUAL_INPUT_ID) {
            let weak = Rc::downgrade(&controller);
            on_enter_key(&input, move || with_controller(&weak, |c| c.validate_manual()))?;
        }

        log::info!("📷 [SCANNER] Montado");
        Ok(controller)
    }

    pub fn is_capturing(&self) -> bool {
        self.session.borrow().is_capturing()
    }

    /// Idle: pide la cámara y arranca el loop. Capturing: detiene.
    pub fn toggle_camera(self: &Rc<Self>) {
        if self.is_capturing() {
            self.stop_camera();
            return;
        }
        if self.requesting.get() {
            log::debug!("📷 [SCANNER] Permiso de cámara ya solicitado");
            return;
        }

        self.requesting.set(true);
        let this = self.clone();
        spawn_local(async move {
            let started = this.start_camera().await;
            this.requesting.set(false);
            if let Err(e) = started {
                log::error!("❌ [SCANNER] {}", e);
                crate::dom::alert(&format!("Error al acceder a la cámara: {}", e));
            }
        });
    }

    async fn start_camera(self: &Rc<Self>) -> Result<(), AppError> {
        let video: HtmlVideoElement = element_by_id(VIDEO_ID)?;
        let stream = request_rear_camera().await?;

        video.set_src_object(Some(&stream));
        if let Err(e) = video.play() {
            log::warn!("⚠️ [SCANNER] video.play() falló: {:?}", e);
        }

        let token = self.session.borrow_mut().attach(stream);
        set_camera_button(true);
        log::info!("📷 [SCANNER] Cámara iniciada");

        if let Err(e) = self.start_scanning(video, token) {
            self.stop_camera();
            return Err(e);
        }
        Ok(())
    }

    /// Detiene tracks, suelta el stream y resetea el botón. Idle = no-op.
    pub fn stop_camera(&self) {
        if !self.session.borrow_mut().stop() {
            return;
        }
        if let Ok(video) = element_by_id::<HtmlVideoElement>(VIDEO_ID) {
            video.set_src_object(None);
        }
        set_camera_button(false);
        log::info!("⏹️ [SCANNER] Cámara detenida");
    }

    /// Loop de requestAnimationFrame: dibuja el frame en un canvas fuera de
    /// pantalla y pasa los píxeles a jsQR. Se reprograma en cada tick hasta
    /// que el token se cancela.
    fn start_scanning(self: &Rc<Self>, video: HtmlVideoElement, token: ScanToken) -> Result<(), AppError> {
        let canvas: HtmlCanvasElement = create_element("canvas")?
            .dyn_into()
            .map_err(|_| AppError::Dom("canvas is not an HtmlCanvasElement".into()))?;
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| AppError::Dom("2d context not available".into()))?
            .dyn_into()
            .map_err(|_| AppError::Dom("unexpected 2d context type".into()))?;

        let frame: FrameCallback = Rc::new(RefCell::new(None));
        let next = frame.clone();
        let weak = Rc::downgrade(self);

        *frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if token.is_cancelled() {
                // Soltar el closure rompe el ciclo Rc y termina el loop
                let _ = next.borrow_mut().take();
                return;
            }

            match decode_frame(&video, &canvas, &ctx) {
                Ok(Some(code)) => {
                    log::info!("📱 [SCANNER] Código detectado: {}", code);
                    with_controller(&weak, |c| {
                        c.stop_camera();
                        c.validate_code(code);
                    });
                }
                Ok(None) => {}
                Err(e) => log::warn!("⚠️ [SCANNER] Frame descartado: {:?}", e),
            }

            if let Some(callback) = next.borrow().as_ref() {
                request_animation_frame(callback);
            }
        }) as Box<dyn FnMut()>));

        if let Some(callback) = frame.borrow().as_ref() {
            request_animation_frame(callback);
        }
        Ok(())
    }

    /// Valida contra la API como `mobile`, muestra la tarjeta y vibra
    pub fn validate_code(self: &Rc<Self>, code: String) {
        let this = self.clone();
        spawn_local(async move {
            let outcome = this.vm.validate_code(&code).await;
            this.apply_outcome(outcome);
        });
    }

    /// Código desde `#codigoManual`; el campo se limpia al enviar
    pub fn validate_manual(self: &Rc<Self>) {
        let input = match element_by_id::<HtmlInputElement>(MANUAL_INPUT_ID) {
            Ok(input) => input,
            Err(e) => {
                log::error!("❌ [SCANNER] {}", e);
                return;
            }
        };
        let raw = input.value();
        if normalize_code(&raw).is_none() {
            return;
        }
        input.set_value("");

        let this = self.clone();
        spawn_local(async move {
            if let Some(outcome) = this.vm.validate_manual(&raw).await {
                this.apply_outcome(outcome);
            }
        });
    }

    fn apply_outcome(self: &Rc<Self>, outcome: ScanOutcome) {
        if let Err(e) = self.show_result(&outcome.result) {
            log::error!("❌ [SCANNER] No se pudo mostrar el resultado: {}", e);
        }
        if let Some(pattern) = outcome.vibration {
            haptics::vibrate(pattern);
        }
    }

    /// Tarjeta de resultado con color por estado y botón "escanear otro"
    pub fn show_result(self: &Rc<Self>, result: &ValidationResult) -> Result<(), AppError> {
        let card: HtmlElement = element_by_id(RESULT_CARD_ID)?;
        let colors = card_colors(result);

        set_class_name(&card, "result-card show");
        set_style(&card, "background", colors.background)?;
        set_style(&card, "color", colors.color)?;
        set_inner_html(&card, &render_result_card_body(result));

        let again = ElementBuilder::new("button")?
            .class("btn btn-primary")
            .attr("style", "margin-top: 15px;")?
            .text("🔄 ESCANEAR OTRO")
            .build();
        {
            let weak = Rc::downgrade(self);
            on_click(&again, move |_| with_controller(&weak, |c| c.reset_scanner()))?;
        }
        append_child(&card, &again)?;

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        card.scroll_into_view_with_scroll_into_view_options(&options);
        Ok(())
    }

    /// Oculta la tarjeta y vuelve a encender la cámara
    pub fn reset_scanner(self: &Rc<Self>) {
        if let Some(card) = get_element_by_id(RESULT_CARD_ID) {
            if let Err(e) = remove_class(&card, "show") {
                log::warn!("⚠️ [SCANNER] {:?}", e);
            }
        }
        self.toggle_camera();
    }
}

fn with_controller(weak: &Weak<ScannerController>, f: impl FnOnce(&Rc<ScannerController>)) {
    if let Some(controller) = weak.upgrade() {
        f(&controller);
    }
}

/// `getUserMedia({ video: { facingMode: 'environment' } })`
async fn request_rear_camera() -> Result<MediaStream, AppError> {
    let win = window().ok_or_else(|| AppError::Camera("No window".into()))?;
    let devices = win
        .navigator()
        .media_devices()
        .map_err(|e| AppError::camera(&e))?;

    let video = js_sys::Object::new();
    js_sys::Reflect::set(&video, &JsValue::from_str("facingMode"), &JsValue::from_str("environment"))
        .map_err(|e| AppError::camera(&e))?;
    let constraints = MediaStreamConstraints::new();
    constraints.set_video(&video.into());

    let promise = devices
        .get_user_media_with_constraints(&constraints)
        .map_err(|e| AppError::camera(&e))?;
    JsFuture::from(promise)
        .await
        .map_err(|e| AppError::camera(&e))?
        .dyn_into::<MediaStream>()
        .map_err(|_| AppError::Camera("getUserMedia did not return a MediaStream".into()))
}

fn decode_frame(
    video: &HtmlVideoElement,
    canvas: &HtmlCanvasElement,
    ctx: &CanvasRenderingContext2d,
) -> Result<Option<String>, JsValue> {
    if video.ready_state() != HtmlMediaElement::HAVE_ENOUGH_DATA {
        return Ok(None);
    }
    let (width, height) = (video.video_width(), video.video_height());
    if width == 0 || height == 0 {
        return Ok(None);
    }

    canvas.set_width(width);
    canvas.set_height(height);
    ctx.draw_image_with_html_video_element_and_dw_and_dh(video, 0.0, 0.0, width as f64, height as f64)?;
    let image = ctx.get_image_data(0.0, 0.0, width as f64, height as f64)?;
    let pixels = image.data();

    Ok(decode_rgba(&pixels, image.width(), image.height()))
}

fn request_animation_frame(callback: &Closure<dyn FnMut()>) {
    let Some(win) = window() else {
        return;
    };
    if let Err(e) = win.request_animation_frame(callback.as_ref().unchecked_ref()) {
        log::error!("❌ [SCANNER] requestAnimationFrame falló: {:?}", e);
    }
}

fn set_camera_button(capturing: bool) {
    let Some(button) = get_element_by_id(CAMERA_BUTTON_ID) else {
        return;
    };
    let (label, class) = if capturing {
        (STOP_LABEL, STOP_CLASS)
    } else {
        (START_LABEL, START_CLASS)
    };
    set_text_content(&button, label);
    set_class_name(&button, class);
}
