// ============================================================================
// CAMERA STATE - Sesión de cámara única con token de cancelación
// ============================================================================
// Solo toggle/stop crean o destruyen el stream. El loop de decodificación
// recibe un ScanToken y únicamente lo consulta
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;

/// Handle de stream que se puede detener (MediaStream en el navegador)
pub trait StreamHandle {
    fn stop_tracks(&self);
}

impl StreamHandle for web_sys::MediaStream {
    fn stop_tracks(&self) {
        for track in self.get_tracks().iter() {
            if let Ok(track) = track.dyn_into::<web_sys::MediaStreamTrack>() {
                track.stop();
            }
        }
    }
}

/// Señal de cancelación para el loop de requestAnimationFrame
#[derive(Clone, Debug, Default)]
pub struct ScanToken {
    cancelled: Rc<Cell<bool>>,
}

impl ScanToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CameraStatus {
    Idle,
    Capturing,
}

/// Sesión de cámara: como máximo un stream abierto a la vez
pub struct CameraSession<S: StreamHandle> {
    stream: Option<S>,
    token: Option<ScanToken>,
}

impl<S: StreamHandle> CameraSession<S> {
    pub fn new() -> Self {
        Self {
            stream: None,
            token: None,
        }
    }

    pub fn status(&self) -> CameraStatus {
        if self.stream.is_some() {
            CameraStatus::Capturing
        } else {
            CameraStatus::Idle
        }
    }

    pub fn is_capturing(&self) -> bool {
        self.status() == CameraStatus::Capturing
    }

    pub fn stream(&self) -> Option<&S> {
        self.stream.as_ref()
    }

    /// Adjunta un stream nuevo y devuelve el token de su loop.
    /// Si ya había uno abierto se detiene antes.
    pub fn attach(&mut self, stream: S) -> ScanToken {
        if self.stop() {
            log::warn!("📷 [CAMERA] Ya había un stream activo, se detuvo antes de adjuntar otro");
        }
        let token = ScanToken::new();
        self.stream = Some(stream);
        self.token = Some(token.clone());
        token
    }

    /// Detiene tracks y cancela el loop. Devuelve `false` si ya estaba Idle.
    pub fn stop(&mut self) -> bool {
        if let Some(token) = self.token.take() {
            token.cancel();
        }
        match self.stream.take() {
            Some(stream) => {
                stream.stop_tracks();
                true
            }
            None => false,
        }
    }
}

impl<S: StreamHandle> Default for CameraSession<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: StreamHandle> Drop for CameraSession<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct FakeStream {
        stops: Rc<Cell<u32>>,
    }

    impl FakeStream {
        fn new() -> (Self, Rc<Cell<u32>>) {
            let stops = Rc::new(Cell::new(0));
            (Self { stops: stops.clone() }, stops)
        }
    }

    impl StreamHandle for FakeStream {
        fn stop_tracks(&self) {
            self.stops.set(self.stops.get() + 1);
        }
    }

    #[test]
    fn starts_idle_and_stop_is_noop() {
        let mut session: CameraSession<FakeStream> = CameraSession::new();
        assert_eq!(session.status(), CameraStatus::Idle);
        assert!(!session.stop());
        assert!(!session.stop());
    }

    #[test]
    fn attach_then_stop() {
        let mut session = CameraSession::new();
        let (stream, stops) = FakeStream::new();
        let token = session.attach(stream);

        assert!(session.is_capturing());
        assert!(!token.is_cancelled());

        assert!(session.stop());
        assert_eq!(session.status(), CameraStatus::Idle);
        assert!(token.is_cancelled());
        assert_eq!(stops.get(), 1);
        assert!(session.stream().is_none());
    }

    #[test]
    fn second_attach_stops_first_stream() {
        let mut session = CameraSession::new();
        let (first, first_stops) = FakeStream::new();
        let (second, second_stops) = FakeStream::new();

        let first_token = session.attach(first);
        let second_token = session.attach(second);

        assert_eq!(first_stops.get(), 1);
        assert!(first_token.is_cancelled());
        assert_eq!(second_stops.get(), 0);
        assert!(!second_token.is_cancelled());
        assert!(session.is_capturing());
    }

    #[test]
    fn drop_releases_the_stream() {
        let (stream, stops) = FakeStream::new();
        let token = {
            let mut session = CameraSession::new();
            session.attach(stream)
        };
        assert_eq!(stops.get(), 1);
        assert!(token.is_cancelled());
    }

    #[test]
    fn token_clones_share_state() {
        let token = ScanToken::new();
        let loop_copy = token.clone();
        token.cancel();
        assert!(loop_copy.is_cancelled());
    }
}
