
pub mod qr_ffi;
pub mod haptics;
pub mod html;

pub use haptics::{vibrate, vibration_pattern};
