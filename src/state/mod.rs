// ============================================================================
// STATE MODULE - Estado con Rc<RefCell> / Rc<Cell>
// ============================================================================

pub mod camera_state;
pub mod stats_state;

pub use camera_state::*;
pub use stats_state::*;
