// ============================================================================
// STATS STATE - Último snapshot renderizado en el dashboard
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::StatsResponse;

/// Guarda la última respuesta completada; un fetch en vuelo no la toca
#[derive(Clone, Default)]
pub struct StatsState {
    last: Rc<RefCell<Option<StatsResponse>>>,
}

impl StatsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<StatsResponse> {
        self.last.borrow().clone()
    }

    /// Reemplaza el snapshot. Devuelve `false` si era idéntico al anterior.
    pub fn replace(&self, response: StatsResponse) -> bool {
        let mut last = self.last.borrow_mut();
        if last.as_ref() == Some(&response) {
            return false;
        }
        *last = Some(response);
        true
    }
}
