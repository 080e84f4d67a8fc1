// SPDX-License-Identifier: MPL-2.0
//! Connectivity signal shared between the host application and the indicator.

use crate::application::port::Connectivity;
use crate::ui::events::{EventSource, Listener};
use std::cell::Cell;
use std::rc::Rc;

/// Online flag the host updates; subscribers hear every transition.
#[derive(Debug, Clone)]
pub struct SharedConnectivity {
    online: Rc<Cell<bool>>,
    changes: EventSource<bool>,
}

impl SharedConnectivity {
    #[must_use]
    pub fn new(online: bool) -> Self {
        Self {
            online: Rc::new(Cell::new(online)),
            changes: EventSource::new(),
        }
    }

    /// Updates the flag; subscribers are notified only when it changes.
    pub fn set_online(&self, online: bool) {
        if self.online.replace(online) != online {
            tracing::info!(online, "connectivity changed");
            self.changes.emit(&online);
        }
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.changes.listener_count()
    }
}

impl Default for SharedConnectivity {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Connectivity for SharedConnectivity {
    fn is_online(&self) -> bool {
        self.online.get()
    }

    fn subscribe(&self, on_change: Box<dyn Fn(bool)>) -> Listener {
        self.changes.listen(move |online| on_change(*online))
    }
}
