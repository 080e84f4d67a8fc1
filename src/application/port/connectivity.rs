// SPDX-License-Identifier: MPL-2.0
//! Connectivity port.

use crate::ui::events::Listener;

/// Online/offline signal with change notifications.
pub trait Connectivity {
    fn is_online(&self) -> bool;

    /// Registers `on_change`; it is called with the new state on every
    /// transition until the returned guard is dropped.
    fn subscribe(&self, on_change: Box<dyn Fn(bool)>) -> Listener;
}
