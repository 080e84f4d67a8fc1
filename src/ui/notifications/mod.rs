// SPDX-License-Identifier: MPL-2.0
//! Toast notification system.
//!
//! # Components
//!
//! - [`notification`] - `Notification` record and its Visible → Dismissing → Removed lifecycle
//! - [`manager`] - `Manager`, the caller-owned list
//! - [`toast`] - `ToastContainer`, which renders part of the list at an anchor
//!
//! # Usage
//!
//! ```ignore
//! use nuvo_ui::ui::notifications::{Manager, Notification, ToastContainer};
//!
//! let mut manager = Manager::new();
//! manager.push(Notification::success("Saved").with_title("Done"));
//!
//! // In the update loop, forward ticks while timers are pending
//! manager.handle_message(&NotificationMessage::Tick(now));
//!
//! // In the view, render the stack as an overlay layer
//! let layer = ToastContainer::default().view(&manager, &i18n).map(Message::Notification);
//! ```

mod manager;
pub mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Phase, Severity, EXIT_GRACE};
pub use toast::{toast, Position, ToastContainer};
