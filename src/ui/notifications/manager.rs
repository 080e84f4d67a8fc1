// SPDX-License-Identifier: MPL-2.0
//! The caller-owned notification list.
//!
//! The `Manager` holds the records, forwards clock readings to each
//! notification's state machine, and drops records once they reach
//! [`Phase::Removed`]. Rendering is done by [`ToastContainer`], which only
//! reads from it.
//!
//! [`ToastContainer`]: super::ToastContainer

use super::notification::{Notification, NotificationId, Phase};
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Close a specific notification by ID.
    Close(NotificationId),
    /// Clock reading for pending timers.
    Tick(Instant),
}

type RemovalHook = Box<dyn FnMut(&Notification)>;

/// Ordered list of notifications (oldest first).
#[derive(Default)]
pub struct Manager {
    notifications: Vec<Notification>,
    on_removed: Option<RemovalHook>,
}

impl fmt::Debug for Manager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Manager")
            .field("notifications", &self.notifications)
            .field("on_removed", &self.on_removed.is_some())
            .finish()
    }
}

impl Manager {
    /// Creates a new empty notification manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a hook called once for every notification that completes
    /// its exit transition.
    ///
    /// A panicking hook is contained: it is logged and the remaining
    /// notifications are still processed.
    pub fn set_on_removed(&mut self, hook: impl FnMut(&Notification) + 'static) {
        self.on_removed = Some(Box::new(hook));
    }

    /// Adds a notification and starts its auto-dismiss timer.
    pub fn push(&mut self, notification: Notification) -> NotificationId {
        self.push_at(notification, Instant::now())
    }

    /// [`push`](Self::push) with an explicit clock reading.
    ///
    /// A notification reusing the ID of one already in the list replaces it.
    pub fn push_at(&mut self, mut notification: Notification, now: Instant) -> NotificationId {
        let id = notification.id().clone();
        if self.remove(&id).is_some() {
            tracing::debug!(%id, "replacing notification with the same id");
        }
        notification.mount(now);
        tracing::debug!(%id, severity = ?notification.severity(), "notification shown");
        self.notifications.push(notification);
        id
    }

    /// Starts the exit transition of a notification.
    ///
    /// Returns `true` if the notification was found and was still visible.
    pub fn close(&mut self, id: &NotificationId, now: Instant) -> bool {
        self.notifications
            .iter_mut()
            .find(|n| n.id() == id)
            .is_some_and(|n| n.close(now))
    }

    /// Drops a notification immediately, cancelling its timers.
    ///
    /// The removal hook is not called: the record never finished its
    /// lifecycle.
    pub fn remove(&mut self, id: &NotificationId) -> Option<Notification> {
        let pos = self.notifications.iter().position(|n| n.id() == id)?;
        let mut notification = self.notifications.remove(pos);
        notification.teardown();
        Some(notification)
    }

    /// Advances every notification to `now` and drops the removed ones.
    ///
    /// Returns the IDs of notifications removed by this tick, in list order.
    pub fn tick(&mut self, now: Instant) -> Vec<NotificationId> {
        for notification in &mut self.notifications {
            if let Some(phase) = notification.advance(now) {
                tracing::trace!(id = %notification.id(), ?phase, "notification transition");
            }
        }

        let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.notifications)
            .into_iter()
            .partition(|n| n.phase() == Phase::Removed);
        self.notifications = kept;

        for notification in &removed {
            self.notify_removed(notification);
        }

        removed.into_iter().map(|n| n.id().clone()).collect()
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Close(id) => {
                self.close(id, Instant::now());
            }
            Message::Tick(now) => {
                self.tick(*now);
            }
        }
    }

    fn notify_removed(&mut self, notification: &Notification) {
        let Some(hook) = self.on_removed.as_mut() else {
            return;
        };
        let result = panic::catch_unwind(AssertUnwindSafe(|| hook(notification)));
        if result.is_err() {
            tracing::error!(id = %notification.id(), "notification removal hook panicked");
        }
    }

    /// Returns the notifications in list order, including dismissing ones.
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.notifications.iter()
    }

    #[must_use]
    pub fn get(&self, id: &NotificationId) -> Option<&Notification> {
        self.notifications.iter().find(|n| n.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    /// Whether a tick could change anything; drives the tick subscription.
    #[must_use]
    pub fn has_pending_timers(&self) -> bool {
        self.notifications.iter().any(Notification::has_pending_timer)
    }

    /// Drops every notification, cancelling their timers.
    pub fn clear(&mut self) {
        for notification in &mut self.notifications {
            notification.teardown();
        }
        self.notifications.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::notification::EXIT_GRACE;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert!(manager.is_empty());
        assert!(!manager.has_pending_timers());
    }

    #[test]
    fn push_keeps_insertion_order() {
        let mut manager = Manager::new();
        let first = manager.push(Notification::info("first"));
        let second = manager.push(Notification::info("second"));

        let ids: Vec<_> = manager.iter().map(|n| n.id().clone()).collect();
        assert_eq!(ids, vec![first, second]);
    }

    #[test]
    fn push_with_existing_id_replaces() {
        let mut manager = Manager::new();
        let id = NotificationId::named("save");
        manager.push(Notification::info("one").with_id(id.clone()));
        manager.push(Notification::success("two").with_id(id.clone()));

        assert_eq!(manager.len(), 1);
        assert_eq!(manager.get(&id).map(Notification::message), Some("two"));
    }

    #[test]
    fn generated_id_does_not_replace_named_notification() {
        let mut manager = Manager::new();
        let earlier = NotificationId::new();
        let taken = NotificationId::named(earlier.to_string());
        manager.push(Notification::info("named").with_id(taken.clone()));
        let next = manager.push(Notification::info("generated"));

        assert_eq!(manager.len(), 2);
        assert!(manager.get(&taken).is_some());
        assert!(manager.get(&next).is_some());
    }

    #[test]
    fn tick_removes_after_duration_and_grace() {
        let t0 = Instant::now();
        let mut manager = Manager::new();
        let id = manager.push_at(Notification::info("msg").with_duration(ms(5000)), t0);

        assert!(manager.tick(t0 + ms(5000)).is_empty());
        assert_eq!(manager.get(&id).map(Notification::phase), Some(Phase::Dismissing));

        let removed = manager.tick(t0 + ms(5000) + EXIT_GRACE);
        assert_eq!(removed, vec![id]);
        assert!(manager.is_empty());
    }

    #[test]
    fn close_then_tick_removes() {
        let t0 = Instant::now();
        let mut manager = Manager::new();
        let id = manager.push_at(Notification::error("msg").with_duration(Duration::ZERO), t0);

        assert!(manager.close(&id, t0 + ms(10)));
        assert!(!manager.close(&id, t0 + ms(20)));
        assert_eq!(manager.tick(t0 + ms(10) + EXIT_GRACE), vec![id]);
    }

    #[test]
    fn close_unknown_id_returns_false() {
        let mut manager = Manager::new();
        assert!(!manager.close(&NotificationId::named("nope"), Instant::now()));
    }

    #[test]
    fn zero_duration_never_auto_removed() {
        let t0 = Instant::now();
        let mut manager = Manager::new();
        manager.push_at(Notification::error("stay").with_duration(Duration::ZERO), t0);

        assert!(manager.tick(t0 + Duration::from_secs(3600)).is_empty());
        assert_eq!(manager.len(), 1);
        assert!(!manager.has_pending_timers());
    }

    #[test]
    fn hook_runs_for_each_removed_notification() {
        let t0 = Instant::now();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let mut manager = Manager::new();
        manager.set_on_removed(move |n| sink.borrow_mut().push(n.message().to_string()));

        manager.push_at(Notification::info("a").with_duration(ms(100)), t0);
        manager.push_at(Notification::info("b").with_duration(ms(200)), t0);
        manager.tick(t0 + Duration::from_secs(1));

        assert_eq!(*seen.borrow(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn panicking_hook_does_not_block_other_removals() {
        let t0 = Instant::now();
        let calls = Rc::new(RefCell::new(0));
        let counter = calls.clone();
        let mut manager = Manager::new();
        manager.set_on_removed(move |n| {
            *counter.borrow_mut() += 1;
            if n.message() == "bad" {
                panic!("hook failure");
            }
        });

        manager.push_at(Notification::info("bad").with_duration(ms(100)), t0);
        manager.push_at(Notification::info("good").with_duration(ms(100)), t0);
        let removed = manager.tick(t0 + Duration::from_secs(1));

        assert_eq!(removed.len(), 2);
        assert_eq!(*calls.borrow(), 2);
        assert!(manager.is_empty());
    }

    #[test]
    fn early_removal_cancels_timers_and_skips_hook() {
        let t0 = Instant::now();
        let calls = Rc::new(RefCell::new(0));
        let counter = calls.clone();
        let mut manager = Manager::new();
        manager.set_on_removed(move |_| *counter.borrow_mut() += 1);

        let id = manager.push_at(Notification::info("gone").with_duration(ms(100)), t0);
        let removed = manager.remove(&id).expect("present");
        assert!(!removed.has_pending_timer());

        assert!(manager.tick(t0 + Duration::from_secs(1)).is_empty());
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn handle_message_close() {
        let mut manager = Manager::new();
        let id = manager.push(Notification::info("msg"));

        manager.handle_message(&Message::Close(id.clone()));
        assert_eq!(manager.get(&id).map(Notification::phase), Some(Phase::Dismissing));
    }

    #[test]
    fn clear_removes_all() {
        let mut manager = Manager::new();
        for i in 0..5 {
            manager.push(Notification::success(format!("test-{i}")));
        }

        manager.clear();
        assert!(manager.is_empty());
    }
}
