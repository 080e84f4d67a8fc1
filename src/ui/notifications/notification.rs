// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures and the per-toast lifecycle.
//!
//! ```text
//! Visible ──(auto-dismiss timer | close)──▶ Dismissing ──(grace period)──▶ Removed
//! ```

use crate::ui::timer::Timer;
use crate::config::{DEFAULT_TOAST_DURATION_MS, TOAST_EXIT_GRACE_MS};
use crate::ui::design_tokens::palette;
use iced::Color;
use std::fmt;
use std::time::{Duration, Instant};

/// Time between a dismiss trigger and removal, reserved for the exit transition.
pub const EXIT_GRACE: Duration = Duration::from_millis(TOAST_EXIT_GRACE_MS);

/// Unique identifier for a notification.
///
/// Generated and caller-supplied IDs never compare equal, so a generated ID
/// cannot replace a named notification.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NotificationId {
    Generated(u64),
    Named(String),
}

impl NotificationId {
    /// Creates a new unique generated ID.
    #[must_use]
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self::Generated(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Wraps a caller-supplied ID.
    #[must_use]
    pub fn named(id: impl Into<String>) -> Self {
        Self::Named(id.into())
    }

    /// The caller-supplied name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Generated(_) => None,
            Self::Named(name) => Some(name),
        }
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generated(n) => write!(f, "#{n}"),
            Self::Named(name) => f.write_str(name),
        }
    }
}

/// Severity level determines visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    Success,
    #[default]
    Info,
    Warning,
    Error,
}

impl Severity {
    /// Returns the primary color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Returns the glyph shown next to the message.
    #[must_use]
    pub fn glyph(&self) -> &'static str {
        match self {
            Severity::Success => "✓",
            Severity::Info => "ℹ",
            Severity::Warning => "⚠",
            Severity::Error => "✕",
        }
    }
}

/// Lifecycle phase of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Visible,
    /// Dismiss was triggered; the exit transition is running.
    Dismissing,
    /// Terminal. Renders nothing; the owner drops the record.
    Removed,
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    title: Option<String>,
    message: String,
    /// Auto-dismiss delay; zero disables auto-dismiss.
    duration: Duration,
    closable: bool,
    phase: Phase,
    auto_dismiss: Timer,
    removal: Timer,
}

impl Notification {
    /// Creates a notification with the default duration and a generated ID.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            title: None,
            message: message.into(),
            duration: Duration::from_millis(DEFAULT_TOAST_DURATION_MS),
            closable: true,
            phase: Phase::Visible,
            auto_dismiss: Timer::default(),
            removal: Timer::default(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Uses a caller-supplied ID instead of a generated one.
    #[must_use]
    pub fn with_id(mut self, id: NotificationId) -> Self {
        self.id = id;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the auto-dismiss delay. `Duration::ZERO` keeps the toast until closed.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Hides the close button. The toast can still be closed programmatically.
    #[must_use]
    pub fn closable(mut self, closable: bool) -> Self {
        self.closable = closable;
        self
    }

    #[must_use]
    pub fn id(&self) -> &NotificationId {
        &self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn is_closable(&self) -> bool {
        self.closable
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True until dismiss is triggered; drives the exit transition.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.phase == Phase::Visible
    }

    /// Arms the auto-dismiss timer. Called once when the toast is shown.
    pub fn mount(&mut self, now: Instant) {
        if self.phase == Phase::Visible && !self.duration.is_zero() && !self.auto_dismiss.is_armed()
        {
            self.auto_dismiss.schedule(now + self.duration);
        }
    }

    /// Explicit close. Returns `false` if dismiss was already triggered.
    pub fn close(&mut self, now: Instant) -> bool {
        if self.phase != Phase::Visible {
            return false;
        }
        self.begin_dismiss(now);
        true
    }

    /// Fires any due timers and returns the new phase if it changed.
    ///
    /// Transitions are anchored at the timer deadline rather than at `now`,
    /// so a late reading still removes the toast `EXIT_GRACE` after the
    /// auto-dismiss deadline.
    pub fn advance(&mut self, now: Instant) -> Option<Phase> {
        let mut changed = None;

        if let Some(at) = self.auto_dismiss.fire(now) {
            if self.phase == Phase::Visible {
                self.begin_dismiss(at);
                changed = Some(Phase::Dismissing);
            }
        }

        if self.removal.fire(now).is_some() {
            self.phase = Phase::Removed;
            changed = Some(Phase::Removed);
        }

        changed
    }

    /// Cancels both timers. Called when the toast is dropped from its list early.
    pub fn teardown(&mut self) {
        self.auto_dismiss.cancel();
        self.removal.cancel();
    }

    #[must_use]
    pub fn has_pending_timer(&self) -> bool {
        self.auto_dismiss.is_armed() || self.removal.is_armed()
    }

    /// Earliest instant at which `advance` can change the phase.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.auto_dismiss.deadline(), self.removal.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    fn begin_dismiss(&mut self, at: Instant) {
        self.phase = Phase::Dismissing;
        self.auto_dismiss.cancel();
        self.removal.schedule(at + EXIT_GRACE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::success("test");
        let n2 = Notification::success("test");
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn caller_supplied_id_is_kept() {
        let n = Notification::info("hi").with_id(NotificationId::named("saved"));
        assert_eq!(n.id().name(), Some("saved"));
    }

    #[test]
    fn generated_id_never_matches_a_name() {
        let generated = NotificationId::new();
        assert_eq!(generated.name(), None);
        assert_ne!(generated, NotificationId::named(generated.to_string()));
    }

    #[test]
    fn severity_colors_are_distinct() {
        let colors = [
            Severity::Success.color(),
            Severity::Info.color(),
            Severity::Warning.color(),
            Severity::Error.color(),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn defaults_match_toast_defaults() {
        let n = Notification::new(Severity::default(), "msg");
        assert_eq!(n.severity(), Severity::Info);
        assert_eq!(n.duration(), ms(DEFAULT_TOAST_DURATION_MS));
        assert!(n.is_closable());
        assert!(n.is_visible());
        assert_eq!(n.title(), None);
    }

    #[test]
    fn auto_dismiss_then_removal_after_grace() {
        let t0 = Instant::now();
        let mut n = Notification::info("msg").with_duration(ms(5000));
        n.mount(t0);

        assert_eq!(n.advance(t0 + ms(4999)), None);
        assert_eq!(n.advance(t0 + ms(5000)), Some(Phase::Dismissing));
        assert!(!n.is_visible());
        assert_eq!(n.advance(t0 + ms(5000) + EXIT_GRACE - ms(1)), None);
        assert_eq!(n.advance(t0 + ms(5000) + EXIT_GRACE), Some(Phase::Removed));
        assert!(!n.has_pending_timer());
    }

    #[test]
    fn late_reading_goes_straight_to_removed() {
        let t0 = Instant::now();
        let mut n = Notification::info("msg").with_duration(ms(1000));
        n.mount(t0);

        assert_eq!(n.advance(t0 + ms(10_000)), Some(Phase::Removed));
    }

    #[test]
    fn late_reading_within_grace_stays_dismissing() {
        let t0 = Instant::now();
        let mut n = Notification::info("msg").with_duration(ms(1000));
        n.mount(t0);

        assert_eq!(n.advance(t0 + ms(1100)), Some(Phase::Dismissing));
        assert_eq!(n.next_deadline(), Some(t0 + ms(1000) + EXIT_GRACE));
    }

    #[test]
    fn zero_duration_never_auto_dismisses() {
        let t0 = Instant::now();
        let mut n = Notification::error("msg").with_duration(Duration::ZERO);
        n.mount(t0);

        assert!(!n.has_pending_timer());
        assert_eq!(n.advance(t0 + Duration::from_secs(3600)), None);
        assert_eq!(n.phase(), Phase::Visible);
    }

    #[test]
    fn close_starts_grace_from_close_time() {
        let t0 = Instant::now();
        let mut n = Notification::info("msg").with_duration(ms(5000));
        n.mount(t0);

        assert!(n.close(t0 + ms(100)));
        assert_eq!(n.phase(), Phase::Dismissing);
        assert!(!n.close(t0 + ms(150)));

        // The auto-dismiss timer is gone; only removal remains.
        assert_eq!(n.advance(t0 + ms(100) + EXIT_GRACE), Some(Phase::Removed));
        assert_eq!(n.advance(t0 + ms(5000)), None);
    }

    #[test]
    fn teardown_cancels_all_timers() {
        let t0 = Instant::now();
        let mut n = Notification::info("msg");
        n.mount(t0);
        n.close(t0);
        n.teardown();

        assert!(!n.has_pending_timer());
        assert_eq!(n.advance(t0 + Duration::from_secs(60)), None);
    }

    #[test]
    fn mount_twice_keeps_first_deadline() {
        let t0 = Instant::now();
        let mut n = Notification::info("msg").with_duration(ms(1000));
        n.mount(t0);
        n.mount(t0 + ms(500));
        assert_eq!(n.next_deadline(), Some(t0 + ms(1000)));
    }
}
