// SPDX-License-Identifier: MPL-2.0
//! One-shot cancellable timer driven by explicit clock readings.

use std::time::Instant;

/// A single scheduled deadline.
///
/// The timer does nothing on its own: the owner polls [`fire`](Self::fire)
/// from its tick. Dropping or cancelling the timer guarantees it never fires.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timer {
    deadline: Option<Instant>,
}

impl Timer {
    /// Arms the timer, replacing any previous deadline.
    pub fn schedule(&mut self, at: Instant) {
        self.deadline = Some(at);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Disarms and returns the deadline if it has been reached at `now`.
    pub fn fire(&mut self, now: Instant) -> Option<Instant> {
        match self.deadline {
            Some(at) if now >= at => self.deadline.take(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn fires_once_at_deadline() {
        let start = Instant::now();
        let mut timer = Timer::default();
        timer.schedule(start + Duration::from_millis(10));

        assert_eq!(timer.fire(start + Duration::from_millis(9)), None);
        assert_eq!(
            timer.fire(start + Duration::from_millis(10)),
            Some(start + Duration::from_millis(10))
        );
        assert_eq!(timer.fire(start + Duration::from_millis(20)), None);
        assert!(!timer.is_armed());
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let start = Instant::now();
        let mut timer = Timer::default();
        timer.schedule(start);
        timer.cancel();
        assert_eq!(timer.fire(start + Duration::from_secs(1)), None);
    }
}
