// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native keyboard and window events are routed into top-level messages; the
//! tick only runs while some timer is waiting to fire.

use super::Message;
use crate::config::TIMER_TICK_MS;
use iced::{event, keyboard, time, window, Subscription};
use std::time::Duration;

/// Routes key presses (for shared key listeners) and window resizes.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. })
            if status == event::Status::Ignored =>
        {
            Some(Message::KeyPressed(key))
        }
        event::Event::Window(window::Event::Resized(size)) => {
            Some(Message::WindowResized(size.width))
        }
        _ => None,
    })
}

/// Creates the timer tick subscription.
///
/// Idle screens produce no ticks at all.
pub fn create_tick_subscription(has_pending_timers: bool) -> Subscription<Message> {
    if has_pending_timers {
        time::every(Duration::from_millis(TIMER_TICK_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
