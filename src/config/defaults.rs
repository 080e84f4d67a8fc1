// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Notifications**: Toast timing and container capacity
//! - **Navbar**: Scroll threshold for the compact bar style
//! - **Network status**: Banner timing

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Default auto-dismiss delay for a toast, in milliseconds.
pub const DEFAULT_TOAST_DURATION_MS: u64 = 5000;

/// Time between a dismiss trigger and the removal of the toast, in milliseconds.
/// Reserved for the exit transition.
pub const TOAST_EXIT_GRACE_MS: u64 = 300;

/// Default maximum number of toasts a container renders at once.
pub const DEFAULT_MAX_VISIBLE_TOASTS: usize = 5;

/// Upper bound accepted from the config file.
pub const MAX_VISIBLE_TOASTS_LIMIT: usize = 20;

/// Interval of the tick subscription that drives pending timers.
pub const TIMER_TICK_MS: u64 = 100;

// ==========================================================================
// Navbar Defaults
// ==========================================================================

/// Scroll offset (in logical pixels) past which the navbar switches style.
pub const DEFAULT_SCROLL_THRESHOLD: f32 = 50.0;

// ==========================================================================
// Network Status Defaults
// ==========================================================================

/// How long the "back online" banner stays up, in milliseconds.
pub const BACK_ONLINE_BANNER_MS: u64 = 3000;

const _: () = {
    assert!(DEFAULT_MAX_VISIBLE_TOASTS <= MAX_VISIBLE_TOASTS_LIMIT);
    assert!(TOAST_EXIT_GRACE_MS < DEFAULT_TOAST_DURATION_MS);
    assert!(TIMER_TICK_MS < TOAST_EXIT_GRACE_MS);
};
