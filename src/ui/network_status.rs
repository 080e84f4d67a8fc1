// SPDX-License-Identifier: MPL-2.0
//! Connectivity banner.
//!
//! Shows an "offline" banner while the connection is down and, after it comes
//! back, a "back online" banner for [`BACK_ONLINE_BANNER_MS`] milliseconds.

use crate::application::port::{Connectivity, Translate};
use crate::config::BACK_ONLINE_BANNER_MS;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::events::Listener;
use crate::ui::styles::{self, button::Variant};
use crate::ui::timer::Timer;
use iced::widget::{button, Container, Row, Space, Text};
use iced::{alignment::Vertical, Element, Length};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// How long the "back online" banner stays up.
pub const BACK_ONLINE_DURATION: Duration = Duration::from_millis(BACK_ONLINE_BANNER_MS);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Banner {
    #[default]
    Hidden,
    Offline,
    BackOnline,
}

#[derive(Debug)]
struct Inner {
    online: bool,
    banner: Banner,
    hide: Timer,
}

impl Default for Inner {
    fn default() -> Self {
        Self {
            online: true,
            banner: Banner::Hidden,
            hide: Timer::default(),
        }
    }
}

impl Inner {
    fn apply(&mut self, online: bool, now: Instant) {
        let was_online = std::mem::replace(&mut self.online, online);
        if !online {
            self.banner = Banner::Offline;
            self.hide.cancel();
        } else if !was_online {
            self.banner = Banner::BackOnline;
            self.hide.schedule(now + BACK_ONLINE_DURATION);
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Tick(Instant),
    ViewOfflinePage,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    OpenOfflinePage,
}

/// Banner state. Holds one connectivity listener while mounted.
#[derive(Debug, Default)]
pub struct NetworkStatus {
    inner: Rc<RefCell<Inner>>,
    listener: Option<Listener>,
    pub show_icon: bool,
    /// Replaces the translated "back online" text.
    pub online_message: Option<String>,
    /// Replaces the translated "offline" text.
    pub offline_message: Option<String>,
}

impl NetworkStatus {
    #[must_use]
    pub fn new() -> Self {
        Self {
            show_icon: true,
            ..Self::default()
        }
    }

    /// Reads the current state and subscribes to changes.
    ///
    /// Starting offline shows the offline banner right away; starting online
    /// shows nothing.
    pub fn mount(&mut self, connectivity: &dyn Connectivity) {
        {
            let mut inner = self.inner.borrow_mut();
            inner.online = connectivity.is_online();
            inner.banner = if inner.online {
                Banner::Hidden
            } else {
                Banner::Offline
            };
            inner.hide.cancel();
        }

        let inner = Rc::clone(&self.inner);
        self.listener = Some(connectivity.subscribe(Box::new(move |online| {
            inner.borrow_mut().apply(online, Instant::now());
        })));
    }

    /// Releases the listener and cancels a pending hide.
    pub fn unmount(&mut self) {
        if let Some(listener) = self.listener.take() {
            listener.release();
        }
        self.inner.borrow_mut().hide.cancel();
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.listener.is_some()
    }

    /// Applies a connectivity change observed at `now`.
    pub fn set_online(&mut self, online: bool, now: Instant) {
        self.inner.borrow_mut().apply(online, now);
    }

    /// Hides the "back online" banner once its time is up.
    pub fn tick(&mut self, now: Instant) {
        let mut inner = self.inner.borrow_mut();
        if inner.hide.fire(now).is_some() {
            inner.banner = Banner::Hidden;
            tracing::trace!("back-online banner hidden");
        }
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Tick(now) => {
                self.tick(now);
                Event::None
            }
            Message::ViewOfflinePage => Event::OpenOfflinePage,
        }
    }

    #[must_use]
    pub fn banner(&self) -> Banner {
        self.inner.borrow().banner
    }

    #[must_use]
    pub fn is_online(&self) -> bool {
        self.inner.borrow().online
    }

    #[must_use]
    pub fn has_pending_timer(&self) -> bool {
        self.inner.borrow().hide.is_armed()
    }

    /// Text of the current banner; overrides win over translations.
    #[must_use]
    pub fn banner_text(&self, i18n: &dyn Translate) -> Option<String> {
        match self.banner() {
            Banner::Hidden => None,
            Banner::Offline => Some(
                self.offline_message
                    .clone()
                    .unwrap_or_else(|| i18n.translate("network-offline", "You're Offline")),
            ),
            Banner::BackOnline => Some(
                self.online_message
                    .clone()
                    .unwrap_or_else(|| i18n.translate("network-online", "Back Online")),
            ),
        }
    }

    /// Renders the banner, or nothing when hidden.
    pub fn view<'a>(&self, i18n: &dyn Translate) -> Option<Element<'a, Message>> {
        let text = self.banner_text(i18n)?;
        let color = if self.banner() == Banner::Offline {
            styles::container::OFFLINE
        } else {
            styles::container::ONLINE
        };

        let mut row = Row::new().spacing(spacing::SM).align_y(Vertical::Center);
        if self.show_icon {
            row = row.push(Text::new("●").size(sizing::ICON_SM));
        }
        row = row.push(Text::new(text).size(typography::BODY));

        if self.banner() == Banner::Offline {
            row = row.push(Space::new().width(Length::Fill)).push(
                button(
                    Text::new(i18n.translate("network-view-offline-page", "View Offline Page"))
                        .size(typography::BODY_SM),
                )
                .on_press(Message::ViewOfflinePage)
                .style(styles::button::style(Variant::Ghost)),
            );
        }

        Some(
            Container::new(row)
                .width(Length::Fill)
                .padding([spacing::XS, spacing::MD])
                .style(styles::container::banner(color))
                .into(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{fluent::I18n, Language};
    use crate::infrastructure::SharedConnectivity;

    #[test]
    fn mounting_online_shows_nothing() {
        let connectivity = SharedConnectivity::new(true);
        let mut status = NetworkStatus::new();
        status.mount(&connectivity);
        assert_eq!(status.banner(), Banner::Hidden);
        assert_eq!(connectivity.subscriber_count(), 1);
    }

    #[test]
    fn mounting_offline_shows_offline_banner() {
        let connectivity = SharedConnectivity::new(false);
        let mut status = NetworkStatus::new();
        status.mount(&connectivity);
        assert_eq!(status.banner(), Banner::Offline);
    }

    #[test]
    fn back_online_banner_hides_after_three_seconds() {
        let connectivity = SharedConnectivity::new(true);
        let mut status = NetworkStatus::new();
        status.mount(&connectivity);

        connectivity.set_online(false);
        assert_eq!(status.banner(), Banner::Offline);

        let t0 = Instant::now();
        connectivity.set_online(true);
        assert_eq!(status.banner(), Banner::BackOnline);
        assert!(status.has_pending_timer());

        status.tick(t0 + Duration::from_millis(1000));
        assert_eq!(status.banner(), Banner::BackOnline);

        status.tick(Instant::now() + BACK_ONLINE_DURATION);
        assert_eq!(status.banner(), Banner::Hidden);
        assert!(!status.has_pending_timer());
    }

    #[test]
    fn going_offline_again_cancels_hide() {
        let t0 = Instant::now();
        let mut status = NetworkStatus::new();
        status.set_online(false, t0);
        status.set_online(true, t0);
        status.set_online(false, t0 + Duration::from_millis(500));

        status.tick(t0 + Duration::from_secs(10));
        assert_eq!(status.banner(), Banner::Offline);
    }

    #[test]
    fn unmount_releases_listener() {
        let connectivity = SharedConnectivity::new(true);
        let mut status = NetworkStatus::new();
        status.mount(&connectivity);
        status.unmount();

        assert_eq!(connectivity.subscriber_count(), 0);
        connectivity.set_online(false);
        assert_eq!(status.banner(), Banner::Hidden);
    }

    #[test]
    fn custom_messages_replace_translations() {
        let i18n = I18n::new(Language::En);
        let t0 = Instant::now();
        let mut status = NetworkStatus::new();
        assert_eq!(status.banner_text(&i18n), None);

        status.set_online(false, t0);
        assert_eq!(status.banner_text(&i18n).as_deref(), Some("You're Offline"));

        status.offline_message = Some("No signal".into());
        status.online_message = Some("Reconnected".into());
        assert_eq!(status.banner_text(&i18n).as_deref(), Some("No signal"));
        assert!(status.view(&i18n).is_some());

        status.set_online(true, t0);
        assert_eq!(status.banner_text(&i18n).as_deref(), Some("Reconnected"));
    }

    #[test]
    fn offline_page_button_emits_event() {
        let mut status = NetworkStatus::new();
        assert_eq!(status.update(Message::ViewOfflinePage), Event::OpenOfflinePage);
    }
}
