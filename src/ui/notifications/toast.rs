// SPDX-License-Identifier: MPL-2.0
//! Toast container: renders part of a caller-owned [`Manager`] at an anchor.
//!
//! The container is a projection. It keeps no notification state, shows at
//! most `max_visible` entries in list order, and leaves the rest unrendered
//! until the list shrinks.

use super::manager::{Manager, Message};
use super::notification::{Notification, Phase};
use crate::application::port::Translate;
use crate::config::NotificationsConfig;
use crate::ui::alert::{self, Alert, Variant};
use crate::ui::design_tokens::{opacity, sizing, spacing};
use iced::widget::{Column, Container};
use iced::{alignment, Element, Length};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Screen anchor of the toast stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    #[default]
    TopRight,
    TopLeft,
    BottomRight,
    BottomLeft,
    TopCenter,
    BottomCenter,
}

impl Position {
    #[must_use]
    pub fn horizontal(self) -> alignment::Horizontal {
        match self {
            Position::TopLeft | Position::BottomLeft => alignment::Horizontal::Left,
            Position::TopCenter | Position::BottomCenter => alignment::Horizontal::Center,
            Position::TopRight | Position::BottomRight => alignment::Horizontal::Right,
        }
    }

    #[must_use]
    pub fn vertical(self) -> alignment::Vertical {
        if self.is_top() {
            alignment::Vertical::Top
        } else {
            alignment::Vertical::Bottom
        }
    }

    #[must_use]
    pub fn is_top(self) -> bool {
        matches!(
            self,
            Position::TopRight | Position::TopLeft | Position::TopCenter
        )
    }
}

/// Container configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastContainer {
    pub position: Position,
    pub max_visible: usize,
}

impl Default for ToastContainer {
    fn default() -> Self {
        Self::from_config(&NotificationsConfig::default())
    }
}

impl ToastContainer {
    #[must_use]
    pub fn new(position: Position, max_visible: usize) -> Self {
        Self {
            position,
            max_visible,
        }
    }

    #[must_use]
    pub fn from_config(config: &NotificationsConfig) -> Self {
        Self::new(config.position, config.max_visible)
    }

    /// The notifications this container renders, in list order.
    pub fn visible<'a>(&self, manager: &'a Manager) -> impl Iterator<Item = &'a Notification> {
        manager
            .iter()
            .filter(|n| n.phase() != Phase::Removed)
            .take(self.max_visible)
    }

    /// Renders the toast stack as a full-size overlay layer.
    pub fn view<'a>(&self, manager: &'a Manager, i18n: &'a dyn Translate) -> Element<'a, Message> {
        let toasts: Vec<Element<'a, Message>> = self
            .visible(manager)
            .map(|notification| toast(notification, i18n))
            .collect();

        let stack = Column::with_children(toasts)
            .spacing(spacing::XS)
            .align_x(self.position.horizontal());

        Container::new(stack)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(self.position.horizontal())
            .align_y(self.position.vertical())
            .padding(spacing::MD)
            .into()
    }
}

/// Renders a single toast as a filled alert. Dismissing toasts fade out.
pub fn toast<'a>(notification: &'a Notification, i18n: &'a dyn Translate) -> Element<'a, Message> {
    let fade = if notification.is_visible() {
        opacity::OPAQUE
    } else {
        opacity::OVERLAY_MEDIUM
    };

    let on_close = notification
        .is_closable()
        .then(|| Message::Close(notification.id().clone()));

    let alert = Alert {
        severity: notification.severity(),
        variant: Variant::Filled,
        title: notification.title().map(Cow::Borrowed),
        message: Cow::Borrowed(notification.message()),
        show_icon: true,
        opacity: fade,
    };

    Container::new(alert::view(alert, on_close, i18n))
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .into()
}
