// SPDX-License-Identifier: MPL-2.0
//! Inline alert: a severity-colored box with an optional title and close button.
//!
//! Toasts render through this component with [`Variant::Filled`].

use crate::application::port::Translate;
use crate::ui::design_tokens::{opacity, sizing, spacing, typography};
use crate::ui::notifications::Severity;
use crate::ui::styles;
use iced::widget::{button, tooltip, Column, Container, Row, Text};
use iced::{alignment::Vertical, font, Element, Font, Length};
use std::borrow::Cow;

/// Surface treatment of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Solid severity background, white text.
    Filled,
    /// Severity border, no fill.
    Outlined,
    /// Tinted severity background.
    #[default]
    Standard,
}

/// What an alert shows.
#[derive(Debug, Clone)]
pub struct Alert<'a> {
    pub severity: Severity,
    pub variant: Variant,
    pub title: Option<Cow<'a, str>>,
    pub message: Cow<'a, str>,
    pub show_icon: bool,
    /// Multiplies every alpha channel of the alert.
    pub opacity: f32,
}

impl<'a> Alert<'a> {
    #[must_use]
    pub fn new(severity: Severity, message: impl Into<Cow<'a, str>>) -> Self {
        Self {
            severity,
            variant: Variant::default(),
            title: None,
            message: message.into(),
            show_icon: true,
            opacity: opacity::OPAQUE,
        }
    }

    #[must_use]
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<Cow<'a, str>>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Renders an alert. A close button is shown when `on_close` is set.
pub fn view<'a, M: Clone + 'a>(
    alert: Alert<'a>,
    on_close: Option<M>,
    i18n: &dyn Translate,
) -> Element<'a, M> {
    let mut row = Row::new().spacing(spacing::SM).align_y(Vertical::Top);

    if alert.show_icon {
        row = row.push(
            Text::new(alert.severity.glyph())
                .size(sizing::ICON_MD)
                .width(Length::Fixed(sizing::ICON_MD)),
        );
    }

    let mut body = Column::new().spacing(spacing::XXS).width(Length::Fill);
    if let Some(title) = alert.title {
        body = body.push(Text::new(title).size(typography::BODY_LG).font(Font {
            weight: font::Weight::Bold,
            ..Font::DEFAULT
        }));
    }
    body = body.push(Text::new(alert.message).size(typography::BODY));
    row = row.push(body);

    if let Some(message) = on_close {
        let close = button(Text::new("✕").size(typography::BODY_SM))
            .on_press(message)
            .padding(spacing::XXS)
            .style(styles::button::ghost);
        row = row.push(styles::tooltip::styled(
            close,
            i18n.translate("alert-close", "Close"),
            tooltip::Position::Left,
        ));
    }

    Container::new(row)
        .width(Length::Fill)
        .padding([spacing::SM, spacing::MD])
        .style(styles::container::alert(
            alert.severity,
            alert.variant,
            alert.opacity,
        ))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_to_standard_opaque() {
        let alert = Alert::new(Severity::Info, "hello");
        assert_eq!(alert.variant, Variant::Standard);
        assert_eq!(alert.opacity, opacity::OPAQUE);
        assert!(alert.title.is_none());
        assert!(alert.show_icon);
    }

    #[test]
    fn builder_sets_title_and_variant() {
        let alert = Alert::new(Severity::Warning, "disk almost full")
            .title("Storage")
            .variant(Variant::Outlined);
        assert_eq!(alert.title.as_deref(), Some("Storage"));
        assert_eq!(alert.variant, Variant::Outlined);
    }
}
