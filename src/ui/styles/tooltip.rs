// SPDX-License-Identifier: MPL-2.0
//! Tooltip styles.
//!
//! Tooltips invert the theme background so they stay readable on any surface.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, spacing, typography};
use iced::widget::{container, tooltip, Container, Text};
use iced::{Background, Border, Color, Element, Theme};

/// Tooltip surface. Light on dark themes, dark on light themes.
pub fn tooltip_container(theme: &Theme) -> container::Style {
    let bg = theme.extended_palette().background.base.color;
    let dark_theme = (bg.r + bg.g + bg.b) / 3.0 < 0.5;

    let (surface, text) = if dark_theme {
        (palette::GRAY_100, palette::GRAY_900)
    } else {
        (palette::GRAY_900, palette::GRAY_100)
    };

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..surface
        })),
        border: Border {
            radius: radius::SM.into(),
            width: border::WIDTH_SM,
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            },
        },
        shadow: shadow::SM,
        text_color: Some(text),
        ..Default::default()
    }
}

/// Wraps `content` in a tooltip showing `tip`.
///
/// ```ignore
/// tooltip::styled(close_button, i18n.tr("alert-close"), tooltip::Position::Left)
/// ```
pub fn styled<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    tip: impl Into<String>,
    position: tooltip::Position,
) -> tooltip::Tooltip<'a, Message, Theme, iced::Renderer> {
    let tip_container = Container::new(Text::new(tip.into()).size(typography::BODY_SM))
        .padding(spacing::XS)
        .style(tooltip_container);

    tooltip(content, tip_container, position).gap(spacing::XS)
}
