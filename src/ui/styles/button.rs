// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.
//!
//! [`Variant`] mirrors the library's button kinds; [`style`] builds the
//! matching Iced style function.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{gradient, Background, Border, Color, Degrees, Gradient, Theme};

/// Visual kind of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    #[default]
    Primary,
    Secondary,
    /// Diagonal brand gradient.
    Gradient,
    Ghost,
    Danger,
}

/// Padding preset of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Size {
    Small,
    #[default]
    Medium,
    Large,
}

impl Size {
    /// Returns `[vertical, horizontal]` padding.
    #[must_use]
    pub fn padding(self) -> [f32; 2] {
        match self {
            Size::Small => [4.0, 10.0],
            Size::Medium => [8.0, 16.0],
            Size::Large => [12.0, 24.0],
        }
    }
}

/// Returns the style function for `variant`.
pub fn style(variant: Variant) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| match variant {
        Variant::Primary => filled(palette::PRIMARY_500, palette::PRIMARY_400, status),
        Variant::Danger => filled(palette::ERROR_500, palette::ERROR_600, status),
        Variant::Secondary => {
            let base = theme.extended_palette().secondary.base;
            filled(base.color, base.color, status)
        }
        Variant::Gradient => gradient_fill(status),
        Variant::Ghost => ghost(theme, status),
    }
}

fn filled(color: Color, hover: Color, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => hover,
        button::Status::Disabled => Color {
            a: opacity::OVERLAY_MEDIUM,
            ..color
        },
        button::Status::Active | button::Status::Pressed => color,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: if status == button::Status::Hovered {
            shadow::MD
        } else {
            shadow::SM
        },
        snap: true,
    }
}

fn gradient_fill(status: button::Status) -> button::Style {
    let (from, to) = match status {
        button::Status::Hovered => (palette::PRIMARY_400, palette::INFO_500),
        button::Status::Pressed => (palette::PRIMARY_600, palette::PRIMARY_500),
        button::Status::Active | button::Status::Disabled => {
            (palette::PRIMARY_500, palette::INFO_500)
        }
    };
    let fade = if status == button::Status::Disabled {
        opacity::OVERLAY_MEDIUM
    } else {
        opacity::OPAQUE
    };
    let linear = gradient::Linear::new(Degrees(135.0))
        .add_stop(0.0, Color { a: fade, ..from })
        .add_stop(1.0, Color { a: fade, ..to });

    button::Style {
        background: Some(Background::Gradient(Gradient::Linear(linear))),
        ..filled(from, from, status)
    }
}

/// Transparent until hovered. Used for close buttons and nav links.
pub fn ghost(theme: &Theme, status: button::Status) -> button::Style {
    let text = theme.extended_palette().background.base.text;

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: text,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(Color {
                a: if status == button::Status::Pressed {
                    opacity::OVERLAY_MEDIUM
                } else {
                    opacity::OVERLAY_SUBTLE
                },
                ..palette::GRAY_400
            })),
            text_color: text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..text
            },
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Highlighted entry in a dropdown (the active language).
pub fn selected(theme: &Theme, status: button::Status) -> button::Style {
    let mut style = ghost(theme, status);
    style.background = Some(Background::Color(Color {
        a: opacity::OVERLAY_STRONG,
        ..palette::PRIMARY_500
    }));
    style.text_color = WHITE;
    style
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_is_filled_with_brand_color() {
        let style = style(Variant::Primary)(&Theme::Dark, button::Status::Active);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::PRIMARY_500))
        );
    }

    #[test]
    fn ghost_has_no_background_at_rest() {
        let style = ghost(&Theme::Light, button::Status::Active);
        assert!(style.background.is_none());
    }

    #[test]
    fn disabled_filled_button_is_faded() {
        let style = style(Variant::Danger)(&Theme::Dark, button::Status::Disabled);
        match style.background {
            Some(Background::Color(color)) => assert!(color.a < 1.0),
            other => panic!("unexpected background {other:?}"),
        }
    }

    #[test]
    fn gradient_variant_paints_a_gradient() {
        let style = style(Variant::Gradient)(&Theme::Dark, button::Status::Active);
        assert!(matches!(style.background, Some(Background::Gradient(_))));
        assert_eq!(style.text_color, WHITE);
    }

    #[test]
    fn sizes_grow() {
        assert!(Size::Large.padding()[1] > Size::Medium.padding()[1]);
        assert!(Size::Medium.padding()[1] > Size::Small.padding()[1]);
    }
}
