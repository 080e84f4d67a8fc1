// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use crate::ui::notifications::Severity;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Surface behind menus, dialogs and dropdowns.
///
/// Derived from the theme background so it reads in light and dark modes.
pub fn panel(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..base
        })),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// Navbar surface: transparent at the top of the page, solid with a shadow
/// once the page has scrolled.
pub fn navbar(scrolled: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        if !scrolled {
            return container::Style::default();
        }
        let base = theme.extended_palette().background.base.color;
        container::Style {
            background: Some(Background::Color(Color {
                a: opacity::SURFACE,
                ..base
            })),
            shadow: shadow::MD,
            ..Default::default()
        }
    }
}

/// Dimmed layer behind a modal dialog.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..BLACK
        })),
        ..Default::default()
    }
}

/// Full-width status banner (offline / back online).
pub fn banner(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Alert surface for the three alert variants.
///
/// `fade` scales every alpha channel, so dismissing toasts can fade out.
pub fn alert(
    severity: Severity,
    variant: crate::ui::alert::Variant,
    fade: f32,
) -> impl Fn(&Theme) -> container::Style {
    use crate::ui::alert::Variant;

    move |theme: &Theme| {
        let accent = severity.color();
        let faded = |color: Color, alpha: f32| Color {
            a: color.a * alpha * fade,
            ..color
        };

        let (background, text, border_color) = match variant {
            Variant::Filled => (Some(accent), WHITE, Color::TRANSPARENT),
            Variant::Outlined => (None, theme.palette().text, accent),
            Variant::Standard => (
                Some(faded(accent, opacity::OVERLAY_SUBTLE)),
                theme.palette().text,
                Color::TRANSPARENT,
            ),
        };

        container::Style {
            background: background.map(|color| Background::Color(faded(color, 1.0))),
            text_color: Some(faded(text, 1.0)),
            border: Border {
                color: faded(border_color, 1.0),
                width: if variant == Variant::Outlined {
                    border::WIDTH_SM
                } else {
                    0.0
                },
                radius: radius::MD.into(),
            },
            shadow: if variant == Variant::Filled {
                shadow::SM
            } else {
                shadow::NONE
            },
            ..Default::default()
        }
    }
}

/// Offline banner color.
pub const OFFLINE: Color = palette::ERROR_600;
/// Back-online banner color.
pub const ONLINE: Color = palette::SUCCESS_500;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::alert::Variant;

    #[test]
    fn navbar_is_transparent_until_scrolled() {
        assert!(navbar(false)(&Theme::Light).background.is_none());
        assert!(navbar(true)(&Theme::Light).background.is_some());
    }

    #[test]
    fn filled_alert_uses_severity_color() {
        let style = alert(Severity::Error, Variant::Filled, 1.0)(&Theme::Dark);
        assert_eq!(
            style.background,
            Some(Background::Color(Severity::Error.color()))
        );
        assert_eq!(style.text_color, Some(WHITE));
    }

    #[test]
    fn outlined_alert_has_border_and_no_fill() {
        let style = alert(Severity::Warning, Variant::Outlined, 1.0)(&Theme::Light);
        assert!(style.background.is_none());
        assert_eq!(style.border.width, border::WIDTH_SM);
        assert_eq!(style.border.color, Severity::Warning.color());
    }

    #[test]
    fn fade_scales_alpha() {
        let style = alert(Severity::Success, Variant::Filled, 0.5)(&Theme::Dark);
        let Some(Background::Color(bg)) = style.background else {
            panic!("Expected color background")
        };
        assert!((bg.a - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn backdrop_is_translucent() {
        let Some(Background::Color(bg)) = backdrop(&Theme::Light).background else {
            panic!("Expected color background")
        };
        assert!(bg.a > 0.0 && bg.a < 1.0);
    }
}
