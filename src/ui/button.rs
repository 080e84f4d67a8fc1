// SPDX-License-Identifier: MPL-2.0
//! Library button with variant, size, loading, disabled and full-width
//! states.
//!
//! ```ignore
//! use crate::ui::button::Button;
//! use crate::ui::styles::button::Variant;
//!
//! Button::new("Save")
//!     .variant(Variant::Gradient)
//!     .loading(state.saving)
//!     .on_press(Message::Save)
//!     .view()
//! ```

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles::button::{self as button_styles, Size, Variant};
use iced::widget::{button, Container, Row, Text};
use iced::{alignment, Element, Length};
use std::borrow::Cow;

/// Glyph shown in front of the label while loading.
pub const SPINNER: &str = "◌";

#[derive(Debug, Clone)]
pub struct Button<'a, Message> {
    label: Cow<'a, str>,
    variant: Variant,
    size: Size,
    loading: bool,
    disabled: bool,
    full_width: bool,
    on_press: Option<Message>,
}

impl<'a, Message: Clone + 'a> Button<'a, Message> {
    pub fn new(label: impl Into<Cow<'a, str>>) -> Self {
        Self {
            label: label.into(),
            variant: Variant::default(),
            size: Size::default(),
            loading: false,
            disabled: false,
            full_width: false,
            on_press: None,
        }
    }

    #[must_use]
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    #[must_use]
    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Shows the spinner and blocks presses.
    #[must_use]
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    #[must_use]
    pub fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    #[must_use]
    pub fn on_press(mut self, message: Message) -> Self {
        self.on_press = Some(message);
        self
    }

    /// A loading or disabled button ignores presses.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        !self.disabled && !self.loading && self.on_press.is_some()
    }

    pub fn view(self) -> Element<'a, Message> {
        let enabled = self.is_enabled();

        let mut content = Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center);
        if self.loading {
            content = content.push(Text::new(SPINNER).size(typography::BODY));
        }
        content = content.push(Text::new(self.label).size(typography::BODY));

        let content = if self.full_width {
            Container::new(content)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center)
        } else {
            Container::new(content)
        };

        let width = if self.full_width {
            Length::Fill
        } else {
            Length::Shrink
        };

        button(content)
            .on_press_maybe(self.on_press.filter(|_| enabled))
            .padding(self.size.padding())
            .width(width)
            .style(button_styles::style(self.variant))
            .into()
    }
}
