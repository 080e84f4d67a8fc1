// SPDX-License-Identifier: MPL-2.0
//! Modal dialog over a dimmed backdrop.
//!
//! The modal never closes itself. Escape presses, backdrop clicks and the
//! close button become close requests; the owner decides and calls
//! [`Modal::close`].

use crate::application::port::Translate;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::events::{EventSource, Listener};
use crate::ui::styles;
use iced::keyboard::{self, key};
use iced::widget::{button, mouse_area, opaque, tooltip, Column, Container, Row, Space, Stack, Text};
use iced::{alignment, font, Element, Font, Length};
use std::cell::Cell;
use std::rc::Rc;

/// Dialog width preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Size {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
    Full,
}

impl Size {
    #[must_use]
    pub fn width(self) -> Length {
        match self {
            Size::Sm => Length::Fixed(sizing::MODAL_SM),
            Size::Md => Length::Fixed(sizing::MODAL_MD),
            Size::Lg => Length::Fixed(sizing::MODAL_LG),
            Size::Xl => Length::Fixed(sizing::MODAL_XL),
            Size::Full => Length::Fill,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    CloseButton,
    Backdrop,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    CloseRequested,
}

#[derive(Debug)]
pub struct Modal {
    pub title: Option<String>,
    pub size: Size,
    pub show_close_button: bool,
    pub close_on_backdrop_click: bool,
    pub close_on_escape: bool,
    open: bool,
    escape_pressed: Rc<Cell<bool>>,
    escape_listener: Option<Listener>,
}

impl Default for Modal {
    fn default() -> Self {
        Self {
            title: None,
            size: Size::default(),
            show_close_button: true,
            close_on_backdrop_click: true,
            close_on_escape: true,
            open: false,
            escape_pressed: Rc::new(Cell::new(false)),
            escape_listener: None,
        }
    }
}

impl Modal {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Opens the dialog. With `close_on_escape`, listens to `keys` until
    /// closed.
    pub fn open(&mut self, keys: &EventSource<keyboard::Key>) {
        self.open = true;
        self.escape_pressed.set(false);
        self.escape_listener = None;

        if self.close_on_escape {
            let pressed = Rc::clone(&self.escape_pressed);
            self.escape_listener = Some(keys.listen(move |key| {
                if matches!(key, keyboard::Key::Named(key::Named::Escape)) {
                    pressed.set(true);
                }
            }));
        }
    }

    /// Closes the dialog and releases the escape listener.
    pub fn close(&mut self) {
        self.open = false;
        self.escape_pressed.set(false);
        if let Some(listener) = self.escape_listener.take() {
            listener.release();
        }
    }

    /// Returns `true` once per escape press received while open.
    pub fn take_escape_request(&self) -> bool {
        self.escape_pressed.replace(false)
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::CloseButton => Event::CloseRequested,
            Message::Backdrop if self.close_on_backdrop_click => Event::CloseRequested,
            Message::Backdrop => Event::None,
        }
    }

    /// Layers the dialog over `base`. Returns `base` unchanged when closed.
    pub fn view<'a, M: Clone + 'a>(
        &'a self,
        base: Element<'a, M>,
        body: Element<'a, M>,
        i18n: &dyn Translate,
        wrap: impl Fn(Message) -> M,
    ) -> Element<'a, M> {
        if !self.open {
            return base;
        }

        let mut header = Row::new().align_y(alignment::Vertical::Center);
        if let Some(title) = &self.title {
            header = header.push(Text::new(title.as_str()).size(typography::TITLE_MD).font(
                Font {
                    weight: font::Weight::Bold,
                    ..Font::DEFAULT
                },
            ));
        }
        header = header.push(Space::new().width(Length::Fill));
        if self.show_close_button {
            let close = button(Text::new("✕").size(sizing::ICON_MD))
                .on_press(wrap(Message::CloseButton))
                .padding(spacing::XXS)
                .style(styles::button::ghost);
            header = header.push(styles::tooltip::styled(
                close,
                i18n.translate("modal-close", "Close modal"),
                tooltip::Position::Bottom,
            ));
        }

        let mut dialog = Column::new().spacing(spacing::MD);
        if self.title.is_some() || self.show_close_button {
            dialog = dialog.push(header);
        }
        dialog = dialog.push(body);

        let dialog = Container::new(dialog)
            .width(self.size.width())
            .padding(spacing::LG)
            .style(styles::container::panel);

        let backdrop = mouse_area(
            Container::new(Space::new())
                .width(Length::Fill)
                .height(Length::Fill)
                .style(styles::container::backdrop),
        )
        .on_press(wrap(Message::Backdrop));

        let centered = Container::new(opaque(dialog))
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::XL)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center);

        Stack::new().push(base).push(backdrop).push(centered).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn escape() -> keyboard::Key {
        keyboard::Key::Named(key::Named::Escape)
    }

    #[test]
    fn defaults_match_dialog_conventions() {
        let modal = Modal::default();
        assert_eq!(modal.size, Size::Md);
        assert!(modal.show_close_button);
        assert!(modal.close_on_backdrop_click);
        assert!(modal.close_on_escape);
        assert!(!modal.is_open());
    }

    #[test]
    fn escape_while_open_requests_close() {
        let keys = EventSource::new();
        let mut modal = Modal::new("Confirm");
        modal.open(&keys);
        assert_eq!(keys.listener_count(), 1);

        keys.emit(&keyboard::Key::Character("a".into()));
        assert!(!modal.take_escape_request());

        keys.emit(&escape());
        assert!(modal.take_escape_request());
        assert!(!modal.take_escape_request());
    }

    #[test]
    fn close_releases_escape_listener() {
        let keys = EventSource::new();
        let mut modal = Modal::default();
        modal.open(&keys);
        modal.close();

        assert_eq!(keys.listener_count(), 0);
        keys.emit(&escape());
        assert!(!modal.take_escape_request());
    }

    #[test]
    fn escape_disabled_holds_no_listener() {
        let keys = EventSource::new();
        let mut modal = Modal {
            close_on_escape: false,
            ..Modal::default()
        };
        modal.open(&keys);
        assert!(modal.is_open());
        assert_eq!(keys.listener_count(), 0);
    }

    #[test]
    fn reopening_keeps_one_listener() {
        let keys = EventSource::new();
        let mut modal = Modal::default();
        modal.open(&keys);
        modal.open(&keys);
        assert_eq!(keys.listener_count(), 1);
    }

    #[test]
    fn dropping_open_modal_releases_listener() {
        let keys = EventSource::new();
        {
            let mut modal = Modal::default();
            modal.open(&keys);
        }
        assert_eq!(keys.listener_count(), 0);
    }

    #[test]
    fn backdrop_click_respects_flag() {
        let mut modal = Modal::default();
        assert_eq!(modal.update(Message::Backdrop), Event::CloseRequested);

        modal.close_on_backdrop_click = false;
        assert_eq!(modal.update(Message::Backdrop), Event::None);
        assert_eq!(modal.update(Message::CloseButton), Event::CloseRequested);
    }

    #[test]
    fn full_size_fills_width() {
        assert_eq!(Size::Full.width(), Length::Fill);
        assert_eq!(Size::Sm.width(), Length::Fixed(sizing::MODAL_SM));
    }
}
