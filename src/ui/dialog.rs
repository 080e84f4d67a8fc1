// SPDX-License-Identifier: MPL-2.0
//! Dialog: a [`Modal`] with a description and a row of action buttons.
//!
//! Like the modal, the dialog never closes itself; close requests and action
//! presses are reported to the owner.

use crate::application::port::Translate;
use crate::ui::button::Button;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::events::EventSource;
use crate::ui::modal::{self, Modal};
use crate::ui::styles::button::Variant;
use iced::widget::{Column, Row, Space, Text};
use iced::{alignment, keyboard, Element, Length};

/// One button in the dialog's action row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub label: String,
    pub variant: Variant,
    pub disabled: bool,
    pub loading: bool,
}

impl Action {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            variant: Variant::Secondary,
            disabled: false,
            loading: false,
        }
    }

    #[must_use]
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    #[must_use]
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        !self.disabled && !self.loading
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Modal(modal::Message),
    Action(usize),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    CloseRequested,
    /// An enabled action was pressed; carries its index in `actions`.
    Action(usize),
}

#[derive(Debug, Default)]
pub struct Dialog {
    pub modal: Modal,
    pub description: Option<String>,
    pub actions: Vec<Action>,
}

impl Dialog {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            modal: Modal::new(title),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.modal.is_open()
    }

    pub fn open(&mut self, keys: &EventSource<keyboard::Key>) {
        self.modal.open(keys);
    }

    pub fn close(&mut self) {
        self.modal.close();
    }

    pub fn take_escape_request(&self) -> bool {
        self.modal.take_escape_request()
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Modal(message) => match self.modal.update(message) {
                modal::Event::None => Event::None,
                modal::Event::CloseRequested => Event::CloseRequested,
            },
            Message::Action(index) => match self.actions.get(index) {
                Some(action) if action.is_enabled() => Event::Action(index),
                Some(_) => Event::None,
                None => {
                    tracing::warn!(index, "dialog action index out of range");
                    Event::None
                }
            },
        }
    }

    /// Layers the dialog over `base`. `body` goes between the description
    /// and the actions.
    pub fn view<'a, M: Clone + 'a>(
        &'a self,
        base: Element<'a, M>,
        body: Option<Element<'a, M>>,
        i18n: &dyn Translate,
        wrap: impl Fn(Message) -> M + Copy + 'a,
    ) -> Element<'a, M> {
        if !self.is_open() {
            return base;
        }

        let mut content = Column::new().spacing(spacing::MD);
        if let Some(description) = &self.description {
            content = content.push(Text::new(description.as_str()).size(typography::BODY));
        }
        if let Some(body) = body {
            content = content.push(body);
        }

        if !self.actions.is_empty() {
            let buttons = self.actions.iter().enumerate().map(|(index, action)| {
                Button::new(action.label.as_str())
                    .variant(action.variant)
                    .disabled(action.disabled)
                    .loading(action.loading)
                    .on_press(wrap(Message::Action(index)))
                    .view()
            });
            content = content.push(
                Row::new()
                    .spacing(spacing::SM)
                    .align_y(alignment::Vertical::Center)
                    .push(Space::new().width(Length::Fill))
                    .extend(buttons),
            );
        }

        self.modal
            .view(base, content.into(), i18n, move |message| {
                wrap(Message::Modal(message))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    fn confirm() -> Dialog {
        Dialog::new("Delete file?")
            .description("This cannot be undone.")
            .action(Action::new("Cancel"))
            .action(Action::new("Delete").variant(Variant::Danger))
    }

    #[test]
    fn actions_default_to_secondary() {
        let action = Action::new("Cancel");
        assert_eq!(action.variant, Variant::Secondary);
        assert!(action.is_enabled());
    }

    #[test]
    fn enabled_action_is_reported() {
        let mut dialog = confirm();
        assert_eq!(dialog.update(Message::Action(1)), Event::Action(1));
    }

    #[test]
    fn disabled_and_loading_actions_are_ignored() {
        let mut dialog = confirm();
        dialog.actions[0].disabled = true;
        dialog.actions[1].loading = true;

        assert_eq!(dialog.update(Message::Action(0)), Event::None);
        assert_eq!(dialog.update(Message::Action(1)), Event::None);
        assert_eq!(dialog.update(Message::Action(9)), Event::None);
    }

    #[test]
    fn modal_close_requests_pass_through() {
        let mut dialog = confirm();
        assert_eq!(
            dialog.update(Message::Modal(modal::Message::Backdrop)),
            Event::CloseRequested
        );

        dialog.modal.close_on_backdrop_click = false;
        assert_eq!(dialog.update(Message::Modal(modal::Message::Backdrop)), Event::None);
    }

    #[test]
    fn escape_listener_follows_open_state() {
        let keys = EventSource::new();
        let mut dialog = confirm();
        dialog.open(&keys);
        assert_eq!(keys.listener_count(), 1);

        keys.emit(&keyboard::Key::Named(keyboard::key::Named::Escape));
        assert!(dialog.take_escape_request());

        dialog.close();
        assert!(!dialog.is_open());
        assert_eq!(keys.listener_count(), 0);
    }

    #[test]
    fn open_dialog_renders() {
        let i18n = I18n::default();
        let keys = EventSource::new();
        let mut dialog = confirm();
        dialog.actions[1].loading = true;
        dialog.open(&keys);

        let base: Element<'_, Message> = Text::new("page").into();
        let _element = dialog.view(base, None, &i18n, |message| message);
    }
}
