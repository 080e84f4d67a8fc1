// SPDX-License-Identifier: MPL-2.0
//! Language dropdown: the active language's flag and name, opening a list of
//! every supported language.

use crate::application::port::Translate;
use crate::i18n::Language;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment::Vertical, Element, Length};

/// Dropdown state owned by the parent component.
#[derive(Debug, Clone)]
pub struct State {
    pub open: bool,
    pub show_flags: bool,
    pub available: Vec<Language>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            open: false,
            show_flags: true,
            available: Language::ALL.to_vec(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Toggle,
    Select(Language),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// The user picked a language. The parent applies it to the
    /// language context.
    LanguageSelected(Language),
}

pub fn update(message: Message, state: &mut State) -> Event {
    match message {
        Message::Toggle => {
            state.open = !state.open;
            Event::None
        }
        Message::Select(language) => {
            state.open = false;
            Event::LanguageSelected(language)
        }
    }
}

fn label<'a>(language: Language, show_flag: bool) -> Row<'a, Message> {
    let mut row = Row::new().spacing(spacing::XS).align_y(Vertical::Center);
    if show_flag {
        row = row.push(Text::new(language.flag()));
    }
    row.push(Text::new(language.display_name()).size(typography::BODY))
}

pub fn view<'a>(state: &State, current: Language, i18n: &dyn Translate) -> Element<'a, Message> {
    let chevron = if state.open { "▴" } else { "▾" };
    let trigger = button(
        label(current, state.show_flags).push(Text::new(chevron).size(typography::CAPTION)),
    )
    .on_press(Message::Toggle)
    .padding([spacing::XXS, spacing::XS])
    .style(styles::button::ghost);

    let trigger = styles::tooltip::styled(
        trigger,
        i18n.translate("language-selector-label", "Select language"),
        iced::widget::tooltip::Position::Bottom,
    );

    if !state.open {
        return trigger.into();
    }

    let options = state.available.iter().map(|&language| {
        let style = if language == current {
            styles::button::selected
        } else {
            styles::button::ghost
        };
        button(label(language, state.show_flags))
            .on_press(Message::Select(language))
            .width(Length::Fill)
            .padding([spacing::XXS, spacing::XS])
            .style(style)
            .into()
    });

    let dropdown = Container::new(Column::with_children(options).spacing(spacing::XXS))
        .padding(spacing::XS)
        .style(styles::container::panel);

    Column::new()
        .spacing(spacing::XXS)
        .push(trigger)
        .push(dropdown)
        .into()
}
