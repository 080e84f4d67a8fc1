// SPDX-License-Identifier: MPL-2.0
//! Navigation bar with section links, a language selector and a mobile menu.
//!
//! The bar turns solid and compact once the page scrolls past a threshold
//! (see [`ScrollState`]). In compact layouts the links collapse behind a
//! menu toggle.

mod scroll;

pub use scroll::ScrollState;

use crate::application::port::Translate;
use crate::i18n::Language;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::language_selector;
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    font, Element, Font, Length,
};

/// Built-in page sections, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Services,
    About,
    Blog,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::Services,
        Section::About,
        Section::Blog,
        Section::Contact,
    ];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Services => "services",
            Section::About => "about",
            Section::Blog => "blog",
            Section::Contact => "contact",
        }
    }

    /// Link target. The blog is a separate page keyed by language; every
    /// other section is an anchor on the current page.
    #[must_use]
    pub fn href(self, language: Language) -> String {
        match self {
            Section::Blog => format!("/{}/blog", language.code()),
            other => format!("#{}", other.id()),
        }
    }

    /// Sections living on the home page, reached by scrolling.
    #[must_use]
    pub fn is_anchor(self) -> bool {
        self != Section::Blog
    }

    /// Parses a `#id` anchor target.
    #[must_use]
    pub fn from_anchor(target: &str) -> Option<Section> {
        let id = target.strip_prefix('#')?;
        Section::ALL
            .into_iter()
            .find(|section| section.is_anchor() && section.id() == id)
    }

    fn label_key(self) -> &'static str {
        match self {
            Section::Home => "nav-home",
            Section::Services => "nav-services",
            Section::About => "nav-about",
            Section::Blog => "nav-blog",
            Section::Contact => "nav-contact",
        }
    }

    fn fallback_label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Services => "Services",
            Section::About => "About",
            Section::Blog => "Blog",
            Section::Contact => "Contact",
        }
    }
}

/// Whether `path` is a home route: `/` or `/{code}` for a supported code.
#[must_use]
pub fn is_home_route(path: &str) -> bool {
    let trimmed = path.trim_matches('/');
    trimmed.is_empty() || (!trimmed.contains('/') && Language::from_code(trimmed).is_some())
}

/// Extra link rendered after the built-in sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

impl NavLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// Navbar state owned by the parent application.
#[derive(Debug)]
pub struct State {
    pub brand: String,
    pub show_blog_link: bool,
    pub custom_links: Vec<NavLink>,
    pub menu_open: bool,
    pub scroll: ScrollState,
    pub selector: language_selector::State,
}

impl State {
    #[must_use]
    pub fn new(brand: impl Into<String>, scroll_threshold: f32) -> Self {
        Self {
            brand: brand.into(),
            show_blog_link: true,
            custom_links: Vec::new(),
            menu_open: false,
            scroll: ScrollState::new(scroll_threshold),
            selector: language_selector::State::default(),
        }
    }

    /// Built-in sections shown for `language`, with their targets.
    #[must_use]
    pub fn sections(&self, language: Language) -> Vec<(Section, String)> {
        Section::ALL
            .into_iter()
            .filter(|section| self.show_blog_link || *section != Section::Blog)
            .map(|section| (section, section.href(language)))
            .collect()
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    Navigate(Section),
    OpenLink(usize),
    LanguageSelector(language_selector::Message),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// A page link was activated; `target` is the path.
    Navigate { target: String },
    /// A section link was activated.
    ScrollTo(Section),
    LanguageSelected(Language),
}

/// Process a navbar message. Following any link closes the mobile menu.
pub fn update(message: Message, state: &mut State, language: Language) -> Event {
    match message {
        Message::ToggleMenu => {
            state.menu_open = !state.menu_open;
            Event::None
        }
        Message::Navigate(section) => {
            state.menu_open = false;
            if section.is_anchor() {
                Event::ScrollTo(section)
            } else {
                Event::Navigate {
                    target: section.href(language),
                }
            }
        }
        Message::OpenLink(index) => {
            state.menu_open = false;
            match state.custom_links.get(index) {
                Some(link) => match Section::from_anchor(&link.href) {
                    Some(section) => Event::ScrollTo(section),
                    None => Event::Navigate {
                        target: link.href.clone(),
                    },
                },
                None => {
                    tracing::warn!(index, "navbar link index out of range");
                    Event::None
                }
            }
        }
        Message::LanguageSelector(message) => {
            match language_selector::update(message, &mut state.selector) {
                language_selector::Event::None => Event::None,
                language_selector::Event::LanguageSelected(language) => {
                    state.menu_open = false;
                    Event::LanguageSelected(language)
                }
            }
        }
    }
}

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a dyn Translate,
    pub language: Language,
    /// Narrow layout: links collapse behind the menu toggle.
    pub compact: bool,
}

pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let scrolled = state.scroll.is_scrolled();
    let height = if scrolled {
        sizing::NAVBAR_HEIGHT_SCROLLED
    } else {
        sizing::NAVBAR_HEIGHT
    };

    let brand = button(
        Text::new(state.brand.as_str())
            .size(typography::TITLE_MD)
            .font(Font {
                weight: font::Weight::Bold,
                ..Font::DEFAULT
            }),
    )
    .on_press(Message::Navigate(Section::Home))
    .style(styles::button::ghost);

    let mut top_bar = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(brand)
        .push(Space::new().width(Length::Fill));

    if ctx.compact {
        let icon = if state.menu_open { "✕" } else { "☰" };
        top_bar = top_bar.push(
            button(Text::new(icon).size(sizing::ICON_MD))
                .on_press(Message::ToggleMenu)
                .padding(spacing::XS)
                .style(styles::button::ghost),
        );
    } else {
        top_bar = top_bar.push(
            Row::with_children(links(state, &ctx))
                .spacing(spacing::XS)
                .align_y(Vertical::Center),
        );
    }

    let mut content = Column::new().width(Length::Fill).push(
        Container::new(top_bar)
            .height(Length::Fixed(height))
            .align_y(Vertical::Center),
    );

    if ctx.compact && state.menu_open {
        content = content.push(
            Container::new(Column::with_children(links(state, &ctx)).spacing(spacing::XXS))
                .width(Length::Fill)
                .padding(spacing::XS)
                .style(styles::container::panel),
        );
    }

    Container::new(content)
        .width(Length::Fill)
        .padding([0.0, spacing::LG])
        .align_x(Horizontal::Left)
        .style(styles::container::navbar(scrolled))
        .into()
}

fn links<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Vec<Element<'a, Message>> {
    let mut items: Vec<Element<'a, Message>> = state
        .sections(ctx.language)
        .into_iter()
        .map(|(section, _)| {
            link(
                ctx.i18n
                    .translate(section.label_key(), section.fallback_label()),
                Message::Navigate(section),
            )
        })
        .collect();

    items.extend(
        state
            .custom_links
            .iter()
            .enumerate()
            .map(|(index, nav)| link(nav.label.clone(), Message::OpenLink(index))),
    );

    items.push(
        language_selector::view(&state.selector, ctx.language, ctx.i18n)
            .map(Message::LanguageSelector),
    );
    items
}

fn link<'a>(label: String, message: Message) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY))
        .on_press(message)
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::ghost)
        .into()
}
