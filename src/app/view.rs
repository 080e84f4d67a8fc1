// SPDX-License-Identifier: MPL-2.0
//! Showcase layout: navbar, connectivity banner, scrolling page, toast layer,
//! modal and dialog.
//!
//! The page is a stack of fixed-height sections so section links can scroll
//! to a known offset.

use super::Message;
use crate::application::port::Connectivity;
use crate::i18n::fluent::I18n;
use crate::infrastructure::SharedConnectivity;
use crate::language::LanguageContext;
use crate::ui::alert::{self, Alert, Variant as AlertVariant};
use crate::ui::button::Button;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::dialog::Dialog;
use crate::ui::modal::Modal;
use crate::ui::navbar::{self, Section};
use crate::ui::network_status::NetworkStatus;
use crate::ui::notifications::{self, Severity, ToastContainer};
use crate::ui::styles::button::{Size, Variant};
use iced::widget::{scrollable::Viewport, Column, Container, Id, Row, Scrollable, Stack, Text};
use iced::{font, Element, Font, Length};

/// Widget id of the page scrollable.
pub const PAGE_ID: &str = "showcase-page";

/// Height of every page section.
pub const SECTION_HEIGHT: f32 = 640.0;

/// Sections rendered on the page, top to bottom.
const PAGE_SECTIONS: [Section; 4] = [
    Section::Home,
    Section::Services,
    Section::About,
    Section::Contact,
];

/// Vertical scroll offset of `section`, if it is on the page.
#[must_use]
pub fn section_offset(section: Section) -> Option<f32> {
    PAGE_SECTIONS
        .iter()
        .position(|s| *s == section)
        .map(|index| index as f32 * SECTION_HEIGHT)
}

/// Contextual data needed to render the application.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub language: &'a LanguageContext,
    pub notifications: &'a notifications::Manager,
    pub toasts: &'a ToastContainer,
    pub navbar: &'a navbar::State,
    pub network: &'a NetworkStatus,
    pub connectivity: &'a SharedConnectivity,
    pub modal: &'a Modal,
    pub dialog: &'a Dialog,
    pub compact: bool,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar = navbar::view(
        ctx.navbar,
        navbar::ViewContext {
            i18n: ctx.i18n,
            language: ctx.language.language(),
            compact: ctx.compact,
        },
    )
    .map(Message::Navbar);

    let page = Scrollable::new(page(&ctx))
        .id(Id::new(PAGE_ID))
        .on_scroll(|viewport: Viewport| Message::Scrolled(viewport.absolute_offset().y))
        .height(Length::Fill);

    let mut base = Column::new().push(navbar);
    if let Some(banner) = ctx.network.view(ctx.i18n) {
        base = base.push(banner.map(Message::Network));
    }
    base = base.push(page);

    let with_toasts = Stack::new()
        .push(base)
        .push(
            ctx.toasts
                .view(ctx.notifications, ctx.i18n)
                .map(Message::Notification),
        );

    let modal_body = Text::new(ctx.i18n.tr("showcase-modal-body")).size(typography::BODY);
    let with_modal = ctx
        .modal
        .view(with_toasts.into(), modal_body.into(), ctx.i18n, Message::Modal);

    ctx.dialog.view(with_modal, None, ctx.i18n, Message::Dialog)
}

fn heading<'a>(label: String) -> Text<'a> {
    Text::new(label).size(typography::TITLE_MD).font(Font {
        weight: font::Weight::Bold,
        ..Font::DEFAULT
    })
}

fn page<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    Column::with_children(PAGE_SECTIONS.into_iter().map(|section| {
        let content = match section {
            Section::Home => home_section(ctx),
            Section::Services => Column::new()
                .spacing(spacing::XL)
                .push(toasts_section(ctx.i18n))
                .push(overlays_section(ctx))
                .into(),
            Section::About => alerts_section(ctx.i18n),
            Section::Contact | Section::Blog => Column::new()
                .spacing(spacing::XS)
                .push(heading(ctx.i18n.tr("nav-contact")))
                .push(Text::new(ctx.i18n.tr("showcase-section-body")).size(typography::BODY))
                .into(),
        };
        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fixed(SECTION_HEIGHT))
            .padding(spacing::LG)
            .clip(true)
            .into()
    }))
    .width(Length::Fill)
    .into()
}

fn home_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let language = ctx.language.language();
    let intro = Column::new()
        .spacing(spacing::XS)
        .push(
            Text::new(ctx.i18n.tr("showcase-title"))
                .size(typography::TITLE_LG)
                .font(Font {
                    weight: font::Weight::Bold,
                    ..Font::DEFAULT
                }),
        )
        .push(Text::new(ctx.i18n.tr_with_args(
            "showcase-current-language",
            &[("language", language.display_name())],
        )))
        .push(
            Text::new(ctx.i18n.tr_with_args(
                "showcase-current-path",
                &[("path", ctx.language.path().as_str())],
            ))
            .size(typography::BODY_SM),
        );

    Column::new()
        .spacing(spacing::XL)
        .push(intro)
        .push(buttons_section(ctx.i18n))
        .into()
}

fn demo_button<'a>(label: String, variant: Variant, size: Size, message: Message) -> Element<'a, Message> {
    Button::new(label)
        .variant(variant)
        .size(size)
        .on_press(message)
        .view()
}

fn buttons_section<'a>(i18n: &I18n) -> Element<'a, Message> {
    let variants = [
        (Variant::Primary, "button-primary"),
        (Variant::Secondary, "button-secondary"),
        (Variant::Gradient, "button-gradient"),
        (Variant::Ghost, "button-ghost"),
        (Variant::Danger, "button-danger"),
    ];
    let variant_row = Row::with_children(variants.into_iter().map(|(variant, key)| {
        demo_button(i18n.tr(key), variant, Size::Medium, Message::OpenModal)
    }))
    .spacing(spacing::SM);

    let sizes = [
        (Size::Small, "button-small"),
        (Size::Medium, "button-medium"),
        (Size::Large, "button-large"),
    ];
    let size_row = Row::with_children(sizes.into_iter().map(|(size, key)| {
        demo_button(i18n.tr(key), Variant::Primary, size, Message::OpenModal)
    }))
    .spacing(spacing::SM);

    let state_row = Row::new()
        .spacing(spacing::SM)
        .push(
            Button::new(i18n.tr("button-loading"))
                .loading(true)
                .on_press(Message::OpenModal)
                .view(),
        )
        .push(
            Button::new(i18n.tr("button-disabled"))
                .variant(Variant::Secondary)
                .disabled(true)
                .on_press(Message::OpenModal)
                .view(),
        );

    let full_width = Button::new(i18n.tr("button-full-width"))
        .variant(Variant::Gradient)
        .full_width(true)
        .on_press(Message::OpenModal)
        .view();

    Column::new()
        .spacing(spacing::SM)
        .push(heading(i18n.tr("showcase-buttons")))
        .push(variant_row)
        .push(size_row)
        .push(state_row)
        .push(full_width)
        .into()
}

const SEVERITIES: [(Severity, &str); 4] = [
    (Severity::Success, "severity-success"),
    (Severity::Info, "severity-info"),
    (Severity::Warning, "severity-warning"),
    (Severity::Error, "severity-error"),
];

fn toasts_section<'a>(i18n: &I18n) -> Element<'a, Message> {
    let row = Row::with_children(SEVERITIES.into_iter().map(|(severity, key)| {
        let variant = if severity == Severity::Error {
            Variant::Danger
        } else {
            Variant::Secondary
        };
        demo_button(i18n.tr(key), variant, Size::Small, Message::ShowToast(severity))
    }))
    .spacing(spacing::SM);

    Column::new()
        .spacing(spacing::SM)
        .push(heading(i18n.tr("showcase-toasts")))
        .push(row)
        .into()
}

fn alerts_section<'a>(i18n: &I18n) -> Element<'a, Message> {
    let columns = Row::with_children(
        [AlertVariant::Standard, AlertVariant::Outlined, AlertVariant::Filled]
            .into_iter()
            .map(|variant| {
                Column::with_children(SEVERITIES.into_iter().map(|(severity, key)| {
                    let alert = Alert::new(severity, i18n.tr("showcase-alert-message"))
                        .title(i18n.tr(key))
                        .variant(variant);
                    alert::view(alert, None::<Message>, i18n)
                }))
                .spacing(spacing::SM)
                .width(Length::FillPortion(1))
                .into()
            }),
    )
    .spacing(spacing::SM);

    Column::new()
        .spacing(spacing::SM)
        .push(heading(i18n.tr("showcase-alerts")))
        .push(columns)
        .into()
}

fn overlays_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let connectivity_key = if ctx.connectivity.is_online() {
        "showcase-go-offline"
    } else {
        "showcase-go-online"
    };

    Column::new()
        .spacing(spacing::SM)
        .push(heading(ctx.i18n.tr("showcase-overlays")))
        .push(
            Row::new()
                .spacing(spacing::SM)
                .push(demo_button(
                    ctx.i18n.tr("showcase-open-modal"),
                    Variant::Primary,
                    Size::Medium,
                    Message::OpenModal,
                ))
                .push(demo_button(
                    ctx.i18n.tr("showcase-open-dialog"),
                    Variant::Gradient,
                    Size::Medium,
                    Message::OpenDialog,
                ))
                .push(demo_button(
                    ctx.i18n.tr(connectivity_key),
                    Variant::Secondary,
                    Size::Medium,
                    Message::ToggleConnectivity,
                )),
        )
        .into()
}
