// SPDX-License-Identifier: MPL-2.0
//! Showcase application wiring the components together.
//!
//! The `App` owns the language context, the notification list and the shared
//! event sources, and translates messages into state changes. Components
//! receive what they need through view contexts; none of them reach for
//! global state.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::port::{KeyValueStore, LocaleSource};
use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::i18n::Language;
use crate::infrastructure::{FileStore, MemoryStore, RouteLocation, SharedConnectivity, SystemLocale};
use crate::language::{self, LanguageContext};
use crate::ui::dialog::Dialog;
use crate::ui::events::EventSource;
use crate::ui::modal::Modal;
use crate::ui::navbar;
use crate::ui::network_status::NetworkStatus;
use crate::ui::notifications::{self, ToastContainer};
use iced::{keyboard, Element, Subscription, Task, Theme};
use std::cell::RefCell;
use std::fmt;
use std::time::Duration;

/// Windows narrower than this use the compact navbar.
pub const COMPACT_WIDTH: f32 = 768.0;

const BRAND: &str = "Nuvo UI";

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    language: LanguageContext,
    notifications: notifications::Manager,
    toasts: ToastContainer,
    toast_duration: Duration,
    navbar: navbar::State,
    network: NetworkStatus,
    connectivity: SharedConnectivity,
    modal: Modal,
    dialog: Dialog,
    scroll_events: EventSource<f32>,
    key_events: EventSource<keyboard::Key>,
    compact: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("language", &self.language)
            .field("notifications", &self.notifications.len())
            .field("modal_open", &self.modal.is_open())
            .field("dialog_open", &self.dialog.is_open())
            .field("compact", &self.compact)
            .finish_non_exhaustive()
    }
}

/// Entry point used by `main.rs` to launch the showcase.
pub fn run(flags: Flags) -> iced::Result {
    // iced 0.14 takes an `Fn` boot closure; flags are consumed on first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load();

        let mut storage: Box<dyn KeyValueStore> = match FileStore::open_default() {
            Some(store) => Box::new(store),
            None => {
                tracing::warn!("no config directory; language choice will not survive restarts");
                Box::new(MemoryStore::default())
            }
        };
        seed_language(storage.as_mut(), flags.lang.as_deref());

        let app = Self::with_services(
            &config,
            storage,
            flags.path.as_deref().unwrap_or("/"),
            &SystemLocale,
            SharedConnectivity::default(),
        );
        (app, Task::none())
    }

    /// Builds the application around explicit collaborators.
    pub fn with_services(
        config: &Config,
        storage: Box<dyn KeyValueStore>,
        path: &str,
        locale: &dyn LocaleSource,
        connectivity: SharedConnectivity,
    ) -> Self {
        let language = LanguageContext::new(
            storage,
            Box::new(RouteLocation::new(path)),
            locale,
            config.general.default_language,
        );
        let i18n = I18n::new(language.language());

        let mut notifications = notifications::Manager::new();
        notifications.set_on_removed(|notification| {
            tracing::debug!(id = %notification.id(), "toast removed");
        });

        let scroll_events = EventSource::new();
        let mut navbar = navbar::State::new(BRAND, config.navbar.scroll_threshold);
        navbar.scroll.mount(&scroll_events);

        let mut network = NetworkStatus::new();
        network.mount(&connectivity);

        Self {
            i18n,
            language,
            notifications,
            toasts: ToastContainer::from_config(&config.notifications),
            toast_duration: Duration::from_millis(config.notifications.default_duration_ms),
            navbar,
            network,
            connectivity,
            modal: Modal::default(),
            dialog: Dialog::default(),
            scroll_events,
            key_events: EventSource::new(),
            compact: false,
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("showcase-title")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(
            self.notifications.has_pending_timers() || self.network.has_pending_timer(),
        );

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            language: &mut self.language,
            notifications: &mut self.notifications,
            toast_duration: self.toast_duration,
            navbar: &mut self.navbar,
            network: &mut self.network,
            connectivity: &self.connectivity,
            modal: &mut self.modal,
            dialog: &mut self.dialog,
            scroll_events: &self.scroll_events,
            key_events: &self.key_events,
            compact: &mut self.compact,
        };
        update::update(&mut ctx, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            language: &self.language,
            notifications: &self.notifications,
            toasts: &self.toasts,
            navbar: &self.navbar,
            network: &self.network,
            connectivity: &self.connectivity,
            modal: &self.modal,
            dialog: &self.dialog,
            compact: self.compact,
        })
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.language.language()
    }

    #[must_use]
    pub fn path(&self) -> String {
        self.language.path()
    }
}

/// Persists a CLI-provided language before the context resolves, so it
/// takes the storage slot in the resolution order.
fn seed_language(storage: &mut dyn KeyValueStore, lang: Option<&str>) {
    let Some(code) = lang else {
        return;
    };
    match code.parse::<Language>() {
        Ok(language) => {
            if let Err(error) = storage.set(language::STORAGE_KEY, language.code()) {
                tracing::warn!(%error, "failed to seed language");
            }
        }
        Err(error) => tracing::warn!(%error, "ignoring --lang"),
    }
}
