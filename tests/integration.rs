// SPDX-License-Identifier: MPL-2.0
use nuvo_ui::application::port::{KeyValueStore, Location};
use nuvo_ui::config::{self, Config};
use nuvo_ui::error::Error;
use nuvo_ui::i18n::fluent::I18n;
use nuvo_ui::i18n::Language;
use nuvo_ui::infrastructure::{FileStore, FixedLocale, RouteLocation};
use nuvo_ui::language::{self, LanguageContext, STORAGE_KEY};
use nuvo_ui::ui::notifications::{Manager, Notification, Position, ToastContainer, EXIT_GRACE};
use std::time::{Duration, Instant};
use tempfile::tempdir;

#[test]
fn language_choice_survives_restart() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let storage_path = dir.path().join("storage.toml");

    // First session: browser prefers Estonian, user switches to Turkish
    let mut ctx = LanguageContext::new(
        Box::new(FileStore::open(&storage_path)),
        Box::new(RouteLocation::new("/")),
        &FixedLocale::new("et-EE"),
        Language::En,
    );
    assert_eq!(ctx.language(), Language::Et);
    ctx.change_language(Language::Tr);
    drop(ctx);

    let reopened = FileStore::open(&storage_path);
    assert_eq!(reopened.get(STORAGE_KEY).as_deref(), Some("tr"));

    // Second session: storage wins over path and locale
    let ctx = LanguageContext::new(
        Box::new(reopened),
        Box::new(RouteLocation::new("/et/blog")),
        &FixedLocale::new("et-EE"),
        Language::En,
    );
    assert_eq!(ctx.language(), Language::Tr);
}

#[test]
fn unsupported_code_leaves_storage_untouched() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let storage_path = dir.path().join("storage.toml");

    let mut ctx = LanguageContext::new(
        Box::new(FileStore::open(&storage_path)),
        Box::new(RouteLocation::new("/en/blog")),
        &FixedLocale(None),
        Language::En,
    );
    assert_eq!(
        ctx.change_language_code("de"),
        Err(Error::UnsupportedLanguage("de".to_string()))
    );
    assert_eq!(ctx.path(), "/en/blog");
    assert_eq!(
        FileStore::open(&storage_path).get(STORAGE_KEY).as_deref(),
        Some("en")
    );

    assert_eq!(ctx.change_language_code("et"), Ok(Language::Et));
    assert_eq!(ctx.path(), "/et/blog");
}

#[test]
fn reading_context_without_provider_fails() {
    let error = language::require(None).expect_err("no provider");
    assert_eq!(error, Error::MissingLanguageProvider);
    assert!(error.to_string().contains("provider"));
}

#[test]
fn route_location_rewrite_keeps_tail() {
    let mut location = RouteLocation::new("/tr/blog/post-1");
    location.replace_path("/et/blog/post-1");
    assert_eq!(location.path(), "/et/blog/post-1");
}

#[test]
fn config_round_trip_drives_container() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.general.default_language = Language::Et;
    config.notifications.max_visible = 2;
    config.notifications.position = Position::BottomCenter;
    config::save_to_path(&config, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config file");
    assert_eq!(loaded, config);

    let container = ToastContainer::from_config(&loaded.notifications);
    let mut manager = Manager::new();
    for i in 0..4 {
        manager.push(Notification::info(format!("n{i}")));
    }
    assert_eq!(container.visible(&manager).count(), 2);

    let i18n = I18n::new(loaded.general.default_language);
    assert_eq!(i18n.tr("nav-home"), "Avaleht");
}

#[test]
fn toasts_expire_in_order_with_grace_period() {
    let t0 = Instant::now();
    let mut manager = Manager::new();
    let short = manager.push_at(
        Notification::success("short").with_duration(Duration::from_millis(1000)),
        t0,
    );
    let long = manager.push_at(
        Notification::warning("long").with_duration(Duration::from_millis(2000)),
        t0,
    );
    let sticky = manager.push_at(Notification::error("sticky").with_duration(Duration::ZERO), t0);

    assert_eq!(manager.tick(t0 + Duration::from_millis(1000) + EXIT_GRACE), vec![short]);
    // A late tick still removes the second toast
    assert_eq!(manager.tick(t0 + Duration::from_secs(10)), vec![long]);
    assert_eq!(manager.len(), 1);
    assert!(manager.get(&sticky).is_some());
}
