#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//! Page-level behavior of the theme controller against an in-memory page.
//!
//! Each test simulates a page load (new controller + `initialize()`) and then
//! user clicks, checking the stored preference, root attribute, body class and
//! icon glyph after every step.

use theme_toggle::{MemoryEnvironment, Theme, ThemeConfig, ThemeController, ThemeEnvironment};

type PageState = (Option<String>, Option<String>, bool, Option<Vec<String>>);

/// Stored preference, root attribute, body marker and icon classes.
fn snapshot(env: &MemoryEnvironment) -> PageState {
    (
        env.stored("theme").map(str::to_string),
        env.root_attribute("data-theme").map(str::to_string),
        env.body_has_class("dark-theme"),
        env.element_classes("theme-icon").map(<[String]>::to_vec),
    )
}

fn load(env: MemoryEnvironment) -> ThemeController<MemoryEnvironment> {
    let mut controller = ThemeController::new(env, ThemeConfig::default());
    controller.initialize();
    controller
}

#[test]
fn root_attribute_is_dark_only_for_exact_dark() {
    for (stored, dark) in [
        (None, false),
        (Some("light"), false),
        (Some("dark"), true),
        (Some("DARK"), false),
        (Some(""), false),
    ] {
        let mut env = MemoryEnvironment::with_default_page();
        if let Some(value) = stored {
            env = env.with_stored("theme", value);
        }
        let controller = load(env);
        let expected = if dark { "dark" } else { "light" };
        assert_eq!(
            controller.env().root_attribute("data-theme"),
            Some(expected),
            "stored value {:?}",
            stored
        );
    }
}

#[test]
fn two_clicks_restore_original_page() {
    let mut controller = load(MemoryEnvironment::with_default_page());
    let before = snapshot(controller.env());

    controller.handle_toggle_click();
    let env = controller.env();
    assert_eq!(env.stored("theme"), Some("dark"));
    assert_eq!(env.root_attribute("data-theme"), Some("dark"));
    assert!(env.body_has_class("dark-theme"));
    assert!(env.element_has_class("theme-icon", "bx-sun"));

    controller.handle_toggle_click();
    let (stored, root, body_dark, icon) = snapshot(controller.env());
    assert_eq!(stored.as_deref(), Some("light"));
    assert_eq!((root, body_dark, icon), (before.1, before.2, before.3));
}

#[test]
fn preference_survives_reload() {
    let mut controller = load(MemoryEnvironment::with_default_page());
    controller.handle_toggle_click();

    // Reload: storage persists, the DOM starts fresh
    let stored = controller.env().stored("theme").unwrap().to_string();
    let reloaded = load(MemoryEnvironment::with_default_page().with_stored("theme", &stored));
    assert_eq!(reloaded.theme(), Theme::Dark);
    assert!(reloaded.env().body_has_class("dark-theme"));
    assert!(reloaded.env().element_has_class("theme-icon", "bx-sun"));
}

#[test]
fn reinitialize_matches_single_initialize() {
    let once = load(MemoryEnvironment::with_default_page().with_stored("theme", "dark"));
    let mut twice = load(MemoryEnvironment::with_default_page().with_stored("theme", "dark"));
    twice.initialize();
    assert_eq!(snapshot(once.env()), snapshot(twice.env()));
}

#[test]
fn page_without_icon_or_toggle() {
    let mut controller = load(MemoryEnvironment::new().with_stored("theme", "dark"));
    assert!(!controller.env().has_element("theme-toggle"));
    assert_eq!(controller.env().root_attribute("data-theme"), Some("dark"));
    assert!(controller.env().body_has_class("dark-theme"));

    assert_eq!(controller.handle_toggle_click(), Theme::Light);
    assert_eq!(controller.env().stored("theme"), Some("light"));
    assert!(!controller.env().body_has_class("dark-theme"));
}

#[test]
fn disabled_storage_behaves_as_light() {
    let mut controller = load(MemoryEnvironment::with_default_page().without_storage());
    assert_eq!(controller.theme(), Theme::Light);
    assert_eq!(controller.handle_toggle_click(), Theme::Dark);
    let env = controller.into_env();
    assert_eq!(env.root_attribute("data-theme"), Some("dark"));
    assert_eq!(env.storage_writes(), 0);
}
