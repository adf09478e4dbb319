//! Theme controller.
//!
//! Owns the current [`Theme`] and the environment it is applied to. After
//! `initialize()` or `handle_toggle_click()` returns, the stored preference,
//! the root theme attribute, the body marker class and the icon glyph all
//! describe the same theme (except for a storage write the browser refused).

use crate::config::ThemeConfig;
use crate::env::ThemeEnvironment;
use crate::theme::Theme;

pub struct ThemeController<E> {
    env: E,
    config: ThemeConfig,
    theme: Theme,
}

impl<E: ThemeEnvironment> ThemeController<E> {
    pub fn new(env: E, config: ThemeConfig) -> Self {
        Self {
            env,
            config,
            theme: Theme::default(),
        }
    }

    /// Current theme as last applied
    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    pub fn env(&self) -> &E {
        &self.env
    }

    pub fn into_env(self) -> E {
        self.env
    }

    /// Read the persisted preference and apply it to the page.
    pub fn initialize(&mut self) -> Theme {
        let theme = self.load_preference();
        self.set_root_attribute(theme);
        if let Err(e) = self
            .env
            .set_body_class(&self.config.dark_class, theme.is_dark())
        {
            tracing::warn!("Failed to apply body class: {}", e);
        }
        self.swap_icon(theme);
        self.theme = theme;
        tracing::debug!("Theme initialized: {}", theme);
        theme
    }

    /// Flip the theme in response to a click on the toggle control.
    ///
    /// The new theme is derived from the body marker class after the flip,
    /// then mirrored to the icon, storage and root attribute.
    pub fn handle_toggle_click(&mut self) -> Theme {
        let dark = match self.env.toggle_body_class(&self.config.dark_class) {
            Ok(present) => present,
            Err(e) => {
                tracing::warn!("Failed to toggle body class: {}", e);
                self.env.body_has_class(&self.config.dark_class)
            }
        };
        let theme = Theme::from_dark_marker(dark);

        self.swap_icon(theme);
        self.save_preference(theme);
        self.set_root_attribute(theme);
        self.theme = theme;
        tracing::info!("Theme toggled to {}", theme);
        theme
    }

    fn load_preference(&self) -> Theme {
        match self.env.get_preference(&self.config.storage_key) {
            Ok(value) => Theme::from_stored(value.as_deref()),
            Err(e) => {
                tracing::warn!("Failed to read theme preference, using light: {}", e);
                Theme::Light
            }
        }
    }

    fn save_preference(&mut self, theme: Theme) {
        if let Err(e) = self
            .env
            .set_preference(&self.config.storage_key, theme.as_str())
        {
            tracing::warn!("Failed to persist theme preference: {}", e);
        }
    }

    fn set_root_attribute(&mut self, theme: Theme) {
        if let Err(e) = self
            .env
            .set_root_attribute(&self.config.theme_attribute, theme.as_str())
        {
            tracing::warn!("Failed to set {}: {}", self.config.theme_attribute, e);
        }
    }

    fn swap_icon(&mut self, theme: Theme) {
        let (from, to) = self.config.icon_swap(theme.is_dark());
        match self.env.replace_element_class(&self.config.icon_id, from, to) {
            Ok(true) => {}
            Ok(false) => tracing::debug!("No #{} element, skipping icon", self.config.icon_id),
            Err(e) => tracing::warn!("Failed to swap theme icon: {}", e),
        }
    }
}
