//! Configuration management
//!
//! Names the storage key and the DOM contract the controller drives. Every
//! field has a default, so an empty object (or no config at all) gives the
//! stock `theme` / `#theme-toggle` / `#theme-icon` / `dark-theme` setup.

use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Invalid(#[from] serde_json::Error),
    #[error("config field `{0}` must not be empty")]
    EmptyField(&'static str),
    #[error("light and dark icon classes must differ (both `{0}`)")]
    IconConflict(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeConfig {
    /// Persistent storage key holding "light" or "dark"
    pub storage_key: String,
    /// Id of the click target
    pub toggle_id: String,
    /// Id of the optional icon element
    pub icon_id: String,
    /// Marker class toggled on `<body>`
    pub dark_class: String,
    /// Attribute set on the document root
    pub theme_attribute: String,
    /// Icon class shown in light mode
    pub light_icon: String,
    /// Icon class shown in dark mode
    pub dark_icon: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme".into(),
            toggle_id: "theme-toggle".into(),
            icon_id: "theme-icon".into(),
            dark_class: "dark-theme".into(),
            theme_attribute: "data-theme".into(),
            light_icon: "bx-moon".into(),
            dark_icon: "bx-sun".into(),
        }
    }
}

impl ThemeConfig {
    /// Parse and validate a JSON config. Omitted fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: ThemeConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("storageKey", &self.storage_key),
            ("toggleId", &self.toggle_id),
            ("iconId", &self.icon_id),
            ("darkClass", &self.dark_class),
            ("themeAttribute", &self.theme_attribute),
            ("lightIcon", &self.light_icon),
            ("darkIcon", &self.dark_icon),
        ];
        if let Some((name, _)) = fields
            .into_iter()
            .find(|(_, value)| value.trim().is_empty())
        {
            return Err(ConfigError::EmptyField(name));
        }
        if self.light_icon == self.dark_icon {
            return Err(ConfigError::IconConflict(self.light_icon.clone()));
        }
        Ok(())
    }

    /// Icon classes as (current, replacement) when moving to `dark`.
    pub fn icon_swap(&self, dark: bool) -> (&str, &str) {
        if dark {
            (&self.light_icon, &self.dark_icon)
        } else {
            (&self.dark_icon, &self.light_icon)
        }
    }
}
