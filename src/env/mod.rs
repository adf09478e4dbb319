//! Environment abstraction for storage and DOM access.
//!
//! The controller never touches `window`, `document` or `localStorage`
//! directly. It drives a [`ThemeEnvironment`], which is backed by the real
//! browser on wasm32 ([`BrowserEnvironment`]) and by [`MemoryEnvironment`]
//! everywhere else.

#[cfg(target_arch = "wasm32")]
mod browser;
mod memory;

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserEnvironment;
pub use memory::MemoryEnvironment;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnvError {
    #[error("persistent storage is unavailable")]
    StorageUnavailable,
    #[error("storage error: {0}")]
    Storage(String),
    #[error("dom error: {0}")]
    Dom(String),
}

/// Storage and DOM operations needed to apply and persist a theme.
///
/// Element lookups by id are optional: a missing element is reported as
/// `Ok(false)`, never as an error.
pub trait ThemeEnvironment {
    /// Read a persisted preference. `Ok(None)` when the key is unset.
    fn get_preference(&self, key: &str) -> Result<Option<String>, EnvError>;

    fn set_preference(&mut self, key: &str, value: &str) -> Result<(), EnvError>;

    fn has_element(&self, id: &str) -> bool;

    fn body_has_class(&self, class: &str) -> bool;

    /// Add or remove a class on `<body>`.
    fn set_body_class(&mut self, class: &str, present: bool) -> Result<(), EnvError>;

    /// Flip a class on `<body>` and return whether it is now present.
    fn toggle_body_class(&mut self, class: &str) -> Result<bool, EnvError>;

    /// Replace `from` with `to` in the class list of element `id`.
    /// Returns `Ok(false)` when the element does not exist.
    fn replace_element_class(&mut self, id: &str, from: &str, to: &str)
        -> Result<bool, EnvError>;

    fn set_root_attribute(&mut self, name: &str, value: &str) -> Result<(), EnvError>;
}
