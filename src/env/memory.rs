//! In-memory environment.
//!
//! Models a page with a `<body>` class list, root attributes, elements keyed
//! by id and an origin-scoped key-value store. Storage can be switched off or
//! made read-only to exercise the degraded paths.

use std::collections::{BTreeSet, HashMap};

use super::{EnvError, ThemeEnvironment};

#[derive(Debug, Clone, Default)]
enum StorageMode {
    #[default]
    Available,
    ReadOnly,
    Unavailable,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryEnvironment {
    storage: HashMap<String, String>,
    storage_mode: StorageMode,
    body_classes: BTreeSet<String>,
    root_attributes: HashMap<String, String>,
    /// Element id -> class tokens, in order
    elements: HashMap<String, Vec<String>>,
    storage_writes: usize,
}

impl MemoryEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock page: a toggle button and a moon icon.
    pub fn with_default_page() -> Self {
        Self::new()
            .with_element("theme-toggle", &[])
            .with_element("theme-icon", &["bx", "bx-moon"])
    }

    pub fn with_element(mut self, id: &str, classes: &[&str]) -> Self {
        self.elements.insert(
            id.to_string(),
            classes.iter().map(|c| c.to_string()).collect(),
        );
        self
    }

    pub fn with_stored(mut self, key: &str, value: &str) -> Self {
        self.storage.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_body_class(mut self, class: &str) -> Self {
        self.body_classes.insert(class.to_string());
        self
    }

    /// Reads and writes both fail, as with storage disabled by the browser.
    pub fn without_storage(mut self) -> Self {
        self.storage_mode = StorageMode::Unavailable;
        self
    }

    /// Reads succeed, writes fail (quota exceeded).
    pub fn with_read_only_storage(mut self) -> Self {
        self.storage_mode = StorageMode::ReadOnly;
        self
    }

    pub fn stored(&self, key: &str) -> Option<&str> {
        self.storage.get(key).map(String::as_str)
    }

    pub fn root_attribute(&self, name: &str) -> Option<&str> {
        self.root_attributes.get(name).map(String::as_str)
    }

    pub fn element_classes(&self, id: &str) -> Option<&[String]> {
        self.elements.get(id).map(Vec::as_slice)
    }

    pub fn element_has_class(&self, id: &str, class: &str) -> bool {
        self.elements
            .get(id)
            .map_or(false, |classes| classes.iter().any(|c| c == class))
    }

    /// Number of successful storage writes so far.
    pub fn storage_writes(&self) -> usize {
        self.storage_writes
    }
}

impl ThemeEnvironment for MemoryEnvironment {
    fn get_preference(&self, key: &str) -> Result<Option<String>, EnvError> {
        match self.storage_mode {
            StorageMode::Unavailable => Err(EnvError::StorageUnavailable),
            _ => Ok(self.storage.get(key).cloned()),
        }
    }

    fn set_preference(&mut self, key: &str, value: &str) -> Result<(), EnvError> {
        match self.storage_mode {
            StorageMode::Unavailable => Err(EnvError::StorageUnavailable),
            StorageMode::ReadOnly => Err(EnvError::Storage("quota exceeded".into())),
            StorageMode::Available => {
                self.storage.insert(key.to_string(), value.to_string());
                self.storage_writes += 1;
                Ok(())
            }
        }
    }

    fn has_element(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    fn body_has_class(&self, class: &str) -> bool {
        self.body_classes.contains(class)
    }

    fn set_body_class(&mut self, class: &str, present: bool) -> Result<(), EnvError> {
        if present {
            self.body_classes.insert(class.to_string());
        } else {
            self.body_classes.remove(class);
        }
        Ok(())
    }

    fn toggle_body_class(&mut self, class: &str) -> Result<bool, EnvError> {
        if self.body_classes.remove(class) {
            Ok(false)
        } else {
            self.body_classes.insert(class.to_string());
            Ok(true)
        }
    }

    fn replace_element_class(
        &mut self,
        id: &str,
        from: &str,
        to: &str,
    ) -> Result<bool, EnvError> {
        let Some(classes) = self.elements.get_mut(id) else {
            return Ok(false);
        };
        // DOMTokenList.replace: no-op unless `from` is present
        if let Some(pos) = classes.iter().position(|c| c == from) {
            if classes.iter().any(|c| c == to) {
                classes.remove(pos);
            } else {
                classes[pos] = to.to_string();
            }
        }
        Ok(true)
    }

    fn set_root_attribute(&mut self, name: &str, value: &str) -> Result<(), EnvError> {
        self.root_attributes
            .insert(name.to_string(), value.to_string());
        Ok(())
    }
}
