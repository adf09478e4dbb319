//! Browser environment backed by `web-sys`.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element, HtmlElement, Storage};

use super::{EnvError, ThemeEnvironment};

pub struct BrowserEnvironment {
    document: Document,
    body: HtmlElement,
    root: Element,
    /// `None` when the browser refuses access to `localStorage`
    storage: Option<Storage>,
}

fn dom_err(e: JsValue) -> EnvError {
    EnvError::Dom(format!("{e:?}"))
}

fn storage_err(e: JsValue) -> EnvError {
    EnvError::Storage(format!("{e:?}"))
}

impl BrowserEnvironment {
    /// Bind to the current window. Fails only without a document, body or root.
    pub fn from_window() -> Result<Self, EnvError> {
        let window = web_sys::window().ok_or_else(|| EnvError::Dom("no window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| EnvError::Dom("no document".into()))?;
        let body = document
            .body()
            .ok_or_else(|| EnvError::Dom("no body".into()))?;
        let root = document
            .document_element()
            .ok_or_else(|| EnvError::Dom("no document element".into()))?;

        let storage = match window.local_storage() {
            Ok(Some(storage)) => Some(storage),
            Ok(None) => {
                tracing::warn!("localStorage not available, theme will not persist");
                None
            }
            Err(e) => {
                tracing::warn!("localStorage access denied: {:?}", e);
                None
            }
        };

        Ok(Self {
            document,
            body,
            root,
            storage,
        })
    }

    pub fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn storage(&self) -> Result<&Storage, EnvError> {
        self.storage.as_ref().ok_or(EnvError::StorageUnavailable)
    }
}

impl ThemeEnvironment for BrowserEnvironment {
    fn get_preference(&self, key: &str) -> Result<Option<String>, EnvError> {
        self.storage()?.get_item(key).map_err(storage_err)
    }

    fn set_preference(&mut self, key: &str, value: &str) -> Result<(), EnvError> {
        self.storage()?.set_item(key, value).map_err(storage_err)
    }

    fn has_element(&self, id: &str) -> bool {
        self.element_by_id(id).is_some()
    }

    fn body_has_class(&self, class: &str) -> bool {
        self.body.class_list().contains(class)
    }

    fn set_body_class(&mut self, class: &str, present: bool) -> Result<(), EnvError> {
        let list = self.body.class_list();
        if present {
            list.add_1(class).map_err(dom_err)
        } else {
            list.remove_1(class).map_err(dom_err)
        }
    }

    fn toggle_body_class(&mut self, class: &str) -> Result<bool, EnvError> {
        self.body.class_list().toggle(class).map_err(dom_err)
    }

    fn replace_element_class(
        &mut self,
        id: &str,
        from: &str,
        to: &str,
    ) -> Result<bool, EnvError> {
        let Some(element) = self.element_by_id(id) else {
            return Ok(false);
        };
        element
            .class_list()
            .replace(from, to)
            .map_err(dom_err)?;
        Ok(true)
    }

    fn set_root_attribute(&mut self, name: &str, value: &str) -> Result<(), EnvError> {
        self.root.set_attribute(name, value).map_err(dom_err)
    }
}
