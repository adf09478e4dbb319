//! WebAssembly entry points.
//!
//! Call `start()` (or `startWithConfig({...})`) once the body has been
//! parsed. Only the first call on a page takes effect. The persisted theme is applied immediately and a click listener
//! is attached to the toggle control if the page has one.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::ThemeConfig;
use crate::controller::ThemeController;
use crate::env::BrowserEnvironment;
use crate::lifecycle;

/// Start with the stock page contract.
#[wasm_bindgen]
pub fn start() -> Result<(), JsValue> {
    start_with(ThemeConfig::default())
}

/// Start with a JS config object; omitted fields keep their defaults.
#[wasm_bindgen(js_name = startWithConfig)]
pub fn start_with_config(config: JsValue) -> Result<(), JsValue> {
    let config: ThemeConfig = if config.is_undefined() || config.is_null() {
        ThemeConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)?
    };
    config
        .validate()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    start_with(config)
}

fn start_with(config: ThemeConfig) -> Result<(), JsValue> {
    init_logging();
    if !lifecycle::claim_start() {
        tracing::warn!("theme-toggle already started, ignoring repeated start");
        return Ok(());
    }
    tracing::info!("theme-toggle v{}", env!("CARGO_PKG_VERSION"));

    let env = BrowserEnvironment::from_window().map_err(|e| JsValue::from_str(&e.to_string()))?;
    let mut controller = ThemeController::new(env, config);
    controller.initialize();

    let Some(toggle) = controller.env().element_by_id(&controller.config().toggle_id) else {
        tracing::debug!(
            "No #{} element, click handler not attached",
            controller.config().toggle_id
        );
        return Ok(());
    };

    let controller = Rc::new(RefCell::new(controller));
    let handler = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
        controller.borrow_mut().handle_toggle_click();
    });
    toggle.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
    // Listener lives as long as the page
    handler.forget();
    Ok(())
}

fn init_logging() {
    console_error_panic_hook::set_once();
    // Already initialized on a second start()
    let _ = console_log::init_with_level(log::Level::Debug);
}
