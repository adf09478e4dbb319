//! Theme Toggle - persisted light/dark theme switching for web pages
//!
//! Reads the saved preference from `localStorage`, applies it to the page on
//! load and flips it when the toggle control is clicked.
//!
//! This library provides:
//! - `Theme`, the two-valued preference and its stored form
//! - `ThemeConfig`, the storage key and DOM names the controller uses
//! - `ThemeController`, which applies and persists the theme
//! - `ThemeEnvironment`, the storage/DOM seam, with in-memory and browser backends
//! - `start()` / `startWithConfig()` exports for the browser (wasm32 only)

pub mod config;
pub mod controller;
pub mod env;
mod lifecycle;
pub mod theme;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::{ConfigError, ThemeConfig};
pub use controller::ThemeController;
pub use env::{EnvError, MemoryEnvironment, ThemeEnvironment};
pub use theme::Theme;
