//! One-shot start guard.
//!
//! `start()` attaches a click listener; a second call would attach another
//! and every click would then flip the theme twice.

use std::cell::Cell;

thread_local! {
    static STARTED: Cell<bool> = const { Cell::new(false) };
}

/// Returns `true` on the first call on this thread, `false` afterwards.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub(crate) fn claim_start() -> bool {
    STARTED.with(|started| !started.replace(true))
}
