//! Browser Glue
//!
//! Thin wrappers over the handful of window APIs the pages share.

/// Fade-out duration for removed item rows; must match the stylesheet
/// transition.
pub const FADE_MS: u32 = 300;

/// Blocking alert for precondition and request failures.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Full page reload, used as a correctness fallback (e.g. the last item of a
/// list was removed). Transient state is rebuilt from the fresh page.
pub fn reload() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().reload();
    }
}

pub fn pathname() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}
