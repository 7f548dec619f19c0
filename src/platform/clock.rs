//! Creation timestamps
//!
//! Notes carry a human-readable string rather than an instant, so the clock
//! hands out already-formatted text.

pub trait Clock {
    /// Current local time, formatted for display
    fn now_string(&self) -> String;
}

/// Wall clock of the host platform
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

#[cfg(target_arch = "wasm32")]
impl Clock for SystemClock {
    fn now_string(&self) -> String {
        let locale = web_sys::window()
            .and_then(|w| w.navigator().language())
            .unwrap_or_else(|| "en-US".to_string());
        let date = js_sys::Date::new_0();
        date.to_locale_string(&locale, &wasm_bindgen::JsValue::UNDEFINED)
            .into()
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Clock for SystemClock {
    fn now_string(&self) -> String {
        // Same shape as en-US Date.toLocaleString()
        chrono::Local::now()
            .format("%-m/%-d/%Y, %-I:%M:%S %p")
            .to_string()
    }
}

/// Clock that always reports the same string
#[derive(Debug, Clone)]
pub struct FixedClock(pub String);

impl Clock for FixedClock {
    fn now_string(&self) -> String {
        self.0.clone()
    }
}
