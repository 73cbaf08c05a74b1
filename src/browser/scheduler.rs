//! `Scheduler` backed by `requestAnimationFrame` and `gloo-timers`.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

use crate::nav::schedule::Scheduler;

pub struct WebScheduler {
    window: Option<Window>,
}

impl WebScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self { window: web_sys::window() }
    }
}

impl Default for WebScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for WebScheduler {
    fn on_next_frame(&self, task: Box<dyn FnOnce()>) {
        let Some(window) = self.window.as_ref() else {
            task();
            return;
        };
        // The JS side owns the callback once registered; it is freed after the
        // single invocation.
        let callback = Closure::once_into_js(move |_ts: f64| task());
        if let Err(e) = window.request_animation_frame(callback.unchecked_ref::<js_sys::Function>()) {
            leptos::logging::warn!("requestAnimationFrame failed: {e:?}");
        }
    }

    fn after_ms(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        // Cancellation is handled by `ScheduledTask`, so the timer is left to fire.
        Timeout::new(delay_ms, task).forget();
    }
}
