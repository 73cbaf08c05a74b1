//! Wire a `PageNavigator` to the live document.
//!
//! SYSTEM CONTEXT
//! ==============
//! `mount` builds the web surface and scheduler, registers the window
//! `hashchange`/`popstate` listeners and one delegated document `click`
//! listener, then runs the startup reset. The returned `MountedNavigator`
//! owns every registration; `teardown` (or drop) cancels pending transition
//! steps and removes the listeners.

use wasm_bindgen::JsCast;
use web_sys::{Element, Event};

use super::listeners::{EventSubscription, Subscriptions};
use super::scheduler::WebScheduler;
use super::surface::WebSurface;
use crate::config::{CONFIG_ELEMENT_ID, NavConfig};
use crate::error::NavError;
use crate::nav::PageNavigator;
use crate::nav::surface::PageSurface;
use crate::state::navigation::{HistoryMode, PageActivation};
use crate::state::page::PageId;

pub type WebNavigator = PageNavigator<WebSurface, WebScheduler>;

/// A navigator attached to the document together with its listeners.
pub struct MountedNavigator {
    navigator: WebNavigator,
    subscriptions: Subscriptions,
}

impl MountedNavigator {
    #[must_use]
    pub fn navigator(&self) -> &WebNavigator {
        &self.navigator
    }

    pub fn on_page_activated(&self, listener: impl Fn(&PageActivation) + 'static) {
        self.navigator.on_page_activated(listener);
    }

    /// Cancel any running transition and detach all listeners.
    pub fn teardown(self) {
        drop(self);
    }
}

impl Drop for MountedNavigator {
    fn drop(&mut self) {
        self.navigator.shutdown();
        self.subscriptions.clear();
    }
}

/// Attach a navigator to the current document and show the page named by
/// the URL fragment.
pub fn mount(config: NavConfig) -> Result<MountedNavigator, NavError> {
    let surface = WebSurface::new(&config)?;
    let navigator = PageNavigator::new(surface, WebScheduler::new(), config);

    let window = web_sys::window().ok_or_else(|| NavError::Dom("no window".to_owned()))?;
    let document = window
        .document()
        .ok_or_else(|| NavError::Dom("no document".to_owned()))?;

    let mut subscriptions = Subscriptions::default();
    for event in ["hashchange", "popstate"] {
        let nav = navigator.clone();
        subscriptions.add(EventSubscription::listen(&window, event, move |_ev: Event| {
            let fragment = nav.surface().current_fragment();
            if let Err(e) = nav.sync_from_fragment(&fragment) {
                leptos::logging::warn!("{event}: {e}");
            }
        })?);
    }

    let selector = navigator.config().nav_selector();
    let nav = navigator.clone();
    subscriptions.add(EventSubscription::listen(&document, "click", move |ev: Event| {
        let Some(page) = clicked_page(&ev, &selector, &nav) else {
            return;
        };
        ev.prevent_default();
        if let Err(e) = nav.navigate_to(page, HistoryMode::Push) {
            leptos::logging::warn!("click: {e}");
        }
    })?);

    if let Err(e) = navigator.start() {
        leptos::logging::warn!("startup: {e}");
    }
    leptos::logging::log!("navigator mounted on {} ({} listeners)", navigator.current_page(), subscriptions.len());

    Ok(MountedNavigator { navigator, subscriptions })
}

/// Read `NavConfig` from the inline `<script id="nav-config">` block.
///
/// Falls back to defaults when the block is absent or malformed.
#[must_use]
pub fn read_config() -> NavConfig {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content())
        .unwrap_or_default();
    match NavConfig::from_json(&raw) {
        Ok(config) => config,
        Err(e) => {
            leptos::logging::warn!("{e}; using defaults");
            NavConfig::default()
        }
    }
}

fn clicked_page(ev: &Event, selector: &str, nav: &WebNavigator) -> Option<PageId> {
    if selector.is_empty() {
        return None;
    }
    let Ok(target) = ev.target()?.dyn_into::<Element>() else {
        return None;
    };
    let link = match target.closest(selector) {
        Ok(link) => link?,
        Err(e) => {
            leptos::logging::warn!("bad nav selector {selector}: {e:?}");
            return None;
        }
    };
    match nav.config().resolve_nav_target(|attr| link.get_attribute(attr)) {
        Ok(page) => page,
        Err(e) => {
            leptos::logging::warn!("click: {e}");
            None
        }
    }
}
