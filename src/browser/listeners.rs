//! DOM event subscriptions that detach themselves when dropped.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, EventTarget};

use crate::error::NavError;

/// One `addEventListener` registration. Dropping it removes the listener and
/// frees the closure.
pub struct EventSubscription {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl EventSubscription {
    pub fn listen(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, NavError> {
        let closure = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        Ok(Self { target: target.clone(), event, closure })
    }

    #[must_use]
    pub fn event(&self) -> &'static str {
        self.event
    }
}

impl Drop for EventSubscription {
    fn drop(&mut self) {
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref())
        {
            leptos::logging::warn!("removing {} listener failed: {e:?}", self.event);
        }
    }
}

/// Registrations owned by a mounted navigator.
#[derive(Default)]
pub struct Subscriptions {
    items: Vec<EventSubscription>,
}

impl Subscriptions {
    pub fn add(&mut self, subscription: EventSubscription) {
        self.items.push(subscription);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Detach every listener now.
    pub fn clear(&mut self) {
        for subscription in self.items.drain(..) {
            leptos::logging::log!("detaching {} listener", subscription.event());
        }
    }
}
