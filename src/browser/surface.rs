//! `PageSurface` over the live DOM.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Window};

use crate::config::{HighlightGroup, NavConfig};
use crate::error::NavError;
use crate::nav::surface::{PageSurface, SectionStyle};
use crate::state::page::PageId;

pub struct WebSurface {
    window: Window,
    document: Document,
    section_class: String,
    active_class: String,
}

impl WebSurface {
    pub fn new(config: &NavConfig) -> Result<Self, NavError> {
        let window = web_sys::window().ok_or_else(|| NavError::Dom("no window".to_owned()))?;
        let document = window
            .document()
            .ok_or_else(|| NavError::Dom("no document".to_owned()))?;
        Ok(Self {
            window,
            document,
            section_class: config.section_class.clone(),
            active_class: config.active_class.clone(),
        })
    }

    fn section(&self, page: PageId) -> Option<HtmlElement> {
        let element = self.document.get_element_by_id(page.as_str())?;
        if !element.class_list().contains(&self.section_class) {
            return None;
        }
        let Ok(html) = element.dyn_into::<HtmlElement>() else {
            return None;
        };
        Some(html)
    }

    fn set_class(&self, element: &Element, on: bool) {
        let class_list = element.class_list();
        let result = if on {
            class_list.add_1(&self.active_class)
        } else {
            class_list.remove_1(&self.active_class)
        };
        report("classList", result);
    }
}

impl PageSurface for WebSurface {
    fn has_section(&self, page: PageId) -> bool {
        self.section(page).is_some()
    }

    fn style_section(&self, page: PageId, style: &SectionStyle) {
        let Some(section) = self.section(page) else {
            return;
        };
        let css = section.style();
        for (prop, value) in style.declarations() {
            if value.is_empty() {
                report("style.removeProperty", css.remove_property(prop.css_name()).map(drop));
            } else {
                report("style.setProperty", css.set_property(prop.css_name(), value));
            }
        }
    }

    fn set_section_active(&self, page: PageId, active: bool) {
        if let Some(section) = self.section(page) {
            self.set_class(&section, active);
        }
    }

    fn sync_highlights(&self, group: &HighlightGroup, page: PageId) {
        let nodes = match self.document.query_selector_all(&group.selector) {
            Ok(nodes) => nodes,
            Err(e) => {
                leptos::logging::warn!("highlight group {}: bad selector {}: {e:?}", group.name, group.selector);
                return;
            }
        };
        for i in 0..nodes.length() {
            let Some(node) = nodes.item(i) else {
                continue;
            };
            let Ok(element) = node.dyn_into::<Element>() else {
                continue;
            };
            let value = element.get_attribute(&group.attribute);
            self.set_class(&element, group.is_active_for(value.as_deref(), page));
        }
    }

    fn push_fragment(&self, page: PageId) {
        match self.window.history() {
            Ok(history) => {
                report(
                    "history.pushState",
                    history.push_state_with_url(&JsValue::NULL, "", Some(page.fragment().as_str())),
                );
            }
            Err(e) => leptos::logging::warn!("history unavailable: {e:?}"),
        }
    }

    fn current_fragment(&self) -> String {
        self.window.location().hash().unwrap_or_default()
    }

    fn scroll_to_top(&self) {
        self.window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Log a failed DOM call; the navigator carries on regardless.
fn report(what: &str, result: Result<(), JsValue>) {
    if let Err(e) = result {
        leptos::logging::warn!("{what} failed: {e:?}");
    }
}
