//! Navigator configuration parsed from inline JSON.
//!
//! The page ships an optional `<script id="nav-config" type="application/json">`
//! block. Every field has a default matching the stock markup, so an absent or
//! partial block is fine; only malformed JSON is an error.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::error::NavError;
use crate::state::page::PageId;

pub const DEFAULT_SITE_NAME: &str = "DS Venturists";
pub const DEFAULT_SECTION_CLASS: &str = "page-section";
pub const DEFAULT_ACTIVE_CLASS: &str = "active";
pub const DEFAULT_TRANSITION_MS: u32 = 500;
pub const DEFAULT_EASING: &str = "cubic-bezier(0.4, 0, 0.2, 1)";
pub const CONFIG_ELEMENT_ID: &str = "nav-config";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionConfig {
    pub duration_ms: u32,
    pub easing: String,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self { duration_ms: DEFAULT_TRANSITION_MS, easing: DEFAULT_EASING.to_owned() }
    }
}

/// A set of navigation elements highlighted together.
///
/// An element matching `selector` is active when its `attribute` equals the
/// current page id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightGroup {
    pub name: String,
    pub selector: String,
    pub attribute: String,
}

impl HighlightGroup {
    pub fn new(name: &str, selector: &str, attribute: &str) -> Self {
        Self { name: name.to_owned(), selector: selector.to_owned(), attribute: attribute.to_owned() }
    }

    /// Whether an element whose `attribute` holds `value` is active on `page`.
    #[must_use]
    pub fn is_active_for(&self, value: Option<&str>, page: PageId) -> bool {
        value == Some(page.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub site_name: String,
    pub section_class: String,
    pub active_class: String,
    pub transition: TransitionConfig,
    pub highlight_groups: Vec<HighlightGroup>,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            site_name: DEFAULT_SITE_NAME.to_owned(),
            section_class: DEFAULT_SECTION_CLASS.to_owned(),
            active_class: DEFAULT_ACTIVE_CLASS.to_owned(),
            transition: TransitionConfig::default(),
            highlight_groups: default_highlight_groups(),
        }
    }
}

impl NavConfig {
    /// Parse config JSON; missing fields fall back to defaults.
    pub fn from_json(raw: &str) -> Result<Self, NavError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }

    /// Distinct attributes that carry a page id across all groups.
    ///
    /// Click delegation looks for the closest ancestor with any of these.
    #[must_use]
    pub fn nav_attributes(&self) -> Vec<&str> {
        let mut attrs: Vec<&str> = Vec::new();
        for group in &self.highlight_groups {
            if !attrs.contains(&group.attribute.as_str()) {
                attrs.push(group.attribute.as_str());
            }
        }
        attrs
    }

    /// CSS selector matching any element that carries one of
    /// [`nav_attributes`](Self::nav_attributes). Empty when there are none.
    #[must_use]
    pub fn nav_selector(&self) -> String {
        self.nav_attributes()
            .iter()
            .map(|attr| format!("[{attr}]"))
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Page named by a clicked navigation element.
    ///
    /// `attribute` looks up an attribute on the element. The first nav
    /// attribute present wins; `Ok(None)` when the element carries none.
    pub fn resolve_nav_target(
        &self,
        attribute: impl Fn(&str) -> Option<String>,
    ) -> Result<Option<PageId>, NavError> {
        let Some(value) = self.nav_attributes().into_iter().find_map(attribute) else {
            return Ok(None);
        };
        value.parse().map(Some)
    }
}

/// Dock, mobile top nav, and free-standing `data-nav-target` links.
#[must_use]
pub fn default_highlight_groups() -> Vec<HighlightGroup> {
    vec![
        HighlightGroup::new("dock", ".dock-item", "data-page"),
        HighlightGroup::new("mobile-nav", ".mobile-nav-item", "data-page"),
        HighlightGroup::new("nav-target", "[data-nav-target]", "data-nav-target"),
    ]
}
