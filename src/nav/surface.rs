//! DOM seam for the navigator.
//!
//! SYSTEM CONTEXT
//! ==============
//! The navigator never touches `web-sys` directly. It describes inline style
//! changes as [`SectionStyle`] values and hands them to a [`PageSurface`];
//! `browser::surface` applies them to real elements and the in-memory
//! surface in tests records them.

use crate::config::HighlightGroup;
use crate::state::page::PageId;

/// Inline style properties the navigator is allowed to touch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleProp {
    Display,
    Visibility,
    Transform,
    Opacity,
    Transition,
    Position,
    Left,
}

impl StyleProp {
    #[must_use]
    pub fn css_name(self) -> &'static str {
        match self {
            StyleProp::Display => "display",
            StyleProp::Visibility => "visibility",
            StyleProp::Transform => "transform",
            StyleProp::Opacity => "opacity",
            StyleProp::Transition => "transition",
            StyleProp::Position => "position",
            StyleProp::Left => "left",
        }
    }
}

/// Ordered inline style declarations. An empty value clears the property.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SectionStyle {
    decls: Vec<(StyleProp, String)>,
}

impl SectionStyle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn set(mut self, prop: StyleProp, value: impl Into<String>) -> Self {
        self.decls.push((prop, value.into()));
        self
    }

    #[must_use]
    pub fn clear(self, prop: StyleProp) -> Self {
        self.set(prop, String::new())
    }

    #[must_use]
    pub fn declarations(&self) -> &[(StyleProp, String)] {
        &self.decls
    }

    /// Value the style assigns to `prop`, if any (last write wins).
    #[must_use]
    pub fn get(&self, prop: StyleProp) -> Option<&str> {
        self.decls
            .iter()
            .rev()
            .find(|(p, _)| *p == prop)
            .map(|(_, v)| v.as_str())
    }
}

/// Everything the navigator needs from the page.
///
/// Methods take `&self`: the DOM is shared, interior-mutable state and the
/// navigator calls back into the surface from scheduled callbacks.
pub trait PageSurface {
    /// Whether the section subtree for `page` exists.
    fn has_section(&self, page: PageId) -> bool;

    /// Apply inline style declarations to the section for `page`.
    fn style_section(&self, page: PageId, style: &SectionStyle);

    /// Add or remove the active marker class on the section for `page`.
    fn set_section_active(&self, page: PageId, active: bool);

    /// Mark elements of `group` whose attribute equals `page` active and
    /// unmark the rest.
    fn sync_highlights(&self, group: &HighlightGroup, page: PageId);

    /// Push `#page` onto the browser history stack.
    fn push_fragment(&self, page: PageId);

    /// Current URL fragment including the leading `#` (empty when absent).
    fn current_fragment(&self) -> String;

    fn scroll_to_top(&self);
}
