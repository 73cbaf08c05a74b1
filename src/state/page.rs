//! Logical page identifiers and their display metadata.
//!
//! DESIGN
//! ======
//! The page set is closed: the markup ships exactly five `.page-section`
//! subtrees, so an enum with a fixed canonical order replaces free-form
//! strings everywhere except at the DOM/URL boundary.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NavError;

/// One of the five navigable pages, in canonical order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageId {
    #[default]
    Home,
    PreviousEvents,
    Categories,
    Register,
    Team,
}

impl PageId {
    /// Every page in canonical order. Index equals [`PageId::ordinal`].
    pub const ALL: [PageId; 5] = [
        PageId::Home,
        PageId::PreviousEvents,
        PageId::Categories,
        PageId::Register,
        PageId::Team,
    ];

    /// Position in the canonical order; drives slide direction.
    #[must_use]
    pub fn ordinal(self) -> usize {
        match self {
            PageId::Home => 0,
            PageId::PreviousEvents => 1,
            PageId::Categories => 2,
            PageId::Register => 3,
            PageId::Team => 4,
        }
    }

    /// Element id of the page section and the URL fragment (without `#`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PageId::Home => "home",
            PageId::PreviousEvents => "previous-events",
            PageId::Categories => "categories",
            PageId::Register => "register",
            PageId::Team => "team",
        }
    }

    /// URL fragment including the leading `#`.
    #[must_use]
    pub fn fragment(self) -> String {
        format!("#{}", self.as_str())
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            PageId::Home => "Home",
            PageId::PreviousEvents => "Previous Events",
            PageId::Categories => "Categories",
            PageId::Register => "Register",
            PageId::Team => "Our Team",
        }
    }

    /// Parse a URL fragment (`#team`, `team`, or `""`).
    ///
    /// Returns `Ok(None)` for an empty fragment so callers can tell "nothing
    /// requested" apart from "something unknown requested".
    pub fn from_fragment(fragment: &str) -> Result<Option<PageId>, NavError> {
        let raw = fragment.strip_prefix('#').unwrap_or(fragment).trim();
        if raw.is_empty() {
            return Ok(None);
        }
        raw.parse().map(Some)
    }
}

impl FromStr for PageId {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PageId::ALL
            .into_iter()
            .find(|page| page.as_str() == s)
            .ok_or_else(|| NavError::UnknownPage(s.to_owned()))
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
