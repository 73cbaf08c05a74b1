//! Navigation state record and the pure rules that mutate it.
//!
//! DESIGN
//! ======
//! Everything here is side-effect free so the guard, direction, and commit
//! rules can be tested without a DOM. `nav::navigator` layers the timed
//! surface mutations on top.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use serde::{Deserialize, Serialize};

use super::page::PageId;

/// The single piece of real state: which page is current.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationState {
    pub current_page: PageId,
    pub previous_page: Option<PageId>,
    /// Re-entrancy guard. Requests arriving while set are dropped.
    pub is_transitioning: bool,
}

/// Slide direction, chosen purely by canonical ordinal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Incoming slides in from the right, outgoing leaves to the left.
    Forward,
    /// Incoming slides in from the left, outgoing leaves to the right.
    Backward,
}

impl Direction {
    #[must_use]
    pub fn between(from: PageId, to: PageId) -> Self {
        if to.ordinal() > from.ordinal() { Direction::Forward } else { Direction::Backward }
    }
}

/// Whether a navigation should add a browser history entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HistoryMode {
    /// User gesture: push `#page`.
    #[default]
    Push,
    /// Resync from the URL: history already reflects the target.
    Replace,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IgnoreReason {
    InFlight,
    AlreadyCurrent,
}

/// Result of a navigation request that did not fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavOutcome {
    Started(Direction),
    Ignored(IgnoreReason),
}

/// Payload delivered to page-activation listeners after a commit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageActivation {
    pub current: PageId,
    pub previous: Option<PageId>,
    pub direction: Direction,
}

impl NavigationState {
    /// Check the guards for a request to show `target`.
    pub fn admit(&self, target: PageId) -> Result<(), IgnoreReason> {
        if self.is_transitioning {
            return Err(IgnoreReason::InFlight);
        }
        if target == self.current_page {
            return Err(IgnoreReason::AlreadyCurrent);
        }
        Ok(())
    }

    /// Enter the transitioning state and report the slide direction.
    pub fn begin(&mut self, target: PageId) -> Direction {
        self.is_transitioning = true;
        Direction::between(self.current_page, target)
    }

    /// Make `target` current and release the guard.
    pub fn commit(&mut self, target: PageId, direction: Direction) -> PageActivation {
        self.previous_page = Some(self.current_page);
        self.current_page = target;
        self.is_transitioning = false;
        PageActivation { current: target, previous: self.previous_page, direction }
    }

    /// Release the guard without changing pages.
    pub fn abort(&mut self) {
        self.is_transitioning = false;
    }
}
