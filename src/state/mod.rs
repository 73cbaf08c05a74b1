//! Navigation state modules.
//!
//! DESIGN
//! ======
//! `page` holds the closed set of page identifiers; `navigation` holds the
//! state record and its guard/commit rules. Neither touches the DOM.

pub mod navigation;
pub mod page;
