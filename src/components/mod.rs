//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page markup is static; components only cover the pieces that follow
//! the active page, reading it from the `RwSignal<PageId>` context.

pub mod page_title;
