//! Page navigation controller and its seams.
//!
//! ARCHITECTURE
//! ============
//! `navigator` drives transitions; it reaches the page only through the
//! `surface::PageSurface` trait and time only through `schedule::Scheduler`,
//! so the whole sequence runs under `cargo test` with in-memory stand-ins.

pub mod navigator;
pub mod schedule;
pub mod surface;
#[cfg(test)]
pub(crate) mod testing;
pub mod transition;

pub use navigator::PageNavigator;
