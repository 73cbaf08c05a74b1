//! Browser bindings for the navigator (`csr` builds only).

pub mod listeners;
pub mod mount;
pub mod scheduler;
pub mod surface;

pub use mount::{MountedNavigator, WebNavigator, mount, read_config};
