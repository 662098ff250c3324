//! Project descriptor discovery and selection

mod locator;
mod reference;

pub use locator::{locate, Discovered, PROJECT_EXTENSION, WORKSPACE_EXTENSION};
pub use reference::ProjectReference;
