//! Platform abstraction layer.
//!
//! All `#[cfg]` blocks for OS-specific behavior live here rather than being
//! scattered through the loader and registries.

pub mod paths;

pub use paths::{application_dirs, data_dir, default_menu_path};
