//! Data model for gesture menus.
//!
//! Leaf value types ([`AppEntry`], [`MenuItem`]) and the [`Menu`] node that
//! maps gesture codes to items.

mod app_entry;
mod menu;
mod menu_item;

pub use app_entry::*;
pub use menu::*;
pub use menu_item::*;
