//! Gesture Menus - headless menu graph for a gesture-driven shortcut launcher.
//!
//! A shell is a set of named menus. Each menu binds gesture codes to actions:
//! open another menu, launch an application, or run a script. This crate owns
//! the in-memory graph, the edge-swipe auto-linking used when a new menu is
//! added, and the versioned XML document the graph is saved to, including
//! migration of pre-versioning documents.
//!
//! Gesture recognition, launching, and rendering belong to the host.
//!
//! # Example
//!
//! ```rust,no_run
//! use gesture_menus::{BundledDefaults, DesktopEntryRegistry, GestureCode, MenuLoader};
//!
//! let registry = DesktopEntryRegistry::from_platform();
//! let defaults = BundledDefaults::new();
//! let loader = MenuLoader::new(&registry, &defaults);
//!
//! let mut menus = loader.load_menus("/path/to/menus.xml");
//! if menus.contains("Home") {
//!     menus.insert_menu("Home", GestureCode::EDGE_LEFT, "Games");
//! }
//! menus.save("/path/to/menus.xml");
//! ```

pub mod config;
pub mod error;
pub mod gesture;
pub mod graph;
pub mod models;
pub mod persistence;
pub mod platform;
pub mod registry;

// Re-export commonly used types
pub use config::MenuConfig;
pub use error::{ErrorKind, MenuError, Result};
pub use gesture::GestureCode;
pub use graph::MenuGraph;
pub use models::{AppEntry, AppParam, Menu, MenuAction, MenuItem};
pub use persistence::MenuLoader;
pub use registry::{
    AppRegistry, BundledDefaults, DefaultMenuSource, DesktopEntryRegistry, FileDefaults,
    InstalledApps,
};
