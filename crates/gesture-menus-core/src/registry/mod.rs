//! Collaborators consulted while loading menus.
//!
//! - **Installed applications**: a yes/no membership test used to drop launch
//!   items whose package is gone ([`AppRegistry`]).
//! - **Default menu set**: the bundled current-format document that seeds
//!   legacy migration ([`DefaultMenuSource`]).

mod defaults;
mod installed;

pub use defaults::{BundledDefaults, DefaultMenuSource, FileDefaults};
pub use installed::{AppRegistry, DesktopEntryRegistry, InstalledApps};
