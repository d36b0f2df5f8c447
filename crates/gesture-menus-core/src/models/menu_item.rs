//! Gesture bindings.

use super::app_entry::AppEntry;
use serde::{Serialize, Serializer};
use std::fmt;

/// What happens when a bound gesture fires.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MenuAction {
    /// Switch to the menu named by the item's data.
    Menu,
    /// Launch an installed application.
    Launch,
    /// Run a script through the scripting environment.
    Ase,
    /// Any other action tag, kept verbatim.
    Other(String),
}

impl MenuAction {
    /// Parse an action tag. Known tags match case-insensitively.
    pub fn parse(tag: &str) -> Self {
        if tag.eq_ignore_ascii_case("menu") {
            MenuAction::Menu
        } else if tag.eq_ignore_ascii_case("launch") {
            MenuAction::Launch
        } else if tag.eq_ignore_ascii_case("ase") {
            MenuAction::Ase
        } else {
            MenuAction::Other(tag.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            MenuAction::Menu => "MENU",
            MenuAction::Launch => "LAUNCH",
            MenuAction::Ase => "ASE",
            MenuAction::Other(tag) => tag,
        }
    }

    /// Whether items with this action carry an [`AppEntry`].
    pub fn is_launch_style(&self) -> bool {
        matches!(self, MenuAction::Launch | MenuAction::Ase)
    }
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for MenuAction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// The action bound to one gesture of one menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    label: String,
    action: MenuAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    app: Option<AppEntry>,
}

impl MenuItem {
    /// Create an item without a launch target.
    pub fn new(label: impl Into<String>, action: MenuAction, data: Option<String>) -> Self {
        Self {
            label: label.into(),
            action,
            data,
            app: None,
        }
    }

    /// Create a link to another menu.
    pub fn link(label: impl Into<String>, target_id: impl Into<String>) -> Self {
        Self::new(label, MenuAction::Menu, Some(target_id.into()))
    }

    /// Create a launch-style item.
    ///
    /// Returns `None` if `action` is not launch-style, since only those
    /// items may carry an application.
    pub fn with_app(
        label: impl Into<String>,
        action: MenuAction,
        data: Option<String>,
        app: AppEntry,
    ) -> Option<Self> {
        if !action.is_launch_style() {
            return None;
        }
        Some(Self {
            label: label.into(),
            action,
            data,
            app: Some(app),
        })
    }

    /// Shorthand for a `LAUNCH` item.
    pub fn launch(label: impl Into<String>, app: AppEntry) -> Self {
        Self {
            label: label.into(),
            action: MenuAction::Launch,
            data: None,
            app: Some(app),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn action(&self) -> &MenuAction {
        &self.action
    }

    pub fn data(&self) -> Option<&str> {
        self.data.as_deref()
    }

    pub fn app(&self) -> Option<&AppEntry> {
        self.app.as_ref()
    }

    /// Target menu id if this item is a non-empty menu link.
    pub fn link_target(&self) -> Option<&str> {
        match (&self.action, self.data.as_deref()) {
            (MenuAction::Menu, Some(target)) if !target.is_empty() => Some(target),
            _ => None,
        }
    }
}
