//! A single menu node.

use super::menu_item::MenuItem;
use crate::gesture::GestureCode;
use serde::Serialize;
use std::collections::BTreeMap;

/// A named node of the menu graph holding at most one item per gesture.
///
/// Items iterate in ascending gesture order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Menu {
    id: String,
    name: String,
    items: BTreeMap<GestureCode, MenuItem>,
}

impl Menu {
    /// Create an empty menu whose id equals its name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: name.clone(),
            name,
            items: BTreeMap::new(),
        }
    }

    /// Create a menu from an existing set of bindings.
    pub fn with_items(name: impl Into<String>, items: BTreeMap<GestureCode, MenuItem>) -> Self {
        let mut menu = Self::new(name);
        menu.items = items;
        menu
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub(crate) fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Item bound at `gesture`, if any.
    pub fn get(&self, gesture: GestureCode) -> Option<&MenuItem> {
        self.items.get(&gesture)
    }

    /// Bind `item` at `gesture`, returning the previous binding.
    pub fn put(&mut self, gesture: GestureCode, item: MenuItem) -> Option<MenuItem> {
        self.items.insert(gesture, item)
    }

    /// Overlay bindings, replacing any existing item at the same gesture.
    pub fn merge(&mut self, items: BTreeMap<GestureCode, MenuItem>) {
        self.items.extend(items);
    }

    pub fn items(&self) -> impl Iterator<Item = (GestureCode, &MenuItem)> {
        self.items.iter().map(|(gesture, item)| (*gesture, item))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
