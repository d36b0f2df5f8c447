//! Menu graph with bidirectional auto-linking.

use crate::config::MenuConfig;
use crate::gesture::GestureCode;
use crate::models::{Menu, MenuItem};
use serde::{Serialize, Serializer};
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, warn};

/// All menus of a shell, keyed by menu id.
///
/// Menus iterate in registration order. Links between menus are plain ids
/// stored in [`MenuItem`] data; a link to a missing id is legal and inert.
#[derive(Debug, Clone, Default)]
pub struct MenuGraph {
    menus: HashMap<String, Menu>,
    order: Vec<String>,
}

impl MenuGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a menu by id.
    pub fn get(&self, id: &str) -> Option<&Menu> {
        self.menus.get(id)
    }

    /// Look up a menu by id for editing its bindings.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Menu> {
        self.menus.get_mut(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.menus.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.menus.len()
    }

    pub fn is_empty(&self) -> bool {
        self.menus.is_empty()
    }

    /// Menu ids in registration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Menus in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Menu> {
        self.order.iter().filter_map(|id| self.menus.get(id))
    }

    /// Splice a new menu in at an edge gesture of `current_id`.
    ///
    /// The new menu gets a back link at the opposite edge. If `current_id`
    /// already linked to a menu at `gesture`, the new menu is placed between
    /// the two so the old neighbour stays reachable.
    ///
    /// Returns the id chosen for the new menu, or `None` (leaving the graph
    /// untouched) when `gesture` has no opposite or `current_id` is unknown.
    pub fn insert_menu(
        &mut self,
        current_id: &str,
        gesture: GestureCode,
        menu_name: &str,
    ) -> Option<String> {
        let Some(opposite) = gesture.opposite() else {
            debug!("Ignoring menu insert at non-edge gesture {}", gesture);
            return None;
        };
        let Some(current) = self.menus.get(current_id) else {
            warn!("Cannot insert menu: no menu with id {:?}", current_id);
            return None;
        };

        let current_name = current.name().to_string();
        let displaced = current
            .get(gesture)
            .and_then(MenuItem::link_target)
            .and_then(|target| self.menus.get(target))
            .map(|menu| (menu.id().to_string(), menu.name().to_string()));

        let id = self.unique_id(menu_name);
        let mut new_menu = Menu::new(menu_name);
        new_menu.set_id(id.clone());
        new_menu.put(opposite, MenuItem::link(current_name, current_id));
        if let Some((displaced_id, displaced_name)) = &displaced {
            new_menu.put(gesture, MenuItem::link(displaced_name.clone(), displaced_id.clone()));
        }
        self.register(new_menu);

        let link = MenuItem::link(menu_name, id.clone());
        if let Some(current) = self.menus.get_mut(current_id) {
            current.put(gesture, link.clone());
        }
        if let Some((displaced_id, _)) = displaced {
            if let Some(next) = self.menus.get_mut(&displaced_id) {
                next.put(opposite, link);
            }
        }

        debug!(
            "Inserted menu {:?} at {} of {:?}",
            id, gesture, current_id
        );
        Some(id)
    }

    /// First free id derived from `name`: "Name", "Name 2", "Name 3", ...
    fn unique_id(&self, name: &str) -> String {
        let mut id = name.to_string();
        let mut n = 1;
        while self.menus.contains_key(&id) {
            n += 1;
            id = format!("{}{}{}", name, MenuConfig::DUPLICATE_ID_SEPARATOR, n);
        }
        id
    }

    /// Add or replace a menu under its own id.
    pub(crate) fn register(&mut self, menu: Menu) {
        let id = menu.id().to_string();
        if self.menus.insert(id.clone(), menu).is_none() {
            self.order.push(id);
        }
    }

    /// Overlay bindings onto an existing menu. Returns false if `id` is unknown.
    pub(crate) fn merge_into(&mut self, id: &str, items: BTreeMap<GestureCode, MenuItem>) -> bool {
        match self.menus.get_mut(id) {
            Some(menu) => {
                menu.merge(items);
                true
            }
            None => false,
        }
    }
}

/// Graphs are equal when they hold the same menus, regardless of order.
impl PartialEq for MenuGraph {
    fn eq(&self, other: &Self) -> bool {
        self.menus == other.menus
    }
}

impl Eq for MenuGraph {}

impl Serialize for MenuGraph {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}
