//! Menu document loading and legacy migration.
//!
//! Documents carrying `<version number="0.1"/>` (or any version other than
//! "0.0") are read menu by menu. Documents without a version, or with "0.0",
//! predate per-menu grouping: their flat `item` list is overlaid onto the
//! primary shortcuts menu of the default menu set.
//!
//! Loads are all-or-nothing. The first error discards everything parsed so
//! far; the fail-soft entry points then return an empty graph.

use crate::config::{MenuConfig, XmlTags};
use crate::error::{MenuError, Result};
use crate::gesture::GestureCode;
use crate::graph::MenuGraph;
use crate::models::{AppEntry, AppParam, Menu, MenuAction, MenuItem};
use crate::registry::{AppRegistry, DefaultMenuSource};
use roxmltree::{Document, Node};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info, warn};

/// Loads menu graphs, consulting the installed-application registry and the
/// default menu set.
pub struct MenuLoader<'a> {
    registry: &'a dyn AppRegistry,
    defaults: &'a dyn DefaultMenuSource,
}

impl<'a> MenuLoader<'a> {
    /// Create a loader.
    ///
    /// # Arguments
    ///
    /// * `registry` - Decides which launch items survive the load
    /// * `defaults` - Seeds the graph when migrating a legacy document
    pub fn new(registry: &'a dyn AppRegistry, defaults: &'a dyn DefaultMenuSource) -> Self {
        Self { registry, defaults }
    }

    // ========================================
    // Fail-soft entry points
    // ========================================

    /// Load menus from a file. Any failure yields an empty graph.
    pub fn load_menus(&self, path: impl AsRef<Path>) -> MenuGraph {
        self.fail_soft(self.try_load_menus(path))
    }

    /// Load menus from a stream. Any failure yields an empty graph.
    pub fn load_menus_from_reader<R: Read>(&self, reader: R) -> MenuGraph {
        self.fail_soft(self.try_load_menus_from_reader(reader))
    }

    /// Load menus from a string. Any failure yields an empty graph.
    pub fn load_menus_from_str(&self, xml: &str) -> MenuGraph {
        self.fail_soft(self.try_load_menus_from_str(xml))
    }

    fn fail_soft(&self, result: Result<MenuGraph>) -> MenuGraph {
        match result {
            Ok(graph) => graph,
            Err(e) => {
                warn!("Failed to load menus ({}): {}", e.kind(), e);
                MenuGraph::new()
            }
        }
    }

    // ========================================
    // Fallible entry points
    // ========================================

    /// Load menus from a file.
    pub fn try_load_menus(&self, path: impl AsRef<Path>) -> Result<MenuGraph> {
        let path = path.as_ref();
        debug!("Loading menus from {}", path.display());

        let file = File::open(path).map_err(|e| MenuError::io_with_path(e, path))?;
        self.try_load_menus_from_reader(BufReader::new(file))
    }

    /// Load menus from a stream.
    pub fn try_load_menus_from_reader<R: Read>(&self, reader: R) -> Result<MenuGraph> {
        let text = read_document_text(reader)?;
        self.try_load_menus_from_str(&text)
    }

    /// Load menus from a string.
    pub fn try_load_menus_from_str(&self, xml: &str) -> Result<MenuGraph> {
        let doc = Document::parse(strip_bom(xml))?;
        if is_legacy(&doc) {
            self.migrate_legacy(&doc)
        } else {
            self.load_current(&doc)
        }
    }

    // ========================================
    // Format handling
    // ========================================

    fn load_current(&self, doc: &Document) -> Result<MenuGraph> {
        let mut graph = MenuGraph::new();

        for node in doc
            .descendants()
            .filter(|n| n.is_element() && n.tag_name().name() == XmlTags::MENU)
        {
            let label = required_attribute(node, XmlTags::MENU, XmlTags::ATTR_LABEL)?;
            let items = self.read_items(node.children())?;
            let mut menu = Menu::with_items(label, items);
            if let Some(id) = node.attribute(XmlTags::ATTR_ID) {
                menu.set_id(id);
            }
            debug!("Loaded menu {:?} with {} items", menu.id(), menu.len());
            graph.register(menu);
        }

        Ok(graph)
    }

    fn migrate_legacy(&self, doc: &Document) -> Result<MenuGraph> {
        info!("Migrating legacy menu document onto the default menu set");

        let text = read_document_text(self.defaults.open_default_document()?)?;
        let defaults_doc = Document::parse(strip_bom(&text))?;
        if is_legacy(&defaults_doc) {
            return Err(MenuError::InvalidDefaults {
                message: "default menu set must be a versioned document".to_string(),
            });
        }
        let mut graph = self.load_current(&defaults_doc)?;

        let items = self.read_items(doc.descendants())?;
        let target = MenuConfig::PRIMARY_SHORTCUTS_MENU;
        let count = items.len();
        if !graph.merge_into(target, items) {
            return Err(MenuError::MissingMigrationTarget {
                menu: target.to_string(),
            });
        }

        info!("Merged {} legacy shortcuts into {:?}", count, target);
        Ok(graph)
    }

    // ========================================
    // Items
    // ========================================

    /// Parse every `item` element among `nodes` (other nodes are skipped).
    ///
    /// Later items replace earlier ones bound to the same gesture. Launch items
    /// whose package the registry does not know are dropped.
    fn read_items<'d, 'input: 'd, I>(&self, nodes: I) -> Result<BTreeMap<GestureCode, MenuItem>>
    where
        I: IntoIterator<Item = Node<'d, 'input>>,
    {
        let mut items = BTreeMap::new();
        for node in nodes
            .into_iter()
            .filter(|n| is_element_named(n, XmlTags::ITEM))
        {
            if let Some((gesture, item)) = self.read_item(node)? {
                items.insert(gesture, item);
            }
        }
        Ok(items)
    }

    fn read_item(&self, node: Node) -> Result<Option<(GestureCode, MenuItem)>> {
        let raw_gesture = required_attribute(node, XmlTags::ITEM, XmlTags::ATTR_GESTURE)?;
        let gesture = raw_gesture
            .parse::<i32>()
            .map(GestureCode)
            .map_err(|_| MenuError::InvalidAttribute {
                element: XmlTags::ITEM.to_string(),
                attribute: XmlTags::ATTR_GESTURE.to_string(),
                value: raw_gesture.to_string(),
            })?;
        let label = required_attribute(node, XmlTags::ITEM, XmlTags::ATTR_LABEL)?;
        let action = MenuAction::parse(required_attribute(
            node,
            XmlTags::ITEM,
            XmlTags::ATTR_ACTION,
        )?);
        let data = node.attribute(XmlTags::ATTR_DATA).map(str::to_string);

        if !action.is_launch_style() {
            return Ok(Some((gesture, MenuItem::new(label, action, data))));
        }

        let mut app_info = None;
        let mut params = Vec::new();
        for child in node.children().filter(|c| c.is_element()) {
            if is_element_named(&child, XmlTags::APP_INFO) {
                app_info = Some(child);
            } else if is_element_named(&child, XmlTags::PARAM) {
                params.push(AppParam::new(
                    required_attribute(child, XmlTags::PARAM, XmlTags::ATTR_NAME)?,
                    required_attribute(child, XmlTags::PARAM, XmlTags::ATTR_VALUE)?,
                ));
            }
        }
        let app_info = app_info.ok_or(MenuError::MissingAppInfo {
            gesture: gesture.code(),
        })?;

        let app = AppEntry::new(
            app_info.attribute(XmlTags::ATTR_PACKAGE).unwrap_or_default(),
            app_info.attribute(XmlTags::ATTR_CLASS).unwrap_or_default(),
            app_info.attribute(XmlTags::ATTR_SCRIPT).unwrap_or_default(),
            params,
        );

        if !self.registry.exists(app.package_name()) {
            warn!(
                "Dropping shortcut {:?}: package {:?} is not installed",
                label,
                app.package_name()
            );
            return Ok(None);
        }

        Ok(MenuItem::with_app(label, action, data, app).map(|item| (gesture, item)))
    }
}

/// Whether the document predates versioning.
fn is_legacy(doc: &Document) -> bool {
    let version = doc
        .descendants()
        .find(|n| n.is_element() && n.tag_name().name() == XmlTags::VERSION)
        .and_then(|n| n.attribute(XmlTags::ATTR_NUMBER))
        .unwrap_or(MenuConfig::LEGACY_VERSION);
    version.eq_ignore_ascii_case(MenuConfig::LEGACY_VERSION)
}

fn is_element_named(node: &Node, name: &str) -> bool {
    node.is_element() && node.tag_name().name().eq_ignore_ascii_case(name)
}

fn required_attribute<'d>(node: Node<'d, '_>, element: &str, attribute: &str) -> Result<&'d str> {
    node.attribute(attribute)
        .ok_or_else(|| MenuError::missing_attribute(element, attribute))
}

fn read_document_text<R: Read>(mut reader: R) -> Result<String> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).map_err(|e| MenuError::Io {
        message: "Failed to read menu document".to_string(),
        path: None,
        source: Some(e),
    })?;
    String::from_utf8(bytes).map_err(|e| MenuError::Parse {
        message: format!("Menu document is not valid UTF-8: {}", e),
        source: None,
    })
}

fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{feff}').unwrap_or(text)
}
