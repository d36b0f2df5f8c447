//! Menu document serialization.

use super::atomic::atomic_write_text;
use crate::config::{MenuConfig, XmlTags};
use crate::error::{MenuError, Result};
use crate::gesture::GestureCode;
use crate::graph::MenuGraph;
use crate::models::{Menu, MenuItem};
use quick_xml::escape::escape;
use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::name::QName;
use quick_xml::Writer;
use std::borrow::Cow;
use std::io::Write;
use std::path::Path;
use tracing::{debug, warn};

impl MenuGraph {
    /// Serialize the whole graph as a current-format document.
    ///
    /// Menus appear in registration order, items in gesture order.
    pub fn to_xml(&self) -> Result<String> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

        emit(&mut writer, Event::Start(BytesStart::new(MenuConfig::ROOT_TAG)))?;

        let mut version = BytesStart::new(XmlTags::VERSION);
        version.push_attribute(attribute(XmlTags::ATTR_NUMBER, MenuConfig::CURRENT_VERSION));
        emit(&mut writer, Event::Empty(version))?;

        for menu in self.iter() {
            write_menu(&mut writer, menu)?;
        }

        emit(&mut writer, Event::End(BytesEnd::new(MenuConfig::ROOT_TAG)))?;

        String::from_utf8(writer.into_inner()).map_err(|e| MenuError::Io {
            message: format!("Serialized menus are not valid UTF-8: {}", e),
            path: None,
            source: None,
        })
    }

    /// Write the graph to `path`, replacing the file atomically.
    pub fn try_save(&self, path: impl AsRef<Path>, keep_backup: bool) -> Result<()> {
        let path = path.as_ref();
        let xml = self.to_xml()?;
        debug!("Saving {} menus to {}", self.len(), path.display());
        atomic_write_text(path, &xml, keep_backup)
    }

    /// Write the graph to `path`, logging instead of returning failures.
    ///
    /// Returns whether the document was written.
    pub fn save(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        match self.try_save(path, MenuConfig::KEEP_BACKUP_ON_SAVE) {
            Ok(()) => true,
            Err(e) => {
                warn!("Failed to save menus to {} ({}): {}", path.display(), e.kind(), e);
                false
            }
        }
    }
}

fn write_menu<W: Write>(writer: &mut Writer<W>, menu: &Menu) -> Result<()> {
    let mut start = BytesStart::new(XmlTags::MENU);
    start.push_attribute(attribute(XmlTags::ATTR_LABEL, menu.name()));
    start.push_attribute(attribute(XmlTags::ATTR_ID, menu.id()));

    if menu.is_empty() {
        return emit(writer, Event::Empty(start));
    }

    emit(writer, Event::Start(start))?;
    for (gesture, item) in menu.items() {
        write_item(writer, gesture, item)?;
    }
    emit(writer, Event::End(BytesEnd::new(XmlTags::MENU)))
}

fn write_item<W: Write>(writer: &mut Writer<W>, gesture: GestureCode, item: &MenuItem) -> Result<()> {
    let code = gesture.code().to_string();
    let mut start = BytesStart::new(XmlTags::ITEM);
    start.push_attribute(attribute(XmlTags::ATTR_GESTURE, code.as_str()));
    start.push_attribute(attribute(XmlTags::ATTR_LABEL, item.label()));
    start.push_attribute(attribute(XmlTags::ATTR_ACTION, item.action().as_str()));
    if let Some(data) = item.data() {
        start.push_attribute(attribute(XmlTags::ATTR_DATA, data));
    }

    let Some(app) = item.app() else {
        return emit(writer, Event::Empty(start));
    };

    emit(writer, Event::Start(start))?;

    let mut app_info = BytesStart::new(XmlTags::APP_INFO);
    app_info.push_attribute(attribute(XmlTags::ATTR_PACKAGE, app.package_name()));
    app_info.push_attribute(attribute(XmlTags::ATTR_CLASS, app.class_name()));
    app_info.push_attribute(attribute(XmlTags::ATTR_SCRIPT, app.script_name()));
    emit(writer, Event::Empty(app_info))?;

    for param in app.params() {
        let mut entry = BytesStart::new(XmlTags::PARAM);
        entry.push_attribute(attribute(XmlTags::ATTR_NAME, param.name.as_str()));
        entry.push_attribute(attribute(XmlTags::ATTR_VALUE, param.value.as_str()));
        emit(writer, Event::Empty(entry))?;
    }

    emit(writer, Event::End(BytesEnd::new(XmlTags::ITEM)))
}

/// Attribute with markup escaped and line breaks and tabs as character
/// references, so readers do not normalize them to spaces.
fn attribute<'a>(key: &'a str, value: &str) -> Attribute<'a> {
    let escaped = escape(value)
        .replace('\n', "&#10;")
        .replace('\r', "&#13;")
        .replace('\t', "&#9;");
    Attribute {
        key: QName(key.as_bytes()),
        value: Cow::Owned(escaped.into_bytes()),
    }
}

fn emit<W: Write>(writer: &mut Writer<W>, event: Event<'_>) -> Result<()> {
    writer.write_event(event).map_err(|e| MenuError::Io {
        message: format!("Failed to write XML: {}", e),
        path: None,
        source: None,
    })
}
