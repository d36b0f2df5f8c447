//! Centralized configuration for gesture menus.
//!
//! Document format constants, the legacy migration target, and file naming.

/// Menu document configuration.
pub struct MenuConfig;

impl MenuConfig {
    /// Root element of a menu document.
    pub const ROOT_TAG: &'static str = "shell";
    /// Version written by the current serializer.
    pub const CURRENT_VERSION: &'static str = "0.1";
    /// Version marker (or absence of one) identifying pre-versioning documents.
    pub const LEGACY_VERSION: &'static str = "0.0";
    /// Menu that receives legacy flat shortcuts during migration.
    pub const PRIMARY_SHORTCUTS_MENU: &'static str = "Shortcuts Left";
    /// Separator between a display name and its numeric suffix on id collision.
    pub const DUPLICATE_ID_SEPARATOR: &'static str = " ";
    pub const MENU_FILE_NAME: &'static str = "menus.xml";
    pub const KEEP_BACKUP_ON_SAVE: bool = true;
}

/// Element and attribute names of the menu document.
pub struct XmlTags;

impl XmlTags {
    pub const VERSION: &'static str = "version";
    pub const MENU: &'static str = "menu";
    pub const ITEM: &'static str = "item";
    pub const APP_INFO: &'static str = "appInfo";
    pub const PARAM: &'static str = "param";

    pub const ATTR_NUMBER: &'static str = "number";
    pub const ATTR_LABEL: &'static str = "label";
    pub const ATTR_ID: &'static str = "id";
    pub const ATTR_GESTURE: &'static str = "gesture";
    pub const ATTR_ACTION: &'static str = "action";
    pub const ATTR_DATA: &'static str = "data";
    pub const ATTR_PACKAGE: &'static str = "package";
    pub const ATTR_CLASS: &'static str = "class";
    pub const ATTR_SCRIPT: &'static str = "script";
    pub const ATTR_NAME: &'static str = "name";
    pub const ATTR_VALUE: &'static str = "value";
}

/// Shared directory and path configurations.
pub struct PathsConfig;

impl PathsConfig {
    pub const APP_DIR_NAME: &'static str = "gesture-shell";
    pub const BACKUP_EXTENSION: &'static str = "xml.bak";
    pub const TEMP_SUFFIX: &'static str = "tmp";
    pub const DESKTOP_ENTRY_EXTENSION: &'static str = "desktop";
}
