//! Sources for the default menu set used by legacy migration.

use crate::error::{MenuError, Result};
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::PathBuf;

const DEFAULT_SHORTCUTS_XML: &str = include_str!("../../resources/default_shortcuts.xml");

/// Supplies the current-format document that seeds a migrated graph.
pub trait DefaultMenuSource {
    fn open_default_document(&self) -> Result<Box<dyn Read + '_>>;
}

/// Default menu set held in memory, normally the one compiled into the crate.
#[derive(Debug, Clone)]
pub struct BundledDefaults {
    xml: Cow<'static, str>,
}

impl BundledDefaults {
    /// The menu set shipped with this crate.
    pub fn new() -> Self {
        Self {
            xml: Cow::Borrowed(DEFAULT_SHORTCUTS_XML),
        }
    }

    /// Use an explicit document instead of the shipped one.
    pub fn from_xml(xml: impl Into<String>) -> Self {
        Self {
            xml: Cow::Owned(xml.into()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.xml
    }
}

impl Default for BundledDefaults {
    fn default() -> Self {
        Self::new()
    }
}

impl DefaultMenuSource for BundledDefaults {
    fn open_default_document(&self) -> Result<Box<dyn Read + '_>> {
        Ok(Box::new(self.xml.as_bytes()))
    }
}

/// Default menu set read from a file on each migration.
#[derive(Debug, Clone)]
pub struct FileDefaults {
    path: PathBuf,
}

impl FileDefaults {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DefaultMenuSource for FileDefaults {
    fn open_default_document(&self) -> Result<Box<dyn Read + '_>> {
        let file = File::open(&self.path).map_err(|e| MenuError::io_with_path(e, &self.path))?;
        Ok(Box::new(BufReader::new(file)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_bundled_defaults_are_current_format() {
        let defaults = BundledDefaults::new();
        assert!(defaults.as_str().contains("<version number=\"0.1\""));
        assert!(defaults.as_str().contains("Shortcuts Left"));
    }

    #[test]
    fn test_file_defaults_missing_file() {
        let source = FileDefaults::new("/nonexistent/default_shortcuts.xml");
        let err = source.open_default_document().err().unwrap();
        assert_eq!(err.kind(), ErrorKind::Io);
        match err {
            MenuError::Io { path, .. } => assert_eq!(
                path,
                Some(PathBuf::from("/nonexistent/default_shortcuts.xml"))
            ),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
