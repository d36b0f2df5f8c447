//! Error types for gesture menus.
//!
//! Every failure detected while loading or saving a menu document maps onto
//! one of three kinds (see [`ErrorKind`]). The top-level load and save entry
//! points log these and degrade gracefully; the `try_*` variants surface them.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for menu loading, migration and persistence.
#[derive(Debug, Error)]
pub enum MenuError {
    // Document errors
    #[error("XML parse error: {message}")]
    Parse {
        message: String,
        #[source]
        source: Option<roxmltree::Error>,
    },

    // Schema errors
    #[error("Missing required attribute `{attribute}` on <{element}>")]
    MissingAttribute { element: String, attribute: String },

    #[error("Invalid value {value:?} for attribute `{attribute}` on <{element}>")]
    InvalidAttribute {
        element: String,
        attribute: String,
        value: String,
    },

    #[error("Launch item for gesture {gesture} has no <appInfo> element")]
    MissingAppInfo { gesture: i32 },

    #[error("Default menu set has no `{menu}` menu to merge legacy shortcuts into")]
    MissingMigrationTarget { menu: String },

    #[error("Invalid default menu set: {message}")]
    InvalidDefaults { message: String },

    // File system errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("IO error at {path:?}: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },
}

/// Coarse classification of a [`MenuError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed or non-well-formed document.
    Parse,
    /// Well-formed document missing a required element or attribute.
    SchemaViolation,
    /// Stream or file open, read or write failure.
    Io,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Parse => write!(f, "parse error"),
            ErrorKind::SchemaViolation => write!(f, "schema violation"),
            ErrorKind::Io => write!(f, "io error"),
        }
    }
}

/// Result type alias for menu operations.
pub type Result<T> = std::result::Result<T, MenuError>;

impl From<std::io::Error> for MenuError {
    fn from(err: std::io::Error) -> Self {
        MenuError::Io {
            message: err.to_string(),
            path: None,
            source: Some(err),
        }
    }
}

impl From<roxmltree::Error> for MenuError {
    fn from(err: roxmltree::Error) -> Self {
        MenuError::Parse {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl MenuError {
    /// Create an IO error with path context.
    pub fn io_with_path(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        MenuError::Io {
            message: err.to_string(),
            path: Some(path.into()),
            source: Some(err),
        }
    }

    /// Create a missing attribute error.
    pub fn missing_attribute(element: &str, attribute: &str) -> Self {
        MenuError::MissingAttribute {
            element: element.to_string(),
            attribute: attribute.to_string(),
        }
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            MenuError::Parse { .. } => ErrorKind::Parse,

            MenuError::MissingAttribute { .. }
            | MenuError::InvalidAttribute { .. }
            | MenuError::MissingAppInfo { .. }
            | MenuError::MissingMigrationTarget { .. }
            | MenuError::InvalidDefaults { .. } => ErrorKind::SchemaViolation,

            MenuError::Config { .. } | MenuError::Io { .. } => ErrorKind::Io,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MenuError::missing_attribute("item", "gesture");
        assert_eq!(
            err.to_string(),
            "Missing required attribute `gesture` on <item>"
        );
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            MenuError::MissingAppInfo { gesture: 4 }.kind(),
            ErrorKind::SchemaViolation
        );
        assert_eq!(
            MenuError::MissingMigrationTarget {
                menu: "Shortcuts Left".into()
            }
            .kind(),
            ErrorKind::SchemaViolation
        );

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert_eq!(MenuError::from(io).kind(), ErrorKind::Io);

        let parse = roxmltree::Document::parse("<shell>").unwrap_err();
        assert_eq!(MenuError::from(parse).kind(), ErrorKind::Parse);
    }

    #[test]
    fn test_io_with_path_keeps_path() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        match MenuError::io_with_path(io, "/tmp/menus.xml") {
            MenuError::Io { path, .. } => assert_eq!(path, Some(PathBuf::from("/tmp/menus.xml"))),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
