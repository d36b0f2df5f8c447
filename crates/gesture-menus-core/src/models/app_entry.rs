//! Launch target descriptors.

use serde::Serialize;

/// A named invocation parameter passed to a launched app or script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppParam {
    pub name: String,
    pub value: String,
}

impl AppParam {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// An installed application or script plus its invocation parameters.
///
/// Immutable once built; two entries are equal when all fields are equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppEntry {
    package_name: String,
    class_name: String,
    script_name: String,
    params: Vec<AppParam>,
}

impl AppEntry {
    /// Create a new entry.
    pub fn new(
        package_name: impl Into<String>,
        class_name: impl Into<String>,
        script_name: impl Into<String>,
        params: Vec<AppParam>,
    ) -> Self {
        Self {
            package_name: package_name.into(),
            class_name: class_name.into(),
            script_name: script_name.into(),
            params,
        }
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn script_name(&self) -> &str {
        &self.script_name
    }

    /// Parameters in document order.
    pub fn params(&self) -> &[AppParam] {
        &self.params
    }
}
