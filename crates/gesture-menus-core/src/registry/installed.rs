//! Installed-application lookups.

use crate::config::PathsConfig;
use crate::platform;
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

/// Answers whether an application package is installed.
pub trait AppRegistry {
    fn exists(&self, package_name: &str) -> bool;
}

impl<F> AppRegistry for F
where
    F: Fn(&str) -> bool,
{
    fn exists(&self, package_name: &str) -> bool {
        self(package_name)
    }
}

/// A fixed set of installed package names.
#[derive(Debug, Clone, Default)]
pub struct InstalledApps {
    packages: HashSet<String>,
}

impl InstalledApps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, package_name: impl Into<String>) {
        self.packages.insert(package_name.into());
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for InstalledApps {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            packages: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl AppRegistry for InstalledApps {
    fn exists(&self, package_name: &str) -> bool {
        self.packages.contains(package_name)
    }
}

/// Registry built from freedesktop `.desktop` entries.
///
/// Each entry's file stem (e.g. `org.gnome.Calculator`) counts as an
/// installed package name.
#[derive(Debug, Clone, Default)]
pub struct DesktopEntryRegistry {
    apps: InstalledApps,
}

impl DesktopEntryRegistry {
    /// Scan the given directories recursively. Missing directories are skipped.
    pub fn scan<I, P>(dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut apps = InstalledApps::new();
        for dir in dirs {
            let dir = dir.as_ref();
            if !dir.is_dir() {
                continue;
            }
            for entry in WalkDir::new(dir)
                .follow_links(true)
                .into_iter()
                .filter_map(|e| e.ok())
                .filter(|e| e.file_type().is_file())
            {
                let path = entry.path();
                let is_desktop = path
                    .extension()
                    .is_some_and(|ext| ext == PathsConfig::DESKTOP_ENTRY_EXTENSION);
                if !is_desktop {
                    continue;
                }
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    apps.insert(stem);
                }
            }
            debug!("Scanned application entries in {}", dir.display());
        }
        Self { apps }
    }

    /// Scan the platform's application directories.
    pub fn from_platform() -> Self {
        Self::scan(platform::application_dirs())
    }

    pub fn len(&self) -> usize {
        self.apps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }
}

impl AppRegistry for DesktopEntryRegistry {
    fn exists(&self, package_name: &str) -> bool {
        self.apps.exists(package_name)
    }
}
