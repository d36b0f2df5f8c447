//! Subcommand implementations.

use anyhow::{bail, Context, Result};
use gesture_menus::{
    AppRegistry, BundledDefaults, DesktopEntryRegistry, GestureCode, MenuConfig, MenuGraph,
    MenuLoader,
};
use std::fmt::Write as FmtWrite;
use std::path::Path;
use tracing::info;

/// Collaborators shared by all subcommands.
pub struct MenuContext {
    registry: Box<dyn AppRegistry>,
    defaults: BundledDefaults,
}

impl MenuContext {
    pub fn new(assume_installed: bool) -> Self {
        if assume_installed {
            Self::with_registry(|_: &str| true)
        } else {
            let registry = DesktopEntryRegistry::from_platform();
            info!("Found {} installed application entries", registry.len());
            Self::with_registry(registry)
        }
    }

    pub fn with_registry(registry: impl AppRegistry + 'static) -> Self {
        Self {
            registry: Box::new(registry),
            defaults: BundledDefaults::new(),
        }
    }

    fn loader(&self) -> MenuLoader<'_> {
        MenuLoader::new(self.registry.as_ref(), &self.defaults)
    }

    /// Load without failing; a broken document shows up as no menus.
    pub fn load(&self, path: &Path) -> MenuGraph {
        self.loader().load_menus(path)
    }

    /// Load, surfacing any error. Used before rewriting a document.
    pub fn try_load(&self, path: &Path) -> Result<MenuGraph> {
        self.loader()
            .try_load_menus(path)
            .with_context(|| format!("Failed to load menus from {}", path.display()))
    }
}

/// Parse a `--gesture` value: `left`, `right`, a gesture name, or a raw code.
pub fn parse_gesture(value: &str) -> std::result::Result<GestureCode, String> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("left") {
        return Ok(GestureCode::EDGE_LEFT);
    }
    if value.eq_ignore_ascii_case("right") {
        return Ok(GestureCode::EDGE_RIGHT);
    }
    if let Some(gesture) = GestureCode::from_name(value) {
        return Ok(gesture);
    }
    value
        .parse::<i32>()
        .map(GestureCode)
        .map_err(|_| format!("unknown gesture {:?}", value))
}

pub fn insert(
    context: &MenuContext,
    path: &Path,
    from: &str,
    gesture: GestureCode,
    name: &str,
) -> Result<Option<String>> {
    let mut graph = context.try_load(path)?;
    if !graph.contains(from) {
        bail!("No menu with id {:?} in {}", from, path.display());
    }

    let Some(id) = graph.insert_menu(from, gesture, name) else {
        return Ok(None);
    };

    graph
        .try_save(path, MenuConfig::KEEP_BACKUP_ON_SAVE)
        .with_context(|| format!("Failed to save menus to {}", path.display()))?;
    Ok(Some(id))
}

/// Load `input` (migrating if needed) and write it to `output`. Returns the menu count.
pub fn migrate(context: &MenuContext, input: &Path, output: &Path) -> Result<usize> {
    let graph = context.try_load(input)?;
    graph
        .try_save(output, MenuConfig::KEEP_BACKUP_ON_SAVE)
        .with_context(|| format!("Failed to save menus to {}", output.display()))?;
    Ok(graph.len())
}

pub fn render_json(graph: &MenuGraph) -> Result<String> {
    serde_json::to_string_pretty(graph).context("Failed to serialize menus")
}

pub fn render_text(graph: &MenuGraph) -> String {
    let mut out = String::new();
    if graph.is_empty() {
        out.push_str("(no menus)");
        return out;
    }

    for menu in graph.iter() {
        if menu.id() == menu.name() {
            let _ = writeln!(out, "{}", menu.name());
        } else {
            let _ = writeln!(out, "{} [id: {}]", menu.name(), menu.id());
        }
        for (gesture, item) in menu.items() {
            let _ = write!(out, "  {:<18} {} ({})", gesture.to_string(), item.label(), item.action());
            if let Some(app) = item.app() {
                let target = if app.script_name().is_empty() {
                    format!("{}/{}", app.package_name(), app.class_name())
                } else {
                    format!("{}:{}", app.package_name(), app.script_name())
                };
                let _ = write!(out, " -> {}", target);
            } else if let Some(data) = item.data() {
                let _ = write!(out, " -> {}", data);
            }
            out.push('\n');
        }
    }
    out.trim_end().to_string()
}
