//! Integration tests for loading, migrating and saving menu documents.
//!
//! These tests drive the public API against the XML fixtures in
//! `tests/fixtures`.

use gesture_menus::{
    AppParam, BundledDefaults, ErrorKind, GestureCode, InstalledApps, MenuAction, MenuConfig,
    MenuGraph, MenuLoader,
};
use std::path::PathBuf;
use tempfile::TempDir;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn registry(packages: &[&str]) -> InstalledApps {
    packages.iter().copied().collect()
}

fn all_fixture_apps() -> InstalledApps {
    registry(&[
        "com.example.chess",
        "com.example.solitaire",
        "com.google.ase",
    ])
}

#[test]
fn test_current_document_round_trips() {
    let apps = all_fixture_apps();
    let defaults = BundledDefaults::new();
    let loader = MenuLoader::new(&apps, &defaults);

    let original = loader.try_load_menus(fixture_path("current.xml")).unwrap();
    assert_eq!(original.len(), 3);

    let xml = original.to_xml().unwrap();
    let reloaded = loader.try_load_menus_from_str(&xml).unwrap();

    assert_eq!(reloaded, original);
    assert_eq!(
        reloaded.ids().collect::<Vec<_>>(),
        original.ids().collect::<Vec<_>>()
    );

    // Unknown gesture codes and escaped data survive the trip.
    let future = reloaded.get("Work").unwrap().get(GestureCode(42)).unwrap();
    assert_eq!(future.action(), &MenuAction::Other("BOOKMARK".to_string()));
    assert_eq!(future.data(), Some("https://example.com/?a=1&b=2"));
}

#[test]
fn test_round_trip_through_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("menus.xml");
    let apps = all_fixture_apps();
    let defaults = BundledDefaults::new();
    let loader = MenuLoader::new(&apps, &defaults);

    let original = loader.load_menus(fixture_path("current.xml"));
    assert!(original.save(&path));

    let reloaded = loader.load_menus(&path);
    assert_eq!(reloaded, original);
}

#[test]
fn test_launch_items_filtered_by_registry() {
    let apps = registry(&["com.example.chess"]);
    let defaults = BundledDefaults::new();
    let loader = MenuLoader::new(&apps, &defaults);

    let graph = loader.try_load_menus(fixture_path("current.xml")).unwrap();

    let games = graph.get("Games").unwrap();
    assert!(games.get(GestureCode::DOWN).is_none(), "solitaire is not installed");

    let chess = games.get(GestureCode::CENTER).unwrap();
    assert_eq!(chess.label(), "Chess");
    assert_eq!(chess.action(), &MenuAction::Launch);
    let app = chess.app().unwrap();
    assert_eq!(app.package_name(), "com.example.chess");
    assert_eq!(app.class_name(), "com.example.chess.Main");
    assert_eq!(app.script_name(), "");
    assert_eq!(
        app.params(),
        &[
            AppParam::new("difficulty", "hard"),
            AppParam::new("color", "black & white"),
        ]
    );

    // Script items are filtered on their package too.
    assert!(graph.get("Work").unwrap().get(GestureCode::UP_LEFT).is_none());
}

#[test]
fn test_legacy_version_zero_migrates_onto_defaults() {
    let apps = registry(&[
        "com.example.mail",
        "com.android.browser",
        "com.google.marvin.talkingdialer",
    ]);
    let defaults = BundledDefaults::new();
    let loader = MenuLoader::new(&apps, &defaults);

    let graph = loader.try_load_menus(fixture_path("legacy_v00.xml")).unwrap();

    for id in ["Home", "Shortcuts Left", "Shortcuts Right"] {
        assert!(graph.contains(id), "missing default menu {id}");
    }

    let shortcuts = graph.get(MenuConfig::PRIMARY_SHORTCUTS_MENU).unwrap();
    assert_eq!(shortcuts.get(GestureCode::UP_LEFT).unwrap().label(), "Clock");

    // The legacy binding replaces the default one at the same gesture.
    let mail = shortcuts.get(GestureCode::UP).unwrap();
    assert_eq!(mail.label(), "Mail");
    assert_eq!(mail.app().unwrap().package_name(), "com.example.mail");

    // Untouched defaults stay.
    assert_eq!(shortcuts.get(GestureCode::CENTER).unwrap().label(), "Talking dialer");
    assert_eq!(
        shortcuts.get(GestureCode::EDGE_RIGHT).unwrap().link_target(),
        Some("Home")
    );
}

#[test]
fn test_unversioned_document_is_legacy() {
    let apps = registry(&["com.google.marvin.talkingdialer"]);
    let defaults = BundledDefaults::new();
    let loader = MenuLoader::new(&apps, &defaults);

    let graph = loader.try_load_menus(fixture_path("legacy_unversioned.xml")).unwrap();

    let shortcuts = graph.get(MenuConfig::PRIMARY_SHORTCUTS_MENU).unwrap();
    assert_eq!(shortcuts.get(GestureCode::UP_LEFT).unwrap().label(), "Clock");
    // The calculator is not installed, so the default binding survives.
    assert_eq!(shortcuts.get(GestureCode::CENTER).unwrap().label(), "Talking dialer");
    // The browser default is filtered as well.
    assert!(shortcuts.get(GestureCode::UP).is_none());
}

#[test]
fn test_migrated_graph_saves_as_current_format() {
    let apps = registry(&["com.example.mail"]);
    let defaults = BundledDefaults::new();
    let loader = MenuLoader::new(&apps, &defaults);

    let migrated = loader.try_load_menus(fixture_path("legacy_v00.xml")).unwrap();
    let xml = migrated.to_xml().unwrap();
    assert!(xml.contains(r#"<version number="0.1"/>"#));

    // Reloading uses the current path and must not migrate a second time.
    let reloaded = loader.try_load_menus_from_str(&xml).unwrap();
    assert_eq!(reloaded, migrated);
}

#[test]
fn test_malformed_document_degrades_to_empty() {
    let apps = InstalledApps::new();
    let defaults = BundledDefaults::new();
    let loader = MenuLoader::new(&apps, &defaults);

    let graph = loader.load_menus(fixture_path("malformed.xml"));
    assert!(graph.is_empty());

    let err = loader
        .try_load_menus(fixture_path("malformed.xml"))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);

    assert!(loader.load_menus_from_str("not xml at all").is_empty());
    assert!(loader.load_menus_from_reader(&b"<shell>"[..]).is_empty());
}

#[test]
fn test_missing_file_degrades_to_empty() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing.xml");
    let apps = InstalledApps::new();
    let defaults = BundledDefaults::new();
    let loader = MenuLoader::new(&apps, &defaults);

    assert!(loader.load_menus(&path).is_empty());
    assert_eq!(loader.try_load_menus(&path).unwrap_err().kind(), ErrorKind::Io);
}

#[test]
fn test_inserted_menus_persist() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("menus.xml");
    let apps = all_fixture_apps();
    let defaults = BundledDefaults::new();
    let loader = MenuLoader::new(&apps, &defaults);

    let mut graph = loader.try_load_menus(fixture_path("current.xml")).unwrap();
    let id = graph
        .insert_menu("Home", GestureCode::EDGE_LEFT, "Games")
        .unwrap();
    assert_eq!(id, "Games 2");
    assert!(graph.save(&path));

    let reloaded: MenuGraph = loader.try_load_menus(&path).unwrap();
    let link = |menu: &str, gesture: GestureCode| {
        reloaded
            .get(menu)
            .and_then(|m| m.get(gesture))
            .and_then(|item| item.link_target())
            .map(str::to_string)
    };

    assert_eq!(link("Home", GestureCode::EDGE_LEFT).as_deref(), Some("Games 2"));
    assert_eq!(link("Games 2", GestureCode::EDGE_RIGHT).as_deref(), Some("Home"));
    assert_eq!(link("Games 2", GestureCode::EDGE_LEFT).as_deref(), Some("Games"));
    assert_eq!(link("Games", GestureCode::EDGE_RIGHT).as_deref(), Some("Games 2"));
    assert_eq!(reloaded.get("Games 2").unwrap().name(), "Games");
}

#[test]
fn test_character_references_round_trip() {
    let apps = InstalledApps::new();
    let defaults = BundledDefaults::new();
    let loader = MenuLoader::new(&apps, &defaults);
    let xml = r#"<shell>
  <version number="0.1"/>
  <menu label="Notes">
    <item gesture="1" label="two&#10;lines&#9;tab" action="NOTE" data="a&#13;b"/>
  </menu>
</shell>"#;

    let original = loader.try_load_menus_from_str(xml).unwrap();
    let item = original.get("Notes").unwrap().get(GestureCode::UP_LEFT).unwrap();
    assert_eq!(item.label(), "two\nlines\ttab");
    assert_eq!(item.data(), Some("a\rb"));

    let reloaded = loader
        .try_load_menus_from_str(&original.to_xml().unwrap())
        .unwrap();
    assert_eq!(reloaded, original);
}
