use super::*;
use super::Node::{Namespace, Text};

#[test]
fn node_get_walks_nested_namespaces() {
    static TREE: Node = Namespace(&[
        ("title", Text("Title")),
        ("menu", Namespace(&[("open", Text("Open"))])),
    ]);
    assert_eq!(TREE.get("title"), Some("Title"));
    assert_eq!(TREE.get("menu.open"), Some("Open"));
    assert_eq!(TREE.get("menu.close"), None);
    assert_eq!(TREE.get("missing"), None);
}

#[test]
fn node_get_requires_a_full_path_to_a_leaf() {
    static TREE: Node = Namespace(&[("menu", Namespace(&[("open", Text("Open"))]))]);
    // Stops on a namespace.
    assert_eq!(TREE.get("menu"), None);
    // Descends through a leaf.
    assert_eq!(TREE.get("menu.open.extra"), None);
    assert_eq!(TREE.get(""), None);
    assert_eq!(TREE.get("menu."), None);
}

#[test]
fn key_paths_are_dot_joined_in_table_order() {
    static TREE: Node = Namespace(&[
        ("title", Text("Title")),
        ("menu", Namespace(&[("open", Text("Open")), ("close", Text("Close"))])),
    ]);
    assert_eq!(TREE.key_paths(), vec!["title", "menu.open", "menu.close"]);
}

#[test]
fn resolve_returns_pinned_control_labels() {
    let catalog = Catalog::bundled();
    assert_eq!(
        catalog.resolve("en", "controls.gravity").unwrap(),
        "Gravity (m/s²)"
    );
    assert_eq!(
        catalog.resolve("uk", "controls.gravity").unwrap(),
        "Прискорення (м/с²)"
    );
    assert_eq!(catalog.resolve("en", "controls.vacuum").unwrap(), "Vacuum Mode");
    assert_eq!(
        catalog.resolve("uk", "controls.vacuum").unwrap(),
        "Режим вакууму"
    );
}

#[test]
fn every_english_key_resolves_for_every_locale() {
    let catalog = Catalog::bundled();
    let (_, reference) = messages::BUNDLED[0];
    for &locale in Locale::ALL {
        for path in reference.key_paths() {
            let text = catalog.resolve_locale(locale, &path).unwrap();
            assert!(!text.is_empty(), "empty text at {path} for {locale:?}");
        }
    }
}

#[test]
fn unknown_tag_is_rejected() {
    let catalog = Catalog::bundled();
    assert_eq!(
        catalog.resolve("fr", "appTitle"),
        Err(I18nError::UnsupportedLocale("fr".to_string()))
    );
}

#[test]
fn key_missing_everywhere_is_an_error() {
    let catalog = Catalog::bundled();
    assert_eq!(
        catalog.resolve_locale(Locale::Uk, "controls.spin"),
        Err(I18nError::MissingTranslation {
            locale: Locale::Uk,
            key: "controls.spin".to_string(),
        })
    );
}

#[test]
fn supported_locales_lists_en_and_uk() {
    let catalog = Catalog::bundled();
    assert_eq!(catalog.supported_locales(), vec![Locale::En, Locale::Uk]);
    assert_eq!(catalog.fallback(), Locale::En);
}

#[test]
fn bundled_locales_have_no_missing_keys() {
    let catalog = Catalog::bundled();
    for &locale in Locale::ALL {
        assert_eq!(catalog.missing_keys(locale), Vec::<String>::new());
    }
}

// A uk tree from before the vacuum controls landed; en already carries
// them. Models the window between adding a key and translating it.
static EN_CURRENT: Node = Namespace(&[
    ("appTitle", Text("Ball Simulation")),
    (
        "controls",
        Namespace(&[
            ("gravity", Text("Gravity (m/s²)")),
            ("vacuum", Text("Vacuum Mode")),
            ("vacuumInfo", Text("In vacuum mode, air resistance is disabled.")),
        ]),
    ),
]);

static UK_STALE: Node = Namespace(&[
    ("appTitle", Text("Симуляція м'ячика")),
    ("controls", Namespace(&[("gravity", Text("Прискорення (м/с²)"))])),
]);

static STALE_ENTRIES: &[(Locale, &Node)] =
    &[(Locale::En, &EN_CURRENT), (Locale::Uk, &UK_STALE)];

#[test]
fn untranslated_keys_fall_back_to_english() {
    let catalog = Catalog::with_entries(STALE_ENTRIES, Locale::En);
    // Keys the uk tree already has are served from it.
    assert_eq!(
        catalog.resolve("uk", "controls.gravity").unwrap(),
        "Прискорення (м/с²)"
    );
    // Keys added after the uk table was last touched come from en.
    assert_eq!(catalog.resolve("uk", "controls.vacuum").unwrap(), "Vacuum Mode");
}

#[test]
fn missing_keys_reports_untranslated_paths() {
    let catalog = Catalog::with_entries(STALE_ENTRIES, Locale::En);
    assert_eq!(
        catalog.missing_keys(Locale::Uk),
        vec!["controls.vacuum", "controls.vacuumInfo"]
    );
    assert_eq!(catalog.missing_keys(Locale::En), Vec::<String>::new());
}

#[test]
fn locale_without_a_tree_resolves_entirely_via_fallback() {
    static EN_ONLY: &[(Locale, &Node)] = &[(Locale::En, &EN_CURRENT)];
    let catalog = Catalog::with_entries(EN_ONLY, Locale::En);
    assert_eq!(catalog.supported_locales(), vec![Locale::En]);
    assert_eq!(
        catalog.resolve_locale(Locale::Uk, "appTitle").unwrap(),
        "Ball Simulation"
    );
}
