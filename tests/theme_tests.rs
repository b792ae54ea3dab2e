// Integration tests for the theme layer: luminance, contrast palettes,
// override reconciliation, and preference round-trips.

use ratatui::style::Color;

use tinkerbox::prefs::{Prefs, PrefsStore};
use tinkerbox::theme::{
    contrast_palette, luminance_from_hex, ThemeManager, ThemeName, DARK_BG_CONTRAST,
    LIGHT_BG_CONTRAST,
};

/// Fresh store under the system temp dir, isolated per test.
fn temp_store(tag: &str) -> PrefsStore {
    let dir = std::env::temp_dir().join(format!("tinkerbox-test-{}-{}", tag, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    PrefsStore::new(dir)
}

#[test]
fn test_luminance_extremes() {
    assert!((luminance_from_hex("#ffffff") - 1.0).abs() < 1e-6);
    assert!(luminance_from_hex("#000000").abs() < 1e-6);
}

#[test]
fn test_luminance_boundary_is_exclusive_on_the_light_side() {
    // 128/255 is just above 0.5, 127/255 just below
    assert!(luminance_from_hex("#808080") > 0.5);
    assert!(luminance_from_hex("#7f7f7f") <= 0.5);
    assert_eq!(contrast_palette("#808080"), LIGHT_BG_CONTRAST);
    assert_eq!(contrast_palette("#7f7f7f"), DARK_BG_CONTRAST);
}

#[test]
fn test_malformed_colors_degrade_to_dark() {
    // The multibyte inputs put a non-ASCII character across a channel
    // boundary; slicing must degrade, not panic
    for bad in [
        "",
        "112233",
        "#12",
        "#gggggg",
        "ffffff",
        "#",
        "#\u{fb00}aaaaa",
        "#ab\u{e9}cde",
    ] {
        assert_eq!(luminance_from_hex(bad), 0.0, "input {:?}", bad);
        assert_eq!(contrast_palette(bad), DARK_BG_CONTRAST, "input {:?}", bad);
    }
}

#[test]
fn test_multibyte_custom_color_does_not_abort_startup() {
    // A hand-edited prefs file with a non-ASCII color must still
    // initialize, rendering the dark contrast set over black
    let store = temp_store("multibyte-color");
    std::fs::create_dir_all(store.dir()).expect("mkdir failed");
    std::fs::write(
        store.dir().join("prefs.toml"),
        "theme = \"dark\"\ncustom_bg = \"#\u{fb00}aaaaa\"\n",
    )
    .expect("write failed");

    let prefs = store.load().expect("load failed");
    let mgr = ThemeManager::from_prefs(prefs, store);
    assert_eq!(mgr.overrides().len(), 8);
    assert_eq!(mgr.resolved().bg, Color::Rgb(0, 0, 0));
    assert_eq!(mgr.resolved().text, Color::Rgb(255, 255, 255));
}

#[test]
fn test_contrast_palette_is_pure() {
    let first = contrast_palette("#3366aa");
    // Interleave other inputs; the original input must map identically
    let _ = contrast_palette("#ffffff");
    let _ = contrast_palette("not a color");
    assert_eq!(contrast_palette("#3366aa"), first);
}

#[test]
fn test_white_gives_light_set_and_black_gives_dark_set() {
    let light = contrast_palette("#ffffff");
    assert_eq!(light.text, Color::Rgb(0, 0, 0));
    assert_eq!(light.button_bg, Color::Rgb(221, 221, 221)); // #dddddd

    let dark = contrast_palette("#000000");
    assert_eq!(dark.text, Color::Rgb(255, 255, 255));
    assert_eq!(dark.code_text, Color::Rgb(0, 255, 136)); // #00ff88
}

#[test]
fn test_apply_theme_without_custom_color_clears_all_overrides() {
    let store = temp_store("clear-overrides");
    let mut mgr = ThemeManager::from_prefs(
        Prefs {
            theme: ThemeName::Dark,
            custom_bg: Some(String::from("#aabbcc")),
        },
        store,
    );
    assert_eq!(mgr.overrides().len(), 8, "custom color should set all eight");

    // Escaping the custom color must remove every override so the
    // named theme's own colors take effect
    mgr.toggle();
    assert!(mgr.overrides().is_empty());
    assert_eq!(mgr.resolved(), tinkerbox::theme::DARK_PALETTE);
}

#[test]
fn test_toggle_with_custom_color_escapes_to_dark() {
    let store = temp_store("toggle-escape");
    let mut mgr = ThemeManager::from_prefs(Prefs::default(), store.clone());
    mgr.apply_theme(ThemeName::Light);
    mgr.set_custom_color(String::from("#112233"));
    assert_eq!(mgr.active(), ThemeName::Light, "picker must not change the name");

    mgr.toggle();
    assert_eq!(mgr.active(), ThemeName::Dark);
    assert_eq!(mgr.custom_bg(), None);

    // The persisted file must agree: dark theme, color key deleted
    let reloaded = store.load().expect("reload failed");
    assert_eq!(reloaded.theme, ThemeName::Dark);
    assert_eq!(reloaded.custom_bg, None);
}

#[test]
fn test_toggle_without_custom_color_flips_between_two_themes() {
    let store = temp_store("toggle-flip");
    let mut mgr = ThemeManager::from_prefs(Prefs::default(), store);
    assert_eq!(mgr.active(), ThemeName::Dark);
    mgr.toggle();
    assert_eq!(mgr.active(), ThemeName::Light);
    mgr.toggle();
    assert_eq!(mgr.active(), ThemeName::Dark);
}

#[test]
fn test_custom_color_round_trip_reproduces_resolved_palette() {
    let store = temp_store("round-trip");

    let mut mgr = ThemeManager::from_prefs(Prefs::default(), store.clone());
    mgr.set_custom_color(String::from("#ffffff"));
    let before = mgr.resolved();
    assert_eq!(before.bg, Color::Rgb(255, 255, 255));
    assert_eq!(before.text, Color::Rgb(0, 0, 0));
    drop(mgr);

    // Simulated reload: re-initialize purely from persisted state
    let prefs = store.load().expect("reload failed");
    let mgr = ThemeManager::from_prefs(prefs, store);
    assert_eq!(mgr.custom_bg(), Some("#ffffff"));
    assert_eq!(mgr.resolved(), before);
}

#[test]
fn test_missing_prefs_file_defaults_to_dark() {
    let store = temp_store("defaults");
    let prefs = store.load().expect("load failed");
    assert_eq!(prefs.theme, ThemeName::Dark);
    assert_eq!(prefs.custom_bg, None);
}

#[test]
fn test_unknown_stored_theme_name_falls_back_to_dark() {
    let store = temp_store("unknown-name");
    std::fs::create_dir_all(store.dir()).expect("mkdir failed");
    std::fs::write(store.dir().join("prefs.toml"), "theme = \"sepia\"\n")
        .expect("write failed");
    let prefs = store.load().expect("load failed");
    assert_eq!(prefs.theme, ThemeName::Dark);
}
