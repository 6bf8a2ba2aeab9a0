//! Tests for preferences dialog functionality.
//!
//! These build real widgets and need a display, so they are ignored by
//! default. Run them with `--ignored` inside a desktop session.

use std::{rc::Rc, sync::Arc};

use {
    libadwaita::prelude::{PreferencesPageExt, PreferencesRowExt, RangeExt},
    tempfile::TempDir,
};

use crate::{
    config::SettingsStore,
    i18n::{Catalog, Untranslated},
    prefs::ToolsPage,
    ui::preferences::{
        PreferencesDialog, ToolsPreferencesPage,
        utils::{bind_row_label, int_slider, int_spin_button, suffix_label},
    },
};

fn init_gtk() {
    let _ = libadwaita::init();
}

#[test]
#[ignore = "Requires GTK display for UI testing"]
fn test_tools_preferences_page_creation() {
    init_gtk();
    let page = Rc::new(ToolsPage::new(vec!["Monospace".to_string()], &Untranslated));

    let view = ToolsPreferencesPage::new(page);

    assert_eq!(view.widget.title(), "Tools");
}

#[test]
#[ignore = "Requires GTK display for UI testing"]
fn test_widgets_follow_retranslation() {
    init_gtk();
    let catalog = Catalog::from_json(
        r#"{
            "Tools": "Werkzeuge",
            "Font:": "Schrift:",
            " pixels": " Pixel"
        }"#,
    )
    .unwrap();
    let page = Rc::new(ToolsPage::new(Vec::new(), &Untranslated));
    let view = ToolsPreferencesPage::new(page.clone());
    let font_row = libadwaita::ActionRow::new();
    bind_row_label(&font_row, &page.log_tool.font_label);
    let pixels = suffix_label(&page.music_view.size.spin_box);
    assert_eq!(pixels.text(), "pixels");

    page.translate_ui(&catalog);

    assert_eq!(view.widget.title(), "Werkzeuge");
    assert_eq!(font_row.title(), "Schrift:");
    assert_eq!(pixels.text(), "Pixel");
}

#[test]
#[ignore = "Requires GTK display for UI testing"]
fn test_slider_and_spin_button_follow_model() {
    init_gtk();
    let page = ToolsPage::new(Vec::new(), &Untranslated);
    let size = &page.music_view.size;
    let slider = int_slider(&size.slider);
    let spin_button = int_spin_button(&size.spin_box);

    size.slider.set_value(650);
    assert_eq!(slider.value(), 650.0);
    assert_eq!(spin_button.value_as_int(), 650);

    spin_button.set_value(250.0);
    assert_eq!(size.slider.value(), 250);
    assert_eq!(slider.value(), 250.0);
}

#[test]
#[ignore = "Requires GTK display for UI testing"]
fn test_preferences_dialog_loads_store() {
    init_gtk();
    let temp_dir = TempDir::new().unwrap();
    let store = SettingsStore::with_config_path(temp_dir.path().join("settings.json")).unwrap();
    store.set_value("musicview/magnifier/size", 600_i64);
    let store = Arc::new(store);

    let dialog = PreferencesDialog::new(store, &Untranslated);

    assert_eq!(dialog.page.music_view.size.value(), 600);
    assert!(!dialog.page.is_changed());
}
