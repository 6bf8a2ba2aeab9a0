//! Main preferences dialog implementation.
//!
//! This module implements the `PreferencesDialog`, which loads the Tools
//! page from the settings store when opened and saves it when closed with
//! unsaved edits.

use std::{rc::Rc, sync::Arc};

use {
    libadwaita::{
        ApplicationWindow, PreferencesDialog as LibadwaitaPreferencesDialog,
        glib::spawn_future_local,
        prelude::{AdwDialogExt, ObjectExt, PreferencesDialogExt},
    },
    tracing::debug,
};

use crate::{
    config::SettingsStore,
    error::ErrorReporter,
    i18n::Translator,
    prefs::{PageEvent, ToolsPage},
    ui::preferences::{ToolsPreferencesPage, utils::installed_font_families},
};

/// Preferences dialog hosting the Tools page.
pub struct PreferencesDialog {
    /// The underlying Libadwaita preferences dialog widget.
    pub widget: LibadwaitaPreferencesDialog,
    /// Page model shared with the close handler.
    pub page: Rc<ToolsPage>,
}

impl PreferencesDialog {
    /// Creates the dialog and loads the current settings into it.
    ///
    /// # Arguments
    ///
    /// * `store` - Settings store to load from and save to
    /// * `translator` - Translator for the display strings
    ///
    /// # Returns
    ///
    /// A new `PreferencesDialog` instance.
    pub fn new(store: Arc<SettingsStore>, translator: &dyn Translator) -> Self {
        let widget = LibadwaitaPreferencesDialog::builder().build();
        widget.set_content_width(640);
        widget.set_content_height(480);

        let title = translator.gettext("Preferences");
        widget.set_title(&title);

        // Load before binding so the widgets start from stored values
        let page = Rc::new(ToolsPage::new(installed_font_families(&widget), translator));
        page.load_settings(&store);

        let tools_page = ToolsPreferencesPage::new(page.clone());
        widget.add(&tools_page.widget);

        Self::track_unsaved_changes(&widget, &page, title);

        // Closing is the confirmation: save only when something was edited
        let close_page = page.clone();
        widget.connect_closed(move |_| {
            if !close_page.is_changed() {
                debug!("PreferencesDialog: Closed without changes");
                return;
            }

            // A failed save leaves the page dirty
            if let Err(e) = close_page.save_settings(&store) {
                ErrorReporter::error(e, "Saving preferences");
            }
        });

        debug!("PreferencesDialog: Created");

        Self { widget, page }
    }

    /// Marks the dialog title while the page has unsaved edits.
    fn track_unsaved_changes(
        widget: &LibadwaitaPreferencesDialog,
        page: &ToolsPage,
        title: String,
    ) {
        let events = page.subscribe();
        let weak_widget = widget.downgrade();

        spawn_future_local(async move {
            while let Ok(event) = events.recv().await {
                // Stop listening once the dialog is gone
                let Some(widget) = weak_widget.upgrade() else {
                    break;
                };

                match event {
                    PageEvent::Changed => widget.set_title(&format!("{title} *")),
                    PageEvent::Loaded | PageEvent::Saved => widget.set_title(&title),
                }
            }
        });
    }

    /// Shows the preferences dialog with a parent window.
    ///
    /// # Arguments
    ///
    /// * `parent` - Parent window widget for proper modal behavior
    pub fn show(&self, parent: &ApplicationWindow) {
        debug!("PreferencesDialog: Showing dialog with parent");
        self.widget.present(Some(parent));
    }
}
