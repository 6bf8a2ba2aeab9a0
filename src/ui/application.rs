//! Main application window.
//!
//! This module implements the `NotaprefsApplication`, a minimal window from
//! which the preferences dialog is opened.

use std::sync::Arc;

use {
    libadwaita::{
        Application, ApplicationWindow, StatusPage,
        glib::ExitCode,
        gtk::{Align::Center, Button},
        prelude::{ApplicationExt, ApplicationExtManual, ButtonExt, GtkWindowExt, ObjectExt},
    },
    tracing::debug,
};

use crate::{
    config::SettingsStore,
    i18n::active_translator,
    ui::PreferencesDialog,
};

/// Application identifier registered with the session bus.
pub const APPLICATION_ID: &str = "org.notaprefs.Notaprefs";

/// Main application class with window management.
pub struct NotaprefsApplication {
    /// The main application instance.
    pub app: Application,
    /// Settings store shared with every preferences dialog.
    pub store: Arc<SettingsStore>,
}

impl NotaprefsApplication {
    /// Creates the application.
    ///
    /// # Arguments
    ///
    /// * `store` - Settings store to edit
    ///
    /// # Returns
    ///
    /// A new `NotaprefsApplication` instance.
    pub fn new(store: Arc<SettingsStore>) -> Self {
        let app = Application::builder().application_id(APPLICATION_ID).build();

        let activate_store = store.clone();
        app.connect_activate(move |app| build_window(app, activate_store.clone()));

        Self { app, store }
    }

    /// Runs the GTK main loop until the last window closes.
    pub fn run(&self) -> ExitCode {
        self.app.run()
    }
}

fn build_window(app: &Application, store: Arc<SettingsStore>) {
    let translator = active_translator();

    let button = Button::builder()
        .label(translator.gettext("Preferences"))
        .halign(Center)
        .css_classes(vec!["pill".to_string(), "suggested-action".to_string()])
        .build();

    let status_page = StatusPage::builder()
        .title("Notaprefs")
        .icon_name("applications-utilities-symbolic")
        .child(&button)
        .build();

    let window = ApplicationWindow::builder()
        .application(app)
        .title("Notaprefs")
        .default_width(640)
        .default_height(480)
        .content(&status_page)
        .build();

    let weak_window = window.downgrade();
    button.connect_clicked(move |_| {
        let Some(window) = weak_window.upgrade() else {
            return;
        };

        let translator = active_translator();
        let dialog = PreferencesDialog::new(store.clone(), translator.as_ref());
        dialog.show(&window);
    });

    debug!("NotaprefsApplication: Main window created");
    window.present();
}
