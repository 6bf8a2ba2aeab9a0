//! Preference groups composed of field controllers.

use std::rc::Rc;

use tracing::debug;

use crate::{
    config::SettingsStore,
    i18n::Translator,
    prefs::{
        controls::Label,
        field::{ChangedHandler, Field},
        signal::Signal,
    },
};

/// A titled set of fields stored under one settings namespace.
pub struct PreferencesGroup {
    /// Group heading.
    pub title: Label,
    namespace: &'static str,
    fields: Vec<Rc<dyn Field>>,
    /// Fires whenever any field is edited.
    pub changed: Rc<Signal<()>>,
}

impl PreferencesGroup {
    /// Creates an empty group stored under `namespace`.
    #[must_use]
    pub fn new(namespace: &'static str) -> Self {
        Self {
            title: Label::new(),
            namespace,
            fields: Vec::new(),
            changed: Rc::new(Signal::new()),
        }
    }

    /// Adds a field and forwards its edits to [`PreferencesGroup::changed`].
    pub fn add_field(&mut self, field: Rc<dyn Field>) {
        let changed = self.changed.clone();
        let handler: ChangedHandler = Rc::new(move || changed.emit(&()));
        field.connect_changed(handler);
        self.fields.push(field);
    }

    /// Loads every field from the group's namespace.
    pub fn load(&self, store: &SettingsStore) {
        debug!("Loading preferences group {}", self.namespace);
        let settings = store.group(self.namespace);
        for field in &self.fields {
            field.load(&settings);
        }
    }

    /// Writes every field into the group's namespace.
    pub fn save(&self, store: &SettingsStore) {
        debug!("Saving preferences group {}", self.namespace);
        let settings = store.group(self.namespace);
        for field in &self.fields {
            field.save(&settings);
        }
    }
}

/// Lifecycle contract between a preferences page and its groups.
pub trait PreferencesPanel {
    /// The composed group backing this panel.
    fn group(&self) -> &PreferencesGroup;

    /// Sets every display string from `translator`.
    fn translate_ui(&self, translator: &dyn Translator);

    fn load_settings(&self, store: &SettingsStore) {
        self.group().load(store);
    }

    fn save_settings(&self, store: &SettingsStore) {
        self.group().save(store);
    }

    /// Registers `handler` for edits of any field in this panel.
    fn connect_changed(&self, handler: impl Fn() + 'static)
    where
        Self: Sized,
    {
        self.group().changed.connect(move |_| handler());
    }
}
