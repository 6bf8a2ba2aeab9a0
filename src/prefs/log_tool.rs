//! Appearance and behavior of the engraving job log.

use std::rc::Rc;

use crate::{
    config::FontDescriptor,
    i18n::Translator,
    prefs::{
        controls::{FloatControl, FontChooser, Label, Toggle},
        field::{FontField, ToggleField},
        group::{PreferencesGroup, PreferencesPanel},
    },
};

/// Settings namespace of the log preferences.
pub const NAMESPACE: &str = "log";

pub const DEFAULT_FONT_FAMILY: &str = "monospace";
pub const DEFAULT_FONT_SIZE: f64 = 9.0;
pub const MIN_FONT_SIZE: f64 = 6.0;
pub const MAX_FONT_SIZE: f64 = 32.0;

/// Log font, and whether the log opens on job start and shows raw output.
pub struct LogTool {
    group: PreferencesGroup,
    pub font_label: Label,
    pub font_chooser: Rc<FontChooser>,
    pub font_size: Rc<FloatControl>,
    pub show_log: Rc<Toggle>,
    pub raw_view: Rc<Toggle>,
}

impl LogTool {
    /// Creates the log preferences.
    ///
    /// # Arguments
    ///
    /// * `font_families` - Installed font families offered by the chooser
    /// * `translator` - Translator for the display strings
    #[must_use]
    pub fn new(font_families: Vec<String>, translator: &dyn Translator) -> Self {
        let mut group = PreferencesGroup::new(NAMESPACE);

        let font_chooser = Rc::new(FontChooser::new(DEFAULT_FONT_FAMILY));
        font_chooser.set_families(font_families);
        let font_size = Rc::new(FloatControl::new(MIN_FONT_SIZE, MAX_FONT_SIZE, 0.5, 1));
        group.add_field(Rc::new(FontField::new(
            font_chooser.clone(),
            font_size.clone(),
            "fontfamily",
            "fontsize",
            FontDescriptor::new(DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE),
        )));

        let show_log = Rc::new(Toggle::new());
        group.add_field(Rc::new(ToggleField::new(
            show_log.clone(),
            "show_on_start",
            true,
        )));

        let raw_view = Rc::new(Toggle::new());
        group.add_field(Rc::new(ToggleField::new(raw_view.clone(), "rawview", true)));

        let tool = Self {
            group,
            font_label: Label::new(),
            font_chooser,
            font_size,
            show_log,
            raw_view,
        };
        tool.translate_ui(translator);
        tool
    }

    /// The font currently selected in the controls.
    #[must_use]
    pub fn font(&self) -> FontDescriptor {
        FontDescriptor::new(self.font_chooser.current_family(), self.font_size.value())
    }
}

impl PreferencesPanel for LogTool {
    fn group(&self) -> &PreferencesGroup {
        &self.group
    }

    fn translate_ui(&self, translator: &dyn Translator) {
        self.group.title.set_text(translator.gettext("LilyPond Log"));
        self.font_label.set_text(translator.gettext("Font:"));
        self.show_log
            .label
            .set_text(translator.gettext("Show log when a job is started"));
        self.raw_view
            .label
            .set_text(translator.gettext("Display plain log output"));
        self.raw_view.label.set_tooltip(translator.gettext(
            "If checked, Frescobaldi will not shorten filenames in the log output.",
        ));
    }
}
