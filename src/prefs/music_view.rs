//! Magnifier glass of the music view.

use std::rc::Rc;

use crate::{
    i18n::Translator,
    prefs::{
        controls::{Label, MirroredPair},
        field::MirroredPairField,
        group::{PreferencesGroup, PreferencesPanel},
    },
};

/// Settings namespace of the magnifier preferences.
pub const NAMESPACE: &str = "musicview/magnifier";

pub const DEFAULT_MAGNIFIER_SIZE: i64 = 300;
pub const MIN_MAGNIFIER_SIZE: i64 = 200;
pub const MAX_MAGNIFIER_SIZE: i64 = 800;

pub const DEFAULT_MAGNIFIER_SCALE: i64 = 300;
pub const MIN_MAGNIFIER_SCALE: i64 = 200;
pub const MAX_MAGNIFIER_SCALE: i64 = 500;

const SLIDER_STEP: i64 = 50;

/// Magnifier size in pixels and magnification in percent.
pub struct MusicView {
    group: PreferencesGroup,
    pub size_label: Label,
    pub size: Rc<MirroredPair>,
    pub scale_label: Label,
    pub scale: Rc<MirroredPair>,
}

impl MusicView {
    /// Creates the magnifier preferences.
    #[must_use]
    pub fn new(translator: &dyn Translator) -> Self {
        let mut group = PreferencesGroup::new(NAMESPACE);

        let size = Rc::new(MirroredPair::new(
            MIN_MAGNIFIER_SIZE,
            MAX_MAGNIFIER_SIZE,
            SLIDER_STEP,
        ));
        group.add_field(Rc::new(MirroredPairField::new(
            size.clone(),
            "size",
            DEFAULT_MAGNIFIER_SIZE,
        )));

        let scale = Rc::new(MirroredPair::new(
            MIN_MAGNIFIER_SCALE,
            MAX_MAGNIFIER_SCALE,
            SLIDER_STEP,
        ));
        group.add_field(Rc::new(MirroredPairField::new(
            scale.clone(),
            "scale",
            DEFAULT_MAGNIFIER_SCALE,
        )));

        let view = Self {
            group,
            size_label: Label::new(),
            size,
            scale_label: Label::new(),
            scale,
        };
        view.translate_ui(translator);
        view
    }
}

impl PreferencesPanel for MusicView {
    fn group(&self) -> &PreferencesGroup {
        &self.group
    }

    fn translate_ui(&self, translator: &dyn Translator) {
        self.group.title.set_text(translator.gettext("Music View"));

        self.size_label
            .set_text(translator.gettext("Magnifier Size:"));
        self.size_label.set_tooltip(
            translator
                .gettext(
                    "Size of the magnifier glass (Ctrl+Click in the Music View)\n\
                     (ranging from {min} to {max} pixels).",
                )
                .replace("{min}", &MIN_MAGNIFIER_SIZE.to_string())
                .replace("{max}", &MAX_MAGNIFIER_SIZE.to_string()),
        );
        // Leading space separates the unit from the number.
        self.size.spin_box.set_suffix(translator.gettext(" pixels"));

        self.scale_label
            .set_text(translator.gettext("Magnifier Scale:"));
        self.scale_label.set_tooltip(
            translator
                .gettext("Magnification of the magnifier\n(ranging from {min} to {max} percent).")
                .replace("{min}", &MIN_MAGNIFIER_SCALE.to_string())
                .replace("{max}", &MAX_MAGNIFIER_SCALE.to_string()),
        );
        self.scale
            .spin_box
            .set_suffix(translator.pgettext("percent unit sign", "%"));
    }
}
