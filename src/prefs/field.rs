//! Field controllers binding controls to settings keys.
//!
//! A field owns the knowledge of which keys it reads and writes, how
//! stored values are coerced, and which control notifications count as a
//! user edit.

use std::rc::Rc;

use tracing::{debug, warn};

use crate::{
    config::{FontDescriptor, SettingValue, SettingsGroup},
    prefs::controls::{FloatControl, FontChooser, MirroredPair, Toggle},
};

/// Callback fired when a field is edited.
pub type ChangedHandler = Rc<dyn Fn()>;

/// Loads and saves one logical setting.
pub trait Field {
    /// Applies the stored value, or its default, to the controls.
    fn load(&self, settings: &SettingsGroup<'_>);

    /// Writes the current control value.
    fn save(&self, settings: &SettingsGroup<'_>);

    /// Registers `handler` for edits of this field.
    fn connect_changed(&self, handler: ChangedHandler);
}

/// Reads an integer, substituting `default` when absent or malformed.
pub fn read_int(settings: &SettingsGroup<'_>, key: &str, default: i64) -> i64 {
    match settings.value(key).map(|value| value.to_int()) {
        None => default,
        Some(Ok(value)) => value,
        Some(Err(e)) => {
            warn!("{}/{}: {}, using {}", settings.prefix(), key, e, default);
            default
        }
    }
}

/// Reads a float, substituting `default` when absent or malformed.
pub fn read_float(settings: &SettingsGroup<'_>, key: &str, default: f64) -> f64 {
    match settings.value(key).map(|value| value.to_float()) {
        None => default,
        Some(Ok(value)) => value,
        Some(Err(e)) => {
            warn!("{}/{}: {}, using {}", settings.prefix(), key, e, default);
            default
        }
    }
}

/// Reads a boolean. Only the stored false markers read as false; an
/// absent value reads as `default`.
pub fn read_bool(settings: &SettingsGroup<'_>, key: &str, default: bool) -> bool {
    settings
        .value(key)
        .map_or(default, |value| !value.is_false_marker())
}

/// Font family and point size, stored under two keys.
#[derive(Debug)]
pub struct FontField {
    pub chooser: Rc<FontChooser>,
    pub size: Rc<FloatControl>,
    family_key: &'static str,
    size_key: &'static str,
    default: FontDescriptor,
}

impl FontField {
    #[must_use]
    pub fn new(
        chooser: Rc<FontChooser>,
        size: Rc<FloatControl>,
        family_key: &'static str,
        size_key: &'static str,
        default: FontDescriptor,
    ) -> Self {
        Self {
            chooser,
            size,
            family_key,
            size_key,
            default,
        }
    }

    /// The font currently shown by the controls.
    #[must_use]
    pub fn current_font(&self) -> FontDescriptor {
        FontDescriptor::new(self.chooser.current_family(), self.size.value())
    }
}

impl Field for FontField {
    fn load(&self, settings: &SettingsGroup<'_>) {
        let family = match settings.value(self.family_key) {
            None => self.default.family.clone(),
            Some(SettingValue::Other(value)) => {
                warn!(
                    "{}/{}: {} is not a family name, using {}",
                    settings.prefix(),
                    self.family_key,
                    value,
                    self.default.family
                );
                self.default.family.clone()
            }
            Some(value) => value.to_text(),
        };
        let point_size = read_float(settings, self.size_key, self.default.point_size);
        let font = FontDescriptor::new(family, point_size);
        debug!("{}: Loaded font {}", settings.prefix(), font);

        let _chooser_blocker = self.chooser.current_font_changed.block();
        let _size_blocker = self.size.value_changed.block();
        self.chooser.set_current_font(&font);
        self.size.set_value(font.point_size);
    }

    fn save(&self, settings: &SettingsGroup<'_>) {
        let font = self.current_font();
        settings.set_value(self.family_key, font.family);
        settings.set_value(self.size_key, font.point_size);
    }

    fn connect_changed(&self, handler: ChangedHandler) {
        let on_family = handler.clone();
        self.chooser
            .current_font_changed
            .connect(move |_| on_family());
        self.size.value_changed.connect(move |_| handler());
    }
}

/// One boolean setting shown as a toggle.
#[derive(Debug)]
pub struct ToggleField {
    pub toggle: Rc<Toggle>,
    key: &'static str,
    default: bool,
}

impl ToggleField {
    #[must_use]
    pub fn new(toggle: Rc<Toggle>, key: &'static str, default: bool) -> Self {
        Self {
            toggle,
            key,
            default,
        }
    }
}

impl Field for ToggleField {
    fn load(&self, settings: &SettingsGroup<'_>) {
        let checked = read_bool(settings, self.key, self.default);

        let _blocker = self.toggle.toggled.block();
        self.toggle.set_checked(checked);
    }

    fn save(&self, settings: &SettingsGroup<'_>) {
        settings.set_value(self.key, SettingValue::Bool(self.toggle.is_checked()));
    }

    fn connect_changed(&self, handler: ChangedHandler) {
        self.toggle.toggled.connect(move |_| handler());
    }
}

/// One integer setting shown as a slider mirrored by a spin box.
///
/// Loading assigns the slider, which mirrors onto the spin box. Only the
/// slider counts as an edit; spin box edits reach it through mirroring.
#[derive(Debug)]
pub struct MirroredPairField {
    pub pair: Rc<MirroredPair>,
    key: &'static str,
    default: i64,
}

impl MirroredPairField {
    #[must_use]
    pub fn new(pair: Rc<MirroredPair>, key: &'static str, default: i64) -> Self {
        Self { pair, key, default }
    }
}

impl Field for MirroredPairField {
    fn load(&self, settings: &SettingsGroup<'_>) {
        self.pair
            .slider
            .set_value(read_int(settings, self.key, self.default));
    }

    fn save(&self, settings: &SettingsGroup<'_>) {
        settings.set_value(self.key, self.pair.slider.value());
    }

    fn connect_changed(&self, handler: ChangedHandler) {
        self.pair.slider.value_changed.connect(move |_| handler());
    }
}
