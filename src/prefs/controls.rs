//! Toolkit-independent preference controls.
//!
//! Every control keeps its own value inside its configured range and
//! exposes two signals:
//!
//! * `value_changed` fires when the value actually changes and may be
//!   blocked, e.g. while settings are being loaded.
//! * `notify` fires on every change and is never blocked. The view layer
//!   uses it to keep the widget on screen in step with the model.

use std::{
    cell::{Cell, RefCell},
    rc::{Rc, Weak},
};

use crate::{config::FontDescriptor, prefs::signal::Signal};

/// Display text and tooltip of a label or captioned control.
#[derive(Debug, Default)]
pub struct Label {
    text: RefCell<String>,
    tooltip: RefCell<Option<String>>,
    /// Fires with the new text after every change.
    pub text_changed: Signal<String>,
    /// Fires with the new tooltip after every change.
    pub tooltip_changed: Signal<Option<String>>,
}

impl Label {
    /// Creates an empty label.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.text.borrow().clone()
    }

    pub fn set_text(&self, text: impl Into<String>) {
        let text = text.into();
        if *self.text.borrow() == text {
            return;
        }

        self.text.replace(text.clone());
        self.text_changed.emit(&text);
    }

    #[must_use]
    pub fn tooltip(&self) -> Option<String> {
        self.tooltip.borrow().clone()
    }

    pub fn set_tooltip(&self, tooltip: impl Into<String>) {
        let tooltip = Some(tooltip.into());
        if *self.tooltip.borrow() == tooltip {
            return;
        }

        self.tooltip.replace(tooltip.clone());
        self.tooltip_changed.emit(&tooltip);
    }
}

/// An integer control with an inclusive range, used for sliders and
/// spin boxes alike.
#[derive(Debug)]
pub struct IntControl {
    value: Cell<i64>,
    min: i64,
    max: i64,
    single_step: i64,
    suffix: RefCell<String>,
    /// Fires after the value changed, unless blocked.
    pub value_changed: Signal<i64>,
    /// Fires after every change.
    pub notify: Signal<i64>,
    /// Fires with the new suffix after every change.
    pub suffix_changed: Signal<String>,
}

impl IntControl {
    /// Creates a control starting at `min`.
    ///
    /// # Arguments
    ///
    /// * `min` - Smallest accepted value
    /// * `max` - Largest accepted value, must not be below `min`
    /// * `single_step` - Increment used by [`IntControl::step_by`]
    #[must_use]
    pub fn new(min: i64, max: i64, single_step: i64) -> Self {
        debug_assert!(min <= max, "empty range {min}..={max}");
        Self {
            value: Cell::new(min),
            min,
            max,
            single_step,
            suffix: RefCell::new(String::new()),
            value_changed: Signal::new(),
            notify: Signal::new(),
            suffix_changed: Signal::new(),
        }
    }

    #[must_use]
    pub fn value(&self) -> i64 {
        self.value.get()
    }

    /// Sets the value, clamped into range. Emits only on an actual change.
    pub fn set_value(&self, value: i64) {
        let value = value.clamp(self.min, self.max);
        if value == self.value.get() {
            return;
        }

        self.value.set(value);
        self.notify.emit(&value);
        self.value_changed.emit(&value);
    }

    /// Moves the value by `steps` single steps.
    pub fn step_by(&self, steps: i64) {
        self.set_value(
            self.value
                .get()
                .saturating_add(steps.saturating_mul(self.single_step)),
        );
    }

    #[must_use]
    pub fn range(&self) -> (i64, i64) {
        (self.min, self.max)
    }

    #[must_use]
    pub fn single_step(&self) -> i64 {
        self.single_step
    }

    /// Unit text displayed after the number, e.g. `" pixels"`.
    #[must_use]
    pub fn suffix(&self) -> String {
        self.suffix.borrow().clone()
    }

    pub fn set_suffix(&self, suffix: impl Into<String>) {
        let suffix = suffix.into();
        if *self.suffix.borrow() == suffix {
            return;
        }

        self.suffix.replace(suffix.clone());
        self.suffix_changed.emit(&suffix);
    }
}

/// A fractional control that rounds to a fixed number of decimals.
#[derive(Debug)]
pub struct FloatControl {
    value: Cell<f64>,
    min: f64,
    max: f64,
    single_step: f64,
    decimals: u32,
    /// Fires after the value changed, unless blocked.
    pub value_changed: Signal<f64>,
    /// Fires after every change.
    pub notify: Signal<f64>,
}

impl FloatControl {
    /// Creates a control starting at `min`.
    #[must_use]
    pub fn new(min: f64, max: f64, single_step: f64, decimals: u32) -> Self {
        debug_assert!(min <= max, "empty range {min}..={max}");
        Self {
            value: Cell::new(min),
            min,
            max,
            single_step,
            decimals,
            value_changed: Signal::new(),
            notify: Signal::new(),
        }
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.value.get()
    }

    /// Sets the value, rounded to the configured decimals and clamped into
    /// range. Non-finite input is ignored.
    pub fn set_value(&self, value: f64) {
        if !value.is_finite() {
            return;
        }

        let scale = 10_f64.powi(self.decimals as i32);
        let value = ((value * scale).round() / scale).clamp(self.min, self.max);
        if value == self.value.get() {
            return;
        }

        self.value.set(value);
        self.notify.emit(&value);
        self.value_changed.emit(&value);
    }

    /// Moves the value by `steps` single steps.
    pub fn step_by(&self, steps: i32) {
        self.set_value(self.value.get() + f64::from(steps) * self.single_step);
    }

    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    #[must_use]
    pub fn single_step(&self) -> f64 {
        self.single_step
    }

    #[must_use]
    pub fn decimals(&self) -> u32 {
        self.decimals
    }
}

/// A captioned on/off control.
#[derive(Debug, Default)]
pub struct Toggle {
    checked: Cell<bool>,
    /// Caption and tooltip.
    pub label: Label,
    /// Fires after the state changed, unless blocked.
    pub toggled: Signal<bool>,
    /// Fires after every change.
    pub notify: Signal<bool>,
}

impl Toggle {
    /// Creates an unchecked toggle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_checked(&self) -> bool {
        self.checked.get()
    }

    pub fn set_checked(&self, checked: bool) {
        if checked == self.checked.get() {
            return;
        }

        self.checked.set(checked);
        self.notify.emit(&checked);
        self.toggled.emit(&checked);
    }
}

/// Picks a font family from the families installed on the system.
#[derive(Debug)]
pub struct FontChooser {
    family: RefCell<String>,
    families: RefCell<Vec<String>>,
    /// Fires with the new family after it changed, unless blocked.
    pub current_font_changed: Signal<String>,
    /// Fires after every change.
    pub notify: Signal<String>,
}

impl FontChooser {
    /// Creates a chooser that currently shows `family`.
    #[must_use]
    pub fn new(family: impl Into<String>) -> Self {
        Self {
            family: RefCell::new(family.into()),
            families: RefCell::new(Vec::new()),
            current_font_changed: Signal::new(),
            notify: Signal::new(),
        }
    }

    /// Replaces the list of installed families offered to the user.
    pub fn set_families(&self, families: Vec<String>) {
        *self.families.borrow_mut() = families;
    }

    #[must_use]
    pub fn families(&self) -> Vec<String> {
        self.families.borrow().clone()
    }

    /// The currently selected family.
    #[must_use]
    pub fn current_family(&self) -> String {
        self.family.borrow().clone()
    }

    /// Selects the family of `font`.
    pub fn set_current_font(&self, font: &FontDescriptor) {
        self.set_current_family(&font.family);
    }

    /// Selects `family`.
    ///
    /// A case-insensitive match against the installed families selects
    /// the installed spelling. Unknown families are kept verbatim and left
    /// to font substitution at render time.
    pub fn set_current_family(&self, family: &str) {
        let family = self
            .families
            .borrow()
            .iter()
            .find(|installed| installed.eq_ignore_ascii_case(family))
            .cloned()
            .unwrap_or_else(|| family.to_string());

        if *self.family.borrow() == family {
            return;
        }

        *self.family.borrow_mut() = family.clone();
        self.notify.emit(&family);
        self.current_font_changed.emit(&family);
    }
}

/// A slider and a spin box kept at the same value.
///
/// Setting either member mirrors the value onto the other. Mirroring
/// stops as soon as both hold the same value, so it never loops.
#[derive(Debug)]
pub struct MirroredPair {
    pub slider: Rc<IntControl>,
    pub spin_box: Rc<IntControl>,
}

impl MirroredPair {
    /// Creates both members over the same range and links them.
    #[must_use]
    pub fn new(min: i64, max: i64, single_step: i64) -> Self {
        let slider = Rc::new(IntControl::new(min, max, single_step));
        let spin_box = Rc::new(IntControl::new(min, max, 1));

        mirror_onto(&slider, &spin_box);
        mirror_onto(&spin_box, &slider);

        Self { slider, spin_box }
    }

    /// The shared value of both members.
    #[must_use]
    pub fn value(&self) -> i64 {
        self.slider.value()
    }
}

fn mirror_onto(source: &IntControl, target: &Rc<IntControl>) {
    let target: Weak<IntControl> = Rc::downgrade(target);
    source.value_changed.connect(move |value| {
        if let Some(target) = target.upgrade() {
            target.set_value(*value);
        }
    });
}
