//! Two-way bindings between model controls and GTK widgets.
//!
//! The model control is the source of truth. Widget edits are forwarded to
//! the control, and the control's `notify` signal repaints the widget,
//! including during settings load when `value_changed` is blocked.

use std::rc::Rc;

use {
    libadwaita::{
        PreferencesGroup, PreferencesPage, PreferencesRow, SwitchRow,
        gtk::{
            Adjustment, Align::Center, DropDown, Label as GtkLabel, Orientation::Horizontal,
            Scale, SpinButton, StringList, Widget, pango::prelude::FontFamilyExt,
        },
        prelude::{
            CastNone, IsA, ObjectExt, PreferencesGroupExt, PreferencesPageExt,
            PreferencesRowExt, RangeExt, WidgetExt,
        },
    },
    tracing::debug,
};

use crate::prefs::{FloatControl, FontChooser, IntControl, Label, Toggle};

/// Lists the font families installed for `widget`'s display, sorted.
#[must_use]
pub fn installed_font_families(widget: &impl WidgetExt) -> Vec<String> {
    let mut families: Vec<String> = widget
        .pango_context()
        .list_families()
        .iter()
        .map(|family| family.name().to_string())
        .collect();
    families.sort_by_key(|family| family.to_lowercase());
    families.dedup();
    debug!("Found {} installed font families", families.len());
    families
}

/// Keeps the page title in step with `label`.
pub fn bind_page_title(page: &PreferencesPage, label: &Label) {
    page.set_title(&label.text());

    let weak_page = page.downgrade();
    label.text_changed.connect(move |text| {
        if let Some(page) = weak_page.upgrade() {
            page.set_title(text);
        }
    });
}

/// Keeps the group title in step with `label`.
pub fn bind_group_title(group: &PreferencesGroup, label: &Label) {
    group.set_title(&label.text());

    let weak_group = group.downgrade();
    label.text_changed.connect(move |text| {
        if let Some(group) = weak_group.upgrade() {
            group.set_title(text);
        }
    });
}

/// Keeps a row's title and tooltip in step with `label`.
pub fn bind_row_label<W>(row: &W, label: &Label)
where
    W: IsA<PreferencesRow> + IsA<Widget>,
{
    row.set_title(&label.text());
    row.set_tooltip_text(label.tooltip().as_deref());

    let weak_row = row.downgrade();
    label.text_changed.connect(move |text| {
        if let Some(row) = weak_row.upgrade() {
            row.set_title(text);
        }
    });

    let weak_row = row.downgrade();
    label.tooltip_changed.connect(move |tooltip| {
        if let Some(row) = weak_row.upgrade() {
            row.set_tooltip_text(tooltip.as_deref());
        }
    });
}

/// Creates a label showing the control's unit suffix.
#[must_use]
pub fn suffix_label(control: &IntControl) -> GtkLabel {
    let label = GtkLabel::new(Some(control.suffix().trim()));

    let weak_label = label.downgrade();
    control.suffix_changed.connect(move |suffix| {
        if let Some(label) = weak_label.upgrade() {
            label.set_text(suffix.trim());
        }
    });

    label
}

/// Binds a switch row to `toggle`.
pub fn bind_switch_row(row: &SwitchRow, toggle: &Rc<Toggle>) {
    row.set_active(toggle.is_checked());

    let weak_row = row.downgrade();
    toggle.notify.connect(move |checked| {
        if let Some(row) = weak_row.upgrade()
            && row.is_active() != *checked
        {
            row.set_active(*checked);
        }
    });

    let toggle = toggle.clone();
    row.connect_active_notify(move |row| toggle.set_checked(row.is_active()));
}

/// Creates a spin button bound to a fractional control.
#[must_use]
pub fn float_spin_button(control: &Rc<FloatControl>) -> SpinButton {
    let (min, max) = control.range();
    let adjustment = Adjustment::new(
        control.value(),
        min,
        max,
        control.single_step(),
        control.single_step() * 4.0,
        0.0,
    );
    let spin_button = SpinButton::builder()
        .adjustment(&adjustment)
        .digits(control.decimals())
        .numeric(true)
        .valign(Center)
        .build();

    let weak_button = spin_button.downgrade();
    control.notify.connect(move |value| {
        if let Some(button) = weak_button.upgrade()
            && button.value() != *value
        {
            button.set_value(*value);
        }
    });

    let control = control.clone();
    spin_button.connect_value_changed(move |button| control.set_value(button.value()));

    spin_button
}

/// Creates a spin button bound to an integer control.
#[must_use]
pub fn int_spin_button(control: &Rc<IntControl>) -> SpinButton {
    let spin_button = SpinButton::builder()
        .adjustment(&int_adjustment(control))
        .digits(0)
        .numeric(true)
        .valign(Center)
        .build();

    let weak_button = spin_button.downgrade();
    control.notify.connect(move |value| {
        if let Some(button) = weak_button.upgrade()
            && button.value_as_int() != *value as i32
        {
            button.set_value(*value as f64);
        }
    });

    let control = control.clone();
    spin_button
        .connect_value_changed(move |button| control.set_value(i64::from(button.value_as_int())));

    spin_button
}

/// Creates a horizontal slider bound to an integer control.
#[must_use]
pub fn int_slider(control: &Rc<IntControl>) -> Scale {
    let scale = Scale::builder()
        .orientation(Horizontal)
        .adjustment(&int_adjustment(control))
        .draw_value(false)
        .hexpand(true)
        .width_request(200)
        .build();

    let weak_scale = scale.downgrade();
    control.notify.connect(move |value| {
        if let Some(scale) = weak_scale.upgrade()
            && scale.value().round() as i64 != *value
        {
            scale.set_value(*value as f64);
        }
    });

    let control = control.clone();
    scale.connect_value_changed(move |scale| control.set_value(scale.value().round() as i64));

    scale
}

fn int_adjustment(control: &IntControl) -> Adjustment {
    let (min, max) = control.range();
    let step = control.single_step() as f64;
    Adjustment::new(
        control.value() as f64,
        min as f64,
        max as f64,
        step,
        step * 2.0,
        0.0,
    )
}

/// Creates a drop-down of the chooser's families bound to its current
/// family.
///
/// A current family that is not installed is appended, so the stored
/// choice stays visible.
#[must_use]
pub fn font_drop_down(chooser: &Rc<FontChooser>) -> DropDown {
    let mut families = chooser.families();
    let current = chooser.current_family();
    if !families.contains(&current) {
        families.push(current.clone());
    }

    let family_refs: Vec<&str> = families.iter().map(String::as_str).collect();
    let model = StringList::new(&family_refs);
    let drop_down = DropDown::builder()
        .model(&model)
        .valign(Center)
        .build();
    select_family(&drop_down, &model, &current);

    let weak_drop_down = drop_down.downgrade();
    let weak_model = model.downgrade();
    chooser.notify.connect(move |family| {
        if let (Some(drop_down), Some(model)) = (weak_drop_down.upgrade(), weak_model.upgrade()) {
            select_family(&drop_down, &model, family);
        }
    });

    let chooser = chooser.clone();
    drop_down.connect_selected_notify(move |drop_down| {
        if let Some(model) = drop_down.model().and_downcast::<StringList>()
            && let Some(family) = model.string(drop_down.selected())
        {
            chooser.set_current_family(&family);
        }
    });

    drop_down
}

fn select_family(drop_down: &DropDown, model: &StringList, family: &str) {
    let mut index = 0;
    while let Some(entry) = model.string(index) {
        if entry.as_str() == family {
            if drop_down.selected() != index {
                drop_down.set_selected(index);
            }
            return;
        }
        index += 1;
    }

    model.append(family);
    drop_down.set_selected(index);
}
