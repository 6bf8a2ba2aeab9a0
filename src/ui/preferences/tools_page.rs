//! Tools preferences page implementation.
//!
//! This module implements the Tools preferences tab, which shows the job
//! log appearance and the music view magnifier settings.

use std::rc::Rc;

use {
    libadwaita::{
        ActionRow, PreferencesGroup, PreferencesPage, SwitchRow,
        gtk::AccessibleRole::Group,
        prelude::{ActionRowExt, PreferencesGroupExt, PreferencesPageExt},
    },
    tracing::debug,
};

use crate::{
    prefs::{
        Label, MirroredPair, PreferencesPanel, ToolsPage, log_tool::LogTool, music_view::MusicView,
    },
    ui::preferences::utils::{
        bind_group_title, bind_page_title, bind_row_label, bind_switch_row, float_spin_button,
        font_drop_down, int_slider, int_spin_button, suffix_label,
    },
};

/// Tools preferences page with log and music view settings.
pub struct ToolsPreferencesPage {
    /// The underlying Libadwaita preferences page widget.
    pub widget: PreferencesPage,
    /// Model the widgets are bound to.
    pub model: Rc<ToolsPage>,
}

impl ToolsPreferencesPage {
    /// Creates the page widgets for `model`.
    ///
    /// # Arguments
    ///
    /// * `model` - Translated page model, usually already loaded
    ///
    /// # Returns
    ///
    /// A new `ToolsPreferencesPage` instance.
    pub fn new(model: Rc<ToolsPage>) -> Self {
        let widget = PreferencesPage::builder()
            .icon_name("applications-utilities-symbolic")
            .accessible_role(Group)
            .build();
        // Titles follow the model, so a later translate_ui repaints them
        bind_page_title(&widget, &model.title);

        widget.add(&log_tool_group(&model.log_tool));
        widget.add(&music_view_group(&model.music_view));

        debug!("ToolsPreferencesPage: Created");

        Self { widget, model }
    }
}

/// Builds the log group: font family and size, then the two toggles.
fn log_tool_group(log_tool: &LogTool) -> PreferencesGroup {
    let group = PreferencesGroup::new();
    bind_group_title(&group, &log_tool.group().title);

    // Family drop-down and point size share one row
    let font_row = ActionRow::new();
    bind_row_label(&font_row, &log_tool.font_label);
    font_row.add_suffix(&font_drop_down(&log_tool.font_chooser));
    font_row.add_suffix(&float_spin_button(&log_tool.font_size));
    group.add(&font_row);

    for toggle in [&log_tool.show_log, &log_tool.raw_view] {
        let row = SwitchRow::new();
        bind_row_label(&row, &toggle.label);
        bind_switch_row(&row, toggle);
        group.add(&row);
    }

    group
}

/// Builds the magnifier group: one slider row per mirrored pair.
fn music_view_group(music_view: &MusicView) -> PreferencesGroup {
    let group = PreferencesGroup::new();
    bind_group_title(&group, &music_view.group().title);

    group.add(&mirrored_pair_row(&music_view.size_label, &music_view.size));
    group.add(&mirrored_pair_row(&music_view.scale_label, &music_view.scale));

    group
}

fn mirrored_pair_row(label: &Label, pair: &MirroredPair) -> ActionRow {
    let row = ActionRow::new();
    bind_row_label(&row, label);

    // Slider and spin box edit the same value; the unit label trails them
    row.add_suffix(&int_slider(&pair.slider));
    row.add_suffix(&int_spin_button(&pair.spin_box));
    row.add_suffix(&suffix_label(&pair.spin_box));

    row
}
