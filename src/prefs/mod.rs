//! Toolkit-independent model of the "Tools" preferences page.
//!
//! Controls, field controllers, groups and the page live here so that the
//! load/save and change-tracking rules can be exercised without a display.
//! The `ui` module binds these to Libadwaita widgets.


pub mod controls;
pub mod field;
pub mod group;
pub mod log_tool;
pub mod music_view;
pub mod page;
pub mod signal;

pub use {
    controls::{FloatControl, FontChooser, IntControl, Label, MirroredPair, Toggle},
    field::Field,
    group::{PreferencesGroup, PreferencesPanel},
    log_tool::LogTool,
    music_view::MusicView,
    page::{PageEvent, ToolsPage},
    signal::{Signal, SignalBlocker},
};
