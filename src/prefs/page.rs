//! The "Tools" preferences page and its unsaved-changes tracking.

use std::{
    cell::{Cell, RefCell},
    rc::{Rc, Weak},
};

use {
    async_channel::{Receiver, Sender, unbounded},
    tracing::debug,
};

use crate::{
    config::{SettingsError, SettingsStore},
    i18n::Translator,
    prefs::{
        controls::Label,
        group::PreferencesPanel,
        log_tool::LogTool,
        music_view::MusicView,
        signal::Signal,
    },
};

/// Page lifecycle events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEvent {
    /// Settings were loaded into the controls; the page is clean.
    Loaded,
    /// The page went from clean to having unsaved edits.
    Changed,
    /// Edits were written to the settings store; the page is clean.
    Saved,
}

/// Dirty flag and subscribers, shared with the change handlers.
#[derive(Debug, Default)]
struct PageState {
    /// Fed by every panel; blocked while loading.
    changed: Signal<()>,
    dirty: Cell<bool>,
    /// List of active subscribers for manual broadcast fan-out.
    subscribers: RefCell<Vec<Sender<PageEvent>>>,
}

impl PageState {
    fn mark_dirty(&self) {
        if !self.dirty.replace(true) {
            debug!("ToolsPage: Marked as changed");
            self.broadcast_event(PageEvent::Changed);
        }
    }

    /// Sends `event` to all subscribers, dropping closed channels.
    fn broadcast_event(&self, event: PageEvent) {
        self.subscribers
            .borrow_mut()
            .retain(|tx| tx.try_send(event).is_ok());
    }
}

/// Log and music view preferences shown together on one page.
pub struct ToolsPage {
    /// Page heading.
    pub title: Label,
    pub log_tool: Rc<LogTool>,
    pub music_view: Rc<MusicView>,
    state: Rc<PageState>,
}

impl ToolsPage {
    /// Creates the page and translates it.
    ///
    /// # Arguments
    ///
    /// * `font_families` - Installed font families for the log font chooser
    /// * `translator` - Translator for the display strings
    #[must_use]
    pub fn new(font_families: Vec<String>, translator: &dyn Translator) -> Self {
        let state = Rc::new(PageState::default());

        let weak_state: Weak<PageState> = Rc::downgrade(&state);
        state.changed.connect(move |_| {
            if let Some(state) = weak_state.upgrade() {
                state.mark_dirty();
            }
        });

        let page = Self {
            title: Label::new(),
            log_tool: Rc::new(LogTool::new(font_families, translator)),
            music_view: Rc::new(MusicView::new(translator)),
            state,
        };

        for panel in page.panels() {
            let weak_state = Rc::downgrade(&page.state);
            panel.group().changed.connect(move |_| {
                if let Some(state) = weak_state.upgrade() {
                    state.changed.emit(&());
                }
            });
        }

        page.title.set_text(translator.gettext("Tools"));
        page
    }

    /// The panels in display order.
    #[must_use]
    pub fn panels(&self) -> Vec<Rc<dyn PreferencesPanel>> {
        vec![
            self.log_tool.clone() as Rc<dyn PreferencesPanel>,
            self.music_view.clone() as Rc<dyn PreferencesPanel>,
        ]
    }

    /// Re-translates every display string, e.g. after a language change.
    ///
    /// Bound views follow through the labels' change signals.
    pub fn translate_ui(&self, translator: &dyn Translator) {
        self.title.set_text(translator.gettext("Tools"));
        for panel in self.panels() {
            panel.translate_ui(translator);
        }
    }

    /// Loads all panels from `store` and leaves the page clean.
    pub fn load_settings(&self, store: &SettingsStore) {
        {
            let _blocker = self.state.changed.block();
            for panel in self.panels() {
                panel.load_settings(store);
            }
        }

        self.state.dirty.set(false);
        self.state.broadcast_event(PageEvent::Loaded);
        debug!("ToolsPage: Loaded settings");
    }

    /// Saves all panels, flushes `store` to disk and leaves the page clean.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if the store cannot be written. The page
    /// stays dirty in that case.
    pub fn save_settings(&self, store: &SettingsStore) -> Result<(), SettingsError> {
        for panel in self.panels() {
            panel.save_settings(store);
        }
        store.sync()?;

        self.state.dirty.set(false);
        self.state.broadcast_event(PageEvent::Saved);
        debug!("ToolsPage: Saved settings");
        Ok(())
    }

    /// Whether the page has unsaved edits.
    #[must_use]
    pub fn is_changed(&self) -> bool {
        self.state.dirty.get()
    }

    /// Subscribes to page lifecycle events.
    #[must_use]
    pub fn subscribe(&self) -> Receiver<PageEvent> {
        let (tx, rx) = unbounded();
        self.state.subscribers.borrow_mut().push(tx);
        rx
    }
}
