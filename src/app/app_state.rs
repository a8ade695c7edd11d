use std::sync::mpsc::{self, Receiver};

use crate::config::Config;
use crate::documents::{Document, DocumentId, DocumentRegistry};
use crate::editor::{EditorBuffers, normalize_paste};
use crate::error::WordtabError;
use crate::files::{self, OpenedFile};
use crate::notification::NotificationState;
use crate::prompt::{PromptKind, PromptState};
use crate::stats::StatisticsSnapshot;
use crate::tabs::TabStrip;

/// Terminal front end state
///
/// The registry is the source of truth for documents, the active id and
/// statistics. The tab strip mirrors the registry in display order, and
/// after every operation `tabs.selected() == registry.active_id()`.
pub struct App {
    pub registry: DocumentRegistry,
    pub tabs: TabStrip,
    pub editors: EditorBuffers,
    pub prompt: PromptState,
    pub notification: NotificationState,
    /// Latest snapshot received from the registry subscription
    pub stats: StatisticsSnapshot,
    pub stats_popup_visible: bool,
    pub show_most_common_word: bool,
    pub should_quit: bool,
    stats_rx: Receiver<StatisticsSnapshot>,
}

impl App {
    /// Build the app with the given files open, last one active.
    /// With no files a single untitled document is created.
    pub fn new(config: &Config, files: Vec<OpenedFile>) -> Self {
        let mut registry = DocumentRegistry::with_default_name(config.editor.default_name.as_str());

        let (stats_tx, stats_rx) = mpsc::channel();
        registry.subscribe(move |snapshot| {
            // The receiver lives as long as the app that owns the registry
            let _ = stats_tx.send(snapshot.clone());
        });

        let mut app = Self {
            registry,
            tabs: TabStrip::new(),
            editors: EditorBuffers::new(config.editor.placeholder.as_str()),
            prompt: PromptState::new(),
            notification: NotificationState::new(),
            stats: StatisticsSnapshot::default(),
            stats_popup_visible: false,
            show_most_common_word: config.stats.show_most_common_word,
            should_quit: false,
            stats_rx,
        };

        if files.is_empty() {
            app.new_document();
        } else {
            for file in files {
                app.open_document(file);
            }
        }
        app.poll_stats();

        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Drain published snapshots, keeping the newest. Returns true if any arrived.
    pub fn poll_stats(&mut self) -> bool {
        let mut updated = false;
        while let Ok(snapshot) = self.stats_rx.try_recv() {
            self.stats = snapshot;
            updated = true;
        }
        updated
    }

    pub fn active_document(&self) -> Option<&Document> {
        self.registry.active_document()
    }

    pub fn new_document(&mut self) -> DocumentId {
        let id = self.registry.create_document("");
        self.editors.open(id, "");
        self.tabs.push(id);
        id
    }

    pub fn open_document(&mut self, file: OpenedFile) -> DocumentId {
        let id = self.registry.create_named(file.name, Some(file.path), file.text);
        let text = self.registry.get(id).map(Document::text).unwrap_or("");
        self.editors.open(id, text);
        self.tabs.push(id);
        id
    }

    /// Open the file named by prompt input. Failures become an error notification.
    pub fn open_path(&mut self, input: &str) {
        let result = files::resolve_input_path(input).and_then(|path| files::read_document(&path));

        match result {
            Ok(file) => {
                let message = format!("Opened {}", file.name);
                self.open_document(file);
                self.notification.show(&message);
            }
            Err(e) => self.notification.show_error(&e.to_string()),
        }
    }

    /// Write the active document to the path named by prompt input
    pub fn save_active_to(&mut self, input: &str) {
        match self.try_save_active(input) {
            Ok(name) => self.notification.show(&format!("Saved {}", name)),
            Err(e) => self.notification.show_error(&e.to_string()),
        }
    }

    fn try_save_active(&mut self, input: &str) -> Result<String, WordtabError> {
        let id = self
            .registry
            .active_id()
            .ok_or(WordtabError::NoActiveDocument)?;
        let path = files::resolve_input_path(input)?;
        let name = files::write_document(&path, self.registry.active_text())?;
        self.registry.mark_saved(id, path, name.as_str());
        Ok(name)
    }

    pub fn open_open_prompt(&mut self) {
        self.prompt.open(PromptKind::Open, "");
    }

    /// Show the save prompt, pre-filled with the document's current path
    pub fn open_save_prompt(&mut self) {
        let Some(document) = self.registry.active_document() else {
            self.notification
                .show_error(&WordtabError::NoActiveDocument.to_string());
            return;
        };

        let initial = document
            .path()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.prompt.open(PromptKind::SaveAs, &initial);
    }

    /// Show the rename prompt, pre-filled with the current tab name
    pub fn open_rename_prompt(&mut self) {
        let Some(document) = self.registry.active_document() else {
            self.notification
                .show_error(&WordtabError::NoActiveDocument.to_string());
            return;
        };

        let initial = document.name().to_string();
        self.prompt.open(PromptKind::Rename, &initial);
    }

    /// Change the tab name of the active document. The file on disk is untouched.
    pub fn rename_active(&mut self, input: &str) {
        let Some(id) = self.registry.active_id() else {
            self.notification
                .show_error(&WordtabError::NoActiveDocument.to_string());
            return;
        };

        let name = input.trim();
        if name.is_empty() {
            self.notification
                .show_error(&WordtabError::EmptyPath.to_string());
            return;
        }

        self.registry.rename(id, name);
        self.notification.show(&format!("Renamed to {}", name));
    }

    /// Close the active tab and activate the neighbour the tab strip picks
    pub fn close_active(&mut self) {
        let Some(id) = self.registry.active_id() else {
            return;
        };

        let next = self.tabs.remove(id);
        self.editors.close(id);
        self.registry.close_document(id);

        if next.is_some() {
            self.registry.set_active(next);
        }
    }

    pub fn select_next_tab(&mut self) {
        if let Some(id) = self.tabs.select_next() {
            self.registry.set_active(Some(id));
        }
    }

    pub fn select_previous_tab(&mut self) {
        if let Some(id) = self.tabs.select_previous() {
            self.registry.set_active(Some(id));
        }
    }

    pub fn toggle_stats_popup(&mut self) {
        if self.show_most_common_word {
            self.stats_popup_visible = !self.stats_popup_visible;
        }
    }

    /// Insert pasted text into the prompt or the active editor
    pub fn paste(&mut self, text: &str) {
        if self.prompt.is_visible() {
            self.prompt.paste(text);
            return;
        }

        let Some(id) = self.registry.active_id() else {
            return;
        };
        if let Some(new_text) = self.editors.insert_str(id, &normalize_paste(text)) {
            self.registry.update_text(id, &new_text);
        }
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
